//! Dynamic value representation.
//!
//! [`Value`] is a tagged union able to express every shape the resolver
//! understands, including indirection layers and opaque references. It is
//! what the file loader produces, and a convenient way to build graphs at
//! runtime without writing adapters for concrete types.
//!
//! # Example
//!
//! ```
//! use dotpath::value::Value;
//!
//! let user = Value::record([
//!     ("name", Value::from("Alice")),
//!     ("tags", Value::list(["admin", "ops"])),
//!     ("manager", Value::reference(Value::Null)),
//! ]);
//! assert!(user.is_container());
//! ```

use indexmap::IndexMap;

use super::shape::{Entries, MapKey, Mapping, Navigable, Record, Scalar, Shape};

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value present. Behaves as an empty indirection layer.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integers beyond the range of `Int`
    Uint(u64),
    Float(f64),
    String(String),
    /// Named fields in declaration order
    Record(IndexMap<String, Value>),
    /// Keyed entries; keys may be of any kind but only string keys are addressable
    Map(Vec<(Value, Value)>),
    /// Ordered elements
    List(Vec<Value>),
    /// An indirection layer around another value
    Ref(Box<Value>),
    /// A raw address. Never followed.
    Opaque(usize),
}

impl Value {
    /// Builds a record from `(field, value)` pairs.
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a mapping from `(key, value)` pairs.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<Value>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a list from anything convertible to values.
    pub fn list<T, I>(items: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Wraps `value` in one indirection layer.
    pub fn reference(value: Value) -> Self {
        Value::Ref(Box::new(value))
    }

    /// Returns true for records, maps and lists.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Record(_) | Value::Map(_) | Value::List(_))
    }

    /// Returns true if this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string content of a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer of an `Int` value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the integer of a `Uint` value, or of a non-negative `Int`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint(u) => Some(*u),
            Value::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Returns the number of an `Int`, `Uint` or `Float` value as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Uint(u) => Some(*u as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the flag of a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_map_key(&self) -> MapKey<'_> {
        match self {
            Value::String(s) => MapKey::Str(s),
            Value::Int(i) => MapKey::Int(*i),
            Value::Uint(u) => i64::try_from(*u).map_or(MapKey::Other, MapKey::Int),
            Value::Bool(b) => MapKey::Bool(*b),
            _ => MapKey::Other,
        }
    }
}

impl Navigable for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Indirect(None),
            Value::Bool(b) => Shape::Scalar(Scalar::Bool(*b)),
            Value::Int(i) => Shape::Scalar(Scalar::Int(*i)),
            Value::Uint(u) => Shape::Scalar(Scalar::Uint(*u)),
            Value::Float(f) => Shape::Scalar(Scalar::Float(*f)),
            Value::String(s) => Shape::Scalar(Scalar::Str(s)),
            Value::Record(fields) => Shape::Record(fields),
            Value::Map(entries) => Shape::Mapping(entries),
            Value::List(items) => Shape::Sequence(items),
            Value::Ref(inner) => Shape::Indirect(Some(&**inner as &dyn Navigable)),
            Value::Opaque(_) => Shape::Opaque,
        }
    }
}

impl Record for IndexMap<String, Value> {
    fn field(&self, name: &str) -> Option<&dyn Navigable> {
        self.get(name).map(|v| v as &dyn Navigable)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

impl Mapping for Vec<(Value, Value)> {
    fn entries(&self) -> Entries<'_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (k.as_map_key(), v as &dyn Navigable)),
        )
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

// --- Conversions ---

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Value::Uint(u), Value::Int)
    }
}

/// Picks the narrowest exact representation of a parsed number.
fn number(int: Option<i64>, uint: Option<u64>, float: Option<f64>) -> Value {
    match (int, uint) {
        (Some(i), _) => Value::Int(i),
        (None, Some(u)) => Value::Uint(u),
        (None, None) => Value::Float(float.unwrap_or(f64::NAN)),
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => number(n.as_i64(), n.as_u64(), n.as_f64()),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(yaml: serde_yaml::Value) -> Self {
        use serde_yaml::Value as Yaml;

        match yaml {
            Yaml::Null => Value::Null,
            Yaml::Bool(b) => Value::Bool(b),
            Yaml::Number(n) => number(n.as_i64(), n.as_u64(), n.as_f64()),
            Yaml::String(s) => Value::String(s),
            Yaml::Sequence(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Yaml::Mapping(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Value::from(k), Value::from(v)))
                    .collect(),
            ),
            // tags carry no path semantics; keep the value behind one layer
            Yaml::Tagged(tagged) => Value::reference(Value::from(tagged.value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_empty_layer() {
        assert!(matches!(Value::Null.shape(), Shape::Indirect(None)));
    }

    #[test]
    fn test_record_field_names_keep_order() {
        let value = Value::record([("b", Value::Int(1)), ("a", Value::Int(2))]);
        match value.shape() {
            Shape::Record(record) => assert_eq!(record.field_names(), vec!["b", "a"]),
            _ => panic!("Expected record"),
        }
    }

    #[test]
    fn test_map_lookup_ignores_non_string_keys() {
        let value = Value::map([
            (Value::Int(1), Value::from("int key")),
            (Value::from("1"), Value::from("string key")),
        ]);
        match value.shape() {
            Shape::Mapping(map) => {
                let found = map.lookup("1").unwrap();
                assert_eq!(
                    found.downcast_ref::<Value>(),
                    Some(&Value::from("string key"))
                );
                assert_eq!(map.len(), 2);
            }
            _ => panic!("Expected mapping"),
        }
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_from_yaml_tagged_becomes_reference() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("!custom 5").unwrap();
        assert_eq!(Value::from(yaml), Value::reference(Value::Int(5)));
    }

    #[test]
    fn test_from_json_large_unsigned_stays_exact() {
        let json = serde_json::json!(u64::MAX);
        assert_eq!(Value::from(json), Value::Uint(u64::MAX));
        assert_eq!(Value::from(serde_json::json!(7u64)), Value::Int(7));
    }

    #[test]
    fn test_from_yaml_large_unsigned_stays_exact() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("18446744073709551615").unwrap();
        assert_eq!(Value::from(yaml), Value::Uint(u64::MAX));
    }
}
