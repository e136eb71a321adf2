//! `serde` view over any [`Navigable`] value.

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::deref::{unwrap_layers, Layers, DEFAULT_MAX_INDIRECTION};
use super::shape::{MapKey, Navigable, Scalar, Shape};

/// Serializes a borrowed [`Navigable`] value.
///
/// Records and mappings become maps, sequences become sequences, empty
/// indirection becomes null. Mapping entries whose key has no string,
/// integer or boolean form are skipped. Opaque references fail.
///
/// # Example
///
/// ```
/// use dotpath::value::{Serializable, Value};
///
/// let value = Value::record([("id", Value::Int(7))]);
/// let json = serde_json::to_string(&Serializable::new(&value)).unwrap();
/// assert_eq!(json, r#"{"id":7}"#);
/// ```
#[derive(Clone, Copy)]
pub struct Serializable<'a> {
    value: &'a dyn Navigable,
}

impl<'a> Serializable<'a> {
    pub fn new(value: &'a dyn Navigable) -> Self {
        Self { value }
    }
}

impl Serialize for Serializable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match unwrap_layers(self.value, DEFAULT_MAX_INDIRECTION) {
            Layers::Found(value) => value,
            Layers::Empty => return serializer.serialize_unit(),
            Layers::Opaque => return Err(S::Error::custom("cannot serialize opaque reference")),
            Layers::TooDeep => return Err(S::Error::custom("too many indirection layers")),
        };

        match value.shape() {
            Shape::Scalar(scalar) => serialize_scalar(scalar, serializer),
            Shape::Record(record) => {
                let names = record.field_names();
                let mut map = serializer.serialize_map(Some(names.len()))?;
                for name in names {
                    if let Some(field) = record.field(name) {
                        map.serialize_entry(name, &Serializable::new(field))?;
                    }
                }
                map.end()
            }
            Shape::Mapping(mapping) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, entry) in mapping.entries() {
                    let entry = Serializable::new(entry);
                    match key {
                        MapKey::Str(s) => map.serialize_entry(s, &entry)?,
                        MapKey::Int(i) => map.serialize_entry(&i, &entry)?,
                        MapKey::Bool(b) => {
                            map.serialize_entry(if b { "true" } else { "false" }, &entry)?
                        }
                        MapKey::Other => continue,
                    }
                }
                map.end()
            }
            Shape::Sequence(sequence) => {
                let len = sequence.len();
                let mut seq = serializer.serialize_seq(Some(len))?;
                for index in 0..len {
                    match sequence.element(index) {
                        Some(element) => seq.serialize_element(&Serializable::new(element))?,
                        None => seq.serialize_element(&())?,
                    }
                }
                seq.end()
            }
            // unwrap_layers never stops on these
            Shape::Indirect(_) | Shape::Opaque => serializer.serialize_unit(),
        }
    }
}

fn serialize_scalar<S: Serializer>(scalar: Scalar<'_>, serializer: S) -> Result<S::Ok, S::Error> {
    match scalar {
        Scalar::Bool(b) => serializer.serialize_bool(b),
        Scalar::Int(i) => serializer.serialize_i64(i),
        Scalar::Uint(u) => serializer.serialize_u64(u),
        Scalar::Float(f) => serializer.serialize_f64(f),
        Scalar::Char(c) => serializer.serialize_char(c),
        Scalar::Str(s) => serializer.serialize_str(s),
    }
}
