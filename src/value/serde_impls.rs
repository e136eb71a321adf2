//! [`Navigable`] implementations for `serde_json` and `serde_yaml` values.
//!
//! `null` is treated as an empty indirection layer, so a path through a null
//! resolves to absent rather than failing.

use super::shape::{Entries, MapKey, Mapping, Navigable, Scalar, Shape};

fn json_number(n: &serde_json::Number) -> Scalar<'static> {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::Uint(u)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl Navigable for serde_json::Value {
    fn shape(&self) -> Shape<'_> {
        use serde_json::Value as Json;

        match self {
            Json::Null => Shape::Indirect(None),
            Json::Bool(b) => Shape::Scalar(Scalar::Bool(*b)),
            Json::Number(n) => Shape::Scalar(json_number(n)),
            Json::String(s) => Shape::Scalar(Scalar::Str(s)),
            Json::Array(items) => Shape::Sequence(items),
            Json::Object(fields) => Shape::Mapping(fields),
        }
    }
}

impl Mapping for serde_json::Map<String, serde_json::Value> {
    fn entries(&self) -> Entries<'_> {
        Box::new(
            self.iter()
                .map(|(k, v)| (MapKey::Str(k.as_str()), v as &dyn Navigable)),
        )
    }

    fn lookup(&self, key: &str) -> Option<&dyn Navigable> {
        self.get(key).map(|v| v as &dyn Navigable)
    }

    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Scalar<'static> {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::Uint(u)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn yaml_key(key: &serde_yaml::Value) -> MapKey<'_> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => MapKey::Str(s),
        Yaml::Bool(b) => MapKey::Bool(*b),
        Yaml::Number(n) => n.as_i64().map_or(MapKey::Other, MapKey::Int),
        _ => MapKey::Other,
    }
}

impl Navigable for serde_yaml::Value {
    fn shape(&self) -> Shape<'_> {
        use serde_yaml::Value as Yaml;

        match self {
            Yaml::Null => Shape::Indirect(None),
            Yaml::Bool(b) => Shape::Scalar(Scalar::Bool(*b)),
            Yaml::Number(n) => Shape::Scalar(yaml_number(n)),
            Yaml::String(s) => Shape::Scalar(Scalar::Str(s)),
            Yaml::Sequence(items) => Shape::Sequence(items),
            Yaml::Mapping(entries) => Shape::Mapping(entries),
            Yaml::Tagged(tagged) => Shape::Indirect(Some(&tagged.value as &dyn Navigable)),
        }
    }
}

impl Mapping for serde_yaml::Mapping {
    fn entries(&self) -> Entries<'_> {
        Box::new(self.iter().map(|(k, v)| (yaml_key(k), v as &dyn Navigable)))
    }

    fn len(&self) -> usize {
        serde_yaml::Mapping::len(self)
    }
}
