//! Tests for the dynamic value type and the serde value adapters.

use dotpath::value::{deref, MapKey, Navigable, Scalar, Shape, Value, DEFAULT_MAX_INDIRECTION};
use serde_json::json;

#[test]
fn test_value_from_json_keeps_structure() {
    let value = Value::from(json!({"a": [1, 2.5, "x", null, true]}));

    assert_eq!(
        value,
        Value::map([(
            "a",
            Value::list([
                Value::Int(1),
                Value::Float(2.5),
                Value::from("x"),
                Value::Null,
                Value::Bool(true),
            ]),
        )])
    );
}

#[test]
fn test_value_from_yaml_non_string_keys() {
    let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes\nname: n\n").unwrap();
    let value = Value::from(yaml);

    let Shape::Mapping(mapping) = value.shape() else {
        panic!("Expected mapping");
    };
    let keys: Vec<MapKey<'_>> = mapping.entries().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![MapKey::Int(1), MapKey::Bool(true), MapKey::Str("name")]
    );
    assert!(mapping.lookup("1").is_none());
    assert!(mapping.lookup("name").is_some());
}

#[test]
fn test_value_shapes() {
    assert!(matches!(Value::Int(1).shape(), Shape::Scalar(Scalar::Int(1))));
    assert!(matches!(Value::Opaque(8).shape(), Shape::Opaque));
    assert!(matches!(
        Value::reference(Value::Null).shape(),
        Shape::Indirect(Some(_))
    ));
    assert_eq!(Value::List(vec![]).shape().kind_name(), "sequence");
    assert_eq!(Value::Null.shape().kind_name(), "empty");
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::from("a").as_str(), Some("a"));
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(Value::Float(1.0).as_i64(), None);
    assert!(Value::default().is_null());
}

#[test]
fn test_deref_through_value_references() {
    let value = Value::reference(Value::reference(Value::Int(9)));
    let inner = deref(&value, DEFAULT_MAX_INDIRECTION).unwrap();
    assert_eq!(inner.downcast_ref::<Value>(), Some(&Value::Int(9)));

    let empty = Value::reference(Value::Null);
    assert!(deref(&empty, DEFAULT_MAX_INDIRECTION).is_none());
}

#[test]
fn test_json_adapter_shapes() {
    let data = json!({"n": 18446744073709551615u64, "neg": -1, "f": 0.5});

    let Shape::Mapping(mapping) = data.shape() else {
        panic!("Expected mapping");
    };
    assert_eq!(mapping.len(), 3);
    let scalar = |key: &str| mapping.lookup(key).and_then(|v| v.as_scalar());
    assert_eq!(scalar("n"), Some(Scalar::Uint(u64::MAX)));
    assert_eq!(scalar("neg"), Some(Scalar::Int(-1)));
    assert_eq!(scalar("f"), Some(Scalar::Float(0.5)));
}

#[test]
fn test_yaml_tag_is_an_indirection_layer() {
    let yaml: serde_yaml::Value = serde_yaml::from_str("!secret hunter2").unwrap();
    let Shape::Indirect(Some(inner)) = yaml.shape() else {
        panic!("Expected indirection");
    };
    assert_eq!(inner.as_scalar(), Some(Scalar::Str("hunter2")));
}

#[test]
fn test_downcast_through_dyn() {
    let value: Box<dyn Navigable> = Box::new(42u32);
    assert!(value.is::<u32>());
    assert_eq!(value.downcast_ref::<u32>(), Some(&42));
    assert_eq!(value.downcast_ref::<u64>(), None);
}
