//! serde interop: documents as maps, checked against serde_json.

use serde_json::json;
use smdl::{parse, Document};

#[test]
fn test_serialize_shapes() {
    let document = parse("& a: 1\n& b\n& obj: \n  && x: 1").unwrap();
    let value = serde_json::to_value(&document).unwrap();

    assert_eq!(value, json!({"a": "1", "b": null, "obj": {"x": "1"}}));
}

#[test]
fn test_serialize_single_attribute() {
    let document = parse("& a: 1\n& b").unwrap();

    assert_eq!(
        serde_json::to_value(document.get("a").unwrap()).unwrap(),
        json!({"a": "1"}),
    );
    assert_eq!(
        serde_json::to_value(document.get("b").unwrap()).unwrap(),
        json!({"b": null}),
    );
}

#[test]
fn test_deserialize_scalars_and_nulls() {
    let document: Document =
        serde_json::from_value(json!({"name": "Violet", "retries": 3, "pinned": null})).unwrap();

    assert_eq!(document.string_value("name").unwrap(), "Violet");
    assert_eq!(document.i64_value("retries").unwrap(), 3);
    assert!(!document.get("pinned").unwrap().has_value());
}

#[test]
fn test_deserialize_nested_maps() {
    let document: Document =
        serde_json::from_value(json!({"server": {"host": "127.0.0.1", "port": 8080}})).unwrap();

    // Nested text is stored normalized; one render/parse pass reads it back.
    let reparsed = parse(&document.to_string()).unwrap();
    let server = reparsed.document_value("server").unwrap();
    assert_eq!(server.string_value("host").unwrap(), "127.0.0.1");
    assert_eq!(server.i64_value("port").unwrap(), 8080);
}

#[test]
fn test_value_round_trip() {
    // SMDL values are untyped text, so scalars come back stringified but the
    // shape is preserved exactly.
    let original = json!({"a": "1", "flag": null, "obj": {"x": "true"}});

    let document: Document = serde_json::from_value(original.clone()).unwrap();
    let back = serde_json::to_value(&document).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_sequences_are_rejected() {
    assert!(serde_json::from_value::<Document>(json!({"a": [1, 2, 3]})).is_err());
    assert!(serde_json::from_value::<Document>(json!([1, 2, 3])).is_err());
    assert!(serde_json::from_value::<Document>(json!("text")).is_err());
}
