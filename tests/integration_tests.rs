use std::io::Cursor;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use smdl::{from_reader, parse, to_writer, Document, Error};

fn sample_config() -> Document {
    let mut server = Document::new();
    server.set("host", Some("127.0.0.1"));
    server.set_value("port", 8080);

    let mut config = Document::new();
    config.set("name", Some("example"));
    config.set_flag("verbose");
    config.set_value("timeout", 2.5);
    config.set("server", Some(&server.to_string()));
    config
}

#[test]
fn test_build_render_reparse() {
    let config = sample_config();
    let reparsed = parse(&config.to_string()).unwrap();

    assert_eq!(reparsed.string_value("name").unwrap(), "example");
    assert!(!reparsed.get("verbose").unwrap().has_value());
    assert_eq!(reparsed.f64_value("timeout").unwrap(), 2.5);

    let server = reparsed.document_value("server").unwrap();
    assert_eq!(server.string_value("host").unwrap(), "127.0.0.1");
    assert_eq!(server.i64_value("port").unwrap(), 8080);
}

#[test]
fn test_rendering_is_stable() {
    let config = sample_config();
    let rendered = config.to_string();
    let again = parse(&rendered).unwrap().to_string();
    assert_eq!(rendered, again);
}

#[test]
fn test_typed_reads() {
    let document = parse("& count: 42\n& ratio: 0.125\n& big: 123456789012345678901234567890").unwrap();

    assert_eq!(document.i64_value("count").unwrap(), 42);
    assert_eq!(document.f64_value("ratio").unwrap(), 0.125);
    assert_eq!(
        document.decimal_value("ratio").unwrap(),
        "0.125".parse::<BigDecimal>().unwrap(),
    );

    // Too large for i64, exact as a BigInt.
    let big = document.integer_value("big").unwrap();
    assert_eq!(big, "123456789012345678901234567890".parse::<BigInt>().unwrap());
    assert_eq!(
        document.i64_value("big").unwrap_err(),
        Error::NumberFormat {
            literal: "123456789012345678901234567890".into(),
        },
    );
}

#[test]
fn test_typed_read_failures() {
    let document = parse("& flag\n& word: hello").unwrap();

    assert_eq!(document.string_value("flag").unwrap_err(), Error::NoValue);
    assert_eq!(
        document.integer_value("flag").unwrap_err(),
        Error::NumberFormat { literal: "".into() },
    );
    assert_eq!(
        document.integer_value("word").unwrap_err(),
        Error::NumberFormat {
            literal: "hello".into(),
        },
    );
    assert_eq!(
        document.string_value("absent").unwrap_err(),
        Error::MissingAttribute {
            key: "absent".into(),
        },
    );

    assert!(document.try_string_value("flag").is_none());
    assert!(document.try_integer_value("word").is_none());
    assert!(document.try_decimal_value("absent").is_none());
    assert!(document.try_document_value("word").is_none());
}

#[test]
fn test_add_rejects_duplicates_set_overwrites() {
    let mut document = parse("& a: 1").unwrap();

    let duplicate = smdl::Attribute::new("a", Some("2".into()), 0);
    assert!(!document.add(duplicate));
    assert_eq!(document.string_value("a").unwrap(), "1");

    document.set("a", Some("2"));
    assert_eq!(document.string_value("a").unwrap(), "2");
    assert_eq!(document.len(), 1);
}

#[test]
fn test_set_moves_key_to_end() {
    let mut document = parse("& a: 1\n& b: 2\n& c: 3").unwrap();
    document.set("a", Some("9"));

    let keys: Vec<_> = document.keys().collect();
    assert_eq!(keys, vec!["b", "c", "a"]);
}

#[test]
fn test_remove_keeps_order() {
    let mut document = parse("& a: 1\n& b: 2\n& c: 3").unwrap();

    assert!(document.remove("b"));
    assert!(!document.remove("b"));
    assert!(!document.contains("b"));

    let keys: Vec<_> = document.keys().collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn test_equality_ignores_depth_and_order() {
    let parsed = parse("& a: 1\n& b").unwrap();

    let mut built = Document::new();
    built.set_flag("b");
    built.set("a", Some("1"));

    // Same keys and values, different insertion order, different attribute
    // depth bookkeeping: still equal.
    assert_eq!(parsed, built);

    built.set("a", Some("2"));
    assert_ne!(parsed, built);
}

#[test]
fn test_reader_and_writer() {
    let config = sample_config();

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &config).unwrap();
    let back = from_reader(Cursor::new(&buffer)).unwrap();
    assert_eq!(config.to_string(), back.to_string());

    assert!(matches!(
        from_reader(Cursor::new(b"plain text")),
        Err(Error::NoParagraphs { depth: None }),
    ));
}
