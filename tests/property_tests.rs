//! Property-based tests for the core round-trip and normalization
//! guarantees, across generated marker-free keys and values.

use proptest::prelude::*;
use smdl::{parse, Document};

proptest! {
    // Documents built through `set` from flag and plain-string attributes
    // round-trip through render/parse with order and values intact.
    #[test]
    fn prop_round_trip_flat(
        entries in prop::collection::btree_map(
            "[a-z][a-z0-9_]{0,7}",
            prop::option::of("[a-z0-9]{1,12}"),
            1..8,
        )
    ) {
        let mut document = Document::new();
        for (key, value) in &entries {
            document.set(key, value.as_deref());
        }

        let reparsed = parse(&document.to_string()).unwrap();
        prop_assert_eq!(
            document.attributes().collect::<Vec<_>>(),
            reparsed.attributes().collect::<Vec<_>>(),
        );
    }

    #[test]
    fn prop_integers_round_trip(key in "[a-z]{1,8}", n in any::<i64>()) {
        let mut document = Document::new();
        document.set_value(&key, n);

        let reparsed = parse(&document.to_string()).unwrap();
        prop_assert_eq!(reparsed.i64_value(&key).unwrap(), n);
    }

    // Storing a document-shaped value is stable: re-setting either the
    // original text or the normalized form changes nothing.
    #[test]
    fn prop_nested_set_is_idempotent(
        entries in prop::collection::btree_map(
            "[a-z][a-z0-9_]{0,7}",
            "[a-z0-9]{1,12}",
            1..6,
        )
    ) {
        let mut nested = Document::new();
        for (key, value) in &entries {
            nested.set(key, Some(value));
        }
        let rendered = nested.to_string();

        let mut owner = Document::new();
        owner.set("nested", Some(&rendered));
        let first = owner.string_value("nested").unwrap().to_owned();

        owner.set("nested", Some(&rendered));
        prop_assert_eq!(owner.string_value("nested").unwrap(), first.as_str());

        owner.set("nested", Some(&first));
        prop_assert_eq!(owner.string_value("nested").unwrap(), first.as_str());
    }

    // Whatever depth a value's marker runs encode, `set` stores it
    // re-rendered for the owner's nesting position.
    #[test]
    fn prop_set_normalizes_depth(run_len in 1usize..5) {
        let text = format!("{} x: 1", "&".repeat(run_len));

        let mut owner = Document::new();
        owner.set("obj", Some(&text));
        prop_assert_eq!(owner.string_value("obj").unwrap(), "\n  && x: 1");
    }
}
