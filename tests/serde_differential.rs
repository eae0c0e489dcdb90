//! Differential tests against `serde_json`.
//!
//! Documents both parsers accept must produce the same tree, and documents
//! `serde_json` rejects must be rejected here too.

use json_toy::{parse, to_string, Array, ArrayOrder, Object, Value};

/// Convert a `serde_json` tree into a `Value`, preserving member order.
fn from_serde(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::from(n.as_f64().unwrap()),
        serde_json::Value::String(s) => Value::from(s.as_str()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(from_serde).collect::<Array>())
        }
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.as_str(), from_serde(v)))
                .collect::<Object>(),
        ),
    }
}

const ACCEPTED: &[&str] = &[
    "null",
    "true",
    " false ",
    "0",
    "-0.5",
    "12345",
    "1e3",
    "2.5E-3",
    r#""plain""#,
    r#""tab\tnewline\nquote\"slash\/""#,
    r#"[]"#,
    r#"[1, [2, [3, [4]]]]"#,
    r#"{"a": {"b": {"c": [true, false, null]}}}"#,
    r#"{"name": "json-toy", "tags": ["parser", "serializer"], "size": 3.5}"#,
    "\"caf\u{e9} \u{1D11E}\"",
];

const REJECTED: &[&str] = &[
    "",
    "   ",
    "nul",
    "[1,]",
    r#"{"a":1,}"#,
    "01",
    "1.",
    ".1",
    "+1",
    r#""\x""#,
    r#"{"a" 1}"#,
    r#"{1: 2}"#,
    "[1 2]",
    "1e309",
    "\"a\u{1}b\"",
    "[] []",
];

#[test]
fn accepted_documents_match_serde() {
    for text in ACCEPTED {
        let ours = parse(text).unwrap_or_else(|e| panic!("rejected {text:?}: {e}"));
        let theirs: serde_json::Value = serde_json::from_str(text).unwrap();
        assert!(
            ours.eq_with(&from_serde(&theirs), ArrayOrder::Ordered),
            "DIFF: tree mismatch for {text:?}"
        );
    }
}

#[test]
fn rejected_documents_match_serde() {
    for text in REJECTED {
        assert!(
            serde_json::from_str::<serde_json::Value>(text).is_err(),
            "serde_json unexpectedly accepted {text:?}"
        );
        assert!(parse(text).is_err(), "DIFF: accepted {text:?}");
    }
}

#[test]
fn output_reads_back_with_serde() {
    for text in ACCEPTED {
        let ours = parse(text).unwrap();
        let out = to_string(&ours).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(&out)
            .unwrap_or_else(|e| panic!("serde_json rejected our output {out:?}: {e}"));
        assert!(
            ours.eq_with(&from_serde(&theirs), ArrayOrder::Ordered),
            "DIFF: {out:?} read back differently"
        );
    }
}

#[test]
fn control_characters_read_back_with_serde() {
    let value = Value::from("\u{0}\u{1}\u{8}\u{c}\u{1b}\u{1f}");
    let out = to_string(&value).unwrap();
    let theirs: String = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_str(), Some(theirs.as_str()));
}
