//! The `json` extractor.
//!
//! Attempts to parse the raw string as a JSON document. Succeeds with
//! the parsed value on well-formed input; fails with `MalformedJson`
//! otherwise. No partial success: a document that parses halfway is a
//! failure.
//!
//! Object key order is preserved end to end (`serde_json` with
//! `preserve_order` feeding the insertion-ordered `Record`).

use tracing::trace;

use crate::{DecodeError, DecodeResult, ExtractorDefinition, Record, Value};

/// `json` extractor definition.
pub struct JsonExtractor;

impl ExtractorDefinition for JsonExtractor {
    fn name(&self) -> &'static str {
        "json"
    }

    fn decode(&self, raw: &str, _args: Option<&str>) -> DecodeResult {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(parsed) => Ok(from_json(parsed)),
            Err(e) => {
                trace!(error = %e, "json decode failed");
                Err(DecodeError::MalformedJson {
                    detail: e.to_string(),
                })
            }
        }
    }
}

/// Encode a value back into a JSON string.
pub fn encode(value: &Value) -> String {
    to_json(value).to_string()
}

fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                // Fractional or out-of-i64-range numbers.
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::string(s),
        serde_json::Value::Array(items) => {
            Value::list(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(entries) => Value::record(
            entries
                .into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect::<Record>(),
        ),
    }
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::Number(serde_json::Number::from(*n)),
        // JSON has no NaN/infinity; they encode as null.
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Str(s) => serde_json::Value::String(s.to_string()),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Record(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn decode(raw: &str) -> DecodeResult {
        JsonExtractor.decode(raw, None)
    }

    #[test]
    fn decodes_scalars() {
        assert_eq!(decode("null").unwrap(), Value::Null);
        assert_eq!(decode("true").unwrap(), Value::Bool(true));
        assert_eq!(decode("42").unwrap(), Value::Int(42));
        assert_eq!(decode("4.5").unwrap(), Value::Float(4.5));
        assert_eq!(decode("\"snot\"").unwrap(), Value::string("snot"));
    }

    #[test]
    fn decodes_nested_document() {
        let value = decode(r#"{"snot": {"badger": [1, 2]}}"#).unwrap();
        let inner = value.get("snot").unwrap();
        assert_eq!(
            inner.get("badger").unwrap(),
            &Value::list(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn preserves_object_key_order() {
        let value = decode(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = value
            .as_record()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn malformed_input_fails() {
        // Missing closing brace.
        let err = decode(r#"{"snot": "badger""#).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedJson { .. }));

        let err = decode("").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedJson { .. }));
    }

    #[test]
    fn no_partial_success_on_trailing_garbage() {
        let err = decode(r#"{"snot": 1} trailing"#).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedJson { .. }));
    }

    #[test]
    fn encode_round_trips_fixed_corpus() {
        for raw in [
            "null",
            "[1, 2, 3]",
            r#"{"snot": "badger", "n": [null, 1.5, false]}"#,
            r#"{"a": {"b": {"c": "d"}}}"#,
        ] {
            let first = decode(raw).unwrap();
            let second = decode(&encode(&first)).unwrap();
            assert_eq!(first, second);
        }
    }

    fn value_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            // JSON cannot represent NaN or infinity.
            any::<f64>()
                .prop_filter("finite", |x| x.is_finite())
                .prop_map(Value::Float),
            "[a-z0-9 ]{0,12}".prop_map(Value::string),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::list),
                prop::collection::vec(("[a-z]{1,8}", inner), 0..6)
                    .prop_map(|pairs| Value::record(pairs.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn decode_encode_round_trips(value in value_strategy()) {
            let decoded = decode(&encode(&value)).unwrap();
            prop_assert_eq!(decoded, value);
        }

        #[test]
        fn arbitrary_input_never_panics(raw in "\\PC*") {
            // Success or MalformedJson, never a crash.
            let _ = decode(&raw);
        }
    }
}
