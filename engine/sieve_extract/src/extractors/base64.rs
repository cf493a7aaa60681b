//! The `base64` extractor.
//!
//! Standard-alphabet, padded base64. Decodes the raw string into bytes,
//! then interprets those bytes as UTF-8, yielding a string value. Fails
//! with `MalformedBase64` on alphabet/padding errors and `InvalidUtf8`
//! when the decoded bytes are not a valid UTF-8 sequence.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

use crate::{DecodeError, DecodeResult, ExtractorDefinition, Value};

/// `base64` extractor definition.
pub struct Base64Extractor;

impl ExtractorDefinition for Base64Extractor {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn decode(&self, raw: &str, _args: Option<&str>) -> DecodeResult {
        let bytes = STANDARD.decode(raw).map_err(|e| {
            trace!(error = %e, "base64 decode failed");
            DecodeError::MalformedBase64 {
                detail: e.to_string(),
            }
        })?;
        let text = String::from_utf8(bytes).map_err(|e| {
            trace!(error = %e, "base64 output is not utf-8");
            DecodeError::InvalidUtf8 {
                detail: e.to_string(),
            }
        })?;
        Ok(Value::string(text))
    }
}

/// Encode bytes into a base64 string.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn decode(raw: &str) -> DecodeResult {
        Base64Extractor.decode(raw, None)
    }

    #[test]
    fn decodes_embedded_json_document() {
        // base64 of `{"snot": "badger"}\n`
        let value = decode("eyJzbm90IjogImJhZGdlciJ9Cg==").unwrap();
        assert_eq!(value, Value::string("{\"snot\": \"badger\"}\n"));
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(decode("").unwrap(), Value::string(""));
    }

    #[test]
    fn invalid_alphabet_fails() {
        let err = decode("not base64!").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedBase64 { .. }));
    }

    #[test]
    fn invalid_padding_fails() {
        let err = decode("eyJzbm90=").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedBase64 { .. }));
    }

    #[test]
    fn non_utf8_output_fails() {
        // 0xff 0xfe is not a valid UTF-8 sequence.
        let raw = encode(&[0xff, 0xfe]);
        let err = decode(&raw).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidUtf8 { .. }));
    }

    proptest! {
        #[test]
        fn encode_decode_round_trips_utf8(text in "\\PC*") {
            let value = decode(&encode(text.as_bytes())).unwrap();
            prop_assert_eq!(value, Value::string(text));
        }

        #[test]
        fn arbitrary_bytes_decode_or_fail_cleanly(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
            // decode(encode(b)) must never panic; it succeeds iff the
            // bytes are valid UTF-8.
            let result = decode(&encode(&bytes));
            prop_assert_eq!(result.is_ok(), std::str::from_utf8(&bytes).is_ok());
        }

        #[test]
        fn arbitrary_input_never_panics(raw in "\\PC*") {
            let _ = decode(&raw);
        }
    }
}
