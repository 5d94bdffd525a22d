//! Descriptor text decoding

use serde_json::Value;

use crate::version::error::ParseError;

/// Decode descriptor text into a JSON document.
///
/// Lines whose first non-blank character is `#` are treated as comments and
/// dropped before decoding.
pub fn decode_document(text: &str) -> Result<Value, ParseError> {
    let stripped: String = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(serde_json::from_str(&stripped)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_document_parses_plain_json() {
        let doc = decode_document(r#"{"modName": "LazyLib"}"#).unwrap();

        assert_eq!(doc, json!({"modName": "LazyLib"}));
    }

    #[test]
    fn decode_document_skips_comment_lines() {
        let text = r#"
            # Version descriptor for LazyLib
            {
                "modName": "LazyLib",
                # patch is a string so "2b" works
                "modVersion": {"major": 2, "patch": "2b"}
            }
        "#;

        let doc = decode_document(text).unwrap();

        assert_eq!(
            doc,
            json!({"modName": "LazyLib", "modVersion": {"major": 2, "patch": "2b"}})
        );
    }

    #[test]
    fn decode_document_keeps_hash_inside_values() {
        let doc = decode_document(r#"{"masterVersionFile": "https://example.com/a#b"}"#).unwrap();

        assert_eq!(doc["masterVersionFile"], "https://example.com/a#b");
    }

    #[test]
    fn decode_document_returns_decode_error_for_malformed_text() {
        let result = decode_document("{ not json");

        assert!(matches!(result, Err(ParseError::Decode(_))));
    }
}
