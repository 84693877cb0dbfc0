//! Top-level key summary for JSON documents.

use std::fmt::Write as _;

use serde_json::Value;

use super::error::SummarizeError;

/// Top-level entries of a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSummary {
    /// Number of top-level keys.
    pub item_count: usize,
    /// Each key with its rendered value, in document order.
    pub entries: Vec<(String, String)>,
}

impl JsonSummary {
    /// Renders the report file body.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Item count: {}", self.item_count);
        out.push_str("JSON data summary:\n");
        for (key, value) in &self.entries {
            let _ = writeln!(out, "{key}: {value}");
        }
        out
    }
}

/// Summarizes the top-level keys of `value`.
///
/// Strings render without quotes; any other value renders as compact JSON.
/// Nested structures are not traversed.
///
/// # Errors
///
/// Returns [`SummarizeError::NotAnObject`] if `value` is not an object.
pub fn summarize_json(value: &Value) -> Result<JsonSummary, SummarizeError> {
    let Value::Object(map) = value else {
        return Err(SummarizeError::NotAnObject {
            found: json_type_name(value),
        });
    };

    let entries = map
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect();

    Ok(JsonSummary {
        item_count: map.len(),
        entries,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_object_entries_in_document_order() {
        let value: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let summary = summarize_json(&value).unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.render(), "Item count: 2\nJSON data summary:\na: 1\nb: 2\n");
    }

    #[test]
    fn test_key_order_is_not_sorted() {
        let value: Value = serde_json::from_str(r#"{"zeta":true,"alpha":null}"#).unwrap();
        let summary = summarize_json(&value).unwrap();
        assert_eq!(summary.entries[0].0, "zeta");
        assert_eq!(summary.entries[1], ("alpha".to_string(), "null".to_string()));
    }

    #[test]
    fn test_nested_values_render_compactly() {
        let value: Value =
            serde_json::from_str(r#"{"name":"Ada","tags":["x","y"],"meta":{"k":1}}"#).unwrap();
        let summary = summarize_json(&value).unwrap();
        assert_eq!(
            summary.entries,
            vec![
                ("name".to_string(), "Ada".to_string()),
                ("tags".to_string(), r#"["x","y"]"#.to_string()),
                ("meta".to_string(), r#"{"k":1}"#.to_string()),
            ]
        );
    }

    #[test]
    fn test_top_level_array_is_an_error() {
        let value: Value = serde_json::from_str("[1,2,3]").unwrap();
        let err = summarize_json(&value).unwrap_err();
        assert!(
            matches!(err, SummarizeError::NotAnObject { found: "an array" }),
            "got {err}"
        );
    }

    #[test]
    fn test_top_level_scalar_is_an_error() {
        let value: Value = serde_json::from_str("42").unwrap();
        assert!(summarize_json(&value).is_err());
    }
}
