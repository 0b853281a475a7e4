//! Response-shape detection for model list endpoints.
//!
//! Providers disagree on what a model list looks like. Each known shape is a
//! (predicate, extractor) pair; the first predicate that matches wins, so
//! more specific shapes sit earlier in the table. Supporting a new provider
//! format is one more row.

use serde_json::Value;

use super::FetchError;

struct ResponseShape {
    name: &'static str,
    matches: fn(&Value) -> bool,
    extract: fn(&Value) -> Vec<String>,
}

/// Known model list shapes, most specific first. `data_array` accepts any
/// object with a `data` array, so it must stay behind `openai_list`.
const RESPONSE_SHAPES: &[ResponseShape] = &[
    // {"object": "list", "data": [{"id": ...}]}
    ResponseShape {
        name: "openai_list",
        matches: is_openai_list,
        extract: extract_data_ids,
    },
    // {"models": [{"name": ...}]}
    ResponseShape {
        name: "ollama_models",
        matches: is_ollama_models,
        extract: extract_model_names,
    },
    // [{"id": ...}]
    ResponseShape {
        name: "bare_array",
        matches: is_bare_array,
        extract: extract_array_ids,
    },
    // {"data": [{"id": ...}]} without the "object" discriminator
    ResponseShape {
        name: "data_array",
        matches: is_data_array,
        extract: extract_data_ids,
    },
];

fn is_openai_list(data: &Value) -> bool {
    data.get("object").and_then(Value::as_str) == Some("list")
        && data.get("data").map(Value::is_array).unwrap_or(false)
}

fn is_ollama_models(data: &Value) -> bool {
    data.get("models").map(Value::is_array).unwrap_or(false)
}

fn is_bare_array(data: &Value) -> bool {
    data.is_array()
}

fn is_data_array(data: &Value) -> bool {
    data.get("data").map(Value::is_array).unwrap_or(false)
}

/// Pull a string field out of every object item, skipping items that are not
/// objects or lack the field.
fn collect_string_field(items: &[Value], key: &str) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.get(key))
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn extract_data_ids(data: &Value) -> Vec<String> {
    data.get("data")
        .and_then(Value::as_array)
        .map(|items| collect_string_field(items, "id"))
        .unwrap_or_default()
}

fn extract_model_names(data: &Value) -> Vec<String> {
    data.get("models")
        .and_then(Value::as_array)
        .map(|items| collect_string_field(items, "name"))
        .unwrap_or_default()
}

fn extract_array_ids(data: &Value) -> Vec<String> {
    data.as_array()
        .map(|items| collect_string_field(items, "id"))
        .unwrap_or_default()
}

/// Extract model names from a model list response.
///
/// Names come back in response order, unnormalized. An empty extraction from
/// a matched shape is still `Ok`; deciding what an empty list means is the
/// caller's business.
pub(crate) fn parse_model_response(data: &Value) -> Result<Vec<String>, FetchError> {
    for shape in RESPONSE_SHAPES {
        if (shape.matches)(data) {
            let models = (shape.extract)(data);
            tracing::debug!(shape = shape.name, count = models.len(), "matched model list shape");
            return Ok(models);
        }
    }
    Err(FetchError::UnrecognizedFormat(describe_payload(data)))
}

fn describe_payload(data: &Value) -> String {
    match data.as_object() {
        Some(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("response keys: [{}]", keys.join(", "))
        }
        None => format!("unexpected {} payload", json_type_name(data)),
    }
}

fn json_type_name(data: &Value) -> &'static str {
    match data {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_openai_list_shape() {
        let data = json!({
            "object": "list",
            "data": [
                {"id": "llama-3.1-8b-instant", "object": "model"},
                {"id": "gemma2-9b-it", "object": "model"},
            ]
        });
        assert_eq!(
            parse_model_response(&data).unwrap(),
            vec!["llama-3.1-8b-instant", "gemma2-9b-it"]
        );
    }

    #[test]
    fn test_ollama_models_shape() {
        let data = json!({
            "models": [
                {"name": "llama3.2:latest", "size": 2019393189u64},
                {"name": "qwen2.5:latest", "size": 4683087332u64},
            ]
        });
        assert_eq!(
            parse_model_response(&data).unwrap(),
            vec!["llama3.2:latest", "qwen2.5:latest"]
        );
    }

    #[test]
    fn test_bare_array_shape() {
        let data = json!([
            {"id": "model-a"},
            {"id": "model-b"},
        ]);
        assert_eq!(parse_model_response(&data).unwrap(), vec!["model-a", "model-b"]);
    }

    #[test]
    fn test_data_array_without_discriminator() {
        let data = json!({"data": [{"id": "model-a"}]});
        assert_eq!(parse_model_response(&data).unwrap(), vec!["model-a"]);
    }

    #[test]
    fn test_openai_shape_wins_over_data_array() {
        // both openai_list and data_array match; the discriminated shape is
        // first in the table
        let data = json!({
            "object": "list",
            "data": [{"id": "model-a"}],
            "models": [{"name": "decoy"}],
        });
        assert_eq!(parse_model_response(&data).unwrap(), vec!["model-a"]);
    }

    #[test]
    fn test_malformed_items_are_skipped() {
        let data = json!({
            "object": "list",
            "data": [
                {"id": "model-a"},
                "not-an-object",
                {"name": "missing-id"},
                {"id": 42},
                {"id": "model-b"},
            ]
        });
        assert_eq!(parse_model_response(&data).unwrap(), vec!["model-a", "model-b"]);
    }

    #[test]
    fn test_matched_shape_with_no_items_is_ok_and_empty() {
        let data = json!({"object": "list", "data": []});
        assert_eq!(parse_model_response(&data).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_order_is_preserved_and_duplicates_kept() {
        let data = json!({"data": [{"id": "b"}, {"id": "a"}, {"id": "b"}]});
        assert_eq!(parse_model_response(&data).unwrap(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_unknown_object_reports_keys() {
        let data = json!({"items": [{"id": "m"}], "total": 1});
        let err = parse_model_response(&data).unwrap_err();
        match err {
            FetchError::UnrecognizedFormat(detail) => {
                assert!(detail.contains("items"));
                assert!(detail.contains("total"));
            }
            other => panic!("expected UnrecognizedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let err = parse_model_response(&json!("just a string")).unwrap_err();
        assert!(matches!(err, FetchError::UnrecognizedFormat(_)));

        let err = parse_model_response(&json!(null)).unwrap_err();
        assert!(matches!(err, FetchError::UnrecognizedFormat(_)));
    }
}
