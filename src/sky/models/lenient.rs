//! serde helpers for the service's loosely typed node objects.
//!
//! Every node is read through a private `Deserialize` proxy whose fields are
//! all `#[serde(default, deserialize_with = "lenient")]`. A field that is
//! absent or has the wrong JSON type comes out as `None`, and the decoder
//! then decides whether that is a `MissingField` or a fallback.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use super::{DecodeError, NodeType};

/// Deserializes a field that is dropped, not rejected, when it has the
/// wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Reads a node's proxy struct. Only a value that is not an object fails.
pub(crate) fn from_object<T: DeserializeOwned>(value: &Value) -> Result<T, DecodeError> {
    match value {
        Value::Object(_) => Ok(T::deserialize(value)?),
        other => Err(DecodeError::MalformedPayload(format!(
            "expected an object, found {}",
            kind_of(other)
        ))),
    }
}

/// Checks a required discriminator read from `field`.
pub(crate) fn required_node_type(
    raw: Option<&str>,
    field: &'static str,
    expected: &[NodeType],
) -> Result<NodeType, DecodeError> {
    check_node_type(raw.ok_or(DecodeError::MissingField(field))?, expected)
}

pub(crate) fn check_node_type(raw: &str, expected: &[NodeType]) -> Result<NodeType, DecodeError> {
    match NodeType::parse(raw) {
        Some(node_type) if expected.contains(&node_type) => Ok(node_type),
        _ => Err(DecodeError::InvalidType {
            found: raw.to_owned(),
            expected: expected
                .iter()
                .map(NodeType::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
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
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, Debug)]
    struct Sample {
        #[serde(rename = "t", default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        rating: Option<i32>,
        #[serde(default, deserialize_with = "lenient")]
        children: Option<Vec<Value>>,
    }

    #[test]
    fn test_rejects_non_object() {
        let err = from_object::<Sample>(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload(_)));
    }

    #[test]
    fn test_wrong_shapes_become_none() {
        let sample: Sample =
            from_object(&json!({ "t": 7, "rating": "87", "children": {} })).unwrap();
        assert_eq!(sample.name, None);
        assert_eq!(sample.rating, None);
        assert_eq!(sample.children, None);

        let sample: Sample = from_object(&json!({ "t": "Heat", "children": [1] })).unwrap();
        assert_eq!(sample.name.as_deref(), Some("Heat"));
        assert_eq!(sample.children, Some(vec![json!(1)]));
    }

    #[test]
    fn test_integers_outside_i32_become_none() {
        for rating in [json!(1.5), json!(9_000_000_000_i64), json!(null)] {
            let sample: Sample = from_object(&json!({ "rating": rating })).unwrap();
            assert_eq!(sample.rating, None);
        }
        let sample: Sample = from_object(&json!({ "rating": 87 })).unwrap();
        assert_eq!(sample.rating, Some(87));
    }

    #[test]
    fn test_node_type_is_case_insensitive() {
        assert_eq!(
            required_node_type(Some("heading"), "nodetype", &[NodeType::Heading]),
            Ok(NodeType::Heading)
        );
    }

    #[test]
    fn test_node_type_mismatch_and_unknown() {
        assert_eq!(
            check_node_type("SERIES", &[NodeType::Heading]),
            Err(DecodeError::InvalidType {
                found: "SERIES".to_string(),
                expected: "HEADING".to_string()
            })
        );
        assert!(matches!(
            check_node_type("PODCAST", &NodeType::ALL),
            Err(DecodeError::InvalidType { .. })
        ));
        assert_eq!(
            required_node_type(None, "nodetype", &NodeType::ALL),
            Err(DecodeError::MissingField("nodetype"))
        );
    }
}
