use thiserror::Error;

/// Why a payload, or one node inside it, could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The node's discriminator is unknown or not one this decoder accepts.
    #[error("invalid node type `{found}`, expected one of: {expected}")]
    InvalidType { found: String, expected: String },

    /// A required field is absent or has the wrong shape.
    #[error("missing or malformed field `{0}`")]
    MissingField(&'static str),

    /// The input is not JSON, or not an object/array where one was required.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::MalformedPayload(err.to_string())
    }
}
