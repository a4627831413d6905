use thiserror::Error;

/// Failure returned by the entity service facade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API request failed: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Builds a status failure using the canonical reason phrase for `status`.
    ///
    /// A custom reason phrase sent by the server is not used: the HTTP client
    /// only exposes the numeric status, and HTTP/2 responses carry no phrase.
    pub fn from_status(status: u16) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();
        ApiError::Status {
            status,
            status_text,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|code| code.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Construction-time violations of the field schema invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Duplicate field name `{0}`")]
    DuplicateField(String),
    #[error("Field `{0}` does not map to an entity attribute")]
    UnknownAttribute(String),
    #[error("Select field `{0}` declares no options")]
    MissingOptions(String),
    #[error("Field `{0}` declares options but is not a select field")]
    UnexpectedOptions(String),
    #[error("Field `{field}` has layout width {width} (expected 1-12)")]
    InvalidLayoutWidth { field: String, width: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL `{0}` (expected http:// or https://)")]
    InvalidBaseUrl(String),
}
