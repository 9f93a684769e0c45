use serde::Deserialize;

// --- Data Structures for parsing Nominatim responses ---

#[derive(Deserialize, Debug)]
pub struct Place {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Deserialize, Debug)]
pub struct ErrorPayload {
    pub error: ErrorDetail,
}

/// Nominatim sends either `{"error": "..."}` or `{"error": {"code": .., "message": ".."}}`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Structured { message: String },
}

impl ErrorDetail {
    pub fn message(&self) -> &str {
        match self {
            ErrorDetail::Message(message) => message,
            ErrorDetail::Structured { message } => message,
        }
    }
}
