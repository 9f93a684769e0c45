use thiserror::Error;

/// Failure of a single provider lookup attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("geocoding request timed out")]
    TimedOut,

    #[error("geocoding service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("geocoding request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("failed to parse geocoding response: {0}")]
    Malformed(String),

    #[error("no geocoding results")]
    NoMatch,
}

impl LookupError {
    /// Only timeouts and unavailability are worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, LookupError::TimedOut | LookupError::ServiceUnavailable(_))
    }
}

/// Why a place name could not be turned into a coordinate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionFailure {
    #[error("no location given")]
    Unspecified,

    #[error("Could not geocode {query} after {attempts} attempts: {last}")]
    Exhausted {
        query: String,
        attempts: u32,
        last: LookupError,
    },

    #[error("An unexpected error occurred during geocoding {query}: {cause}")]
    ServiceError { query: String, cause: LookupError },

    #[error("No location found for {0}")]
    NotFound(String),
}
