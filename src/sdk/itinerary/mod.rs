pub mod gemini;
pub mod trip;

pub use gemini::GeminiClient;
pub use trip::{Interest, TripError, TripRequest};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error(transparent)]
    InvalidTrip(#[from] TripError),

    #[error("API Error (Code {code}): {message}")]
    Api { code: u16, message: String },

    #[error("Unstructured API Error: {0}")]
    RawApi(String),

    #[error("Model returned no itinerary text")]
    EmptyResponse,

    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub trait ItineraryGenerator: Send + Sync {
    /// Drafts a markdown itinerary for the trip.
    fn generate(&self, trip: &TripRequest) -> Result<String, ItineraryError>;
}
