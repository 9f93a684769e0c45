use super::types::{ErrorPayload, Place};
use crate::sdk::geocoding::coordinate::Coordinate;
use crate::sdk::geocoding::error::LookupError;
use crate::sdk::geocoding::service::GeocodingProvider;
use crate::sdk::util::rate_limit::{self, Limiter};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "travel_planner_app";

pub struct NominatimProvider {
    client: Client,
    base_url: String,
    user_agent: String,
    limiter: Limiter,
}

impl NominatimProvider {
    pub fn new(base_url: String, user_agent: String, limiter: Limiter) -> reqwest::Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent,
            limiter,
        })
    }
}

impl GeocodingProvider for NominatimProvider {
    fn lookup(&self, query: &str, timeout: Duration) -> Result<Coordinate, LookupError> {
        rate_limit::wait(&self.limiter);
        let url = format!("{}/search", self.base_url);
        log::debug!("[PROVIDER] Calling nominatim search for: \"{}\"", query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .header(USER_AGENT, &self.user_agent)
            .timeout(timeout)
            .send()
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        let text = response.text().map_err(|e| classify_transport(&e))?;

        if !status.is_success() {
            log::error!(
                "Geocoder returned non-success status: {}. Body: {}",
                status,
                text
            );
            return Err(classify_status(status.as_u16(), &text));
        }

        parse_places(&text).map_err(|e| {
            if let LookupError::Malformed(reason) = &e {
                log::error!(
                    "Failed to parse geocoder response. URL: {}\nError: {}. Body: {}",
                    url,
                    reason,
                    text
                );
            }
            e
        })
    }
}

fn classify_transport(err: &reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::TimedOut
    } else if err.is_connect() || err.is_request() {
        LookupError::ServiceUnavailable(err.to_string())
    } else {
        LookupError::Malformed(err.to_string())
    }
}

pub(crate) fn classify_status(status: u16, body: &str) -> LookupError {
    let message = serde_json::from_str::<ErrorPayload>(body)
        .map(|payload| payload.error.message().to_string())
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        408 => LookupError::TimedOut,
        429 | 502 | 503 | 504 => LookupError::ServiceUnavailable(format!("HTTP {status}: {message}")),
        _ => LookupError::Rejected { status, message },
    }
}

pub(crate) fn parse_places(body: &str) -> Result<Coordinate, LookupError> {
    let places: Vec<Place> =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))?;
    let place = places.first().ok_or(LookupError::NoMatch)?;

    let latitude = place
        .lat
        .parse::<f64>()
        .map_err(|e| LookupError::Malformed(format!("invalid lat {:?}: {e}", place.lat)))?;
    let longitude = place
        .lon
        .parse::<f64>()
        .map_err(|e| LookupError::Malformed(format!("invalid lon {:?}: {e}", place.lon)))?;

    log::debug!("[PROVIDER] Matched \"{}\"", place.display_name);
    Coordinate::new(latitude, longitude).ok_or_else(|| {
        LookupError::Malformed(format!("coordinate out of range: {latitude}, {longitude}"))
    })
}
