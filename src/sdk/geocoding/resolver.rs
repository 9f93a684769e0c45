use super::cache::GeoCache;
use super::coordinate::Coordinate;
use super::error::{LookupError, ResolutionFailure};
use super::service::GeocodingProvider;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Turns place names into coordinates through a cache and a retrying provider.
pub struct GeocodeResolver<P> {
    provider: P,
    cache: Arc<GeoCache>,
    max_retries: u32,
    timeout: Duration,
}

impl<P: GeocodingProvider> GeocodeResolver<P> {
    pub fn new(provider: P, cache: Arc<GeoCache>) -> Self {
        Self {
            provider,
            cache,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// At least one attempt is always made.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn cache(&self) -> &Arc<GeoCache> {
        &self.cache
    }

    pub fn resolve(&self, query: &str) -> Result<Coordinate, ResolutionFailure> {
        if query.is_empty() {
            return Err(ResolutionFailure::Unspecified);
        }

        if let Some(coord) = self.cache.get_geocode(query) {
            log::debug!("[CACHE HIT] {}", query);
            return Ok(coord);
        }

        let mut last = LookupError::TimedOut;
        for attempt in 1..=self.max_retries {
            log::debug!(
                "Geocoding \"{}\" (attempt {}/{})",
                query,
                attempt,
                self.max_retries
            );
            match self.provider.lookup(query, self.timeout) {
                Ok(coord) => {
                    self.cache.insert_geocode(query, coord);
                    log::info!("Resolved \"{}\" to {}", query, coord);
                    return Ok(coord);
                }
                Err(err) if err.is_transient() => {
                    log::warn!(
                        "Transient geocoding failure for \"{}\" on attempt {}: {}",
                        query,
                        attempt,
                        err
                    );
                    last = err;
                }
                Err(LookupError::NoMatch) => {
                    return Err(ResolutionFailure::NotFound(query.to_string()));
                }
                Err(cause) => {
                    return Err(ResolutionFailure::ServiceError {
                        query: query.to_string(),
                        cause,
                    });
                }
            }
        }

        Err(ResolutionFailure::Exhausted {
            query: query.to_string(),
            attempts: self.max_retries,
            last,
        })
    }
}
