use super::coordinate::Coordinate;
use super::error::LookupError;
use std::sync::Arc;
use std::time::Duration;

pub trait GeocodingProvider: Send + Sync {
    /// Resolves free text to a single best-match coordinate.
    fn lookup(&self, query: &str, timeout: Duration) -> Result<Coordinate, LookupError>;
}

impl<P: GeocodingProvider + ?Sized> GeocodingProvider for Box<P> {
    fn lookup(&self, query: &str, timeout: Duration) -> Result<Coordinate, LookupError> {
        (**self).lookup(query, timeout)
    }
}

impl<P: GeocodingProvider + ?Sized> GeocodingProvider for Arc<P> {
    fn lookup(&self, query: &str, timeout: Duration) -> Result<Coordinate, LookupError> {
        (**self).lookup(query, timeout)
    }
}
