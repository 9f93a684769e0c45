pub mod cache;
pub mod coordinate;
pub mod error;
pub mod provider;
pub mod resolver;
pub mod service;

pub use cache::GeoCache;
pub use coordinate::Coordinate;
pub use error::{LookupError, ResolutionFailure};
pub use provider::NominatimProvider;
pub use resolver::GeocodeResolver;
pub use service::GeocodingProvider;
