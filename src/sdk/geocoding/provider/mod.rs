pub mod nominatim;
pub mod types;

pub use nominatim::NominatimProvider;
