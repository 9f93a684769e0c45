pub mod sdk;

pub use sdk::config::PlannerConfig;
pub use sdk::geocoding::{Coordinate, GeoCache, GeocodeResolver, NominatimProvider, ResolutionFailure};
pub use sdk::itinerary::{GeminiClient, ItineraryGenerator, TripRequest};
pub use sdk::map_view::{MapRenderDescriptor, MapViewBuilder, NoMapAvailable};
pub use sdk::planner::{MapPlan, Notice, Severity, TripPlanner};
