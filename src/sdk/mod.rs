pub mod config;
pub mod geocoding;
pub mod itinerary;
pub mod map_view;
pub mod planner;
pub mod util;
