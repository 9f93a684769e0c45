use crate::sdk::geocoding::{Coordinate, GeocodeResolver, GeocodingProvider, ResolutionFailure};
use crate::sdk::map_view::{MapRenderDescriptor, MapViewBuilder, NoMapAvailable, Waypoint};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message for the user produced while planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct MapPlan {
    pub view: Result<MapRenderDescriptor, NoMapAvailable>,
    pub notices: Vec<Notice>,
}

/// Resolves both ends of a trip and lays them out on a map.
pub struct TripPlanner<P> {
    resolver: GeocodeResolver<P>,
    builder: MapViewBuilder,
}

impl<P: GeocodingProvider> TripPlanner<P> {
    pub fn new(resolver: GeocodeResolver<P>, builder: MapViewBuilder) -> Self {
        Self { resolver, builder }
    }

    pub fn resolver(&self) -> &GeocodeResolver<P> {
        &self.resolver
    }

    /// Never fails: a location that cannot be resolved is left off the map
    /// and reported as a notice.
    pub fn plan_map(&self, starting_location: &str, destination: &str) -> MapPlan {
        let mut notices = Vec::new();
        let start = self.locate(starting_location, &mut notices);
        let dest = self.locate(destination, &mut notices);

        let view = self.builder.build_labeled(
            start.map(|c| Waypoint::new(starting_location, c)),
            dest.map(|c| Waypoint::new(destination, c)),
        );
        if let Err(no_map) = &view {
            notices.push(Notice::new(Severity::Info, no_map.to_string()));
        }

        MapPlan { view, notices }
    }

    fn locate(&self, query: &str, notices: &mut Vec<Notice>) -> Option<Coordinate> {
        match self.resolver.resolve(query) {
            Ok(coord) => Some(coord),
            Err(ResolutionFailure::Unspecified) => None,
            Err(failure) => {
                let severity = match failure {
                    ResolutionFailure::ServiceError { .. } => Severity::Error,
                    _ => Severity::Warning,
                };
                log::warn!("{}", failure);
                notices.push(Notice::new(severity, failure.to_string()));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::geocoding::resolver::tests::{coord, ScriptedProvider};
    use crate::sdk::geocoding::{GeoCache, LookupError};
    use std::sync::Arc;

    fn planner(provider: &Arc<ScriptedProvider>) -> TripPlanner<Arc<ScriptedProvider>> {
        let resolver = GeocodeResolver::new(provider.clone(), Arc::new(GeoCache::default()));
        TripPlanner::new(resolver, MapViewBuilder::default())
    }

    #[test]
    fn both_locations_resolved() {
        let provider = Arc::new(ScriptedProvider::default());
        provider.push("Rennes", Ok(coord(48.11, -1.68)));
        provider.push("Lisbon", Ok(coord(38.72, -9.14)));

        let planner = planner(&provider);
        let plan = planner.plan_map("Rennes", "Lisbon");
        let view = plan.view.unwrap();
        assert!(plan.notices.is_empty());
        assert_eq!(planner.resolver().cache().len(), 2);
        assert_eq!(view.center, coord(38.72, -9.14));
        assert_eq!(view.markers[0].label, "Rennes");
        assert!(view.bounds.is_some());
    }

    #[test]
    fn empty_form_prompts_for_input() {
        let provider = Arc::new(ScriptedProvider::default());
        let plan = planner(&provider).plan_map("", "");
        assert_eq!(plan.view, Err(NoMapAvailable));
        assert_eq!(
            plan.notices,
            vec![Notice::new(
                Severity::Info,
                "Enter a starting location or destination to see the map."
            )]
        );
        assert_eq!(provider.calls(), 0);
    }

    #[test]
    fn failed_start_does_not_block_destination() {
        let provider = Arc::new(ScriptedProvider::default());
        for _ in 0..3 {
            provider.push("Rennes", Err(LookupError::TimedOut));
        }
        provider.push("Lisbon", Ok(coord(38.72, -9.14)));

        let plan = planner(&provider).plan_map("Rennes", "Lisbon");
        let view = plan.view.unwrap();
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.center, coord(38.72, -9.14));
        assert_eq!(plan.notices.len(), 1);
        assert_eq!(plan.notices[0].severity, Severity::Warning);
        assert!(plan.notices[0]
            .message
            .starts_with("Could not geocode Rennes after 3 attempts"));
    }

    #[test]
    fn service_errors_are_reported_as_errors() {
        let provider = Arc::new(ScriptedProvider::default());
        provider.push(
            "Rennes",
            Err(LookupError::Rejected {
                status: 403,
                message: "blocked".into(),
            }),
        );

        let plan = planner(&provider).plan_map("Rennes", "");
        assert_eq!(plan.view, Err(NoMapAvailable));
        assert_eq!(plan.notices[0].severity, Severity::Error);
        assert_eq!(plan.notices[1].severity, Severity::Info);
    }
}
