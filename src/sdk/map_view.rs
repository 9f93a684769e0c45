use crate::sdk::geocoding::Coordinate;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_ZOOM: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub label: String,
    pub color: MarkerColor,
}

/// Everything a map widget needs for one render.
///
/// When `bounds` is present the renderer should fit both points and
/// ignore `zoom`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRenderDescriptor {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub bounds: Option<[Coordinate; 2]>,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Enter a starting location or destination to see the map.")]
pub struct NoMapAvailable;

/// A resolved point with the text the user typed for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint<'a> {
    pub label: &'a str,
    pub coordinate: Coordinate,
}

impl<'a> Waypoint<'a> {
    pub fn new(label: &'a str, coordinate: Coordinate) -> Self {
        Self { label, coordinate }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MapViewBuilder {
    zoom: u8,
}

impl Default for MapViewBuilder {
    fn default() -> Self {
        Self { zoom: DEFAULT_ZOOM }
    }
}

impl MapViewBuilder {
    pub fn with_zoom(zoom: u8) -> Self {
        Self { zoom }
    }

    pub fn build(
        &self,
        start: Option<Coordinate>,
        dest: Option<Coordinate>,
    ) -> Result<MapRenderDescriptor, NoMapAvailable> {
        self.build_labeled(
            start.map(|c| Waypoint::new("Start", c)),
            dest.map(|c| Waypoint::new("Destination", c)),
        )
    }

    pub fn build_labeled(
        &self,
        start: Option<Waypoint<'_>>,
        dest: Option<Waypoint<'_>>,
    ) -> Result<MapRenderDescriptor, NoMapAvailable> {
        let start = start.filter(in_range);
        let dest = dest.filter(in_range);

        let center = match (start, dest) {
            (_, Some(d)) => d.coordinate,
            (Some(s), None) => s.coordinate,
            (None, None) => return Err(NoMapAvailable),
        };

        let mut markers = Vec::with_capacity(2);
        if let Some(s) = start {
            markers.push(Marker {
                coordinate: s.coordinate,
                label: s.label.to_string(),
                color: MarkerColor::Blue,
            });
        }
        if let Some(d) = dest {
            markers.push(Marker {
                coordinate: d.coordinate,
                label: d.label.to_string(),
                color: MarkerColor::Red,
            });
        }

        let bounds = match (start, dest) {
            (Some(s), Some(d)) => Some([s.coordinate, d.coordinate]),
            _ => None,
        };

        Ok(MapRenderDescriptor {
            center,
            zoom: self.zoom,
            markers,
            bounds,
        })
    }
}

fn in_range(waypoint: &Waypoint<'_>) -> bool {
    let valid = waypoint.coordinate.is_valid();
    if !valid {
        log::warn!(
            "Dropping out-of-range coordinate for {}: {}",
            waypoint.label,
            waypoint.coordinate
        );
    }
    valid
}
