//! Rendered-route value types.
//!
//! These are the shapes handed back by a route-rendering collaborator: the
//! drawable path as decoded coordinates, and the bounds envelope a map view
//! fits to. Encoding to a compact polyline format, padding, and any actual
//! drawing happen on the UI side of the boundary.

use serde::{Deserialize, Serialize};

/// A route geometry as decoded (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Axis-aligned envelope over a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Envelope of the given points, or `None` when there are none.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut bounds = Self {
            min_lat: first.0,
            min_lon: first.1,
            max_lat: first.0,
            max_lon: first.1,
        };
        for &point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, (lat, lon): (f64, f64)) {
        self.min_lat = self.min_lat.min(lat);
        self.min_lon = self.min_lon.min(lon);
        self.max_lat = self.max_lat.max(lat);
        self.max_lon = self.max_lon.max(lon);
    }

    pub fn contains(&self, (lat, lon): (f64, f64)) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// What a rendering collaborator returns for a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedRoute {
    pub path: Polyline,
    pub bounds: Bounds,
}
