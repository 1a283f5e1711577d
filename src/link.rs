//! Shareable external-maps deep links.
//!
//! A pure projection of a computed route onto the Google Maps directions URL
//! scheme: origin, destination, pipe-joined intermediate waypoints, and a
//! travel-mode flag. Building the link never feeds back into the ordering.

use crate::poi::Poi;
use crate::session::PlannedRoute;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    fn as_param(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

fn coord_param(poi: &Poi) -> String {
    format!("{:.6},{:.6}", poi.lat, poi.lon)
}

/// Renders a planned route as a directions URL.
///
/// Stops are encoded as coordinates. When every stop also carries an
/// external place identifier, the place-id parameters are appended so the
/// target resolves named places instead of bare coordinates.
pub fn share_url(planned: &PlannedRoute, mode: TravelMode) -> String {
    let stops = planned.stops();
    debug_assert!(stops.len() >= 2);

    let origin = &stops[0];
    let destination = &stops[stops.len() - 1];
    let via = &stops[1..stops.len() - 1];

    let mut url = format!(
        "{}&origin={}&destination={}",
        DIRECTIONS_BASE,
        coord_param(origin),
        coord_param(destination)
    );

    if !via.is_empty() {
        let waypoints = via.iter().map(coord_param).collect::<Vec<_>>().join("|");
        url.push_str(&format!("&waypoints={}", waypoints));
    }

    if let Some(ids) = place_ids(stops) {
        url.push_str(&format!(
            "&origin_place_id={}&destination_place_id={}",
            ids[0],
            ids[ids.len() - 1]
        ));
        if ids.len() > 2 {
            url.push_str(&format!(
                "&waypoint_place_ids={}",
                ids[1..ids.len() - 1].join("|")
            ));
        }
    }

    url.push_str(&format!("&travelmode={}", mode.as_param()));
    url
}

/// Place identifiers for all stops, or `None` unless every stop has one.
fn place_ids(stops: &[Poi]) -> Option<Vec<&str>> {
    stops
        .iter()
        .map(|poi| poi.place_id.as_deref())
        .collect()
}
