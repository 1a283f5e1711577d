//! Collaborator seams for the tour planner core.
//!
//! The core never computes travel costs or draws anything itself; both
//! concerns live behind these traits so the planner stays testable without
//! any provider or map runtime.

use crate::error::ProviderError;
use crate::polyline::RenderedRoute;

/// External source of directed travel costs.
///
/// A query takes one origin and a batch of destinations and reports, for each
/// destination, either a cost (seconds or meters, whatever the provider
/// measures) or `None` when no route exists for that pair. An `Err` means the
/// whole call failed (transport problem, quota, bad status) and carries the
/// provider's reason.
///
/// This is the sole source of truth for costs; there is no straight-line
/// fallback in the core.
pub trait DistanceProvider {
    fn query(
        &self,
        origin: (f64, f64),
        destinations: &[(f64, f64)],
    ) -> Result<Vec<Option<f64>>, ProviderError>;
}

/// External route-drawing collaborator.
///
/// Consumes the ordered waypoints of a computed route and returns a
/// renderable path plus its bounds envelope. Rejections are reported as a
/// provider-specific message; the computed route itself stays valid.
pub trait RouteRenderer {
    fn render(&self, waypoints: &[(f64, f64)]) -> Result<RenderedRoute, String>;
}
