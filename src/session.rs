//! Planner session: working set, selection, and compute pipeline.
//!
//! All mutable state lives in an explicit [`PlannerSession`] passed through
//! the operations, never in globals. The POI list is fixed at construction;
//! selection membership is the only state that changes between computes, and
//! each compute replaces the previous result entirely.

use crate::error::PlanError;
use crate::link::{self, TravelMode};
use crate::matrix::build_matrix;
use crate::poi::Poi;
use crate::polyline::RenderedRoute;
use crate::solver::{Route, nearest_neighbor};
use crate::traits::{DistanceProvider, RouteRenderer};

/// A computed visiting order projected back onto the selected POIs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    route: Route,
    stops: Vec<Poi>,
    total_cost: f64,
}

impl PlannedRoute {
    /// Visiting order as indices into the selection the route was built from.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The selected POIs in visiting order.
    pub fn stops(&self) -> &[Poi] {
        &self.stops
    }

    /// Coordinates of the stops in visiting order.
    pub fn waypoints(&self) -> Vec<(f64, f64)> {
        self.stops.iter().map(Poi::coords).collect()
    }

    /// Sum of the leg costs along the order. Infinite when the order crosses
    /// an unreachable pair.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Shareable external-maps link for this route.
    pub fn share_url(&self, mode: TravelMode) -> String {
        link::share_url(self, mode)
    }
}

/// Token identifying one compute request, for stale-result rejection.
///
/// A provider call cannot be aborted once issued; a caller that wants
/// cancel-and-restart instead compares the token of a finished computation
/// against the latest one issued and drops results that lost the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// One planning session: the loaded working set plus selection and the last
/// computed route.
#[derive(Debug)]
pub struct PlannerSession {
    pois: Vec<Poi>,
    selected: Vec<bool>,
    last_route: Option<PlannedRoute>,
    epoch: u64,
}

impl PlannerSession {
    pub fn new(pois: Vec<Poi>) -> Self {
        let selected = vec![false; pois.len()];
        Self {
            pois,
            selected,
            last_route: None,
            epoch: 0,
        }
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// Marks a POI selected or not. Out-of-range indices are ignored and
    /// reported as `false`.
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.selected.get_mut(index) {
            Some(slot) => {
                *slot = selected;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Selected POIs in working-set order. Index 0 of this list is the tour
    /// anchor.
    pub fn selection(&self) -> Vec<Poi> {
        self.pois
            .iter()
            .zip(&self.selected)
            .filter(|&(_, &selected)| selected)
            .map(|(poi, _)| poi.clone())
            .collect()
    }

    /// Starts a new compute request, superseding any outstanding one.
    pub fn begin_request(&mut self) -> RequestToken {
        self.epoch += 1;
        RequestToken(self.epoch)
    }

    /// Stores a computed route unless the token has been superseded by a
    /// newer `begin_request`. Returns whether the result was applied.
    pub fn apply_route(&mut self, token: RequestToken, planned: PlannedRoute) -> bool {
        if token.0 != self.epoch {
            tracing::debug!(token = token.0, epoch = self.epoch, "dropping stale route result");
            return false;
        }
        self.last_route = Some(planned);
        true
    }

    /// One-shot compute: builds the cost matrix over the current selection,
    /// sequences it, and stores the result.
    pub fn compute_route<P: DistanceProvider>(
        &mut self,
        provider: &P,
    ) -> Result<&PlannedRoute, PlanError> {
        let selection = self.selection();
        let token = self.begin_request();
        let planned = plan_route(provider, &selection)?;
        self.apply_route(token, planned);
        Ok(self.last_route.as_ref().expect("route was just applied"))
    }

    pub fn route(&self) -> Option<&PlannedRoute> {
        self.last_route.as_ref()
    }

    /// Hands the computed route to a rendering collaborator. A rejection
    /// surfaces as [`PlanError::RouteRender`] and leaves the stored route
    /// untouched, so rendering can be retried without recomputing.
    pub fn render_route<R: RouteRenderer>(&self, renderer: &R) -> Result<RenderedRoute, PlanError> {
        let planned = self
            .last_route
            .as_ref()
            .ok_or_else(|| PlanError::InvalidInput("no computed route to render".to_string()))?;
        renderer
            .render(&planned.waypoints())
            .map_err(PlanError::RouteRender)
    }
}

/// Computes a route for a selection without touching session state.
///
/// This is the piece a UI would run off the main path when it wants the
/// token-based stale-result protocol instead of [`PlannerSession::compute_route`].
pub fn plan_route<P: DistanceProvider>(
    provider: &P,
    selection: &[Poi],
) -> Result<PlannedRoute, PlanError> {
    let matrix = build_matrix(provider, selection)?;
    let route = nearest_neighbor(&matrix)?;

    let order = route.order();
    let total_cost = order
        .windows(2)
        .map(|leg| matrix.cost(leg[0], leg[1]))
        .sum();
    let stops = order.iter().map(|&i| selection[i].clone()).collect();

    tracing::debug!(stops = order.len(), total_cost, "route computed");
    Ok(PlannedRoute {
        route,
        stops,
        total_cost,
    })
}
