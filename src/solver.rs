//! Nearest-neighbor route sequencing.

use crate::error::PlanError;
use crate::matrix::CostMatrix;

/// Visiting order over a selection: a permutation of `0..n` matrix indices.
///
/// The tour always starts at index 0, the first selected point, as an
/// explicit policy rather than a property of cost. It does not return to the
/// start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    order: Vec<usize>,
}

impl Route {
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn first(&self) -> usize {
        self.order[0]
    }

    pub fn last(&self) -> usize {
        self.order[self.order.len() - 1]
    }
}

/// Sequences a cost matrix into a visiting order with the greedy
/// nearest-neighbor heuristic.
///
/// Deterministic O(n²): starting from index 0, each round scans the unvisited
/// indices in ascending order and keeps the strictly cheapest next hop, so
/// the lowest index wins ties. No backtracking and no optimality claim.
///
/// Known limitation, preserved deliberately: when every remaining point is
/// unreachable from the current one, the same scan degrades to picking the
/// lowest remaining index, so a disconnected selection still yields a full
/// (low-quality) order instead of an error.
pub fn nearest_neighbor(matrix: &CostMatrix) -> Result<Route, PlanError> {
    let n = matrix.len();
    if n < 2 {
        return Err(PlanError::InvalidInput(format!(
            "matrix must cover at least 2 points, got {}",
            n
        )));
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    order.push(0);
    visited[0] = true;

    while order.len() < n {
        let last = order[order.len() - 1];
        let mut next: Option<(usize, f64)> = None;

        for j in 0..n {
            if visited[j] {
                continue;
            }
            let cost = matrix.cost(last, j);
            match next {
                // Strict < keeps the first (lowest) index on ties, and keeps
                // the lowest index when every remaining cost is infinite.
                Some((_, best)) if cost < best => next = Some((j, cost)),
                Some(_) => {}
                None => next = Some((j, cost)),
            }
        }

        // The loop runs only while unvisited indices remain.
        let (chosen, _) = next.expect("an unvisited index always exists");
        order.push(chosen);
        visited[chosen] = true;
    }

    Ok(Route { order })
}
