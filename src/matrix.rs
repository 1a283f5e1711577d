//! Directed cost-matrix construction from a distance provider.

use crate::error::{PlanError, ProviderError};
use crate::poi::Poi;
use crate::traits::DistanceProvider;

/// Sentinel cost for a pair the provider reports no route between.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Square table of directed travel costs over a selection.
///
/// `cost(i, j)` is the cost from selection\[i\] to selection\[j\]. The table
/// is not assumed symmetric (driving costs are directional) and the diagonal
/// is never consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    costs: Vec<Vec<f64>>,
}

impl CostMatrix {
    /// Wraps pre-built rows, checking that the table is square.
    pub fn from_rows(costs: Vec<Vec<f64>>) -> Result<Self, PlanError> {
        let n = costs.len();
        for (i, row) in costs.iter().enumerate() {
            if row.len() != n {
                return Err(PlanError::InvalidInput(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }
        Ok(Self { costs })
    }

    /// Number of points the matrix covers.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from][to]
    }
}

/// Builds the directed cost matrix for a selection of POIs.
///
/// Issues one provider query per origin, strictly in selection order, each
/// completed before the next is sent. The sequencing respects provider rate
/// quotas; raising concurrency would be acceptable only if it produced the
/// identical matrix.
///
/// Any call-level provider failure aborts the whole build: rows already
/// gathered for earlier origins are discarded and [`PlanError::MatrixBuild`]
/// reports the failing origin. Per-destination "no route" outcomes are not
/// failures; those cells hold [`UNREACHABLE`].
pub fn build_matrix<P: DistanceProvider>(
    provider: &P,
    selection: &[Poi],
) -> Result<CostMatrix, PlanError> {
    let n = selection.len();
    if n < 2 {
        return Err(PlanError::SelectionTooSmall(n));
    }

    let destinations: Vec<(f64, f64)> = selection.iter().map(Poi::coords).collect();
    let mut costs = Vec::with_capacity(n);

    for (origin, poi) in selection.iter().enumerate() {
        tracing::debug!(origin, name = %poi.name, "querying distance provider");
        let legs = provider
            .query(poi.coords(), &destinations)
            .map_err(|source| PlanError::MatrixBuild { origin, source })?;

        if legs.len() != n {
            return Err(PlanError::MatrixBuild {
                origin,
                source: ProviderError::Status(format!(
                    "expected {} destination costs, got {}",
                    n,
                    legs.len()
                )),
            });
        }

        costs.push(
            legs.into_iter()
                .map(|leg| leg.unwrap_or(UNREACHABLE))
                .collect(),
        );
    }

    Ok(CostMatrix { costs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_table() {
        let result = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]);
        assert!(matches!(result, Err(PlanError::InvalidInput(_))));
    }

    #[test]
    fn from_rows_accepts_square_table() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0, 2.0], vec![3.0, 0.0]]).unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.cost(1, 0), 3.0);
    }
}
