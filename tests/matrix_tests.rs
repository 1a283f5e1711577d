//! Cost-matrix builder tests
//!
//! Exercises the per-origin query sequencing, unreachable sentinels, and
//! whole-build failure propagation against mock providers.

use std::cell::RefCell;

use tour_planner::error::{PlanError, ProviderError};
use tour_planner::matrix::{UNREACHABLE, build_matrix};
use tour_planner::poi::Poi;
use tour_planner::traits::DistanceProvider;

fn stops(n: usize) -> Vec<Poi> {
    (0..n)
        .map(|i| Poi::new(format!("stop-{}", i), 23.0 + i as f64 * 0.01, 72.5))
        .collect()
}

/// Answers each origin query from a canned table, recording the order in
/// which origins were asked.
struct TableProvider {
    rows: Vec<Vec<Option<f64>>>,
    asked: RefCell<Vec<(f64, f64)>>,
}

impl TableProvider {
    fn new(rows: Vec<Vec<Option<f64>>>) -> Self {
        Self {
            rows,
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl DistanceProvider for TableProvider {
    fn query(
        &self,
        origin: (f64, f64),
        _destinations: &[(f64, f64)],
    ) -> Result<Vec<Option<f64>>, ProviderError> {
        let call = self.asked.borrow().len();
        self.asked.borrow_mut().push(origin);
        Ok(self.rows[call].clone())
    }
}

/// Fails the whole call once a given origin index is reached.
struct FailingProvider {
    fail_at: usize,
    calls: RefCell<usize>,
}

impl DistanceProvider for FailingProvider {
    fn query(
        &self,
        _origin: (f64, f64),
        destinations: &[(f64, f64)],
    ) -> Result<Vec<Option<f64>>, ProviderError> {
        let call = *self.calls.borrow();
        *self.calls.borrow_mut() += 1;
        if call == self.fail_at {
            Err(ProviderError::Status("OVER_QUERY_LIMIT".to_string()))
        } else {
            Ok(vec![Some(1.0); destinations.len()])
        }
    }
}

#[test]
fn builds_a_square_directed_matrix() {
    let provider = TableProvider::new(vec![
        vec![Some(0.0), Some(10.0), Some(50.0)],
        vec![Some(12.0), Some(0.0), Some(20.0)],
        vec![Some(48.0), Some(22.0), Some(0.0)],
    ]);
    let matrix = build_matrix(&provider, &stops(3)).unwrap();

    assert_eq!(matrix.len(), 3);
    assert_eq!(matrix.cost(0, 1), 10.0);
    assert_eq!(matrix.cost(1, 0), 12.0);
    assert_eq!(matrix.cost(2, 1), 22.0);
}

#[test]
fn origins_are_queried_sequentially_in_selection_order() {
    let provider = TableProvider::new(vec![
        vec![Some(0.0), Some(1.0), Some(1.0)],
        vec![Some(1.0), Some(0.0), Some(1.0)],
        vec![Some(1.0), Some(1.0), Some(0.0)],
    ]);
    let selection = stops(3);
    build_matrix(&provider, &selection).unwrap();

    let asked = provider.asked.borrow();
    let expected: Vec<(f64, f64)> = selection.iter().map(|p| p.coords()).collect();
    assert_eq!(*asked, expected);
}

#[test]
fn unreachable_destinations_become_infinite_cells() {
    let provider = TableProvider::new(vec![
        vec![Some(0.0), None],
        vec![Some(3.0), Some(0.0)],
    ]);
    let matrix = build_matrix(&provider, &stops(2)).unwrap();

    assert_eq!(matrix.cost(0, 1), UNREACHABLE);
    assert_eq!(matrix.cost(1, 0), 3.0);
}

#[test]
fn failure_mid_build_discards_gathered_rows() {
    let provider = FailingProvider {
        fail_at: 2,
        calls: RefCell::new(0),
    };
    let err = build_matrix(&provider, &stops(4)).unwrap_err();

    match err {
        PlanError::MatrixBuild { origin, source } => {
            assert_eq!(origin, 2);
            assert!(matches!(source, ProviderError::Status(_)));
        }
        other => panic!("expected MatrixBuild, got {:?}", other),
    }
    // Origins after the failing one are never queried.
    assert_eq!(*provider.calls.borrow(), 3);
}

#[test]
fn failure_on_first_origin_reports_index_zero() {
    let provider = FailingProvider {
        fail_at: 0,
        calls: RefCell::new(0),
    };
    let err = build_matrix(&provider, &stops(2)).unwrap_err();
    assert!(matches!(err, PlanError::MatrixBuild { origin: 0, .. }));
}

#[test]
fn short_provider_row_aborts_the_build() {
    let provider = TableProvider::new(vec![vec![Some(0.0)]]);
    let err = build_matrix(&provider, &stops(2)).unwrap_err();
    assert!(matches!(err, PlanError::MatrixBuild { origin: 0, .. }));
}

#[test]
fn selections_under_two_are_rejected_without_querying() {
    let provider = FailingProvider {
        fail_at: 0,
        calls: RefCell::new(0),
    };

    assert!(matches!(
        build_matrix(&provider, &stops(1)),
        Err(PlanError::SelectionTooSmall(1))
    ));
    assert!(matches!(
        build_matrix(&provider, &stops(0)),
        Err(PlanError::SelectionTooSmall(0))
    ));
    assert_eq!(*provider.calls.borrow(), 0);
}
