//! Error taxonomy for the tour planner core.

use thiserror::Error;

/// Call-level failure from a distance provider.
///
/// Per-destination "no route" outcomes are not errors; they surface as
/// unreachable cells in the cost matrix instead.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider rejected the query: {0}")]
    Status(String),
}

/// Failures surfaced by the compute pipeline.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Fewer than 2 points of interest selected; no matrix or route is produced.
    #[error("at least 2 selected points are required, got {0}")]
    SelectionTooSmall(usize),

    /// A provider query failed for one origin. The whole build is aborted;
    /// rows gathered for earlier origins are discarded.
    #[error("distance query failed for origin {origin}")]
    MatrixBuild {
        origin: usize,
        #[source]
        source: ProviderError,
    },

    /// Malformed matrix handed to the sequencer. This indicates a broken
    /// contract between builder and sequencer, not a user-facing condition.
    #[error("invalid sequencer input: {0}")]
    InvalidInput(String),

    /// The rendering collaborator rejected the computed route. The route
    /// itself remains valid; callers may retry rendering without recomputing.
    #[error("route rendering failed: {0}")]
    RouteRender(String),
}
