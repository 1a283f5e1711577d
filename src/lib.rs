//! tour-planner core
//!
//! Sightseeing-route planning over a user-selected set of points of
//! interest: a directed cost matrix from an external distance provider,
//! a nearest-neighbor visiting order, and projections of that order for
//! rendering and link sharing.

pub mod error;
pub mod link;
pub mod matrix;
pub mod osrm;
pub mod osrm_data;
pub mod poi;
pub mod polyline;
pub mod session;
pub mod solver;
pub mod traits;
