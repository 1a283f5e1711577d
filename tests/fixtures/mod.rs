//! Test fixtures for tour-planner.
//!
//! Provides real Ahmedabad art venues (geocoded) plus small mock
//! providers for matrix and pipeline tests.

pub mod ahmedabad_galleries;

pub use ahmedabad_galleries::*;
