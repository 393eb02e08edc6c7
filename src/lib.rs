//! Relative offensive and defensive strength scoring for the 18 elemental
//! types (and all unordered pairs) of a fixed type-effectiveness chart.
//!
//! Pipeline: chart -> multiplier-to-score mapping -> aggregation over all
//! opposing types -> min-max normalization (exact decimal) -> weighted
//! composite ranking. Pure and deterministic; one pass per invocation.

pub mod chart;
pub mod cli;
pub mod ranking;
pub mod report;
pub mod scoring;
