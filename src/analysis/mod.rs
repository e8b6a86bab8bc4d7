//! Measurements of computed layouts

/// Sampled coverage map: gaps and stacked placements
pub mod coverage;
/// Pairwise overlap, containment and area error
pub mod metrics;

pub use coverage::CoverageMap;
pub use metrics::LayoutReport;
