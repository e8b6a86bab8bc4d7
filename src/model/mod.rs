//! Layout data model
//!
//! Inputs (canvas, items, options) are read-only for one computation; the
//! [`LayoutResult`] output is built once and never mutated afterwards.

/// Canvas and image item inputs
pub mod items;
/// Runtime layout options
pub mod options;
/// Placement records and layout results
pub mod placement;

pub use items::{Canvas, ImageItem};
pub use options::LayoutOptions;
pub use placement::{LayoutResult, LayoutStats, PlacementGeometry, PlacementRecord};
