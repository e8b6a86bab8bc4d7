//! Layout engine for photo collages
//!
//! Given a fixed-size canvas and a list of photographs (only their aspect
//! ratios matter), the engine computes where each photograph goes: position,
//! size, rotation, crop and stacking order. Styles range from exact
//! area-filling partitions (grid, mosaic, fractal, Voronoi, hexagon,
//! magazine) through radial arrangements (spiral, mandala, kaleidoscope) to
//! overlap-tolerant scatters (scrapbook, puzzle, polaroid). Pixel
//! compositing is left to the caller.

#![forbid(unsafe_code)]

/// Placement algorithms, the style registry and the layout executor
pub mod algorithm;
/// Post-hoc measurements of computed layouts
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Seeded randomness and deterministic sequences
pub mod math;
/// Canvas, items, options and layout results
pub mod model;
/// Geometry primitives, free-space tracking and crop policy
pub mod spatial;

pub use algorithm::{PlacementAlgorithm, StyleFamily, StyleRegistry, compute_layout};
pub use io::error::{LayoutError, Result};
pub use model::{
    Canvas, ImageItem, LayoutOptions, LayoutResult, LayoutStats, PlacementGeometry,
    PlacementRecord,
};
