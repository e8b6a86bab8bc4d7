//! Spatial primitives shared by every placement algorithm
//!
//! This module contains:
//! - Rectangles, polygons and their intersection/clipping operations
//! - Free-space bookkeeping for guillotine packing
//! - The center-crop policy mapping placements back onto source images

/// Center-crop computation in source-relative coordinates
pub mod crop;
/// Disjoint free-rectangle tracking for the recursive packer
pub mod free_space;
/// Rectangles, polygons, overlap tests and clipping
pub mod geometry;

pub use geometry::{Point, Polygon, Rect};
