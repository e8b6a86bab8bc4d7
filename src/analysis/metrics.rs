//! Geometric quality measures of a computed layout

use crate::io::configuration::GEOMETRY_EPSILON;
use crate::model::{LayoutResult, PlacementRecord};

/// Overlap between two placements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Paint-order index of the first placement
    pub first: usize,
    /// Paint-order index of the second placement
    pub second: usize,
    /// Shared area
    pub area: f64,
    /// Shared area over the smaller placement area
    pub ratio: f64,
}

/// Exact shared area of two placements, rotation included
pub fn overlap_area(a: &PlacementRecord, b: &PlacementRecord) -> f64 {
    if a.footprint().intersection_area(&b.footprint()) <= 0.0 {
        return 0.0;
    }
    a.geometry
        .outline(a.rotation)
        .intersection_area(&b.geometry.outline(b.rotation))
}

/// Every pair of placements sharing more than a sliver of area
pub fn pairwise_overlaps(result: &LayoutResult) -> Vec<Overlap> {
    let mut overlaps = Vec::new();
    for (first, a) in result.placements.iter().enumerate() {
        for (offset, b) in result.placements.iter().skip(first + 1).enumerate() {
            let area = overlap_area(a, b);
            if area > GEOMETRY_EPSILON {
                let smaller = a.area().min(b.area());
                overlaps.push(Overlap {
                    first,
                    second: first + 1 + offset,
                    area,
                    ratio: if smaller > 0.0 { area / smaller } else { 1.0 },
                });
            }
        }
    }
    overlaps
}

/// Largest pairwise overlap ratio, zero for disjoint layouts
pub fn max_overlap_ratio(result: &LayoutResult) -> f64 {
    pairwise_overlaps(result)
        .iter()
        .map(|overlap| overlap.ratio)
        .fold(0.0, f64::max)
}

/// Whether every rotated outline stays within the layout region, up to `tolerance` pixels
pub fn is_contained(result: &LayoutResult, tolerance: f64) -> bool {
    let region = result.region;
    result.placements.iter().all(|placement| {
        placement
            .geometry
            .outline(placement.rotation)
            .points()
            .iter()
            .all(|p| {
                p.x >= region.x - tolerance
                    && p.y >= region.y - tolerance
                    && p.x <= region.right() + tolerance
                    && p.y <= region.bottom() + tolerance
            })
    })
}

/// Relative deviation of covered area from the layout area
pub fn area_error(result: &LayoutResult) -> f64 {
    result.stats.coverage_error()
}

/// Summary printed by the command line `--analysis` flag
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    /// Style name
    pub style: String,
    /// Number of placement records
    pub placements: usize,
    /// Covered area over layout area
    pub covered_fraction: f64,
    /// Largest pairwise overlap ratio
    pub max_overlap_ratio: f64,
    /// Every outline inside the region
    pub contained: bool,
    /// Items placed through a fallback path
    pub fallback_count: usize,
    /// Area-filling layout covering the region within tolerance
    pub exact: bool,
}

impl LayoutReport {
    /// Measure a layout
    pub fn measure(result: &LayoutResult) -> Self {
        Self {
            style: result.style.clone(),
            placements: result.len(),
            covered_fraction: result.stats.covered_area / result.stats.layout_area,
            max_overlap_ratio: max_overlap_ratio(result),
            contained: is_contained(result, 1e-3),
            fallback_count: result.stats.fallback_count,
            exact: result.stats.exact,
        }
    }
}

impl std::fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} placements, coverage {:.1}%, max overlap {:.1}%, contained {}, fallbacks {}, exact {}",
            self.style,
            self.placements,
            self.covered_fraction * 100.0,
            self.max_overlap_ratio * 100.0,
            self.contained,
            self.fallback_count,
            self.exact
        )
    }
}
