//! Sampled coverage map of a layout
//!
//! The region is divided into square sample cells of side `stride`; each
//! cell counts how many placements contain its center.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::model::LayoutResult;
use crate::spatial::Point;

/// Per-sample placement counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMap {
    counts: Array2<u16>,
}

impl CoverageMap {
    /// Sample a layout every `stride` pixels
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for a non-positive or non-finite stride
    pub fn sample(result: &LayoutResult, stride: f64) -> Result<Self> {
        if !(stride.is_finite() && stride > 0.0) {
            return Err(invalid_parameter("stride", &stride, &"must be positive"));
        }

        let region = result.region;
        let rows = (region.height / stride).ceil().max(1.0) as usize;
        let cols = (region.width / stride).ceil().max(1.0) as usize;
        let mut counts = Array2::<u16>::zeros((rows, cols));

        for placement in &result.placements {
            let Some(bounds) = placement.footprint().intersection(&region) else {
                continue;
            };
            let row_start = ((bounds.y - region.y) / stride).floor().max(0.0) as usize;
            let col_start = ((bounds.x - region.x) / stride).floor().max(0.0) as usize;
            let row_end = (((bounds.bottom() - region.y) / stride).ceil() as usize).min(rows);
            let col_end = (((bounds.right() - region.x) / stride).ceil() as usize).min(cols);

            for row in row_start..row_end {
                for col in col_start..col_end {
                    let sample = Point::new(
                        stride.mul_add(col as f64 + 0.5, region.x),
                        stride.mul_add(row as f64 + 0.5, region.y),
                    );
                    if placement
                        .geometry
                        .contains_point(sample, placement.rotation)
                        && let Some(count) = counts.get_mut((row, col))
                    {
                        *count = count.saturating_add(1);
                    }
                }
            }
        }

        Ok(Self { counts })
    }

    /// Raw counts, row-major
    pub const fn counts(&self) -> &Array2<u16> {
        &self.counts
    }

    fn fraction(&self, predicate: impl Fn(u16) -> bool) -> f64 {
        let total = self.counts.len();
        if total == 0 {
            return 0.0;
        }
        self.counts.iter().filter(|&&count| predicate(count)).count() as f64 / total as f64
    }

    /// Share of samples no placement covers
    pub fn gap_fraction(&self) -> f64 {
        self.fraction(|count| count == 0)
    }

    /// Share of samples covered by two or more placements
    pub fn overlap_fraction(&self) -> f64 {
        self.fraction(|count| count > 1)
    }

    /// Share of samples covered at least once
    pub fn covered_fraction(&self) -> f64 {
        self.fraction(|count| count > 0)
    }

    /// Deepest stack of placements at any sample
    pub fn max_depth(&self) -> u16 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
