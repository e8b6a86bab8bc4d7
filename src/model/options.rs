//! Per-call layout options

use crate::io::configuration::{
    DEFAULT_MAX_OVERLAP_RATIO, DEFAULT_SEED, DEFAULT_SYMMETRY_FOLD, MAX_GRID_DIMENSION,
    MAX_SYMMETRY_FOLD,
};
use crate::io::error::{Result, invalid_parameter};
use crate::model::items::Canvas;
use crate::spatial::Rect;

/// Options recognized by [`compute_layout`](crate::compute_layout)
///
/// Options that a style does not use are ignored by it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Seed for every randomized choice; `None` uses [`DEFAULT_SEED`]
    pub seed: Option<u64>,
    /// Grid rows (grid-based styles only)
    pub rows: Option<usize>,
    /// Grid columns (grid-based styles only)
    pub cols: Option<usize>,
    /// Bound on pairwise overlap as a fraction of the smaller area (collision styles)
    pub max_overlap_ratio: Option<f64>,
    /// Number of wedge replicas (kaleidoscope only)
    pub symmetry_fold: Option<usize>,
    /// Uniform inset of the canvas reserved for externally drawn borders
    pub frame_margin: f64,
    /// Mirror alternating kaleidoscope wedges
    pub mirror_wedges: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            seed: None,
            rows: None,
            cols: None,
            max_overlap_ratio: None,
            symmetry_fold: None,
            frame_margin: 0.0,
            mirror_wedges: true,
        }
    }
}

impl LayoutOptions {
    /// Options with an explicit seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Set the seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set explicit grid dimensions
    #[must_use]
    pub const fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = Some(rows);
        self.cols = Some(cols);
        self
    }

    /// Set the overlap bound for collision styles
    #[must_use]
    pub const fn with_max_overlap_ratio(mut self, ratio: f64) -> Self {
        self.max_overlap_ratio = Some(ratio);
        self
    }

    /// Set the kaleidoscope symmetry fold
    #[must_use]
    pub const fn with_symmetry_fold(mut self, fold: usize) -> Self {
        self.symmetry_fold = Some(fold);
        self
    }

    /// Set the frame margin
    #[must_use]
    pub const fn with_frame_margin(mut self, margin: f64) -> Self {
        self.frame_margin = margin;
        self
    }

    /// Effective seed
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Effective overlap bound
    pub fn max_overlap_ratio(&self) -> f64 {
        self.max_overlap_ratio.unwrap_or(DEFAULT_MAX_OVERLAP_RATIO)
    }

    /// Effective symmetry fold
    pub fn symmetry_fold(&self) -> usize {
        self.symmetry_fold.unwrap_or(DEFAULT_SYMMETRY_FOLD)
    }

    /// Check every option against its documented range
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`](crate::LayoutError::InvalidParameter)
    /// naming the first offending option
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if let Some(count) = value
                && !(1..=MAX_GRID_DIMENSION).contains(&count)
            {
                return Err(invalid_parameter(
                    name,
                    &count,
                    &format!("must lie in [1, {MAX_GRID_DIMENSION}]"),
                ));
            }
        }
        if let Some(ratio) = self.max_overlap_ratio
            && !(0.0..=1.0).contains(&ratio)
        {
            return Err(invalid_parameter(
                "max_overlap_ratio",
                &ratio,
                &"must lie in [0, 1]",
            ));
        }
        if let Some(fold) = self.symmetry_fold
            && !(2..=MAX_SYMMETRY_FOLD).contains(&fold)
        {
            return Err(invalid_parameter(
                "symmetry_fold",
                &fold,
                &format!("must lie in [2, {MAX_SYMMETRY_FOLD}]"),
            ));
        }
        if !(self.frame_margin.is_finite() && self.frame_margin >= 0.0) {
            return Err(invalid_parameter(
                "frame_margin",
                &self.frame_margin,
                &"must be a finite non-negative number",
            ));
        }
        Ok(())
    }

    /// Canvas area left after applying the frame margin
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the margin consumes the canvas
    pub fn layout_region(&self, canvas: &Canvas) -> Result<Rect> {
        canvas.bounds().inset(self.frame_margin).ok_or_else(|| {
            invalid_parameter(
                "frame_margin",
                &self.frame_margin,
                &format!(
                    "leaves no room on a {}x{} canvas",
                    canvas.width, canvas.height
                ),
            )
        })
    }
}
