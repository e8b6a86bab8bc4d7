//! Free-space tracking for guillotine rectangle packing
//!
//! The set holds disjoint rectangles covering exactly the unallocated part of
//! the layout region. Rectangles are kept in a stable traversal order (lowest
//! `y`, then lowest `x`) so that every tie is broken the same way on every run.

use crate::io::configuration::{GEOMETRY_EPSILON, MIN_PACKED_SIDE};
use crate::io::error::{LayoutError, Result, geometry_error};
use crate::spatial::geometry::Rect;

/// Candidate produced by [`FreeRegionSet::best_fit`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Free rectangle the candidate was fitted into
    pub region: Rect,
    /// Fitted rectangle, anchored at the region's top-left corner
    pub rect: Rect,
    /// Free area the region would keep after the fit
    pub leftover: f64,
}

/// Set of disjoint free rectangles
#[derive(Debug, Clone, Default)]
pub struct FreeRegionSet {
    regions: Vec<Rect>,
}

impl FreeRegionSet {
    /// Start with a single free rectangle
    pub fn new(region: Rect) -> Self {
        Self::from_regions(vec![region])
    }

    /// Start from an arbitrary set of disjoint rectangles
    pub fn from_regions(regions: Vec<Rect>) -> Self {
        let mut set = Self {
            regions: regions.into_iter().filter(|r| !r.is_degenerate()).collect(),
        };
        set.sort();
        set
    }

    /// Free rectangles in traversal order
    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    /// Number of free rectangles
    pub const fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no free space remains
    pub const fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total unallocated area
    pub fn total_area(&self) -> f64 {
        self.regions.iter().map(Rect::area).sum()
    }

    /// Index of the largest free rectangle (first in traversal order on ties)
    pub fn largest(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, region) in self.regions.iter().enumerate() {
            if best.is_none_or(|(_, area)| region.area() > area + GEOMETRY_EPSILON) {
                best = Some((index, region.area()));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Best-area-fit search for a rectangle of the given aspect ratio and area
    ///
    /// Regions that can hold the full target are preferred, choosing the one
    /// that leaves the least free area. When none can, the region admitting
    /// the largest aspect-preserving shrink of the target wins. Ties go to the
    /// first region in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoSpaceAvailable`] if the set is empty, or a
    /// geometry error for a non-positive target
    pub fn best_fit(&self, target_aspect: f64, target_area: f64) -> Result<Fit> {
        if !(target_aspect.is_finite() && target_area.is_finite())
            || target_aspect <= 0.0
            || target_area <= 0.0
        {
            return Err(geometry_error(
                "best fit",
                &format!("target aspect {target_aspect}, area {target_area}"),
            ));
        }

        let ideal_width = (target_area * target_aspect).sqrt();
        let ideal_height = (target_area / target_aspect).sqrt();

        // (fits whole target, score, fit); lower score wins
        let mut best: Option<(bool, f64, Fit)> = None;

        for region in &self.regions {
            let fits = ideal_width <= region.width + GEOMETRY_EPSILON
                && ideal_height <= region.height + GEOMETRY_EPSILON;
            let scale = if fits {
                1.0
            } else {
                (region.width / ideal_width).min(region.height / ideal_height)
            };

            let (width, height) =
                snap_to_region(region, ideal_width * scale, ideal_height * scale);
            let rect = Rect::new(region.x, region.y, width, height);
            let leftover = region.area() - rect.area();
            let score = if fits { leftover } else { -rect.area() };

            let better = match best {
                None => true,
                Some((best_fits, best_score, _)) => {
                    (fits && !best_fits)
                        || (fits == best_fits && score < best_score - GEOMETRY_EPSILON)
                }
            };
            if better {
                best = Some((
                    fits,
                    score,
                    Fit {
                        region: *region,
                        rect,
                        leftover,
                    },
                ));
            }
        }

        best.map(|(_, _, fit)| fit)
            .ok_or(LayoutError::NoSpaceAvailable { remaining_items: 1 })
    }

    /// Claim `preferred` from the free rectangle whose top-left corner it shares
    ///
    /// The free rectangle is removed and up to two guillotine remainders are
    /// reinserted, cutting along the longer leftover edge.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if `preferred` is degenerate or does not sit
    /// at the corner of any free rectangle
    pub fn allocate(&mut self, preferred: &Rect) -> Result<Rect> {
        preferred.validate()?;
        let index = self.anchored_region(preferred)?;
        let region = self.regions.remove(index);

        let claimed = Rect::new(
            region.x,
            region.y,
            preferred.width.min(region.width),
            preferred.height.min(region.height),
        );
        self.regions
            .extend(guillotine_remainders(&region, &claimed).into_iter().flatten());
        self.sort();
        Ok(claimed)
    }

    /// Cut a full-width or full-height slice of roughly `target_area` from a free rectangle
    ///
    /// The orientation whose slice aspect ratio is closer to `target_aspect`
    /// is used, so at most one remainder goes back into the set.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if `region` is not a member of the set
    pub fn slice(&mut self, region: &Rect, target_aspect: f64, target_area: f64) -> Result<Rect> {
        let index = self.anchored_region(region)?;
        let region = self.regions.remove(index);
        let area = target_area.clamp(0.0, region.area());

        // Full-height column versus full-width row
        let column = Rect::new(region.x, region.y, area / region.height, region.height);
        let row = Rect::new(region.x, region.y, region.width, area / region.width);
        let mismatch = |r: &Rect| (r.aspect_ratio() / target_aspect).ln().abs();

        let mut cut = if mismatch(&row) < mismatch(&column) {
            row
        } else {
            column
        };
        let (width, height) = snap_to_region(&region, cut.width, cut.height);
        cut.width = width;
        cut.height = height;

        if cut.is_degenerate() {
            cut = region;
        }

        let remainder = if cut.width < region.width - GEOMETRY_EPSILON {
            Rect::new(cut.right(), region.y, region.right() - cut.right(), region.height)
        } else {
            Rect::new(region.x, cut.bottom(), region.width, region.bottom() - cut.bottom())
        };
        if !remainder.is_degenerate() {
            self.regions.push(remainder);
            self.sort();
        }
        Ok(cut)
    }

    /// Remove and return a whole free rectangle
    pub fn take(&mut self, index: usize) -> Option<Rect> {
        (index < self.regions.len()).then(|| self.regions.remove(index))
    }

    /// Remove and return every free rectangle, leaving the set empty
    pub fn drain(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.regions)
    }

    fn anchored_region(&self, rect: &Rect) -> Result<usize> {
        self.regions
            .iter()
            .position(|r| {
                (r.x - rect.x).abs() <= GEOMETRY_EPSILON && (r.y - rect.y).abs() <= GEOMETRY_EPSILON
            })
            .ok_or_else(|| {
                geometry_error(
                    "free space allocation",
                    &format!("no free rectangle anchored at ({}, {})", rect.x, rect.y),
                )
            })
    }

    fn sort(&mut self) {
        self.regions
            .sort_by(|a, b| a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x)));
    }
}

/// Up to two rectangles covering `region` minus `claimed` (anchored at the top-left)
///
/// The cut runs along the longer leftover edge: a wide leftover keeps a
/// full-height right strip, a tall leftover keeps a full-width bottom strip.
pub fn guillotine_remainders(region: &Rect, claimed: &Rect) -> [Option<Rect>; 2] {
    let leftover_width = region.width - claimed.width;
    let leftover_height = region.height - claimed.height;

    let (right, bottom) = if leftover_width > leftover_height {
        (
            Rect::new(claimed.right(), region.y, leftover_width, region.height),
            Rect::new(region.x, claimed.bottom(), claimed.width, leftover_height),
        )
    } else {
        (
            Rect::new(claimed.right(), region.y, leftover_width, claimed.height),
            Rect::new(region.x, claimed.bottom(), region.width, leftover_height),
        )
    };

    [
        (!right.is_degenerate()).then_some(right),
        (!bottom.is_degenerate()).then_some(bottom),
    ]
}

// Leftover strips thinner than this are absorbed into the claimed rectangle
fn snap_threshold(region: &Rect) -> f64 {
    MIN_PACKED_SIDE.min(region.min_side() * 0.25)
}

fn snap_to_region(region: &Rect, width: f64, height: f64) -> (f64, f64) {
    let threshold = snap_threshold(region);
    let width = if region.width - width < threshold {
        region.width
    } else {
        width
    };
    let height = if region.height - height < threshold {
        region.height
    } else {
        height
    };
    (width, height)
}
