//! Rejection-sampling placement for overlap-tolerant styles
//!
//! Each item draws a size, a rotation and a position inside the region until
//! its rotated footprint overlaps every earlier footprint by no more than the
//! configured fraction of the smaller rectangle. After
//! [`MAX_COLLISION_ATTEMPTS`] draws the item falls back to its cell of a
//! deterministic grid. Overlap is judged on axis-aligned footprints, which
//! contain the rotated rectangles, so the bound also holds for the true
//! rotated shapes.
//!
//! A profile may carry a set of fold angles; every draw then starts from one
//! of them, which is how origami turns its squares onto a diagonal.

use crate::algorithm::grid::grid_cells;
use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::io::configuration::{GEOMETRY_EPSILON, MAX_COLLISION_ATTEMPTS};
use crate::io::error::Result;
use crate::math::random::LayoutRng;
use crate::model::PlacementRecord;
use crate::spatial::Rect;
use crate::spatial::crop::crop_for;

const MIN_ASPECT: f64 = 0.5;
const MAX_ASPECT: f64 = 2.0;

/// Shape of the placed rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeAspect {
    /// Follow the item's own aspect ratio
    Item,
    /// Fixed aspect ratio (width / height)
    Fixed(f64),
}

/// Sampling parameters of one collision style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionProfile {
    /// Rotations are drawn from `[-max_rotation, max_rotation]` degrees
    pub max_rotation: f64,
    /// Areas vary by this fraction in either direction
    pub size_jitter: f64,
    /// Total nominal item area as a fraction of the region
    pub fill: f64,
    /// Rectangle shape
    pub aspect: ShapeAspect,
    /// Base rotations in degrees; each draw picks one before adding the tilt
    pub fold_angles: &'static [f64],
}

/// Scattered, slightly rotated prints that may overlap a little
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionStyle {
    name: &'static str,
    description: &'static str,
    profile: CollisionProfile,
}

impl CollisionStyle {
    /// Custom collision style
    pub const fn new(
        name: &'static str,
        description: &'static str,
        profile: CollisionProfile,
    ) -> Self {
        Self {
            name,
            description,
            profile,
        }
    }

    /// Loose scatter keeping each photo's own shape
    pub const fn scrapbook() -> Self {
        Self::new(
            "scrapbook",
            "Scattered photos with gentle tilt and light overlap",
            CollisionProfile {
                max_rotation: 8.0,
                size_jitter: 0.25,
                fill: 0.35,
                aspect: ShapeAspect::Item,
                fold_angles: &[],
            },
        )
    }

    /// Square pieces with a slight tilt
    pub const fn puzzle() -> Self {
        Self::new(
            "puzzle",
            "Square pieces, nearly aligned",
            CollisionProfile {
                max_rotation: 4.0,
                size_jitter: 0.1,
                fill: 0.4,
                aspect: ShapeAspect::Fixed(1.0),
                fold_angles: &[],
            },
        )
    }

    /// Portrait prints tossed on a table
    pub const fn polaroid() -> Self {
        Self::new(
            "polaroid",
            "Portrait prints with strong random tilt",
            CollisionProfile {
                max_rotation: 15.0,
                size_jitter: 0.15,
                fill: 0.35,
                aspect: ShapeAspect::Fixed(0.8),
                fold_angles: &[],
            },
        )
    }

    /// Square sheets turned onto a diagonal
    pub const fn origami() -> Self {
        Self::new(
            "origami",
            "Square sheets folded onto their diagonals",
            CollisionProfile {
                max_rotation: 0.0,
                size_jitter: 0.3,
                fill: 0.1,
                aspect: ShapeAspect::Fixed(1.0),
                fold_angles: &[45.0, -45.0, 135.0, -135.0],
            },
        )
    }

    /// Sampling parameters
    pub const fn profile(&self) -> &CollisionProfile {
        &self.profile
    }
}

/// Whether `candidate` overlaps every placed footprint within the bound
///
/// `placed` holds `(rect, footprint)` pairs; the bound is `ratio` times the
/// smaller of the two unrotated rectangle areas.
pub fn within_overlap_bound(
    candidate: &Rect,
    footprint: &Rect,
    placed: &[(Rect, Rect)],
    ratio: f64,
) -> bool {
    placed.iter().all(|(rect, other)| {
        footprint.intersection_area(other)
            <= ratio.mul_add(candidate.area().min(rect.area()), GEOMETRY_EPSILON)
    })
}

// One draw: rectangle plus rotation, with its footprint inside the region
fn sample(
    region: &Rect,
    base_area: f64,
    aspect: f64,
    profile: &CollisionProfile,
    rng: &mut LayoutRng,
) -> (Rect, f64, Rect) {
    let area = base_area * rng.jitter(1.0, profile.size_jitter);
    let fold = if profile.fold_angles.is_empty() {
        0.0
    } else {
        let pick = rng.index(profile.fold_angles.len());
        profile.fold_angles.get(pick).copied().unwrap_or(0.0)
    };
    let rotation = rng.jitter(fold, profile.max_rotation);
    let mut width = (area * aspect).sqrt();
    let mut height = width / aspect;

    let (sin, cos) = rotation.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let footprint_width = width.mul_add(cos, height * sin);
    let footprint_height = width.mul_add(sin, height * cos);
    let shrink = (region.width / footprint_width)
        .min(region.height / footprint_height)
        .min(1.0);
    width *= shrink;
    height *= shrink;
    let (half_w, half_h) = (
        footprint_width * shrink * 0.5,
        footprint_height * shrink * 0.5,
    );

    let cx = rng.uniform(region.x + half_w, region.right() - half_w);
    let cy = rng.uniform(region.y + half_h, region.bottom() - half_h);
    let rect = Rect::new(cx - width * 0.5, cy - height * 0.5, width, height);
    let footprint = rect.rotated_bounds(rotation);
    (rect, rotation, footprint)
}

impl PlacementAlgorithm for CollisionStyle {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::OverlapTolerant
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let region = context.region;
        let count = context.item_count();
        let ratio = context.options.max_overlap_ratio();
        let base_area = region.area() * self.profile.fill / count as f64;

        let mut run = PlacementRun::new(count);
        let mut placed: Vec<(Rect, Rect)> = Vec::with_capacity(count);
        let mut fallback_cells: Option<Vec<Rect>> = None;

        for (index, item) in context.items.iter().enumerate() {
            let aspect = match self.profile.aspect {
                ShapeAspect::Item => item.aspect_ratio,
                ShapeAspect::Fixed(aspect) => aspect,
            }
            .clamp(MIN_ASPECT, MAX_ASPECT);

            let accepted = (0..MAX_COLLISION_ATTEMPTS).find_map(|_| {
                let (rect, rotation, footprint) =
                    sample(&region, base_area, aspect, &self.profile, &mut context.rng);
                within_overlap_bound(&rect, &footprint, &placed, ratio)
                    .then_some((rect, rotation, footprint))
            });

            let z_order = index as i32;
            if let Some((rect, rotation, footprint)) = accepted {
                run.place(
                    PlacementRecord::rect(
                        item.id.as_str(),
                        index,
                        rect,
                        crop_for(item.aspect_ratio, &rect),
                    )
                    .rotated(rotation)
                    .with_z_order(z_order),
                )?;
                placed.push((rect, footprint));
            } else {
                tracing::warn!(
                    item = %item.id,
                    attempts = MAX_COLLISION_ATTEMPTS,
                    "no placement within overlap bound, using grid cell"
                );
                let cells = fallback_cells.get_or_insert_with(|| {
                    grid_cells(&region, count, context.options.rows, context.options.cols)
                });
                let cell = cells.get(index).copied().unwrap_or(region);
                run.fall_back(
                    PlacementRecord::rect(
                        item.id.as_str(),
                        index,
                        cell,
                        crop_for(item.aspect_ratio, &cell),
                    )
                    .with_z_order(z_order),
                )?;
                placed.push((cell, cell));
            }
        }

        Ok(run)
    }
}
