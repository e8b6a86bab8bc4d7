//! Radial styles: golden-angle spiral, concentric mandala, kaleidoscope
//!
//! Every placement is a square whose circumscribed circle stays inside the
//! inscribed circle of the region and clear of every other placement's
//! circle, so placements never overlap and never leave the region.

use std::f64::consts::{PI, TAU};

use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::io::configuration::MAX_SYMMETRY_FOLD;
use crate::io::error::Result;
use crate::math::sequence::spiral_position;
use crate::model::{ImageItem, LayoutOptions, PlacementRecord};
use crate::spatial::crop::crop_for;
use crate::spatial::{Point, Rect};

// Outermost spiral item is this much smaller than the central one
const SPIRAL_FALLOFF: f64 = 0.3;
// Circumscribed diameter of a ring item as a fraction of the ring spacing
const RING_FILL: f64 = 0.95;

/// Golden-angle spiral, largest items at the center
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralStyle;

/// Center item surrounded by concentric rings
#[derive(Debug, Clone, Copy, Default)]
pub struct MandalaStyle;

/// One wedge of rings replicated around the center
#[derive(Debug, Clone, Copy, Default)]
pub struct KaleidoscopeStyle;

/// Largest number of items ring `ring` (1-based) holds at the given spacing
///
/// Adjacent items on the ring are at least `RING_FILL` ring spacings apart.
pub fn ring_capacity(ring: usize) -> usize {
    if ring == 0 {
        return 1;
    }
    let half_chord = RING_FILL / (2.0 * ring as f64);
    if half_chord >= 1.0 {
        return 1;
    }
    (PI / half_chord.asin()).floor() as usize
}

/// Square of circumscribed diameter `diameter` centered on `center`
fn square_at(center: Point, diameter: f64) -> Rect {
    let side = diameter / 2f64.sqrt();
    Rect::new(center.x - side * 0.5, center.y - side * 0.5, side, side)
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        radius.mul_add(angle.cos(), center.x),
        radius.mul_add(angle.sin(), center.y),
    )
}

fn normalized_degrees(radians: f64) -> f64 {
    radians.to_degrees().rem_euclid(360.0)
}

fn square_record(item: &ImageItem, index: usize, rect: Rect) -> PlacementRecord {
    PlacementRecord::rect(item.id.as_str(), index, rect, crop_for(item.aspect_ratio, &rect))
}

/// Circle centers and diameters for a golden-angle spiral of `count` items
///
/// Diameters shrink linearly outward. If any two circles would overlap the
/// spiral radius grows once by the worst overlap factor; the whole pattern is
/// then scaled to fit the inscribed circle of `region`.
pub fn spiral_circles(region: &Rect, count: usize) -> Vec<(Point, f64)> {
    let center = region.center();
    let max_radius = region.min_side() * 0.5;
    let last = count.saturating_sub(1).max(1) as f64;

    // Unit layout: spacing 1, diameters up to 1
    let diameters: Vec<f64> = (0..count)
        .map(|i| (i as f64 / last).mul_add(-SPIRAL_FALLOFF, 1.0))
        .collect();
    let polar_points: Vec<(f64, f64)> = (0..count).map(|i| spiral_position(i, 1.0)).collect();
    let positions: Vec<Point> = polar_points
        .iter()
        .map(|&(radius, angle)| polar(Point::new(0.0, 0.0), radius, angle))
        .collect();

    let mut growth: f64 = 1.0;
    for (i, (a, da)) in positions.iter().zip(&diameters).enumerate() {
        for (b, db) in positions.iter().zip(&diameters).skip(i + 1) {
            let distance = a.distance(*b);
            if distance > 0.0 {
                growth = growth.max((da + db) * 0.5 / distance);
            }
        }
    }
    if growth > 1.0 {
        tracing::debug!(growth, "spiral radius grown to clear overlaps");
    }

    let extent = polar_points
        .iter()
        .zip(&diameters)
        .map(|(&(radius, _), diameter)| growth.mul_add(radius, diameter * 0.5))
        .fold(0.0, f64::max);
    let scale = if extent > 0.0 { max_radius / extent } else { 0.0 };

    polar_points
        .iter()
        .zip(&diameters)
        .map(|(&(radius, angle), diameter)| {
            (polar(center, radius * growth * scale, angle), diameter * scale)
        })
        .collect()
}

impl PlacementAlgorithm for SpiralStyle {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn description(&self) -> &'static str {
        "Golden-angle spiral, largest photos in the middle"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::Radial
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let circles = spiral_circles(&context.region, context.item_count());
        let mut run = PlacementRun::new(context.item_count());

        for (index, (item, (center, diameter))) in context.items.iter().zip(circles).enumerate() {
            run.place(square_record(item, index, square_at(center, diameter)))?;
        }

        Ok(run)
    }
}

/// Ring index and slot count for each of `count` mandala items
///
/// Item 0 sits at the center; later items fill rings outward, the last ring
/// holding whatever remains.
fn mandala_rings(count: usize) -> Vec<usize> {
    let mut counts = vec![1usize.min(count)];
    let mut placed = counts.iter().sum::<usize>();
    let mut ring = 1;
    while placed < count {
        let take = ring_capacity(ring).min(count - placed);
        counts.push(take);
        placed += take;
        ring += 1;
    }
    counts
}

/// Concentric placements: `(center, diameter, rotation in degrees)` per item
pub fn mandala_slots(region: &Rect, count: usize) -> Vec<(Point, f64, f64)> {
    let rings = mandala_rings(count);
    let outer = rings.len().saturating_sub(1) as f64;
    let spacing = region.min_side() * 0.5 / (outer + 0.5);
    let center = region.center();
    let diameter = RING_FILL * spacing;

    let mut slots = Vec::with_capacity(count);
    for (ring, &slots_in_ring) in rings.iter().enumerate() {
        if ring == 0 {
            slots.push((center, diameter, 0.0));
            continue;
        }
        let step = TAU / slots_in_ring as f64;
        // Odd rings are offset by half a slot
        let offset = if ring % 2 == 1 { step * 0.5 } else { 0.0 };
        for slot in 0..slots_in_ring {
            let angle = step.mul_add(slot as f64, offset);
            slots.push((
                polar(center, spacing * ring as f64, angle),
                diameter,
                normalized_degrees(angle),
            ));
        }
    }
    slots
}

impl PlacementAlgorithm for MandalaStyle {
    fn name(&self) -> &'static str {
        "mandala"
    }

    fn description(&self) -> &'static str {
        "Concentric rings around a central photo"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::Radial
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let slots = mandala_slots(&context.region, context.item_count());
        let mut run = PlacementRun::new(context.item_count());

        for (index, (item, (center, diameter, rotation))) in
            context.items.iter().zip(slots).enumerate()
        {
            run.place(square_record(item, index, square_at(center, diameter)).rotated(rotation))?;
        }

        Ok(run)
    }
}

/// One kaleidoscope placement before conversion to a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeSlot {
    /// Input index of the item
    pub item_index: usize,
    /// Replica (wedge) number
    pub wedge: usize,
    /// Square center
    pub center: Point,
    /// Circumscribed diameter
    pub diameter: f64,
    /// Angular position in radians
    pub angle: f64,
    /// Replica is a mirror image of the base wedge
    pub mirrored: bool,
}

/// Per-ring slot counts of one wedge holding `count` items
///
/// Ring `j` contributes `floor(capacity(j) / fold)` slots per wedge, so the
/// `fold` replicas together never exceed the ring's capacity.
fn wedge_rings(count: usize, fold: usize) -> Vec<usize> {
    let fold = fold.max(1);
    let mut counts = Vec::new();
    let mut placed = 0;
    let mut ring = 1;
    while placed < count {
        let take = (ring_capacity(ring) / fold).min(count - placed);
        counts.push(take);
        placed += take;
        ring += 1;
    }
    counts
}

/// Slots of every replica, wedge-major
///
/// `fold` is clamped to `1..=MAX_SYMMETRY_FOLD`.
pub fn kaleidoscope_slots(region: &Rect, count: usize, fold: usize, mirror: bool) -> Vec<WedgeSlot> {
    let fold = fold.clamp(1, MAX_SYMMETRY_FOLD);
    let rings = wedge_rings(count, fold);
    let spacing = region.min_side() * 0.5 / (rings.len() as f64 + 0.5);
    let diameter = RING_FILL * spacing;
    let center = region.center();
    let wedge_angle = TAU / fold as f64;

    // Base wedge angles in [0, wedge_angle)
    let mut base = Vec::with_capacity(count);
    for (ring, &slots) in rings.iter().enumerate() {
        for slot in 0..slots {
            let angle = (slot as f64 + 0.5) * wedge_angle / slots as f64;
            base.push((ring + 1, angle));
        }
    }

    let mut out = Vec::with_capacity(count.saturating_mul(fold));
    for wedge in 0..fold {
        let mirrored = mirror && wedge % 2 == 1;
        for (item_index, &(ring, angle)) in base.iter().enumerate() {
            let local = if mirrored { wedge_angle - angle } else { angle };
            let angle = wedge_angle.mul_add(wedge as f64, local);
            out.push(WedgeSlot {
                item_index,
                wedge,
                center: polar(center, spacing * ring as f64, angle),
                diameter,
                angle,
                mirrored,
            });
        }
    }
    out
}

impl PlacementAlgorithm for KaleidoscopeStyle {
    fn name(&self) -> &'static str {
        "kaleidoscope"
    }

    fn description(&self) -> &'static str {
        "One wedge of photos repeated with rotational symmetry"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::Radial
    }

    fn expected_placements(
        &self,
        item_count: usize,
        _region: &Rect,
        options: &LayoutOptions,
    ) -> usize {
        item_count.saturating_mul(options.symmetry_fold())
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let count = context.item_count();
        let fold = context.options.symmetry_fold();
        let slots = kaleidoscope_slots(
            &context.region,
            count,
            fold,
            context.options.mirror_wedges,
        );
        let mut run = PlacementRun::new(count.saturating_mul(fold));

        for slot in slots {
            let Some(item) = context.items.get(slot.item_index) else {
                continue;
            };
            let z_order = (slot.wedge * count + slot.item_index) as i32;
            run.place(
                square_record(item, slot.item_index, square_at(slot.center, slot.diameter))
                    .rotated(normalized_degrees(slot.angle))
                    .with_z_order(z_order)
                    .mirrored(slot.mirrored),
            )?;
        }

        Ok(run)
    }
}
