//! Recursive guillotine packing ("mosaic")
//!
//! Items are taken largest weight first. Each one receives a target area
//! proportional to its weight share of the remaining free area and is cut out
//! of the free-space tracker by best-area-fit. The number of free rectangles
//! never exceeds the number of unplaced items: while at least two more items
//! than rectangles remain an allocation may leave two remainders, with one
//! spare item it may leave only one, and once the counts meet the remaining
//! rectangles are handed out directly. Every free rectangle therefore ends
//! up inside some placement and the region is covered exactly.

use std::cmp::Ordering;

use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::io::error::{LayoutError, Result, computation_error};
use crate::math::random::LayoutRng;
use crate::math::sequence::apportion;
use crate::model::{ImageItem, PlacementRecord};
use crate::spatial::Rect;
use crate::spatial::crop::crop_for;
use crate::spatial::free_space::FreeRegionSet;

// Target areas vary by up to this fraction in either direction
const AREA_JITTER: f64 = 0.15;

/// Weighted guillotine packing that tiles the region exactly
#[derive(Debug, Clone, Copy, Default)]
pub struct MosaicStyle;

/// Item indices in packing order: weight descending, then aspect ratio
/// descending, then input order
pub fn packing_order(items: &[ImageItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| match (items.get(a), items.get(b)) {
        (Some(x), Some(y)) => y
            .weight
            .total_cmp(&x.weight)
            .then(y.aspect_ratio.total_cmp(&x.aspect_ratio))
            .then(a.cmp(&b)),
        _ => Ordering::Equal,
    });
    order
}

impl PlacementAlgorithm for MosaicStyle {
    fn name(&self) -> &'static str {
        "mosaic"
    }

    fn description(&self) -> &'static str {
        "Weighted recursive rectangle packing with no gaps"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::AreaFilling
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let items = context.items;
        let order = packing_order(items);
        let mut run = PlacementRun::new(items.len());
        let mut free = FreeRegionSet::new(context.region);
        let mut remaining_weight: f64 = items.iter().map(|item| item.weight).sum();
        let mut queue = order.as_slice();

        while let Some((&index, rest)) = queue.split_first() {
            let remaining = queue.len();
            if remaining <= free.len() {
                distribute(&mut free, queue, items, &mut run, false)?;
                break;
            }

            let item = items
                .get(index)
                .ok_or_else(|| computation_error("mosaic", &format!("no item {index}")))?;
            let target_area = target_area(
                free.total_area(),
                item.weight,
                remaining_weight,
                remaining,
                &mut context.rng,
            );

            let fit = match free.best_fit(item.aspect_ratio, target_area) {
                Ok(fit) => fit,
                Err(LayoutError::NoSpaceAvailable { .. }) => {
                    tracing::debug!(remaining, "free space exhausted, distributing");
                    distribute(&mut free, queue, items, &mut run, true)?;
                    break;
                }
                Err(error) => return Err(run.fail(error)),
            };

            let rect = if remaining >= free.len() + 2 {
                free.allocate(&fit.rect)
            } else {
                free.slice(&fit.region, item.aspect_ratio, target_area)
            }
            .map_err(|error| run.fail(error))?;

            run.place(PlacementRecord::rect(
                item.id.as_str(),
                index,
                rect,
                crop_for(item.aspect_ratio, &rect),
            ))?;
            remaining_weight -= item.weight;
            queue = rest;
        }

        Ok(run)
    }
}

fn target_area(
    free_area: f64,
    weight: f64,
    remaining_weight: f64,
    remaining: usize,
    rng: &mut LayoutRng,
) -> f64 {
    let share = if remaining_weight > 0.0 {
        (weight / remaining_weight).min(1.0)
    } else {
        1.0 / remaining as f64
    };
    let jitter = if remaining > 1 {
        rng.jitter(1.0, AREA_JITTER)
    } else {
        1.0
    };
    free_area * share * jitter
}

// Hands every remaining free rectangle to the remaining items. Larger
// rectangles go to heavier items; a rectangle given several items is cut
// into equal strips.
fn distribute(
    free: &mut FreeRegionSet,
    queue: &[usize],
    items: &[ImageItem],
    run: &mut PlacementRun,
    recovering: bool,
) -> Result<()> {
    let mut regions = free.drain();
    regions.sort_by(|a, b| b.area().total_cmp(&a.area()));
    if regions.is_empty() {
        return Err(run.fail(LayoutError::NoSpaceAvailable {
            remaining_items: queue.len(),
        }));
    }
    if regions.len() > queue.len() {
        tracing::warn!(
            regions = regions.len(),
            items = queue.len(),
            "more free rectangles than items, smallest left empty"
        );
        regions.truncate(queue.len());
    }

    let areas: Vec<f64> = regions.iter().map(Rect::area).collect();
    let counts = apportion(queue.len(), &areas);

    let mut pending = queue.iter();
    for (region, count) in regions.iter().zip(counts) {
        for cell in region.strips(count) {
            let Some(&index) = pending.next() else {
                break;
            };
            let item = items
                .get(index)
                .ok_or_else(|| computation_error("mosaic", &format!("no item {index}")))?;
            let record = PlacementRecord::rect(
                item.id.as_str(),
                index,
                cell,
                crop_for(item.aspect_ratio, &cell),
            );
            if recovering {
                run.fall_back(record)?;
            } else {
                run.place(record)?;
            }
        }
    }

    Ok(())
}
