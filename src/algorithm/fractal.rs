//! Recursive golden-ratio subdivision

use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::io::error::Result;
use crate::math::random::LayoutRng;
use crate::math::sequence::split_ratio;
use crate::model::PlacementRecord;
use crate::spatial::Rect;
use crate::spatial::crop::crop_for;

const RATIO_JITTER: f64 = 0.05;
const MIN_RATIO: f64 = 0.2;

/// Recursive binary subdivision along the longer axis
#[derive(Debug, Clone, Copy, Default)]
pub struct FractalStyle;

/// Leaves of the subdivision tree in pre-order
///
/// Each split divides the item count in the same ratio as the area. Past
/// `ceil(log2 count) + 2` levels a node is cut into equal strips instead.
pub fn subdivide(region: &Rect, count: usize, rng: &mut LayoutRng) -> Vec<Rect> {
    let max_depth = count.max(1).next_power_of_two().trailing_zeros() as usize + 2;
    let mut leaves = Vec::with_capacity(count);
    let mut step = 0;
    split_node(*region, count, 0, max_depth, &mut step, rng, &mut leaves);
    leaves
}

fn split_node(
    rect: Rect,
    count: usize,
    depth: usize,
    max_depth: usize,
    step: &mut usize,
    rng: &mut LayoutRng,
    leaves: &mut Vec<Rect>,
) {
    match count {
        0 => {}
        1 => leaves.push(rect),
        _ if depth >= max_depth => leaves.extend(rect.strips(count)),
        _ => {
            let ratio = rng
                .jitter(split_ratio(*step), RATIO_JITTER)
                .clamp(MIN_RATIO, 1.0 - MIN_RATIO);
            *step += 1;

            let first = ((count as f64 * ratio).round() as usize).clamp(1, count - 1);
            let (a, b) = rect.split(ratio);
            split_node(a, first, depth + 1, max_depth, step, rng, leaves);
            split_node(b, count - first, depth + 1, max_depth, step, rng, leaves);
        }
    }
}

impl PlacementAlgorithm for FractalStyle {
    fn name(&self) -> &'static str {
        "fractal"
    }

    fn description(&self) -> &'static str {
        "Recursive golden-ratio splits along the longer side"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::AreaFilling
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let leaves = subdivide(&context.region, context.item_count(), &mut context.rng);
        let mut run = PlacementRun::new(context.item_count());

        for (index, (item, leaf)) in context.items.iter().zip(leaves).enumerate() {
            run.place(PlacementRecord::rect(
                item.id.as_str(),
                index,
                leaf,
                crop_for(item.aspect_ratio, &leaf),
            ))?;
        }

        Ok(run)
    }
}
