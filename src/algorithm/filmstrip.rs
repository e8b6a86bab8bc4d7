//! Contact sheet: equal film frames on a fixed grid inside a perforated border
//!
//! The frame grid depends only on the region size, so a sheet holds a fixed
//! number of frames. Larger item lists are sampled down with the layout seed
//! and the chosen items keep their input order.

use crate::algorithm::grid::grid_cells;
use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::io::configuration::{
    FILM_FRAME_BORDER, FILM_FRAME_GAP, FILM_FRAME_HEIGHT, FILM_FRAME_WIDTH, FILM_PERFORATION,
};
use crate::io::error::Result;
use crate::math::random::LayoutRng;
use crate::model::{LayoutOptions, PlacementRecord};
use crate::spatial::Rect;
use crate::spatial::crop::crop_for;

/// Film frames on a contact-sheet grid
#[derive(Debug, Clone, Copy, Default)]
pub struct FilmstripStyle;

// Region left once the perforation band is removed
fn sheet(region: &Rect) -> Rect {
    region.inset(FILM_PERFORATION).unwrap_or(*region)
}

fn frames_along(extent: f64, frame: f64) -> usize {
    let fitted = (2.0f64.mul_add(-FILM_FRAME_GAP, extent) / (frame + FILM_FRAME_GAP)).floor();
    if fitted >= 1.0 { fitted as usize } else { 1 }
}

/// Rows and columns of frames that fit in `region`, at least one of each
pub fn frame_grid(region: &Rect) -> (usize, usize) {
    let inner = sheet(region);
    (
        frames_along(inner.height, FILM_FRAME_HEIGHT),
        frames_along(inner.width, FILM_FRAME_WIDTH),
    )
}

/// Number of frames a sheet over `region` holds
pub fn frame_capacity(region: &Rect) -> usize {
    let (rows, cols) = frame_grid(region);
    rows.saturating_mul(cols)
}

/// Photo rectangles of the first `count` frames, row-major
///
/// Each frame is its grid cell minus half the gap on every side, and the
/// photograph sits inside the frame's border. Frames too small for the
/// insets keep the full cell. `count` is capped at [`frame_capacity`].
pub fn frame_rects(region: &Rect, count: usize) -> Vec<Rect> {
    let (rows, cols) = frame_grid(region);
    let capacity = rows.saturating_mul(cols);
    grid_cells(&sheet(region), capacity, Some(rows), Some(cols))
        .into_iter()
        .take(count.min(capacity))
        .map(|cell| {
            cell.inset(FILM_FRAME_GAP * 0.5)
                .and_then(|frame| frame.inset(FILM_FRAME_BORDER))
                .unwrap_or(cell)
        })
        .collect()
}

/// `take` distinct indices from `0..len` in ascending order
///
/// Returns every index when `take >= len`; otherwise a seeded partial
/// shuffle picks the subset.
pub fn sample_indices(len: usize, take: usize, rng: &mut LayoutRng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    if take >= len {
        return indices;
    }
    for slot in 0..take {
        let pick = slot + rng.index(len - slot);
        indices.swap(slot, pick);
    }
    indices.truncate(take);
    indices.sort_unstable();
    indices
}

impl PlacementAlgorithm for FilmstripStyle {
    fn name(&self) -> &'static str {
        "filmstrip"
    }

    fn description(&self) -> &'static str {
        "Contact sheet of film frames inside a perforated border"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::Framed
    }

    fn expected_placements(
        &self,
        item_count: usize,
        region: &Rect,
        _options: &LayoutOptions,
    ) -> usize {
        item_count.min(frame_capacity(region))
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let region = context.region;
        let count = context.item_count();
        let capacity = frame_capacity(&region);
        if count > capacity {
            tracing::info!(
                items = count,
                frames = capacity,
                "more items than frames, sampling"
            );
        }

        let chosen = sample_indices(count, capacity, &mut context.rng);
        let frames = frame_rects(&region, chosen.len());
        let mut run = PlacementRun::new(frames.len());
        for (&index, frame) in chosen.iter().zip(frames) {
            if let Some(item) = context.items.get(index) {
                run.place(PlacementRecord::rect(
                    item.id.as_str(),
                    index,
                    frame,
                    crop_for(item.aspect_ratio, &frame),
                ))?;
            }
        }
        Ok(run)
    }
}
