//! Uniform grid layout

use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::io::error::Result;
use crate::math::sequence::grid_dimensions;
use crate::model::PlacementRecord;
use crate::spatial::Rect;
use crate::spatial::crop::crop_for;

/// Row-major grid of equal cells
#[derive(Debug, Clone, Copy, Default)]
pub struct GridStyle;

/// Cells for `count` items laid out row-major over `region`
///
/// Missing dimensions are derived from the item count; without either the
/// dimensions come from [`grid_dimensions`]. Rows that would stay empty are
/// dropped, a grid too small for `count` grows extra rows, and the last
/// populated cell stretches over any unused cells in the final row so the
/// region stays fully covered.
pub fn grid_cells(
    region: &Rect,
    count: usize,
    rows: Option<usize>,
    cols: Option<usize>,
) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let (requested_rows, cols) = match (rows, cols) {
        (Some(r), Some(c)) => (r.max(1), c.max(1)),
        (Some(r), None) => (r.max(1), count.div_ceil(r.max(1))),
        (None, Some(c)) => (count.div_ceil(c.max(1)), c.max(1)),
        (None, None) => grid_dimensions(count, region.aspect_ratio()),
    };
    let rows = count.div_ceil(cols);
    if requested_rows.saturating_mul(cols) < count {
        tracing::warn!(
            rows = requested_rows,
            cols,
            count,
            grown_to = rows,
            "grid too small for item count, adding rows"
        );
    } else if requested_rows > rows {
        tracing::debug!(
            rows = requested_rows,
            kept = rows,
            "dropping empty grid rows"
        );
    }

    let (rows_f, cols_f) = (rows as f64, cols as f64);
    (0..count)
        .map(|index| {
            let (row, col) = (index / cols, index % cols);
            let left = region.width.mul_add(col as f64 / cols_f, region.x);
            let top = region.height.mul_add(row as f64 / rows_f, region.y);
            let right = if col + 1 == cols || index + 1 == count {
                region.right()
            } else {
                region.width.mul_add((col + 1) as f64 / cols_f, region.x)
            };
            let bottom = if row + 1 == rows {
                region.bottom()
            } else {
                region.height.mul_add((row + 1) as f64 / rows_f, region.y)
            };
            Rect::new(left, top, right - left, bottom - top)
        })
        .collect()
}

impl PlacementAlgorithm for GridStyle {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn description(&self) -> &'static str {
        "Uniform rows and columns of equal cells"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::AreaFilling
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let cells = grid_cells(
            &context.region,
            context.item_count(),
            context.options.rows,
            context.options.cols,
        );
        let mut run = PlacementRun::new(context.item_count());

        for (index, (item, cell)) in context.items.iter().zip(cells).enumerate() {
            let crop = crop_for(item.aspect_ratio, &cell);
            run.place(PlacementRecord::rect(item.id.as_str(), index, cell, crop))?;
        }

        Ok(run)
    }
}
