//! Magazine spread: one hero photo beside a grid of thumbnails

use crate::algorithm::grid::grid_cells;
use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::io::error::Result;
use crate::model::{ImageItem, PlacementRecord};
use crate::spatial::Rect;
use crate::spatial::crop::crop_for;

// Regions wider than this ratio give the hero a larger share
const WIDE_REGION: f64 = 1.3;
const HERO_SHARE_WIDE: f64 = 0.65;
const HERO_SHARE: f64 = 0.55;

/// Hero column plus thumbnail grid
#[derive(Debug, Clone, Copy, Default)]
pub struct MagazineStyle;

/// Index of the heaviest item, first on ties
pub fn hero_index(items: &[ImageItem]) -> usize {
    items
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, item)| match best {
            Some((_, weight)) if weight >= item.weight => best,
            _ => Some((index, item.weight)),
        })
        .map_or(0, |(index, _)| index)
}

/// Hero rectangle and thumbnail area for a region
pub fn hero_split(region: &Rect) -> (Rect, Rect) {
    let share = if region.width > WIDE_REGION * region.height {
        HERO_SHARE_WIDE
    } else {
        HERO_SHARE
    };
    let hero_width = region.width * share;
    (
        Rect::new(region.x, region.y, hero_width, region.height),
        Rect::new(
            region.x + hero_width,
            region.y,
            region.right() - (region.x + hero_width),
            region.height,
        ),
    )
}

impl PlacementAlgorithm for MagazineStyle {
    fn name(&self) -> &'static str {
        "magazine"
    }

    fn description(&self) -> &'static str {
        "Large hero photo beside a grid of thumbnails"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::AreaFilling
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let items = context.items;
        let mut run = PlacementRun::new(items.len());
        let hero = hero_index(items);

        if items.len() == 1 {
            if let Some(item) = items.first() {
                let rect = context.region;
                run.place(PlacementRecord::rect(
                    item.id.as_str(),
                    0,
                    rect,
                    crop_for(item.aspect_ratio, &rect),
                ))?;
            }
            return Ok(run);
        }

        let (hero_rect, thumbnails) = hero_split(&context.region);
        if let Some(item) = items.get(hero) {
            run.place(PlacementRecord::rect(
                item.id.as_str(),
                hero,
                hero_rect,
                crop_for(item.aspect_ratio, &hero_rect),
            ))?;
        }

        let cells = grid_cells(
            &thumbnails,
            items.len() - 1,
            context.options.rows,
            context.options.cols,
        );
        let others = items.iter().enumerate().filter(|&(index, _)| index != hero);
        for ((index, item), cell) in others.zip(cells) {
            run.place(PlacementRecord::rect(
                item.id.as_str(),
                index,
                cell,
                crop_for(item.aspect_ratio, &cell),
            ))?;
        }

        Ok(run)
    }
}
