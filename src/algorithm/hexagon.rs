//! Hexagonal tessellation
//!
//! Pointy-top hexagons sit on rows spaced `1.5·s` apart with every odd row
//! shifted by half a hexagon width. Candidate sides `s` run down from twice
//! the packing density estimate; the lattice whose clipped cell count lands
//! closest above the item count wins. Surplus cells are dropped smallest
//! first and the survivors grow into the freed space as a Voronoi partition
//! of their centers, so the region stays fully covered.

use std::collections::BTreeSet;
use std::f64::consts::PI;

use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::algorithm::voronoi::voronoi_cells;
use crate::io::configuration::{GEOMETRY_EPSILON, HEX_PACKING_DENSITY, MAX_HEX_REFINEMENTS};
use crate::io::error::{Result, geometry_error};
use crate::model::PlacementRecord;
use crate::spatial::crop::crop_for;
use crate::spatial::{Point, Polygon, Rect};

const SCAN_START: f64 = 2.0;
const SIZE_STEP: f64 = 0.98;

/// Honeycomb of pointy-top hexagons
#[derive(Debug, Clone, Copy, Default)]
pub struct HexagonStyle;

/// One lattice hexagon clipped to the region
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    /// Hexagon center (may lie outside the region)
    pub center: Point,
    /// Hexagon clipped to the region
    pub polygon: Polygon,
    /// Whether the hexagon lies entirely inside the region
    pub whole: bool,
}

/// Pointy-top hexagon with circumradius `size`
pub fn hexagon(center: Point, size: f64) -> Option<Polygon> {
    let points = (0..6)
        .map(|k| {
            let angle = PI / 6.0 + PI / 3.0 * f64::from(k);
            Point::new(
                size.mul_add(angle.cos(), center.x),
                size.mul_add(angle.sin(), center.y),
            )
        })
        .collect();
    Polygon::new(points).ok()
}

/// Lattice cells with positive area inside `region`, row-major
pub fn lattice(region: &Rect, size: f64) -> Vec<HexCell> {
    let width = 3f64.sqrt() * size;
    let row_step = 1.5 * size;
    let rows = (region.height / row_step).ceil() as i64 + 1;
    let cols = (region.width / width).ceil() as i64 + 1;
    let min_area = region.area() * GEOMETRY_EPSILON * GEOMETRY_EPSILON;

    let mut cells = Vec::new();
    for row in -1..=rows {
        let offset = if row.rem_euclid(2) == 1 { width * 0.5 } else { 0.0 };
        for col in -1..=cols {
            let center = Point::new(
                width.mul_add(col as f64, region.x + offset),
                row_step.mul_add(row as f64, region.y),
            );
            let Some(full) = hexagon(center, size) else {
                continue;
            };
            let whole = region.contains(&full.bounding_rect());
            let Some(polygon) = full.clip_to_rect(region) else {
                continue;
            };
            if polygon.area() > min_area {
                cells.push(HexCell {
                    center,
                    polygon,
                    whole,
                });
            }
        }
    }
    cells
}

/// Initial hexagon size for `count` items on `area`
pub fn initial_size(area: f64, count: usize) -> f64 {
    let hex_area_factor = 1.5 * 3f64.sqrt();
    (area * HEX_PACKING_DENSITY / (count.max(1) as f64 * hex_area_factor)).sqrt()
}

/// Lattice with at least `count` cells and as few surplus cells as possible
///
/// Scans up to [`MAX_HEX_REFINEMENTS`] sizes from twice [`initial_size`]
/// downwards. Fewer surplus cells win, then more whole hexagons, then the
/// larger size. Returns the chosen size with its cells.
///
/// # Errors
///
/// Returns a geometry error if no scanned size yields `count` cells
pub fn fitted_lattice(region: &Rect, count: usize) -> Result<(f64, Vec<HexCell>)> {
    let mut size = initial_size(region.area(), count) * SCAN_START;
    let mut best: Option<(usize, usize, f64, Vec<HexCell>)> = None;
    for _ in 0..MAX_HEX_REFINEMENTS {
        let cells = lattice(region, size);
        if cells.len() >= count {
            let surplus = cells.len() - count;
            let whole = cells.iter().filter(|cell| cell.whole).count();
            let crowded = cells.len() > count.saturating_mul(4);
            if best.as_ref().is_none_or(|(fewest, most_whole, ..)| {
                surplus < *fewest || (surplus == *fewest && whole > *most_whole)
            }) {
                best = Some((surplus, whole, size, cells));
            }
            if crowded {
                break;
            }
        }
        size *= SIZE_STEP;
    }

    best.map(|(_, _, chosen, cells)| (chosen, cells)).ok_or_else(|| {
        geometry_error(
            "hexagon lattice",
            &format!("no lattice with {count} cells after {MAX_HEX_REFINEMENTS} sizes"),
        )
    })
}

/// Exactly `count` cells tiling `region`, row-major
///
/// # Errors
///
/// Returns a geometry error if no lattice has enough cells or a merged cell
/// collapses
pub fn hex_cells(region: &Rect, count: usize) -> Result<Vec<Polygon>> {
    let (size, cells) = fitted_lattice(region, count)?;
    tracing::debug!(
        size,
        cells = cells.len(),
        whole = cells.iter().filter(|cell| cell.whole).count(),
        "hexagon lattice"
    );

    let surplus = cells.len() - count;
    if surplus == 0 {
        return Ok(cells.into_iter().map(|cell| cell.polygon).collect());
    }

    // Smallest first; among equal areas the later cell goes first
    let mut by_area: Vec<usize> = (0..cells.len()).collect();
    by_area.sort_by(|&a, &b| {
        let area = |i: usize| cells.get(i).map_or(0.0, |cell| cell.polygon.area());
        area(a).total_cmp(&area(b)).then(b.cmp(&a))
    });
    let dropped: BTreeSet<usize> = by_area.into_iter().take(surplus).collect();
    tracing::debug!(dropped = dropped.len(), "merging surplus hexagon cells");

    let centers: Vec<Point> = cells
        .iter()
        .enumerate()
        .filter(|(index, _)| !dropped.contains(index))
        .map(|(_, cell)| cell.center)
        .collect();

    voronoi_cells(region, &centers)?
        .into_iter()
        .enumerate()
        .map(|(index, cell)| {
            cell.ok_or_else(|| {
                geometry_error("hexagon merge", &format!("cell {index} vanished"))
            })
        })
        .collect()
}

impl PlacementAlgorithm for HexagonStyle {
    fn name(&self) -> &'static str {
        "hexagon"
    }

    fn description(&self) -> &'static str {
        "Honeycomb of hexagonal cells clipped to the canvas"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::AreaFilling
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let mut run = PlacementRun::new(context.item_count());
        let cells =
            hex_cells(&context.region, context.item_count()).map_err(|error| run.fail(error))?;

        for (index, (item, cell)) in context.items.iter().zip(cells).enumerate() {
            let crop = crop_for(item.aspect_ratio, &cell.bounding_rect());
            run.place(PlacementRecord::polygon(item.id.as_str(), index, cell, crop))?;
        }

        Ok(run)
    }
}
