//! Voronoi partition of the layout region
//!
//! Seeds come from a jittered grid so cells stay comparable in size. Each cell
//! is the region rectangle clipped by the bisector half-plane against every
//! other seed, which makes the cells disjoint and their union the region.

use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleFamily};
use crate::algorithm::state::PlacementRun;
use crate::io::configuration::{DEGENERATE_CELL_FRACTION, SEED_CELL_MARGIN};
use crate::io::error::{LayoutError, Result, computation_error, geometry_error};
use crate::math::random::LayoutRng;
use crate::math::sequence::{balanced_counts, grid_dimensions};
use crate::model::PlacementRecord;
use crate::spatial::crop::crop_for;
use crate::spatial::geometry::clip_polygon;
use crate::spatial::{Point, Polygon, Rect};

/// Polygon cells around jittered seeds
#[derive(Debug, Clone, Copy, Default)]
pub struct VoronoiStyle;

/// One seed together with the grid cell it was drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitteredSeed {
    /// Seed position
    pub point: Point,
    /// Grid cell the seed stays inside when re-drawn
    pub cell: Rect,
}

/// Draw one seed per item from a jittered near-square grid
///
/// Rows hold counts differing by at most one; each seed is uniform in the
/// inner part of its grid cell.
pub fn jittered_seeds(region: &Rect, count: usize, rng: &mut LayoutRng) -> Vec<JitteredSeed> {
    let (rows, _) = grid_dimensions(count, region.aspect_ratio());
    let row_height = region.height / rows.max(1) as f64;
    let mut seeds = Vec::with_capacity(count);

    for (row, per_row) in balanced_counts(count, rows).into_iter().enumerate() {
        let cell_width = region.width / per_row.max(1) as f64;
        for col in 0..per_row {
            let cell = Rect::new(
                cell_width.mul_add(col as f64, region.x),
                row_height.mul_add(row as f64, region.y),
                cell_width,
                row_height,
            );
            seeds.push(JitteredSeed {
                point: draw_in(&cell, rng),
                cell,
            });
        }
    }

    seeds
}

fn draw_in(cell: &Rect, rng: &mut LayoutRng) -> Point {
    let u = rng.uniform(SEED_CELL_MARGIN, 1.0 - SEED_CELL_MARGIN);
    let v = rng.uniform(SEED_CELL_MARGIN, 1.0 - SEED_CELL_MARGIN);
    Point::new(cell.width.mul_add(u, cell.x), cell.height.mul_add(v, cell.y))
}

/// Voronoi cell of every seed, clipped to `region`
///
/// `None` marks a cell that vanished entirely.
///
/// # Errors
///
/// Returns a geometry error if `region` is degenerate
pub fn voronoi_cells(region: &Rect, seeds: &[Point]) -> Result<Vec<Option<Polygon>>> {
    let bounds = region.to_polygon();
    let mut cells = Vec::with_capacity(seeds.len());

    for (i, &seed) in seeds.iter().enumerate() {
        let mut cell = Some(bounds.clone());
        for (j, &other) in seeds.iter().enumerate() {
            if i == j {
                continue;
            }
            // Points at least as close to `seed` as to `other`
            let a = other.x - seed.x;
            let b = other.y - seed.y;
            let c = 0.5
                * (other.x.mul_add(other.x, other.y * other.y)
                    - seed.x.mul_add(seed.x, seed.y * seed.y));
            cell = cell.and_then(|polygon| polygon.clip_half_plane(a, b, c));
            if cell.is_none() {
                break;
            }
        }
        let clipped = match cell {
            Some(polygon) => clip_polygon(&polygon, region)?,
            None => None,
        };
        cells.push(clipped);
    }

    Ok(cells)
}

fn degenerate_cells(cells: &[Option<Polygon>], min_area: f64) -> Vec<(usize, f64)> {
    cells
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| {
            let area = cell.as_ref().map_or(0.0, Polygon::area);
            (area < min_area).then_some((index, area))
        })
        .collect()
}

impl PlacementAlgorithm for VoronoiStyle {
    fn name(&self) -> &'static str {
        "voronoi"
    }

    fn description(&self) -> &'static str {
        "Organic polygon cells around jittered seed points"
    }

    fn family(&self) -> StyleFamily {
        StyleFamily::AreaFilling
    }

    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun> {
        let region = context.region;
        let count = context.item_count();
        let mut run = PlacementRun::new(count);

        let mut seeds = jittered_seeds(&region, count, &mut context.rng);
        let mut points: Vec<Point> = seeds.iter().map(|seed| seed.point).collect();
        let mut cells = voronoi_cells(&region, &points).map_err(|error| run.fail(error))?;

        let min_area = region.area() / count as f64 * DEGENERATE_CELL_FRACTION;
        let collapsed = degenerate_cells(&cells, min_area);
        for &(index, area) in &collapsed {
            tracing::debug!("{}", LayoutError::DegenerateCell { index, area });
            if let Some(seed) = seeds.get_mut(index) {
                seed.point = draw_in(&seed.cell, &mut context.rng);
            }
        }
        if !collapsed.is_empty() {
            points = seeds.iter().map(|seed| seed.point).collect();
            cells = voronoi_cells(&region, &points).map_err(|error| run.fail(error))?;
            if let Some(&(index, area)) = degenerate_cells(&cells, min_area).first() {
                return Err(run.fail(geometry_error(
                    "voronoi",
                    &format!("cell {index} still degenerate (area {area:.3}) after re-jitter"),
                )));
            }
        }

        for (index, (item, cell)) in context.items.iter().zip(cells).enumerate() {
            let polygon = cell.ok_or_else(|| {
                run.fail(computation_error("voronoi", &format!("cell {index} missing")))
            })?;
            let crop = crop_for(item.aspect_ratio, &polygon.bounding_rect());
            let record = PlacementRecord::polygon(item.id.as_str(), index, polygon, crop);
            if collapsed.iter().any(|&(i, _)| i == index) {
                run.fall_back(record)?;
            } else {
                run.place(record)?;
            }
        }

        Ok(run)
    }
}
