//! Wireframe preview rendering of computed layouts
//!
//! Previews paint each placement as a flat color in paint order and trace its
//! outline, so overlaps, gaps and rotations are visible without any source
//! pixels.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{GOLDEN_ANGLE, PREVIEW_BACKGROUND};
use crate::io::error::{LayoutError, Result};
use crate::model::{Canvas, LayoutResult, PlacementRecord};
use crate::spatial::{Point, Rect};

const OUTLINE: Rgba<u8> = Rgba([40, 40, 40, 255]);
const MARGIN_SHADE: Rgba<u8> = Rgba([225, 225, 225, 255]);

/// Fill color for an item, spread around the hue circle by the golden angle
pub fn item_color(item_index: usize, mirrored: bool) -> Rgba<u8> {
    let hue = (item_index as f64 * GOLDEN_ANGLE).rem_euclid(std::f64::consts::TAU)
        / std::f64::consts::TAU;
    let value = if mirrored { 0.75 } else { 0.92 };
    let [r, g, b] = hsv_to_rgb(hue, 0.45, value);
    Rgba([r, g, b, 255])
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [u8; 3] {
    let sector = (hue * 6.0).floor();
    let fraction = hue.mul_add(6.0, -sector);
    let p = value * (1.0 - saturation);
    let q = value * saturation.mul_add(-fraction, 1.0);
    let t = value * saturation.mul_add(-(1.0 - fraction), 1.0);
    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    [r, g, b].map(|channel| (channel * 255.0).round().clamp(0.0, 255.0) as u8)
}

/// Render a layout onto an image the size of the canvas
pub fn render_preview(result: &LayoutResult, canvas: &Canvas) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(canvas.width, canvas.height, Rgba(PREVIEW_BACKGROUND));
    shade_margin(&mut img, &result.region);

    for placement in &result.placements {
        fill_placement(&mut img, placement);
    }
    for placement in &result.placements {
        let outline = placement.geometry.outline(placement.rotation);
        let points = outline.points();
        for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
            draw_line(&mut img, *a, *b);
        }
    }

    img
}

/// Render a layout and save it as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot
/// be written
pub fn export_preview(result: &LayoutResult, canvas: &Canvas, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_preview(result, canvas)
        .save(output_path)
        .map_err(|e| LayoutError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    tracing::debug!(path = %output_path.display(), "preview written");
    Ok(())
}

fn shade_margin(img: &mut RgbaImage, region: &Rect) {
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        if !region.contains_point(center) {
            *pixel = MARGIN_SHADE;
        }
    }
}

fn fill_placement(img: &mut RgbaImage, placement: &PlacementRecord) {
    let (width, height) = img.dimensions();
    let bounds = placement.footprint();
    let x_start = bounds.x.floor().max(0.0) as u32;
    let y_start = bounds.y.floor().max(0.0) as u32;
    let x_end = (bounds.right().ceil().max(0.0) as u32).min(width);
    let y_end = (bounds.bottom().ceil().max(0.0) as u32).min(height);
    let color = item_color(placement.item_index, placement.mirrored);

    for y in y_start..y_end {
        for x in x_start..x_end {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if placement.geometry.contains_point(center, placement.rotation) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn draw_line(img: &mut RgbaImage, from: Point, to: Point) {
    let (width, height) = img.dimensions();
    let steps = (to.x - from.x).abs().max((to.y - from.y).abs()).ceil().max(1.0) as usize;
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = (to.x - from.x).mul_add(t, from.x).floor();
        let y = (to.y - from.y).mul_add(t, from.y).floor();
        if x >= 0.0 && y >= 0.0 && (x as u32) < width && (y as u32) < height {
            img.put_pixel(x as u32, y as u32, OUTLINE);
        }
    }
}
