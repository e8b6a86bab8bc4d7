//! Layout outputs: placement records and the assembled result

use crate::io::configuration::EXACTNESS_TOLERANCE;
use crate::spatial::{Point, Polygon, Rect};

/// Target geometry of one placement
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementGeometry {
    /// Axis-aligned rectangle, rotated about its center by the record's rotation
    Rect(Rect),
    /// Clip polygon (Voronoi and hexagon cells)
    Polygon(Polygon),
}

impl PlacementGeometry {
    /// Covered area (rotation preserves area)
    pub fn area(&self) -> f64 {
        match self {
            Self::Rect(rect) => rect.area(),
            Self::Polygon(polygon) => polygon.area(),
        }
    }

    /// Axis-aligned bounding rectangle before rotation
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::Polygon(polygon) => polygon.bounding_rect(),
        }
    }

    /// Outline as a polygon, with rotation applied
    pub fn outline(&self, rotation_degrees: f64) -> Polygon {
        match self {
            Self::Rect(rect) if rotation_degrees == 0.0 => rect.to_polygon(),
            Self::Rect(rect) => {
                let corners = rect.rotated_corners(rotation_degrees);
                Polygon::new(corners.to_vec()).unwrap_or_else(|_| rect.to_polygon())
            }
            Self::Polygon(polygon) => polygon.clone(),
        }
    }

    /// Whether a point is covered
    pub fn contains_point(&self, point: Point, rotation_degrees: f64) -> bool {
        match self {
            Self::Rect(rect) if rotation_degrees == 0.0 => rect.contains_point(point),
            Self::Rect(rect) => {
                // Undo the rotation instead of rotating the rectangle
                let local = point.rotate_about(rect.center(), -rotation_degrees.to_radians());
                rect.contains_point(local)
            }
            Self::Polygon(polygon) => polygon.contains_point(point),
        }
    }
}

/// One item's computed position, size, rotation, crop and stacking order
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    /// Identifier of the placed item
    pub item_id: String,
    /// Position of the item in the input list
    pub item_index: usize,
    /// Target geometry in canvas coordinates
    pub geometry: PlacementGeometry,
    /// Clockwise rotation about the geometry's center, in degrees
    pub rotation: f64,
    /// Crop in source-relative coordinates (full source is `(0, 0, 1, 1)`)
    pub crop: Rect,
    /// Painter's-algorithm stacking order; higher paints later
    pub z_order: i32,
    /// Source should be flipped horizontally (mirrored kaleidoscope wedges)
    pub mirrored: bool,
}

impl PlacementRecord {
    /// Unrotated rectangular placement
    pub fn rect(item_id: impl Into<String>, item_index: usize, rect: Rect, crop: Rect) -> Self {
        Self {
            item_id: item_id.into(),
            item_index,
            geometry: PlacementGeometry::Rect(rect),
            rotation: 0.0,
            crop,
            z_order: 0,
            mirrored: false,
        }
    }

    /// Polygon-masked placement
    pub fn polygon(
        item_id: impl Into<String>,
        item_index: usize,
        polygon: Polygon,
        crop: Rect,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_index,
            geometry: PlacementGeometry::Polygon(polygon),
            rotation: 0.0,
            crop,
            z_order: 0,
            mirrored: false,
        }
    }

    /// Set the rotation
    #[must_use]
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set the stacking order
    #[must_use]
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    /// Mark as horizontally mirrored
    #[must_use]
    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Covered area
    pub fn area(&self) -> f64 {
        self.geometry.area()
    }

    /// Axis-aligned footprint including rotation
    pub fn footprint(&self) -> Rect {
        match &self.geometry {
            PlacementGeometry::Rect(rect) => rect.rotated_bounds(self.rotation),
            PlacementGeometry::Polygon(polygon) => polygon.bounding_rect(),
        }
    }
}

/// Summary statistics of a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStats {
    /// Sum of placement areas
    pub covered_area: f64,
    /// Full canvas area
    pub canvas_area: f64,
    /// Area inside the frame margin, which algorithms lay out into
    pub layout_area: f64,
    /// Number of input items
    pub item_count: usize,
    /// Items placed through a recovery path instead of the primary algorithm
    pub fallback_count: usize,
    /// Covered area equals the layout area within tolerance
    pub exact: bool,
}

impl LayoutStats {
    /// Relative deviation of covered area from layout area
    pub fn coverage_error(&self) -> f64 {
        (self.covered_area - self.layout_area).abs() / self.layout_area
    }
}

/// Ordered placement records (paint order) plus summary statistics
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Registered name of the style that produced the layout
    pub style: String,
    /// Region the algorithm laid out into
    pub region: Rect,
    /// Placement records in paint order
    pub placements: Vec<PlacementRecord>,
    /// Summary statistics
    pub stats: LayoutStats,
}

impl LayoutResult {
    /// Assemble a result and compute its statistics
    ///
    /// `exact` is only ever reported for area-filling styles.
    pub fn assemble(
        style: impl Into<String>,
        region: Rect,
        canvas_area: f64,
        item_count: usize,
        placements: Vec<PlacementRecord>,
        fallback_count: usize,
        area_filling: bool,
    ) -> Self {
        let covered_area = placements.iter().map(PlacementRecord::area).sum::<f64>();
        let layout_area = region.area();
        let exact =
            area_filling && (covered_area - layout_area).abs() <= EXACTNESS_TOLERANCE * layout_area;

        Self {
            style: style.into(),
            region,
            placements,
            stats: LayoutStats {
                covered_area,
                canvas_area,
                layout_area,
                item_count,
                fallback_count,
                exact,
            },
        }
    }

    /// Number of placement records
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether there are no placements
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Records placing the given item, in paint order
    pub fn placements_of<'a>(
        &'a self,
        item_id: &'a str,
    ) -> impl Iterator<Item = &'a PlacementRecord> + 'a {
        self.placements.iter().filter(move |p| p.item_id == item_id)
    }
}
