//! Axis-aligned rectangles, polygons and the intersection/clipping operations on them
//!
//! All coordinates are canvas pixels stored as `f64`. Methods on [`Rect`] and
//! [`Polygon`] are infallible; the free functions at the bottom of the module
//! validate their inputs first and reject degenerate shapes with
//! [`LayoutError::Geometry`](crate::LayoutError::Geometry).

use crate::io::configuration::GEOMETRY_EPSILON;
use crate::io::error::{Result, geometry_error};

/// Point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (grows downward)
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to another point
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Rotate around `center` by `radians` (clockwise on screen, since y grows downward)
    pub fn rotate_about(self, center: Self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Self {
            x: center.x + dx.mul_add(cos, -dy * sin),
            y: center.y + dx.mul_add(sin, dy * cos),
        }
    }

    const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Create a rectangle without validation
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle, rejecting non-finite or non-positive extents
    ///
    /// # Errors
    ///
    /// Returns a geometry error if the rectangle would be degenerate
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        let rect = Self::new(x, y, width, height);
        rect.validate()?;
        Ok(rect)
    }

    /// Check that the rectangle has finite coordinates and positive area
    ///
    /// # Errors
    ///
    /// Returns a geometry error describing the degenerate rectangle
    pub fn validate(&self) -> Result<()> {
        if self.is_degenerate() {
            return Err(geometry_error(
                "rectangle validation",
                &format!(
                    "degenerate rectangle {}x{} at ({}, {})",
                    self.width, self.height, self.x, self.y
                ),
            ));
        }
        Ok(())
    }

    /// Whether the rectangle is non-finite or has (near) zero area
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite())
            || self.width <= GEOMETRY_EPSILON
            || self.height <= GEOMETRY_EPSILON
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area in square pixels
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new(
            self.width.mul_add(0.5, self.x),
            self.height.mul_add(0.5, self.y),
        )
    }

    /// Length of the shorter side
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Whether `other` lies inside this rectangle (edges may touch)
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x - GEOMETRY_EPSILON
            && other.y >= self.y - GEOMETRY_EPSILON
            && other.right() <= self.right() + GEOMETRY_EPSILON
            && other.bottom() <= self.bottom() + GEOMETRY_EPSILON
    }

    /// Whether the point lies inside or on the boundary
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x - GEOMETRY_EPSILON
            && point.y >= self.y - GEOMETRY_EPSILON
            && point.x <= self.right() + GEOMETRY_EPSILON
            && point.y <= self.bottom() + GEOMETRY_EPSILON
    }

    /// Overlapping region, if the interiors intersect
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (right - left > GEOMETRY_EPSILON && bottom - top > GEOMETRY_EPSILON)
            .then(|| Self::new(left, top, right - left, bottom - top))
    }

    /// Area of the overlapping region (zero when only edges touch)
    pub fn intersection_area(&self, other: &Self) -> f64 {
        self.intersection(other).map_or(0.0, |r| r.area())
    }

    /// Shrink uniformly on every side; `None` if nothing would remain
    pub fn inset(&self, margin: f64) -> Option<Self> {
        let inner = Self::new(
            self.x + margin,
            self.y + margin,
            2.0f64.mul_add(-margin, self.width),
            2.0f64.mul_add(-margin, self.height),
        );
        (!inner.is_degenerate()).then_some(inner)
    }

    /// Scale position and size about a fixed point
    pub fn scaled_about(&self, anchor: Point, factor: f64) -> Self {
        Self::new(
            (self.x - anchor.x).mul_add(factor, anchor.x),
            (self.y - anchor.y).mul_add(factor, anchor.y),
            self.width * factor,
            self.height * factor,
        )
    }

    /// Corners in clockwise screen order starting at the top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Corners after rotating the rectangle about its center
    pub fn rotated_corners(&self, degrees: f64) -> [Point; 4] {
        let center = self.center();
        let radians = degrees.to_radians();
        self.corners().map(|p| p.rotate_about(center, radians))
    }

    /// Axis-aligned bounding box of the rectangle rotated about its center
    pub fn rotated_bounds(&self, degrees: f64) -> Self {
        if degrees == 0.0 {
            return *self;
        }
        bounds_of(&self.rotated_corners(degrees)).unwrap_or(*self)
    }

    /// Guillotine cut across the longer axis at `ratio` of its length
    ///
    /// Wide rectangles are cut vertically (left, right), tall ones
    /// horizontally (top, bottom).
    pub fn split(&self, ratio: f64) -> (Self, Self) {
        let ratio = ratio.clamp(0.0, 1.0);
        if self.width >= self.height {
            let first = self.width * ratio;
            (
                Self::new(self.x, self.y, first, self.height),
                Self::new(self.x + first, self.y, self.width - first, self.height),
            )
        } else {
            let first = self.height * ratio;
            (
                Self::new(self.x, self.y, self.width, first),
                Self::new(self.x, self.y + first, self.width, self.height - first),
            )
        }
    }

    /// Equal strips across the longer axis
    pub fn strips(&self, count: usize) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }
        let n = count as f64;
        (0..count)
            .map(|i| {
                let start = i as f64 / n;
                let end = (i + 1) as f64 / n;
                if self.width >= self.height {
                    let left = self.width.mul_add(start, self.x);
                    let right = if i + 1 == count {
                        self.right()
                    } else {
                        self.width.mul_add(end, self.x)
                    };
                    Self::new(left, self.y, right - left, self.height)
                } else {
                    let top = self.height.mul_add(start, self.y);
                    let bottom = if i + 1 == count {
                        self.bottom()
                    } else {
                        self.height.mul_add(end, self.y)
                    };
                    Self::new(self.x, top, self.width, bottom - top)
                }
            })
            .collect()
    }

    /// Polygon with the same outline
    pub fn to_polygon(&self) -> Polygon {
        Polygon {
            points: self.corners().to_vec(),
        }
    }
}

/// Simple polygon given by its vertices in order
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from at least three finite vertices enclosing positive area
    ///
    /// # Errors
    ///
    /// Returns a geometry error for fewer than three points, non-finite
    /// coordinates or a zero-area outline
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(geometry_error(
                "polygon construction",
                &format!("{} point(s), need at least 3", points.len()),
            ));
        }
        if !points.iter().all(|p| p.is_finite()) {
            return Err(geometry_error(
                "polygon construction",
                &"non-finite vertex coordinate",
            ));
        }
        let polygon = Self { points };
        if polygon.area() <= GEOMETRY_EPSILON {
            return Err(geometry_error("polygon construction", &"zero-area outline"));
        }
        Ok(polygon)
    }

    /// Vertices in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Shoelace area with sign; positive for counter-clockwise order in math orientation
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x.mul_add(b.y, -(b.x * a.y)))
            .sum::<f64>()
            * 0.5
    }

    /// Enclosed area
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid, falling back to the vertex mean for slivers
    pub fn centroid(&self) -> Point {
        let signed = self.signed_area();
        if signed.abs() <= GEOMETRY_EPSILON {
            let n = self.points.len() as f64;
            let (sx, sy) = self
                .points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            return Point::new(sx / n, sy / n);
        }

        let (cx, cy) = self.edges().fold((0.0, 0.0), |(cx, cy), (a, b)| {
            let cross = a.x.mul_add(b.y, -(b.x * a.y));
            (cx + (a.x + b.x) * cross, cy + (a.y + b.y) * cross)
        });
        let factor = 1.0 / (6.0 * signed);
        Point::new(cx * factor, cy * factor)
    }

    /// Smallest axis-aligned rectangle enclosing every vertex
    pub fn bounding_rect(&self) -> Rect {
        bounds_of(&self.points).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Ray-casting membership test
    pub fn contains_point(&self, point: Point) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let crossing = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x < crossing {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Whether every turn goes the same way
    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        let mut sign = 0.0f64;
        for i in 0..n {
            let (Some(a), Some(b), Some(c)) = (
                self.points.get(i),
                self.points.get((i + 1) % n),
                self.points.get((i + 2) % n),
            ) else {
                return false;
            };
            let cross = (b.x - a.x).mul_add(c.y - b.y, -((b.y - a.y) * (c.x - b.x)));
            if cross.abs() <= GEOMETRY_EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Keep the part with `a·x + b·y <= c`; `None` if nothing with area remains
    pub fn clip_half_plane(&self, a: f64, b: f64, c: f64) -> Option<Self> {
        Self::from_clipped(clip_points_half_plane(&self.points, a, b, c))
    }

    /// Sutherland–Hodgman clip against an axis-aligned rectangle
    pub fn clip_to_rect(&self, rect: &Rect) -> Option<Self> {
        let mut points = self.points.clone();
        // left, right, top, bottom
        for (a, b, c) in [
            (-1.0, 0.0, -rect.x),
            (1.0, 0.0, rect.right()),
            (0.0, -1.0, -rect.y),
            (0.0, 1.0, rect.bottom()),
        ] {
            points = clip_points_half_plane(&points, a, b, c);
            if points.len() < 3 {
                return None;
            }
        }
        Self::from_clipped(points)
    }

    /// Intersection area with a convex polygon
    ///
    /// `self` may be any simple polygon; `convex` must be convex for the
    /// result to be exact.
    pub fn intersection_area(&self, convex: &Self) -> f64 {
        let counter_clockwise = convex.signed_area() > 0.0;
        let mut points = self.points.clone();
        for (p, q) in convex.edges() {
            let (p, q) = if counter_clockwise { (p, q) } else { (q, p) };
            // interior lies left of p -> q
            let a = q.y - p.y;
            let b = p.x - q.x;
            let c = a.mul_add(p.x, b * p.y);
            points = clip_points_half_plane(&points, a, b, c);
            if points.len() < 3 {
                return 0.0;
            }
        }
        Self { points }.area()
    }

    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .copied()
            .zip(self.points.iter().copied().cycle().skip(1))
    }

    fn from_clipped(mut points: Vec<Point>) -> Option<Self> {
        points.dedup_by(|a, b| a.distance_squared(*b) <= GEOMETRY_EPSILON * GEOMETRY_EPSILON);
        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied())
            && points.len() > 1
            && first.distance_squared(last) <= GEOMETRY_EPSILON * GEOMETRY_EPSILON
        {
            points.pop();
        }
        let polygon = Self { points };
        (polygon.points.len() >= 3 && polygon.area() > GEOMETRY_EPSILON).then_some(polygon)
    }
}

fn clip_points_half_plane(points: &[Point], a: f64, b: f64, c: f64) -> Vec<Point> {
    let mut output = Vec::with_capacity(points.len() + 2);
    let Some(&last) = points.last() else {
        return output;
    };

    let side = |p: Point| a.mul_add(p.x, b * p.y) - c;
    let mut previous = last;
    let mut previous_side = side(previous);

    for &current in points {
        let current_side = side(current);
        let current_inside = current_side <= GEOMETRY_EPSILON;
        let previous_inside = previous_side <= GEOMETRY_EPSILON;

        if current_inside != previous_inside {
            let t = previous_side / (previous_side - current_side);
            output.push(Point::new(
                (current.x - previous.x).mul_add(t, previous.x),
                (current.y - previous.y).mul_add(t, previous.y),
            ));
        }
        if current_inside {
            output.push(current);
        }

        previous = current;
        previous_side = current_side;
    }

    output
}

/// Axis-aligned bounds of a point set
pub fn bounds_of(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let (min_x, min_y, max_x, max_y) = points.iter().fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    );
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Intersection area of two rectangles
///
/// # Errors
///
/// Returns a geometry error if either rectangle is degenerate
pub fn intersection_area(a: &Rect, b: &Rect) -> Result<f64> {
    a.validate()?;
    b.validate()?;
    Ok(a.intersection_area(b))
}

/// Whether `inner` lies within `outer`
///
/// # Errors
///
/// Returns a geometry error if either rectangle is degenerate
pub fn contains(outer: &Rect, inner: &Rect) -> Result<bool> {
    outer.validate()?;
    inner.validate()?;
    Ok(outer.contains(inner))
}

/// Clip a polygon to a rectangle
///
/// Returns `Ok(None)` when the polygon lies entirely outside the rectangle.
///
/// # Errors
///
/// Returns a geometry error if the clip rectangle is degenerate
pub fn clip_polygon(polygon: &Polygon, rect: &Rect) -> Result<Option<Polygon>> {
    rect.validate()?;
    Ok(polygon.clip_to_rect(rect))
}
