//! Layout inputs: the output canvas and the photographs to place

use crate::io::error::{Result, invalid_dimension};
use crate::spatial::Rect;

/// Fixed-size output region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Canvas {
    /// Create a canvas with positive dimensions
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimension`](crate::LayoutError::InvalidDimension)
    /// if either side is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Re-check the positivity invariant (fields are public)
    ///
    /// # Errors
    ///
    /// Returns an invalid dimension error if either side is zero
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_dimension("canvas width", &self.width));
        }
        if self.height == 0 {
            return Err(invalid_dimension("canvas height", &self.height));
        }
        Ok(())
    }

    /// Area in square pixels
    pub fn area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// The whole canvas as a rectangle at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// One photograph as seen by the layout engine
///
/// Only the aspect ratio matters for placement; pixel data never reaches the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    /// Stable identifier, typically the file name
    pub id: String,
    /// Source width divided by source height
    pub aspect_ratio: f64,
    /// Optional caption for the external caption renderer
    pub caption: Option<String>,
    /// Importance weight; larger items get more area in weighted styles
    pub weight: f64,
}

impl ImageItem {
    /// Create an item with default weight and no caption
    pub fn new(id: impl Into<String>, aspect_ratio: f64) -> Self {
        Self {
            id: id.into(),
            aspect_ratio,
            caption: None,
            weight: 1.0,
        }
    }

    /// Create an item from natural pixel dimensions
    ///
    /// # Errors
    ///
    /// Returns an invalid dimension error if either dimension is zero
    pub fn from_dimensions(id: impl Into<String>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_dimension(
                "image dimensions",
                &format!("{width}x{height}"),
            ));
        }
        Ok(Self::new(id, f64::from(width) / f64::from(height)))
    }

    /// Attach a caption
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the importance weight
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Check aspect ratio and weight
    ///
    /// # Errors
    ///
    /// Returns an invalid dimension error for a non-finite or non-positive
    /// aspect ratio or weight
    pub fn validate(&self) -> Result<()> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(invalid_dimension(
                "item aspect ratio",
                &format!("{} ({})", self.aspect_ratio, self.id),
            ));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(invalid_dimension(
                "item weight",
                &format!("{} ({})", self.weight, self.id),
            ));
        }
        Ok(())
    }
}
