//! Source-image crop computation
//!
//! Crops are expressed in source-relative coordinates: the full source image
//! is the unit square `(0, 0, 1, 1)`.

use crate::spatial::geometry::Rect;

/// The whole source image
pub const FULL_SOURCE: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// Center crop that gives the source image the target aspect ratio
///
/// The longer source dimension is trimmed symmetrically; the other is kept
/// whole. Non-finite or non-positive ratios yield the full source.
pub fn center_crop(source_aspect: f64, target_aspect: f64) -> Rect {
    if !(source_aspect.is_finite()
        && target_aspect.is_finite()
        && source_aspect > 0.0
        && target_aspect > 0.0)
    {
        return FULL_SOURCE;
    }

    if source_aspect > target_aspect {
        // Source too wide: keep full height
        let width = target_aspect / source_aspect;
        Rect::new((1.0 - width) * 0.5, 0.0, width, 1.0)
    } else {
        let height = source_aspect / target_aspect;
        Rect::new(0.0, (1.0 - height) * 0.5, 1.0, height)
    }
}

/// Center crop matching the aspect ratio of a placement rectangle
pub fn crop_for(source_aspect: f64, target: &Rect) -> Rect {
    center_crop(source_aspect, target.aspect_ratio())
}
