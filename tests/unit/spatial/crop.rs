//! Tests for the center-crop policy

#[cfg(test)]
mod tests {
    use mosaicist::spatial::Rect;
    use mosaicist::spatial::crop::{FULL_SOURCE, center_crop, crop_for};

    // Tests a wide source trims its sides for a square target
    // Verified by trimming height instead of width
    #[test]
    fn test_wide_source_trims_width() {
        let crop = center_crop(2.0, 1.0);
        assert!((crop.width - 0.5).abs() < 1e-12);
        assert!((crop.x - 0.25).abs() < 1e-12);
        assert!((crop.height - 1.0).abs() < 1e-12);
    }

    // Tests a tall source trims top and bottom for a landscape target
    // Verified by anchoring the crop at the top edge
    #[test]
    fn test_tall_source_trims_height() {
        let crop = center_crop(0.5, 2.0);
        assert!((crop.height - 0.25).abs() < 1e-12);
        assert!((crop.y - 0.375).abs() < 1e-12);
        assert!((crop.width - 1.0).abs() < 1e-12);
    }

    // Tests the cropped source has the target aspect ratio
    // Verified by inverting the width ratio
    #[test]
    fn test_crop_matches_target_aspect() {
        let source_aspect = 1.5;
        let target = Rect::new(0.0, 0.0, 300.0, 400.0);
        let crop = crop_for(source_aspect, &target);
        let cropped_aspect = source_aspect * crop.width / crop.height;
        assert!((cropped_aspect - target.aspect_ratio()).abs() < 1e-9);
    }

    // Tests unusable ratios fall back to the full source
    // Verified by dividing by a zero target aspect
    #[test]
    fn test_invalid_ratios_use_full_source() {
        assert_eq!(center_crop(1.0, 0.0), FULL_SOURCE);
        assert_eq!(center_crop(f64::NAN, 1.0), FULL_SOURCE);
        assert_eq!(center_crop(1.0, 1.0), FULL_SOURCE);
    }
}
