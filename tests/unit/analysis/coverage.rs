//! Tests for the sampled coverage map

#[cfg(test)]
mod tests {
    use mosaicist::analysis::CoverageMap;
    use mosaicist::spatial::Rect;
    use mosaicist::spatial::crop::FULL_SOURCE;
    use mosaicist::{LayoutError, LayoutOptions, LayoutResult, PlacementRecord, compute_layout};

    use crate::{full_hd, items, mixed_items};

    // Tests a grid layout covers every sample exactly once
    // Verified by sampling cell corners instead of centers
    #[test]
    fn test_grid_has_no_gaps_or_overlaps() -> mosaicist::Result<()> {
        let options = LayoutOptions::default().with_grid(2, 3);
        let result = compute_layout(&full_hd(), &items(&[1.0; 6]), "grid", &options)?;
        let map = CoverageMap::sample(&result, 4.0)?;
        assert_eq!(map.counts().dim(), (270, 480));
        assert!(map.gap_fraction().abs() < f64::EPSILON);
        assert!(map.overlap_fraction().abs() < f64::EPSILON);
        assert_eq!(map.max_depth(), 1);
        Ok(())
    }

    // Tests radial layouts leave gaps but never stack
    // Verified by counting footprint samples instead of true outlines
    #[test]
    fn test_spiral_leaves_gaps() -> mosaicist::Result<()> {
        let result = compute_layout(&full_hd(), &mixed_items(10), "spiral", &LayoutOptions::default())?;
        let map = CoverageMap::sample(&result, 8.0)?;
        assert!(map.gap_fraction() > 0.0);
        assert!(map.covered_fraction() > 0.0);
        assert!(map.max_depth() <= 1);
        Ok(())
    }

    // Tests stacked placements are counted per sample
    // Verified by saturating counts at one
    #[test]
    fn test_stacked_depth() -> mosaicist::Result<()> {
        let region = Rect::new(0.0, 0.0, 40.0, 20.0);
        let placements = vec![
            PlacementRecord::rect("a", 0, Rect::new(0.0, 0.0, 20.0, 20.0), FULL_SOURCE),
            PlacementRecord::rect("b", 1, Rect::new(0.0, 0.0, 20.0, 20.0), FULL_SOURCE),
        ];
        let result = LayoutResult::assemble("test", region, region.area(), 2, placements, 0, false);
        let map = CoverageMap::sample(&result, 10.0)?;
        assert_eq!(map.max_depth(), 2);
        assert!((map.overlap_fraction() - 0.5).abs() < f64::EPSILON);
        assert!((map.gap_fraction() - 0.5).abs() < f64::EPSILON);
        Ok(())
    }

    // Tests a non-positive stride is rejected
    // Verified by accepting zero strides
    #[test]
    fn test_invalid_stride() -> mosaicist::Result<()> {
        let result = compute_layout(&full_hd(), &items(&[1.0]), "grid", &LayoutOptions::default())?;
        assert!(matches!(
            CoverageMap::sample(&result, 0.0),
            Err(LayoutError::InvalidParameter { .. })
        ));
        Ok(())
    }
}
