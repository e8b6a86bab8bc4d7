//! Tests for the contact-sheet film frame style

#[cfg(test)]
mod tests {
    use mosaicist::algorithm::filmstrip::{frame_capacity, frame_grid, frame_rects, sample_indices};
    use mosaicist::analysis::metrics::{is_contained, max_overlap_ratio};
    use mosaicist::math::random::LayoutRng;
    use mosaicist::spatial::Rect;
    use mosaicist::{Canvas, LayoutOptions, StyleRegistry, compute_layout};

    use crate::{full_hd, mixed_items};

    const REGION: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    // Tests the frame grid follows the nominal frame size and never drops to zero
    // Verified by leaving out the perforation band
    #[test]
    fn test_frame_grid() {
        assert_eq!(frame_grid(&REGION), (6, 8));
        assert_eq!(frame_capacity(&REGION), 48);
        assert_eq!(frame_grid(&Rect::new(0.0, 0.0, 320.0, 180.0)), (1, 1));
        assert_eq!(frame_capacity(&Rect::new(0.0, 0.0, 40.0, 40.0)), 1);
    }

    // Tests frames sit inside their cells with the gap and border removed
    // Verified by skipping the border inset
    #[test]
    fn test_frame_rects() {
        let frames = frame_rects(&REGION, 3);
        assert_eq!(frames.len(), 3);
        let Some(first) = frames.first() else {
            return;
        };
        // Cell 238 x 177.33 at (8, 8), minus 10 of gap and 5 of border per side
        assert!((first.x - 23.0).abs() < 1e-9 && (first.y - 23.0).abs() < 1e-9);
        assert!((first.width - 208.0).abs() < 1e-9);
        assert!((first.height - (1064.0 / 6.0 - 30.0)).abs() < 1e-9);
        for pair in frames.windows(2) {
            if let [left, right] = pair {
                assert!((right.x - left.x - 238.0).abs() < 1e-9);
                assert!(left.intersection_area(right) < 1e-9);
            }
        }
        assert_eq!(frame_rects(&REGION, 100).len(), 48);
    }

    // Tests sampling keeps distinct indices in input order
    // Verified by dropping the final sort
    #[test]
    fn test_sample_indices() {
        let mut rng = LayoutRng::new(9);
        assert_eq!(sample_indices(4, 10, &mut rng), vec![0, 1, 2, 3]);

        let chosen = sample_indices(60, 48, &mut rng);
        assert_eq!(chosen.len(), 48);
        assert!(chosen.windows(2).all(|w| matches!(w, [a, b] if a < b)));
        assert!(chosen.iter().all(|&i| i < 60));

        let again = sample_indices(60, 48, &mut LayoutRng::new(9));
        let fresh = sample_indices(60, 48, &mut LayoutRng::new(9));
        assert_eq!(again, fresh);
    }

    // Tests a sheet places only as many items as it has frames
    // Verified by placing every item regardless of capacity
    #[test]
    fn test_filmstrip_caps_at_frames() -> mosaicist::Result<()> {
        let options = LayoutOptions::seeded(11);
        let result = compute_layout(&full_hd(), &mixed_items(60), "filmstrip", &options)?;
        assert_eq!(result.len(), 48);
        assert_eq!(result.stats.item_count, 60);
        assert!(!result.stats.exact);
        assert!(max_overlap_ratio(&result) < 1e-6);
        assert!(is_contained(&result, 1e-6));

        let indices: Vec<usize> = result.placements.iter().map(|p| p.item_index).collect();
        assert!(indices.windows(2).all(|w| matches!(w, [a, b] if a < b)));

        let again = compute_layout(&full_hd(), &mixed_items(60), "filmstrip", &options)?;
        assert_eq!(result, again);
        Ok(())
    }

    // Tests short lists fill the first frames in input order
    // Verified by sampling even when every item fits
    #[test]
    fn test_filmstrip_keeps_order() -> mosaicist::Result<()> {
        let registry = StyleRegistry::default();
        let result =
            registry.compute_layout(&full_hd(), &mixed_items(5), "filmstrip", &LayoutOptions::default())?;
        let indices: Vec<usize> = result.placements.iter().map(|p| p.item_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);

        let small = Canvas {
            width: 320,
            height: 180,
        };
        let single = registry.compute_layout(&small, &mixed_items(3), "filmstrip", &LayoutOptions::default())?;
        assert_eq!(single.len(), 1);
        Ok(())
    }
}
