//! Tests for input validation, dispatch and result assembly

#[cfg(test)]
mod tests {
    use mosaicist::algorithm::executor::execute;
    use mosaicist::algorithm::grid::GridStyle;
    use mosaicist::io::configuration::DEFAULT_SEED;
    use mosaicist::{Canvas, ImageItem, LayoutError, LayoutOptions, compute_layout};

    use crate::{full_hd, items, mixed_items};

    // Tests an empty item list is an invalid dimension
    // Verified by returning an empty layout
    #[test]
    fn test_empty_items_rejected() {
        for style in ["grid", "voronoi", "kaleidoscope", "polaroid"] {
            let result = compute_layout(&full_hd(), &[], style, &LayoutOptions::default());
            assert!(matches!(result, Err(LayoutError::InvalidDimension { .. })), "{style}");
        }
    }

    // Tests a zero-sized canvas built without the checked constructor is rejected
    // Verified by skipping canvas validation
    #[test]
    fn test_zero_canvas_rejected() {
        let canvas = Canvas {
            width: 0,
            height: 1080,
        };
        let result = execute(&GridStyle, &canvas, &items(&[1.0]), &LayoutOptions::default());
        assert!(matches!(result, Err(LayoutError::InvalidDimension { .. })));
    }

    // Tests invalid items and options are reported before any placement
    // Verified by validating options after dispatch
    #[test]
    fn test_invalid_inputs_rejected() {
        let bad_item = vec![ImageItem::new("x", -1.0)];
        assert!(matches!(
            compute_layout(&full_hd(), &bad_item, "grid", &LayoutOptions::default()),
            Err(LayoutError::InvalidDimension { .. })
        ));

        let bad_options = LayoutOptions::default().with_symmetry_fold(0);
        assert!(matches!(
            compute_layout(&full_hd(), &items(&[1.0]), "kaleidoscope", &bad_options),
            Err(LayoutError::InvalidParameter { .. })
        ));
    }

    // Tests unknown styles are reported before input validation
    // Verified by validating items first
    #[test]
    fn test_unknown_style() {
        let result = compute_layout(&full_hd(), &[], "cubist", &LayoutOptions::default());
        assert!(matches!(result, Err(LayoutError::UnknownStyle { .. })));
    }

    // Tests an absent seed behaves like the default seed
    // Verified by seeding from the clock when none is given
    #[test]
    fn test_default_seed() -> mosaicist::Result<()> {
        let input = mixed_items(8);
        let unseeded = compute_layout(&full_hd(), &input, "scrapbook", &LayoutOptions::default())?;
        let seeded = compute_layout(
            &full_hd(),
            &input,
            "scrapbook",
            &LayoutOptions::seeded(DEFAULT_SEED),
        )?;
        assert_eq!(unseeded, seeded);
        Ok(())
    }

    // Tests the frame margin keeps every placement inside the inset region
    // Verified by laying out into the full canvas
    #[test]
    fn test_frame_margin() -> mosaicist::Result<()> {
        let options = LayoutOptions::default().with_frame_margin(40.0);
        for style in ["grid", "mosaic", "voronoi", "spiral"] {
            let result = compute_layout(&full_hd(), &mixed_items(6), style, &options)?;
            assert!((result.region.x - 40.0).abs() < f64::EPSILON);
            assert!((result.stats.layout_area - 1840.0 * 1000.0).abs() < 1e-6);
            for record in &result.placements {
                assert!(result.region.contains(&record.footprint()), "{style}");
            }
        }
        Ok(())
    }

    // Tests the result carries the style name and statistics
    // Verified by reporting the canvas area as the layout area
    #[test]
    fn test_result_stats() -> mosaicist::Result<()> {
        let result = execute(&GridStyle, &full_hd(), &items(&[1.0, 2.0, 0.5]), &LayoutOptions::default())?;
        assert_eq!(result.style, "grid");
        assert_eq!(result.stats.item_count, 3);
        assert_eq!(result.stats.fallback_count, 0);
        assert!((result.stats.canvas_area - 1920.0 * 1080.0).abs() < f64::EPSILON);
        Ok(())
    }
}
