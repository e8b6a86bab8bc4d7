//! Tests for the uniform grid style and the shared grid cell computation

#[cfg(test)]
mod tests {
    use mosaicist::algorithm::grid::grid_cells;
    use mosaicist::spatial::Rect;
    use mosaicist::{LayoutError, LayoutOptions, PlacementGeometry, compute_layout};

    use crate::{full_hd, items, mixed_items};

    const REGION: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    fn total_area(cells: &[Rect]) -> f64 {
        cells.iter().map(Rect::area).sum()
    }

    // Tests explicit rows and columns give equal cells in row-major order
    // Verified by swapping the row and column index
    #[test]
    fn test_explicit_two_by_three() {
        let cells = grid_cells(&REGION, 6, Some(2), Some(3));
        assert_eq!(cells.len(), 6);
        for cell in &cells {
            assert!((cell.width - 640.0).abs() < 1e-9);
            assert!((cell.height - 540.0).abs() < 1e-9);
        }
        let second = cells.get(1).copied().unwrap_or(REGION);
        assert!((second.x - 640.0).abs() < 1e-9 && second.y.abs() < 1e-9);
        let fourth = cells.get(3).copied().unwrap_or(REGION);
        assert!(fourth.x.abs() < 1e-9 && (fourth.y - 540.0).abs() < 1e-9);
    }

    // Tests the last cell stretches over unused cells in the final row
    // Verified by leaving the final row partly empty
    #[test]
    fn test_partial_last_row_stretches() {
        let cells = grid_cells(&REGION, 5, Some(2), Some(3));
        let last = cells.last().copied().unwrap_or(REGION);
        assert!((last.x - 640.0).abs() < 1e-9);
        assert!((last.width - 1280.0).abs() < 1e-9);
        assert!((total_area(&cells) - REGION.area()).abs() < 1e-6);
    }

    // Tests too-small grids grow rows and oversized grids drop empty rows
    // Verified by honoring the requested row count
    #[test]
    fn test_rows_adjust_to_count() {
        let grown = grid_cells(&REGION, 5, Some(1), Some(2));
        assert_eq!(grown.len(), 5);
        assert!(grown.iter().all(|c| (c.height - 360.0).abs() < 1e-9));

        let trimmed = grid_cells(&REGION, 5, Some(4), Some(3));
        assert!(trimmed.iter().all(|c| (c.height - 540.0).abs() < 1e-9));
        assert!((total_area(&trimmed) - REGION.area()).abs() < 1e-6);
    }

    // Tests a single missing dimension is derived from the count
    // Verified by defaulting the missing side to one
    #[test]
    fn test_missing_dimension_derived() {
        let cells = grid_cells(&REGION, 8, None, Some(4));
        assert!(cells.iter().all(|c| (c.width - 480.0).abs() < 1e-9));
        assert!(cells.iter().all(|c| (c.height - 540.0).abs() < 1e-9));
    }

    // Tests a single item covers the whole canvas with a full crop
    // Verified by shrinking the lone cell to the auto grid cell size
    #[test]
    fn test_single_item_fills_canvas() -> mosaicist::Result<()> {
        let result = compute_layout(&full_hd(), &items(&[1.0]), "grid", &LayoutOptions::default())?;
        let record = result.placements.first();
        assert!(matches!(
            record.map(|r| &r.geometry),
            Some(PlacementGeometry::Rect(rect)) if *rect == REGION
        ));
        assert!(result.stats.exact);
        Ok(())
    }

    // Tests grid placements tile the region and keep input order
    // Verified by sorting items by aspect before laying out
    #[test]
    fn test_grid_layout_is_exact() -> mosaicist::Result<()> {
        let result = compute_layout(&full_hd(), &mixed_items(11), "grid", &LayoutOptions::default())?;
        assert_eq!(result.len(), 11);
        assert!(result.stats.exact);
        for (index, record) in result.placements.iter().enumerate() {
            assert_eq!(record.item_index, index);
            assert!(record.rotation.abs() < f64::EPSILON);
        }
        Ok(())
    }

    // Tests huge requested dimensions neither overflow nor reach the layout
    // Verified by multiplying rows and columns unchecked
    #[test]
    fn test_huge_dimensions() {
        let cells = grid_cells(&REGION, 3, Some(usize::MAX), Some(2));
        assert_eq!(cells.len(), 3);
        assert!((total_area(&cells) - REGION.area()).abs() < 1e-6);

        let options = LayoutOptions::default().with_grid(usize::MAX, 2);
        assert!(matches!(
            compute_layout(&full_hd(), &items(&[1.0, 1.0, 1.0]), "grid", &options),
            Err(LayoutError::InvalidParameter { parameter: "rows", .. })
        ));
    }
}
