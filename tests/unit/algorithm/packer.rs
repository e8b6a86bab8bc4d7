//! Tests for weighted guillotine packing

#[cfg(test)]
mod tests {
    use mosaicist::algorithm::packer::packing_order;
    use mosaicist::{ImageItem, LayoutOptions, LayoutResult, compute_layout};

    use crate::{full_hd, items, mixed_items};

    fn assert_disjoint(result: &LayoutResult) {
        for (i, a) in result.placements.iter().enumerate() {
            for b in result.placements.iter().skip(i + 1) {
                let overlap = a.footprint().intersection_area(&b.footprint());
                assert!(overlap < 1e-6, "{} and {} overlap by {overlap}", a.item_id, b.item_id);
            }
        }
    }

    // Tests packing order sorts by weight, then aspect, then input order
    // Verified by sorting weights ascending
    #[test]
    fn test_packing_order() {
        let items = vec![
            ImageItem::new("a", 1.0),
            ImageItem::new("b", 2.0).with_weight(3.0),
            ImageItem::new("c", 1.5),
            ImageItem::new("d", 1.0),
        ];
        assert_eq!(packing_order(&items), vec![1, 2, 0, 3]);
    }

    // Tests packed layouts cover the region exactly without overlap
    // Verified by dropping the final distribution of free rectangles
    #[test]
    fn test_mosaic_is_exact_and_disjoint() -> mosaicist::Result<()> {
        for count in [1, 2, 3, 5, 8, 13, 40] {
            let result = compute_layout(
                &full_hd(),
                &mixed_items(count),
                "mosaic",
                &LayoutOptions::default(),
            )?;
            assert_eq!(result.len(), count);
            assert!(result.stats.exact, "{count} items: {:?}", result.stats);
            assert_disjoint(&result);
        }
        Ok(())
    }

    // Tests a heavier item receives more area
    // Verified by ignoring weights when computing target areas
    #[test]
    fn test_weight_gets_area() -> mosaicist::Result<()> {
        let mut input = items(&[1.0, 1.0]);
        if let Some(hero) = input.get_mut(1) {
            hero.weight = 3.0;
        }
        let result = compute_layout(&full_hd(), &input, "mosaic", &LayoutOptions::default())?;
        let heavy: f64 = result.placements_of("img1.jpg").map(|p| p.area()).sum();
        let light: f64 = result.placements_of("img0.jpg").map(|p| p.area()).sum();
        assert!(heavy > light);
        Ok(())
    }

    // Tests every item appears exactly once
    // Verified by placing the heaviest item twice
    #[test]
    fn test_each_item_placed_once() -> mosaicist::Result<()> {
        let result = compute_layout(
            &full_hd(),
            &mixed_items(17),
            "mosaic-pack",
            &LayoutOptions::seeded(123),
        )?;
        let mut indices: Vec<usize> = result.placements.iter().map(|p| p.item_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..17).collect::<Vec<_>>());
        assert_eq!(result.style, "mosaic");
        Ok(())
    }
}
