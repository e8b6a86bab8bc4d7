//! Tests for photograph discovery, captions and dimension lookup

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use mosaicist::LayoutError;
    use mosaicist::io::image::{
        FileImageSource, ImageSource, MemoryImageSource, caption_from_filename, is_supported,
        load_items, scan_directory,
    };
    use std::fs;
    use std::path::Path;

    // Tests extension matching ignores case and rejects other files
    // Verified by comparing extensions case-sensitively
    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a.jpg")));
        assert!(is_supported(Path::new("B.JPEG")));
        assert!(is_supported(Path::new("dir/c.webp")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("README")));
    }

    // Tests captions split on separators and title-case each word
    // Verified by keeping underscores in the caption
    #[test]
    fn test_caption_from_filename() {
        assert_eq!(
            caption_from_filename(Path::new("summer_beach-day.jpg")).as_deref(),
            Some("Summer Beach Day")
        );
        assert_eq!(
            caption_from_filename(Path::new("IMG 0042.png")).as_deref(),
            Some("IMG 0042")
        );
        assert_eq!(caption_from_filename(Path::new("___.png")), None);
    }

    // Tests directory scanning keeps supported files in sorted order
    // Verified by returning directory order
    #[test]
    fn test_scan_directory() -> mosaicist::Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["b.png", "a.jpg", "c.txt"] {
            fs::write(dir.path().join(name), b"")?;
        }
        fs::create_dir(dir.path().join("nested.png"))?;

        let files = scan_directory(dir.path())?;
        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
        Ok(())
    }

    // Tests a missing directory is a file system error
    // Verified by returning an empty list for unreadable directories
    #[test]
    fn test_scan_missing_directory() -> mosaicist::Result<()> {
        let dir = tempfile::tempdir()?;
        let result = scan_directory(&dir.path().join("absent"));
        assert!(matches!(result, Err(LayoutError::FileSystem { .. })));
        Ok(())
    }

    // Tests file-backed sources read header dimensions
    // Verified by swapping width and height
    #[test]
    fn test_file_source_dimensions() -> mosaicist::Result<()> {
        let dir = tempfile::tempdir()?;
        let img = RgbaImage::from_pixel(40, 10, Rgba([0, 0, 0, 255]));
        img.save(dir.path().join("wide.png"))?;

        let source = FileImageSource::new(dir.path());
        assert_eq!(source.dimensions("wide.png")?, (40, 10));
        assert!(matches!(
            source.dimensions("missing.png"),
            Err(LayoutError::ImageLoad { .. })
        ));
        assert_eq!(source.root(), dir.path());
        Ok(())
    }

    // Tests unreadable images are skipped and captions attached
    // Verified by failing on the first unknown identifier
    #[test]
    fn test_load_items_skips_unknown() -> mosaicist::Result<()> {
        let mut source = MemoryImageSource::new();
        source.insert("city_lights.jpg", 3000, 2000);
        source.insert("broken.jpg", 0, 100);

        let items = load_items(&source, ["city_lights.jpg", "broken.jpg", "absent.jpg"])?;
        assert_eq!(items.len(), 1);
        let item = items.first();
        assert!(item.is_some_and(|i| (i.aspect_ratio - 1.5).abs() < 1e-12));
        assert_eq!(item.and_then(|i| i.caption.as_deref()), Some("City Lights"));
        assert_eq!(source.ids().collect::<Vec<_>>(), vec!["broken.jpg", "city_lights.jpg"]);
        Ok(())
    }

    // Tests loading nothing usable is an invalid item count
    // Verified by returning an empty item list
    #[test]
    fn test_load_items_none_usable() {
        let source = MemoryImageSource::new();
        assert!(matches!(
            load_items(&source, ["x.jpg"]),
            Err(LayoutError::InvalidDimension { .. })
        ));
    }
}
