//! Tests for engine constants and configuration defaults

#[cfg(test)]
mod tests {
    use mosaicist::io::configuration::{
        DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_MAX_OVERLAP_RATIO, DEFAULT_SEED,
        DEFAULT_SYMMETRY_FOLD, EXACTNESS_TOLERANCE, GOLDEN_ANGLE, GOLDEN_RATIO_INVERSE,
        MAX_COLLISION_ATTEMPTS, MAX_INDIVIDUAL_PROGRESS_BARS, PREVIEW_SUFFIX,
        SUPPORTED_EXTENSIONS,
    };

    // Tests the default seed value
    // Verified by changing the seed
    #[test]
    fn test_default_seed() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests the default canvas is full HD
    // Verified by swapping width and height
    #[test]
    fn test_default_canvas() {
        assert_eq!((DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT), (1920, 1080));
    }

    // Tests the golden constants agree with their closed forms
    // Verified by truncating the golden angle
    #[test]
    fn test_golden_constants() {
        let sqrt5 = 5f64.sqrt();
        assert!((GOLDEN_ANGLE - std::f64::consts::PI * (3.0 - sqrt5)).abs() < 1e-12);
        assert!((GOLDEN_RATIO_INVERSE - (sqrt5 - 1.0) / 2.0).abs() < 1e-12);
    }

    // Tests collision and kaleidoscope defaults
    // Verified by changing the attempt budget
    #[test]
    fn test_style_defaults() {
        assert_eq!(MAX_COLLISION_ATTEMPTS, 50);
        assert!((DEFAULT_MAX_OVERLAP_RATIO - 0.15).abs() < f64::EPSILON);
        assert_eq!(DEFAULT_SYMMETRY_FOLD, 6);
        assert!((EXACTNESS_TOLERANCE - 0.005).abs() < f64::EPSILON);
    }

    // Tests output naming and progress limits
    // Verified by changing the suffix
    #[test]
    fn test_output_settings() {
        assert_eq!(PREVIEW_SUFFIX, "_layout.png");
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert!(SUPPORTED_EXTENSIONS.contains(&"jpg"));
        assert!(SUPPORTED_EXTENSIONS.iter().all(|ext| ext.chars().all(|c| c.is_ascii_lowercase())));
    }
}
