//! Engine constants and runtime configuration defaults

/// Fixed seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 42;

/// Default output canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1920;
/// Default output canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1080;

// Area-filling styles may deviate from the layout area by this fraction
/// Relative tolerance for the `exact` flag
pub const EXACTNESS_TOLERANCE: f64 = 0.005;

/// Absolute tolerance for coordinate comparisons, in pixels
pub const GEOMETRY_EPSILON: f64 = 1e-6;

/// Candidate attempts per item before the collision resolver falls back to a grid cell
pub const MAX_COLLISION_ATTEMPTS: usize = 50;
/// Default bound on pairwise overlap for overlap-tolerant styles
pub const DEFAULT_MAX_OVERLAP_RATIO: f64 = 0.15;

/// Default number of replicas in kaleidoscope layouts
pub const DEFAULT_SYMMETRY_FOLD: usize = 6;
/// Largest accepted kaleidoscope fold
pub const MAX_SYMMETRY_FOLD: usize = 64;

/// Largest accepted explicit grid row or column count
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Golden angle in radians, `π·(3 − √5)`
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;
/// Inverse golden ratio used by the fractal split schedule
pub const GOLDEN_RATIO_INVERSE: f64 = 0.618_033_988_749_895;

/// Circle packing density of a hexagonal lattice
pub const HEX_PACKING_DENSITY: f64 = 0.9069;

// Cells smaller than this fraction of the mean cell area count as collapsed
/// Relative area below which a Voronoi cell is degenerate
pub const DEGENERATE_CELL_FRACTION: f64 = 1e-4;

/// Fraction of each jittered-grid cell kept free of seeds along every edge
pub const SEED_CELL_MARGIN: f64 = 0.15;

// Guards against runaway lattice refinement in the hexagon generator
/// Number of hexagon sizes tried when fitting the lattice to the item count
pub const MAX_HEX_REFINEMENTS: usize = 64;

/// Smallest side a packer rectangle may be cut down to, in pixels
pub const MIN_PACKED_SIDE: f64 = 8.0;

// Film strip geometry, in pixels
/// Nominal frame width used to size the contact-sheet grid
pub const FILM_FRAME_WIDTH: f64 = 200.0;
/// Nominal frame height used to size the contact-sheet grid
pub const FILM_FRAME_HEIGHT: f64 = 150.0;
/// Gap between neighboring frames and around the frame grid
pub const FILM_FRAME_GAP: f64 = 20.0;
/// Perforation band along every canvas edge
pub const FILM_PERFORATION: f64 = 8.0;
/// Light border between a frame's edge and its photograph
pub const FILM_FRAME_BORDER: f64 = 5.0;

// Preview output settings
/// Suffix added to preview filenames
pub const PREVIEW_SUFFIX: &str = "_layout.png";
/// Background color of layout previews
pub const PREVIEW_BACKGROUND: [u8; 4] = [245, 245, 245, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// File extensions accepted as photographs
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "webp"];
