/// Rejection-sampling placement for scrapbook, puzzle, polaroid and origami styles
pub mod collision;
/// Input validation, dispatch and result assembly
pub mod executor;
/// Film frames on a contact-sheet grid
pub mod filmstrip;
/// Recursive golden-ratio subdivision
pub mod fractal;
/// Uniform grid and the shared grid cell computation
pub mod grid;
/// Hexagonal tessellation
pub mod hexagon;
/// Hero photo beside a thumbnail grid
pub mod magazine;
/// Weighted guillotine packing
pub mod packer;
/// Spiral, mandala and kaleidoscope styles
pub mod radial;
/// Style trait, families and the name registry
pub mod registry;
/// Placement state machine
pub mod state;
/// Voronoi partition around jittered seeds
pub mod voronoi;

pub use executor::compute_layout;
pub use registry::{LayoutContext, PlacementAlgorithm, StyleFamily, StyleRegistry};
pub use state::{PlacementOutcome, PlacementPhase, PlacementRun};
