//! Input/output: errors, constants, image sources, CLI and previews

/// Command-line argument parsing and layout batch processing
pub mod cli;
/// Compile-time constants and defaults
pub mod configuration;
/// Error taxonomy and result alias
pub mod error;
/// Image dimension sources and directory scanning
pub mod image;
/// Terminal progress bars
pub mod progress;
/// Wireframe preview rendering
pub mod visualization;
