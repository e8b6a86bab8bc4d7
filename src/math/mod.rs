//! Numeric utilities for the layout algorithms

/// Seeded random source for reproducible layouts
pub mod random;
/// Deterministic sequences: grid factorization, split schedule, spiral positions
pub mod sequence;
