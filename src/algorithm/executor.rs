//! Input validation, style dispatch and result assembly

use crate::algorithm::registry::{LayoutContext, PlacementAlgorithm, StyleRegistry};
use crate::io::error::{Result, computation_error, invalid_dimension};
use crate::math::random::LayoutRng;
use crate::model::{Canvas, ImageItem, LayoutOptions, LayoutResult};

/// Compute a layout with one of the built-in styles
///
/// Deterministic for a fixed `(canvas, items, style, options)`; an absent
/// seed behaves like [`DEFAULT_SEED`](crate::io::configuration::DEFAULT_SEED).
///
/// # Errors
///
/// Returns an error if:
/// - The style name is not registered
/// - The canvas has a zero side, the item list is empty or an item is invalid
/// - An option lies outside its documented range
/// - The style cannot produce valid geometry
pub fn compute_layout(
    canvas: &Canvas,
    items: &[ImageItem],
    style: &str,
    options: &LayoutOptions,
) -> Result<LayoutResult> {
    StyleRegistry::with_builtin_styles().compute_layout(canvas, items, style, options)
}

/// Validate inputs, run one algorithm and assemble its result
///
/// # Errors
///
/// Returns an error if validation fails, the algorithm fails, or the
/// algorithm emits a different number of records than it promised
pub fn execute(
    algorithm: &dyn PlacementAlgorithm,
    canvas: &Canvas,
    items: &[ImageItem],
    options: &LayoutOptions,
) -> Result<LayoutResult> {
    canvas.validate()?;
    if items.is_empty() {
        return Err(invalid_dimension("item count", &0));
    }
    for item in items {
        item.validate()?;
    }
    options.validate()?;

    let region = options.layout_region(canvas)?;
    let expected = algorithm.expected_placements(items.len(), &region, options);

    let span = tracing::debug_span!(
        "layout",
        style = algorithm.name(),
        items = items.len(),
        seed = options.seed()
    );
    let _guard = span.enter();
    tracing::debug!(
        x = region.x,
        y = region.y,
        width = region.width,
        height = region.height,
        "layout region"
    );

    let mut context = LayoutContext {
        region,
        items,
        options,
        rng: LayoutRng::new(options.seed()),
    };
    let outcome = algorithm.place(&mut context)?.finish()?;

    if outcome.records.len() != expected {
        return Err(computation_error(
            "layout",
            &format!(
                "style '{}' produced {} records, expected {expected}",
                algorithm.name(),
                outcome.records.len()
            ),
        ));
    }

    let result = LayoutResult::assemble(
        algorithm.name(),
        region,
        canvas.area(),
        items.len(),
        outcome.records,
        outcome.fallback_count,
        algorithm.family().is_area_filling(),
    );

    if outcome.fallback_count > 0 {
        tracing::info!(
            fallbacks = outcome.fallback_count,
            "some items were placed through a fallback path"
        );
    }
    tracing::debug!(
        covered = result.stats.covered_area,
        layout_area = result.stats.layout_area,
        exact = result.stats.exact,
        "layout complete"
    );

    Ok(result)
}
