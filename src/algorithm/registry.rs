//! Style registry: maps style names to placement algorithms
//!
//! Every style is a [`PlacementAlgorithm`] behind a trait object, so callers
//! can register their own styles next to the built-in ones.

use crate::algorithm::collision::CollisionStyle;
use crate::algorithm::executor::execute;
use crate::algorithm::filmstrip::FilmstripStyle;
use crate::algorithm::fractal::FractalStyle;
use crate::algorithm::grid::GridStyle;
use crate::algorithm::hexagon::HexagonStyle;
use crate::algorithm::magazine::MagazineStyle;
use crate::algorithm::packer::MosaicStyle;
use crate::algorithm::radial::{KaleidoscopeStyle, MandalaStyle, SpiralStyle};
use crate::algorithm::state::PlacementRun;
use crate::algorithm::voronoi::VoronoiStyle;
use crate::io::error::{LayoutError, Result};
use crate::math::random::LayoutRng;
use crate::model::{Canvas, ImageItem, LayoutOptions, LayoutResult};
use crate::spatial::Rect;

// Alternate names accepted for built-in styles
const ALIASES: [(&str, &str); 2] = [("mosaic-pack", "mosaic"), ("randomized-polaroid", "polaroid")];

/// Broad behavior class of a style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFamily {
    /// Disjoint placements tiling the layout region exactly
    AreaFilling,
    /// Disjoint placements around the region center, leaving gaps
    Radial,
    /// Rotated placements with bounded pairwise overlap
    OverlapTolerant,
    /// Disjoint frames on a fixed contact-sheet grid, leaving margins
    Framed,
}

impl StyleFamily {
    /// Whether layouts of this family report the `exact` flag
    pub const fn is_area_filling(self) -> bool {
        matches!(self, Self::AreaFilling)
    }
}

impl std::fmt::Display for StyleFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AreaFilling => write!(f, "area-filling"),
            Self::Radial => write!(f, "radial"),
            Self::OverlapTolerant => write!(f, "overlap-tolerant"),
            Self::Framed => write!(f, "framed"),
        }
    }
}

/// Inputs handed to a placement algorithm
#[derive(Debug)]
pub struct LayoutContext<'a> {
    /// Region to lay out into (canvas minus frame margin)
    pub region: Rect,
    /// Items in input order
    pub items: &'a [ImageItem],
    /// Validated options
    pub options: &'a LayoutOptions,
    /// Random source owned by this computation
    pub rng: LayoutRng,
}

impl LayoutContext<'_> {
    /// Number of input items
    pub const fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A named layout style
pub trait PlacementAlgorithm: Send + Sync {
    /// Registered name, lowercase
    fn name(&self) -> &'static str;

    /// One-line description shown by `--list-styles`
    fn description(&self) -> &'static str;

    /// Behavior class
    fn family(&self) -> StyleFamily;

    /// Number of records a layout of `item_count` items over `region` must contain
    fn expected_placements(
        &self,
        item_count: usize,
        _region: &Rect,
        _options: &LayoutOptions,
    ) -> usize {
        item_count
    }

    /// Compute placements for every item
    ///
    /// # Errors
    ///
    /// Returns an error when the style cannot produce valid geometry
    fn place(&self, context: &mut LayoutContext<'_>) -> Result<PlacementRun>;
}

/// Name-keyed collection of placement algorithms
pub struct StyleRegistry {
    styles: Vec<Box<dyn PlacementAlgorithm>>,
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("styles", &self.names())
            .finish()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::with_builtin_styles()
    }
}

impl StyleRegistry {
    /// Registry without any style
    pub fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    /// Registry holding every built-in style
    pub fn with_builtin_styles() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(GridStyle));
        registry.register(Box::new(MosaicStyle));
        registry.register(Box::new(FractalStyle));
        registry.register(Box::new(VoronoiStyle));
        registry.register(Box::new(HexagonStyle));
        registry.register(Box::new(MagazineStyle));
        registry.register(Box::new(FilmstripStyle));
        registry.register(Box::new(SpiralStyle));
        registry.register(Box::new(MandalaStyle));
        registry.register(Box::new(KaleidoscopeStyle));
        registry.register(Box::new(CollisionStyle::scrapbook()));
        registry.register(Box::new(CollisionStyle::puzzle()));
        registry.register(Box::new(CollisionStyle::polaroid()));
        registry.register(Box::new(CollisionStyle::origami()));
        registry
    }

    /// Add a style, replacing and returning any style registered under the same name
    pub fn register(
        &mut self,
        style: Box<dyn PlacementAlgorithm>,
    ) -> Option<Box<dyn PlacementAlgorithm>> {
        let name = style.name();
        if let Some(slot) = self
            .styles
            .iter_mut()
            .find(|existing| existing.name().eq_ignore_ascii_case(name))
        {
            tracing::debug!(style = name, "replacing registered style");
            return Some(std::mem::replace(slot, style));
        }
        self.styles.push(style);
        None
    }

    /// Look up a style by name or alias, ignoring ASCII case
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownStyle`] if nothing is registered under the name
    pub fn get(&self, name: &str) -> Result<&dyn PlacementAlgorithm> {
        let requested = name.trim();
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(requested))
            .map_or(requested, |(_, target)| *target);

        self.styles
            .iter()
            .find(|style| style.name().eq_ignore_ascii_case(canonical))
            .map(Box::as_ref)
            .ok_or_else(|| LayoutError::UnknownStyle {
                name: name.to_string(),
                available: self.names().iter().map(ToString::to_string).collect(),
            })
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.styles.iter().map(|style| style.name()).collect()
    }

    /// One line per style: name, family and description
    pub fn describe(&self) -> Vec<String> {
        self.styles
            .iter()
            .map(|style| {
                format!(
                    "{:<14} {:<17} {}",
                    style.name(),
                    style.family().to_string(),
                    style.description()
                )
            })
            .collect()
    }

    /// Registered styles in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn PlacementAlgorithm> {
        self.styles.iter().map(Box::as_ref)
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no style is registered
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Compute a layout with the named style
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownStyle`] for an unregistered name, and
    /// otherwise whatever [`execute`] reports
    pub fn compute_layout(
        &self,
        canvas: &Canvas,
        items: &[ImageItem],
        style: &str,
        options: &LayoutOptions,
    ) -> Result<LayoutResult> {
        let algorithm = self.get(style)?;
        execute(algorithm, canvas, items, options)
    }
}
