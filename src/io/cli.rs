//! Command-line interface: lay out a directory of photographs in one or all styles

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use crate::algorithm::StyleRegistry;
use crate::analysis::{CoverageMap, LayoutReport};
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_SEED, PREVIEW_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{FileImageSource, load_items, scan_directory};
use crate::io::progress::ProgressManager;
use crate::io::visualization::export_preview;
use crate::model::{Canvas, ImageItem, LayoutOptions, LayoutResult};

// Sample spacing of the coverage map printed by --analysis, in pixels
const ANALYSIS_STRIDE: f64 = 4.0;

#[derive(Parser, Debug)]
#[command(name = "mosaicist")]
#[command(
    author,
    version,
    about = "Compute photo collage layouts for a directory of images"
)]
/// Command-line arguments for the layout tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory containing the photographs
    #[arg(value_name = "DIR", required_unless_present = "list_styles")]
    pub target: Option<PathBuf>,

    /// Style name, or `all` for every registered style
    #[arg(short, long, default_value = "mosaic")]
    pub style: String,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Random seed for reproducible layouts
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid rows (grid, magazine and collision fallback)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Grid columns (grid, magazine and collision fallback)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Largest allowed pairwise overlap for the overlap-tolerant styles
    #[arg(long, value_name = "RATIO")]
    pub max_overlap: Option<f64>,

    /// Kaleidoscope symmetry fold
    #[arg(long)]
    pub fold: Option<usize>,

    /// Uniform canvas inset reserved for borders, in pixels
    #[arg(long, default_value_t = 0.0)]
    pub frame_margin: f64,

    /// Keep every kaleidoscope wedge unmirrored
    #[arg(long)]
    pub no_mirror: bool,

    /// Directory for preview images
    #[arg(short, long, default_value = "layouts")]
    pub output: PathBuf,

    /// Write a wireframe preview PNG per style
    #[arg(short, long)]
    pub preview: bool,

    /// Print overlap, containment and coverage measurements
    #[arg(short, long)]
    pub analysis: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log recovered conditions and per-layout summaries
    #[arg(short, long)]
    pub verbose: bool,

    /// List registered styles and exit
    #[arg(long)]
    pub list_styles: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Layout options assembled from the flags
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            seed: Some(self.seed),
            rows: self.rows,
            cols: self.cols,
            max_overlap_ratio: self.max_overlap,
            symmetry_fold: self.fold,
            frame_margin: self.frame_margin,
            mirror_wedges: !self.no_mirror,
        }
    }

    /// Default log filter for the chosen verbosity
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }
}

/// Runs the requested layouts and reports them
pub struct LayoutProcessor {
    cli: Cli,
    registry: StyleRegistry,
    progress_manager: Option<ProgressManager>,
}

impl LayoutProcessor {
    /// Create a processor with the built-in styles
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            registry: StyleRegistry::with_builtin_styles(),
            progress_manager,
        }
    }

    /// Process according to the command-line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, no image is usable,
    /// a style is unknown, a layout fails or a preview cannot be written
    // Allow print for the style listing and per-style summaries
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<Vec<LayoutResult>> {
        if self.cli.list_styles {
            for line in self.registry.describe() {
                println!("{line}");
            }
            return Ok(Vec::new());
        }

        let items = self.collect_items()?;
        let canvas = Canvas::new(self.cli.width, self.cli.height)?;
        let options = self.cli.layout_options();
        options.validate()?;
        let styles = self.selected_styles()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(styles.len());
        }

        let mut results = Vec::with_capacity(styles.len());
        for (index, style) in styles.iter().enumerate() {
            let result = self.process_style(index, style, &canvas, &items, &options)?;
            println!(
                "{:<14} {:>4} placements  coverage {:>6.2}%  fallbacks {}  exact {}",
                result.style,
                result.len(),
                result.stats.covered_area / result.stats.layout_area * 100.0,
                result.stats.fallback_count,
                result.stats.exact
            );
            results.push(result);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(results)
    }

    fn collect_items(&self) -> Result<Vec<ImageItem>> {
        let dir = self
            .cli
            .target
            .as_deref()
            .ok_or_else(|| crate::io::error::invalid_dimension("item count", &0))?;
        let files = scan_directory(dir)?;
        let names: Vec<String> = files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        tracing::info!(dir = %dir.display(), files = names.len(), "scanned photographs");

        let source = FileImageSource::new(dir);
        load_items(&source, names.iter().map(String::as_str))
    }

    fn selected_styles(&self) -> Result<Vec<&'static str>> {
        if self.cli.style.eq_ignore_ascii_case("all") {
            return Ok(self.registry.names());
        }
        self.cli
            .style
            .split(',')
            .map(|name| self.registry.get(name).map(|style| style.name()))
            .collect()
    }

    // Allow print for analysis output
    #[allow(clippy::print_stdout)]
    fn process_style(
        &mut self,
        index: usize,
        style: &str,
        canvas: &Canvas,
        items: &[ImageItem],
        options: &LayoutOptions,
    ) -> Result<LayoutResult> {
        let start_time = Instant::now();
        let steps = 1 + usize::from(self.cli.preview) + usize::from(self.cli.analysis);
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_job(index, style, steps);
        }

        let result = self
            .registry
            .compute_layout(canvas, items, style, options)?;
        self.advance(index);

        if self.cli.preview {
            export_preview(&result, canvas, &self.preview_path(style))?;
            self.advance(index);
        }

        if self.cli.analysis {
            let report = LayoutReport::measure(&result);
            let coverage = CoverageMap::sample(&result, ANALYSIS_STRIDE)?;
            println!(
                "{report}; sampled gaps {:.2}%, sampled overlap {:.2}%",
                coverage.gap_fraction() * 100.0,
                coverage.overlap_fraction() * 100.0
            );
            self.advance(index);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_job(index, start_time.elapsed());
        }
        Ok(result)
    }

    fn advance(&mut self, index: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index);
        }
    }

    /// Preview file for a style inside the output directory
    pub fn preview_path(&self, style: &str) -> PathBuf {
        preview_path(&self.cli.output, style)
    }
}

/// `<output>/<style>_layout.png`
pub fn preview_path(output: &Path, style: &str) -> PathBuf {
    output.join(format!("{style}{PREVIEW_SUFFIX}"))
}
