//! Photograph discovery and dimension lookup
//!
//! The engine only needs aspect ratios, so sources report natural pixel
//! dimensions; file-backed sources read image headers without decoding pixels.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{LayoutError, Result, invalid_dimension};
use crate::model::ImageItem;

/// Anything that can report the natural size of an identified image
pub trait ImageSource {
    /// Width and height in pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the image is unknown or unreadable
    fn dimensions(&self, id: &str) -> Result<(u32, u32)>;
}

/// Images on disk, identified by path relative to a root directory
#[derive(Debug, Clone)]
pub struct FileImageSource {
    root: PathBuf,
}

impl FileImageSource {
    /// Resolve identifiers against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageSource for FileImageSource {
    fn dimensions(&self, id: &str) -> Result<(u32, u32)> {
        let path = self.root.join(id);
        image::image_dimensions(&path).map_err(|source| LayoutError::ImageLoad { path, source })
    }
}

/// Dimensions held in memory, for callers that already know them
#[derive(Debug, Clone, Default)]
pub struct MemoryImageSource {
    sizes: BTreeMap<String, (u32, u32)>,
}

impl MemoryImageSource {
    /// Empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the dimensions of one image
    pub fn insert(&mut self, id: impl Into<String>, width: u32, height: u32) {
        self.sizes.insert(id.into(), (width, height));
    }

    /// Known identifiers in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }
}

impl ImageSource for MemoryImageSource {
    fn dimensions(&self, id: &str) -> Result<(u32, u32)> {
        self.sizes
            .get(id)
            .copied()
            .ok_or_else(|| invalid_dimension("image dimensions", &format!("unknown image '{id}'")))
    }
}

/// Whether a path has one of the supported photograph extensions
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Supported photographs directly inside `dir`, sorted by file name
///
/// # Errors
///
/// Returns a file system error if the directory cannot be read
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| LayoutError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| LayoutError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source,
            })?
            .path();
        if path.is_file() && is_supported(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Caption derived from a file name: stem words split on separators, title-cased
pub fn caption_from_filename(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let caption = stem
        .split(['_', '-', '.', ' '])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");
    (!caption.is_empty()).then_some(caption)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Build layout items for the given identifiers
///
/// Unreadable images are skipped with a warning; the caption comes from the
/// file name.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidDimension`] if no image could be read
pub fn load_items<'a>(
    source: &dyn ImageSource,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<ImageItem>> {
    let mut items = Vec::new();
    for id in ids {
        let loaded = source
            .dimensions(id)
            .and_then(|(width, height)| ImageItem::from_dimensions(id, width, height));
        match loaded {
            Ok(item) => {
                let item = match caption_from_filename(Path::new(id)) {
                    Some(caption) => item.with_caption(caption),
                    None => item,
                };
                items.push(item);
            }
            Err(error) => tracing::warn!(image = id, %error, "skipping unreadable image"),
        }
    }

    if items.is_empty() {
        return Err(invalid_dimension("item count", &0));
    }
    tracing::debug!(count = items.len(), "loaded image items");
    Ok(items)
}
