use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::consts::{OUTPUT_DIR_NAME, SUPPORTED_EXTENSIONS};
use crate::error::{PrintcropError, Result};

/// One batch-crop run over a folder of photos.
///
/// Owns the ordered, filtered file list and the current position. Per-image
/// state (decoded pixels, crop rectangle) lives with the caller and is
/// discarded on advance.
pub struct Session {
    folder: PathBuf,
    output_dir: PathBuf,
    images: Vec<String>,
    index: usize,
}

impl Session {
    /// Scan `folder` for supported images and prepare the output directory.
    ///
    /// Fails with `NoImagesFound` when the filtered list is empty; the
    /// output directory is only created once there is something to process.
    pub fn open(folder: &Path) -> Result<Self> {
        let images = list_images(folder)?;
        if images.is_empty() {
            return Err(PrintcropError::NoImagesFound(folder.to_path_buf()));
        }

        let output_dir = folder.join(OUTPUT_DIR_NAME);
        fs::create_dir_all(&output_dir).map_err(|source| PrintcropError::UnwritablePath {
            path: output_dir.clone(),
            source,
        })?;

        info!(folder = %folder.display(), count = images.len(), "Session opened");

        Ok(Self {
            folder: folder.to_path_buf(),
            output_dir,
            images,
            index: 0,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Filename of the image currently being processed, if any remain.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Full path of the current image.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.current().map(|name| self.folder.join(name))
    }

    /// Output path for the current image: `<folder>/edited/<filename>`.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.current().map(|name| self.output_dir.join(name))
    }

    /// Step to the next image. Returns `false` once the list is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.index < self.images.len() {
            self.index += 1;
        }
        self.index < self.images.len()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.images.len()
    }

    /// `(1-based position, total)` for display.
    pub fn position(&self) -> (usize, usize) {
        ((self.index + 1).min(self.images.len()), self.images.len())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }
}

/// List supported image filenames in `folder`, sorted by name.
fn list_images(folder: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(_) => continue,
        };
        if has_supported_extension(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn has_supported_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}
