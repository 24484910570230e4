use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintcropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("Degenerate display fit: {width}x{height}")]
    InvalidDisplayFit { width: f32, height: f32 },

    #[error("No JPEG images found in {}", .0.display())]
    NoImagesFound(PathBuf),

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Cannot create output directory {}: {source}", .path.display())]
    UnwritablePath {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PrintcropError>;
