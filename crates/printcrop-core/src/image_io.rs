use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use tracing::info;

use crate::consts::JPEG_QUALITY;
use crate::crop_rect::PixelCropRect;
use crate::error::{PrintcropError, Result};

/// A decoded photograph. Read-only once loaded; lives for the duration of
/// processing a single file.
pub struct SourceImage {
    pub image: DynamicImage,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Decode an image file.
pub fn load_image(path: &Path) -> Result<SourceImage> {
    let image = image::open(path).map_err(|source| PrintcropError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceImage { image })
}

/// High-quality rescale to the display-fit dimensions for the on-screen
/// preview.
pub fn resize_for_display(source: &SourceImage, width: u32, height: u32) -> DynamicImage {
    source
        .image
        .resize_exact(width, height, FilterType::Lanczos3)
}

/// Crop `source` to `rect` and encode the result to `path`.
///
/// JPEG output is written at quality 95; any other extension falls back to
/// the format implied by the path.
pub fn save_cropped(source: &SourceImage, rect: &PixelCropRect, path: &Path) -> Result<()> {
    let cropped = source
        .image
        .crop_imm(rect.x, rect.y, rect.width, rect.height);

    if is_jpeg(path) {
        let file = File::create(path).map_err(|e| PrintcropError::Encode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
        cropped
            .to_rgb8()
            .write_with_encoder(encoder)
            .map_err(|source| PrintcropError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
    } else {
        cropped.save(path).map_err(|source| PrintcropError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    }

    info!(
        output = %path.display(),
        width = rect.width,
        height = rect.height,
        "Saved crop"
    );
    Ok(())
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}
