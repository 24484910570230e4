use std::path::PathBuf;

use printcrop_core::crop_rect::PixelCropRect;
use printcrop_core::fit::DisplayFit;

/// Commands sent from the UI thread to the worker thread.
///
/// The worker processes commands strictly in order, so a `SaveCrop` queued
/// before a `LoadImage` is always written before the next image replaces
/// the worker's cached source.
pub enum WorkerCommand {
    /// Decode an image, fit it to the viewport, and prepare the preview.
    LoadImage { path: PathBuf, viewport: [u32; 2] },

    /// Crop the most recently loaded image and encode it to `output_path`.
    SaveCrop {
        crop: PixelCropRect,
        output_path: PathBuf,
    },
}

/// Results sent from the worker thread back to the UI thread.
pub enum WorkerResult {
    /// Image decoded and preview resized, ready for display.
    ImageReady {
        path: PathBuf,
        source_size: [u32; 2],
        fit: DisplayFit,
        preview: egui::ColorImage,
    },

    /// Crop written to disk.
    CropSaved { path: PathBuf },

    /// The current image could not be decoded or fitted; skip it.
    LoadFailed { path: PathBuf, message: String },

    /// The crop could not be written; the session continues.
    SaveFailed { path: PathBuf, message: String },
}
