use std::path::{Path, PathBuf};
use std::sync::mpsc;

use printcrop_core::crop_rect::PixelCropRect;
use printcrop_core::fit::compute_fit;
use printcrop_core::image_io::{load_image, resize_for_display, save_cropped, SourceImage};
use tracing::info;

use crate::convert::dynamic_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// The image decoded most recently, kept on the worker for the following
/// save. Valid because commands arrive in FIFO order: the save for image N
/// is always queued before the load of image N+1.
struct ImageCache {
    source: Option<SourceImage>,
}

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("printcrop-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut cache = ImageCache { source: None };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path, viewport } => {
                handle_load_image(path, viewport, &mut cache, &tx, &ctx);
            }
            WorkerCommand::SaveCrop { crop, output_path } => {
                handle_save_crop(&crop, &output_path, &cache, &tx, &ctx);
            }
        }
    }
}

fn handle_load_image(
    path: PathBuf,
    viewport: [u32; 2],
    cache: &mut ImageCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let source = match load_image(&path) {
        Ok(s) => s,
        Err(e) => {
            send(
                tx,
                ctx,
                WorkerResult::LoadFailed {
                    path,
                    message: e.to_string(),
                },
            );
            return;
        }
    };

    let fit = match compute_fit(source.width(), source.height(), viewport[0], viewport[1]) {
        Ok(f) => f,
        Err(e) => {
            send(
                tx,
                ctx,
                WorkerResult::LoadFailed {
                    path,
                    message: e.to_string(),
                },
            );
            return;
        }
    };

    let preview = resize_for_display(&source, fit.width as u32, fit.height as u32);
    let color_image = dynamic_to_color_image(&preview);

    info!(
        path = %path.display(),
        width = source.width(),
        height = source.height(),
        "Image loaded"
    );

    let source_size = [source.width(), source.height()];
    cache.source = Some(source);

    send(
        tx,
        ctx,
        WorkerResult::ImageReady {
            path,
            source_size,
            fit,
            preview: color_image,
        },
    );
}

fn handle_save_crop(
    crop: &PixelCropRect,
    output_path: &Path,
    cache: &ImageCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some(source) = &cache.source else {
        send(
            tx,
            ctx,
            WorkerResult::SaveFailed {
                path: output_path.to_path_buf(),
                message: "No image loaded".into(),
            },
        );
        return;
    };

    match save_cropped(source, crop, output_path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::CropSaved {
                path: output_path.to_path_buf(),
            },
        ),
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::SaveFailed {
                path: output_path.to_path_buf(),
                message: e.to_string(),
            },
        ),
    }
}
