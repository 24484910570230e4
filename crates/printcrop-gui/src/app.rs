use std::path::PathBuf;
use std::sync::mpsc;

use printcrop_core::consts::NUDGE_STEP;
use printcrop_core::crop_rect::CropController;
use printcrop_core::session::Session;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{UiState, ViewState};
use crate::worker;

pub struct PrintcropApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Option<Session>,
    /// Crop rectangle for the image on screen; fresh per image, dropped on
    /// advance.
    pub controller: Option<CropController>,
    pub ui_state: UiState,
    pub view: ViewState,
    /// Last known size of the viewport panel, captured when issuing loads.
    pub viewport_size: [u32; 2],
}

impl PrintcropApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            session: None,
            controller: None,
            ui_state: UiState::default(),
            view: ViewState::default(),
            viewport_size: [800, 600],
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Open a folder and begin processing its first image.
    pub fn open_folder(&mut self, folder: PathBuf) {
        self.controller = None;
        self.view.clear();
        self.ui_state = UiState::default();

        match Session::open(&folder) {
            Ok(session) => {
                self.ui_state.add_log(format!(
                    "Opened {} ({} images)",
                    folder.display(),
                    session.len()
                ));
                self.session = Some(session);
                self.request_current_image();
            }
            Err(e) => {
                self.session = None;
                self.ui_state.notice = Some(e.to_string());
            }
        }
    }

    /// Ask the worker to decode and fit the session's current image.
    fn request_current_image(&mut self) {
        let Some(path) = self.session.as_ref().and_then(Session::current_path) else {
            return;
        };

        self.controller = None;
        self.view.clear();
        self.ui_state.loading = true;
        self.send_command(WorkerCommand::LoadImage {
            path,
            viewport: self.viewport_size,
        });
    }

    /// Queue the save for the current rectangle, then advance. The worker
    /// runs commands in order, so the save lands before the next load
    /// replaces its cached source.
    pub fn save_and_next(&mut self) {
        let command = match (&self.session, &self.controller, self.view.source_size) {
            (Some(session), Some(controller), Some([sw, sh])) => {
                session.output_path().map(|output_path| {
                    let crop = controller.to_source_space(sw).to_pixel_rect(sw, sh);
                    WorkerCommand::SaveCrop { crop, output_path }
                })
            }
            _ => None,
        };

        let Some(command) = command else { return };
        self.send_command(command);
        self.advance_session();
    }

    /// Drop the current image's state and move on, finishing the session
    /// when the list is exhausted.
    fn advance_session(&mut self) {
        self.controller = None;

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.advance() {
            self.request_current_image();
        } else {
            self.view.clear();
            self.ui_state.all_done = true;
            self.ui_state.notice = Some("All images have been processed.".into());
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageReady {
                    path,
                    source_size,
                    fit,
                    preview,
                } => {
                    self.ui_state.loading = false;
                    let texture =
                        ctx.load_texture("preview", preview, egui::TextureOptions::LINEAR);
                    self.view.texture = Some(texture);
                    self.view.fit = Some(fit);
                    self.view.source_size = Some(source_size);

                    match CropController::new(fit) {
                        Ok(controller) => {
                            self.controller = Some(controller);
                            if let Some(session) = &self.session {
                                let (pos, total) = session.position();
                                self.ui_state
                                    .add_log(format!("{} ({pos}/{total})", path.display()));
                            }
                        }
                        Err(e) => {
                            self.ui_state
                                .add_log(format!("Skipping {}: {e}", path.display()));
                            self.advance_session();
                        }
                    }
                }
                WorkerResult::CropSaved { path } => {
                    self.ui_state.saved_count += 1;
                    self.ui_state.add_log(format!("Saved {}", path.display()));
                }
                WorkerResult::LoadFailed { path, message } => {
                    self.ui_state.loading = false;
                    self.ui_state
                        .add_log(format!("Skipping {}: {message}", path.display()));
                    self.ui_state.notice = Some(message);
                    self.advance_session();
                }
                WorkerResult::SaveFailed { path, message } => {
                    self.ui_state
                        .add_log(format!("Failed to save {}: {message}", path.display()));
                    self.ui_state.notice = Some(message);
                }
            }
        }
    }

    /// Arrow keys nudge the rectangle; Enter saves and advances.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (left, right, up, down, enter) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::Enter),
            )
        });

        if let Some(controller) = self.controller.as_mut() {
            if left {
                controller.nudge(-NUDGE_STEP, 0.0);
            }
            if right {
                controller.nudge(NUDGE_STEP, 0.0);
            }
            if up {
                controller.nudge(0.0, -NUDGE_STEP);
            }
            if down {
                controller.nudge(0.0, NUDGE_STEP);
            }
        }

        if enter {
            self.save_and_next();
        }
    }
}

impl eframe::App for PrintcropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_keys(ctx);

        panels::controls::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}
