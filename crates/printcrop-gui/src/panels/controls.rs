use crate::app::PrintcropApp;

pub fn show(ctx: &egui::Context, app: &mut PrintcropApp) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Select Folder").clicked() {
                if let Some(folder) = rfd::FileDialog::new().pick_folder() {
                    app.open_folder(folder);
                }
            }

            let can_save = app.controller.is_some() && !app.ui_state.loading;
            if ui
                .add_enabled(can_save, egui::Button::new("Save + Next"))
                .on_hover_text("Enter")
                .clicked()
            {
                app.save_and_next();
            }

            if ui.button("Quit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            if let Some(session) = &app.session {
                let (pos, total) = session.position();
                ui.separator();
                if app.ui_state.all_done {
                    ui.label(format!("{total} of {total} done"));
                } else {
                    ui.label(format!("Image {pos} of {total}"));
                }
            }
        });
        ui.add_space(4.0);
    });
}
