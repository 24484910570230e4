use crate::app::PrintcropApp;

pub fn show(ctx: &egui::Context, app: &mut PrintcropApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if let Some(ref notice) = app.ui_state.notice {
            ui.colored_label(egui::Color32::LIGHT_YELLOW, notice);
        }

        // Fixed-height log area, three lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(size) = app.view.source_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Saved: {}", app.ui_state.saved_count));
            if app.ui_state.loading {
                ui.separator();
                ui.spinner();
            }
        });

        ui.add_space(2.0);
    });
}
