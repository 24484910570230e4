use printcrop_core::fit::DisplayFit;

use crate::app::PrintcropApp;

pub fn show(ctx: &egui::Context, app: &mut PrintcropApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        // Remember the panel size so the next load is fitted to it.
        app.viewport_size = [rect.width().max(1.0) as u32, rect.height().max(1.0) as u32];

        let Some(texture) = &app.view.texture else {
            show_placeholder(ui, rect);
            return;
        };
        let Some(fit) = app.view.fit else {
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        let img_rect = egui::Rect::from_min_size(
            rect.min + egui::vec2(fit.offset_x, fit.offset_y),
            egui::vec2(fit.width, fit.height),
        );
        ui.painter().image(
            texture.id(),
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        if response.dragged_by(egui::PointerButton::Primary) {
            if let (Some(pos), Some(controller)) =
                (response.interact_pointer_pos(), app.controller.as_mut())
            {
                controller.drag_to(pos.x - rect.min.x, pos.y - rect.min.y);
            }
        }

        if let Some(controller) = &app.controller {
            draw_crop_overlay(ui.painter(), rect, &fit, controller);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_placeholder(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Select a folder of photos to begin",
        egui::FontId::proportional(16.0),
        egui::Color32::GRAY,
    );
}

/// Dim everything outside the crop rectangle and outline it in red.
fn draw_crop_overlay(
    painter: &egui::Painter,
    panel: egui::Rect,
    fit: &DisplayFit,
    controller: &printcrop_core::crop_rect::CropController,
) {
    let r = controller.rect();
    let crop = egui::Rect::from_min_max(
        panel.min + egui::vec2(r.x1, r.y1),
        panel.min + egui::vec2(r.x2, r.y2),
    );
    let image = egui::Rect::from_min_max(
        panel.min + egui::vec2(fit.offset_x, fit.offset_y),
        panel.min + egui::vec2(fit.right(), fit.bottom()),
    );

    draw_dim_regions(painter, image, crop);

    painter.rect_stroke(
        crop,
        0.0,
        egui::Stroke::new(2.0, egui::Color32::RED),
        egui::epaint::StrokeKind::Outside,
    );
}

fn draw_dim_regions(painter: &egui::Painter, image: egui::Rect, crop: egui::Rect) {
    let dim = egui::Color32::from_black_alpha(120);

    let regions = [
        // Above and below the crop, full image width.
        egui::Rect::from_min_max(image.min, egui::pos2(image.max.x, crop.min.y)),
        egui::Rect::from_min_max(egui::pos2(image.min.x, crop.max.y), image.max),
        // Left and right strips beside the crop.
        egui::Rect::from_min_max(
            egui::pos2(image.min.x, crop.min.y),
            egui::pos2(crop.min.x, crop.max.y),
        ),
        egui::Rect::from_min_max(
            egui::pos2(crop.max.x, crop.min.y),
            egui::pos2(image.max.x, crop.max.y),
        ),
    ];

    for region in regions {
        if region.width() > 0.0 && region.height() > 0.0 {
            painter.rect_filled(region, 0.0, dim);
        }
    }
}
