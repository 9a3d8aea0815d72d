use bandview_core::render::view_scale;

use crate::app::BandviewApp;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let Some(texture) = app.viewport.texture.as_ref() else {
            show_placeholder(ui);
            return;
        };
        let [w, h] = app
            .viewport
            .image_size
            .unwrap_or([texture.size()[0], texture.size()[1]]);
        let scale = view_scale(app.ui_state.zoom_slider);
        let size = egui::vec2(w as f32, h as f32) * scale;
        let texture_id = texture.id();

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let (img_rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                draw_image(ui, texture_id, img_rect);
            });

        draw_viewing_label(ui, rect, &app.viewport.viewing_label);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open four band files to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
