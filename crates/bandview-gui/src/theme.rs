use bandview_core::settings::Theme;

/// Install the egui visuals for `theme`.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let visuals = match theme {
        Theme::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = egui::Color32::from_gray(53);
            v.window_fill = egui::Color32::from_gray(53);
            v.extreme_bg_color = egui::Color32::from_gray(35);
            v.selection.bg_fill = egui::Color32::from_rgb(42, 130, 218);
            v.hyperlink_color = egui::Color32::from_rgb(42, 130, 218);
            v
        }
        Theme::Light => egui::Visuals::light(),
    };
    ctx.set_visuals(visuals);
}
