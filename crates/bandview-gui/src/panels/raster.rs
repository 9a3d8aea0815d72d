use bandview_core::consts::{MAX_SOURCE_BAND, ZOOM_SLIDER_MAX, ZOOM_SLIDER_MIN};
use bandview_core::render::DisplayMode;

use crate::app::BandviewApp;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::SidePanel::left("raster_controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                files_section(ui, app);
                ui.separator();
                composition_section(ctx, ui, app);
                ui.separator();
                zoom_section(ui, app);
            });
        });
}

fn files_section(ui: &mut egui::Ui, app: &mut BandviewApp) {
    super::section_header(ui, "Files", None);
    ui.add_space(4.0);

    if app.session.is_empty() {
        ui.small("File > Open... with Red, Green, Blue and NIR bands");
        return;
    }
    for (path, label) in app.session.paths().iter().zip(["Red", "Green", "Blue", "NIR"]) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        ui.small(format!("{label}: {name}"));
    }
    if let Some(first) = app.session.rasters().first() {
        let meta = &first.metadata;
        ui.small(format!(
            "{}x{}, {} band(s), {}",
            meta.width, meta.height, meta.band_count, meta.sample_type
        ));
    }
    if ui.button("Band Statistics").clicked() {
        app.log_band_stats();
    }
}

fn composition_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut BandviewApp) {
    super::section_header(ui, "Color Composition", Some(app.ui_state.mode.name()));
    ui.add_space(4.0);

    let mut changed = super::enum_combo(ui, "Mode", &mut app.ui_state.mode, DisplayMode::ALL);

    let custom = app.ui_state.mode == DisplayMode::Custom;
    ui.add_enabled_ui(custom, |ui| {
        let bands = &mut app.ui_state.bands;
        for (label, band) in [
            ("Red Band", &mut bands.red),
            ("Green Band", &mut bands.green),
            ("Blue Band", &mut bands.blue),
        ] {
            egui::ComboBox::from_label(label)
                .selected_text(band.to_string())
                .show_ui(ui, |ui| {
                    for n in 1..=MAX_SOURCE_BAND {
                        if ui.selectable_value(band, n, n.to_string()).changed() {
                            changed = true;
                        }
                    }
                });
        }
    });

    ui.add_space(4.0);
    let loaded = !app.session.is_empty();
    if ui
        .add_enabled(loaded, egui::Button::new("Calculate NDVI"))
        .clicked()
    {
        app.calculate_ndvi(ctx);
        return;
    }

    if changed {
        app.refresh_render(ctx);
    }
}

fn zoom_section(ui: &mut egui::Ui, app: &mut BandviewApp) {
    super::section_header(ui, "Zoom", None);
    ui.add_space(4.0);
    ui.add(
        egui::Slider::new(&mut app.ui_state.zoom_slider, ZOOM_SLIDER_MIN..=ZOOM_SLIDER_MAX)
            .show_value(false)
            .clamping(egui::SliderClamping::Always),
    );
    let scale = bandview_core::render::view_scale(app.ui_state.zoom_slider);
    ui.small(format!("{:.0}%", scale * 100.0));
}
