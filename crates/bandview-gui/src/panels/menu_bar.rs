use bandview_core::settings::Theme;

use crate::app::BandviewApp;
use crate::messages::DialogResult;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_files(ctx, app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let can_save = !app.session.is_empty();
                if ui
                    .add_enabled(
                        can_save,
                        egui::Button::new("Save...").shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    save_file(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Theme", |ui| {
                for &theme in Theme::ALL {
                    let selected = app.settings.theme == theme;
                    if ui.radio(selected, theme.to_string()).clicked() {
                        ui.close();
                        app.set_theme(ctx, theme);
                    }
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_files(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S)))
            && !app.session.is_empty()
        {
            save_file(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_files(ctx: &egui::Context, app: &BandviewApp) {
    let tx = app.dialog_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(paths) = rfd::FileDialog::new()
            .set_title("Open Red, Green, Blue and NIR bands")
            .add_filter("GeoTIFF", &["tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_files()
        {
            let _ = tx.send(DialogResult::Open { paths });
            ctx.request_repaint();
        }
    });
}

fn save_file(ctx: &egui::Context, app: &BandviewApp) {
    let tx = app.dialog_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("GeoTIFF", &["tif", "tiff"])
            .set_file_name("output.tif")
            .save_file()
        {
            let _ = tx.send(DialogResult::Save { path });
            ctx.request_repaint();
        }
    });
}
