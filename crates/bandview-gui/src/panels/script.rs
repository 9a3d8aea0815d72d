use crate::app::BandviewApp;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        super::section_header(ui, "Google Earth Engine script", None);
        ui.add_space(4.0);

        let editor_height = ui.available_height() * 0.55;
        egui::ScrollArea::vertical()
            .id_salt("script_editor")
            .max_height(editor_height)
            .show(ui, |ui| {
                ui.add_sized(
                    [ui.available_width(), editor_height],
                    egui::TextEdit::multiline(&mut app.script.source)
                        .code_editor()
                        .hint_text("// Earth Engine script"),
                );
            });

        ui.add_space(4.0);
        let running = app.script.worker.is_running();
        if ui
            .add_enabled(!running, egui::Button::new("Run Script"))
            .clicked()
        {
            app.run_script();
        }

        ui.add_space(4.0);
        super::worker_output(ui, "script_output", &app.script.worker);
    });
}
