use crate::app::BandviewApp;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        super::section_header(ui, "Sentinel-2 L2A acquisition", Some("last 24 h"));
        ui.add_space(4.0);

        let form = &mut app.acquisition;
        egui::Grid::new("acquisition_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Copernicus Username:");
                ui.text_edit_singleline(&mut form.username);
                ui.end_row();

                ui.label("Copernicus Password:");
                ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
                ui.end_row();

                ui.label("Area of interest (WKT):");
                ui.add(
                    egui::TextEdit::multiline(&mut form.aoi)
                        .desired_rows(2)
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();
            });

        ui.add_space(4.0);
        let running = app.acquisition.worker.is_running();
        if ui
            .add_enabled(!running, egui::Button::new("Download Sentinel Image"))
            .clicked()
        {
            app.start_acquisition();
        }

        ui.add_space(4.0);
        super::worker_output(ui, "acquisition_output", &app.acquisition.worker);
    });
}
