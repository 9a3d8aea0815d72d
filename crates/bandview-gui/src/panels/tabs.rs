use crate::app::BandviewApp;
use crate::states::Tab;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for &tab in Tab::ALL {
                let busy = match tab {
                    Tab::Raster => false,
                    Tab::Script => app.script.worker.is_running(),
                    Tab::Acquisition => app.acquisition.worker.is_running(),
                };
                let title = if busy {
                    format!("{} (running)", tab.title())
                } else {
                    tab.title().to_string()
                };
                ui.selectable_value(&mut app.ui_state.tab, tab, title);
            }
        });
    });
}
