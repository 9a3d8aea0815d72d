use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};

use bandview_core::remote::{
    spawn_acquisition, spawn_script, AcquisitionRequest, Catalog, CatalogQuery,
    CopernicusCatalog, Credentials, DEFAULT_SCRIPT_DELAY,
};
use bandview_core::render::{render, DisplayMode, RenderConfig, RenderOutput, RenderRequest};
use bandview_core::session::Session;
use bandview_core::settings::{Settings, Theme};
use bandview_core::worker::Notify;
use tracing::warn;

use crate::convert::{gray_to_color_image, rgb_to_color_image};
use crate::messages::DialogResult;
use crate::panels;
use crate::states::{AcquisitionState, ScriptState, Tab, UIState, ViewportState};
use crate::theme::apply_theme;

pub struct BandviewApp {
    pub session: Session,
    pub settings: Settings,
    pub render_config: RenderConfig,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub script: ScriptState,
    pub acquisition: AcquisitionState,
    pub dialog_tx: mpsc::Sender<DialogResult>,
    dialog_rx: mpsc::Receiver<DialogResult>,
    notify: Notify,
}

impl BandviewApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let settings = Settings::load_or_default();
        apply_theme(ctx, settings.theme);

        let (dialog_tx, dialog_rx) = mpsc::channel();
        let repaint_ctx = ctx.clone();
        let notify: Notify = Arc::new(move || repaint_ctx.request_repaint());

        Self {
            session: Session::new(),
            settings,
            render_config: RenderConfig::default(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            script: ScriptState::default(),
            acquisition: AcquisitionState::default(),
            dialog_tx,
            dialog_rx,
            notify,
        }
    }

    /// Drain finished file dialogs and worker status lines.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.dialog_rx.try_recv() {
            match result {
                DialogResult::Open { paths } => self.open_files(ctx, &paths),
                DialogResult::Save { path } => self.save_first_band(&path),
            }
        }
        self.script.worker.poll();
        self.acquisition.worker.poll();
    }

    fn open_files(&mut self, ctx: &egui::Context, paths: &[PathBuf]) {
        match self.session.load_files(paths) {
            Ok(()) => {
                for (i, path) in paths.iter().enumerate() {
                    self.ui_state
                        .add_log(format!("Opened: {} (file {})", path.display(), i + 1));
                }
                self.refresh_render(ctx);
            }
            Err(e) => self.ui_state.add_log(format!("Error: {e}")),
        }
    }

    fn save_first_band(&mut self, path: &Path) {
        match self.session.save_first_band(path) {
            Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Err(e) => self.ui_state.add_log(format!("Error: {e}")),
        }
    }

    /// Re-render the loaded bands with the current mode and band selection.
    pub fn refresh_render(&mut self, ctx: &egui::Context) {
        if self.session.is_empty() {
            return;
        }
        let request = RenderRequest {
            mode: self.ui_state.mode,
            custom: self.ui_state.bands,
        };
        match render(&self.session, &request, &self.render_config) {
            Ok(output) => self.update_viewport_texture(ctx, &output, request.mode),
            Err(e) => self.ui_state.add_log(format!("Error: {e}")),
        }
    }

    pub fn calculate_ndvi(&mut self, ctx: &egui::Context) {
        self.ui_state.mode = DisplayMode::Ndvi;
        self.refresh_render(ctx);
    }

    pub fn log_band_stats(&mut self) {
        match self.session.band_stats() {
            Ok(stats) => {
                for (i, st) in stats.iter().enumerate() {
                    self.ui_state.add_log(format!(
                        "Band {} mean {:.3}, min {}, max {}",
                        i + 1,
                        st.mean,
                        st.min,
                        st.max
                    ));
                }
            }
            Err(e) => self.ui_state.add_log(format!("Error: {e}")),
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context, output: &RenderOutput, mode: DisplayMode) {
        let image = match output {
            RenderOutput::Color { display, .. } => rgb_to_color_image(display),
            RenderOutput::Ndvi(gray) => gray_to_color_image(gray),
        };
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = mode.name().to_string();
    }

    pub fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        if self.settings.theme == theme {
            return;
        }
        self.settings.theme = theme;
        apply_theme(ctx, theme);
        if let Err(e) = self.settings.save() {
            warn!("Could not save settings: {e}");
            self.ui_state.add_log(format!("Error: {e}"));
        }
    }

    pub fn run_script(&mut self) {
        match spawn_script(
            self.script.source.clone(),
            DEFAULT_SCRIPT_DELAY,
            Some(Arc::clone(&self.notify)),
        ) {
            Ok(handle) => self.script.worker.start(handle),
            Err(e) => self.script.worker.lines.push(format!("Error: {e}")),
        }
    }

    pub fn start_acquisition(&mut self) {
        let form = &self.acquisition;
        let request = AcquisitionRequest {
            query: CatalogQuery::last_day(form.aoi.trim()),
            credentials: Credentials::new(form.username.trim(), form.password.as_str()),
            dest_dir: PathBuf::from("."),
        };

        let started = CopernicusCatalog::new().and_then(|catalog| {
            let catalog: Arc<dyn Catalog> = Arc::new(catalog);
            spawn_acquisition(catalog, request, Some(Arc::clone(&self.notify)))
        });
        match started {
            Ok(handle) => self.acquisition.worker.start(handle),
            Err(e) => self.acquisition.worker.lines.push(format!("Error: {e}")),
        }
    }
}

impl eframe::App for BandviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::tabs::show(ctx, self);
        panels::status::show(ctx, self);

        match self.ui_state.tab {
            Tab::Raster => {
                panels::raster::show(ctx, self);
                panels::viewport::show(ctx, self);
            }
            Tab::Script => panels::script::show(ctx, self),
            Tab::Acquisition => panels::acquisition::show(ctx, self),
        }
    }
}
