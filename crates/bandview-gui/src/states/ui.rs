use bandview_core::consts::ZOOM_SLIDER_UNITY;
use bandview_core::render::{BandTriple, DisplayMode};

/// Top-level tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Raster,
    Script,
    Acquisition,
}

impl Tab {
    pub const ALL: &[Tab] = &[Self::Raster, Self::Script, Self::Acquisition];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Raster => "Raster Display",
            Self::Script => "Script",
            Self::Acquisition => "Acquisition",
        }
    }
}

/// Overall UI state.
pub struct UIState {
    pub tab: Tab,
    pub mode: DisplayMode,
    /// Custom-mode band numbers (1-based).
    pub bands: BandTriple,
    /// Zoom slider position, 1..=100.
    pub zoom_slider: u32,
    /// Log messages.
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            mode: DisplayMode::default(),
            bands: BandTriple::default(),
            zoom_slider: ZOOM_SLIDER_UNITY,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
