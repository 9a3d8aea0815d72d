use std::path::PathBuf;

/// Results of native file dialogs, which run off the UI thread.
pub enum DialogResult {
    /// Files picked in "Open...", in channel order.
    Open { paths: Vec<PathBuf> },
    /// Target picked in "Save...".
    Save { path: PathBuf },
}
