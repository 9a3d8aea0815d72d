pub mod composite;
pub mod config;
pub mod fetch;
pub mod info;
pub mod ndvi;
pub mod save;
pub mod script;
pub mod select;
pub mod theme;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use bandview_core::render::RenderConfig;
use bandview_core::session::Session;
use bandview_core::worker::{WorkerEvent, WorkerHandle};
use indicatif::{ProgressBar, ProgressStyle};

/// Render config from `path`, or the defaults.
pub fn load_render_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid render config")
}

/// Open `files` as one session, file n filling composite channel n.
pub fn open_session(files: &[PathBuf]) -> Result<Session> {
    let mut session = Session::new();
    session
        .load_files(files)
        .context("Failed to open raster files")?;
    Ok(session)
}

/// Print every status line of `handle` under a spinner until it finishes.
///
/// Returns the lines that were printed.
pub fn follow_worker(mut handle: WorkerHandle) -> Result<Vec<String>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(handle.name().to_string());

    let mut lines = Vec::new();
    while let Some(event) = handle.recv() {
        match event {
            WorkerEvent::Status(line) => {
                pb.println(&line);
                pb.set_message(line.clone());
                lines.push(line);
            }
            WorkerEvent::Finished => break,
        }
    }
    pb.finish_and_clear();
    handle.wait();
    Ok(lines)
}
