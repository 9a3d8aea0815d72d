use std::time::Duration;

use super::error::{RemoteError, Result};
use crate::worker::{spawn_worker, Notify, StatusSink, WorkerHandle};

/// Time the simulated remote execution takes.
pub const DEFAULT_SCRIPT_DELAY: Duration = Duration::from_secs(2);

/// Simulated remote script execution: announce, block for `delay`, report.
pub fn run_script(script: &str, delay: Duration, sink: &StatusSink) -> Result<()> {
    if script.trim().is_empty() {
        return Err(RemoteError::EmptyScript);
    }
    sink.status("Running script in Google Earth Engine...");
    std::thread::sleep(delay);
    sink.status("Script execution completed successfully.");
    Ok(())
}

/// Reject blank scripts up front, then run [`run_script`] on a worker thread.
pub fn spawn_script(script: String, delay: Duration, notify: Option<Notify>) -> Result<WorkerHandle> {
    if script.trim().is_empty() {
        return Err(RemoteError::EmptyScript);
    }
    let handle = spawn_worker("script", notify, move |sink| run_script(&script, delay, sink))?;
    Ok(handle)
}
