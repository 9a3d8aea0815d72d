use bandview_core::remote::catalog::DEFAULT_AOI;
use bandview_core::remote::Credentials;
use bandview_core::worker::{WorkerEvent, WorkerHandle};

/// A background worker and the status lines it has produced.
#[derive(Default)]
pub struct WorkerLog {
    pub handle: Option<WorkerHandle>,
    pub lines: Vec<String>,
}

impl WorkerLog {
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Move pending status lines into the log; forget the worker once it finished.
    pub fn poll(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        for event in handle.try_events() {
            if let WorkerEvent::Status(line) = event {
                self.lines.push(line);
            }
        }
        if handle.is_finished() {
            self.handle = None;
        }
    }

    pub fn start(&mut self, handle: WorkerHandle) {
        self.lines.clear();
        self.handle = Some(handle);
    }
}

/// Script tab state.
#[derive(Default)]
pub struct ScriptState {
    pub source: String,
    pub worker: WorkerLog,
}

/// Acquisition tab state.
pub struct AcquisitionState {
    pub username: String,
    pub password: String,
    pub aoi: String,
    pub worker: WorkerLog,
}

impl Default for AcquisitionState {
    fn default() -> Self {
        let env = Credentials::from_env();
        Self {
            username: env.username,
            password: env.password,
            aoi: DEFAULT_AOI.to_string(),
            worker: WorkerLog::default(),
        }
    }
}
