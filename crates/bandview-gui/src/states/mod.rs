mod remote;
mod ui;
mod viewport;

pub use remote::{AcquisitionState, ScriptState, WorkerLog};
pub use ui::{Tab, UIState};
pub use viewport::ViewportState;
