//! One-shot background tasks that report free-text status lines.
//!
//! A worker runs a single blocking task on its own thread. Status lines reach
//! the consumer in emission order over an mpsc channel, followed by exactly
//! one [`WorkerEvent::Finished`]. There is no cancellation.

use std::fmt::Display;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{debug, warn};

/// Event delivered from a worker to the interactive thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkerEvent {
    Status(String),
    /// Always the last event of a worker.
    Finished,
}

/// Called after every event so a UI can wake up and repaint.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Sending half handed to the task.
pub struct StatusSink {
    tx: mpsc::Sender<WorkerEvent>,
    notify: Option<Notify>,
}

impl StatusSink {
    /// Emit one status line.
    pub fn status(&self, message: impl Into<String>) {
        self.send(WorkerEvent::Status(message.into()));
    }

    fn send(&self, event: WorkerEvent) {
        // The receiver may already be gone; the task still runs to completion.
        let _ = self.tx.send(event);
        if let Some(ref notify) = self.notify {
            notify();
        }
    }
}

/// Sends `Finished` when dropped, including during a panic unwind.
struct FinishGuard(StatusSink);

impl Drop for FinishGuard {
    fn drop(&mut self) {
        self.0.send(WorkerEvent::Finished);
    }
}

/// Receiving half, owned by the interactive thread.
#[derive(Debug)]
pub struct WorkerHandle {
    name: String,
    rx: mpsc::Receiver<WorkerEvent>,
    finished: bool,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True once `Finished` has been received.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drain every event available right now without blocking.
    pub fn try_events(&mut self) -> Vec<WorkerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            self.observe(&event);
            events.push(event);
        }
        events
    }

    /// Block for the next event. `None` after `Finished`.
    pub fn recv(&mut self) -> Option<WorkerEvent> {
        if self.finished {
            return None;
        }
        let event = self.rx.recv().ok()?;
        self.observe(&event);
        Some(event)
    }

    /// Block until the worker finishes, returning every remaining event.
    pub fn wait(mut self) -> Vec<WorkerEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.recv() {
            events.push(event);
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!(worker = %self.name, "Worker thread panicked");
            }
        }
        events
    }

    fn observe(&mut self, event: &WorkerEvent) {
        if *event == WorkerEvent::Finished {
            self.finished = true;
        }
    }
}

/// Run `task` on a named thread.
///
/// A task error becomes one final `"Error: ..."` status line; it never
/// propagates further.
pub fn spawn_worker<F, E>(
    name: &str,
    notify: Option<Notify>,
    task: F,
) -> std::io::Result<WorkerHandle>
where
    F: FnOnce(&StatusSink) -> Result<(), E> + Send + 'static,
    E: Display,
{
    let (tx, rx) = mpsc::channel();
    let sink = StatusSink { tx, notify };
    let worker_name = name.to_string();

    let thread = std::thread::Builder::new()
        .name(format!("bandview-{name}"))
        .spawn(move || {
            let guard = FinishGuard(sink);
            debug!(worker = %worker_name, "Worker started");
            if let Err(e) = task(&guard.0) {
                warn!(worker = %worker_name, "Worker failed: {e}");
                guard.0.status(format!("Error: {e}"));
            }
        })?;

    Ok(WorkerHandle {
        name: name.to_string(),
        rx,
        finished: false,
        thread: Some(thread),
    })
}
