use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bandview_core::remote::{run_script, spawn_script, RemoteError};
use bandview_core::worker::{spawn_worker, Notify, WorkerEvent};

fn status(s: &str) -> WorkerEvent {
    WorkerEvent::Status(s.to_string())
}

#[test]
fn test_events_arrive_in_order_then_finished() {
    let handle = spawn_worker("ordered", None, |sink| {
        for i in 0..5 {
            sink.status(format!("step {i}"));
        }
        Ok::<(), String>(())
    })
    .unwrap();
    assert_eq!(handle.name(), "ordered");

    let events = handle.wait();
    let expected: Vec<_> = (0..5)
        .map(|i| status(&format!("step {i}")))
        .chain(std::iter::once(WorkerEvent::Finished))
        .collect();
    assert_eq!(events, expected);
}

#[test]
fn test_task_error_becomes_final_status_line() {
    let handle = spawn_worker("failing", None, |sink| {
        sink.status("working");
        Err("disk full")
    })
    .unwrap();

    let events = handle.wait();
    assert_eq!(
        events,
        vec![status("working"), status("Error: disk full"), WorkerEvent::Finished]
    );
}

#[test]
fn test_panicking_task_still_finishes() {
    let handle = spawn_worker("panicking", None, |sink| -> Result<(), String> {
        sink.status("about to fail");
        panic!("boom");
    })
    .unwrap();

    let events = handle.wait();
    assert_eq!(events, vec![status("about to fail"), WorkerEvent::Finished]);
}

#[test]
fn test_recv_after_finished_returns_none() {
    let mut handle = spawn_worker("single", None, |_| Ok::<(), String>(())).unwrap();
    assert_eq!(handle.recv(), Some(WorkerEvent::Finished));
    assert!(handle.is_finished());
    assert_eq!(handle.recv(), None);
}

#[test]
fn test_notify_called_for_every_event() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let notify: Notify = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let handle = spawn_worker("notify", Some(notify), |sink| {
        sink.status("a");
        sink.status("b");
        Ok::<(), String>(())
    })
    .unwrap();
    handle.wait();
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_script_worker_messages() {
    let handle = spawn_script("print('hi')".to_string(), Duration::from_millis(10), None).unwrap();
    let events = handle.wait();
    assert_eq!(
        events,
        vec![
            status("Running script in Google Earth Engine..."),
            status("Script execution completed successfully."),
            WorkerEvent::Finished,
        ]
    );
}

#[test]
fn test_blank_script_is_rejected_before_spawning() {
    let err = spawn_script("  \n\t".to_string(), Duration::ZERO, None).unwrap_err();
    assert!(matches!(err, RemoteError::EmptyScript));
}

#[test]
fn test_run_script_inline() {
    let handle = spawn_worker("inline", None, |sink| run_script("x = 1", Duration::ZERO, sink)).unwrap();
    let events = handle.wait();
    assert_eq!(events.len(), 3);
    assert_eq!(events[2], WorkerEvent::Finished);
}
