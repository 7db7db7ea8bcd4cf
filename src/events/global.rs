//! Global access to the application event bus.
//!
//! The hook procedure is an `extern "system"` callback with no way to
//! carry a publisher handle, so the bus endpoints live in statics:
//! the `Sender` in a `OnceLock` (it is `Send + Sync`), the `Receiver`
//! behind a `Mutex` that only the UI thread ever locks.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::MouseEvent;

static SENDER: OnceLock<Sender<MouseEvent>> = OnceLock::new();
static RECEIVER: OnceLock<Mutex<Receiver<MouseEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// Must be called exactly once at application startup, before the mouse
/// hook is installed.
///
/// # Panics
///
/// Panics if the event bus has already been initialized.
pub fn init_event_bus() {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .expect("Event bus already initialized (sender)");

    RECEIVER
        .set(Mutex::new(receiver))
        .expect("Event bus already initialized (receiver)");
}

/// Get a publisher handle for the global event bus.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called.
pub fn publisher() -> EventPublisher {
    let sender = SENDER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    EventPublisher::from_sender(sender.clone())
}

/// Publish an event to the global event bus.
///
/// Silently does nothing if the bus is not initialized: the hook may
/// legitimately fire in the window between install and teardown states.
pub fn publish(event: MouseEvent) {
    if let Some(sender) = SENDER.get() {
        // Ignore send errors - receiver dropped means app is shutting down
        let _ = sender.send(event);
    }
}

/// Drain all pending events from the global event bus.
///
/// Called from the UI thread's message loop.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called.
pub fn drain_events() -> Vec<MouseEvent> {
    let receiver = RECEIVER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    let receiver = receiver.lock().expect("Event bus receiver mutex poisoned");

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
