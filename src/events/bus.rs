//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a one-directional channel from the hook boundary to
//! the UI thread: any thread can publish via `EventPublisher::publish()`,
//! and the main thread drains pending events via `EventBus::drain()`.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::MouseEvent;

/// Multi-producer, single-consumer event bus.
///
/// The hook procedure publishes, the UI message loop consumes. Publishers
/// are cheap to clone and thread-safe.
pub struct EventBus {
    sender: Sender<MouseEvent>,
    receiver: Receiver<MouseEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and handed to the hook.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<MouseEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // All senders dropped - only happens during shutdown
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    pub fn drain(&self) -> Vec<MouseEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<MouseEvent>,
}

impl EventPublisher {
    /// Create a publisher from an existing sender.
    pub fn from_sender(sender: Sender<MouseEvent>) -> Self {
        Self { sender }
    }

    /// Publish an event to the bus.
    ///
    /// Non-blocking and thread-safe. If the receiver has been dropped
    /// (app shutting down), the send silently fails - this is
    /// intentional.
    pub fn publish(&self, event: MouseEvent) {
        let _ = self.sender.send(event);
    }
}
