//! Event plumbing from the native hook boundary into the UI thread.
//!
//! The low-level mouse hook must return quickly and never touch drawing
//! state, so it only translates the raw callback into a [`MouseEvent`]
//! and publishes it here. The UI thread drains the bus from its own
//! message loop and does all store mutation and repainting.
//!
//! - [`types`]: `MouseEvent` and the raw-hook translation
//! - [`bus`]: `EventBus` and `EventPublisher` over an mpsc channel
//! - [`global`]: static access for the hook procedure

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::{MouseButton, MouseEvent};
