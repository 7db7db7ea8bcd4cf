//! Application state management for Windows.

pub mod state;

pub use state::{reload_settings_from_config, WindowsRuntimeState, EFFECTS, STATE};
