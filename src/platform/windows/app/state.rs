//! Windows runtime state management.
//!
//! Contains the application state struct, thread-local storage for the
//! UI thread, and the process-wide effect store.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;

use crate::model::{EffectStore, OverlaySettings};

/// Effects currently on screen.
///
/// Static because both the window procedure and (indirectly) the hook
/// pipeline reach it; the store's internal mutex makes that safe even if
/// the runtime ever schedules them concurrently.
pub static EFFECTS: EffectStore = EffectStore::new();

/// Windows-specific runtime state.
///
/// Window geometry is the full virtual screen; `offset_x`/`offset_y`
/// translate hook (virtual-screen) coordinates into window-local pixels.
/// The settings fields mirror `model::OverlaySettings` but use `f32`
/// as required by Direct2D.
pub struct WindowsRuntimeState {
    // Window-specific fields (not persisted)
    pub hwnd: HWND,
    pub width: i32,
    pub height: i32,
    pub offset_x: i32,
    pub offset_y: i32,

    // Settings fields (persisted via config.json)
    pub ring_r: f32,
    pub ring_g: f32,
    pub ring_b: f32,
    pub ring_a: f32,
    pub ring_width: f32,
    pub icon_alpha: f32,
}

impl Default for WindowsRuntimeState {
    fn default() -> Self {
        let settings = OverlaySettings::default();
        Self {
            hwnd: HWND::default(),
            width: 0,
            height: 0,
            offset_x: 0,
            offset_y: 0,
            ring_r: settings.ring_r as f32,
            ring_g: settings.ring_g as f32,
            ring_b: settings.ring_b as f32,
            ring_a: settings.ring_a as f32,
            ring_width: settings.ring_width as f32,
            icon_alpha: settings.icon_alpha() as f32,
        }
    }
}

thread_local! {
    /// Global application state for the overlay's UI thread.
    pub static STATE: RefCell<WindowsRuntimeState> = RefCell::new(WindowsRuntimeState::default());
}

/// Reload settings from the JSON config file into the thread-local state.
pub fn reload_settings_from_config() {
    use crate::platform::windows::storage::config;

    let loaded = config::load_settings();
    STATE.with(|s| {
        let mut state = s.borrow_mut();
        state.ring_r = loaded.ring_r as f32;
        state.ring_g = loaded.ring_g as f32;
        state.ring_b = loaded.ring_b as f32;
        state.ring_a = loaded.ring_a as f32;
        state.ring_width = loaded.ring_width as f32;
        state.icon_alpha = loaded.icon_alpha() as f32;
    });
}
