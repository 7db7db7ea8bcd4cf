//! Input handling for Windows (mouse hook, quit hotkey).

pub mod hook;

pub use hook::{
    clear_event_target, install_mouse_hook, mouse_hook_proc, set_event_target,
    uninstall_mouse_hook, HOTKEY_QUIT, TIMER_INTERVAL_MS, TIMER_REPAINT, WM_APP_MOUSE_EVENT,
};
