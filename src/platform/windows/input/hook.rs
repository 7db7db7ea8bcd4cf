//! Low-level mouse hook for Windows.
//!
//! The hook procedure runs inside the OS input pipeline and must return
//! promptly, so it only translates the raw callback into a `MouseEvent`,
//! publishes it on the event bus and posts a wakeup message to the
//! overlay window. All store mutation and drawing happens on the UI
//! thread when that message is handled.

use std::sync::atomic::{AtomicIsize, Ordering};

use tracing::{debug, info};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, PostMessageW, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, MSLLHOOKSTRUCT,
    WH_MOUSE_LL, WM_APP, WM_MOUSEMOVE,
};

use crate::events::{publish, MouseEvent};

// Hotkey IDs
pub const HOTKEY_QUIT: i32 = 1;

// Timer constants
pub const TIMER_REPAINT: usize = 1;
pub const TIMER_INTERVAL_MS: u32 = 50; // ~20 FPS

/// Posted to the overlay window when the hook has published an event.
pub const WM_APP_MOUSE_EVENT: u32 = WM_APP + 1;

/// Global mouse hook handle (must be static for the hook callback).
pub static MOUSE_HOOK: AtomicIsize = AtomicIsize::new(0);

/// Window the hook wakes up; zero while no overlay window exists.
static EVENT_TARGET: AtomicIsize = AtomicIsize::new(0);

/// Install the process-wide low-level mouse hook.
///
/// Registration failure is fatal for the app: without the hook there is
/// nothing to visualize.
pub fn install_mouse_hook() -> windows::core::Result<()> {
    let hook = unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0)? };
    MOUSE_HOOK.store(hook.0 as isize, Ordering::SeqCst);
    info!("mouse hook installed");
    Ok(())
}

/// Uninstall the mouse hook. Safe to call when no hook is installed.
pub fn uninstall_mouse_hook() {
    let hook = MOUSE_HOOK.swap(0, Ordering::SeqCst);
    if hook != 0 {
        unsafe {
            let _ = UnhookWindowsHookEx(HHOOK(hook as *mut _));
        }
        debug!("mouse hook removed");
    }
}

/// Point hook wakeups at the overlay window.
pub fn set_event_target(hwnd: HWND) {
    EVENT_TARGET.store(hwnd.0 as isize, Ordering::SeqCst);
}

/// Drop the wakeup target; events observed after this are discarded.
pub fn clear_event_target() {
    EVENT_TARGET.store(0, Ordering::SeqCst);
}

/// Low-level mouse hook procedure.
///
/// Move events are filtered before anything else; every event is passed
/// down the hook chain regardless of what happens here.
pub extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        let msg = wparam.0 as u32;
        if ncode >= 0 && msg != WM_MOUSEMOVE {
            let info = &*(lparam.0 as *const MSLLHOOKSTRUCT);
            if let Some(event) = MouseEvent::from_hook(msg, info.pt.x, info.pt.y, info.mouseData) {
                publish(event);

                let target = EVENT_TARGET.load(Ordering::SeqCst);
                if target != 0 {
                    let _ = PostMessageW(
                        Some(HWND(target as *mut _)),
                        WM_APP_MOUSE_EVENT,
                        WPARAM(0),
                        LPARAM(0),
                    );
                }
            }
        }

        let hook = MOUSE_HOOK.load(Ordering::SeqCst);
        CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam)
    }
}
