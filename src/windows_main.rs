//! Windows-specific entry point and application logic.
//!
//! Owns the overlay window, the repaint timer and the message loop; the
//! low-level mouse hook feeds events in through the event bus.

use std::time::Instant;

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Direct2D::{D2D1CreateFactory, D2D1_FACTORY_TYPE_SINGLE_THREADED};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS, VK_ESCAPE,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, GetSystemMetrics, KillTimer,
    LoadCursorW, PostQuitMessage, RegisterClassW, SetTimer, ShowWindow, TranslateMessage,
    CS_HREDRAW, CS_VREDRAW, IDC_ARROW, MSG, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN,
    SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN, SW_SHOW, WM_CREATE, WM_DESTROY, WM_HOTKEY, WM_TIMER,
    WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
    WS_EX_TRANSPARENT, WS_POPUP,
};

use pulso::events;
use pulso::model::plan_effects;
use pulso::platform::windows::app::{reload_settings_from_config, EFFECTS, STATE};
use pulso::platform::windows::input::{
    clear_event_target, install_mouse_hook, set_event_target, uninstall_mouse_hook, HOTKEY_QUIT,
    TIMER_INTERVAL_MS, TIMER_REPAINT, WM_APP_MOUSE_EVENT,
};
use pulso::platform::windows::storage::config;
use pulso::platform::windows::ui::overlay::{render_overlay, D2D_FACTORY};

/// Main entry point for Windows.
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run_app() {
        error!("pulso failed: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> windows::core::Result<()> {
    unsafe {
        // Hook coordinates are physical pixels; match them
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);

        // Initialize COM
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;

        // Create Direct2D factory
        let factory = D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;
        D2D_FACTORY.with(|f| *f.borrow_mut() = Some(factory));

        let instance = GetModuleHandleW(None)?;
        let class_name = w!("PulsoOverlay");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        // Get virtual screen dimensions (all monitors)
        let vx = GetSystemMetrics(SM_XVIRTUALSCREEN);
        let vy = GetSystemMetrics(SM_YVIRTUALSCREEN);
        let vw = GetSystemMetrics(SM_CXVIRTUALSCREEN);
        let vh = GetSystemMetrics(SM_CYVIRTUALSCREEN);

        // Create layered, click-through, topmost window
        let ex_style =
            WS_EX_LAYERED | WS_EX_TRANSPARENT | WS_EX_TOPMOST | WS_EX_NOACTIVATE | WS_EX_TOOLWINDOW;

        let hwnd = CreateWindowExW(
            ex_style,
            class_name,
            w!("Pulso Overlay"),
            WS_POPUP,
            vx,
            vy,
            vw,
            vh,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        // Store state
        STATE.with(|s| {
            let mut state = s.borrow_mut();
            state.hwnd = hwnd;
            state.width = vw;
            state.height = vh;
            state.offset_x = vx;
            state.offset_y = vy;
        });

        // Load settings from config file (written with defaults on first run)
        config::ensure_config_file();
        reload_settings_from_config();

        // Event bus carries hook events onto this thread
        events::init_event_bus();

        // Install the low-level mouse hook; without it there is nothing
        // to visualize, so failure is fatal
        install_mouse_hook()?;
        set_event_target(hwnd);

        // Escape quits; the click-through window never has keyboard
        // focus, so this has to be a global hotkey
        if RegisterHotKey(Some(hwnd), HOTKEY_QUIT, HOT_KEY_MODIFIERS(0), VK_ESCAPE.0 as u32)
            .is_err()
        {
            warn!("could not register Escape hotkey; quit via task manager");
        }

        // Start the repaint timer
        SetTimer(Some(hwnd), TIMER_REPAINT, TIMER_INTERVAL_MS, None);

        // Initial draw and show
        render_overlay();
        let _ = ShowWindow(hwnd, SW_SHOW);
        info!(
            width = vw,
            height = vh,
            "overlay running, press Esc to quit"
        );

        // Message loop
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        // Cleanup
        let _ = KillTimer(Some(hwnd), TIMER_REPAINT);
        clear_event_target();
        uninstall_mouse_hook();
        let _ = UnregisterHotKey(Some(hwnd), HOTKEY_QUIT);

        config::flush_config();
        EFFECTS.clear();
        D2D_FACTORY.with(|f| *f.borrow_mut() = None);

        CoUninitialize();
        info!("shutdown complete");

        Ok(())
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_CREATE => LRESULT(0),

            WM_TIMER => {
                if wparam.0 == TIMER_REPAINT {
                    EFFECTS.purge_expired(Instant::now());
                    render_overlay();
                }
                LRESULT(0)
            }

            // The hook published one or more events and woke us up
            msg if msg == WM_APP_MOUSE_EVENT => {
                let now = Instant::now();
                let mut added = 0usize;
                for event in events::drain_events() {
                    for effect in plan_effects(&event, now) {
                        EFFECTS.add(effect);
                        added += 1;
                    }
                }
                if added > 0 {
                    debug!(added, total = EFFECTS.len(), "effects added");
                    render_overlay();
                }
                LRESULT(0)
            }

            WM_HOTKEY => {
                if wparam.0 as i32 == HOTKEY_QUIT {
                    info!("Escape pressed, quitting");
                    PostQuitMessage(0);
                }
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
