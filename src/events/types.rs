//! Mouse event definitions and raw hook translation.
//!
//! This module is pure Rust with no FFI dependencies, making the
//! hook-message translation fully testable. The Win32 message ids are
//! mirrored here as plain integers for the same reason.

/// Low-level mouse hook message identifiers (WM_*).
const WM_MOUSEMOVE: u32 = 0x0200;
const WM_LBUTTONDOWN: u32 = 0x0201;
const WM_RBUTTONDOWN: u32 = 0x0204;
const WM_MBUTTONDOWN: u32 = 0x0207;
const WM_MOUSEWHEEL: u32 = 0x020A;

/// Which physical button fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A qualifying mouse event, translated from the low-level hook.
///
/// Coordinates are virtual-screen pixels as delivered by the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    ButtonDown { button: MouseButton, x: i32, y: i32 },
    Wheel { delta: i16, x: i32, y: i32 },
}

impl MouseEvent {
    /// Translate a raw hook callback into an event.
    ///
    /// Move events and anything else that is not a button-down or wheel
    /// rotation (button-ups included) yield `None`. `mouse_data` is the
    /// `MSLLHOOKSTRUCT::mouseData` field; for wheel events its high word
    /// is the signed rotation delta.
    pub fn from_hook(msg: u32, x: i32, y: i32, mouse_data: u32) -> Option<Self> {
        match msg {
            WM_MOUSEMOVE => None,
            WM_LBUTTONDOWN => Some(MouseEvent::ButtonDown {
                button: MouseButton::Left,
                x,
                y,
            }),
            WM_RBUTTONDOWN => Some(MouseEvent::ButtonDown {
                button: MouseButton::Right,
                x,
                y,
            }),
            WM_MBUTTONDOWN => Some(MouseEvent::ButtonDown {
                button: MouseButton::Middle,
                x,
                y,
            }),
            WM_MOUSEWHEEL => Some(MouseEvent::Wheel {
                delta: wheel_delta(mouse_data),
                x,
                y,
            }),
            _ => None,
        }
    }

    /// Event position in virtual-screen pixels.
    pub fn position(&self) -> (i32, i32) {
        match *self {
            MouseEvent::ButtonDown { x, y, .. } => (x, y),
            MouseEvent::Wheel { x, y, .. } => (x, y),
        }
    }
}

/// Extract the signed wheel rotation from `MSLLHOOKSTRUCT::mouseData`.
pub fn wheel_delta(mouse_data: u32) -> i16 {
    (mouse_data >> 16) as i16
}
