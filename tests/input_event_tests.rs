//! Tests for hook-message translation and icon selection.
//!
//! Message ids are written as the raw WM_* values the low-level hook
//! delivers, the same way the translation layer mirrors them.

use std::time::Instant;

use pulso::events::types::wheel_delta;
use pulso::model::{plan_effects, EffectKind, IconKind};
use pulso::{MouseButton, MouseEvent};

const WM_MOUSEMOVE: u32 = 0x0200;
const WM_LBUTTONDOWN: u32 = 0x0201;
const WM_LBUTTONUP: u32 = 0x0202;
const WM_RBUTTONDOWN: u32 = 0x0204;
const WM_RBUTTONUP: u32 = 0x0205;
const WM_MBUTTONDOWN: u32 = 0x0207;
const WM_MBUTTONUP: u32 = 0x0208;
const WM_MOUSEWHEEL: u32 = 0x020A;

fn wheel_data(delta: i16) -> u32 {
    ((delta as u16) as u32) << 16
}

// === Translation ===

#[test]
fn button_downs_translate_to_their_button() {
    let cases = [
        (WM_LBUTTONDOWN, MouseButton::Left),
        (WM_RBUTTONDOWN, MouseButton::Right),
        (WM_MBUTTONDOWN, MouseButton::Middle),
    ];
    for (msg, button) in cases {
        assert_eq!(
            MouseEvent::from_hook(msg, 3, 4, 0),
            Some(MouseEvent::ButtonDown { button, x: 3, y: 4 })
        );
    }
}

#[test]
fn move_events_never_translate() {
    assert_eq!(MouseEvent::from_hook(WM_MOUSEMOVE, 0, 0, 0), None);
    assert_eq!(MouseEvent::from_hook(WM_MOUSEMOVE, 999, -5, wheel_data(120)), None);
}

#[test]
fn button_ups_never_translate() {
    for msg in [WM_LBUTTONUP, WM_RBUTTONUP, WM_MBUTTONUP] {
        assert_eq!(MouseEvent::from_hook(msg, 1, 1, 0), None);
    }
}

#[test]
fn unknown_messages_never_translate() {
    assert_eq!(MouseEvent::from_hook(0x0000, 1, 1, 0), None);
    assert_eq!(MouseEvent::from_hook(0x020B, 1, 1, 0), None); // WM_XBUTTONDOWN
}

#[test]
fn wheel_translates_with_signed_delta() {
    assert_eq!(
        MouseEvent::from_hook(WM_MOUSEWHEEL, 7, 8, wheel_data(120)),
        Some(MouseEvent::Wheel {
            delta: 120,
            x: 7,
            y: 8
        })
    );
    assert_eq!(
        MouseEvent::from_hook(WM_MOUSEWHEEL, 7, 8, wheel_data(-120)),
        Some(MouseEvent::Wheel {
            delta: -120,
            x: 7,
            y: 8
        })
    );
}

#[test]
fn wheel_delta_extracts_high_word_as_signed() {
    assert_eq!(wheel_delta(wheel_data(120)), 120);
    assert_eq!(wheel_delta(wheel_data(-120)), -120);
    assert_eq!(wheel_delta(wheel_data(-360)), -360);
    // Low word must not leak into the delta
    assert_eq!(wheel_delta(wheel_data(120) | 0xFFFF), 120);
}

// === Icon selection (pure function of event type) ===

fn planned_icon(event: MouseEvent) -> Option<IconKind> {
    plan_effects(&event, Instant::now())
        .iter()
        .find_map(|e| match e.kind {
            EffectKind::Icon(kind) => Some(kind),
            _ => None,
        })
}

#[test]
fn icon_selection_is_a_pure_function_of_event_type() {
    let down = |button| MouseEvent::ButtonDown { button, x: 0, y: 0 };
    assert_eq!(planned_icon(down(MouseButton::Left)), Some(IconKind::LeftButton));
    assert_eq!(planned_icon(down(MouseButton::Right)), Some(IconKind::RightButton));
    assert_eq!(planned_icon(down(MouseButton::Middle)), Some(IconKind::WheelButton));

    let roll = |delta| MouseEvent::Wheel { delta, x: 0, y: 0 };
    assert_eq!(planned_icon(roll(120)), Some(IconKind::ScrollUp));
    assert_eq!(planned_icon(roll(-120)), Some(IconKind::ScrollDown));
}

#[test]
fn button_glyphs_are_static_scroll_glyphs_are_not() {
    assert!(IconKind::LeftButton.is_static());
    assert!(IconKind::RightButton.is_static());
    assert!(IconKind::WheelButton.is_static());
    assert!(!IconKind::ScrollUp.is_static());
    assert!(!IconKind::ScrollDown.is_static());
}
