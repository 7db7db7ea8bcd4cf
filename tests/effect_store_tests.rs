//! Tests for the effect store and event-to-effect planning.
//!
//! Timing properties use explicit `Instant` arithmetic rather than
//! sleeps, so they are exact and fast.

use std::time::{Duration, Instant};

use pulso::model::constants::*;
use pulso::model::{plan_effects, ClickEffect, EffectKind, EffectStore, IconKind};
use pulso::{MouseButton, MouseEvent};

fn left_down(x: i32, y: i32) -> MouseEvent {
    MouseEvent::ButtonDown {
        button: MouseButton::Left,
        x,
        y,
    }
}

fn wheel(delta: i16, x: i32, y: i32) -> MouseEvent {
    MouseEvent::Wheel { delta, x, y }
}

fn add_all(store: &EffectStore, effects: Vec<ClickEffect>) {
    for effect in effects {
        store.add(effect);
    }
}

// === Planning ===

#[test]
fn left_click_plans_ring_and_left_icon() {
    let now = Instant::now();
    let effects = plan_effects(&left_down(100, 100), now);

    assert_eq!(effects.len(), 2);

    let ring = effects
        .iter()
        .find(|e| e.kind == EffectKind::Ring)
        .expect("a ring effect");
    assert_eq!((ring.x, ring.y), (100, 100));
    assert_eq!(RING_RADIUS, 16.0);

    let icon = effects
        .iter()
        .find(|e| matches!(e.kind, EffectKind::Icon(_)))
        .expect("an icon effect");
    assert_eq!(icon.kind, EffectKind::Icon(IconKind::LeftButton));
    assert_eq!((icon.x, icon.y), (110, 110));
}

#[test]
fn wheel_up_plans_ring_and_fresh_scroll_icon() {
    let now = Instant::now();
    let effects = plan_effects(&wheel(120, 50, 50), now);

    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0].kind, EffectKind::Ring);
    assert_eq!((effects[0].x, effects[0].y), (50, 50));

    let EffectKind::Icon(kind) = effects[1].kind else {
        panic!("expected an icon effect");
    };
    assert_eq!(kind, IconKind::ScrollUp);
    // Scroll icons are per-event, not one of the three button glyphs
    assert!(!kind.is_static());
}

#[test]
fn wheel_with_zero_delta_plans_ring_only() {
    let effects = plan_effects(&wheel(0, 5, 5), Instant::now());
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].kind, EffectKind::Ring);
}

// === Lifetimes ===

#[test]
fn scenario_left_click_lifecycle() {
    let store = EffectStore::new();
    let t0 = Instant::now();

    add_all(&store, plan_effects(&left_down(100, 100), t0));
    assert_eq!(store.len(), 2);

    // Just before the ring deadline nothing expires
    store.purge_expired(t0 + Duration::from_millis(RING_LIFETIME_MS - 1));
    assert_eq!(store.len(), 2);

    // At the ring deadline only the icon remains
    store.purge_expired(t0 + Duration::from_millis(RING_LIFETIME_MS));
    assert_eq!(store.len(), 1);
    assert!(matches!(store.snapshot()[0].kind, EffectKind::Icon(_)));

    // Icon holds until its own deadline
    store.purge_expired(t0 + Duration::from_millis(ICON_LIFETIME_MS - 1));
    assert_eq!(store.len(), 1);

    store.purge_expired(t0 + Duration::from_millis(ICON_LIFETIME_MS));
    assert!(store.is_empty());
}

#[test]
fn ring_count_tracks_unexpired_events() {
    let store = EffectStore::new();
    let t0 = Instant::now();

    // Three rapid clicks, 50 ms apart
    for i in 0..3 {
        add_all(
            &store,
            plan_effects(&left_down(i, i), t0 + Duration::from_millis(50 * i as u64)),
        );
    }
    assert_eq!(store.len(), 6);

    // At t0+220ms only the first ring (deadline t0+200) has expired
    store.purge_expired(t0 + Duration::from_millis(220));
    let rings = store
        .snapshot()
        .iter()
        .filter(|e| e.kind == EffectKind::Ring)
        .count();
    assert_eq!(rings, 2);
    assert_eq!(store.len(), 5);

    // All rings gone by t0+300, icons still alive
    store.purge_expired(t0 + Duration::from_millis(301));
    assert_eq!(store.len(), 3);

    // Last icon deadline is t0+100+800
    store.purge_expired(t0 + Duration::from_millis(900));
    assert!(store.is_empty());
}

// === Store semantics ===

#[test]
fn remove_is_idempotent() {
    let store = EffectStore::new();
    let effect = ClickEffect::ring(0, 0, Instant::now());
    let id = effect.id;
    store.add(effect);

    assert!(store.remove(id));
    assert!(!store.remove(id));
    assert!(!store.remove(id));
    assert!(store.is_empty());
}

#[test]
fn purge_on_empty_store_is_noop() {
    let store = EffectStore::new();
    assert_eq!(store.purge_expired(Instant::now()), 0);
    assert!(store.is_empty());
}

#[test]
fn overlapping_effects_are_not_deduplicated() {
    let store = EffectStore::new();
    let now = Instant::now();

    // Same position, same instant: both kept
    add_all(&store, plan_effects(&left_down(10, 10), now));
    add_all(&store, plan_effects(&left_down(10, 10), now));
    assert_eq!(store.len(), 4);
}

#[test]
fn snapshot_is_decoupled_from_the_store() {
    let store = EffectStore::new();
    let now = Instant::now();
    store.add(ClickEffect::ring(1, 2, now));

    let snapshot = store.snapshot();
    store.clear();

    assert_eq!(snapshot.len(), 1);
    assert!(store.is_empty());
}
