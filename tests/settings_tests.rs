//! Tests for the settings model (OverlaySettings).
#![allow(clippy::field_reassign_with_default)]

use pulso::model::constants::*;
use pulso::model::settings::DEFAULT_RING_COLOR_RGBA;
use pulso::model::OverlaySettings;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Default Values Tests ===

#[test]
fn settings_default_ring_color() {
    let settings = OverlaySettings::default();
    assert!(approx_eq(settings.ring_r, DEFAULT_RING_COLOR_RGBA.0));
    assert!(approx_eq(settings.ring_g, DEFAULT_RING_COLOR_RGBA.1));
    assert!(approx_eq(settings.ring_b, DEFAULT_RING_COLOR_RGBA.2));
    assert!(approx_eq(settings.ring_a, DEFAULT_RING_COLOR_RGBA.3));
}

#[test]
fn settings_default_ring_width() {
    let settings = OverlaySettings::default();
    assert!(approx_eq(settings.ring_width, DEFAULT_RING_WIDTH));
}

#[test]
fn settings_default_icon_opacity() {
    let settings = OverlaySettings::default();
    assert!(approx_eq(settings.icon_opacity_pct, DEFAULT_ICON_OPACITY_PCT));
}

#[test]
fn settings_defaults_are_already_valid() {
    let mut settings = OverlaySettings::default();
    let before = settings.clone();
    settings.validate();
    assert_eq!(settings, before);
}

// === Validation Tests ===

#[test]
fn validate_clamps_ring_width_below_minimum() {
    let mut settings = OverlaySettings::default();
    settings.ring_width = 0.1;
    settings.validate();
    assert!(approx_eq(settings.ring_width, MIN_RING_WIDTH));
}

#[test]
fn validate_clamps_ring_width_above_maximum() {
    let mut settings = OverlaySettings::default();
    settings.ring_width = 100.0;
    settings.validate();
    assert!(approx_eq(settings.ring_width, MAX_RING_WIDTH));
}

#[test]
fn validate_clamps_opacity_into_percent_range() {
    let mut settings = OverlaySettings::default();
    settings.icon_opacity_pct = -10.0;
    settings.validate();
    assert!(approx_eq(settings.icon_opacity_pct, MIN_ICON_OPACITY_PCT));

    settings.icon_opacity_pct = 150.0;
    settings.validate();
    assert!(approx_eq(settings.icon_opacity_pct, MAX_ICON_OPACITY_PCT));
}

#[test]
fn validate_clamps_color_components() {
    let mut settings = OverlaySettings::default();
    settings.ring_r = -0.5;
    settings.ring_g = 1.5;
    settings.validate();
    assert!(approx_eq(settings.ring_r, 0.0));
    assert!(approx_eq(settings.ring_g, 1.0));
}

// === Derived Values ===

#[test]
fn icon_alpha_follows_opacity_percent() {
    let mut settings = OverlaySettings::default();
    settings.icon_opacity_pct = 85.0;
    assert!(approx_eq(settings.icon_alpha(), 0.85));

    settings.icon_opacity_pct = 0.0;
    assert!(approx_eq(settings.icon_alpha(), 0.0));
}

#[test]
fn ring_color_tuple_matches_fields() {
    let settings = OverlaySettings::default();
    let (r, g, b, a) = settings.ring_color();
    assert!(approx_eq(r, settings.ring_r));
    assert!(approx_eq(g, settings.ring_g));
    assert!(approx_eq(b, settings.ring_b));
    assert!(approx_eq(a, settings.ring_a));
}
