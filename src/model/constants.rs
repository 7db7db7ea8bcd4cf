//! Configuration constants and default values.
//!
//! This module contains all application constants including effect
//! lifetimes, glyph geometry, visual defaults and validation limits.

// === Effect Lifetimes ===

/// How long a click ring stays on screen, in milliseconds.
pub const RING_LIFETIME_MS: u64 = 200;

/// How long a button/scroll icon stays on screen, in milliseconds.
pub const ICON_LIFETIME_MS: u64 = 800;

// === Effect Geometry ===

/// Ring radius in pixels, centered on the event position.
pub const RING_RADIUS: f64 = 16.0;

/// Offset (applied to both axes) from the event position to the
/// top-left corner of an icon effect, in pixels.
pub const ICON_OFFSET: i32 = 10;

/// Icon glyph width in pixels.
pub const ICON_WIDTH: f64 = 64.0;

/// Icon glyph height in pixels.
pub const ICON_HEIGHT: f64 = 108.0;

// === Visual Defaults ===

/// Default ring stroke color as a hex string (translucent blue).
pub const DEFAULT_RING_COLOR: &str = "#0078FF96";

/// Default ring stroke width in pixels.
pub const DEFAULT_RING_WIDTH: f64 = 3.0;

/// Default icon opacity percentage (100 = fully opaque).
pub const DEFAULT_ICON_OPACITY_PCT: f64 = 85.0;

// === Validation Limits ===

/// Minimum ring stroke width in pixels.
pub const MIN_RING_WIDTH: f64 = 1.0;

/// Maximum ring stroke width in pixels.
pub const MAX_RING_WIDTH: f64 = 20.0;

/// Minimum icon opacity percentage.
pub const MIN_ICON_OPACITY_PCT: f64 = 0.0;

/// Maximum icon opacity percentage.
pub const MAX_ICON_OPACITY_PCT: f64 = 100.0;
