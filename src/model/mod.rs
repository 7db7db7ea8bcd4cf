//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! the transient effect store, the icon glyph geometry and the
//! cosmetic settings. Platform-specific persistence and rendering
//! live in `platform::windows`.

pub mod constants;
pub mod effect;
pub mod icon;
pub mod settings;

pub use constants::*;
pub use effect::{plan_effects, ClickEffect, EffectId, EffectKind, EffectStore, IconKind};
pub use icon::{icon_spec, ArrowDirection, IconSpec};
pub use settings::OverlaySettings;
