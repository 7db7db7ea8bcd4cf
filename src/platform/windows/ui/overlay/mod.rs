//! Overlay rendering module.

pub mod icons;
pub mod renderer;

pub use renderer::{render_overlay, D2D_FACTORY};
