//! Platform-specific implementations.
//!
//! Only Windows is supported: the overlay is built on low-level mouse
//! hooks and layered windows, which have no equivalent elsewhere in this
//! codebase.

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::*;
