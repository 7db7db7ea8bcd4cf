//! Windows-specific implementation using Win32 API and Direct2D.
//!
//! This module contains all Windows-specific code:
//! - Runtime state (window handle, virtual-screen rect, loaded settings)
//! - Input handling (low-level mouse hook, quit hotkey)
//! - UI (layered overlay window rendering)
//! - Storage (JSON config file persistence)

pub mod app;
pub mod input;
pub mod storage;
pub mod ui;
