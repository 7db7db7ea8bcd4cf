//! Configuration storage for Windows.
//!
//! Persists settings to a JSON file in %APPDATA%/Pulso/config.json

pub mod config;

pub use config::*;
