//! Configuration module for querykit.
//!
//! Handles the compiler settings file.

mod settings;

pub use settings::{CompilerSettings, Settings, SettingsError};
