//! Configuration module for ytlens
//!
//! Handles loading and validating settings from YAML files and environment
//! variables. Settings are passed explicitly into client construction; there
//! is no process-global configuration state.

mod settings;

pub use settings::*;
