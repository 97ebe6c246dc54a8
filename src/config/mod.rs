//! Configuration module for the contact manager
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::ContactsPaths;
pub use settings::Settings;
