//! Global configuration management for txmerkle
//!
//! This module stores user display and output preferences
//! in ~/.txmerkle/config.toml

pub mod global_config;

// Re-export commonly used items
pub use global_config::{ConfigKey, ConfigValue, GlobalConfig, CONFIG_PATH_ENV};
