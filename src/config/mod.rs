//! Configuration
//!
//! Loads application configuration from defaults, a TOML file and
//! environment variables.

pub mod config;
pub mod loader;
