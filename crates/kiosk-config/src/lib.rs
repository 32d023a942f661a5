//! # kiosk-config
//!
//! Configuration management for kiosk.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError, ENV_PREFIX};
pub use schema::{InferenceConfig, KioskConfig, LoggingConfig, ServerConfig};
