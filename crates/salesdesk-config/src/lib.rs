//! # SalesDesk Config
//!
//! Configuration management for SalesDesk. Settings come from layered
//! TOML files with environment variable overrides.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
