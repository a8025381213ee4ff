//! # Repasando Config
//!
//! Configuration management for the Repasando user service.
//! Supports layered configuration from TOML files and environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
