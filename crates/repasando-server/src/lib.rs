//! # Repasando Server Library
//!
//! Wiring, logging and startup utilities for the Repasando server binary.

pub mod app;
pub mod logging;
pub mod startup;

pub use app::*;
pub use logging::*;
