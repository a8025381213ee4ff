//! # Repasando REST
//!
//! REST API layer using Axum for the Repasando user service.
//! Provides the `/api/users` endpoints, health checks and Swagger UI.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
