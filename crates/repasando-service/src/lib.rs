//! # Repasando Service
//!
//! Application services for the Repasando user service.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
