//! # Repasando Core
//!
//! Core types, error definitions, and pagination primitives shared by
//! every layer of the Repasando user service.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
