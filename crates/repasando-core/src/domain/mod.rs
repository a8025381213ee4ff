//! Domain entities of the user service.

pub mod entities;

pub use entities::*;
