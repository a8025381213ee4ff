//! Result type aliases for Repasando.

use crate::RepasandoError;

/// A specialized `Result` type for Repasando operations.
pub type RepasandoResult<T> = Result<T, RepasandoError>;
