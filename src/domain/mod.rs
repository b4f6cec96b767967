//! # Domain Layer
//!
//! Core models and the error taxonomy.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::DomainError;
pub use models::*;
