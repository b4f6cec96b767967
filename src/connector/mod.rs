//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion clients (Groq over HTTP, mock for tests and smoke runs)
//! - The inbound HTTP surface (axum)

pub mod adapter;
pub mod api;

pub use adapter::*;
