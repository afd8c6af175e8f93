//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat clients (OpenAI-compatible HTTP, offline mock)
//! - Credential and settings stores (files, in-memory)
//! - The CLI API layer wiring them together

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
