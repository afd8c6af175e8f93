//! # Domain Layer
//!
//! Request models, comparison settings and the error taxonomy.
//! This layer is independent of the HTTP client and storage backends.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
