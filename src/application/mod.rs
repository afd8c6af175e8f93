//! # Application Layer
//!
//! Seam traits and the use cases orchestrating the chat client with the
//! credential and settings stores.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
