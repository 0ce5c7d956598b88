//! Database models for the Camel Care Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
