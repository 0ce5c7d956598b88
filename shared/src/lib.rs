//! Shared types and models for the Camel Care Platform
//!
//! This crate contains types shared between the backend and other
//! components of the system (mobile clients, future web frontend).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
