//! Business logic services for the Camel Care Platform

pub mod auth;
pub mod event;
pub mod listing;
pub mod message;
pub mod profile;
pub mod seed;

pub use auth::AuthService;
pub use event::EventService;
pub use listing::ListingService;
pub use message::MessageService;
pub use profile::ProfileService;
