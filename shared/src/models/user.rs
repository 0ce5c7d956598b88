//! User and profile models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Role;

/// Minimal user reference embedded in other resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    pub id: Uuid,
    pub username: String,
}

/// Editable profile attached to every user account
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
}

/// Public view of a user with their profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub profile: Profile,
}
