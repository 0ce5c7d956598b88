//! Direct message models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRef;

/// A direct message between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub subject: String,
    pub body: String,
    pub sender: UserRef,
    pub receiver: UserRef,
    pub created_at: DateTime<Utc>,
}
