//! Event models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRef;

/// A community event (workshop, market day, field visit)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub organizer: UserRef,
    pub created_at: DateTime<Utc>,
}
