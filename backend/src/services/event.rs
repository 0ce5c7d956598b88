//! Event management service

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Event, UserRef};
use shared::validation;

/// Default number of events returned by the upcoming listing
pub const DEFAULT_EVENT_LIMIT: i64 = 10;

/// Event service for workshops and community gatherings
#[derive(Clone)]
pub struct EventService {
    db: PgPool,
}

/// Input for creating an event
#[derive(Debug, Deserialize)]
pub struct CreateEventInput {
    pub title: String,
    pub description: String,
    /// Event date in `YYYY-MM-DD` form
    pub date: String,
}

type EventRow = (
    Uuid,
    String,
    String,
    NaiveDate,
    DateTime<Utc>,
    Uuid,
    String,
);

fn row_to_event(r: EventRow) -> Event {
    Event {
        id: r.0,
        title: r.1,
        description: r.2,
        date: r.3,
        created_at: r.4,
        organizer: UserRef {
            id: r.5,
            username: r.6,
        },
    }
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List events soonest first
    pub async fn upcoming(&self, limit: Option<i64>) -> AppResult<Vec<Event>> {
        let limit = limit.unwrap_or(DEFAULT_EVENT_LIMIT).clamp(1, 100);

        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT e.id, e.title, e.description, e.date, e.created_at,
                   u.id, u.username
            FROM events e
            JOIN users u ON u.id = e.organizer_id
            ORDER BY e.date ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(row_to_event).collect())
    }

    /// Get all events organized by a user
    pub async fn get_events_by_organizer(&self, organizer_id: Uuid) -> AppResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT e.id, e.title, e.description, e.date, e.created_at,
                   u.id, u.username
            FROM events e
            JOIN users u ON u.id = e.organizer_id
            WHERE e.organizer_id = $1
            ORDER BY e.date ASC
            "#,
        )
        .bind(organizer_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(row_to_event).collect())
    }

    /// Create a new event organized by the given user
    pub async fn create_event(
        &self,
        organizer_id: Uuid,
        input: CreateEventInput,
    ) -> AppResult<Event> {
        validation::validate_title(&input.title).map_err(|msg| AppError::Validation {
            field: "title".to_string(),
            message: msg.to_string(),
        })?;

        validation::validate_description(&input.description).map_err(|msg| {
            AppError::Validation {
                field: "description".to_string(),
                message: msg.to_string(),
            }
        })?;

        let date = validation::parse_event_date(&input.date).map_err(|msg| {
            AppError::Validation {
                field: "date".to_string(),
                message: msg.to_string(),
            }
        })?;

        let event_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO events (title, description, date, organizer_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(date)
        .bind(organizer_id)
        .fetch_one(&self.db)
        .await?;

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT e.id, e.title, e.description, e.date, e.created_at,
                   u.id, u.username
            FROM events e
            JOIN users u ON u.id = e.organizer_id
            WHERE e.id = $1
            "#,
        )
        .bind(event_id)
        .fetch_one(&self.db)
        .await?;

        Ok(row_to_event(row))
    }
}
