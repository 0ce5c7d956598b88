//! Direct messaging service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Message, UserRef};
use shared::validation;

/// Default inbox page size
pub const DEFAULT_INBOX_LIMIT: i64 = 20;

/// Message service for direct user-to-user mail
#[derive(Clone)]
pub struct MessageService {
    db: PgPool,
}

/// Input for sending a message
#[derive(Debug, Deserialize)]
pub struct SendMessageInput {
    /// Receiver username
    pub receiver: String,
    pub subject: String,
    pub body: String,
}

type MessageRow = (
    Uuid,
    String,
    String,
    DateTime<Utc>,
    Uuid,
    String,
    Uuid,
    String,
);

fn row_to_message(r: MessageRow) -> Message {
    Message {
        id: r.0,
        subject: r.1,
        body: r.2,
        created_at: r.3,
        sender: UserRef {
            id: r.4,
            username: r.5,
        },
        receiver: UserRef {
            id: r.6,
            username: r.7,
        },
    }
}

impl MessageService {
    /// Create a new MessageService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Send a message to another user, addressed by username
    pub async fn send(&self, sender_id: Uuid, input: SendMessageInput) -> AppResult<Message> {
        validation::validate_subject(&input.subject).map_err(|msg| AppError::Validation {
            field: "subject".to_string(),
            message: msg.to_string(),
        })?;

        validation::validate_body(&input.body).map_err(|msg| AppError::Validation {
            field: "body".to_string(),
            message: msg.to_string(),
        })?;

        // Resolve receiver by username
        let receiver_id = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE username = $1",
        )
        .bind(&input.receiver)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Receiver".to_string()))?;

        let message_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, subject, body)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(&input.subject)
        .bind(&input.body)
        .fetch_one(&self.db)
        .await?;

        self.get_message(message_id).await
    }

    /// Get a message by ID
    pub async fn get_message(&self, message_id: Uuid) -> AppResult<Message> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT m.id, m.subject, m.body, m.created_at,
                   s.id, s.username, r.id, r.username
            FROM messages m
            JOIN users s ON s.id = m.sender_id
            JOIN users r ON r.id = m.receiver_id
            WHERE m.id = $1
            "#,
        )
        .bind(message_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Message".to_string()))?;

        Ok(row_to_message(row))
    }

    /// Get the inbox for a user, newest first
    pub async fn inbox(&self, user_id: Uuid, limit: Option<i64>) -> AppResult<Vec<Message>> {
        let limit = limit.unwrap_or(DEFAULT_INBOX_LIMIT).clamp(1, 100);

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT m.id, m.subject, m.body, m.created_at,
                   s.id, s.username, r.id, r.username
            FROM messages m
            JOIN users s ON s.id = m.sender_id
            JOIN users r ON r.id = m.receiver_id
            WHERE m.receiver_id = $1
            ORDER BY m.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(row_to_message).collect())
    }
}
