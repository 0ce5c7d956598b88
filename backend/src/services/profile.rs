//! User profile service

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Profile, UserWithProfile};
use shared::types::Role;

/// Profile service for public user pages and profile edits
#[derive(Clone)]
pub struct ProfileService {
    db: PgPool,
}

/// Input for updating a profile (partial update)
#[derive(Debug, Deserialize)]
pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

impl ProfileService {
    /// Create a new ProfileService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get a user's public page by username, with profile fields
    pub async fn get_user_with_profile(&self, username: &str) -> AppResult<UserWithProfile> {
        let row = sqlx::query_as::<_, (Uuid, String, String, String, Option<String>, Option<String>, Option<String>, Option<String>)>(
            r#"
            SELECT u.id, u.username, u.email, u.role,
                   p.full_name, p.phone, p.location, p.bio
            FROM users u
            LEFT JOIN profiles p ON p.user_id = u.id
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        let role = row.3.parse::<Role>().map_err(|_| {
            AppError::Internal(format!("Unknown role stored for user: {}", row.3))
        })?;

        Ok(UserWithProfile {
            id: row.0,
            username: row.1,
            email: row.2,
            role,
            profile: Profile {
                full_name: row.4.unwrap_or_default(),
                phone: row.5.unwrap_or_default(),
                location: row.6.unwrap_or_default(),
                bio: row.7.unwrap_or_default(),
            },
        })
    }

    /// Update the current user's profile
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> AppResult<Profile> {
        // Check if profile exists
        let existing = sqlx::query_as::<_, (String, String, String, String)>(
            "SELECT full_name, phone, location, bio FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile".to_string()))?;

        let full_name = input.full_name.unwrap_or(existing.0);
        let phone = input.phone.unwrap_or(existing.1);
        let location = input.location.unwrap_or(existing.2);
        let bio = input.bio.unwrap_or(existing.3);

        let row = sqlx::query_as::<_, (String, String, String, String)>(
            r#"
            UPDATE profiles
            SET full_name = $1, phone = $2, location = $3, bio = $4
            WHERE user_id = $5
            RETURNING full_name, phone, location, bio
            "#,
        )
        .bind(&full_name)
        .bind(&phone)
        .bind(&location)
        .bind(&bio)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(Profile {
            full_name: row.0,
            phone: row.1,
            location: row.2,
            bio: row.3,
        })
    }
}
