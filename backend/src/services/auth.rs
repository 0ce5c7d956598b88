//! Authentication service for user registration, login, and token management

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use shared::types::Role;
use shared::validation;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    jwt_secret: String,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

/// Input for registering a new account
#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Response after successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication tokens
#[derive(Debug, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User info from database
#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt.secret.clone(),
            access_token_expiry: config.jwt.access_token_expiry,
            refresh_token_expiry: config.jwt.refresh_token_expiry,
        }
    }

    /// Register a new account with an empty profile
    pub async fn register(&self, input: RegisterInput) -> AppResult<RegisterResponse> {
        validation::validate_username(&input.username).map_err(|msg| AppError::Validation {
            field: "username".to_string(),
            message: msg.to_string(),
        })?;

        validation::validate_email(&input.email).map_err(|msg| AppError::Validation {
            field: "email".to_string(),
            message: msg.to_string(),
        })?;

        validation::validate_password(&input.password).map_err(|msg| AppError::Validation {
            field: "password".to_string(),
            message: msg.to_string(),
        })?;

        let role = input.role.parse::<Role>().map_err(|_| AppError::Validation {
            field: "role".to_string(),
            message: format!("Unknown role: {}", input.role),
        })?;

        // Check for existing username or email
        let username_taken = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE username = $1",
        )
        .bind(&input.username)
        .fetch_one(&self.db)
        .await?;

        if username_taken > 0 {
            return Err(AppError::DuplicateEntry("username".to_string()));
        }

        let email_taken = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE email = $1",
        )
        .bind(&input.email)
        .fetch_one(&self.db)
        .await?;

        if email_taken > 0 {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        // Hash password
        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        // Start transaction
        let mut tx = self.db.begin().await?;

        // Create user
        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&password_hash)
        .bind(role.as_str())
        .fetch_one(&mut *tx)
        .await?;

        // Create empty profile
        sqlx::query("INSERT INTO profiles (user_id) VALUES ($1)")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        // Commit transaction
        tx.commit().await?;

        // Generate tokens
        let tokens = self.generate_tokens(user_id, &input.username, role)?;

        // Store refresh token
        self.store_refresh_token(user_id, &tokens.refresh_token).await?;

        Ok(RegisterResponse {
            user_id,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
        })
    }

    /// Authenticate user with username and password
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthTokens> {
        // Find user by username
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        // Verify password
        let valid = verify(password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let role = user.role.parse::<Role>().map_err(|_| {
            AppError::Internal(format!("Unknown role stored for user: {}", user.role))
        })?;

        // Generate tokens
        let tokens = self.generate_tokens(user.id, &user.username, role)?;

        // Store refresh token
        self.store_refresh_token(user.id, &tokens.refresh_token).await?;

        Ok(tokens)
    }

    /// Refresh access token using refresh token
    pub async fn refresh_token(&self, refresh_token: &str) -> AppResult<AuthTokens> {
        // Hash the refresh token to look up
        let token_hash = Self::hash_token(refresh_token);

        // Find valid refresh token
        let token_record = sqlx::query_as::<_, (Uuid, String, String)>(
            r#"
            SELECT rt.user_id, u.username, u.role
            FROM refresh_tokens rt
            JOIN users u ON u.id = rt.user_id
            WHERE rt.token_hash = $1
              AND rt.expires_at > NOW()
              AND rt.revoked_at IS NULL
            "#,
        )
        .bind(&token_hash)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| {
            AppError::Unauthorized("Invalid or expired refresh token".to_string())
        })?;

        let (user_id, username, role_str) = token_record;

        let role = role_str.parse::<Role>().map_err(|_| {
            AppError::Internal(format!("Unknown role stored for user: {}", role_str))
        })?;

        // Revoke old refresh token
        sqlx::query("UPDATE refresh_tokens SET revoked_at = NOW() WHERE token_hash = $1")
            .bind(&token_hash)
            .execute(&self.db)
            .await?;

        // Generate new tokens
        let tokens = self.generate_tokens(user_id, &username, role)?;

        // Store new refresh token
        self.store_refresh_token(user_id, &tokens.refresh_token).await?;

        Ok(tokens)
    }

    /// Validate access token and return claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    /// Generate access and refresh tokens
    fn generate_tokens(&self, user_id: Uuid, username: &str, role: Role) -> AppResult<AuthTokens> {
        let now = Utc::now();
        let access_exp = now + Duration::seconds(self.access_token_expiry);

        // Access token claims
        let access_claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.as_str().to_string(),
            exp: access_exp.timestamp(),
            iat: now.timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &access_claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))?;

        // Refresh token (simple random token)
        let refresh_token = Uuid::new_v4().to_string();

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// Store refresh token in database
    async fn store_refresh_token(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        let token_hash = Self::hash_token(token);
        let expires_at = Utc::now() + Duration::seconds(self.refresh_token_expiry);

        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (user_id, token_hash, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(&token_hash)
        .bind(expires_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Hash a token for storage
    fn hash_token(token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        BASE64.encode(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_deterministic() {
        let a = AuthService::hash_token("some-refresh-token");
        let b = AuthService::hash_token("some-refresh-token");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_token_differs_per_token() {
        let a = AuthService::hash_token("token-one");
        let b = AuthService::hash_token("token-two");
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_token_fits_storage_column() {
        // SHA-256 digest base64-encodes to 44 characters
        let hashed = AuthService::hash_token(&Uuid::new_v4().to_string());
        assert_eq!(hashed.len(), 44);
    }

    #[test]
    fn test_hash_token_does_not_leak_input() {
        let token = Uuid::new_v4().to_string();
        assert!(!AuthService::hash_token(&token).contains(&token));
    }
}
