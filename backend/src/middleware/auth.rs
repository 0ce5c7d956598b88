//! Authentication middleware
//!
//! JWT validation and role-aware request context

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use shared::types::Role;

use crate::error::ErrorResponse;

/// Authenticated user information extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: uuid::Uuid,
    pub username: String,
    pub role: Role,
}

impl AuthUser {
    /// Check if the user holds a specific role
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Check if the user holds any of the specified roles
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.has_role(*r))
    }
}

/// Authentication middleware that validates JWT tokens
/// Note: This middleware extracts and validates the JWT token from the Authorization header.
/// The actual token validation is done inline to avoid state dependency issues.
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return unauthorized_response("Missing or invalid Authorization header");
        }
    };

    // Decode and validate JWT token
    // Get JWT secret from environment (fallback for middleware without state)
    let jwt_secret = std::env::var("CAMEL__JWT__SECRET")
        .or_else(|_| std::env::var("CAMEL_JWT_SECRET"))
        .unwrap_or_else(|_| "dev-secret-key".to_string());

    let claims = match decode_jwt(token, &jwt_secret) {
        Ok(claims) => claims,
        Err(msg) => {
            return unauthorized_response(&msg);
        }
    };

    // Parse identity from claims
    let user_id = match uuid::Uuid::parse_str(&claims.sub) {
        Ok(id) => id,
        Err(_) => return unauthorized_response("Invalid user ID in token"),
    };

    let role = match claims.role.parse::<Role>() {
        Ok(role) => role,
        Err(_) => return unauthorized_response("Invalid role in token"),
    };

    // Create AuthUser and insert into request extensions
    let auth_user = AuthUser {
        user_id,
        username: claims.username,
        role,
    };

    request.extensions_mut().insert(auth_user);

    next.run(request).await
}

/// JWT claims structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Claims {
    sub: String,
    username: String,
    role: String,
    exp: i64,
    iat: i64,
}

/// Decode and validate JWT token
fn decode_jwt(token: &str, secret: &str) -> Result<Claims, String> {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Invalid token: {}", e))
}

/// Create unauthorized response
fn unauthorized_response(message: &str) -> Response {
    let error = ErrorResponse {
        error: crate::error::ErrorDetail {
            code: "UNAUTHORIZED".to_string(),
            message: message.to_string(),
            field: None,
        },
    };

    (StatusCode::UNAUTHORIZED, Json(error)).into_response()
}

/// Extractor for authenticated user
/// Use this in handlers to get the current user
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: crate::error::ErrorDetail {
                        code: "UNAUTHORIZED".to_string(),
                        message: "Authentication required".to_string(),
                        field: None,
                    },
                };
                (StatusCode::UNAUTHORIZED, Json(error))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn make_token(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims() -> Claims {
        Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            username: "farmer1".to_string(),
            role: "farmer".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
        }
    }

    #[test]
    fn test_decode_round_trip() {
        let claims = valid_claims();
        let token = make_token(&claims, "test-secret");
        let decoded = decode_jwt(&token, "test-secret").unwrap();
        assert_eq!(decoded.username, "farmer1");
        assert_eq!(decoded.role, "farmer");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = make_token(&valid_claims(), "test-secret");
        assert!(decode_jwt(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut claims = valid_claims();
        claims.exp = chrono::Utc::now().timestamp() - 3600;
        let token = make_token(&claims, "test-secret");
        assert!(decode_jwt(&token, "test-secret").is_err());
    }

    #[test]
    fn test_role_checks() {
        let user = AuthUser {
            user_id: uuid::Uuid::new_v4(),
            username: "vet1".to_string(),
            role: Role::Vet,
        };
        assert!(user.has_role(Role::Vet));
        assert!(!user.has_role(Role::Gov));
        assert!(user.has_any_role(&[Role::Farmer, Role::Vet]));
        assert!(!user.has_any_role(&[Role::Farmer, Role::Producer]));
    }
}
