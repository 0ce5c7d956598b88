//! Listing management service for marketplace offers and search

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Listing, ListingCategory, UserRef};
use shared::validation;

/// Maximum number of listings returned by a single query
pub const MAX_LISTING_RESULTS: i64 = 200;

/// Listing service for marketplace offers
#[derive(Clone)]
pub struct ListingService {
    db: PgPool,
}

/// Search filters for listings
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Free-text search over title and description
    pub q: Option<String>,
    /// Category filter
    pub category: Option<String>,
    /// Result cap, defaults to MAX_LISTING_RESULTS
    pub limit: Option<i64>,
}

/// Input for creating a listing
#[derive(Debug, Deserialize)]
pub struct CreateListingInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: Option<Decimal>,
    pub quantity: Option<String>,
    pub location: Option<String>,
}

type ListingRow = (
    Uuid,
    String,
    String,
    String,
    Option<Decimal>,
    Option<String>,
    Option<String>,
    DateTime<Utc>,
    Uuid,
    String,
);

fn row_to_listing(r: ListingRow) -> Listing {
    Listing {
        id: r.0,
        title: r.1,
        description: r.2,
        category: r.3,
        price: r.4,
        quantity: r.5,
        location: r.6,
        created_at: r.7,
        owner: UserRef {
            id: r.8,
            username: r.9,
        },
    }
}

impl ListingService {
    /// Create a new ListingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Search listings, newest first
    ///
    /// `q` matches title or description as a case-insensitive substring.
    pub async fn search(&self, query: ListingQuery) -> AppResult<Vec<Listing>> {
        if let Some(ref category) = query.category {
            if ListingCategory::from_str(category).is_none() {
                return Err(AppError::Validation {
                    field: "category".to_string(),
                    message: format!("Unknown category: {}", category),
                });
            }
        }

        let limit = query
            .limit
            .unwrap_or(MAX_LISTING_RESULTS)
            .clamp(1, MAX_LISTING_RESULTS);

        let rows = sqlx::query_as::<_, ListingRow>(
            r#"
            SELECT l.id, l.title, l.description, l.category, l.price, l.quantity,
                   l.location, l.created_at, u.id, u.username
            FROM listings l
            JOIN users u ON u.id = l.owner_id
            WHERE ($1::TEXT IS NULL OR l.title ILIKE '%' || $1 || '%' OR l.description ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR l.category = $2)
            ORDER BY l.created_at DESC
            LIMIT $3
            "#,
        )
        .bind(&query.q)
        .bind(&query.category)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(row_to_listing).collect())
    }

    /// Get a listing by ID
    pub async fn get_listing(&self, listing_id: Uuid) -> AppResult<Listing> {
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            SELECT l.id, l.title, l.description, l.category, l.price, l.quantity,
                   l.location, l.created_at, u.id, u.username
            FROM listings l
            JOIN users u ON u.id = l.owner_id
            WHERE l.id = $1
            "#,
        )
        .bind(listing_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Listing".to_string()))?;

        Ok(row_to_listing(row))
    }

    /// Get all listings owned by a user, newest first
    pub async fn get_listings_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Listing>> {
        let rows = sqlx::query_as::<_, ListingRow>(
            r#"
            SELECT l.id, l.title, l.description, l.category, l.price, l.quantity,
                   l.location, l.created_at, u.id, u.username
            FROM listings l
            JOIN users u ON u.id = l.owner_id
            WHERE l.owner_id = $1
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(row_to_listing).collect())
    }

    /// Create a new listing owned by the given user
    pub async fn create_listing(
        &self,
        owner_id: Uuid,
        input: CreateListingInput,
    ) -> AppResult<Listing> {
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

        let category =
            ListingCategory::from_str(&input.category).ok_or_else(|| AppError::Validation {
                field: "category".to_string(),
                message: format!("Unknown category: {}", input.category),
            })?;

        if let Some(price) = input.price {
            if price < Decimal::ZERO {
                return Err(AppError::Validation {
                    field: "price".to_string(),
                    message: "Price cannot be negative".to_string(),
                });
            }
        }

        let listing_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO listings (title, description, owner_id, category, price, quantity, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(owner_id)
        .bind(category.as_str())
        .bind(input.price)
        .bind(&input.quantity)
        .bind(&input.location)
        .fetch_one(&self.db)
        .await?;

        self.get_listing(listing_id).await
    }
}
