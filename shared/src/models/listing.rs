//! Listing models
//!
//! A listing is the generic marketplace unit: milk/product offers,
//! transport offers, vet services, research collaborations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRef;

/// Listing categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Milk,
    Transport,
    Vet,
    Research,
    Other,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 5] = [
        ListingCategory::Milk,
        ListingCategory::Transport,
        ListingCategory::Vet,
        ListingCategory::Research,
        ListingCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingCategory::Milk => "milk",
            ListingCategory::Transport => "transport",
            ListingCategory::Vet => "vet",
            ListingCategory::Research => "research",
            ListingCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "milk" => Some(ListingCategory::Milk),
            "transport" => Some(ListingCategory::Transport),
            "vet" => Some(ListingCategory::Vet),
            "research" => Some(ListingCategory::Research),
            "other" => Some(ListingCategory::Other),
            _ => None,
        }
    }
}

/// A marketplace listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: Option<Decimal>,
    pub quantity: Option<String>,
    pub location: Option<String>,
    pub owner: UserRef,
    pub created_at: DateTime<Utc>,
}
