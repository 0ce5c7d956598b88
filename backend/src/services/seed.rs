//! Database seeding for demonstration and local development
//!
//! Creates one sample account per stakeholder role plus a handful of
//! listings, an event, and a message so a fresh install has something
//! to look at.

use bcrypt::{hash, DEFAULT_COST};
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::types::Role;

/// A demo account seeded by `initdb`
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Sample accounts, one per role
pub const DEMO_ACCOUNTS: [DemoAccount; 8] = [
    DemoAccount {
        username: "farmer1",
        email: "farmer1@example.com",
        password: "farmerpass",
        role: Role::Farmer,
    },
    DemoAccount {
        username: "producer1",
        email: "producer1@example.com",
        password: "producerpass",
        role: Role::Producer,
    },
    DemoAccount {
        username: "consumer1",
        email: "consumer1@example.com",
        password: "consumerpass",
        role: Role::Consumer,
    },
    DemoAccount {
        username: "research1",
        email: "research1@example.com",
        password: "researchpass",
        role: Role::Researcher,
    },
    DemoAccount {
        username: "vet1",
        email: "vet1@example.com",
        password: "vetpass",
        role: Role::Vet,
    },
    DemoAccount {
        username: "trans1",
        email: "trans1@example.com",
        password: "transpass",
        role: Role::Transporter,
    },
    DemoAccount {
        username: "ent1",
        email: "ent1@example.com",
        password: "entpass",
        role: Role::Entrepreneur,
    },
    DemoAccount {
        username: "gov1",
        email: "gov1@example.com",
        password: "govpass",
        role: Role::Gov,
    },
];

/// Check whether the users table has any rows
pub async fn users_table_is_empty(db: &PgPool) -> AppResult<bool> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(db)
        .await?;
    Ok(count == 0)
}

/// Drop all application tables so migrations can rebuild the schema
pub async fn reset_database(db: &PgPool) -> AppResult<()> {
    sqlx::query(
        r#"
        DROP TABLE IF EXISTS
            refresh_tokens, messages, events, listings, profiles, users,
            _sqlx_migrations
        CASCADE
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}

/// Insert the demo accounts, profiles, listings, event, and message
pub async fn seed_demo_data(db: &PgPool) -> AppResult<()> {
    let mut tx = db.begin().await?;

    let mut ids: Vec<(&'static str, Uuid)> = Vec::with_capacity(DEMO_ACCOUNTS.len());

    for account in DEMO_ACCOUNTS {
        let password_hash = hash(account.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(account.username)
        .bind(account.email)
        .bind(&password_hash)
        .bind(account.role.as_str())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, full_name, phone, location, bio)
            VALUES ($1, $2, 'N/A', 'Rajasthan', $3)
            "#,
        )
        .bind(user_id)
        .bind(title_case(account.username))
        .bind(format!("Role: {}", account.role))
        .execute(&mut *tx)
        .await?;

        ids.push((account.username, user_id));
    }

    let id_of = |username: &str| -> AppResult<Uuid> {
        ids.iter()
            .find(|(u, _)| *u == username)
            .map(|(_, id)| *id)
            .ok_or_else(|| AppError::Internal(format!("Seed account missing: {}", username)))
    };

    // Sample listings
    let listings: [(&str, &str, &str, &str, Decimal, &str, &str); 4] = [
        (
            "farmer1",
            "Raw camel milk - weekly supply (50 L)",
            "High-quality raw camel milk from free-range camels. Good for research and consumers.",
            "milk",
            Decimal::new(15, 1),
            "50 L/week",
            "Bikaner, Rajasthan",
        ),
        (
            "producer1",
            "Pasteurized camel milk - 10L packs",
            "Hygienically pasteurized and packaged. Certified for sale.",
            "milk",
            Decimal::new(2, 0),
            "10 L packs",
            "Jaisalmer",
        ),
        (
            "trans1",
            "Transport service for milk (cold chain)",
            "Refrigerated transport available across districts.",
            "transport",
            Decimal::new(5, 1),
            "per km",
            "Rajasthan statewide",
        ),
        (
            "vet1",
            "Veterinary health check & vaccination",
            "Experienced camel vet offering herd health checkups.",
            "vet",
            Decimal::new(20, 0),
            "per visit",
            "Rajasthan",
        ),
    ];

    for (owner, title, description, category, price, quantity, location) in listings {
        sqlx::query(
            r#"
            INSERT INTO listings (title, description, owner_id, category, price, quantity, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(id_of(owner)?)
        .bind(category)
        .bind(price)
        .bind(quantity)
        .bind(location)
        .execute(&mut *tx)
        .await?;
    }

    // Sample event
    sqlx::query(
        r#"
        INSERT INTO events (title, description, date, organizer_id)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind("Camel Conservation Workshop")
    .bind("Field workshop on camel nutrition and conservation.")
    .bind(Utc::now().date_naive())
    .bind(id_of("gov1")?)
    .execute(&mut *tx)
    .await?;

    // Sample message
    sqlx::query(
        r#"
        INSERT INTO messages (sender_id, receiver_id, subject, body)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id_of("consumer1")?)
    .bind(id_of("farmer1")?)
    .bind("Interested in weekly milk")
    .bind("Hi, I'd like to buy 20L/week. Can we discuss?")
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!("Seeded {} demo accounts", DEMO_ACCOUNTS.len());

    Ok(())
}

/// Uppercase the first character: "farmer1" -> "Farmer1"
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("farmer1"), "Farmer1");
        assert_eq!(title_case("gov1"), "Gov1");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_demo_accounts_cover_every_role() {
        for role in Role::ALL {
            assert!(
                DEMO_ACCOUNTS.iter().any(|a| a.role == role),
                "No demo account for role {}",
                role
            );
        }
    }

    #[test]
    fn test_demo_accounts_are_unique() {
        for (i, a) in DEMO_ACCOUNTS.iter().enumerate() {
            for b in DEMO_ACCOUNTS.iter().skip(i + 1) {
                assert_ne!(a.username, b.username);
                assert_ne!(a.email, b.email);
            }
        }
    }

    #[test]
    fn test_demo_passwords_pass_validation() {
        for account in DEMO_ACCOUNTS {
            assert!(shared::validation::validate_username(account.username).is_ok());
            assert!(shared::validation::validate_email(account.email).is_ok());
            assert!(shared::validation::validate_password(account.password).is_ok());
        }
    }
}
