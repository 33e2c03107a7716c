// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Run all database migrations
///
/// Tables are created if missing. Setting RESET_DB=true drops everything
/// first and recreates a clean schema.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("Dropped old tables");
    }

    create_auth_tables(pool).await?;
    create_catalog_tables(pool).await?;
    create_cart_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed successfully");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Drop tables in reverse dependency order
    let tables = vec![
        "cart_items",
        "giveaway_entries",
        "giveaways",
        "products",
        "events",
        "sessions",
        "users",
    ];

    for table in tables {
        let _ = sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await;
    }

    Ok(())
}

async fn create_auth_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Users table. The id column holds the identity provider's subject,
    // so rows are upserted on every login callback rather than inserted.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE,
            first_name TEXT,
            last_name TEXT,
            profile_image_url TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Sessions table. The sid travels in the session cookie.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            sid TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            expire TEXT NOT NULL,
            created_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_catalog_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Giveaways table. entry_count is denormalized and bumped on entry.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS giveaways (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            image_url TEXT NOT NULL,
            value TEXT NOT NULL,
            end_date TEXT NOT NULL,
            entry_count INTEGER DEFAULT 0,
            is_active INTEGER DEFAULT 1,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Giveaway entries. The unique constraint is the arbiter for the
    // one-entry-per-user rule; the route-level pre-check only shapes the
    // error message.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS giveaway_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            giveaway_id INTEGER NOT NULL,
            created_at TEXT DEFAULT (datetime('now')),
            UNIQUE(user_id, giveaway_id),
            FOREIGN KEY(user_id) REFERENCES users(id),
            FOREIGN KEY(giveaway_id) REFERENCES giveaways(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Products table. sizes holds a JSON array; price stays a decimal
    // string on the wire.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            price TEXT NOT NULL,
            image_url TEXT NOT NULL,
            category TEXT NOT NULL,
            sizes TEXT,
            stock INTEGER DEFAULT 0,
            is_active INTEGER DEFAULT 1,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Events table. current_attendees is declared but no route mutates it.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            image_url TEXT NOT NULL,
            event_date TEXT NOT NULL,
            location TEXT NOT NULL,
            max_attendees INTEGER,
            current_attendees INTEGER DEFAULT 0,
            is_active INTEGER DEFAULT 1,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_cart_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Cart items. No uniqueness over (user_id, product_id, size): repeated
    // adds create duplicate rows.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cart_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            product_id INTEGER NOT NULL,
            quantity INTEGER DEFAULT 1,
            size TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id),
            FOREIGN KEY(product_id) REFERENCES products(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = vec![
        "CREATE INDEX IF NOT EXISTS idx_session_expire ON sessions(expire)",
        "CREATE INDEX IF NOT EXISTS idx_sessions_user ON sessions(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_giveaways_active ON giveaways(is_active, created_at)",
        "CREATE INDEX IF NOT EXISTS idx_entries_giveaway ON giveaway_entries(giveaway_id)",
        "CREATE INDEX IF NOT EXISTS idx_products_category ON products(category)",
        "CREATE INDEX IF NOT EXISTS idx_cart_items_user ON cart_items(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_events_active ON events(is_active, event_date)",
    ];

    for stmt in indexes {
        sqlx::query(stmt).execute(pool).await?;
    }

    Ok(())
}
