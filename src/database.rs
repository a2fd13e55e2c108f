// src/database.rs
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// One statement per table; SQLite prepares single statements only.
const SCHEMA: [&str; 6] = [
    "CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        price_in_cents INTEGER NOT NULL CHECK (price_in_cents > 0),
        amount_in_stock INTEGER NOT NULL CHECK (amount_in_stock >= 0)
    )",
    "CREATE TABLE IF NOT EXISTS tags (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS product_tags (
        id INTEGER PRIMARY KEY,
        product_id INTEGER NOT NULL REFERENCES products (id),
        tag_id INTEGER NOT NULL REFERENCES tags (id)
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        shipping_address TEXT NOT NULL,
        billing_address TEXT NOT NULL,
        payment_method TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY,
        product_id INTEGER NOT NULL,
        user_id INTEGER NOT NULL,
        amount INTEGER NOT NULL,
        price_in_cents INTEGER NOT NULL,
        trans_date TEXT NOT NULL,
        payment_method TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS user_products (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users (id),
        product_id INTEGER NOT NULL REFERENCES products (id)
    )",
];

pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    // The `foreign_keys` pragma is deliberately left off (see DESIGN.md);
    // sqlx turns it on by default, so disable it explicitly.
    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(false);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Single-connection pool over a private in-memory database, used by tests
/// and throwaway runs. One connection, otherwise every checkout would see
/// its own empty database.
pub async fn create_in_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
