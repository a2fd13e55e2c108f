//! Typed repository over the SQLite catalog database.
//!
//! Every operation in the catalog layer goes through a [`Store`] handle;
//! there is no global connection. Lookups return `Option`, list queries
//! return `Vec`, and the store only guarantees that individual calls are
//! serialized.

mod products;
mod tags;
mod transactions;
mod user_products;
mod users;

use sqlx::sqlite::SqlitePool;

use crate::database;

#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = database::create_pool(database_url).await?;
        Ok(Self { pool })
    }

    /// Private in-memory database, one per call.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = database::create_in_memory_pool().await?;
        Ok(Self { pool })
    }

    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        database::init_schema(&self.pool).await
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
