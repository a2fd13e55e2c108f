use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Immutable purchase record; created once, never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub price_in_cents: i64,
    pub trans_date: NaiveDate,
    pub payment_method: String,
}

#[derive(Debug)]
pub struct NewTransaction {
    pub product_id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub price_in_cents: i64,
    pub trans_date: NaiveDate,
    pub payment_method: String,
}
