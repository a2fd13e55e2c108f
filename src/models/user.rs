use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: String,
    pub billing_address: String,
    pub payment_method: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: String,
    pub billing_address: String,
    pub payment_method: String,
    pub phone: String,
    pub email: String,
}

/// Association between a user and a product ("in my catalog"), distinct
/// from a purchase transaction. Duplicates are allowed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProduct {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
}
