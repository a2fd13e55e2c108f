use chrono::Utc;
use tracing::instrument;

use crate::error::AppError;
use crate::models::transaction::{NewTransaction, Transaction};
use crate::store::Store;

use super::update_stock;

/// Records a purchase: validates product, buyer, quantity and stock, then
/// creates a transaction at the product's current unit price and the
/// buyer's current payment method, and decrements stock.
///
/// Every precondition is checked before the first write, so a rejected
/// purchase leaves both stock and the transaction history untouched.
#[instrument(skip(store))]
pub async fn purchase_product(
    store: &Store,
    product_id: i64,
    buyer_id: i64,
    quantity: i64,
) -> Result<Transaction, AppError> {
    let product = store
        .product_by_id(product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product does not exist!"))?;
    let buyer = store
        .user_by_id(buyer_id)
        .await?
        .ok_or_else(|| AppError::not_found("User does not exist!"))?;
    if quantity < 0 {
        return Err(AppError::validation(
            "Quantity must be a non-negative integer!",
        ));
    }
    if quantity > product.amount_in_stock {
        return Err(AppError::validation("Not enough in stock!"));
    }

    let transaction = store
        .insert_transaction(NewTransaction {
            product_id,
            user_id: buyer_id,
            amount: quantity,
            price_in_cents: product.price_in_cents * quantity,
            trans_date: Utc::now().date_naive(),
            payment_method: buyer.payment_method,
        })
        .await?;
    update_stock(store, product_id, product.amount_in_stock - quantity).await?;

    Ok(transaction)
}
