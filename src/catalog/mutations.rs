use tracing::instrument;

use crate::error::AppError;
use crate::store::Store;

/// Associates an existing product (looked up by exact name) with an
/// existing user. Returns the id of the new `user_products` row. Repeated
/// calls are not deduplicated.
#[instrument(skip(store))]
pub async fn add_product_to_catalog(
    store: &Store,
    user_id: i64,
    product_name: &str,
) -> Result<i64, AppError> {
    let user = store
        .user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User does not exist!"))?;
    let product = store
        .product_by_name(product_name)
        .await?
        .ok_or_else(|| AppError::not_found("Product does not exist!"))?;
    let row_id = store.insert_user_product(user.id, product.id).await?;
    Ok(row_id)
}

/// Sets `amount_in_stock` to `new_quantity`. No validation here beyond the
/// store's own CHECK constraint; a negative quantity comes back as a
/// database error.
#[instrument(skip(store))]
pub async fn update_stock(
    store: &Store,
    product_id: i64,
    new_quantity: i64,
) -> Result<(), AppError> {
    store
        .product_by_id(product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product does not exist!"))?;
    store.set_stock(product_id, new_quantity).await?;
    Ok(())
}

/// Deletes the product row. Transactions and user associations that point
/// at it are left in place as history.
#[instrument(skip(store))]
pub async fn remove_product(store: &Store, product_id: i64) -> Result<(), AppError> {
    store
        .product_by_id(product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product does not exist!"))?;
    store.delete_product(product_id).await?;
    Ok(())
}
