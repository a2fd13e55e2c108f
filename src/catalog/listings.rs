use tracing::instrument;

use crate::error::AppError;
use crate::store::Store;

/// Names of all products associated with the user through `user_products`.
/// An empty result is reported as a not-found error, never as `Ok(vec![])`.
#[instrument(skip(store))]
pub async fn list_user_products(store: &Store, user_id: i64) -> Result<Vec<String>, AppError> {
    let products = store.products_for_user(user_id).await?;
    if products.is_empty() {
        return Err(AppError::not_found("No products for this user"));
    }
    Ok(products.into_iter().map(|product| product.name).collect())
}

/// Same shape as [`list_user_products`], joined through `product_tags`.
#[instrument(skip(store))]
pub async fn list_products_per_tag(store: &Store, tag_id: i64) -> Result<Vec<String>, AppError> {
    let products = store.products_for_tag(tag_id).await?;
    if products.is_empty() {
        return Err(AppError::not_found("No products with this tag"));
    }
    Ok(products.into_iter().map(|product| product.name).collect())
}
