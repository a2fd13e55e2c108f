mod common;

use betsy_backend::{catalog, AppError};
use common::seeded_store;

#[tokio::test]
async fn lists_products_for_a_user() {
    let store = seeded_store().await;

    let names = catalog::list_user_products(&store, 3).await.unwrap();

    assert_eq!(names, ["Japanese Kimono", "Painted Shoes", "Painted Vase"]);
}

#[tokio::test]
async fn user_without_products_gets_the_sentinel() {
    let store = seeded_store().await;

    let err = catalog::list_user_products(&store, 2).await.unwrap_err();

    assert_eq!(err.to_string(), "No products for this user");
}

#[tokio::test]
async fn lists_products_for_a_tag() {
    let store = seeded_store().await;

    let wool = store.tag_by_name("wool").await.unwrap().unwrap();
    let names = catalog::list_products_per_tag(&store, wool.id)
        .await
        .unwrap();

    assert_eq!(names, ["Handmade Poncho", "Merino Wool Socks"]);
}

#[tokio::test]
async fn tag_without_products_gets_the_sentinel() {
    let store = seeded_store().await;

    let err = catalog::list_products_per_tag(&store, 99).await.unwrap_err();

    assert_eq!(err.to_string(), "No products with this tag");
}

#[tokio::test]
async fn add_product_to_catalog_inserts_an_association() {
    let store = seeded_store().await;

    catalog::add_product_to_catalog(&store, 2, "Scarf Ring")
        .await
        .unwrap();

    let names = catalog::list_user_products(&store, 2).await.unwrap();
    assert_eq!(names, ["Scarf Ring"]);
}

#[tokio::test]
async fn repeated_adds_create_duplicate_rows() {
    let store = seeded_store().await;

    let before = store.user_product_rows(3).await.unwrap().len();
    catalog::add_product_to_catalog(&store, 3, "Scarf Ring")
        .await
        .unwrap();
    catalog::add_product_to_catalog(&store, 3, "Scarf Ring")
        .await
        .unwrap();

    let rows = store.user_product_rows(3).await.unwrap();
    assert_eq!(rows.len(), before + 2);
}

#[tokio::test]
async fn add_product_validates_user_and_product() {
    let store = seeded_store().await;

    let err = catalog::add_product_to_catalog(&store, 99, "Scarf Ring")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "User does not exist!");

    let err = catalog::add_product_to_catalog(&store, 3, "No Such Product")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Product does not exist!");
}

#[tokio::test]
async fn update_stock_overwrites_the_quantity() {
    let store = seeded_store().await;

    catalog::update_stock(&store, 2, 4).await.unwrap();

    let product = store.product_by_id(2).await.unwrap().unwrap();
    assert_eq!(product.amount_in_stock, 4);
}

#[tokio::test]
async fn update_stock_requires_an_existing_product() {
    let store = seeded_store().await;

    let err = catalog::update_stock(&store, 99, 4).await.unwrap_err();

    assert_eq!(err.to_string(), "Product does not exist!");
}

#[tokio::test]
async fn negative_stock_is_rejected_by_the_store_constraint() {
    let store = seeded_store().await;

    let err = catalog::update_stock(&store, 2, -1).await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));

    let product = store.product_by_id(2).await.unwrap().unwrap();
    assert_eq!(product.amount_in_stock, 15);
}

#[tokio::test]
async fn remove_product_deletes_the_row_and_keeps_history() {
    let store = seeded_store().await;

    catalog::remove_product(&store, 6).await.unwrap();

    assert!(store.product_by_id(6).await.unwrap().is_none());
    // The historical transaction for the Painted Vase survives.
    let transactions = store.transactions_for_product(6).await.unwrap();
    assert_eq!(transactions.len(), 1);

    let err = catalog::remove_product(&store, 6).await.unwrap_err();
    assert_eq!(err.to_string(), "Product does not exist!");
}
