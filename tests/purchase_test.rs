mod common;

use betsy_backend::{catalog, AppError};
use common::seeded_store;

#[tokio::test]
async fn purchase_records_transaction_and_decrements_stock() {
    let store = seeded_store().await;

    // Japanese Kimono: 8800 cents, 15 in stock, one historical transaction.
    let transaction = catalog::purchase_product(&store, 2, 3, 1).await.unwrap();

    assert_eq!(transaction.product_id, 2);
    assert_eq!(transaction.user_id, 3);
    assert_eq!(transaction.amount, 1);
    assert_eq!(transaction.price_in_cents, 8800);
    assert_eq!(transaction.payment_method, "Ideal");

    let product = store.product_by_id(2).await.unwrap().unwrap();
    assert_eq!(product.amount_in_stock, 14);

    let transactions = store.transactions_for_product(2).await.unwrap();
    assert_eq!(transactions.len(), 2);
}

#[tokio::test]
async fn total_price_is_unit_price_times_quantity() {
    let store = seeded_store().await;

    let transaction = catalog::purchase_product(&store, 2, 3, 3).await.unwrap();

    assert_eq!(transaction.price_in_cents, 3 * 8800);
    let product = store.product_by_id(2).await.unwrap().unwrap();
    assert_eq!(product.amount_in_stock, 12);
}

#[tokio::test]
async fn unknown_product_is_rejected() {
    let store = seeded_store().await;

    let err = catalog::purchase_product(&store, 99, 3, 1).await.unwrap_err();

    assert_eq!(err.to_string(), "Product does not exist!");
}

#[tokio::test]
async fn unknown_buyer_is_rejected() {
    let store = seeded_store().await;

    let err = catalog::purchase_product(&store, 2, 99, 1).await.unwrap_err();

    assert_eq!(err.to_string(), "User does not exist!");
}

#[tokio::test]
async fn negative_quantity_is_rejected() {
    let store = seeded_store().await;

    let err = catalog::purchase_product(&store, 2, 3, -1).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn insufficient_stock_is_rejected() {
    let store = seeded_store().await;

    let err = catalog::purchase_product(&store, 2, 3, 16).await.unwrap_err();

    assert_eq!(err.to_string(), "Not enough in stock!");
}

#[tokio::test]
async fn rejected_purchases_leave_the_store_untouched() {
    let store = seeded_store().await;

    let attempts = [(99, 3, 1), (2, 99, 1), (2, 3, -1), (2, 3, 16)];
    for (product_id, buyer_id, quantity) in attempts {
        catalog::purchase_product(&store, product_id, buyer_id, quantity)
            .await
            .unwrap_err();
    }

    let product = store.product_by_id(2).await.unwrap().unwrap();
    assert_eq!(product.amount_in_stock, 15);
    let transactions = store.transactions_for_product(2).await.unwrap();
    assert_eq!(transactions.len(), 1);
}

#[tokio::test]
async fn buying_the_whole_stock_empties_it_but_never_goes_below_zero() {
    let store = seeded_store().await;

    // Scarf Ring: 5 in stock.
    catalog::purchase_product(&store, 4, 1, 5).await.unwrap();

    let product = store.product_by_id(4).await.unwrap().unwrap();
    assert_eq!(product.amount_in_stock, 0);

    let err = catalog::purchase_product(&store, 4, 1, 1).await.unwrap_err();
    assert_eq!(err.to_string(), "Not enough in stock!");
    let product = store.product_by_id(4).await.unwrap().unwrap();
    assert_eq!(product.amount_in_stock, 0);
}

#[tokio::test]
async fn zero_quantity_purchase_is_a_free_no_op_on_stock() {
    let store = seeded_store().await;

    let transaction = catalog::purchase_product(&store, 2, 3, 0).await.unwrap();

    assert_eq!(transaction.price_in_cents, 0);
    let product = store.product_by_id(2).await.unwrap().unwrap();
    assert_eq!(product.amount_in_stock, 15);
}
