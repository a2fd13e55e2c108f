mod common;

use betsy_backend::{catalog, Store};
use common::seeded_store;

#[tokio::test]
async fn exact_name_match_ranks_first() {
    let store = seeded_store().await;

    let hits = catalog::search(&store, "painted shoes").await.unwrap();

    assert_eq!(hits[0].name, "Painted Shoes");
    assert_eq!(hits[0].rank, 1);
    assert_eq!(hits[0].score, 100);
}

#[tokio::test]
async fn ranks_are_contiguous_and_scores_non_increasing() {
    let store = seeded_store().await;

    let hits = catalog::search(&store, "wool").await.unwrap();

    assert_eq!(hits.len(), 6);
    for (index, hit) in hits.iter().enumerate() {
        assert_eq!(hit.rank, index + 1);
    }
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let store = seeded_store().await;

    let lower = catalog::search(&store, "painted shoes").await.unwrap();
    let mixed = catalog::search(&store, "pAinted ShoEs").await.unwrap();

    assert_eq!(lower[0].name, mixed[0].name);
    assert_eq!(lower[0].score, mixed[0].score);
}

#[tokio::test]
async fn description_matches_count_too() {
    let store = seeded_store().await;

    // "Cotton Kimono for Women" only appears in the description.
    let hits = catalog::search(&store, "cotton kimono for women")
        .await
        .unwrap();

    assert_eq!(hits[0].name, "Japanese Kimono");
    assert_eq!(hits[0].score, 100);
}

#[tokio::test]
async fn search_has_no_side_effects() {
    let store = seeded_store().await;

    catalog::search(&store, "poncho").await.unwrap();

    let products = store.all_products().await.unwrap();
    assert_eq!(products.len(), 6);
    assert_eq!(products[0].amount_in_stock, 34);
}

#[tokio::test]
async fn empty_catalog_yields_no_hits() {
    let store = Store::in_memory().await.unwrap();
    store.init_schema().await.unwrap();

    let hits = catalog::search(&store, "anything").await.unwrap();

    assert!(hits.is_empty());
}
