use betsy_backend::{seed, Store};

/// Fresh in-memory store with the schema and fixture catalog in place.
pub async fn seeded_store() -> Store {
    let store = Store::in_memory().await.expect("in-memory store");
    store.init_schema().await.expect("schema");
    seed::populate(&store).await.expect("fixtures");
    store
}
