use sqlx::{QueryBuilder, Sqlite};

use crate::models::product::Product;
use crate::models::user::UserProduct;

use super::Store;

impl Store {
    /// Inserts one association row and returns its id. No dedup: calling
    /// twice with the same pair yields two rows.
    pub async fn insert_user_product(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO user_products (user_id, product_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(product_id)
            .execute(self.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn insert_user_products(&self, links: &[(i64, i64)]) -> Result<(), sqlx::Error> {
        if links.is_empty() {
            return Ok(());
        }
        let mut builder =
            QueryBuilder::<Sqlite>::new("INSERT INTO user_products (user_id, product_id) ");
        builder.push_values(links, |mut row, (user_id, product_id)| {
            row.push_bind(*user_id).push_bind(*product_id);
        });
        builder.build().execute(self.pool()).await?;
        Ok(())
    }

    pub async fn products_for_user(&self, user_id: i64) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT p.id, p.name, p.description, p.price_in_cents, p.amount_in_stock
             FROM products p
             JOIN user_products up ON up.product_id = p.id
             WHERE up.user_id = ?
             ORDER BY up.id",
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await
    }

    pub async fn user_product_rows(&self, user_id: i64) -> Result<Vec<UserProduct>, sqlx::Error> {
        sqlx::query_as::<_, UserProduct>(
            "SELECT id, user_id, product_id FROM user_products WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await
    }
}
