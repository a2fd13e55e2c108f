use sqlx::{QueryBuilder, Sqlite};

use crate::models::product::Product;
use crate::models::tag::Tag;

use super::Store;

impl Store {
    /// Tag names are unique, so this resolves at most one row.
    pub async fn tag_by_name(&self, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(self.pool())
            .await
    }

    pub async fn insert_tags(&self, names: &[&str]) -> Result<(), sqlx::Error> {
        if names.is_empty() {
            return Ok(());
        }
        let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO tags (name) ");
        builder.push_values(names, |mut row, name| {
            row.push_bind(*name);
        });
        builder.build().execute(self.pool()).await?;
        Ok(())
    }

    pub async fn insert_product_tags(&self, links: &[(i64, i64)]) -> Result<(), sqlx::Error> {
        if links.is_empty() {
            return Ok(());
        }
        let mut builder =
            QueryBuilder::<Sqlite>::new("INSERT INTO product_tags (product_id, tag_id) ");
        builder.push_values(links, |mut row, (product_id, tag_id)| {
            row.push_bind(*product_id).push_bind(*tag_id);
        });
        builder.build().execute(self.pool()).await?;
        Ok(())
    }

    pub async fn products_for_tag(&self, tag_id: i64) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT p.id, p.name, p.description, p.price_in_cents, p.amount_in_stock
             FROM products p
             JOIN product_tags pt ON pt.product_id = p.id
             WHERE pt.tag_id = ?
             ORDER BY p.id",
        )
        .bind(tag_id)
        .fetch_all(self.pool())
        .await
    }
}
