use sqlx::{QueryBuilder, Sqlite};

use crate::models::product::{NewProduct, Product};

use super::Store;

const PRODUCT_COLUMNS: &str = "id, name, description, price_in_cents, amount_in_stock";

impl Store {
    pub async fn product_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
    }

    /// Exact name match; the catalog treats names as identifiers here.
    pub async fn product_by_name(&self, name: &str) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(self.pool())
        .await
    }

    pub async fn all_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(self.pool())
        .await
    }

    pub async fn insert_products(&self, products: &[NewProduct]) -> Result<(), sqlx::Error> {
        if products.is_empty() {
            return Ok(());
        }
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO products (name, description, price_in_cents, amount_in_stock) ",
        );
        builder.push_values(products, |mut row, product| {
            row.push_bind(&product.name)
                .push_bind(&product.description)
                .push_bind(product.price_in_cents)
                .push_bind(product.amount_in_stock);
        });
        builder.build().execute(self.pool()).await?;
        Ok(())
    }

    /// Overwrites `amount_in_stock`; the column's CHECK constraint rejects
    /// negative values.
    pub async fn set_stock(&self, product_id: i64, quantity: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE products SET amount_in_stock = ? WHERE id = ?")
            .bind(quantity)
            .bind(product_id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Deletes the product row only; transactions and user associations
    /// referencing it are kept as history.
    pub async fn delete_product(&self, product_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(product_id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
