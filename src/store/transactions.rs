use sqlx::{QueryBuilder, Sqlite};

use crate::models::transaction::{NewTransaction, Transaction};

use super::Store;

const TRANSACTION_COLUMNS: &str =
    "id, product_id, user_id, amount, price_in_cents, trans_date, payment_method";

impl Store {
    pub async fn insert_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(&format!(
            "INSERT INTO transactions (product_id, user_id, amount, price_in_cents,
                                       trans_date, payment_method)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {TRANSACTION_COLUMNS}"
        ))
        .bind(transaction.product_id)
        .bind(transaction.user_id)
        .bind(transaction.amount)
        .bind(transaction.price_in_cents)
        .bind(transaction.trans_date)
        .bind(&transaction.payment_method)
        .fetch_one(self.pool())
        .await
    }

    pub async fn insert_transactions(
        &self,
        transactions: &[NewTransaction],
    ) -> Result<(), sqlx::Error> {
        if transactions.is_empty() {
            return Ok(());
        }
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO transactions (product_id, user_id, amount, price_in_cents,
                                       trans_date, payment_method) ",
        );
        builder.push_values(transactions, |mut row, transaction| {
            row.push_bind(transaction.product_id)
                .push_bind(transaction.user_id)
                .push_bind(transaction.amount)
                .push_bind(transaction.price_in_cents)
                .push_bind(transaction.trans_date)
                .push_bind(&transaction.payment_method);
        });
        builder.build().execute(self.pool()).await?;
        Ok(())
    }

    pub async fn transactions_for_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE product_id = ? ORDER BY id"
        ))
        .bind(product_id)
        .fetch_all(self.pool())
        .await
    }
}
