use sqlx::{QueryBuilder, Sqlite};

use crate::models::user::{NewUser, User};

use super::Store;

impl Store {
    pub async fn user_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, shipping_address, billing_address,
                    payment_method, phone, email
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
    }

    pub async fn insert_users(&self, users: &[NewUser]) -> Result<(), sqlx::Error> {
        if users.is_empty() {
            return Ok(());
        }
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO users (first_name, last_name, shipping_address, billing_address,
                                payment_method, phone, email) ",
        );
        builder.push_values(users, |mut row, user| {
            row.push_bind(&user.first_name)
                .push_bind(&user.last_name)
                .push_bind(&user.shipping_address)
                .push_bind(&user.billing_address)
                .push_bind(&user.payment_method)
                .push_bind(&user.phone)
                .push_bind(&user.email);
        });
        builder.build().execute(self.pool()).await?;
        Ok(())
    }
}
