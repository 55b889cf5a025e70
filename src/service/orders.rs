//! Order CRUD against the orders table.
//!
//! user_id/good_id are written as given; referenced rows are not looked up.

use crate::error::AppError;
use crate::model::{NewOrder, Order};
use sqlx::SqlitePool;

pub struct OrderService;

impl OrderService {
    pub async fn create(pool: &SqlitePool, input: &NewOrder) -> Result<Order, AppError> {
        let res =
            sqlx::query("INSERT INTO orders (user_id, good_id, date, status) VALUES (?, ?, ?, ?)")
                .bind(input.user_id)
                .bind(input.good_id)
                .bind(&input.date)
                .bind(input.status)
                .execute(pool)
                .await?;
        Ok(Order {
            id: res.last_insert_rowid(),
            user_id: input.user_id,
            good_id: input.good_id,
            date: input.date.clone(),
            status: input.status,
        })
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Order>, AppError> {
        let rows =
            sqlx::query_as::<_, Order>("SELECT id, user_id, good_id, date, status FROM orders")
                .fetch_all(pool)
                .await?;
        Ok(rows)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, good_id, date, status FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        input: &NewOrder,
    ) -> Result<Option<Order>, AppError> {
        let res = sqlx::query(
            "UPDATE orders SET user_id = ?, good_id = ?, date = ?, status = ? WHERE id = ?",
        )
        .bind(input.user_id)
        .bind(input.good_id)
        .bind(&input.date)
        .bind(input.status)
        .bind(id)
        .execute(pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Order {
            id,
            user_id: input.user_id,
            good_id: input.good_id,
            date: input.date.clone(),
            status: input.status,
        }))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
