//! Goods CRUD against the goods table.

use crate::error::AppError;
use crate::model::{Good, NewGood};
use sqlx::SqlitePool;

pub struct GoodService;

impl GoodService {
    pub async fn create(pool: &SqlitePool, input: &NewGood) -> Result<Good, AppError> {
        let res = sqlx::query("INSERT INTO goods (name, description, price) VALUES (?, ?, ?)")
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .execute(pool)
            .await?;
        Ok(Good {
            id: res.last_insert_rowid(),
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
        })
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Good>, AppError> {
        let rows = sqlx::query_as::<_, Good>("SELECT id, name, description, price FROM goods")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Good>, AppError> {
        let row = sqlx::query_as::<_, Good>(
            "SELECT id, name, description, price FROM goods WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        input: &NewGood,
    ) -> Result<Option<Good>, AppError> {
        let res = sqlx::query("UPDATE goods SET name = ?, description = ?, price = ? WHERE id = ?")
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(id)
            .execute(pool)
            .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Good {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
        }))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM goods WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
