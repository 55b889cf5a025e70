//! User CRUD against the users table.

use crate::error::AppError;
use crate::model::{NewUser, User};
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

/// One-way digest stored instead of the plaintext. Unsalted, so identical
/// passwords always produce identical stored values.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub struct UserService;

impl UserService {
    /// Insert one user with the password digested. Returns the input fields
    /// plus the assigned id. No duplicate detection.
    pub async fn create(pool: &SqlitePool, input: &NewUser) -> Result<User, AppError> {
        let password = password_digest(&input.password);
        let res = sqlx::query(
            "INSERT INTO users (username, sur_name, email, password) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.username)
        .bind(&input.sur_name)
        .bind(&input.email)
        .bind(&password)
        .execute(pool)
        .await?;
        Ok(User {
            id: res.last_insert_rowid(),
            username: input.username.clone(),
            sur_name: input.sur_name.clone(),
            email: input.email.clone(),
            password,
        })
    }

    /// All rows in natural storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, username, sur_name, email, password FROM users",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, username, sur_name, email, password FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Full replacement of every non-id column, password re-digested.
    /// Returns None when no row matched; never creates a row.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        input: &NewUser,
    ) -> Result<Option<User>, AppError> {
        let password = password_digest(&input.password);
        let res = sqlx::query(
            "UPDATE users SET username = ?, sur_name = ?, email = ?, password = ? WHERE id = ?",
        )
        .bind(&input.username)
        .bind(&input.sur_name)
        .bind(&input.email)
        .bind(&password)
        .bind(id)
        .execute(pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(User {
            id,
            username: input.username.clone(),
            sur_name: input.sur_name.clone(),
            email: input.email.clone(),
            password,
        }))
    }

    /// Delete by id. A missing row is not an error.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
