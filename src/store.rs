//! SQLite pool setup and table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Tables created at startup. Foreign keys on orders are declared but the
/// foreign_keys pragma is disabled on the connection, so orphan references
/// are accepted.
const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        sur_name TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS goods (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        price REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        good_id INTEGER NOT NULL REFERENCES goods(id),
        date TEXT NOT NULL,
        status INTEGER NOT NULL DEFAULT 0
    )
    "#,
];

/// Open the pool for `database_url`, creating the database file if absent.
/// The foreign_keys pragma is switched off; sqlx enables it by default,
/// which would reject orders naming nonexistent users or goods.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the three resource tables if they do not exist. Call once at
/// startup before serving requests.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
