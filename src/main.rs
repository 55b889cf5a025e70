//! Server entrypoint: opens the SQLite pool, ensures tables, mounts routes.

use shoplite::{common_routes, connect, ensure_tables, resource_routes, AppState};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shoplite=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shoplite.db".into());
    let pool = connect(&database_url).await?;
    ensure_tables(&pool).await?;

    let app = axum::Router::new()
        .merge(common_routes())
        .merge(resource_routes(AppState { pool }))
        .layer(RequestBodyLimitLayer::new(1024 * 1024));

    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
