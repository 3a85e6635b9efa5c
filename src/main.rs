//! Service entrypoint: env configuration, tracing, pool, schema bootstrap,
//! route mounting.

use std::sync::Arc;

use axum::Router;
use supplier_api::{
    common_routes, ensure_suppliers_table, supplier_routes, AppState, PgSupplierStore,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("supplier_api=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/suppliers".into());
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    ensure_suppliers_table(&pool).await?;

    let state = AppState {
        store: Arc::new(PgSupplierStore::new(pool)),
    };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(supplier_routes(state));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
