//! Supplier CRUD routes. The single registration point for the five
//! endpoints.

use crate::handlers::supplier::{create, delete as delete_handler, get_by_id, list, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn supplier_routes(state: AppState) -> Router {
    Router::new()
        .route("/supplier", get(list).post(create))
        .route(
            "/supplier/:id",
            get(get_by_id).put(update).delete(delete_handler),
        )
        .with_state(state)
}
