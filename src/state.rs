//! Shared application state for all routes.

use crate::store::SupplierStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The persistence gateway. Shared across requests; each request stages
    /// its own unit of work against it.
    pub store: Arc<dyn SupplierStore>,
}
