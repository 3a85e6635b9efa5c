//! Supplier CRUD REST service library.

pub mod error;
pub mod model;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use error::{AppError, ValidationErrors};
pub use model::Supplier;
pub use state::AppState;
pub use store::{ensure_suppliers_table, PgSupplierStore, SupplierStore, UnitOfWork};
pub use routes::{common_routes, supplier_routes};
pub use service::validate_supplier;
