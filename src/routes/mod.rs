//! Route registration.

pub mod common;
pub mod supplier;

pub use common::common_routes;
pub use supplier::supplier_routes;
