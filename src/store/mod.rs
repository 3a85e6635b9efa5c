//! Supplier persistence gateway and the per-request unit of work.

mod pg;

#[cfg(test)]
pub mod memory;

pub use pg::{ensure_suppliers_table, PgSupplierStore};

use crate::error::AppError;
use crate::model::Supplier;
use async_trait::async_trait;
use uuid::Uuid;

/// One staged mutation awaiting commit.
#[derive(Clone, Debug)]
pub enum Change {
    Insert(Supplier),
    Update(Supplier),
    Delete(Uuid),
}

/// Per-request staging area for pending mutations. Created at request start,
/// consumed by a single [`SupplierStore::commit`], never shared between
/// requests.
#[derive(Debug, Default)]
pub struct UnitOfWork {
    pending: Vec<Change>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an insert of a new supplier.
    pub fn add(&mut self, supplier: Supplier) {
        self.pending.push(Change::Insert(supplier));
    }

    /// Stage a full-row replace for the supplier's id. The caller confirms
    /// the record exists first; staging an update for an unknown id is a
    /// logic error prevented upstream, not here.
    pub fn update(&mut self, supplier: Supplier) {
        self.pending.push(Change::Update(supplier));
    }

    /// Stage a delete of the given record.
    pub fn remove(&mut self, supplier: &Supplier) {
        self.pending.push(Change::Delete(supplier.id));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Staged changes in staging order.
    pub fn changes(&self) -> &[Change] {
        &self.pending
    }

    /// Consume the unit of work, yielding staged changes in staging order.
    pub fn into_changes(self) -> Vec<Change> {
        self.pending
    }
}

/// CRUD access to the suppliers table. Reads go straight through; writes are
/// staged in a [`UnitOfWork`] and flushed by one atomic commit.
#[async_trait]
pub trait SupplierStore: Send + Sync {
    /// Every supplier currently persisted. Order is not part of the contract.
    async fn list(&self) -> Result<Vec<Supplier>, AppError>;

    /// The supplier with `id`, or `None` when absent. A miss is not an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, AppError>;

    /// Flush the staged changes as one atomic unit and return the total
    /// affected-row count. 0 means nothing changed (not an error); a true
    /// persistence failure surfaces as `Err`.
    async fn commit(&self, uow: UnitOfWork) -> Result<u64, AppError>;

    /// Connectivity probe for the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}
