//! In-memory store used by handler and route tests.

use super::{Change, SupplierStore, UnitOfWork};
use crate::error::AppError;
use crate::model::Supplier;
use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

/// Test double keeping suppliers in insertion order. With
/// [`reporting_zero_affected`](Self::reporting_zero_affected) every commit
/// claims zero rows and applies nothing, which is how the tests reach the
/// save-failure branch that in production only a lost race can reach. With
/// [`failing`](Self::failing) every operation errors as if the database were
/// unreachable.
#[derive(Default)]
pub struct MemorySupplierStore {
    entries: Mutex<Vec<Supplier>>,
    report_zero_affected: bool,
    fail: bool,
}

impl MemorySupplierStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suppliers(suppliers: Vec<Supplier>) -> Self {
        Self {
            entries: Mutex::new(suppliers),
            ..Self::default()
        }
    }

    pub fn reporting_zero_affected(mut self) -> Self {
        self.report_zero_affected = true;
        self
    }

    /// Make every operation fail, as when the database is unreachable.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Current contents, for asserting on state after a request.
    pub fn snapshot(&self) -> Vec<Supplier> {
        self.entries.lock().unwrap().clone()
    }

    fn check_reachable(&self) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl SupplierStore for MemorySupplierStore {
    async fn list(&self) -> Result<Vec<Supplier>, AppError> {
        self.check_reachable()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, AppError> {
        self.check_reachable()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn commit(&self, uow: UnitOfWork) -> Result<u64, AppError> {
        self.check_reachable()?;
        if self.report_zero_affected {
            return Ok(0);
        }
        let mut entries = self.entries.lock().unwrap();
        let mut affected = 0u64;
        for change in uow.into_changes() {
            match change {
                Change::Insert(supplier) => {
                    entries.push(supplier);
                    affected += 1;
                }
                Change::Update(supplier) => {
                    if let Some(slot) = entries.iter_mut().find(|e| e.id == supplier.id) {
                        *slot = supplier;
                        affected += 1;
                    }
                }
                Change::Delete(id) => {
                    let before = entries.len();
                    entries.retain(|e| e.id != id);
                    affected += (before - entries.len()) as u64;
                }
            }
        }
        Ok(affected)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_reachable()
    }
}
