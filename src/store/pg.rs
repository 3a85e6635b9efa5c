//! PostgreSQL-backed supplier store.

use super::{Change, SupplierStore, UnitOfWork};
use crate::error::AppError;
use crate::model::{Supplier, DOCUMENT_MAX_CHARS, NAME_MAX_CHARS};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Create the suppliers table if it does not exist. Column bounds mirror the
/// rules in `service::validate_supplier`.
pub async fn ensure_suppliers_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS suppliers (
            id UUID PRIMARY KEY,
            name VARCHAR({}) NOT NULL,
            document VARCHAR({}) NOT NULL,
            active BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
        NAME_MAX_CHARS, DOCUMENT_MAX_CHARS
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Supplier gateway over a sqlx connection pool. The pool is shared across
/// requests; each request's staged writes go through [`SupplierStore::commit`]
/// inside one transaction.
#[derive(Clone)]
pub struct PgSupplierStore {
    pool: PgPool,
}

impl PgSupplierStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierStore for PgSupplierStore {
    async fn list(&self) -> Result<Vec<Supplier>, AppError> {
        tracing::debug!("list suppliers");
        let rows = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, document, active FROM suppliers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, AppError> {
        tracing::debug!(id = %id, "find supplier");
        let row = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, document, active FROM suppliers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn commit(&self, uow: UnitOfWork) -> Result<u64, AppError> {
        let mut affected = 0u64;
        let mut tx = self.pool.begin().await?;
        for change in uow.into_changes() {
            affected += match change {
                Change::Insert(s) => {
                    tracing::debug!(id = %s.id, "insert supplier");
                    sqlx::query(
                        "INSERT INTO suppliers (id, name, document, active) VALUES ($1, $2, $3, $4)",
                    )
                    .bind(s.id)
                    .bind(&s.name)
                    .bind(&s.document)
                    .bind(s.active)
                    .execute(&mut *tx)
                    .await?
                    .rows_affected()
                }
                Change::Update(s) => {
                    tracing::debug!(id = %s.id, "update supplier");
                    sqlx::query(
                        "UPDATE suppliers SET name = $2, document = $3, active = $4 WHERE id = $1",
                    )
                    .bind(s.id)
                    .bind(&s.name)
                    .bind(&s.document)
                    .bind(s.active)
                    .execute(&mut *tx)
                    .await?
                    .rows_affected()
                }
                Change::Delete(id) => {
                    tracing::debug!(id = %id, "delete supplier");
                    sqlx::query("DELETE FROM suppliers WHERE id = $1")
                        .bind(id)
                        .execute(&mut *tx)
                        .await?
                        .rows_affected()
                }
            };
        }
        tx.commit().await?;
        Ok(affected)
    }

    async fn ping(&self) -> Result<(), AppError> {
        tracing::debug!("ping");
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
