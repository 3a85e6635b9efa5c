//! The Supplier domain record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted `name`, mirrored by the VARCHAR bound in the table.
pub const NAME_MAX_CHARS: usize = 200;

/// Longest accepted `document` (a tax-id style number), mirrored by the
/// VARCHAR bound in the table.
pub const DOCUMENT_MAX_CHARS: usize = 14;

/// A vendor record. Wire shape is `{id, name, document, active}`.
///
/// Every field takes a serde default so that an incomplete write payload
/// still deserializes; required-ness and length bounds are enforced by
/// `service::validate_supplier`, which reports all offending fields at once.
/// A nil `id` on create means the server generates one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Supplier {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub active: bool,
}
