use crate::domain::model::{Query, Record};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Capability surface of a store handle: every operation the crate issues
/// against the remote collection store goes through this trait.
///
/// Both the real REST client and the degraded stub implement it, so callers
/// can only tell them apart by the errors that come back.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Reads rows from a named collection, honoring projection, equality
    /// filters, ordering and limit from the query descriptor.
    async fn select(&self, collection: &str, query: &Query) -> Result<Vec<Record>>;

    /// Inserts one row and returns the stored representation.
    async fn insert(&self, collection: &str, row: &Record) -> Result<Record>;

    /// Inserts or merges one row, resolving conflicts on the given column.
    async fn upsert(&self, collection: &str, row: &Record, conflict_target: &str)
        -> Result<Record>;

    /// Applies a partial update to the row whose `id` equals `id` and
    /// returns the updated representation. Row-count expectations are the
    /// service's business, not ours.
    async fn update(&self, collection: &str, id: &Value, patch: &Record) -> Result<Record>;

    /// Deletes the row whose `id` equals `id`.
    async fn delete(&self, collection: &str, id: &Value) -> Result<()>;
}
