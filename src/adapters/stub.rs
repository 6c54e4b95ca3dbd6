use crate::domain::model::{Query, Record};
use crate::domain::ports::StoreClient;
use crate::utils::error::{Result, StoreError};
use async_trait::async_trait;
use serde_json::Value;

/// Degraded store handle returned when the real client cannot be built.
///
/// It performs no I/O: every operation answers with an `Unavailable` error
/// carrying the bootstrap failure reason, so callers keep running and see
/// the failure as data instead of a crash.
#[derive(Debug, Clone)]
pub struct UnavailableClient {
    reason: String,
}

impl UnavailableClient {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn unavailable(&self) -> StoreError {
        StoreError::Unavailable {
            reason: self.reason.clone(),
        }
    }
}

#[async_trait]
impl StoreClient for UnavailableClient {
    async fn select(&self, _collection: &str, _query: &Query) -> Result<Vec<Record>> {
        Err(self.unavailable())
    }

    async fn insert(&self, _collection: &str, _row: &Record) -> Result<Record> {
        Err(self.unavailable())
    }

    async fn upsert(
        &self,
        _collection: &str,
        _row: &Record,
        _conflict_target: &str,
    ) -> Result<Record> {
        Err(self.unavailable())
    }

    async fn update(&self, _collection: &str, _id: &Value, _patch: &Record) -> Result<Record> {
        Err(self.unavailable())
    }

    async fn delete(&self, _collection: &str, _id: &Value) -> Result<()> {
        Err(self.unavailable())
    }
}
