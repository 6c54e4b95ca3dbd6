use crate::domain::model::{Query, Record};
use crate::domain::ports::StoreClient;
use serde_json::Value;

/// The data-access layer: four operations over named collections, each a
/// single round trip through the injected client handle.
///
/// No error crosses this boundary. Every failure — degraded client,
/// transport, or service-reported — is logged with the collection name and
/// collapsed into the operation's sentinel: an empty vec for `fetch`,
/// `None` for `insert`/`update`, `false` for `delete`.
pub struct DataAccess<C: StoreClient> {
    client: C,
}

impl<C: StoreClient> DataAccess<C> {
    /// Wraps a client handle selected at process start.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Reads rows from a collection. An omitted/default query means
    /// wildcard projection with no filter, no order and no limit.
    pub async fn fetch(&self, collection: &str, query: Query) -> Vec<Record> {
        match self.client.select(collection, &query).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("Error fetching {}: {}", collection, e);
                Vec::new()
            }
        }
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert(&self, collection: &str, row: Record) -> Option<Record> {
        match self.client.insert(collection, &row).await {
            Ok(stored) => Some(stored),
            Err(e) => {
                tracing::error!("Error inserting into {}: {}", collection, e);
                None
            }
        }
    }

    /// Patches the row whose `id` field equals `id`. Exactly one match is
    /// the expectation; anything else is the service's call.
    pub async fn update(
        &self,
        collection: &str,
        id: impl Into<Value>,
        patch: Record,
    ) -> Option<Record> {
        let id = id.into();
        match self.client.update(collection, &id, &patch).await {
            Ok(stored) => Some(stored),
            Err(e) => {
                tracing::error!("Error updating {}: {}", collection, e);
                None
            }
        }
    }

    /// Deletes the row whose `id` field equals `id`.
    pub async fn delete(&self, collection: &str, id: impl Into<Value>) -> bool {
        let id = id.into();
        match self.client.delete(collection, &id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error deleting from {}: {}", collection, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{Result, StoreError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct FailingClient;

    #[async_trait]
    impl StoreClient for FailingClient {
        async fn select(&self, _collection: &str, _query: &Query) -> Result<Vec<Record>> {
            Err(StoreError::Unavailable {
                reason: "down".to_string(),
            })
        }

        async fn insert(&self, _collection: &str, _row: &Record) -> Result<Record> {
            Err(StoreError::Service {
                status: 500,
                message: "boom".to_string(),
            })
        }

        async fn upsert(
            &self,
            _collection: &str,
            _row: &Record,
            _conflict_target: &str,
        ) -> Result<Record> {
            Err(StoreError::Unavailable {
                reason: "down".to_string(),
            })
        }

        async fn update(&self, _collection: &str, _id: &Value, _patch: &Record) -> Result<Record> {
            Err(StoreError::Service {
                status: 500,
                message: "boom".to_string(),
            })
        }

        async fn delete(&self, _collection: &str, _id: &Value) -> Result<()> {
            Err(StoreError::Unavailable {
                reason: "down".to_string(),
            })
        }
    }

    /// Succeeds with a fixed payload and records what it was asked.
    #[derive(Clone, Default)]
    struct RecordingClient {
        rows: Vec<Record>,
        last_query: Arc<Mutex<Option<Query>>>,
        last_id: Arc<Mutex<Option<Value>>>,
    }

    impl RecordingClient {
        fn with_rows(rows: Vec<Record>) -> Self {
            Self {
                rows,
                ..Self::default()
            }
        }

        fn single(&self) -> Record {
            self.rows.first().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl StoreClient for RecordingClient {
        async fn select(&self, _collection: &str, query: &Query) -> Result<Vec<Record>> {
            *self.last_query.lock().unwrap() = Some(query.clone());
            Ok(self.rows.clone())
        }

        async fn insert(&self, _collection: &str, _row: &Record) -> Result<Record> {
            Ok(self.single())
        }

        async fn upsert(
            &self,
            _collection: &str,
            _row: &Record,
            _conflict_target: &str,
        ) -> Result<Record> {
            Ok(self.single())
        }

        async fn update(&self, _collection: &str, id: &Value, _patch: &Record) -> Result<Record> {
            *self.last_id.lock().unwrap() = Some(id.clone());
            Ok(self.single())
        }

        async fn delete(&self, _collection: &str, id: &Value) -> Result<()> {
            *self.last_id.lock().unwrap() = Some(id.clone());
            Ok(())
        }
    }

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_failing_client_collapses_to_sentinels() {
        let access = DataAccess::new(FailingClient);

        assert!(access.fetch("provider", Query::new()).await.is_empty());
        assert!(access
            .insert("provider", record(json!({"id": "1"})))
            .await
            .is_none());
        assert!(access
            .update("provider", "1", record(json!({"firstName": "Ann"})))
            .await
            .is_none());
        assert!(!access.delete("provider", "1").await);
    }

    #[tokio::test]
    async fn test_healthy_client_payload_passes_through_unmodified() {
        let rows = vec![
            record(json!({"id": "1", "firstName": "John"})),
            record(json!({"id": "2", "firstName": "Sarah"})),
        ];
        let access = DataAccess::new(RecordingClient::with_rows(rows.clone()));

        assert_eq!(access.fetch("provider", Query::new()).await, rows);
        assert_eq!(
            access.insert("provider", rows[0].clone()).await,
            Some(rows[0].clone())
        );
        assert_eq!(
            access.update("provider", "1", rows[0].clone()).await,
            Some(rows[0].clone())
        );
        assert!(access.delete("provider", "1").await);
    }

    #[tokio::test]
    async fn test_fetch_filter_is_a_single_equality_condition() {
        let client = RecordingClient::default();
        let access = DataAccess::new(client.clone());

        let query = Query::new()
            .columns("id,status")
            .eq("status", "active")
            .limit(5);
        access.fetch("provider", query).await;

        let seen = client.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(seen.filters, vec![("status".to_string(), json!("active"))]);
        assert_eq!(seen.projection(), "id,status");
        assert_eq!(seen.limit, Some(5));
    }

    #[tokio::test]
    async fn test_fetch_without_options_is_wildcard_unfiltered() {
        let client = RecordingClient::default();
        let access = DataAccess::new(client.clone());

        access.fetch("provider", Query::default()).await;

        let seen = client.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(seen.projection(), "*");
        assert!(seen.filters.is_empty());
        assert!(seen.order.is_none());
        assert!(seen.limit.is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete_pass_the_identifier_through() {
        let client = RecordingClient::default();
        let access = DataAccess::new(client.clone());

        access
            .update("provider", "3", record(json!({"id": "999", "firstName": "Ann"})))
            .await;
        assert_eq!(client.last_id.lock().unwrap().clone(), Some(json!("3")));

        access.delete("provider", 7).await;
        assert_eq!(client.last_id.lock().unwrap().clone(), Some(json!(7)));
    }
}
