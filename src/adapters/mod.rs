pub mod rest;
pub mod stub;

use crate::config::StoreConfig;
use crate::domain::model::{Query, Record};
use crate::domain::ports::StoreClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub use rest::RestClient;
pub use stub::UnavailableClient;

/// A handle to the collection store, selected once at startup.
///
/// Construction can pick the degraded variant but can never fail: callers
/// always get something that implements the full `StoreClient` surface.
pub enum StoreHandle {
    Rest(RestClient),
    Unavailable(UnavailableClient),
}

/// Produces a store handle from the anon-key configuration.
///
/// Missing credentials are warned about and left to fail at construction
/// time; any construction failure degrades to the unavailable handle.
pub fn connect(config: &StoreConfig) -> StoreHandle {
    connect_with_key(config, &config.anon_key)
}

/// Like [`connect`], but presents the service role key when one is
/// configured. Only the seed tool should use this.
pub fn connect_privileged(config: &StoreConfig) -> StoreHandle {
    connect_with_key(config, config.privileged_key())
}

fn connect_with_key(config: &StoreConfig, api_key: &str) -> StoreHandle {
    if config.service_url.is_empty() || api_key.is_empty() {
        tracing::warn!("Collection store credentials are missing");
    }

    match RestClient::new(&config.service_url, api_key) {
        Ok(client) => StoreHandle::Rest(client),
        Err(e) => {
            tracing::warn!("Using the unavailable store client: {}", e);
            StoreHandle::Unavailable(UnavailableClient::new(e.user_friendly_message()))
        }
    }
}

#[async_trait]
impl StoreClient for StoreHandle {
    async fn select(&self, collection: &str, query: &Query) -> Result<Vec<Record>> {
        match self {
            StoreHandle::Rest(client) => client.select(collection, query).await,
            StoreHandle::Unavailable(client) => client.select(collection, query).await,
        }
    }

    async fn insert(&self, collection: &str, row: &Record) -> Result<Record> {
        match self {
            StoreHandle::Rest(client) => client.insert(collection, row).await,
            StoreHandle::Unavailable(client) => client.insert(collection, row).await,
        }
    }

    async fn upsert(
        &self,
        collection: &str,
        row: &Record,
        conflict_target: &str,
    ) -> Result<Record> {
        match self {
            StoreHandle::Rest(client) => client.upsert(collection, row, conflict_target).await,
            StoreHandle::Unavailable(client) => {
                client.upsert(collection, row, conflict_target).await
            }
        }
    }

    async fn update(&self, collection: &str, id: &Value, patch: &Record) -> Result<Record> {
        match self {
            StoreHandle::Rest(client) => client.update(collection, id, patch).await,
            StoreHandle::Unavailable(client) => client.update(collection, id, patch).await,
        }
    }

    async fn delete(&self, collection: &str, id: &Value) -> Result<()> {
        match self {
            StoreHandle::Rest(client) => client.delete(collection, id).await,
            StoreHandle::Unavailable(client) => client.delete(collection, id).await,
        }
    }
}
