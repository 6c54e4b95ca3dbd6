use crate::domain::model::{scalar_literal, Query, Record, SortDirection};
use crate::domain::ports::StoreClient;
use crate::utils::error::{Result, StoreError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Response;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Media type that makes the service return (and enforce) a single object
/// instead of a one-element array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Real client for the hosted collection store, speaking the Postgrest REST
/// dialect: collections live under `rest/v1/`, equality filters are
/// `field=eq.value` query pairs, and mutations opt into returning the stored
/// representation via the `Prefer` header.
pub struct RestClient {
    http: reqwest::Client,
    base: Url,
}

impl RestClient {
    pub fn new(service_url: &str, api_key: &str) -> Result<Self> {
        let base = Url::parse(service_url)
            .map_err(|e| StoreError::Config {
                message: format!("invalid service URL '{}': {}", service_url, e),
            })?
            .join("rest/v1/")
            .map_err(|e| StoreError::Config {
                message: format!("cannot derive REST endpoint: {}", e),
            })?;

        let key_value = HeaderValue::from_str(api_key).map_err(|_| StoreError::Config {
            message: "API key contains bytes that cannot appear in a header".to_string(),
        })?;
        let bearer =
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| StoreError::Config {
                message: "API key cannot be used as a bearer token".to_string(),
            })?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key_value);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { http, base })
    }

    fn endpoint(&self, collection: &str) -> Result<Url> {
        self.base.join(collection).map_err(|e| StoreError::Config {
            message: format!("invalid collection name '{}': {}", collection, e),
        })
    }

    fn id_filter(id: &Value) -> (String, String) {
        ("id".to_string(), format!("eq.{}", scalar_literal(id)))
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ServiceErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);
        Err(StoreError::Service {
            status: status.as_u16(),
            message,
        })
    }
}

/// Error payload shape the service uses for rejected requests.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    message: String,
}

#[async_trait]
impl StoreClient for RestClient {
    async fn select(&self, collection: &str, query: &Query) -> Result<Vec<Record>> {
        let mut pairs: Vec<(String, String)> =
            vec![("select".to_string(), query.projection().to_string())];
        for (field, value) in &query.filters {
            pairs.push((field.clone(), format!("eq.{}", scalar_literal(value))));
        }
        if let Some(order) = &query.order {
            let direction = match order.direction {
                SortDirection::Ascending => "asc",
                SortDirection::Descending => "desc",
            };
            pairs.push(("order".to_string(), format!("{}.{}", order.field, direction)));
        }
        if let Some(limit) = query.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        tracing::debug!(
            "GET {} ({} filter(s), limit {:?})",
            collection,
            query.filters.len(),
            query.limit
        );
        let response = self
            .http
            .get(self.endpoint(collection)?)
            .query(&pairs)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let rows: Vec<Record> = response.json().await?;
        Ok(rows)
    }

    async fn insert(&self, collection: &str, row: &Record) -> Result<Record> {
        tracing::debug!("POST {}", collection);
        let response = self
            .http
            .post(self.endpoint(collection)?)
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn upsert(
        &self,
        collection: &str,
        row: &Record,
        conflict_target: &str,
    ) -> Result<Record> {
        tracing::debug!("POST {} (merge on {})", collection, conflict_target);
        let response = self
            .http
            .post(self.endpoint(collection)?)
            .query(&[("on_conflict", conflict_target)])
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, collection: &str, id: &Value, patch: &Record) -> Result<Record> {
        tracing::debug!("PATCH {}", collection);
        let response = self
            .http
            .patch(self.endpoint(collection)?)
            .query(&[Self::id_filter(id)])
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(patch)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, collection: &str, id: &Value) -> Result<()> {
        tracing::debug!("DELETE {}", collection);
        let response = self
            .http
            .delete(self.endpoint(collection)?)
            .query(&[Self::id_filter(id)])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
