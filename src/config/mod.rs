use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const ENV_SERVICE_URL: &str = "ROWSTORE_URL";
pub const ENV_ANON_KEY: &str = "ROWSTORE_ANON_KEY";
pub const ENV_SERVICE_ROLE_KEY: &str = "ROWSTORE_SERVICE_ROLE_KEY";

/// Connection settings for the hosted collection store.
///
/// The anon key is the unprivileged key ordinary clients use; the service
/// role key is admin-grade and only the seed tool should ever hold it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub service_url: String,
    pub anon_key: String,
    pub service_role_key: Option<String>,
}

impl StoreConfig {
    pub fn new(service_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            anon_key: anon_key.into(),
            service_role_key: None,
        }
    }

    pub fn with_service_role_key(mut self, key: impl Into<String>) -> Self {
        self.service_role_key = Some(key.into());
        self
    }

    /// Reads the configuration from the process environment. Missing values
    /// become empty fields with a warning; degrading to an unusable client
    /// beats crashing the caller.
    pub fn from_env() -> Self {
        let service_url = std::env::var(ENV_SERVICE_URL).unwrap_or_default();
        let anon_key = std::env::var(ENV_ANON_KEY).unwrap_or_default();
        let service_role_key = std::env::var(ENV_SERVICE_ROLE_KEY).ok().filter(|k| !k.is_empty());

        if service_url.is_empty() || anon_key.is_empty() {
            tracing::warn!(
                "Collection store credentials are missing ({} / {})",
                ENV_SERVICE_URL,
                ENV_ANON_KEY
            );
        }

        Self {
            service_url,
            anon_key,
            service_role_key,
        }
    }

    /// The key a privileged connection should present, falling back to the
    /// anon key when no service role key is configured.
    pub fn privileged_key(&self) -> &str {
        self.service_role_key.as_deref().unwrap_or(&self.anon_key)
    }

    /// Hard check for the seed tool: URL and service role key must both be
    /// present. Library paths never call this.
    pub fn require_privileged(&self) -> Result<()> {
        if self.service_url.is_empty() {
            return Err(StoreError::MissingConfig {
                field: ENV_SERVICE_URL.to_string(),
            });
        }
        match self.service_role_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(StoreError::MissingConfig {
                field: ENV_SERVICE_ROLE_KEY.to_string(),
            }),
        }
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service_url", &self.service_url)?;
        validate_non_empty_string("anon_key", &self.anon_key)?;
        Ok(())
    }
}
