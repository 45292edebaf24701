//! Relay runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the relay
//! service. Request handling never reads process-wide environment variables; the binary
//! collects them and hands the raw values to the constructors here.

use crate::constants::{DEFAULT_COMPLETION_API_URL, DEFAULT_COMPLETION_MODEL, DEFAULT_RECORD_TABLE};
use crate::{RelayError, RelayResult};

/// Settings for the chat-completion API.
#[derive(Clone)]
pub struct CompletionConfig {
    api_key: String,
    api_url: String,
    model: String,
}

impl CompletionConfig {
    /// Create a new `CompletionConfig`.
    ///
    /// `api_key` is required; a missing or blank key is a misconfiguration and fails here
    /// rather than on the first request. Blank `api_url`/`model` fall back to defaults.
    pub fn new(
        api_key: Option<String>,
        api_url: Option<String>,
        model: Option<String>,
    ) -> RelayResult<Self> {
        let api_key = non_blank(api_key).ok_or_else(|| {
            RelayError::Misconfiguration("COMPLETION_API_KEY is not configured".into())
        })?;

        Ok(Self {
            api_key,
            api_url: non_blank(api_url).unwrap_or_else(|| DEFAULT_COMPLETION_API_URL.into()),
            model: non_blank(model).unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.into()),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Connection settings for the record store.
#[derive(Clone)]
pub struct StoreConfig {
    base_url: String,
    service_key: String,
    table: String,
}

impl StoreConfig {
    /// Build store settings from optional raw values.
    ///
    /// Returns `None` when either the URL or the key is missing; persistence is best-effort
    /// so an unconfigured store disables it instead of failing startup.
    pub fn from_values(
        base_url: Option<String>,
        service_key: Option<String>,
        table: Option<String>,
    ) -> Option<Self> {
        let base_url = non_blank(base_url)?;
        let service_key = non_blank(service_key)?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            table: non_blank(table).unwrap_or_else(|| DEFAULT_RECORD_TABLE.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service_key(&self) -> &str {
        &self.service_key
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// PostgREST insert endpoint for the configured table.
    pub fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("service_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

/// Relay configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    completion: CompletionConfig,
    store: Option<StoreConfig>,
}

impl RelayConfig {
    pub fn new(completion: CompletionConfig, store: Option<StoreConfig>) -> Self {
        Self { completion, store }
    }

    pub fn completion(&self) -> &CompletionConfig {
        &self.completion
    }

    pub fn store(&self) -> Option<&StoreConfig> {
        self.store.as_ref()
    }
}

/// Treat unset and whitespace-only values the same way.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
