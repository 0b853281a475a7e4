//! Model list fetching.
//!
//! [`ModelFetcher`] turns a provider template into a list of model names.
//! Static and manual providers never touch the network; dynamic providers go
//! through a TTL cache, the provider's list endpoint, and a fallback chain
//! that keeps the answer useful when the endpoint is down:
//!
//! 1. fresh cache entry
//! 2. live fetch (cached on success)
//! 3. expired cache entry, if non-empty
//! 4. the template's curated `popular_models`
//! 5. an empty list
//!
//! `fetch_models` therefore never fails; [`fetch_report`][ModelFetcher::fetch_report]
//! exposes where the list came from and what went wrong, for callers that
//! need to surface degraded results.

mod cache;
mod parse;

use std::collections::HashMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use thiserror::Error;

use crate::defaults;
use crate::error::{LlmError, Result};
use crate::types::{ModelFetching, ProviderTemplate};

use cache::ModelCache;

pub use cache::CacheInfo;

/// Why a model list fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Template is dynamic but declares no model endpoint
    #[error("No model endpoint configured for provider '{0}'")]
    MissingEndpoint(String),

    /// Relative endpoint with no base URL to resolve against
    #[error("No base URL available to resolve relative endpoint '{0}'")]
    MissingBaseUrl(String),

    /// Request exceeded the fetch timeout
    #[error("API request timed out after {0}s")]
    Timeout(u64),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Connection(String),

    /// Endpoint answered with a non-200 status
    #[error("API returned status {0}")]
    Status(u16),

    /// Response body was not valid JSON
    #[error("Invalid JSON in model list response: {0}")]
    Json(String),

    /// Response was valid JSON in none of the known shapes
    #[error("Unrecognized model list format ({0})")]
    UnrecognizedFormat(String),

    /// Endpoint answered 200 with zero models
    #[error("API returned empty model list")]
    EmptyModelList,
}

impl From<FetchError> for LlmError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::MissingEndpoint(_) | FetchError::MissingBaseUrl(_) => {
                LlmError::ConfigurationError(err.to_string())
            }
            FetchError::Timeout(_) => LlmError::TimeoutError(err.to_string()),
            FetchError::Connection(_) => LlmError::ConnectionError(err.to_string()),
            FetchError::Status(code) => LlmError::api_error(code, err.to_string()),
            FetchError::Json(_) => LlmError::JsonError(err.to_string()),
            FetchError::UnrecognizedFormat(_) | FetchError::EmptyModelList => {
                LlmError::ParseError(err.to_string())
            }
        }
    }
}

/// Where a fetched model list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    /// Fresh cache entry
    Cache,
    /// Live fetch from the provider
    Network,
    /// Expired cache entry served as fallback
    ExpiredCache,
    /// Template's curated list served as fallback
    PopularModels,
    /// Static template, curated list is the answer
    Static,
    /// Manual template, users type model names themselves
    Manual,
    /// Nothing to serve
    Empty,
}

impl ModelSource {
    /// Whether this source means the fetch degraded.
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            ModelSource::ExpiredCache | ModelSource::PopularModels | ModelSource::Empty
        )
    }
}

/// A fetched model list plus its provenance.
#[derive(Debug, Clone)]
pub struct FetchReport {
    /// The model names, in provider order
    pub models: Vec<String>,
    /// Where the list came from
    pub source: ModelSource,
    /// The fetch failure, when `source` is a fallback
    pub error: Option<FetchError>,
}

impl FetchReport {
    fn new(models: Vec<String>, source: ModelSource) -> Self {
        Self {
            models,
            source,
            error: None,
        }
    }

    /// Whether the list was served from the fresh cache.
    pub fn from_cache(&self) -> bool {
        self.source == ModelSource::Cache
    }

    /// Whether the list is a degraded answer.
    pub fn is_fallback(&self) -> bool {
        self.source.is_fallback()
    }
}

/// Runtime connection settings for one provider, as entered by the user.
///
/// Secrets are wrapped so they stay out of `Debug` output and logs.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    /// API key sent as a bearer token
    pub api_key: Option<SecretString>,
    /// Base URL override for relative endpoints
    pub api_base: Option<String>,
    /// Provider-specific extras (regions, deployment names, ...)
    pub extra: HashMap<String, String>,
}

impl ProviderCredentials {
    /// Empty credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the base URL override.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Add a provider-specific extra.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Fetches and caches provider model lists.
///
/// The fetcher owns its cache, so separate instances do not share state;
/// construct one and hand it around where a shared view is wanted.
#[derive(Debug)]
pub struct ModelFetcher {
    cache: ModelCache,
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for ModelFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFetcher {
    /// Fetcher with the default request timeout.
    pub fn new() -> Self {
        Self::with_timeout(defaults::http::REQUEST_TIMEOUT)
    }

    /// Fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_client(reqwest::Client::new(), timeout)
    }

    /// Fetcher reusing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            cache: ModelCache::new(),
            client,
            timeout,
        }
    }

    /// Model names for a template, without credentials.
    ///
    /// Dynamic providers whose endpoint needs a key or a base URL will fall
    /// back; pass credentials through [`fetch_models_with`][Self::fetch_models_with]
    /// when you have them.
    pub async fn fetch_models(&self, template: &ProviderTemplate) -> Vec<String> {
        self.fetch_report_with(template, &ProviderCredentials::default())
            .await
            .models
    }

    /// Model names for a template, using the given credentials.
    pub async fn fetch_models_with(
        &self,
        template: &ProviderTemplate,
        credentials: &ProviderCredentials,
    ) -> Vec<String> {
        self.fetch_report_with(template, credentials).await.models
    }

    /// Full fetch report for a template, without credentials.
    pub async fn fetch_report(&self, template: &ProviderTemplate) -> FetchReport {
        self.fetch_report_with(template, &ProviderCredentials::default())
            .await
    }

    /// Full fetch report for a template: the models, where they came from,
    /// and the error behind any fallback.
    pub async fn fetch_report_with(
        &self,
        template: &ProviderTemplate,
        credentials: &ProviderCredentials,
    ) -> FetchReport {
        match template.model_fetching {
            ModelFetching::Static => {
                FetchReport::new(template.popular_models.clone(), ModelSource::Static)
            }
            ModelFetching::Manual => FetchReport::new(Vec::new(), ModelSource::Manual),
            ModelFetching::Dynamic => self.fetch_dynamic(template, credentials).await,
        }
    }

    async fn fetch_dynamic(
        &self,
        template: &ProviderTemplate,
        credentials: &ProviderCredentials,
    ) -> FetchReport {
        if let Some(models) = self.cache.valid_models(&template.id) {
            tracing::debug!(
                provider = %template.id,
                count = models.len(),
                "serving model list from cache"
            );
            return FetchReport::new(models, ModelSource::Cache);
        }

        match self.fetch_from_api(template, credentials).await {
            Ok(models) if models.is_empty() => self.fall_back(template, FetchError::EmptyModelList),
            Ok(models) => {
                let ttl = template
                    .model_list_cache_ttl
                    .unwrap_or(defaults::cache::MODEL_LIST_TTL_SECONDS);
                if let Err(err) = self.cache.insert(&template.id, &models, ttl) {
                    tracing::warn!(
                        provider = %template.id,
                        error = %err,
                        "fetched model list could not be cached"
                    );
                }
                tracing::debug!(
                    provider = %template.id,
                    count = models.len(),
                    "fetched model list from provider"
                );
                FetchReport::new(models, ModelSource::Network)
            }
            Err(err) => self.fall_back(template, err),
        }
    }

    /// Fallback chain for a failed dynamic fetch: expired cache first, then
    /// the curated list, then nothing. The triggering error rides along in
    /// the report.
    fn fall_back(&self, template: &ProviderTemplate, err: FetchError) -> FetchReport {
        if let Some(models) = self.cache.any_models(&template.id) {
            if !models.is_empty() {
                tracing::warn!(
                    provider = %template.id,
                    error = %err,
                    "model list fetch failed, serving expired cache entry"
                );
                return FetchReport {
                    models,
                    source: ModelSource::ExpiredCache,
                    error: Some(err),
                };
            }
        }
        if !template.popular_models.is_empty() {
            tracing::warn!(
                provider = %template.id,
                error = %err,
                "model list fetch failed, serving popular models"
            );
            return FetchReport {
                models: template.popular_models.clone(),
                source: ModelSource::PopularModels,
                error: Some(err),
            };
        }
        tracing::warn!(
            provider = %template.id,
            error = %err,
            "model list fetch failed with nothing to fall back on"
        );
        FetchReport {
            models: Vec::new(),
            source: ModelSource::Empty,
            error: Some(err),
        }
    }

    async fn fetch_from_api(
        &self,
        template: &ProviderTemplate,
        credentials: &ProviderCredentials,
    ) -> std::result::Result<Vec<String>, FetchError> {
        let url = resolve_models_url(template, credentials)?;
        tracing::debug!(provider = %template.id, url = %url, "fetching model list");

        let mut request = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .header(reqwest::header::USER_AGENT, defaults::http::USER_AGENT);
        if let Some(api_key) = &credentials.api_key {
            request = request.bearer_auth(api_key.expose_secret());
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                FetchError::Timeout(self.timeout.as_secs())
            } else {
                FetchError::Connection(err.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status(status));
        }

        let data: Value = response.json().await.map_err(|err| {
            if err.is_timeout() {
                FetchError::Timeout(self.timeout.as_secs())
            } else {
                FetchError::Json(err.to_string())
            }
        })?;

        parse::parse_model_response(&data)
    }

    /// Store a model list in the cache. The TTL must be positive.
    pub fn cache_models(
        &self,
        provider_id: &str,
        models: &[String],
        ttl_seconds: i64,
    ) -> Result<()> {
        self.cache.insert(provider_id, models, ttl_seconds)
    }

    /// Cached models for a provider, if the entry is still fresh.
    pub fn cached_models(&self, provider_id: &str) -> Option<Vec<String>> {
        self.cache.valid_models(provider_id)
    }

    /// Drop the cache entry for one provider.
    pub fn clear_cache(&self, provider_id: &str) {
        self.cache.remove(provider_id);
    }

    /// Drop every cache entry.
    pub fn clear_all_caches(&self) {
        self.cache.clear();
    }

    /// Diagnostic snapshot of a provider's cache entry.
    pub fn cache_info(&self, provider_id: &str) -> Option<CacheInfo> {
        self.cache.info(provider_id)
    }
}

static_assertions::assert_impl_all!(ModelFetcher: Send, Sync);
static_assertions::assert_impl_all!(ProviderCredentials: Send, Sync);

/// Resolve the URL to fetch a template's model list from.
///
/// Endpoints starting with `http` are taken as-is. Anything else is a path,
/// resolved against the caller's base URL when given, else the default base
/// URL declared by the template's own `api_base` field.
fn resolve_models_url(
    template: &ProviderTemplate,
    credentials: &ProviderCredentials,
) -> std::result::Result<String, FetchError> {
    let endpoint = template
        .model_endpoint
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| FetchError::MissingEndpoint(template.id.clone()))?;

    if endpoint.starts_with("http") {
        return Ok(endpoint.to_string());
    }

    let base = credentials
        .api_base
        .as_deref()
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .or_else(|| template.api_base_default())
        .ok_or_else(|| FetchError::MissingBaseUrl(endpoint.to_string()))?;

    let separator = if endpoint.starts_with('/') { "" } else { "/" };
    Ok(format!(
        "{}{}{}",
        base.trim_end_matches('/'),
        separator,
        endpoint
    ))
}
