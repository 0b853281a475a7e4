//! High-level discovery service.
//!
//! [`ModelDiscoveryService`] is the piece an application embeds: it joins
//! the catalog with a [`ModelFetcher`], normalizes provider IDs, shapes
//! results for API responses, and runs connection tests against provider
//! endpoints.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::catalog;
use crate::defaults;
use crate::error::{LlmError, Result};
use crate::fetcher::{ModelFetcher, ProviderCredentials};
use crate::types::{ModelConfiguration, ProviderDescriptor, ProviderTemplate};

/// Model list response shaped for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ModelsReport {
    /// Normalized provider ID
    pub provider: String,
    /// Model names, in provider order
    pub models: Vec<String>,
    /// Whether the list came from the fresh cache
    pub cached: bool,
    /// Unix timestamp of this response
    pub timestamp: i64,
    /// Cache TTL in effect for this provider, in seconds
    pub ttl_seconds: i64,
    /// Whether the list is a degraded answer
    pub fallback: bool,
    /// Human-readable reason for the fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// A connection test to run against a provider endpoint.
#[derive(Debug, Clone, Validate)]
pub struct ConnectionTestRequest {
    /// Provider being tested, used in result messages
    #[validate(length(min = 1, message = "Provider name is required"))]
    pub provider: String,
    /// Endpoint to probe. Absolute URL, or a path resolved against `api_base`.
    pub model_endpoint: Option<String>,
    /// Base URL for relative endpoints
    pub api_base: Option<String>,
    /// API key sent as a bearer token
    pub api_key: Option<SecretString>,
}

impl ConnectionTestRequest {
    /// Test request for a provider, with everything else unset.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model_endpoint: None,
            api_base: None,
            api_key: None,
        }
    }

    /// Test request for a template, probing its model endpoint with the
    /// user's credentials.
    pub fn for_template(template: &ProviderTemplate, credentials: &ProviderCredentials) -> Self {
        Self {
            provider: template.id.clone(),
            model_endpoint: template.model_endpoint.clone(),
            api_base: credentials
                .api_base
                .clone()
                .or_else(|| template.api_base_default()),
            api_key: credentials.api_key.clone(),
        }
    }

    /// Set the endpoint to probe.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.model_endpoint = Some(endpoint.into());
        self
    }

    /// Set the base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Check the request for internal consistency.
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|e| LlmError::InvalidParameter(e.to_string()))
    }
}

/// Outcome of a connection test.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionTestReport {
    /// Whether the endpoint answered usefully
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Number of models the endpoint reported
    pub model_count: usize,
}

/// Application-facing discovery service.
#[derive(Debug)]
pub struct ModelDiscoveryService {
    fetcher: ModelFetcher,
    client: reqwest::Client,
    test_timeout: Duration,
}

impl Default for ModelDiscoveryService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelDiscoveryService {
    /// Service with its own fetcher and default timeouts.
    pub fn new() -> Self {
        Self::with_fetcher(ModelFetcher::new())
    }

    /// Service wrapping an existing fetcher. Useful when the fetcher's cache
    /// should be shared with other parts of the application.
    pub fn with_fetcher(fetcher: ModelFetcher) -> Self {
        Self {
            fetcher,
            client: reqwest::Client::new(),
            test_timeout: defaults::http::CONNECTION_TEST_TIMEOUT,
        }
    }

    /// Override the connection test timeout.
    pub fn with_test_timeout(mut self, timeout: Duration) -> Self {
        self.test_timeout = timeout;
        self
    }

    /// The underlying fetcher, for direct cache management.
    pub fn fetcher(&self) -> &ModelFetcher {
        &self.fetcher
    }

    /// Model list for a provider, without credentials.
    pub async fn models_for_provider(&self, provider_id: &str) -> Result<ModelsReport> {
        self.models_for_provider_with(provider_id, &ProviderCredentials::default())
            .await
    }

    /// Model list for a provider, using the given credentials.
    ///
    /// Provider IDs are matched case-insensitively. Template-based providers
    /// go through the fetcher; built-ins answer from their static model
    /// tables. Unknown providers are the only error.
    pub async fn models_for_provider_with(
        &self,
        provider_id: &str,
        credentials: &ProviderCredentials,
    ) -> Result<ModelsReport> {
        let normalized = provider_id.trim().to_lowercase();

        if let Some(template) = catalog::provider_template(&normalized) {
            let report = self.fetcher.fetch_report_with(&template, credentials).await;
            let ttl_seconds = self
                .fetcher
                .cache_info(&normalized)
                .map(|info| info.ttl_seconds)
                .or(template.model_list_cache_ttl)
                .unwrap_or(defaults::cache::MODEL_LIST_TTL_SECONDS);
            let cached = report.from_cache();
            let fallback = report.is_fallback();
            return Ok(ModelsReport {
                provider: normalized,
                models: report.models,
                cached,
                timestamp: chrono::Utc::now().timestamp(),
                ttl_seconds,
                fallback,
                fallback_reason: report.error.as_ref().map(ToString::to_string),
            });
        }

        let descriptor = catalog::get_provider(&normalized).ok_or_else(|| {
            LlmError::NotFound(format!("Provider '{provider_id}' not found"))
        })?;
        Ok(ModelsReport {
            provider: normalized,
            models: descriptor
                .model_configurations
                .iter()
                .map(|m| m.name.clone())
                .collect(),
            cached: false,
            timestamp: chrono::Utc::now().timestamp(),
            ttl_seconds: defaults::cache::MODEL_LIST_TTL_SECONDS,
            fallback: false,
            fallback_reason: None,
        })
    }

    /// Drop any cached list for the provider and fetch a fresh one.
    pub async fn refresh_models(&self, provider_id: &str) -> Result<ModelsReport> {
        self.refresh_models_with(provider_id, &ProviderCredentials::default())
            .await
    }

    /// Credentialed variant of [`refresh_models`][Self::refresh_models].
    pub async fn refresh_models_with(
        &self,
        provider_id: &str,
        credentials: &ProviderCredentials,
    ) -> Result<ModelsReport> {
        let normalized = provider_id.trim().to_lowercase();
        tracing::debug!(provider = %normalized, "refreshing model list");
        self.fetcher.clear_cache(&normalized);
        self.models_for_provider_with(&normalized, credentials).await
    }

    /// Catalog descriptor for a provider, with template-based model lists
    /// replaced by the live fetch result.
    pub async fn descriptor_with_models(&self, provider_id: &str) -> Result<ProviderDescriptor> {
        let normalized = provider_id.trim().to_lowercase();
        let mut descriptor = catalog::get_provider(&normalized).ok_or_else(|| {
            LlmError::NotFound(format!("Provider '{provider_id}' not found"))
        })?;

        if let Some(template) = catalog::provider_template(&normalized) {
            let models = self.fetcher.fetch_models(&template).await;
            descriptor.model_configurations = models
                .iter()
                .map(|name| {
                    ModelConfiguration::visible(
                        name,
                        catalog::model_supports_image_input(name, &template.routing_provider_name),
                    )
                })
                .collect();
            catalog::ensure_default_models_visible(&mut descriptor);
        }

        Ok(descriptor)
    }

    /// Probe a provider's model endpoint and report what it answered.
    ///
    /// A 200 with an unparseable body still counts as success; the endpoint
    /// is reachable, which is what the test is for. Anything else is an
    /// error with the upstream detail folded in.
    pub async fn test_connection(
        &self,
        request: &ConnectionTestRequest,
    ) -> Result<ConnectionTestReport> {
        request.validate()?;

        let endpoint = request
            .model_endpoint
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                LlmError::InvalidParameter(format!(
                    "No model endpoint configured for provider '{}'",
                    request.provider
                ))
            })?;

        let url = if endpoint.starts_with("http") {
            endpoint.to_string()
        } else {
            let base = request
                .api_base
                .as_deref()
                .filter(|b| !b.is_empty())
                .ok_or_else(|| {
                    LlmError::InvalidParameter(format!(
                        "No API base URL provided to resolve endpoint '{endpoint}'"
                    ))
                })?;
            let separator = if endpoint.starts_with('/') { "" } else { "/" };
            format!("{}{}{}", base.trim_end_matches('/'), separator, endpoint)
        };

        tracing::debug!(provider = %request.provider, url = %url, "testing provider connection");

        let mut http_request = self
            .client
            .get(&url)
            .timeout(self.test_timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::USER_AGENT, defaults::http::USER_AGENT);
        if let Some(api_key) = &request.api_key {
            http_request = http_request.bearer_auth(api_key.expose_secret());
        }

        let response = http_request.send().await.map_err(LlmError::from)?;
        let status = response.status().as_u16();

        if status == 200 {
            return match response.json::<Value>().await {
                Ok(data) => {
                    let model_count = count_models(&data);
                    Ok(ConnectionTestReport {
                        success: true,
                        message: format!(
                            "Successfully connected to {}. Found {} available models.",
                            request.provider, model_count
                        ),
                        model_count,
                    })
                }
                Err(err) => {
                    tracing::warn!(
                        provider = %request.provider,
                        error = %err,
                        "connection test succeeded but response was unparseable"
                    );
                    Ok(ConnectionTestReport {
                        success: true,
                        message: format!(
                            "Successfully connected to {}, but could not parse models list.",
                            request.provider
                        ),
                        model_count: 0,
                    })
                }
            };
        }

        let mut message = format!("Failed to connect to {}: HTTP {}", request.provider, status);
        let details = response.json::<Value>().await.ok();
        if let Some(upstream) = details.as_ref().and_then(upstream_error_message) {
            message.push_str(&format!(" - {upstream}"));
        }
        Err(LlmError::ApiError {
            code: status,
            message,
            details,
        })
    }
}

static_assertions::assert_impl_all!(ModelDiscoveryService: Send, Sync);

/// Number of model entries in a response, across the known list shapes.
fn count_models(data: &Value) -> usize {
    if let Some(items) = data.get("data").and_then(Value::as_array) {
        items.len()
    } else if let Some(items) = data.get("models").and_then(Value::as_array) {
        items.len()
    } else if let Some(items) = data.as_array() {
        items.len()
    } else {
        0
    }
}

/// Error message buried in an upstream error body, either
/// `{"error": {"message": ...}}` or `{"error": ...}`.
fn upstream_error_message(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    match error.get("message").and_then(Value::as_str) {
        Some(message) => Some(message.to_string()),
        None => match error {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        },
    }
}
