//! Provider templates.
//!
//! A [`ProviderTemplate`] is the full recipe for wiring up an LLM provider:
//! which configuration fields to show, which models to suggest, and how to
//! discover the live model list. Templates are static data; the registry in
//! [`crate::catalog::templates`] holds the built-in set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{LlmError, Result};
use crate::types::field::FieldConfig;

/// Where a provider runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderCategory {
    /// Hosted API
    Cloud,
    /// Runs on the user's machine
    Local,
    /// Enterprise platform (managed cloud, VPC deployments)
    Enterprise,
    /// Domain-specific or niche provider
    Specialized,
}

impl ProviderCategory {
    /// All supported categories.
    pub const ALL: &'static [ProviderCategory] = &[
        ProviderCategory::Cloud,
        ProviderCategory::Local,
        ProviderCategory::Enterprise,
        ProviderCategory::Specialized,
    ];

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderCategory::Cloud => "cloud",
            ProviderCategory::Local => "local",
            ProviderCategory::Enterprise => "enterprise",
            ProviderCategory::Specialized => "specialized",
        }
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderCategory {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self> {
        ProviderCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                LlmError::InvalidParameter(format!(
                    "Invalid category '{s}'. Must be one of: cloud, local, enterprise, specialized"
                ))
            })
    }
}

/// How much effort first-time setup takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupDifficulty {
    /// Paste an API key and go
    Easy,
    /// Some local installation or account setup required
    Medium,
    /// Multi-step cloud configuration
    Hard,
}

impl SetupDifficulty {
    /// All supported difficulty levels.
    pub const ALL: &'static [SetupDifficulty] = &[
        SetupDifficulty::Easy,
        SetupDifficulty::Medium,
        SetupDifficulty::Hard,
    ];

    /// Wire name of the difficulty level.
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupDifficulty::Easy => "easy",
            SetupDifficulty::Medium => "medium",
            SetupDifficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for SetupDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetupDifficulty {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self> {
        SetupDifficulty::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                LlmError::InvalidParameter(format!(
                    "Invalid difficulty '{s}'. Must be one of: easy, medium, hard"
                ))
            })
    }
}

/// How the live model list is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFetching {
    /// Use the curated `popular_models` list as-is
    #[default]
    Static,
    /// Query the provider's model endpoint
    Dynamic,
    /// The user types model names in by hand
    Manual,
}

impl ModelFetching {
    /// All supported fetching modes.
    pub const ALL: &'static [ModelFetching] = &[
        ModelFetching::Static,
        ModelFetching::Dynamic,
        ModelFetching::Manual,
    ];

    /// Wire name of the fetching mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFetching::Static => "static",
            ModelFetching::Dynamic => "dynamic",
            ModelFetching::Manual => "manual",
        }
    }
}

impl fmt::Display for ModelFetching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFetching {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self> {
        ModelFetching::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                LlmError::InvalidParameter(format!(
                    "Invalid model fetching mode '{s}'. Must be one of: static, dynamic, manual"
                ))
            })
    }
}

/// Complete description of an LLM provider integration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderTemplate {
    /// Stable identifier, e.g. `"groq"`
    #[validate(length(min = 1, message = "Provider ID is required"))]
    pub id: String,
    /// Display name, e.g. `"Groq"`
    #[validate(length(min = 1, message = "Provider name is required"))]
    pub name: String,
    /// One-line marketing description
    #[validate(length(min = 1, message = "Provider description is required"))]
    pub description: String,
    /// Where the provider runs
    pub category: ProviderCategory,
    /// Setup effort level
    pub setup_difficulty: SetupDifficulty,
    /// Configuration fields shown during setup, in display order
    #[serde(default)]
    pub config_schema: Vec<FieldConfig>,
    /// Curated model suggestions, best first
    #[serde(default)]
    pub popular_models: Vec<String>,
    /// How the live model list is obtained
    #[serde(default)]
    pub model_fetching: ModelFetching,
    /// Endpoint serving the model list. Absolute URL, or a path relative to
    /// the provider's base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_endpoint: Option<String>,
    /// TTL for cached model lists, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Cache TTL must be a positive number of seconds"))]
    pub model_list_cache_ttl: Option<i64>,
    /// Provider name understood by the routing layer
    #[validate(length(min = 1, message = "Routing provider name is required"))]
    pub routing_provider_name: String,
    /// Prefix prepended to model names when routing, e.g. `"groq/"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_prefix: Option<String>,
    /// Link to the provider's setup docs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    /// Logo asset URL
    #[serde(default, rename = "logoUrl", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl ProviderTemplate {
    /// Start building a template. The routing provider name defaults to the
    /// template ID and every other optional part starts empty.
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> ProviderTemplateBuilder {
        ProviderTemplateBuilder::new(id, name)
    }

    /// Default base URL declared by this template's `api_base` field, if any.
    pub fn api_base_default(&self) -> Option<String> {
        self.config_schema
            .iter()
            .find(|field| field.name == "api_base")
            .and_then(|field| field.default_value.clone())
    }

    /// Effective routed name for one of this provider's models.
    pub fn routed_model_name(&self, model: &str) -> String {
        match &self.model_prefix {
            Some(prefix) if !model.starts_with(prefix.as_str()) => format!("{prefix}{model}"),
            _ => model.to_string(),
        }
    }

    /// Check the template for internal consistency.
    ///
    /// Beyond the scalar rules, dynamic templates must declare a model
    /// endpoint, absolute endpoints must be http(s) URLs, every config field
    /// must be structurally valid, and popular model names must be non-empty.
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|e| LlmError::InvalidParameter(e.to_string()))?;

        if self.model_fetching == ModelFetching::Dynamic {
            let endpoint = self.model_endpoint.as_deref().unwrap_or("");
            if endpoint.is_empty() {
                return Err(LlmError::config_error(format!(
                    "Dynamic provider '{}' must define a model endpoint",
                    self.id
                )));
            }
            if endpoint.starts_with("http")
                && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
            {
                return Err(LlmError::config_error(format!(
                    "Invalid model endpoint URL for provider '{}': {endpoint}",
                    self.id
                )));
            }
        }

        for field in &self.config_schema {
            field.validate()?;
        }

        if self.popular_models.iter().any(|m| m.trim().is_empty()) {
            return Err(LlmError::InvalidParameter(format!(
                "Popular model names for provider '{}' must be non-empty strings",
                self.id
            )));
        }

        Ok(())
    }
}

/// Builder for [`ProviderTemplate`], in the usual chained style.
#[derive(Debug, Clone)]
pub struct ProviderTemplateBuilder {
    template: ProviderTemplate,
}

impl ProviderTemplateBuilder {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            template: ProviderTemplate {
                id: id.into(),
                name: name.into(),
                description: String::new(),
                category: ProviderCategory::Cloud,
                setup_difficulty: SetupDifficulty::Easy,
                config_schema: Vec::new(),
                popular_models: Vec::new(),
                model_fetching: ModelFetching::default(),
                model_endpoint: None,
                model_list_cache_ttl: None,
                routing_provider_name: String::new(),
                model_prefix: None,
                documentation_url: None,
                logo_url: None,
            },
        }
    }

    /// Set the one-line description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.template.description = description.into();
        self
    }

    /// Set the provider category.
    pub fn category(mut self, category: ProviderCategory) -> Self {
        self.template.category = category;
        self
    }

    /// Set the setup difficulty.
    pub fn setup_difficulty(mut self, difficulty: SetupDifficulty) -> Self {
        self.template.setup_difficulty = difficulty;
        self
    }

    /// Append a configuration field.
    pub fn field(mut self, field: FieldConfig) -> Self {
        self.template.config_schema.push(field);
        self
    }

    /// Set the curated model list.
    pub fn popular_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template.popular_models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Set the model fetching mode.
    pub fn model_fetching(mut self, mode: ModelFetching) -> Self {
        self.template.model_fetching = mode;
        self
    }

    /// Set the model list endpoint.
    pub fn model_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.template.model_endpoint = Some(endpoint.into());
        self
    }

    /// Set the cache TTL in seconds.
    pub fn model_list_cache_ttl(mut self, ttl_seconds: i64) -> Self {
        self.template.model_list_cache_ttl = Some(ttl_seconds);
        self
    }

    /// Set the routing provider name.
    pub fn routing_provider_name(mut self, name: impl Into<String>) -> Self {
        self.template.routing_provider_name = name.into();
        self
    }

    /// Set the model name prefix used for routing.
    pub fn model_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.template.model_prefix = Some(prefix.into());
        self
    }

    /// Set the documentation link.
    pub fn documentation_url(mut self, url: impl Into<String>) -> Self {
        self.template.documentation_url = Some(url.into());
        self
    }

    /// Set the logo asset URL.
    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.template.logo_url = Some(url.into());
        self
    }

    /// Finish building. Does not validate; call
    /// [`ProviderTemplate::validate`] separately where it matters.
    pub fn build(mut self) -> ProviderTemplate {
        if self.template.routing_provider_name.is_empty() {
            self.template.routing_provider_name = self.template.id.clone();
        }
        self.template
    }
}
