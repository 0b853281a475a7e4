//! # LLM Discovery - Provider Catalog and Model Discovery
//!
//! A unified catalog of LLM providers with live model list discovery,
//! TTL caching and layered fallback.
//!
//! ## Features
//!
//! - **📋 Provider Catalog**: Built-in descriptors for OpenAI, Anthropic,
//!   Azure OpenAI, AWS Bedrock and GCP Vertex AI, plus template-driven
//!   providers (Groq, Ollama, Together AI, Fireworks AI)
//! - **🔄 Live Model Lists**: Fetches each provider's model endpoint and
//!   understands the common response shapes (OpenAI list, Ollama tags,
//!   bare arrays)
//! - **⏱️ TTL Caching**: Per-provider caching with configurable expiry, so
//!   UI polling does not hammer provider APIs
//! - **🛟 Layered Fallback**: Expired cache, then curated model lists, so a
//!   provider outage never empties the model picker
//! - **🔌 Connection Testing**: Probe an endpoint with user credentials
//!   before saving a configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use llm_discovery::{ModelDiscoveryService, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let service = ModelDiscoveryService::new();
//!
//!     for provider in llm_discovery::catalog::available_providers() {
//!         println!("{} ({})", provider.display_name, provider.name);
//!     }
//!
//!     let report = service.models_for_provider("groq").await?;
//!     println!(
//!         "{} models (cached: {}, fallback: {})",
//!         report.models.len(),
//!         report.cached,
//!         report.fallback
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Fetching Directly
//!
//! ```rust,no_run
//! use llm_discovery::{ModelFetcher, ProviderCredentials};
//!
//! # async fn example() {
//! let fetcher = ModelFetcher::new();
//! let template = llm_discovery::catalog::provider_template("ollama").unwrap();
//! let credentials = ProviderCredentials::new().with_api_base("http://10.0.0.5:11434");
//!
//! // never fails; falls back to the curated list when the server is down
//! let models = fetcher.fetch_models_with(&template, &credentials).await;
//! # }
//! ```

#![deny(unsafe_code)]

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod fetcher;
pub mod service;
pub mod traits;
pub mod types;

pub use error::{ErrorCategory, LlmError, Result};
pub use fetcher::{
    CacheInfo, FetchError, FetchReport, ModelFetcher, ModelSource, ProviderCredentials,
};
pub use service::{
    ConnectionTestReport, ConnectionTestRequest, ModelDiscoveryService, ModelsReport,
};
pub use traits::{ModelListing, fetch_models_for_provider};
pub use types::{
    CustomConfigKey, CustomConfigKeyType, FieldConfig, FieldType, ModelConfiguration,
    ModelFetching, ProviderCategory, ProviderDescriptor, ProviderTemplate, SetupDifficulty,
};

/// Commonly used imports in one place.
pub mod prelude {
    pub use crate::catalog::{available_providers, get_provider, provider_template, provider_templates};
    pub use crate::error::{LlmError, Result};
    pub use crate::fetcher::{FetchReport, ModelFetcher, ModelSource, ProviderCredentials};
    pub use crate::service::{ConnectionTestRequest, ModelDiscoveryService, ModelsReport};
    pub use crate::traits::ModelListing;
    pub use crate::types::{
        ModelFetching, ProviderCategory, ProviderDescriptor, ProviderTemplate, SetupDifficulty,
    };
}
