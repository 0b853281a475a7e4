//! Capability traits.

use async_trait::async_trait;

use crate::error::{LlmError, Result};
use crate::fetcher::ModelFetcher;
use crate::types::ProviderTemplate;

/// Anything that can produce a model list for a provider template.
///
/// [`ModelFetcher`] is the production implementation; tests and embedders
/// can substitute their own.
#[async_trait]
pub trait ModelListing: Send + Sync {
    /// Model names for the given template. Implementations are expected to
    /// degrade rather than fail; an empty list is the worst outcome.
    async fn fetch_models(&self, template: &ProviderTemplate) -> Vec<String>;
}

#[async_trait]
impl ModelListing for ModelFetcher {
    async fn fetch_models(&self, template: &ProviderTemplate) -> Vec<String> {
        ModelFetcher::fetch_models(self, template).await
    }
}

/// Model names for one provider out of a template set.
///
/// Fails only when `provider_id` matches none of the templates; fetch
/// problems surface as a degraded list, not an error.
pub async fn fetch_models_for_provider(
    provider_id: &str,
    templates: &[ProviderTemplate],
    listing: &dyn ModelListing,
) -> Result<Vec<String>> {
    let template = templates
        .iter()
        .find(|t| t.id == provider_id)
        .ok_or_else(|| {
            LlmError::NotFound(format!(
                "Provider '{provider_id}' not found in available templates"
            ))
        })?;
    Ok(listing.fetch_models(template).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::provider_templates;

    struct FixedListing {
        models: Vec<String>,
    }

    #[async_trait]
    impl ModelListing for FixedListing {
        async fn fetch_models(&self, _template: &ProviderTemplate) -> Vec<String> {
            self.models.clone()
        }
    }

    #[tokio::test]
    async fn test_fetch_models_for_known_provider() {
        let listing = FixedListing {
            models: vec!["m1".to_string(), "m2".to_string()],
        };
        let templates = provider_templates();

        let models = fetch_models_for_provider("groq", &templates, &listing)
            .await
            .unwrap();
        assert_eq!(models, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_unknown_provider_is_an_error() {
        let listing = FixedListing { models: Vec::new() };
        let templates = provider_templates();

        let err = fetch_models_for_provider("nope", &templates, &listing)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::NotFound(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[tokio::test]
    async fn test_fetcher_implements_model_listing() {
        let fetcher = ModelFetcher::new();
        let template = ProviderTemplate::builder("fixed", "Fixed")
            .description("Static provider")
            .popular_models(["m1"])
            .build();

        let listing: &dyn ModelListing = &fetcher;
        assert_eq!(listing.fetch_models(&template).await, vec!["m1"]);
    }
}
