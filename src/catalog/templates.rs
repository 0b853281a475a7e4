//! Template registry for dynamically discovered providers.
//!
//! Unlike the built-ins, these providers expose a model list endpoint, so
//! their templates carry the discovery configuration (endpoint, cache TTL)
//! alongside the setup form. The registry is assembled once and cloned on
//! read.

use lazy_static::lazy_static;

use crate::defaults;
use crate::types::{
    FieldConfig, FieldType, ModelFetching, ProviderCategory, ProviderTemplate, SetupDifficulty,
};

/// Identifier of the Groq provider.
pub const GROQ_PROVIDER_NAME: &str = "groq";
/// Identifier of the Ollama provider.
pub const OLLAMA_PROVIDER_NAME: &str = "ollama";
/// Identifier of the Together AI provider.
pub const TOGETHER_PROVIDER_NAME: &str = "together_ai";
/// Identifier of the Fireworks AI provider.
pub const FIREWORKS_PROVIDER_NAME: &str = "fireworks_ai";

fn groq_template() -> ProviderTemplate {
    ProviderTemplate::builder(GROQ_PROVIDER_NAME, "Groq")
        .description("Ultra-fast inference with Groq's LPU technology")
        .category(ProviderCategory::Cloud)
        .setup_difficulty(SetupDifficulty::Easy)
        .field(
            FieldConfig::new("api_key", FieldType::Password, "API Key")
                .with_placeholder("gsk_...")
                .with_validation("^gsk_[a-zA-Z0-9]+$")
                .with_description("Get your API key from console.groq.com"),
        )
        .field(
            FieldConfig::new("api_base", FieldType::Url, "API Base URL (Optional)")
                .optional()
                .with_default("https://api.groq.com/openai/v1")
                .with_description("Base URL for Groq API (default is fine for most users)"),
        )
        .popular_models([
            "llama-3.1-8b-instant",
            "llama-3.3-70b-versatile",
            "mixtral-8x7b-32768",
            "gemma2-9b-it",
        ])
        .model_fetching(ModelFetching::Dynamic)
        .model_endpoint("https://api.groq.com/openai/v1/models")
        .model_list_cache_ttl(defaults::cache::MODEL_LIST_TTL_SECONDS)
        .model_prefix("groq/")
        .documentation_url("https://console.groq.com/docs/quickstart")
        .build()
}

fn ollama_template() -> ProviderTemplate {
    ProviderTemplate::builder(OLLAMA_PROVIDER_NAME, "Ollama")
        .description("Run LLMs locally on your machine")
        .category(ProviderCategory::Local)
        .setup_difficulty(SetupDifficulty::Medium)
        .field(
            FieldConfig::new("api_base", FieldType::Url, "Ollama Server URL")
                .with_default("http://localhost:11434")
                .with_description("URL of your Ollama server"),
        )
        .popular_models([
            "llama3.2:latest",
            "qwen2.5:latest",
            "deepseek-coder:latest",
            "mistral-nemo:latest",
        ])
        .model_fetching(ModelFetching::Dynamic)
        .model_endpoint("/api/tags")
        .model_list_cache_ttl(defaults::cache::LOCAL_MODEL_LIST_TTL_SECONDS)
        .documentation_url("https://ollama.ai/")
        .build()
}

fn together_ai_template() -> ProviderTemplate {
    ProviderTemplate::builder(TOGETHER_PROVIDER_NAME, "Together AI")
        .description("High-performance inference for open-source models")
        .category(ProviderCategory::Cloud)
        .setup_difficulty(SetupDifficulty::Easy)
        .field(
            FieldConfig::new("api_key", FieldType::Password, "API Key")
                .with_placeholder("...")
                .with_description("Get your API key from api.together.xyz"),
        )
        .field(
            FieldConfig::new("api_base", FieldType::Url, "API Base URL (Optional)")
                .optional()
                .with_default("https://api.together.xyz/v1")
                .with_description("Base URL for Together AI API"),
        )
        .popular_models([
            "meta-llama/Llama-2-7b-chat-hf",
            "meta-llama/Llama-2-13b-chat-hf",
            "mistralai/Mixtral-8x7B-Instruct-v0.1",
            "NousResearch/Nous-Hermes-2-Mixtral-8x7B-DPO",
        ])
        .model_fetching(ModelFetching::Dynamic)
        .model_endpoint("https://api.together.xyz/v1/models")
        .model_list_cache_ttl(defaults::cache::MODEL_LIST_TTL_SECONDS)
        .model_prefix("together_ai/")
        .documentation_url("https://docs.together.ai/")
        .build()
}

fn fireworks_ai_template() -> ProviderTemplate {
    ProviderTemplate::builder(FIREWORKS_PROVIDER_NAME, "Fireworks AI")
        .description("Enterprise-grade inference platform for production AI")
        .category(ProviderCategory::Cloud)
        .setup_difficulty(SetupDifficulty::Easy)
        .field(
            FieldConfig::new("api_key", FieldType::Password, "API Key")
                .with_placeholder("fw_...")
                .with_validation("^fw_[a-zA-Z0-9]+$")
                .with_description("Get your API key from fireworks.ai"),
        )
        .field(
            FieldConfig::new("api_base", FieldType::Url, "API Base URL (Optional)")
                .optional()
                .with_default("https://api.fireworks.ai/inference/v1")
                .with_description("Base URL for Fireworks AI API"),
        )
        .popular_models([
            "accounts/fireworks/models/llama-v2-7b-chat",
            "accounts/fireworks/models/llama-v2-13b-chat",
            "accounts/fireworks/models/mixtral-8x7b-instruct",
            "accounts/fireworks/models/qwen2-72b-instruct",
        ])
        .model_fetching(ModelFetching::Dynamic)
        .model_endpoint("https://api.fireworks.ai/inference/v1/models")
        .model_list_cache_ttl(defaults::cache::MODEL_LIST_TTL_SECONDS)
        .model_prefix("fireworks_ai/")
        .documentation_url("https://readme.fireworks.ai/")
        .build()
}

lazy_static! {
    static ref PROVIDER_TEMPLATES: Vec<ProviderTemplate> = vec![
        groq_template(),
        ollama_template(),
        together_ai_template(),
        fireworks_ai_template(),
    ];
}

/// All registered provider templates, in display order.
pub fn provider_templates() -> Vec<ProviderTemplate> {
    PROVIDER_TEMPLATES.clone()
}

/// Look up a template by provider ID.
pub fn provider_template(provider_id: &str) -> Option<ProviderTemplate> {
    PROVIDER_TEMPLATES
        .iter()
        .find(|t| t.id == provider_id)
        .cloned()
}

/// Templates in the given category.
pub fn templates_by_category(category: ProviderCategory) -> Vec<ProviderTemplate> {
    PROVIDER_TEMPLATES
        .iter()
        .filter(|t| t.category == category)
        .cloned()
        .collect()
}

/// Templates at the given setup difficulty.
pub fn templates_by_difficulty(difficulty: SetupDifficulty) -> Vec<ProviderTemplate> {
    PROVIDER_TEMPLATES
        .iter()
        .filter(|t| t.setup_difficulty == difficulty)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let templates = provider_templates();
        let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["groq", "ollama", "together_ai", "fireworks_ai"]);
    }

    #[test]
    fn test_all_templates_validate() {
        for template in provider_templates() {
            template
                .validate()
                .unwrap_or_else(|e| panic!("template '{}' invalid: {e}", template.id));
        }
    }

    #[test]
    fn test_groq_template_values() {
        let groq = provider_template("groq").unwrap();
        assert_eq!(groq.name, "Groq");
        assert_eq!(groq.model_fetching, ModelFetching::Dynamic);
        assert_eq!(
            groq.model_endpoint.as_deref(),
            Some("https://api.groq.com/openai/v1/models")
        );
        assert_eq!(groq.model_list_cache_ttl, Some(3600));
        assert_eq!(groq.routing_provider_name, "groq");
        assert_eq!(groq.model_prefix.as_deref(), Some("groq/"));
        assert_eq!(groq.popular_models[0], "llama-3.1-8b-instant");

        let api_key = &groq.config_schema[0];
        assert_eq!(api_key.field_type, FieldType::Password);
        assert!(api_key.required);
        assert!(api_key.matches_value("gsk_abc123").unwrap());
        assert!(!api_key.matches_value("nope").unwrap());
    }

    #[test]
    fn test_ollama_uses_relative_endpoint() {
        let ollama = provider_template("ollama").unwrap();
        assert_eq!(ollama.model_endpoint.as_deref(), Some("/api/tags"));
        assert_eq!(ollama.model_list_cache_ttl, Some(300));
        assert_eq!(ollama.category, ProviderCategory::Local);
        assert_eq!(
            ollama.api_base_default().as_deref(),
            Some("http://localhost:11434")
        );
        // the server URL is the one required field
        assert_eq!(ollama.config_schema.len(), 1);
        assert!(ollama.config_schema[0].required);
    }

    #[test]
    fn test_category_and_difficulty_filters() {
        assert_eq!(templates_by_category(ProviderCategory::Local).len(), 1);
        assert_eq!(templates_by_category(ProviderCategory::Cloud).len(), 3);
        assert_eq!(templates_by_category(ProviderCategory::Enterprise).len(), 0);
        assert_eq!(templates_by_difficulty(SetupDifficulty::Easy).len(), 3);
        assert_eq!(templates_by_difficulty(SetupDifficulty::Medium).len(), 1);
    }

    #[test]
    fn test_unknown_template_lookup() {
        assert!(provider_template("does-not-exist").is_none());
    }
}
