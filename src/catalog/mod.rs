//! Provider catalog.
//!
//! The catalog is the union of two sources: hand-maintained built-in
//! descriptors ([`builtin`]) and descriptors derived from the template
//! registry ([`templates`], [`convert`]). Lookups copy out of static data,
//! so callers own what they get back.

pub mod builtin;
pub mod convert;
pub mod templates;

pub use builtin::{builtin_providers, model_supports_image_input};
pub use convert::descriptor_from_template;
pub use templates::{
    provider_template, provider_templates, templates_by_category, templates_by_difficulty,
};

use crate::types::{ModelConfiguration, ProviderDescriptor};

/// All known providers: built-ins first, then template-based providers, each
/// with default-model visibility applied.
///
/// The two sources are concatenated without deduplication. If a template
/// ever reuses a built-in ID, both entries appear here and
/// [`get_provider`] returns the built-in one.
pub fn available_providers() -> Vec<ProviderDescriptor> {
    let mut providers = builtin_providers();
    providers.extend(
        templates::provider_templates()
            .iter()
            .map(descriptor_from_template),
    );
    for provider in &mut providers {
        ensure_default_models_visible(provider);
    }
    providers
}

/// Look up a provider descriptor by ID. Exact match only.
pub fn get_provider(provider_id: &str) -> Option<ProviderDescriptor> {
    available_providers()
        .into_iter()
        .find(|p| p.name == provider_id)
}

/// Make sure a descriptor's default models appear in its model list and are
/// visible. A default that is missing from the list is appended; one that is
/// present but hidden is flipped visible. Other entries are left alone.
pub fn ensure_default_models_visible(descriptor: &mut ProviderDescriptor) {
    let mut defaults: Vec<String> = descriptor
        .default_model
        .iter()
        .chain(descriptor.default_fast_model.iter())
        .cloned()
        .collect();
    defaults.dedup();

    let routing_name = descriptor
        .routing_provider_name
        .clone()
        .unwrap_or_else(|| descriptor.name.clone());

    for name in defaults {
        match descriptor
            .model_configurations
            .iter_mut()
            .find(|m| m.name == name)
        {
            Some(config) => config.is_visible = true,
            None => {
                let supports_image_input =
                    builtin::model_supports_image_input(&name, &routing_name);
                descriptor
                    .model_configurations
                    .push(ModelConfiguration::visible(name, supports_image_input));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_union_and_order() {
        let providers = available_providers();
        let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "openai",
                "anthropic",
                "azure",
                "bedrock",
                "vertex_ai",
                "groq",
                "ollama",
                "together_ai",
                "fireworks_ai"
            ]
        );
    }

    #[test]
    fn test_get_provider_is_exact_match() {
        assert!(get_provider("groq").is_some());
        assert!(get_provider("Groq").is_none());
        assert!(get_provider("grok").is_none());
    }

    #[test]
    fn test_defaults_are_visible_in_catalog() {
        for provider in available_providers() {
            let visible = provider.visible_model_names();
            if let Some(default_model) = &provider.default_model {
                assert!(
                    visible.contains(default_model),
                    "default model of '{}' not visible",
                    provider.name
                );
            }
            if let Some(fast) = &provider.default_fast_model {
                assert!(
                    visible.contains(fast),
                    "default fast model of '{}' not visible",
                    provider.name
                );
            }
        }
    }

    #[test]
    fn test_missing_default_is_appended_visible() {
        let mut descriptor = ProviderDescriptor {
            name: "acme".to_string(),
            display_name: "Acme".to_string(),
            model_configurations: vec![ModelConfiguration::hidden("acme-old", false)],
            default_model: Some("acme-new".to_string()),
            default_fast_model: Some("acme-new".to_string()),
            ..Default::default()
        };
        ensure_default_models_visible(&mut descriptor);

        assert_eq!(descriptor.model_configurations.len(), 2);
        let appended = descriptor.model_configuration("acme-new").unwrap();
        assert!(appended.is_visible);
        // untouched entries keep their visibility
        assert!(!descriptor.model_configuration("acme-old").unwrap().is_visible);
    }

    #[test]
    fn test_hidden_default_is_flipped_visible() {
        let mut descriptor = ProviderDescriptor {
            name: "acme".to_string(),
            display_name: "Acme".to_string(),
            model_configurations: vec![ModelConfiguration::hidden("acme-main", false)],
            default_model: Some("acme-main".to_string()),
            ..Default::default()
        };
        ensure_default_models_visible(&mut descriptor);
        assert!(descriptor.model_configuration("acme-main").unwrap().is_visible);
        assert_eq!(descriptor.model_configurations.len(), 1);
    }
}
