//! Catalog-wide consistency checks across built-ins, templates and the
//! conversion between them.

use llm_discovery::catalog::{available_providers, get_provider, provider_templates};
use llm_discovery::types::{FieldType, ModelFetching};

#[test]
fn catalog_lists_builtins_before_template_providers() {
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
            "fireworks_ai",
        ]
    );
}

#[test]
fn every_dynamic_template_declares_endpoint_and_ttl() {
    for template in provider_templates() {
        template
            .validate()
            .unwrap_or_else(|e| panic!("template '{}' invalid: {e}", template.id));
        if template.model_fetching == ModelFetching::Dynamic {
            assert!(
                template.model_endpoint.is_some(),
                "dynamic template '{}' has no endpoint",
                template.id
            );
            assert!(
                template.model_list_cache_ttl.unwrap_or_default() > 0,
                "dynamic template '{}' has no usable TTL",
                template.id
            );
            assert!(
                !template.popular_models.is_empty(),
                "dynamic template '{}' has no fallback models",
                template.id
            );
        }
    }
}

#[test]
fn password_fields_become_secret_config_keys() {
    for template in provider_templates() {
        let descriptor = get_provider(&template.id).unwrap();
        assert_eq!(
            descriptor.custom_config_keys.len(),
            template.config_schema.len(),
            "config key count mismatch for '{}'",
            template.id
        );
        for (field, key) in template
            .config_schema
            .iter()
            .zip(descriptor.custom_config_keys.iter())
        {
            assert_eq!(field.name, key.name);
            assert_eq!(field.required, key.is_required);
            assert_eq!(
                field.field_type == FieldType::Password,
                key.is_secret,
                "secrecy mismatch for field '{}' of '{}'",
                field.name,
                template.id
            );
            assert_eq!(field.default_value, key.default_value);
        }
    }
}

#[test]
fn every_provider_default_model_is_visible() {
    for provider in available_providers() {
        let visible = provider.visible_model_names();
        for default in provider
            .default_model
            .iter()
            .chain(provider.default_fast_model.iter())
        {
            assert!(
                visible.contains(default),
                "default '{default}' of provider '{}' is not visible",
                provider.name
            );
        }
    }
}

#[test]
fn descriptor_serializes_with_expected_fields() {
    let openai = get_provider("openai").unwrap();
    let json = serde_json::to_value(&openai).unwrap();

    assert_eq!(json["name"], "openai");
    assert_eq!(json["display_name"], "OpenAI");
    assert_eq!(json["api_key_required"], true);
    assert_eq!(json["default_model"], "gpt-4o");
    assert!(json["model_configurations"].is_array());
    // empty custom key lists stay off the wire
    assert!(json.get("custom_config_keys").is_none());
    // no endpoint on built-ins
    assert!(json.get("model_endpoint").is_none());

    let groq = get_provider("groq").unwrap();
    let json = serde_json::to_value(&groq).unwrap();
    assert_eq!(json["routing_provider_name"], "groq");
    assert_eq!(
        json["model_endpoint"],
        "https://api.groq.com/openai/v1/models"
    );
    assert!(json["custom_config_keys"].is_array());
}

#[test]
fn template_serializes_field_types_in_wire_form() {
    let ollama = provider_templates()
        .into_iter()
        .find(|t| t.id == "ollama")
        .unwrap();
    let json = serde_json::to_value(&ollama).unwrap();

    assert_eq!(json["category"], "local");
    assert_eq!(json["setup_difficulty"], "medium");
    assert_eq!(json["model_fetching"], "dynamic");
    assert_eq!(json["config_schema"][0]["type"], "url");
    assert_eq!(json["config_schema"][0]["name"], "api_base");
    assert_eq!(json["model_list_cache_ttl"], 300);
}

#[test]
fn azure_requires_everything_but_lists_nothing() {
    let azure = get_provider("azure").unwrap();
    assert!(azure.api_key_required);
    assert!(azure.api_base_required);
    assert!(azure.api_version_required);
    assert!(azure.deployment_name_required);
    assert!(azure.single_model_supported);
    assert!(azure.model_configurations.is_empty());
}
