//! Built-in provider descriptors.
//!
//! These five providers ship with hand-maintained model tables rather than a
//! template: their APIs either have no usable list endpoint (Azure, Bedrock,
//! Vertex) or gate it behind the same key the admin is about to enter.
//! Model tables are ordered newest first.

use crate::types::{
    CustomConfigKey, ModelConfiguration, ProviderDescriptor,
};

/// Identifier of the OpenAI provider.
pub const OPENAI_PROVIDER_NAME: &str = "openai";
/// Identifier of the Anthropic provider.
pub const ANTHROPIC_PROVIDER_NAME: &str = "anthropic";
/// Identifier of the Azure OpenAI provider.
pub const AZURE_PROVIDER_NAME: &str = "azure";
/// Identifier of the AWS Bedrock provider.
pub const BEDROCK_PROVIDER_NAME: &str = "bedrock";
/// Identifier of the GCP Vertex AI provider.
pub const VERTEXAI_PROVIDER_NAME: &str = "vertex_ai";

/// Models selectable for OpenAI configurations.
pub const OPENAI_MODEL_NAMES: &[&str] = &[
    "gpt-5",
    "gpt-5-mini",
    "gpt-5-nano",
    "o4-mini",
    "o3-mini",
    "o1-mini",
    "o3",
    "o1",
    "gpt-4",
    "gpt-4.1",
    "gpt-4o",
    "gpt-4o-mini",
    "o1-preview",
    "gpt-4-turbo",
    "gpt-4-turbo-preview",
    "gpt-4-1106-preview",
    "gpt-4-vision-preview",
    "gpt-4-0613",
    "gpt-4o-2024-08-06",
    "gpt-4-0314",
    "gpt-4-32k-0314",
    "gpt-3.5-turbo",
    "gpt-3.5-turbo-0125",
    "gpt-3.5-turbo-1106",
    "gpt-3.5-turbo-16k",
    "gpt-3.5-turbo-0613",
    "gpt-3.5-turbo-16k-0613",
    "gpt-3.5-turbo-0301",
];

/// OpenAI models shown in pickers by default.
pub const OPENAI_VISIBLE_MODEL_NAMES: &[&str] = &[
    "gpt-5",
    "gpt-5-mini",
    "o1",
    "o3-mini",
    "gpt-4o",
    "gpt-4o-mini",
];

/// Models selectable for Anthropic configurations.
pub const ANTHROPIC_MODEL_NAMES: &[&str] = &[
    "claude-3-7-sonnet-20250219",
    "claude-3-5-sonnet-20241022",
    "claude-3-5-haiku-20241022",
    "claude-3-5-sonnet-20240620",
    "claude-3-opus-20240229",
    "claude-3-sonnet-20240229",
    "claude-3-haiku-20240307",
];

/// Anthropic models shown in pickers by default.
pub const ANTHROPIC_VISIBLE_MODEL_NAMES: &[&str] =
    &["claude-3-5-sonnet-20241022", "claude-3-7-sonnet-20250219"];

/// Models selectable for Bedrock configurations. On-demand text models only;
/// embedding models and region-scoped variants are excluded.
pub const BEDROCK_MODEL_NAMES: &[&str] = &[
    "anthropic.claude-3-5-sonnet-20241022-v2:0",
    "anthropic.claude-3-5-haiku-20241022-v1:0",
    "anthropic.claude-3-5-sonnet-20240620-v1:0",
    "anthropic.claude-3-opus-20240229-v1:0",
    "anthropic.claude-3-sonnet-20240229-v1:0",
    "anthropic.claude-3-haiku-20240307-v1:0",
    "anthropic.claude-v2:1",
    "anthropic.claude-v2",
    "anthropic.claude-instant-v1",
    "meta.llama3-1-405b-instruct-v1:0",
    "meta.llama3-1-70b-instruct-v1:0",
    "meta.llama3-1-8b-instruct-v1:0",
    "meta.llama3-70b-instruct-v1:0",
    "meta.llama3-8b-instruct-v1:0",
    "mistral.mistral-large-2407-v1:0",
    "mistral.mixtral-8x7b-instruct-v0:1",
    "mistral.mistral-7b-instruct-v0:2",
    "cohere.command-r-plus-v1:0",
    "cohere.command-r-v1:0",
    "amazon.titan-text-premier-v1:0",
    "amazon.titan-text-express-v1",
    "amazon.titan-text-lite-v1",
    "ai21.jamba-instruct-v1:0",
];

/// Default (and only pre-visible) Bedrock model.
pub const BEDROCK_DEFAULT_MODEL: &str = "anthropic.claude-3-5-sonnet-20241022-v2:0";

const BEDROCK_VISIBLE_MODEL_NAMES: &[&str] = &[BEDROCK_DEFAULT_MODEL];

/// Models selectable for Vertex AI configurations.
pub const VERTEXAI_MODEL_NAMES: &[&str] = &[
    "gemini-2.5-pro-preview-06-05",
    "gemini-2.5-pro-preview-05-06",
    "gemini-2.0-flash-lite",
    "gemini-2.0-flash-lite-001",
    "gemini-2.0-flash",
    "gemini-2.0-flash-001",
    "gemini-2.0-flash-exp",
    "gemini-1.5-pro",
    "gemini-1.5-pro-001",
    "gemini-1.5-pro-002",
    "gemini-1.5-flash",
    "gemini-1.5-flash-001",
    "gemini-1.5-flash-002",
    "claude-sonnet-4",
    "claude-opus-4",
    "claude-3-7-sonnet@20250219",
];

/// Default Vertex AI model.
pub const VERTEXAI_DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Default fast Vertex AI model.
pub const VERTEXAI_DEFAULT_FAST_MODEL: &str = "gemini-2.0-flash-lite";

const VERTEXAI_VISIBLE_MODEL_NAMES: &[&str] = &[VERTEXAI_DEFAULT_MODEL, VERTEXAI_DEFAULT_FAST_MODEL];

/// Full model table for a built-in provider. Empty for providers without a
/// fixed model set (Azure).
pub fn model_names_for(provider: &str) -> &'static [&'static str] {
    match provider {
        OPENAI_PROVIDER_NAME => OPENAI_MODEL_NAMES,
        ANTHROPIC_PROVIDER_NAME => ANTHROPIC_MODEL_NAMES,
        BEDROCK_PROVIDER_NAME => BEDROCK_MODEL_NAMES,
        VERTEXAI_PROVIDER_NAME => VERTEXAI_MODEL_NAMES,
        _ => &[],
    }
}

fn visible_model_names_for(provider: &str) -> &'static [&'static str] {
    match provider {
        OPENAI_PROVIDER_NAME => OPENAI_VISIBLE_MODEL_NAMES,
        ANTHROPIC_PROVIDER_NAME => ANTHROPIC_VISIBLE_MODEL_NAMES,
        BEDROCK_PROVIDER_NAME => BEDROCK_VISIBLE_MODEL_NAMES,
        VERTEXAI_PROVIDER_NAME => VERTEXAI_VISIBLE_MODEL_NAMES,
        _ => &[],
    }
}

/// Whether a model accepts image inputs, judged from its name.
///
/// Token limits and capabilities ultimately live with the provider; this is
/// the best static guess for catalog display.
pub fn model_supports_image_input(model: &str, provider: &str) -> bool {
    let model = model.trim();
    match provider {
        OPENAI_PROVIDER_NAME | AZURE_PROVIDER_NAME => {
            model.starts_with("gpt-4o")
                || model.starts_with("gpt-4.1")
                || model.starts_with("gpt-5")
                || model.starts_with("gpt-4-turbo")
                || model.contains("vision")
                || matches!(model, "o1" | "o3" | "o4-mini")
        }
        ANTHROPIC_PROVIDER_NAME => {
            model.starts_with("claude-3")
                || model.starts_with("claude-sonnet")
                || model.starts_with("claude-opus")
        }
        BEDROCK_PROVIDER_NAME => model.starts_with("anthropic.claude-3"),
        VERTEXAI_PROVIDER_NAME => model.starts_with("gemini-") || model.starts_with("claude-"),
        "ollama" => model.contains("vision") || model.contains("llava"),
        _ => model.contains("vision"),
    }
}

/// Model configurations for a built-in provider, with visibility applied.
pub fn model_configurations_for(provider: &str) -> Vec<ModelConfiguration> {
    let visible = visible_model_names_for(provider);
    model_names_for(provider)
        .iter()
        .map(|name| ModelConfiguration {
            name: (*name).to_string(),
            is_visible: visible.contains(name),
            max_input_tokens: None,
            supports_image_input: model_supports_image_input(name, provider),
        })
        .collect()
}

/// The built-in provider descriptors, in display order.
pub fn builtin_providers() -> Vec<ProviderDescriptor> {
    vec![
        ProviderDescriptor {
            name: OPENAI_PROVIDER_NAME.to_string(),
            display_name: "OpenAI".to_string(),
            api_key_required: true,
            model_configurations: model_configurations_for(OPENAI_PROVIDER_NAME),
            default_model: Some("gpt-4o".to_string()),
            default_fast_model: Some("gpt-4o-mini".to_string()),
            ..Default::default()
        },
        ProviderDescriptor {
            name: ANTHROPIC_PROVIDER_NAME.to_string(),
            display_name: "Anthropic".to_string(),
            api_key_required: true,
            model_configurations: model_configurations_for(ANTHROPIC_PROVIDER_NAME),
            default_model: Some("claude-3-7-sonnet-20250219".to_string()),
            default_fast_model: Some("claude-3-5-sonnet-20241022".to_string()),
            ..Default::default()
        },
        ProviderDescriptor {
            name: AZURE_PROVIDER_NAME.to_string(),
            display_name: "Azure OpenAI".to_string(),
            api_key_required: true,
            api_base_required: true,
            api_version_required: true,
            deployment_name_required: true,
            single_model_supported: true,
            ..Default::default()
        },
        ProviderDescriptor {
            name: BEDROCK_PROVIDER_NAME.to_string(),
            display_name: "AWS Bedrock".to_string(),
            custom_config_keys: vec![
                CustomConfigKey::new("AWS_REGION_NAME", "AWS Region Name"),
                CustomConfigKey::new("AWS_ACCESS_KEY_ID", "AWS Access Key ID")
                    .optional()
                    .with_description(
                        "If using AWS IAM roles, AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY \
                         can be left blank.",
                    ),
                CustomConfigKey::new("AWS_SECRET_ACCESS_KEY", "AWS Secret Access Key")
                    .optional()
                    .secret()
                    .with_description(
                        "If using AWS IAM roles, AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY \
                         can be left blank.",
                    ),
            ],
            model_configurations: model_configurations_for(BEDROCK_PROVIDER_NAME),
            default_model: Some(BEDROCK_DEFAULT_MODEL.to_string()),
            default_fast_model: Some(BEDROCK_DEFAULT_MODEL.to_string()),
            ..Default::default()
        },
        ProviderDescriptor {
            name: VERTEXAI_PROVIDER_NAME.to_string(),
            display_name: "GCP Vertex AI".to_string(),
            custom_config_keys: vec![
                CustomConfigKey::new("vertex_credentials", "Credentials File")
                    .file_input()
                    .with_description(
                        "This should be a JSON file containing some private credentials.",
                    ),
                CustomConfigKey::new("vertex_location", "Location")
                    .optional()
                    .with_default("us-east1")
                    .with_description("The location of the Vertex AI model. Defaults to us-east1."),
            ],
            model_configurations: model_configurations_for(VERTEXAI_PROVIDER_NAME),
            default_model: Some(VERTEXAI_DEFAULT_MODEL.to_string()),
            default_fast_model: Some(VERTEXAI_DEFAULT_FAST_MODEL.to_string()),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_provider_set() {
        let providers = builtin_providers();
        let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["openai", "anthropic", "azure", "bedrock", "vertex_ai"]
        );
    }

    #[test]
    fn test_openai_visibility() {
        let providers = builtin_providers();
        let openai = providers.iter().find(|p| p.name == "openai").unwrap();
        assert_eq!(
            openai.model_configurations.len(),
            OPENAI_MODEL_NAMES.len()
        );
        let visible = openai.visible_model_names();
        assert_eq!(visible.len(), OPENAI_VISIBLE_MODEL_NAMES.len());
        assert!(visible.contains(&"gpt-4o".to_string()));
        assert!(!visible.contains(&"gpt-3.5-turbo-0301".to_string()));
    }

    #[test]
    fn test_azure_has_no_model_table() {
        let providers = builtin_providers();
        let azure = providers.iter().find(|p| p.name == "azure").unwrap();
        assert!(azure.model_configurations.is_empty());
        assert!(azure.deployment_name_required);
        assert!(azure.single_model_supported);
        assert!(azure.api_version_required);
        assert_eq!(azure.default_model, None);
    }

    #[test]
    fn test_bedrock_custom_keys() {
        let providers = builtin_providers();
        let bedrock = providers.iter().find(|p| p.name == "bedrock").unwrap();
        assert!(!bedrock.api_key_required);
        let region = &bedrock.custom_config_keys[0];
        assert_eq!(region.name, "AWS_REGION_NAME");
        assert!(region.is_required);
        let secret = &bedrock.custom_config_keys[2];
        assert!(secret.is_secret);
        assert!(!secret.is_required);
        assert_eq!(bedrock.default_model.as_deref(), Some(BEDROCK_DEFAULT_MODEL));
        assert_eq!(
            bedrock.visible_model_names(),
            vec![BEDROCK_DEFAULT_MODEL.to_string()]
        );
    }

    #[test]
    fn test_vertex_credentials_key_is_file_upload() {
        use crate::types::CustomConfigKeyType;

        let providers = builtin_providers();
        let vertex = providers.iter().find(|p| p.name == "vertex_ai").unwrap();
        let credentials = &vertex.custom_config_keys[0];
        assert_eq!(credentials.key_type, CustomConfigKeyType::FileInput);
        assert!(credentials.is_required);
        let location = &vertex.custom_config_keys[1];
        assert_eq!(location.default_value.as_deref(), Some("us-east1"));
        assert!(!location.is_required);
    }

    #[test]
    fn test_image_input_capability() {
        assert!(model_supports_image_input("gpt-4o", "openai"));
        assert!(model_supports_image_input("gpt-4-vision-preview", "openai"));
        assert!(!model_supports_image_input("gpt-3.5-turbo", "openai"));
        assert!(model_supports_image_input(
            "claude-3-5-sonnet-20241022",
            "anthropic"
        ));
        assert!(model_supports_image_input(
            "anthropic.claude-3-5-sonnet-20241022-v2:0",
            "bedrock"
        ));
        assert!(!model_supports_image_input("anthropic.claude-v2", "bedrock"));
        assert!(model_supports_image_input("gemini-2.0-flash", "vertex_ai"));
        assert!(model_supports_image_input("llama3.2-vision:latest", "ollama"));
        assert!(!model_supports_image_input("llama-3.1-8b-instant", "groq"));
    }
}
