//! Provider descriptors.
//!
//! Descriptors are the read-side view of the catalog: what an admin UI needs
//! to render a provider's setup form and model picker. Built-in providers are
//! declared directly as descriptors; template-based providers are converted
//! in [`crate::catalog::convert`].

use serde::{Deserialize, Serialize};

/// Input widget for a custom configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomConfigKeyType {
    /// Plain text input
    #[default]
    TextInput,
    /// File upload, stored as the file's contents
    FileInput,
}

/// A provider-specific configuration key outside the standard
/// key/base/version trio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomConfigKey {
    /// Key under which the value is stored
    pub name: String,
    /// Human-readable label
    pub display_name: String,
    /// Help text shown alongside the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the key must be filled in
    #[serde(default = "default_required")]
    pub is_required: bool,
    /// Whether the value should be masked and stored encrypted
    #[serde(default)]
    pub is_secret: bool,
    /// Input widget
    #[serde(default)]
    pub key_type: CustomConfigKeyType,
    /// Value used when the key is left empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

fn default_required() -> bool {
    true
}

impl CustomConfigKey {
    /// Create a required text key.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: None,
            is_required: true,
            is_secret: false,
            key_type: CustomConfigKeyType::TextInput,
            default_value: None,
        }
    }

    /// Set the help text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the key as optional.
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Mark the value as secret.
    pub fn secret(mut self) -> Self {
        self.is_secret = true;
        self
    }

    /// Collect the value through a file upload.
    pub fn file_input(mut self) -> Self {
        self.key_type = CustomConfigKeyType::FileInput;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// A single model offered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfiguration {
    /// Model name as the provider knows it
    pub name: String,
    /// Whether the model shows up in pickers by default
    pub is_visible: bool,
    /// Context window size, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_tokens: Option<u32>,
    /// Whether the model accepts image inputs
    pub supports_image_input: bool,
}

impl ModelConfiguration {
    /// A model visible in pickers by default.
    pub fn visible(name: impl Into<String>, supports_image_input: bool) -> Self {
        Self {
            name: name.into(),
            is_visible: true,
            max_input_tokens: None,
            supports_image_input,
        }
    }

    /// A model hidden from pickers by default.
    pub fn hidden(name: impl Into<String>, supports_image_input: bool) -> Self {
        Self {
            name: name.into(),
            is_visible: false,
            max_input_tokens: None,
            supports_image_input,
        }
    }
}

/// Everything a client needs to configure one provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    /// Stable identifier, e.g. `"openai"`
    pub name: String,
    /// Human-readable name, e.g. `"OpenAI"`
    pub display_name: String,
    /// Whether an API key is required
    #[serde(default)]
    pub api_key_required: bool,
    /// Whether a base URL is required
    #[serde(default)]
    pub api_base_required: bool,
    /// Whether an API version is required
    #[serde(default)]
    pub api_version_required: bool,
    /// Provider-specific configuration keys
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_config_keys: Vec<CustomConfigKey>,
    /// Known models, with visibility flags
    #[serde(default)]
    pub model_configurations: Vec<ModelConfiguration>,
    /// Model preselected as the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
    /// Model preselected for fast/cheap tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fast_model: Option<String>,
    /// Whether a deployment name must be supplied (Azure-style)
    #[serde(default)]
    pub deployment_name_required: bool,
    /// Whether the provider serves exactly one model per configuration
    #[serde(default)]
    pub single_model_supported: bool,
    /// Endpoint serving the live model list, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_endpoint: Option<String>,
    /// Provider name understood by the routing layer, when it differs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_provider_name: Option<String>,
}

impl ProviderDescriptor {
    /// Names of the models visible in pickers by default.
    pub fn visible_model_names(&self) -> Vec<String> {
        self.model_configurations
            .iter()
            .filter(|m| m.is_visible)
            .map(|m| m.name.clone())
            .collect()
    }

    /// Look up a model configuration by name.
    pub fn model_configuration(&self, model: &str) -> Option<&ModelConfiguration> {
        self.model_configurations.iter().find(|m| m.name == model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_key_builder() {
        let key = CustomConfigKey::new("AWS_SECRET_ACCESS_KEY", "AWS Secret Access Key")
            .optional()
            .secret();
        assert!(!key.is_required);
        assert!(key.is_secret);
        assert_eq!(key.key_type, CustomConfigKeyType::TextInput);

        let upload = CustomConfigKey::new("vertex_credentials", "Credentials File").file_input();
        assert_eq!(upload.key_type, CustomConfigKeyType::FileInput);
    }

    #[test]
    fn test_key_type_wire_names() {
        let json = serde_json::to_value(CustomConfigKeyType::FileInput).unwrap();
        assert_eq!(json, "file_input");
        let json = serde_json::to_value(CustomConfigKeyType::TextInput).unwrap();
        assert_eq!(json, "text_input");
    }

    #[test]
    fn test_visible_model_names() {
        let descriptor = ProviderDescriptor {
            name: "acme".to_string(),
            display_name: "Acme".to_string(),
            model_configurations: vec![
                ModelConfiguration::visible("acme-large", false),
                ModelConfiguration::hidden("acme-legacy", false),
            ],
            ..Default::default()
        };
        assert_eq!(descriptor.visible_model_names(), vec!["acme-large"]);
        assert!(descriptor.model_configuration("acme-legacy").is_some());
        assert!(descriptor.model_configuration("missing").is_none());
    }
}
