//! Conversion from provider templates to catalog descriptors.

use crate::catalog::builtin::model_supports_image_input;
use crate::types::{
    CustomConfigKey, CustomConfigKeyType, FieldType, ModelConfiguration, ProviderDescriptor,
    ProviderTemplate,
};

/// Model configurations derived from a template's curated list. Every
/// suggested model starts out visible.
pub fn model_configurations_from_template(template: &ProviderTemplate) -> Vec<ModelConfiguration> {
    template
        .popular_models
        .iter()
        .map(|name| ModelConfiguration {
            name: name.clone(),
            is_visible: true,
            max_input_tokens: None,
            supports_image_input: model_supports_image_input(name, &template.routing_provider_name),
        })
        .collect()
}

/// Build the descriptor view of a template.
///
/// Config fields become custom config keys: password fields turn secret,
/// file fields keep their upload widget, and defaults carry over. The
/// standard `api_key_required`/`api_base_required` flags stay false since the
/// template's own schema already covers those inputs.
pub fn descriptor_from_template(template: &ProviderTemplate) -> ProviderDescriptor {
    let custom_config_keys = template
        .config_schema
        .iter()
        .map(|field| CustomConfigKey {
            name: field.name.clone(),
            display_name: field.label.clone(),
            description: field.description.clone(),
            is_required: field.required,
            is_secret: field.field_type == FieldType::Password,
            key_type: if field.field_type == FieldType::File {
                CustomConfigKeyType::FileInput
            } else {
                CustomConfigKeyType::TextInput
            },
            default_value: field.default_value.clone(),
        })
        .collect();

    let default_model = template.popular_models.first().cloned();
    let default_fast_model = template
        .popular_models
        .get(1)
        .cloned()
        .or_else(|| default_model.clone());

    ProviderDescriptor {
        name: template.id.clone(),
        display_name: template.name.clone(),
        api_key_required: false,
        api_base_required: false,
        api_version_required: false,
        custom_config_keys,
        model_configurations: model_configurations_from_template(template),
        default_model,
        default_fast_model,
        deployment_name_required: false,
        single_model_supported: false,
        model_endpoint: template.model_endpoint.clone(),
        routing_provider_name: Some(template.routing_provider_name.clone()),
    }
}
