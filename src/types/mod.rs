//! Core data types: provider templates, configuration fields and catalog
//! descriptors.

pub mod descriptor;
pub mod field;
pub mod template;

pub use descriptor::{
    CustomConfigKey, CustomConfigKeyType, ModelConfiguration, ProviderDescriptor,
};
pub use field::{FieldConfig, FieldType};
pub use template::{
    ModelFetching, ProviderCategory, ProviderTemplate, ProviderTemplateBuilder, SetupDifficulty,
};
