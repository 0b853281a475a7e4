//! Configuration field definitions for provider setup forms.
//!
//! Each provider template describes the inputs it needs (API key, server
//! URL, ...) as a list of [`FieldConfig`] values. Frontends render these
//! directly; the backend only cares about `name` and `default_value`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LlmError, Result};

/// Input widget type for a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input
    Text,
    /// Masked secret input
    Password,
    /// URL input
    Url,
    /// Dropdown, requires `options`
    Select,
    /// File upload
    File,
    /// Multi-line text input
    Textarea,
}

impl FieldType {
    /// All supported field types.
    pub const ALL: &'static [FieldType] = &[
        FieldType::Text,
        FieldType::Password,
        FieldType::Url,
        FieldType::Select,
        FieldType::File,
        FieldType::Textarea,
    ];

    /// Wire name of the field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Password => "password",
            FieldType::Url => "url",
            FieldType::Select => "select",
            FieldType::File => "file",
            FieldType::Textarea => "textarea",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self> {
        FieldType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                LlmError::InvalidParameter(format!(
                    "Invalid field type '{s}'. Must be one of: text, password, url, select, file, textarea"
                ))
            })
    }
}

/// A single input field in a provider's configuration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Key under which the value is stored in provider credentials
    pub name: String,
    /// Widget type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Human-readable label
    pub label: String,
    /// Placeholder text shown in the empty input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Help text shown alongside the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the field must be filled in
    #[serde(default = "default_required")]
    pub required: bool,
    /// Regex the submitted value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
    /// Choices for `select` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Value used when the field is left empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

fn default_required() -> bool {
    true
}

impl FieldConfig {
    /// Create a required field with the given name, type and label.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: label.into(),
            placeholder: None,
            description: None,
            required: true,
            validation: None,
            options: None,
            default_value: None,
        }
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the help text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the validation regex.
    pub fn with_validation(mut self, pattern: impl Into<String>) -> Self {
        self.validation = Some(pattern.into());
        self
    }

    /// Set the choices for a `select` field.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Check structural consistency of the field definition.
    ///
    /// `select` fields must carry options, and a validation pattern must be
    /// a valid regex.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LlmError::InvalidParameter(
                "Field name must not be empty".to_string(),
            ));
        }
        if self.field_type == FieldType::Select
            && self.options.as_ref().map_or(true, |o| o.is_empty())
        {
            return Err(LlmError::InvalidParameter(format!(
                "Select field '{}' must define options",
                self.name
            )));
        }
        if let Some(pattern) = &self.validation {
            regex::Regex::new(pattern).map_err(|e| {
                LlmError::InvalidParameter(format!(
                    "Invalid validation regex for field '{}': {e}",
                    self.name
                ))
            })?;
        }
        Ok(())
    }

    /// Check a submitted value against this field's validation regex.
    ///
    /// Fields without a pattern accept any value.
    pub fn matches_value(&self, value: &str) -> Result<bool> {
        match &self.validation {
            Some(pattern) => {
                let re = regex::Regex::new(pattern).map_err(|e| {
                    LlmError::InvalidParameter(format!(
                        "Invalid validation regex for field '{}': {e}",
                        self.name
                    ))
                })?;
                Ok(re.is_match(value))
            }
            None => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_round_trip() {
        for field_type in FieldType::ALL {
            assert_eq!(
                FieldType::from_str(field_type.as_str()).unwrap(),
                *field_type
            );
        }
        assert!(FieldType::from_str("dropdown").is_err());
    }

    #[test]
    fn test_field_defaults_to_required() {
        let field = FieldConfig::new("api_key", FieldType::Password, "API Key");
        assert!(field.required);
        assert!(field.validate().is_ok());

        let optional = field.optional();
        assert!(!optional.required);
    }

    #[test]
    fn test_select_requires_options() {
        let field = FieldConfig::new("region", FieldType::Select, "Region");
        assert!(field.validate().is_err());

        let field = field.with_options(["us-east-1", "eu-west-1"]);
        assert!(field.validate().is_ok());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let field = FieldConfig::new("api_key", FieldType::Password, "API Key")
            .with_validation("^gsk_[a-z");
        let err = field.validate().unwrap_err();
        assert!(matches!(err, LlmError::InvalidParameter(_)));
    }

    #[test]
    fn test_matches_value() {
        let field = FieldConfig::new("api_key", FieldType::Password, "API Key")
            .with_validation("^gsk_[a-zA-Z0-9]+$");
        assert!(field.matches_value("gsk_abc123").unwrap());
        assert!(!field.matches_value("sk-abc123").unwrap());

        let unconstrained = FieldConfig::new("note", FieldType::Text, "Note");
        assert!(unconstrained.matches_value("anything").unwrap());
    }

    #[test]
    fn test_serde_uses_type_key() {
        let field = FieldConfig::new("api_base", FieldType::Url, "API Base URL")
            .optional()
            .with_default("http://localhost:11434");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "url");
        assert_eq!(json["required"], false);
        assert_eq!(json["default_value"], "http://localhost:11434");
        assert!(json.get("placeholder").is_none());
    }
}
