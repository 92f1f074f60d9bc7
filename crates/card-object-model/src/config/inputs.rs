use super::ConfigDeserialize;
use crate::enums::{ForegroundColor, Spacing, TextSize, TextWeight};
use crate::json::PropertyReader;
use crate::warnings::WarningSink;
use serde::Serialize;

/// Styling of input labels and validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputsConfig {
    pub input_labels: InputLabelsConfig,
    pub error_message: ErrorMessageConfig,
}

impl ConfigDeserialize for InputsConfig {
    fn deserialize_fields(
        reader: &PropertyReader<'_>,
        default: &Self,
        sink: &mut dyn WarningSink,
    ) -> Self {
        Self {
            input_labels: reader.config("inputLabels", &default.input_labels, sink),
            error_message: reader.config("errorMessage", &default.error_message, sink),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLabelsConfig {
    pub input_spacing: Spacing,
    pub required_inputs: LabelConfig,
    pub optional_inputs: LabelConfig,
}

impl Default for InputLabelsConfig {
    fn default() -> Self {
        Self {
            input_spacing: Spacing::Default,
            required_inputs: LabelConfig::required(),
            optional_inputs: LabelConfig::default(),
        }
    }
}

impl ConfigDeserialize for InputLabelsConfig {
    fn deserialize_fields(
        reader: &PropertyReader<'_>,
        default: &Self,
        sink: &mut dyn WarningSink,
    ) -> Self {
        Self {
            input_spacing: reader.enumeration("inputSpacing", default.input_spacing, sink),
            required_inputs: reader.config("requiredInputs", &default.required_inputs, sink),
            optional_inputs: reader.config("optionalInputs", &default.optional_inputs, sink),
        }
    }
}

/// Appearance of the label shown above an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelConfig {
    /// Label text used when the input declares none.
    pub label: String,
    pub color: ForegroundColor,
    pub is_subtle: bool,
    pub size: TextSize,
    pub suffix: String,
    pub weight: TextWeight,
}

impl LabelConfig {
    /// Defaults for labels of inputs marked `isRequired`.
    pub fn required() -> Self {
        Self {
            suffix: " *".to_string(),
            ..Self::default()
        }
    }
}

impl ConfigDeserialize for LabelConfig {
    fn deserialize_fields(
        reader: &PropertyReader<'_>,
        default: &Self,
        sink: &mut dyn WarningSink,
    ) -> Self {
        Self {
            label: reader.string_or("label", &default.label, sink),
            color: reader.enumeration("color", default.color, sink),
            is_subtle: reader.bool("isSubtle", default.is_subtle, sink),
            size: reader.enumeration("size", default.size, sink),
            suffix: reader.string_or("suffix", &default.suffix, sink),
            weight: reader.enumeration("weight", default.weight, sink),
        }
    }
}

/// Appearance of the validation message shown under an invalid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessageConfig {
    pub size: TextSize,
    pub spacing: Spacing,
    pub weight: TextWeight,
}

impl ConfigDeserialize for ErrorMessageConfig {
    fn deserialize_fields(
        reader: &PropertyReader<'_>,
        default: &Self,
        sink: &mut dyn WarningSink,
    ) -> Self {
        Self {
            size: reader.enumeration("size", default.size, sink),
            spacing: reader.enumeration("spacing", default.spacing, sink),
            weight: reader.enumeration("weight", default.weight, sink),
        }
    }
}
