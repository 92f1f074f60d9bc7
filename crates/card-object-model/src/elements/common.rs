//! Properties shared by several element kinds.

use crate::config::{ConfigDeserialize, InputsConfig};
use crate::context::ParseContext;
use crate::enums::Spacing;
use crate::json::{ObjectWriter, PropertyReader};
use crate::warnings::WarningSink;

/// Fields every element carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementProperties {
    pub id: Option<String>,
    pub spacing: Spacing,
    pub separator: bool,
    pub is_visible: bool,
}

impl Default for ElementProperties {
    fn default() -> Self {
        Self {
            id: None,
            spacing: Spacing::Default,
            separator: false,
            is_visible: true,
        }
    }
}

impl ElementProperties {
    pub fn read(reader: &PropertyReader<'_>, sink: &mut dyn WarningSink) -> Self {
        Self {
            id: reader.string("id", sink),
            spacing: reader.enumeration("spacing", Spacing::Default, sink),
            separator: reader.bool("separator", false, sink),
            is_visible: reader.bool("isVisible", true, sink),
        }
    }

    pub fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .optional("id", self.id.clone())
            .enumeration("spacing", self.spacing)
            .flag("separator", self.separator, false)
            .flag("isVisible", self.is_visible, true)
    }
}

/// Fields shared by `Input.*` elements.
///
/// `inputLabels` and `errorMessage` on the element override the host
/// config's input styling field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProperties {
    pub label: Option<String>,
    pub is_required: bool,
    pub inputs: InputsConfig,
}

impl InputProperties {
    pub fn read(reader: &PropertyReader<'_>, context: &mut ParseContext<'_>) -> Self {
        let defaults = context.host_config().inputs.clone();
        Self {
            label: reader.string("label", context),
            is_required: reader.bool("isRequired", false, context),
            inputs: InputsConfig::deserialize_fields(reader, &defaults, context),
        }
    }

    /// Input styling is written in full so a re-parse does not depend on the
    /// host config in effect.
    pub fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .optional("label", self.label.clone())
            .flag("isRequired", self.is_required, false)
            .serialized("inputLabels", &self.inputs.input_labels)
            .serialized("errorMessage", &self.inputs.error_message)
    }

    /// Label text as displayed: the input's own label, else the configured
    /// one, followed by the required/optional suffix.
    pub fn display_label(&self) -> Option<String> {
        let labels = &self.inputs.input_labels;
        let style = if self.is_required {
            &labels.required_inputs
        } else {
            &labels.optional_inputs
        };
        let text = self
            .label
            .as_deref()
            .filter(|label| !label.is_empty())
            .or_else(|| Some(style.label.as_str()).filter(|label| !label.is_empty()))?;
        Some(format!("{text}{}", style.suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_appends_suffix() {
        let mut input = InputProperties {
            label: Some("Name".into()),
            is_required: true,
            ..InputProperties::default()
        };
        assert_eq!(input.display_label().as_deref(), Some("Name *"));
        input.is_required = false;
        assert_eq!(input.display_label().as_deref(), Some("Name"));
        input.label = None;
        assert_eq!(input.display_label(), None);
        input.inputs.input_labels.optional_inputs.label = "Value".into();
        assert_eq!(input.display_label().as_deref(), Some("Value"));
    }
}
