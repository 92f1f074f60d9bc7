use super::common::{ElementProperties, InputProperties};
use crate::config::InputsConfig;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::enums::ChoiceSetStyle;
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader};
use crate::parser::{ElementParser, expect_object};
use crate::warnings::{ParseWarning, WarningCode, WarningSink};
use serde_json::Value;
use std::any::Any;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub title: String,
    pub value: String,
}

/// `Input.ChoiceSet`: a drop-down or radio/checkbox list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSetInput {
    pub base: ElementProperties,
    pub input: InputProperties,
    pub choices: Vec<Choice>,
    pub is_multi_select: bool,
    pub style: ChoiceSetStyle,
    pub value: Option<String>,
    pub placeholder: Option<String>,
}

impl ChoiceSetInput {
    pub const TYPE: &'static str = "Input.ChoiceSet";

    /// Selected values; multi-select inputs store them comma separated.
    pub fn selected_values(&self) -> Vec<&str> {
        match self.value.as_deref() {
            None | Some("") => Vec::new(),
            Some(value) if self.is_multi_select => value.split(',').map(str::trim).collect(),
            Some(value) => vec![value],
        }
    }
}

impl CardElement for ChoiceSetInput {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        let choices = self
            .choices
            .iter()
            .map(|choice| {
                ObjectWriter::untyped()
                    .field("title", choice.title.as_str())
                    .field("value", choice.value.as_str())
                    .finish()
            })
            .collect::<Vec<_>>();
        let writer = self.base.write(ObjectWriter::typed(Self::TYPE));
        self.input
            .write(writer)
            .field("choices", Value::Array(choices))
            .flag("isMultiSelect", self.is_multi_select, false)
            .enumeration("style", self.style)
            .optional("value", self.value.clone())
            .optional("placeholder", self.placeholder.clone())
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn inputs_config(&self) -> Option<&InputsConfig> {
        Some(&self.input.inputs)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChoiceSetInputParser;

impl ChoiceSetInputParser {
    fn read_choices(
        reader: &PropertyReader<'_>,
        context: &mut ParseContext<'_>,
    ) -> Result<Vec<Choice>, ParseError> {
        let Some(items) = reader.array("choices", context) else {
            return Ok(Vec::new());
        };
        let mut choices = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let path = format!("{}[{index}]", reader.field_path("choices"));
            let Some(object) = item.as_object() else {
                context.add_warning(
                    ParseWarning::new(WarningCode::InvalidElement, "choice is not an object")
                        .at(path),
                );
                continue;
            };
            let choice = PropertyReader::new(object, path);
            choices.push(Choice {
                title: choice.required_string("title", ChoiceSetInput::TYPE)?,
                value: choice.required_string("value", ChoiceSetInput::TYPE)?,
            });
        }
        Ok(choices)
    }
}

impl ElementParser for ChoiceSetInputParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        Ok(Box::new(ChoiceSetInput {
            base: ElementProperties::read(&reader, context),
            input: InputProperties::read(&reader, context),
            choices: Self::read_choices(&reader, context)?,
            is_multi_select: reader.bool("isMultiSelect", false, context),
            style: reader.enumeration("style", ChoiceSetStyle::Compact, context),
            value: reader.string("value", context),
            placeholder: reader.string("placeholder", context),
        }))
    }
}
