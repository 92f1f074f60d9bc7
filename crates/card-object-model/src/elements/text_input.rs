use super::common::{ElementProperties, InputProperties};
use crate::config::InputsConfig;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::enums::TextInputStyle;
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader};
use crate::parser::{ElementParser, expect_object};
use serde_json::Value;
use std::any::Any;

/// `Input.Text`: a single or multi-line text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub base: ElementProperties,
    pub input: InputProperties,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub is_multiline: bool,
    /// Zero means unlimited.
    pub max_length: u32,
    pub style: TextInputStyle,
    pub regex: Option<String>,
}

impl TextInput {
    pub const TYPE: &'static str = "Input.Text";
}

impl CardElement for TextInput {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        let writer = self.base.write(ObjectWriter::typed(Self::TYPE));
        self.input
            .write(writer)
            .optional("placeholder", self.placeholder.clone())
            .optional("value", self.value.clone())
            .flag("isMultiline", self.is_multiline, false)
            .count("maxLength", self.max_length, 0)
            .enumeration("style", self.style)
            .optional("regex", self.regex.clone())
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
pub struct TextInputParser;

impl ElementParser for TextInputParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        Ok(Box::new(TextInput {
            base: ElementProperties::read(&reader, context),
            input: InputProperties::read(&reader, context),
            placeholder: reader.string("placeholder", context),
            value: reader.string("value", context),
            is_multiline: reader.bool("isMultiline", false, context),
            max_length: reader.u32("maxLength", 0, context),
            style: reader.enumeration("style", TextInputStyle::Text, context),
            regex: reader.string("regex", context),
        }))
    }
}
