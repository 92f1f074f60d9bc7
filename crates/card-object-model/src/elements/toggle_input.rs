use super::common::{ElementProperties, InputProperties};
use crate::config::InputsConfig;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader};
use crate::parser::{ElementParser, expect_object};
use serde_json::Value;
use std::any::Any;

const DEFAULT_VALUE_ON: &str = "true";
const DEFAULT_VALUE_OFF: &str = "false";

/// `Input.Toggle`: a checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleInput {
    pub base: ElementProperties,
    pub input: InputProperties,
    pub title: String,
    pub value: Option<String>,
    pub value_on: String,
    pub value_off: String,
    pub wrap: bool,
}

impl ToggleInput {
    pub const TYPE: &'static str = "Input.Toggle";

    pub fn is_on(&self) -> bool {
        self.value.as_deref() == Some(self.value_on.as_str())
    }
}

impl Default for ToggleInput {
    fn default() -> Self {
        Self {
            base: ElementProperties::default(),
            input: InputProperties::default(),
            title: String::new(),
            value: None,
            value_on: DEFAULT_VALUE_ON.to_string(),
            value_off: DEFAULT_VALUE_OFF.to_string(),
            wrap: false,
        }
    }
}

impl CardElement for ToggleInput {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        let writer = self.base.write(ObjectWriter::typed(Self::TYPE));
        let mut writer = self
            .input
            .write(writer)
            .non_empty("title", &self.title)
            .optional("value", self.value.clone());
        if self.value_on != DEFAULT_VALUE_ON {
            writer = writer.field("valueOn", self.value_on.as_str());
        }
        if self.value_off != DEFAULT_VALUE_OFF {
            writer = writer.field("valueOff", self.value_off.as_str());
        }
        writer.flag("wrap", self.wrap, false).finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn inputs_config(&self) -> Option<&InputsConfig> {
        Some(&self.input.inputs)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ToggleInputParser;

impl ElementParser for ToggleInputParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        Ok(Box::new(ToggleInput {
            base: ElementProperties::read(&reader, context),
            input: InputProperties::read(&reader, context),
            title: reader.string_or("title", "", context),
            value: reader.string("value", context),
            value_on: reader.string_or("valueOn", DEFAULT_VALUE_ON, context),
            value_off: reader.string_or("valueOff", DEFAULT_VALUE_OFF, context),
            wrap: reader.bool("wrap", false, context),
        }))
    }
}
