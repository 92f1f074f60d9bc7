use crate::context::ParseContext;
use crate::element::CardElement;
use crate::errors::ParseError;
use crate::parser::{ElementParser, expect_object};
use serde_json::Value;
use std::any::Any;

/// Discriminator recorded when an unknown payload carries no usable `type`.
pub const UNKNOWN_ELEMENT_TYPE: &str = "Unknown";

/// An element of a kind nobody registered. Its payload is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownElement {
    element_type: String,
    payload: Value,
}

impl UnknownElement {
    pub fn new(payload: Value) -> Self {
        let element_type = payload
            .get("type")
            .and_then(Value::as_str)
            .filter(|element_type| !element_type.is_empty())
            .unwrap_or(UNKNOWN_ELEMENT_TYPE)
            .to_string();
        Self {
            element_type,
            payload,
        }
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

impl CardElement for UnknownElement {
    fn element_type(&self) -> &str {
        &self.element_type
    }

    fn id(&self) -> Option<&str> {
        self.payload.get("id").and_then(Value::as_str)
    }

    fn serialize_to_json(&self) -> Value {
        self.payload.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Fallback parser; accepts any object without inspecting it.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnknownElementParser;

impl ElementParser for UnknownElementParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        expect_object(value, context)?;
        Ok(Box::new(UnknownElement::new(value.clone())))
    }
}
