//! Actions and the `ActionSet` that hosts them in a card body.
//!
//! Actions share the element registry: `Action.Submit` and `Action.OpenUrl`
//! resolve like any other discriminator, so hosts can plug in their own
//! `Action.*` kinds the same way.

use super::common::ElementProperties;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::enums::{ActionStyle, HorizontalAlignment};
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader};
use crate::parser::{ElementParser, expect_object};
use crate::warnings::WarningSink;
use serde_json::Value;
use std::any::Any;

/// Fields shared by every action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionProperties {
    pub id: Option<String>,
    pub title: Option<String>,
    pub icon_url: Option<String>,
    pub style: ActionStyle,
}

impl ActionProperties {
    fn read(reader: &PropertyReader<'_>, sink: &mut dyn WarningSink) -> Self {
        Self {
            id: reader.string("id", sink),
            title: reader.string("title", sink),
            icon_url: reader.string("iconUrl", sink),
            style: reader.enumeration("style", ActionStyle::Default, sink),
        }
    }

    fn write(&self, writer: ObjectWriter) -> ObjectWriter {
        writer
            .optional("id", self.id.clone())
            .optional("title", self.title.clone())
            .optional("iconUrl", self.icon_url.clone())
            .enumeration("style", self.style)
    }
}

/// `Action.Submit`: gathers input values and sends them with `data`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitAction {
    pub action: ActionProperties,
    pub data: Option<Value>,
}

impl SubmitAction {
    pub const TYPE: &'static str = "Action.Submit";
}

impl CardElement for SubmitAction {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.action.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        self.action
            .write(ObjectWriter::typed(Self::TYPE))
            .optional("data", self.data.clone())
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SubmitActionParser;

impl ElementParser for SubmitActionParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        Ok(Box::new(SubmitAction {
            action: ActionProperties::read(&reader, context),
            data: reader.get("data").cloned(),
        }))
    }
}

/// `Action.OpenUrl`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenUrlAction {
    pub action: ActionProperties,
    pub url: String,
}

impl OpenUrlAction {
    pub const TYPE: &'static str = "Action.OpenUrl";
}

impl CardElement for OpenUrlAction {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.action.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        self.action
            .write(ObjectWriter::typed(Self::TYPE))
            .field("url", self.url.as_str())
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenUrlActionParser;

impl ElementParser for OpenUrlActionParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        Ok(Box::new(OpenUrlAction {
            url: reader.required_string("url", OpenUrlAction::TYPE)?,
            action: ActionProperties::read(&reader, context),
        }))
    }
}

/// `ActionSet`: a row of actions placed inside the card body.
#[derive(Debug, Default, PartialEq)]
pub struct ActionSet {
    pub base: ElementProperties,
    pub actions: Vec<Box<dyn CardElement>>,
    pub horizontal_alignment: HorizontalAlignment,
}

impl ActionSet {
    pub const TYPE: &'static str = "ActionSet";
}

impl CardElement for ActionSet {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        self.base
            .write(ObjectWriter::typed(Self::TYPE))
            .elements("actions", &self.actions)
            .enumeration("horizontalAlignment", self.horizontal_alignment)
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ActionSetParser;

impl ElementParser for ActionSetParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        let base = ElementProperties::read(&reader, context);
        let horizontal_alignment =
            reader.enumeration("horizontalAlignment", HorizontalAlignment::Left, context);
        let actions = match reader.array("actions", context) {
            Some(items) => context.parse_elements(items, &reader.field_path("actions"))?,
            None => Vec::new(),
        };
        Ok(Box::new(ActionSet {
            base,
            actions,
            horizontal_alignment,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ElementParserRegistry;
    use serde_json::json;

    #[test]
    fn action_set_parses_actions() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let element = ActionSetParser
            .deserialize(
                &mut context,
                &json!({
                    "type": "ActionSet",
                    "spacing": "Medium",
                    "horizontalAlignment": "",
                    "actions": [
                        {"type": "Action.Submit", "title": "Send", "style": "positive", "data": {"k": [1, 2]}},
                        {"type": "Action.OpenUrl", "title": "Docs", "url": "https://example.com"}
                    ]
                }),
            )
            .expect("parse");
        let set = element.downcast_ref::<ActionSet>().expect("action set");
        let submit = set.actions[0].downcast_ref::<SubmitAction>().expect("submit");
        assert_eq!(submit.action.style, ActionStyle::Positive);
        assert_eq!(submit.data, Some(json!({"k": [1, 2]})));
        let open = set.actions[1].downcast_ref::<OpenUrlAction>().expect("open url");
        assert_eq!(open.url, "https://example.com");
        assert!(context.warnings().is_empty());
    }

    #[test]
    fn open_url_requires_url() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let err = OpenUrlActionParser
            .deserialize(&mut context, &json!({"type": "Action.OpenUrl", "title": "Go"}))
            .unwrap_err();
        assert!(matches!(err, ParseError::MissingRequiredField { ref field, .. } if field == "url"));
    }
}
