//! The top-level `AdaptiveCard` document.

use crate::config::{HostConfig, ParseLimits};
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader, parse_text};
use crate::registry::ElementParserRegistry;
use crate::warnings::{ParseWarning, WarningCode, WarningSink};
use serde_json::Value;

pub const ADAPTIVE_CARD_TYPE: &str = "AdaptiveCard";

pub const DEFAULT_CARD_VERSION: &str = "1.5";

#[derive(Debug, PartialEq)]
pub struct AdaptiveCard {
    pub version: String,
    pub fallback_text: Option<String>,
    pub lang: Option<String>,
    pub body: Vec<Box<dyn CardElement>>,
    pub actions: Vec<Box<dyn CardElement>>,
}

impl Default for AdaptiveCard {
    fn default() -> Self {
        Self {
            version: DEFAULT_CARD_VERSION.to_string(),
            fallback_text: None,
            lang: None,
            body: Vec::new(),
            actions: Vec::new(),
        }
    }
}

/// A parsed card plus the warnings recorded while parsing it.
#[derive(Debug)]
pub struct ParseResult {
    pub card: AdaptiveCard,
    pub warnings: Vec<ParseWarning>,
}

impl AdaptiveCard {
    pub fn deserialize(context: &mut ParseContext<'_>, value: &Value) -> Result<Self, ParseError> {
        let object = value
            .as_object()
            .ok_or_else(|| ParseError::expected_object("<root>"))?;
        let reader = PropertyReader::new(object, "");

        match reader.get("type") {
            Some(Value::String(card_type)) if card_type == ADAPTIVE_CARD_TYPE => {}
            None => {}
            Some(other) => context.add_warning(
                ParseWarning::new(
                    WarningCode::InvalidPropertyType,
                    format!("expected `{ADAPTIVE_CARD_TYPE}`, found {other}"),
                )
                .at("type"),
            ),
        }

        let version = reader.string_or("version", DEFAULT_CARD_VERSION, context);
        let fallback_text = reader.string("fallbackText", context);
        let lang = reader.string("lang", context);
        let body = match reader.array("body", context) {
            Some(items) => context.parse_elements(items, "body")?,
            None => Vec::new(),
        };
        let actions = match reader.array("actions", context) {
            Some(items) => context.parse_elements(items, "actions")?,
            None => Vec::new(),
        };

        Ok(Self {
            version,
            fallback_text,
            lang,
            body,
            actions,
        })
    }

    pub fn deserialize_from_str(
        context: &mut ParseContext<'_>,
        text: &str,
    ) -> Result<Self, ParseError> {
        let value = parse_text(text, context.limits().max_depth)?;
        Self::deserialize(context, &value)
    }

    /// Parses card text with its own context and returns the collected warnings.
    pub fn parse(
        registry: &ElementParserRegistry,
        host_config: &HostConfig,
        limits: ParseLimits,
        text: &str,
    ) -> Result<ParseResult, ParseError> {
        let mut context = ParseContext::new(registry)
            .with_host_config(host_config.clone())
            .with_limits(limits);
        let card = Self::deserialize_from_str(&mut context, text)?;
        let warnings = context.into_warnings();
        tracing::debug!(
            body = card.body.len(),
            actions = card.actions.len(),
            warnings = warnings.len(),
            "parsed adaptive card"
        );
        Ok(ParseResult { card, warnings })
    }

    pub fn serialize_to_json(&self) -> Value {
        ObjectWriter::typed(ADAPTIVE_CARD_TYPE)
            .field("version", self.version.as_str())
            .optional("fallbackText", self.fallback_text.clone())
            .optional("lang", self.lang.clone())
            .field(
                "body",
                Value::Array(self.body.iter().map(|e| e.serialize_to_json()).collect()),
            )
            .elements("actions", &self.actions)
            .finish()
    }

    /// First element with `id`, searching body, actions and nested
    /// collections depth first.
    pub fn find_by_id(&self, id: &str) -> Option<&dyn CardElement> {
        self.body
            .iter()
            .chain(self.actions.iter())
            .find_map(|element| find_in(element.as_ref(), id))
    }
}

fn find_in<'a>(element: &'a dyn CardElement, id: &str) -> Option<&'a dyn CardElement> {
    use crate::elements::{ActionSet, Column, ColumnSet, Container, ImageSet};

    if element.id() == Some(id) {
        return Some(element);
    }
    let children: &[Box<dyn CardElement>] =
        if let Some(container) = element.downcast_ref::<Container>() {
            &container.items
        } else if let Some(column) = element.downcast_ref::<Column>() {
            &column.items
        } else if let Some(set) = element.downcast_ref::<ColumnSet>() {
            &set.columns
        } else if let Some(set) = element.downcast_ref::<ImageSet>() {
            &set.images
        } else if let Some(set) = element.downcast_ref::<ActionSet>() {
            &set.actions
        } else {
            &[]
        };
    children.iter().find_map(|child| find_in(child.as_ref(), id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{TextBlock, TextInput, UnknownElement};
    use serde_json::json;

    #[test]
    fn parses_body_and_actions() {
        let registry = ElementParserRegistry::with_defaults();
        let result = AdaptiveCard::parse(
            &registry,
            &HostConfig::default(),
            ParseLimits::default(),
            &json!({
                "type": "AdaptiveCard",
                "version": "1.4",
                "body": [
                    {"type": "TextBlock", "text": "Hello"},
                    {"type": "Container", "items": [{"type": "Input.Text", "id": "name"}]},
                    {"type": "Custom.Widget", "id": "w"}
                ],
                "actions": [{"type": "Action.Submit", "title": "Send"}]
            })
            .to_string(),
        )
        .expect("parse");
        let card = result.card;
        assert_eq!(card.version, "1.4");
        assert_eq!(card.body.len(), 3);
        assert!(card.body[0].is::<TextBlock>());
        assert!(card.body[2].is::<UnknownElement>());
        assert!(card.find_by_id("name").is_some_and(|e| e.is::<TextInput>()));
        assert_eq!(card.actions.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::UnknownElementType);
        assert_eq!(result.warnings[0].path.as_deref(), Some("body[2]"));
    }

    #[test]
    fn wrong_card_type_warns() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let card = AdaptiveCard::deserialize(&mut context, &json!({"type": "MessageCard"}))
            .expect("parse");
        assert_eq!(card.version, DEFAULT_CARD_VERSION);
        assert_eq!(context.warnings().len(), 1);
    }

    #[test]
    fn root_must_be_object() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let err = AdaptiveCard::deserialize_from_str(&mut context, "[]").unwrap_err();
        assert!(matches!(err, ParseError::ExpectedObject { .. }));
    }
}
