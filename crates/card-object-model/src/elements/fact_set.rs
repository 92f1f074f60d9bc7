use super::common::ElementProperties;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader};
use crate::parser::{ElementParser, expect_object};
use crate::warnings::{ParseWarning, WarningCode, WarningSink};
use serde_json::Value;
use std::any::Any;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

/// `FactSet`: title/value pairs rendered as a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactSet {
    pub base: ElementProperties,
    pub facts: Vec<Fact>,
}

impl FactSet {
    pub const TYPE: &'static str = "FactSet";
}

impl CardElement for FactSet {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        let facts = self
            .facts
            .iter()
            .map(|fact| {
                ObjectWriter::untyped()
                    .field("title", fact.title.as_str())
                    .field("value", fact.value.as_str())
                    .finish()
            })
            .collect::<Vec<_>>();
        self.base
            .write(ObjectWriter::typed(Self::TYPE))
            .field("facts", Value::Array(facts))
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FactSetParser;

impl ElementParser for FactSetParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        let base = ElementProperties::read(&reader, context);
        let mut facts = Vec::new();
        if let Some(items) = reader.array("facts", context) {
            for (index, item) in items.iter().enumerate() {
                let path = format!("{}[{index}]", reader.field_path("facts"));
                let Some(fact) = item.as_object() else {
                    context.add_warning(
                        ParseWarning::new(WarningCode::InvalidElement, "fact is not an object")
                            .at(path),
                    );
                    continue;
                };
                let fact = PropertyReader::new(fact, path);
                facts.push(Fact {
                    title: fact.required_string("title", FactSet::TYPE)?,
                    value: fact.required_string("value", FactSet::TYPE)?,
                });
            }
        }
        Ok(Box::new(FactSet { base, facts }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ElementParserRegistry;
    use serde_json::json;

    #[test]
    fn reads_facts() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let element = FactSetParser
            .deserialize(
                &mut context,
                &json!({"type": "FactSet", "facts": [{"title": "Name", "value": "John"}, {"title": "Age", "value": "30"}]}),
            )
            .expect("parse");
        let set = element.downcast_ref::<FactSet>().expect("fact set");
        assert_eq!(
            set.facts[1],
            Fact {
                title: "Age".into(),
                value: "30".into()
            }
        );
    }

    #[test]
    fn fact_without_title_is_fatal() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let err = FactSetParser
            .deserialize(&mut context, &json!({"type": "FactSet", "facts": [{"value": "x"}]}))
            .unwrap_err();
        assert!(matches!(err, ParseError::MissingRequiredField { ref field, .. } if field == "title"));
    }
}
