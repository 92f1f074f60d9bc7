use super::common::ElementProperties;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::enums::ContainerStyle;
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader, json_type_name};
use crate::parser::{ElementParser, expect_object};
use crate::warnings::{ParseWarning, WarningCode, WarningSink};
use serde_json::Value;
use std::any::Any;

fn read_children(
    reader: &PropertyReader<'_>,
    key: &str,
    context: &mut ParseContext<'_>,
) -> Result<Vec<Box<dyn CardElement>>, ParseError> {
    match reader.array(key, context) {
        Some(items) => context.parse_elements(items, &reader.field_path(key)),
        None => Ok(Vec::new()),
    }
}

/// `Container`: groups elements under one style.
#[derive(Debug, Default, PartialEq)]
pub struct Container {
    pub base: ElementProperties,
    pub items: Vec<Box<dyn CardElement>>,
    pub style: ContainerStyle,
}

impl Container {
    pub const TYPE: &'static str = "Container";
}

impl CardElement for Container {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        self.base
            .write(ObjectWriter::typed(Self::TYPE))
            .elements("items", &self.items)
            .enumeration("style", self.style)
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ContainerParser;

impl ElementParser for ContainerParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        let base = ElementProperties::read(&reader, context);
        let style = reader.enumeration("style", ContainerStyle::Default, context);
        let items = read_children(&reader, "items", context)?;
        Ok(Box::new(Container { base, items, style }))
    }
}

/// `Column`: one column of a [`ColumnSet`].
#[derive(Debug, Default, PartialEq)]
pub struct Column {
    pub base: ElementProperties,
    pub items: Vec<Box<dyn CardElement>>,
    /// `"auto"`, `"stretch"`, a pixel string such as `"50px"`, or a relative weight.
    pub width: Option<Value>,
}

impl Column {
    pub const TYPE: &'static str = "Column";
}

impl CardElement for Column {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        self.base
            .write(ObjectWriter::typed(Self::TYPE))
            .optional("width", self.width.clone())
            .elements("items", &self.items)
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnParser;

impl ElementParser for ColumnParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        let base = ElementProperties::read(&reader, context);
        let width = match reader.get("width") {
            Some(Value::String(width)) if width.is_empty() => None,
            Some(width @ (Value::String(_) | Value::Number(_))) => Some(width.clone()),
            Some(other) => {
                context.add_warning(
                    ParseWarning::new(
                        WarningCode::InvalidPropertyType,
                        format!("expected string or number, found {}", json_type_name(other)),
                    )
                    .at(reader.field_path("width")),
                );
                None
            }
            None => None,
        };
        let items = read_children(&reader, "items", context)?;
        Ok(Box::new(Column { base, items, width }))
    }
}

/// `ColumnSet`: lays its columns out side by side.
#[derive(Debug, Default, PartialEq)]
pub struct ColumnSet {
    pub base: ElementProperties,
    pub columns: Vec<Box<dyn CardElement>>,
}

impl ColumnSet {
    pub const TYPE: &'static str = "ColumnSet";
}

impl CardElement for ColumnSet {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        self.base
            .write(ObjectWriter::typed(Self::TYPE))
            .elements("columns", &self.columns)
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Columns may omit `type`; they are read as `Column` regardless.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnSetParser;

impl ElementParser for ColumnSetParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        let base = ElementProperties::read(&reader, context);
        let mut columns = Vec::new();
        if let Some(items) = reader.array("columns", context) {
            let columns_path = reader.field_path("columns");
            for (index, item) in items.iter().enumerate() {
                let path = format!("{columns_path}[{index}]");
                let Some(object) = item.as_object() else {
                    context.add_warning(
                        ParseWarning::new(WarningCode::InvalidElement, "column is not an object")
                            .at(path),
                    );
                    continue;
                };
                let typed = object
                    .get("type")
                    .and_then(Value::as_str)
                    .is_some_and(|element_type| !element_type.is_empty());
                if typed {
                    columns.push(context.parse_element(item, &path)?);
                } else {
                    let mut column = object.clone();
                    column.insert("type".to_string(), Value::String(Column::TYPE.to_string()));
                    columns.push(context.parse_element(&Value::Object(column), &path)?);
                }
            }
        }
        Ok(Box::new(ColumnSet { base, columns }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::TextBlock;
    use crate::registry::ElementParserRegistry;
    use serde_json::json;

    #[test]
    fn container_parses_nested_items() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let element = ContainerParser
            .deserialize(
                &mut context,
                &json!({
                    "type": "Container",
                    "style": "emphasis",
                    "items": [
                        {"type": "TextBlock", "text": "Inside"},
                        {"type": "Container", "items": [{"type": "TextBlock", "text": "Deeper"}]}
                    ]
                }),
            )
            .expect("parse");
        let container = element.downcast_ref::<Container>().expect("container");
        assert_eq!(container.style, ContainerStyle::Emphasis);
        let inner = container.items[1].downcast_ref::<Container>().expect("inner");
        let text = inner.items[0].downcast_ref::<TextBlock>().expect("text");
        assert_eq!(text.text, "Deeper");
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn column_set_accepts_untyped_columns() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let element = ColumnSetParser
            .deserialize(
                &mut context,
                &json!({
                    "type": "ColumnSet",
                    "columns": [
                        {"width": "auto", "items": [{"type": "TextBlock", "text": "Col 1"}]},
                        {"type": "Column", "width": 2, "items": [{"type": "TextBlock", "text": "Col 2"}]},
                        {"type": "Column", "width": true}
                    ]
                }),
            )
            .expect("parse");
        let set = element.downcast_ref::<ColumnSet>().expect("column set");
        assert_eq!(set.columns.len(), 3);
        let first = set.columns[0].downcast_ref::<Column>().expect("column");
        assert_eq!(first.width, Some(json!("auto")));
        let second = set.columns[1].downcast_ref::<Column>().expect("column");
        assert_eq!(second.width, Some(json!(2)));
        assert_eq!(context.warnings().len(), 1);
        assert_eq!(
            context.warnings()[0].path.as_deref(),
            Some("columns[2].width")
        );
        assert_eq!(set.serialize_to_json()["columns"][0]["type"], "Column");
    }
}
