use super::common::ElementProperties;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::enums::{ForegroundColor, HorizontalAlignment, TextSize, TextWeight};
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader};
use crate::parser::{ElementParser, expect_object};
use serde_json::Value;
use std::any::Any;

/// `TextBlock`: a run of plain or markdown text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pub base: ElementProperties,
    pub text: String,
    pub size: TextSize,
    pub weight: TextWeight,
    pub color: ForegroundColor,
    pub horizontal_alignment: HorizontalAlignment,
    pub is_subtle: bool,
    pub wrap: bool,
    /// Zero means unlimited.
    pub max_lines: u32,
}

impl TextBlock {
    pub const TYPE: &'static str = "TextBlock";
}

impl CardElement for TextBlock {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        self.base
            .write(ObjectWriter::typed(Self::TYPE))
            .field("text", self.text.as_str())
            .enumeration("size", self.size)
            .enumeration("weight", self.weight)
            .enumeration("color", self.color)
            .enumeration("horizontalAlignment", self.horizontal_alignment)
            .flag("isSubtle", self.is_subtle, false)
            .flag("wrap", self.wrap, false)
            .count("maxLines", self.max_lines, 0)
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextBlockParser;

impl ElementParser for TextBlockParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        Ok(Box::new(TextBlock {
            base: ElementProperties::read(&reader, context),
            text: reader.string_or("text", "", context),
            size: reader.enumeration("size", TextSize::Default, context),
            weight: reader.enumeration("weight", TextWeight::Default, context),
            color: reader.enumeration("color", ForegroundColor::Default, context),
            horizontal_alignment: reader.enumeration(
                "horizontalAlignment",
                HorizontalAlignment::Left,
                context,
            ),
            is_subtle: reader.bool("isSubtle", false, context),
            wrap: reader.bool("wrap", false, context),
            max_lines: reader.u32("maxLines", 0, context),
        }))
    }
}
