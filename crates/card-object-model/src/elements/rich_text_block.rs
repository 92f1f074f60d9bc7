use super::common::ElementProperties;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::enums::{ForegroundColor, HorizontalAlignment, TextSize, TextWeight};
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader};
use crate::parser::{ElementParser, expect_object};
use crate::warnings::{ParseWarning, WarningCode, WarningSink};
use serde_json::Value;
use std::any::Any;

const TEXT_RUN_TYPE: &str = "TextRun";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub size: TextSize,
    pub weight: TextWeight,
    pub color: ForegroundColor,
    pub italic: bool,
}

impl TextRun {
    fn to_json(&self) -> Value {
        ObjectWriter::typed(TEXT_RUN_TYPE)
            .field("text", self.text.as_str())
            .enumeration("size", self.size)
            .enumeration("weight", self.weight)
            .enumeration("color", self.color)
            .flag("italic", self.italic, false)
            .finish()
    }
}

/// `RichTextBlock`: a paragraph of individually styled runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichTextBlock {
    pub base: ElementProperties,
    pub inlines: Vec<TextRun>,
    pub horizontal_alignment: HorizontalAlignment,
}

impl RichTextBlock {
    pub const TYPE: &'static str = "RichTextBlock";

    pub fn plain_text(&self) -> String {
        self.inlines.iter().map(|run| run.text.as_str()).collect()
    }
}

impl CardElement for RichTextBlock {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        let inlines = self.inlines.iter().map(TextRun::to_json).collect::<Vec<_>>();
        self.base
            .write(ObjectWriter::typed(Self::TYPE))
            .field("inlines", Value::Array(inlines))
            .enumeration("horizontalAlignment", self.horizontal_alignment)
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RichTextBlockParser;

impl ElementParser for RichTextBlockParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        let base = ElementProperties::read(&reader, context);
        let mut inlines = Vec::new();
        if let Some(items) = reader.array("inlines", context) {
            for (index, item) in items.iter().enumerate() {
                let path = format!("{}[{index}]", reader.field_path("inlines"));
                match item {
                    Value::String(text) => inlines.push(TextRun {
                        text: text.clone(),
                        ..TextRun::default()
                    }),
                    Value::Object(run) => {
                        let run = PropertyReader::new(run, path);
                        inlines.push(TextRun {
                            text: run.string_or("text", "", context),
                            size: run.enumeration("size", TextSize::Default, context),
                            weight: run.enumeration("weight", TextWeight::Default, context),
                            color: run.enumeration("color", ForegroundColor::Default, context),
                            italic: run.bool("italic", false, context),
                        });
                    }
                    _ => context.add_warning(
                        ParseWarning::new(
                            WarningCode::InvalidElement,
                            "inline is neither a string nor a TextRun",
                        )
                        .at(path),
                    ),
                }
            }
        }
        Ok(Box::new(RichTextBlock {
            base,
            inlines,
            horizontal_alignment: reader.enumeration(
                "horizontalAlignment",
                HorizontalAlignment::Left,
                context,
            ),
        }))
    }
}
