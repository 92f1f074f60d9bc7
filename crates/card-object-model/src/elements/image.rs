use super::common::ElementProperties;
use crate::context::ParseContext;
use crate::element::CardElement;
use crate::enums::{HorizontalAlignment, ImageSize};
use crate::errors::ParseError;
use crate::json::{ObjectWriter, PropertyReader};
use crate::parser::{ElementParser, expect_object};
use serde_json::Value;
use std::any::Any;

/// `Image`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub base: ElementProperties,
    pub url: String,
    pub alt_text: Option<String>,
    pub size: ImageSize,
    pub horizontal_alignment: HorizontalAlignment,
}

impl Image {
    pub const TYPE: &'static str = "Image";
}

impl CardElement for Image {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        self.base
            .write(ObjectWriter::typed(Self::TYPE))
            .field("url", self.url.as_str())
            .optional("altText", self.alt_text.clone())
            .enumeration("size", self.size)
            .enumeration("horizontalAlignment", self.horizontal_alignment)
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageParser;

impl ElementParser for ImageParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        Ok(Box::new(Image {
            url: reader.required_string("url", Image::TYPE)?,
            base: ElementProperties::read(&reader, context),
            alt_text: reader.string("altText", context),
            size: reader.enumeration("size", ImageSize::Auto, context),
            horizontal_alignment: reader.enumeration(
                "horizontalAlignment",
                HorizontalAlignment::Left,
                context,
            ),
        }))
    }
}

/// `ImageSet`: a gallery of images sharing one size.
#[derive(Debug, Default, PartialEq)]
pub struct ImageSet {
    pub base: ElementProperties,
    pub images: Vec<Box<dyn CardElement>>,
    pub image_size: ImageSize,
}

impl ImageSet {
    pub const TYPE: &'static str = "ImageSet";
}

impl CardElement for ImageSet {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        let writer = self
            .base
            .write(ObjectWriter::typed(Self::TYPE))
            .elements("images", &self.images);
        // Medium is the set-level default, unlike Image's Auto.
        if self.image_size == ImageSize::Medium {
            writer.finish()
        } else {
            writer.field("imageSize", self.image_size.to_string()).finish()
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageSetParser;

impl ElementParser for ImageSetParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = expect_object(value, context)?;
        let reader = PropertyReader::new(object, context.current_path());
        let base = ElementProperties::read(&reader, context);
        let image_size = reader.enumeration("imageSize", ImageSize::Medium, context);
        let images = match reader.array("images", context) {
            Some(items) => context.parse_elements(items, &reader.field_path("images"))?,
            None => Vec::new(),
        };
        Ok(Box::new(ImageSet {
            base,
            images,
            image_size,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ElementParserRegistry;
    use serde_json::json;

    #[test]
    fn image_requires_url() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let err = ImageParser
            .deserialize(&mut context, &json!({"type": "Image", "altText": "logo"}))
            .unwrap_err();
        assert!(matches!(err, ParseError::MissingRequiredField { .. }));
    }

    #[test]
    fn image_set_parses_children() {
        let registry = ElementParserRegistry::with_defaults();
        let mut context = ParseContext::new(&registry);
        let element = ImageSetParser
            .deserialize(
                &mut context,
                &json!({
                    "type": "ImageSet",
                    "imageSize": "",
                    "images": [
                        {"type": "Image", "url": "https://example.com/a.png"},
                        {"type": "Image", "url": "https://example.com/b.png", "size": "Small"}
                    ]
                }),
            )
            .expect("parse");
        let set = element.downcast_ref::<ImageSet>().expect("image set");
        assert_eq!(set.images.len(), 2);
        assert_eq!(set.image_size, ImageSize::Medium);
        let second = set.images[1].downcast_ref::<Image>().expect("image");
        assert_eq!(second.size, ImageSize::Small);
        assert!(set.serialize_to_json().get("imageSize").is_none());
    }
}
