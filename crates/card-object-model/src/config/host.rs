use super::{ConfigDeserialize, InputsConfig};
use crate::errors::ParseError;
use super::limits::DEFAULT_MAX_DEPTH;
use crate::json::{PropertyReader, parse_text};
use crate::warnings::{ParseWarning, WarningSink};
use serde::Serialize;

pub const DEFAULT_FONT_FAMILY: &str = "Segoe UI";

/// Rendering configuration supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    pub font_family: String,
    pub supports_interactivity: bool,
    pub image_sizes: ImageSizesConfig,
    pub inputs: InputsConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            supports_interactivity: true,
            image_sizes: ImageSizesConfig::default(),
            inputs: InputsConfig::default(),
        }
    }
}

impl HostConfig {
    /// Parses a host config document on top of the built-in defaults.
    ///
    /// Only unparseable text is an error; field-level problems come back as
    /// warnings.
    pub fn from_json_str(text: &str) -> Result<(Self, Vec<ParseWarning>), ParseError> {
        let value = parse_text(text, DEFAULT_MAX_DEPTH)?;
        let mut warnings = Vec::new();
        let config = Self::deserialize_reporting(&value, &Self::default(), "", &mut warnings);
        Ok((config, warnings))
    }
}

impl ConfigDeserialize for HostConfig {
    fn deserialize_fields(
        reader: &PropertyReader<'_>,
        default: &Self,
        sink: &mut dyn WarningSink,
    ) -> Self {
        Self {
            font_family: reader.string_or("fontFamily", &default.font_family, sink),
            supports_interactivity: reader.bool(
                "supportsInteractivity",
                default.supports_interactivity,
                sink,
            ),
            image_sizes: reader.config("imageSizes", &default.image_sizes, sink),
            inputs: reader.config("inputs", &default.inputs, sink),
        }
    }
}

/// Pixel widths for the named image sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSizesConfig {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl Default for ImageSizesConfig {
    fn default() -> Self {
        Self {
            small: 40,
            medium: 80,
            large: 160,
        }
    }
}

impl ConfigDeserialize for ImageSizesConfig {
    fn deserialize_fields(
        reader: &PropertyReader<'_>,
        default: &Self,
        sink: &mut dyn WarningSink,
    ) -> Self {
        Self {
            small: reader.u32("small", default.small, sink),
            medium: reader.u32("medium", default.medium, sink),
            large: reader.u32("large", default.large, sink),
        }
    }
}
