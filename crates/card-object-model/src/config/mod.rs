//! Host configuration with per-field default fallback.
//!
//! Every config type deserializes as a pure function of `(json, default)`:
//! a correctly typed field wins, anything else keeps the default's value.

pub mod host;
pub mod inputs;
pub mod limits;

pub use host::{HostConfig, ImageSizesConfig};
pub use inputs::{ErrorMessageConfig, InputLabelsConfig, InputsConfig, LabelConfig};
pub use limits::{MAX_DEPTH_ENV, ParseLimits};

use crate::json::{PropertyReader, json_type_name};
use crate::warnings::{DiscardWarnings, ParseWarning, WarningCode, WarningSink};
use serde_json::Value;

/// Deserialization that never fails and never leaves a config half built.
pub trait ConfigDeserialize: Sized + Clone {
    /// Reads every field of `Self` from an object, falling back to `default`.
    fn deserialize_fields(
        reader: &PropertyReader<'_>,
        default: &Self,
        sink: &mut dyn WarningSink,
    ) -> Self;

    fn deserialize_reporting(
        value: &Value,
        default: &Self,
        path: &str,
        sink: &mut dyn WarningSink,
    ) -> Self {
        match value {
            Value::Object(object) => {
                Self::deserialize_fields(&PropertyReader::new(object, path), default, sink)
            }
            Value::Null => default.clone(),
            other => {
                let mut warning = ParseWarning::new(
                    WarningCode::InvalidPropertyType,
                    format!("expected object, found {}", json_type_name(other)),
                );
                if !path.is_empty() {
                    warning = warning.at(path);
                }
                sink.add_warning(warning);
                default.clone()
            }
        }
    }

    fn deserialize(value: &Value, default: &Self) -> Self {
        Self::deserialize_reporting(value, default, "", &mut DiscardWarnings)
    }
}
