//! Typed field access over `serde_json` objects.
//!
//! `PropertyReader` reads optional fields with fallback and reports anomalies
//! to a `WarningSink`. `ObjectWriter` builds the JSON written back by
//! `serialize_to_json`, skipping default-valued fields.

use crate::config::ConfigDeserialize;
use crate::element::CardElement;
use crate::enums::JsonEnum;
use crate::errors::ParseError;
use crate::warnings::{ParseWarning, WarningCode, WarningSink};
use serde::Serialize;
use serde_json::error::Category;
use serde_json::{Map, Value};

const SERDE_NESTING_ERROR: &str = "recursion limit exceeded";

/// Parses JSON text into a `Value`.
///
/// Text nested deeper than `serde_json` accepts (128 levels) fails with
/// `RecursionLimitExceeded` against `max_depth`, like the element depth guard.
pub fn parse_text(text: &str, max_depth: usize) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(|err| {
        if is_nesting_error(&err) {
            ParseError::RecursionLimitExceeded { max_depth }
        } else {
            ParseError::MalformedJson(err)
        }
    })
}

fn is_nesting_error(err: &serde_json::Error) -> bool {
    err.classify() == Category::Syntax && err.to_string().starts_with(SERDE_NESTING_ERROR)
}

/// Join a parent path and a child key the way warnings report locations.
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read-only view over one JSON object with a location for warnings.
#[derive(Debug, Clone)]
pub struct PropertyReader<'v> {
    object: &'v Map<String, Value>,
    path: String,
}

impl<'v> PropertyReader<'v> {
    pub fn new(object: &'v Map<String, Value>, path: impl Into<String>) -> Self {
        Self {
            object,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn field_path(&self, key: &str) -> String {
        join_path(&self.path, key)
    }

    /// Present, non-null value for `key`.
    pub fn get(&self, key: &str) -> Option<&'v Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    fn mismatch(&self, key: &str, expected: &str, found: &Value, sink: &mut dyn WarningSink) {
        sink.add_warning(
            ParseWarning::new(
                WarningCode::InvalidPropertyType,
                format!("expected {expected}, found {}", json_type_name(found)),
            )
            .at(self.field_path(key)),
        );
    }

    pub fn string(&self, key: &str, sink: &mut dyn WarningSink) -> Option<String> {
        let value = self.get(key)?;
        match value.as_str() {
            Some(text) => Some(text.to_string()),
            None => {
                self.mismatch(key, "string", value, sink);
                None
            }
        }
    }

    pub fn string_or(&self, key: &str, default: &str, sink: &mut dyn WarningSink) -> String {
        self.string(key, sink).unwrap_or_else(|| default.to_string())
    }

    /// Booleans also accept the strings `"true"` and `"false"`.
    pub fn bool(&self, key: &str, default: bool, sink: &mut dyn WarningSink) -> bool {
        let Some(value) = self.get(key) else {
            return default;
        };
        match value {
            Value::Bool(flag) => *flag,
            Value::String(text) if text.trim().eq_ignore_ascii_case("true") => true,
            Value::String(text) if text.trim().eq_ignore_ascii_case("false") => false,
            other => {
                self.mismatch(key, "bool", other, sink);
                default
            }
        }
    }

    /// Non-negative integers, given as numbers or numeric strings.
    pub fn u32(&self, key: &str, default: u32, sink: &mut dyn WarningSink) -> u32 {
        let Some(value) = self.get(key) else {
            return default;
        };
        let parsed = match value {
            Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(text) => text.trim().parse::<u32>().ok(),
            _ => None,
        };
        parsed.unwrap_or_else(|| {
            self.mismatch(key, "non-negative integer", value, sink);
            default
        })
    }

    /// Empty strings count as absent.
    pub fn enumeration<E: JsonEnum>(&self, key: &str, default: E, sink: &mut dyn WarningSink) -> E {
        let Some(value) = self.get(key) else {
            return default;
        };
        let Some(text) = value.as_str() else {
            self.mismatch(key, "string", value, sink);
            return default;
        };
        if text.trim().is_empty() {
            return default;
        }
        E::parse(text).unwrap_or_else(|| {
            sink.add_warning(
                ParseWarning::new(
                    WarningCode::InvalidEnumValue,
                    format!("`{text}` is not a valid {}", E::NAME),
                )
                .at(self.field_path(key)),
            );
            default
        })
    }

    pub fn array(&self, key: &str, sink: &mut dyn WarningSink) -> Option<&'v Vec<Value>> {
        let value = self.get(key)?;
        match value.as_array() {
            Some(items) => Some(items),
            None => {
                self.mismatch(key, "array", value, sink);
                None
            }
        }
    }

    /// Nested config object with fallback to `default`.
    pub fn config<C: ConfigDeserialize>(
        &self,
        key: &str,
        default: &C,
        sink: &mut dyn WarningSink,
    ) -> C {
        match self.get(key) {
            Some(value) => C::deserialize_reporting(value, default, &self.field_path(key), sink),
            None => default.clone(),
        }
    }

    /// A string field the format defines as mandatory.
    pub fn required_string(&self, key: &str, element_type: &str) -> Result<String, ParseError> {
        self.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ParseError::missing_field(element_type, key))
    }
}

/// Builder for the JSON objects produced by serialization.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    map: Map<String, Value>,
}

impl ObjectWriter {
    /// Starts an object whose first key is the `type` discriminator.
    pub fn typed(element_type: &str) -> Self {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(element_type.to_string()));
        Self { map }
    }

    pub fn untyped() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.map.insert(key.to_string(), value.into());
        self
    }

    pub fn optional<T: Into<Value>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub fn non_empty(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.field(key, value)
        }
    }

    pub fn flag(self, key: &str, value: bool, default: bool) -> Self {
        if value == default {
            self
        } else {
            self.field(key, value)
        }
    }

    pub fn count(self, key: &str, value: u32, default: u32) -> Self {
        if value == default {
            self
        } else {
            self.field(key, value)
        }
    }

    pub fn enumeration<E: JsonEnum + PartialEq>(self, key: &str, value: E) -> Self {
        if value == E::default() {
            self
        } else {
            self.field(key, value.as_str())
        }
    }

    pub fn elements(self, key: &str, elements: &[Box<dyn CardElement>]) -> Self {
        if elements.is_empty() {
            return self;
        }
        let items = elements
            .iter()
            .map(|element| element.serialize_to_json())
            .collect::<Vec<_>>();
        self.field(key, Value::Array(items))
    }

    pub fn serialized<T: Serialize>(self, key: &str, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => self.field(key, value),
            Err(err) => {
                tracing::error!(key, %err, "failed to serialize field");
                self
            }
        }
    }

    pub fn finish(self) -> Value {
        Value::Object(self.map)
    }
}
