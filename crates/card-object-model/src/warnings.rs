use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a non-fatal anomaly met while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    UnknownElementType,
    MissingElementType,
    InvalidElement,
    InvalidPropertyType,
    InvalidEnumValue,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::UnknownElementType => "unknown_element_type",
            WarningCode::MissingElementType => "missing_element_type",
            WarningCode::InvalidElement => "invalid_element",
            WarningCode::InvalidPropertyType => "invalid_property_type",
            WarningCode::InvalidEnumValue => "invalid_enum_value",
        }
    }
}

/// Warning recorded while parsing a card or a config document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub code: WarningCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ParseWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} at {}: {}", self.code.as_str(), path, self.message),
            None => write!(f, "{}: {}", self.code.as_str(), self.message),
        }
    }
}

/// Destination for warnings produced by field readers and config deserialization.
pub trait WarningSink {
    fn add_warning(&mut self, warning: ParseWarning);
}

impl WarningSink for Vec<ParseWarning> {
    fn add_warning(&mut self, warning: ParseWarning) {
        self.push(warning);
    }
}

/// Sink that drops everything; backs the pure config entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardWarnings;

impl WarningSink for DiscardWarnings {
    fn add_warning(&mut self, _warning: ParseWarning) {}
}
