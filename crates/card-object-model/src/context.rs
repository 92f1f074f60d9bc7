use crate::config::{HostConfig, ParseLimits};
use crate::element::CardElement;
use crate::errors::ParseError;
use crate::registry::ElementParserRegistry;
use crate::warnings::{ParseWarning, WarningCode, WarningSink};
use serde_json::Value;
use std::mem;

/// Mutable state for one top-level parse.
///
/// Holds the registry used for child elements, the host config that supplies
/// defaults, the nesting depth and the warnings recorded so far.
#[derive(Debug)]
pub struct ParseContext<'r> {
    registry: &'r ElementParserRegistry,
    host_config: HostConfig,
    limits: ParseLimits,
    depth: usize,
    path: String,
    warnings: Vec<ParseWarning>,
}

impl<'r> ParseContext<'r> {
    pub fn new(registry: &'r ElementParserRegistry) -> Self {
        Self {
            registry,
            host_config: HostConfig::default(),
            limits: ParseLimits::default(),
            depth: 0,
            path: String::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_host_config(mut self, host_config: HostConfig) -> Self {
        self.host_config = host_config;
        self
    }

    pub fn with_limits(mut self, limits: ParseLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn registry(&self) -> &'r ElementParserRegistry {
        self.registry
    }

    pub fn host_config(&self) -> &HostConfig {
        &self.host_config
    }

    pub fn limits(&self) -> ParseLimits {
        self.limits
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Location of the element currently being parsed, e.g. `body[2].items[0]`.
    pub fn current_path(&self) -> &str {
        &self.path
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ParseWarning> {
        self.warnings
    }

    pub fn increment_depth(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.limits.max_depth {
            return Err(ParseError::RecursionLimitExceeded {
                max_depth: self.limits.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn decrement_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Parses one element through the registry, guarding the nesting depth.
    pub fn parse_element(
        &mut self,
        value: &Value,
        path: &str,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let Some(object) = value.as_object() else {
            return Err(ParseError::expected_object(path));
        };
        let element_type = object
            .get("type")
            .and_then(Value::as_str)
            .filter(|element_type| !element_type.is_empty())
            .ok_or_else(|| ParseError::missing_field("element", "type"))?;

        let registry = self.registry;
        if !registry.is_registered(element_type) {
            self.add_warning(
                ParseWarning::new(
                    WarningCode::UnknownElementType,
                    format!("no parser registered for `{element_type}`"),
                )
                .at(path),
            );
        }
        let parser = registry.resolve(element_type);

        self.increment_depth()?;
        let parent_path = mem::replace(&mut self.path, path.to_string());
        tracing::trace!(element_type, path, depth = self.depth, "parsing element");
        let result = parser.deserialize(self, value);
        self.path = parent_path;
        self.decrement_depth();
        result
    }

    /// Parses a collection of elements, skipping items that cannot be elements.
    pub fn parse_elements(
        &mut self,
        items: &[Value],
        path: &str,
    ) -> Result<Vec<Box<dyn CardElement>>, ParseError> {
        let mut elements = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_path = format!("{path}[{index}]");
            if !item.is_object() {
                self.add_warning(
                    ParseWarning::new(WarningCode::InvalidElement, "element is not an object")
                        .at(item_path),
                );
                continue;
            }
            let has_type = item
                .get("type")
                .and_then(Value::as_str)
                .is_some_and(|element_type| !element_type.is_empty());
            if !has_type {
                self.add_warning(
                    ParseWarning::new(WarningCode::MissingElementType, "element has no `type`")
                        .at(item_path),
                );
                continue;
            }
            elements.push(self.parse_element(item, &item_path)?);
        }
        Ok(elements)
    }

    /// Path for a field of the element currently being parsed.
    pub fn child_path(&self, key: &str) -> String {
        crate::json::join_path(&self.path, key)
    }
}

impl WarningSink for ParseContext<'_> {
    fn add_warning(&mut self, warning: ParseWarning) {
        tracing::debug!(
            code = warning.code.as_str(),
            path = warning.path.as_deref().unwrap_or(""),
            "{}",
            warning.message
        );
        self.warnings.push(warning);
    }
}
