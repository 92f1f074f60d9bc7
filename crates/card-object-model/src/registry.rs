use crate::elements::{self, UnknownElementParser};
use crate::errors::RegistryError;
use crate::parser::ElementParser;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps element discriminators to their parsers.
///
/// Populated once at startup, then shared read-only between parses.
/// Discriminators without a parser resolve to the unknown-element fallback.
pub struct ElementParserRegistry {
    parsers: HashMap<String, Arc<dyn ElementParser>>,
    fallback: Arc<dyn ElementParser>,
}

impl ElementParserRegistry {
    /// A registry holding only the unknown-element fallback.
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
            fallback: Arc::new(UnknownElementParser),
        }
    }

    /// A registry with every built-in element and action kind.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (discriminator, parser) in elements::builtin_parsers() {
            registry.parsers.insert(discriminator.to_string(), parser);
        }
        registry
    }

    pub fn register(
        &mut self,
        discriminator: impl Into<String>,
        parser: Arc<dyn ElementParser>,
    ) -> Result<(), RegistryError> {
        let discriminator = discriminator.into();
        if discriminator.is_empty() {
            return Err(RegistryError::EmptyDiscriminator);
        }
        if self.parsers.contains_key(&discriminator) {
            return Err(RegistryError::DuplicateRegistration(discriminator));
        }
        tracing::debug!(discriminator = %discriminator, "registered element parser");
        self.parsers.insert(discriminator, parser);
        Ok(())
    }

    /// Parser for `discriminator`, or the unknown-element fallback.
    pub fn resolve(&self, discriminator: &str) -> &dyn ElementParser {
        match self.parsers.get(discriminator) {
            Some(parser) => parser.as_ref(),
            None => {
                tracing::debug!(discriminator, "falling back to unknown element parser");
                self.fallback.as_ref()
            }
        }
    }

    pub fn is_registered(&self, discriminator: &str) -> bool {
        self.parsers.contains_key(discriminator)
    }

    pub fn fallback(&self) -> &dyn ElementParser {
        self.fallback.as_ref()
    }

    /// Registered discriminators in sorted order.
    pub fn discriminators(&self) -> Vec<&str> {
        let mut names = self.parsers.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl Default for ElementParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for ElementParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementParserRegistry")
            .field("discriminators", &self.discriminators())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::TextInputParser;

    fn same_parser(a: &dyn ElementParser, b: &dyn ElementParser) -> bool {
        std::ptr::addr_eq(a, b)
    }

    #[test]
    fn rejects_duplicates() {
        let mut registry = ElementParserRegistry::with_defaults();
        let err = registry
            .register("Input.Text", Arc::new(TextInputParser))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateRegistration("Input.Text".into()));
    }

    #[test]
    fn rejects_empty_discriminator() {
        let mut registry = ElementParserRegistry::new();
        assert_eq!(
            registry.register("", Arc::new(TextInputParser)),
            Err(RegistryError::EmptyDiscriminator)
        );
    }

    #[test]
    fn resolves_registered_and_fallback() {
        let mut registry = ElementParserRegistry::new();
        let parser: Arc<dyn ElementParser> = Arc::new(TextInputParser);
        registry
            .register("Input.Text", Arc::clone(&parser))
            .expect("register");
        assert!(same_parser(registry.resolve("Input.Text"), parser.as_ref()));
        assert!(same_parser(registry.resolve("input.text"), registry.fallback()));
        assert!(same_parser(registry.resolve("Nope"), registry.fallback()));
    }

    #[test]
    fn defaults_cover_builtin_kinds() {
        let registry = ElementParserRegistry::default();
        for kind in ["Input.Text", "TextBlock", "Container", "Action.Submit"] {
            assert!(registry.is_registered(kind), "{kind} missing");
        }
        assert!(!registry.is_registered("Unknown"));
        let names = registry.discriminators();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
