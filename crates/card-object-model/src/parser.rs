use crate::context::ParseContext;
use crate::element::CardElement;
use crate::errors::ParseError;
use crate::json::parse_text;
use serde_json::{Map, Value};

/// Turns a JSON node into an element of one kind.
///
/// Parsers are stateless; all per-parse state lives in the [`ParseContext`].
pub trait ElementParser: Send + Sync {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError>;

    fn deserialize_from_str(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let value = parse_text(text, context.limits().max_depth)?;
        self.deserialize(context, &value)
    }
}

pub(crate) fn expect_object<'v>(
    value: &'v Value,
    context: &ParseContext<'_>,
) -> Result<&'v Map<String, Value>, ParseError> {
    value.as_object().ok_or_else(|| {
        let path = context.current_path();
        ParseError::expected_object(if path.is_empty() { "<root>" } else { path })
    })
}
