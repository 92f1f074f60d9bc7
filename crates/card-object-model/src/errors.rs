use thiserror::Error;

/// Fatal failures of a single parse call.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed json: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("recursion limit exceeded: nesting deeper than {max_depth}")]
    RecursionLimitExceeded { max_depth: usize },
    #[error("missing required field `{field}` on {element_type}")]
    MissingRequiredField {
        element_type: String,
        field: String,
    },
    #[error("expected a json object at {path}")]
    ExpectedObject { path: String },
}

impl ParseError {
    pub fn missing_field(element_type: impl Into<String>, field: impl Into<String>) -> Self {
        ParseError::MissingRequiredField {
            element_type: element_type.into(),
            field: field.into(),
        }
    }

    pub fn expected_object(path: impl Into<String>) -> Self {
        ParseError::ExpectedObject { path: path.into() }
    }
}

/// Setup-time failures while populating a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a parser is already registered for `{0}`")]
    DuplicateRegistration(String),
    #[error("element discriminator must not be empty")]
    EmptyDiscriminator,
}
