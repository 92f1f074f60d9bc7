//! Typed object model for Adaptive Card JSON.
//!
//! Elements are resolved through an [`ElementParserRegistry`] keyed by their
//! `type` discriminator. Unregistered kinds are kept verbatim as
//! [`UnknownElement`](elements::UnknownElement)s, recoverable problems become
//! [`ParseWarning`]s on the [`ParseContext`], and host config types fall back
//! field by field to their defaults.

pub mod card;
pub mod config;
pub mod context;
pub mod element;
pub mod elements;
pub mod enums;
pub mod errors;
pub mod json;
pub mod parser;
pub mod registry;
pub mod warnings;

pub use card::{AdaptiveCard, ParseResult};
pub use config::{
    ConfigDeserialize, ErrorMessageConfig, HostConfig, ImageSizesConfig, InputLabelsConfig,
    InputsConfig, LabelConfig, MAX_DEPTH_ENV, ParseLimits,
};
pub use context::ParseContext;
pub use element::CardElement;
pub use enums::JsonEnum;
pub use errors::{ParseError, RegistryError};
pub use json::{ObjectWriter, PropertyReader};
pub use parser::ElementParser;
pub use registry::ElementParserRegistry;
pub use warnings::{DiscardWarnings, ParseWarning, WarningCode, WarningSink};
