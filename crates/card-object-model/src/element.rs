use crate::config::InputsConfig;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::any::Any;
use std::fmt;

/// A parsed card element.
///
/// Implemented by every built-in kind and open to plugin kinds registered
/// with an [`ElementParserRegistry`](crate::ElementParserRegistry).
pub trait CardElement: fmt::Debug + Send + Sync + Any {
    /// The `type` discriminator; never empty.
    fn element_type(&self) -> &str;

    fn id(&self) -> Option<&str>;

    /// JSON object whose `type` matches [`CardElement::element_type`].
    fn serialize_to_json(&self) -> Value;

    fn as_any(&self) -> &dyn Any;

    /// Label and validation styling for input elements.
    fn inputs_config(&self) -> Option<&InputsConfig> {
        None
    }
}

impl<'a> dyn CardElement + 'a {
    pub fn downcast_ref<T: CardElement>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: CardElement>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Elements compare by discriminator and serialized form.
impl<'a> PartialEq for dyn CardElement + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.element_type() == other.element_type()
            && self.serialize_to_json() == other.serialize_to_json()
    }
}

impl<'a> Serialize for dyn CardElement + 'a {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_to_json().serialize(serializer)
    }
}
