use std::any::Any;
use std::sync::Arc;
use std::thread;

use card_object_model::elements::{TextBlock, UnknownElement};
use card_object_model::{
    AdaptiveCard, CardElement, ElementParser, ElementParserRegistry, HostConfig, ObjectWriter,
    ParseContext, ParseError, ParseLimits, PropertyReader, RegistryError, WarningCode,
};
use serde_json::{Value, json};

/// Star rating widget supplied by a host application.
#[derive(Debug, PartialEq)]
struct Rating {
    id: Option<String>,
    max: u32,
    value: u32,
}

impl Rating {
    const TYPE: &'static str = "Contoso.Rating";
}

impl CardElement for Rating {
    fn element_type(&self) -> &str {
        Self::TYPE
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn serialize_to_json(&self) -> Value {
        ObjectWriter::typed(Self::TYPE)
            .optional("id", self.id.clone())
            .count("max", self.max, 5)
            .field("value", self.value)
            .finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct RatingParser;

impl ElementParser for RatingParser {
    fn deserialize(
        &self,
        context: &mut ParseContext<'_>,
        value: &Value,
    ) -> Result<Box<dyn CardElement>, ParseError> {
        let object = value
            .as_object()
            .ok_or_else(|| ParseError::expected_object(context.current_path()))?;
        let reader = PropertyReader::new(object, context.current_path());
        let max = reader.u32("max", 5, context);
        Ok(Box::new(Rating {
            id: reader.string("id", context),
            max,
            value: reader.u32("value", 0, context).min(max),
        }))
    }
}

#[test]
fn every_builtin_kind_resolves_to_its_own_parser() {
    let registry = ElementParserRegistry::with_defaults();
    let kinds = registry.discriminators();
    assert_eq!(kinds.len(), 14);
    for kind in kinds {
        assert!(registry.is_registered(kind));
        assert!(!std::ptr::addr_eq(registry.resolve(kind), registry.fallback()));
    }
}

#[test]
fn unregistered_kinds_resolve_to_fallback() {
    let registry = ElementParserRegistry::with_defaults();
    for kind in ["Contoso.Rating", "textblock", "Action.Execute", " TextBlock"] {
        assert!(!registry.is_registered(kind));
        assert!(std::ptr::addr_eq(registry.resolve(kind), registry.fallback()));
    }
}

#[test]
fn plugin_kinds_parse_inside_builtin_containers() {
    let card = json!({
        "type": "AdaptiveCard",
        "body": [{
            "type": "Container",
            "items": [
                {"type": "Contoso.Rating", "id": "stars", "max": "10", "value": 12},
                {"type": "TextBlock", "text": "Thanks"}
            ]
        }]
    })
    .to_string();

    let defaults = ElementParserRegistry::with_defaults();
    let before = AdaptiveCard::parse(&defaults, &HostConfig::default(), ParseLimits::default(), &card)
        .expect("parse");
    let stars = before.card.find_by_id("stars").expect("stars");
    assert!(stars.is::<UnknownElement>());
    assert_eq!(before.warnings[0].code, WarningCode::UnknownElementType);

    let mut registry = ElementParserRegistry::with_defaults();
    registry
        .register(Rating::TYPE, Arc::new(RatingParser))
        .expect("register");
    let after = AdaptiveCard::parse(&registry, &HostConfig::default(), ParseLimits::default(), &card)
        .expect("parse");
    assert!(after.warnings.is_empty());
    let stars = after
        .card
        .find_by_id("stars")
        .and_then(|element| element.downcast_ref::<Rating>())
        .expect("rating");
    assert_eq!(
        stars,
        &Rating {
            id: Some("stars".into()),
            max: 10,
            value: 10,
        }
    );
    assert_eq!(
        stars.serialize_to_json(),
        json!({"type": "Contoso.Rating", "id": "stars", "max": 10, "value": 10})
    );
}

#[test]
fn registration_rejects_empty_and_duplicate_kinds() {
    let mut registry = ElementParserRegistry::new();
    assert_eq!(
        registry.register("", Arc::new(RatingParser)),
        Err(RegistryError::EmptyDiscriminator)
    );
    registry
        .register(Rating::TYPE, Arc::new(RatingParser))
        .expect("register");
    assert_eq!(
        registry.register(Rating::TYPE, Arc::new(RatingParser)),
        Err(RegistryError::DuplicateRegistration(Rating::TYPE.to_string()))
    );
    assert_eq!(registry.discriminators(), vec![Rating::TYPE]);
}

#[test]
fn empty_registry_keeps_everything_as_unknown() {
    let registry = ElementParserRegistry::new();
    let mut context = ParseContext::new(&registry);
    let element = context
        .parse_element(&json!({"type": "TextBlock", "text": "hi"}), "body[0]")
        .expect("parse");
    assert!(element.is::<UnknownElement>());
    assert!(!element.is::<TextBlock>());
    assert_eq!(element.element_type(), "TextBlock");
    assert_eq!(context.warnings().len(), 1);
}

#[test]
fn shared_registry_parses_on_many_threads() {
    let mut registry = ElementParserRegistry::with_defaults();
    registry
        .register(Rating::TYPE, Arc::new(RatingParser))
        .expect("register");
    let registry = Arc::new(registry);

    thread::scope(|scope| {
        let handles = (0..8u32)
            .map(|worker| {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    let card = json!({
                        "type": "AdaptiveCard",
                        "body": [
                            {"type": "TextBlock", "text": format!("worker {worker}")},
                            {"type": "Contoso.Rating", "value": worker},
                            {"type": "Contoso.Unknown"}
                        ]
                    })
                    .to_string();
                    AdaptiveCard::parse(&registry, &HostConfig::default(), ParseLimits::default(), &card)
                        .expect("parse")
                })
            })
            .collect::<Vec<_>>();

        for (worker, handle) in handles.into_iter().enumerate() {
            let result = handle.join().expect("worker panicked");
            let text = result.card.body[0].downcast_ref::<TextBlock>().expect("text block");
            assert_eq!(text.text, format!("worker {worker}"));
            let rating = result.card.body[1].downcast_ref::<Rating>().expect("rating");
            assert_eq!(rating.value, (worker as u32).min(5));
            assert_eq!(result.warnings.len(), 1);
            assert_eq!(result.warnings[0].path.as_deref(), Some("body[2]"));
        }
    });
}
