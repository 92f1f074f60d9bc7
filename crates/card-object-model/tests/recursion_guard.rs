use card_object_model::config::limits::DEFAULT_MAX_DEPTH;
use card_object_model::elements::{Container, ContainerParser};
use card_object_model::{
    AdaptiveCard, ElementParser, ElementParserRegistry, HostConfig, ParseContext, ParseError,
    ParseLimits,
};
use serde_json::{Value, json};

/// `levels` containers, each holding the next, around a single TextBlock.
fn nested_containers(levels: usize) -> Value {
    let mut element = json!({"type": "TextBlock", "text": "leaf"});
    for _ in 0..levels {
        element = json!({"type": "Container", "items": [element]});
    }
    element
}

fn card_with(element: Value) -> String {
    json!({"type": "AdaptiveCard", "body": [element]}).to_string()
}

#[test]
fn nesting_at_the_limit_parses() {
    let registry = ElementParserRegistry::with_defaults();
    // The body element is depth 1 and the leaf sits one level below the containers.
    let card = card_with(nested_containers(DEFAULT_MAX_DEPTH - 1));
    let result = AdaptiveCard::parse(&registry, &HostConfig::default(), ParseLimits::default(), &card)
        .expect("parse");
    assert!(result.card.body[0].is::<Container>());
}

#[test]
fn nesting_past_the_limit_fails_through_the_card() {
    let registry = ElementParserRegistry::with_defaults();
    let card = card_with(nested_containers(DEFAULT_MAX_DEPTH));
    let err = AdaptiveCard::parse(&registry, &HostConfig::default(), ParseLimits::default(), &card)
        .unwrap_err();
    assert!(matches!(
        err,
        ParseError::RecursionLimitExceeded { max_depth } if max_depth == DEFAULT_MAX_DEPTH
    ));
}

#[test]
fn custom_limit_applies_to_direct_parser_calls() {
    let registry = ElementParserRegistry::with_defaults();
    let nested = nested_containers(6);

    let mut context = ParseContext::new(&registry).with_limits(ParseLimits::with_max_depth(4));
    let err = ContainerParser.deserialize(&mut context, &nested).unwrap_err();
    assert!(matches!(err, ParseError::RecursionLimitExceeded { max_depth: 4 }));

    let mut context = ParseContext::new(&registry).with_limits(ParseLimits::with_max_depth(4));
    let err = ContainerParser
        .deserialize_from_str(&mut context, &nested.to_string())
        .unwrap_err();
    assert!(matches!(err, ParseError::RecursionLimitExceeded { max_depth: 4 }));

    let mut context = ParseContext::new(&registry).with_limits(ParseLimits::with_max_depth(8));
    let element = ContainerParser
        .deserialize_from_str(&mut context, &nested.to_string())
        .expect("parse");
    assert!(element.is::<Container>());
    assert_eq!(context.depth(), 0);
}

#[test]
fn failed_parse_does_not_leak_depth() {
    let registry = ElementParserRegistry::with_defaults();
    let mut context = ParseContext::new(&registry).with_limits(ParseLimits::with_max_depth(3));
    assert!(context.parse_element(&nested_containers(5), "body[0]").is_err());
    assert_eq!(context.depth(), 0);
    assert_eq!(context.current_path(), "");

    let element = context
        .parse_element(&nested_containers(1), "body[1]")
        .expect("shallow element parses");
    assert!(element.is::<Container>());
}

#[test]
fn nesting_past_the_json_reader_limit_is_a_recursion_failure() {
    let registry = ElementParserRegistry::with_defaults();
    let card = card_with(nested_containers(71));
    for max_depth in [50, 100] {
        let err = AdaptiveCard::parse(
            &registry,
            &HostConfig::default(),
            ParseLimits::with_max_depth(max_depth),
            &card,
        )
        .unwrap_err();
        assert!(
            matches!(err, ParseError::RecursionLimitExceeded { max_depth: reported } if reported == max_depth),
            "{err}"
        );
    }

    let mut context = ParseContext::new(&registry);
    let err = ContainerParser
        .deserialize_from_str(&mut context, &nested_containers(80).to_string())
        .unwrap_err();
    assert!(matches!(
        err,
        ParseError::RecursionLimitExceeded { max_depth } if max_depth == DEFAULT_MAX_DEPTH
    ));
}
