use super::*;

#[test]
fn test_non_interactive_select_fails_naming_the_prompt() {
    let resolver = NonInteractiveResolver;

    let result = resolver.select("Select label to edit", &["bug".to_string()]);

    match result {
        Err(Error::Validation(msg)) => assert!(msg.contains("Select label to edit")),
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_non_interactive_multi_select_fails() {
    let resolver = NonInteractiveResolver;

    let result = resolver.multi_select("Select labels to delete", &[]);

    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_non_interactive_text_without_default_fails() {
    let resolver = NonInteractiveResolver;

    let result = resolver.text("What's the name of the new label?", None, TextRule::NonEmpty);

    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_non_interactive_text_uses_valid_default() {
    let resolver = NonInteractiveResolver;

    let value = resolver
        .text("What's the new color of bug?", Some("d73a4a"), TextRule::HexColor)
        .unwrap();

    assert_eq!(value, "d73a4a");
}

#[test]
fn test_non_interactive_text_rejects_default_failing_its_rule() {
    let resolver = NonInteractiveResolver;

    let result = resolver.text("Name?", Some(""), TextRule::NonEmpty);

    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_non_interactive_confirm_returns_default() {
    let resolver = NonInteractiveResolver;

    assert!(!resolver.confirm("Continue?", false).unwrap());
    assert!(resolver.confirm("Continue?", true).unwrap());
}

#[test]
fn test_non_interactive_text_accepting_anything_defaults_to_empty() {
    let resolver = NonInteractiveResolver;

    let value = resolver
        .text("What's the description of the new label?", None, TextRule::Any)
        .unwrap();

    assert_eq!(value, "");
}
