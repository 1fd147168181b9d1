use super::*;
use std::cell::RefCell;

/// Resolver that answers every text prompt with a fixed value.
struct FixedText {
    answer: String,
    prompts: RefCell<Vec<String>>,
}

impl FixedText {
    fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl InputResolver for FixedText {
    fn select(&self, _prompt: &str, _choices: &[String]) -> SyncResult<String> {
        unreachable!("select is not used in these tests")
    }

    fn multi_select(&self, _prompt: &str, _choices: &[String]) -> SyncResult<Vec<String>> {
        unreachable!("multi_select is not used in these tests")
    }

    fn text(&self, prompt: &str, _default: Option<&str>, _rule: TextRule) -> SyncResult<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.answer.clone())
    }

    fn confirm(&self, _prompt: &str, default: bool) -> SyncResult<bool> {
        Ok(default)
    }
}

#[test]
fn test_any_accepts_empty() {
    assert!(TextRule::Any.check("").is_ok());
    assert!(TextRule::Any.check("anything").is_ok());
}

#[test]
fn test_non_empty_rejects_empty() {
    assert!(TextRule::NonEmpty.check("bug").is_ok());
    assert_eq!(
        TextRule::NonEmpty.check(""),
        Err("Value cannot be empty".to_string())
    );
}

#[test]
fn test_hex_color_rule() {
    assert!(TextRule::HexColor.check("A2EEEF").is_ok());
    assert!(TextRule::HexColor.check("a2eeef").is_ok());
    assert!(TextRule::HexColor.check("").is_err());
    assert!(TextRule::HexColor.check("a2eee").is_err());
    assert!(TextRule::HexColor.check("a2eeef0").is_err());
    assert!(TextRule::HexColor.check("zzzzzz").is_err());
}

#[test]
fn test_supplied_value_skips_the_prompt() {
    let resolver = FixedText::new("from prompt");

    let value = supplied_or_prompt(
        &resolver,
        "name",
        Some("bug".to_string()),
        "Name?",
        None,
        TextRule::NonEmpty,
    )
    .unwrap();

    assert_eq!(value, "bug");
    assert!(resolver.prompts.borrow().is_empty());
}

#[test]
fn test_missing_value_is_prompted() {
    let resolver = FixedText::new("from prompt");

    let value = supplied_or_prompt(&resolver, "name", None, "Name?", None, TextRule::NonEmpty)
        .unwrap();

    assert_eq!(value, "from prompt");
    assert_eq!(*resolver.prompts.borrow(), vec!["Name?".to_string()]);
}

#[test]
fn test_invalid_supplied_value_is_a_validation_error() {
    let resolver = FixedText::new("ff0000");

    let result = supplied_or_prompt(
        &resolver,
        "color",
        Some("#ff0000".to_string()),
        "Color?",
        None,
        TextRule::HexColor,
    );

    match result {
        Err(Error::Validation(msg)) => assert!(msg.starts_with("color: ")),
        other => panic!("Expected Validation error, got {other:?}"),
    }
    assert!(resolver.prompts.borrow().is_empty());
}
