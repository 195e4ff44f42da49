//! Tests for `PromptRepository` substitution.

use switchboard_prompt::{
    Error, MemoryStorage, Pattern, PromptRepository, PromptTemplate, Syntax, Variables,
};

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn repository(content: &str) -> PromptRepository<MemoryStorage> {
    PromptRepository::new(MemoryStorage::new().with("greeting.txt", content))
}

#[test]
fn build_substitutes_variables() {
    let prompt = repository("Hello, {{name}}!")
        .build("greeting.txt", &vars(&[("name", "Alice")]))
        .unwrap();
    assert_eq!(prompt.content(), "Hello, Alice!");
}

#[test]
fn build_leaves_missing_placeholder_verbatim() {
    let prompt = repository("Value: {{present}}, Missing: {{missing}}")
        .build("greeting.txt", &vars(&[("present", "Found")]))
        .unwrap();
    assert_eq!(prompt.content(), "Value: Found, Missing: {{missing}}");
}

#[test]
fn build_ignores_extra_variables() {
    let prompt = repository("No placeholders here.")
        .build("greeting.txt", &vars(&[("unused", "x")]))
        .unwrap();
    assert_eq!(prompt.content(), "No placeholders here.");
}

#[test]
fn build_allows_whitespace_inside_braces() {
    let prompt = repository("You are a {{ behavior }} assistant.")
        .build("greeting.txt", &vars(&[("behavior", "helpful")]))
        .unwrap();
    assert_eq!(prompt.content(), "You are a helpful assistant.");
}

#[test]
fn build_repeated_placeholder() {
    let prompt = repository("{{x}} and {{x}}")
        .build("greeting.txt", &vars(&[("x", "y")]))
        .unwrap();
    assert_eq!(prompt.content(), "y and y");
}

#[test]
fn build_does_not_rescan_substituted_values() {
    let prompt = repository("{{a}}")
        .build("greeting.txt", &vars(&[("a", "{{b}}"), ("b", "nope")]))
        .unwrap();
    assert_eq!(prompt.content(), "{{b}}");
}

#[test]
fn build_missing_template_propagates_not_found() {
    let err = repository("x")
        .build("absent.txt", &Variables::new())
        .unwrap_err();
    assert!(matches!(err, Error::TemplateNotFound { .. }));
}

#[test]
fn dollar_syntax_substitutes_both_forms() {
    let repo = PromptRepository::with_pattern(
        MemoryStorage::new().with("t", "Hi $name, welcome to ${place}. Cost: $$5"),
        Pattern::dollar(),
    );
    let prompt = repo
        .build("t", &vars(&[("name", "Bob"), ("place", "Paris")]))
        .unwrap();
    assert_eq!(prompt.content(), "Hi Bob, welcome to Paris. Cost: $5");
}

#[test]
fn dollar_syntax_is_safe() {
    let repo = PromptRepository::with_pattern(
        MemoryStorage::new().with("t", "$known ${unknown} $other"),
        Pattern::from(Syntax::Dollar),
    );
    let prompt = repo.build("t", &vars(&[("known", "ok")])).unwrap();
    assert_eq!(prompt.content(), "ok ${unknown} $other");
}

#[test]
fn dollar_syntax_ignores_mustache_placeholders() {
    let repo = PromptRepository::with_pattern(
        MemoryStorage::new().with("t", "{{name}}"),
        Pattern::dollar(),
    );
    let prompt = repo.build("t", &vars(&[("name", "Alice")])).unwrap();
    assert_eq!(prompt.content(), "{{name}}");
}

#[test]
fn custom_pattern_uses_first_group() {
    let pattern = Pattern::custom(r"<<(\w+)>>").unwrap();
    let repo = PromptRepository::with_pattern(MemoryStorage::new().with("t", "<<a>>-<<b>>"), pattern);
    let prompt = repo.build("t", &vars(&[("a", "1")])).unwrap();
    assert_eq!(prompt.content(), "1-<<b>>");
}

#[test]
fn custom_pattern_prefers_name_group() {
    let pattern = Pattern::custom(r"%(?:(\d)|(?P<name>[a-z]+))%").unwrap();
    let repo = PromptRepository::with_pattern(MemoryStorage::new().with("t", "%user%"), pattern);
    let prompt = repo.build("t", &vars(&[("user", "ann")])).unwrap();
    assert_eq!(prompt.content(), "ann");
}

#[test]
fn custom_pattern_without_group_is_rejected() {
    let err = Pattern::custom(r"\{\w+\}").unwrap_err();
    assert!(matches!(err, Error::InvalidPattern(_)));
}

#[test]
fn custom_pattern_invalid_regex_is_rejected() {
    let err = Pattern::custom(r"(unclosed").unwrap_err();
    assert!(matches!(err, Error::InvalidPattern(_)));
}

#[test]
fn syntax_deserializes_lowercase() {
    let syntax: Syntax = serde_json::from_str(r#""dollar""#).unwrap();
    assert_eq!(syntax, Syntax::Dollar);
    assert_eq!(Syntax::default(), Syntax::Mustache);
}

#[test]
fn render_does_not_touch_template() {
    let repo = repository("unused");
    let template = PromptTemplate::new("Dear {{who}}", "inline");
    let prompt = repo.render(&template, &vars(&[("who", "team")]));
    assert_eq!(prompt.content(), "Dear team");
    assert_eq!(template.content(), "Dear {{who}}");
}

#[test]
fn build_message_tags_role() {
    let message = repository("You are {{name}}.")
        .build_message("greeting.txt", &vars(&[("name", "a tutor")]), "system")
        .unwrap();
    assert_eq!(message.role(), "system");
    assert_eq!(message.content(), "You are a tutor.");
}

#[test]
fn built_in_patterns_are_reusable() {
    let first = Pattern::mustache();
    let second = Pattern::from(Syntax::Mustache);
    assert_eq!(first.as_str(), second.as_str());
    assert_ne!(Pattern::dollar().as_str(), first.as_str());

    let vars = vars(&[("x", "1")]);
    assert_eq!(first.substitute("{{x}}", &vars), "1");
    assert_eq!(second.substitute("{{ x }}", &vars), "1");
}
