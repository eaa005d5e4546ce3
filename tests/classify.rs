use pretty_assertions::assert_eq;
use regexp_ext::predicate::{compile, matches, matches_if_compiled};
use regexp_ext::{describe, Classifier, ContentType, Pattern, PatternBuilder};
use rstest::rstest;

#[rstest]
#[case("Hello World!", "'Hello World!' is just a string.")]
#[case("sodas@icloud.com", "'sodas@icloud.com' is an email.")]
#[case("0987-654321", "'0987-654321' is a mobile phone number.")]
fn describe_content(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(describe(text), expected);
}

#[rstest]
#[case("me@example.org", ContentType::PlainText)]
#[case("0987-65432", ContentType::PlainText)]
#[case("1987-654321", ContentType::PlainText)]
#[case("a@b.com", ContentType::Email)]
#[case("0912-345678", ContentType::MobilePhoneNumber)]
fn content_type_edges(#[case] text: &str, #[case] expected: ContentType) {
    assert_eq!(ContentType::of(text), expected);
}

#[test]
fn predicates_in_match_guards() {
    let email = compile(r"^.+@.+\.com$").unwrap();
    let phone = compile(r"^09\d{2}-\d{6}$").unwrap();
    let kind = |text: &str| match text {
        t if matches(&email, t) => "email",
        t if matches(&phone, t) => "phone",
        _ => "other",
    };
    assert_eq!(kind("sodas@icloud.com"), "email");
    assert_eq!(kind("0987-654321"), "phone");
    assert_eq!(kind("Hello World!"), "other");
}

#[test]
fn failed_pattern_in_guard_never_matches() {
    let broken = compile(r"^(.+@");
    let kind = |text: &str| match text {
        t if matches_if_compiled(&broken, t) => "email",
        _ => "other",
    };
    assert_eq!(kind("a@b.com"), "other");
}

#[test]
fn classifier_with_compiled_arms() {
    let loud = PatternBuilder::new("^hello").case_insensitive(true).build().unwrap();
    let c = Classifier::new("unknown")
        .arm_pattern(loud, "greeting")
        .arm_pattern(Pattern::new(r"\?$").unwrap(), "question");
    assert_eq!(*c.classify("HELLO there"), "greeting");
    assert_eq!(*c.classify("hello?"), "greeting");
    assert_eq!(*c.classify("why?"), "question");
    assert_eq!(*c.classify("fine."), "unknown");
}
