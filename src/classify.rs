use core::fmt;

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::pattern::Pattern;

/// Multi-way branching over patterns.
///
/// Arms are tried in the order they were added and the first pattern that
/// matches anywhere in the text decides the outcome. When no arm matches the
/// default is returned.
#[derive(Clone, Debug)]
pub struct Classifier<T> {
    arms: Vec<(Pattern, T)>,
    default: T,
}

impl<T> Classifier<T> {
    /// Creates a classifier without arms, always answering `default`.
    pub fn new(default: T) -> Self {
        Classifier { arms: vec![], default }
    }

    /// Compiles `pattern` and appends it as the last arm.
    pub fn arm(self, pattern: &str, value: T) -> Result<Self> {
        Ok(self.arm_pattern(Pattern::new(pattern)?, value))
    }

    /// Appends an already compiled pattern as the last arm.
    pub fn arm_pattern(mut self, pattern: Pattern, value: T) -> Self {
        self.arms.push((pattern, value));
        self
    }

    /// Returns the value of the first arm matching `text`.
    pub fn classify(&self, text: &str) -> &T {
        self.arms
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map_or(&self.default, |(_, value)| value)
    }

    /// Returns the number of arms, the default excluded.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

/// What kind of content a string holds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ContentType {
    Email,
    MobilePhoneNumber,
    PlainText,
}

static CONTENT_TYPES: Lazy<Classifier<ContentType>> = Lazy::new(|| {
    Classifier::new(ContentType::PlainText)
        .arm(r"^.+@.+\.com$", ContentType::Email)
        .and_then(|c| c.arm(r"^09\d{2}-\d{6}$", ContentType::MobilePhoneNumber))
        .expect("built-in content type patterns are valid")
});

impl ContentType {
    /// Classifies `text`. Emails are checked before phone numbers.
    pub fn of(text: &str) -> ContentType {
        *CONTENT_TYPES.classify(text)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContentType::Email => "an email",
            ContentType::MobilePhoneNumber => "a mobile phone number",
            ContentType::PlainText => "just a string",
        })
    }
}

/// Describes `text` in a sentence, e.g. `'0987-654321' is a mobile phone number.`
pub fn describe(text: &str) -> String {
    format!("'{}' is {}.", text, ContentType::of(text))
}
