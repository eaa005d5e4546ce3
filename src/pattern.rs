use core::fmt;
use core::str::FromStr;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::options::CompileOptions;

/// Escapes all regular expression meta characters in `text`.
///
/// The string returned may be safely used as a literal in a pattern.
pub fn escape(text: &str) -> String {
    regex_syntax::escape(text)
}

/// A compiled pattern.
///
/// Produced once by [`Pattern::new`] or a [`PatternBuilder`] and reusable
/// across any number of searches. All searching goes through the `regex`
/// crate; this type only adds full-string defaults, sub-range searches and
/// capture group helpers on top of it.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
    options: CompileOptions,
}

impl Pattern {
    /// Compiles a pattern with the default [`CompileOptions`].
    ///
    /// If an invalid expression is given, then an error is returned.
    pub fn new(pattern: &str) -> Result<Pattern> {
        PatternBuilder::new(pattern).build()
    }

    /// Returns the original string of this pattern.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the options this pattern was compiled with.
    #[inline]
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Returns the number of ranges every match of this pattern reports.
    ///
    /// This counts the implicit whole-match group at index 0, so a pattern
    /// without capture groups reports `1`.
    #[inline]
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    /// Returns true if and only if there is a match anywhere in `text`.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    #[inline]
    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Pattern> {
        Pattern::new(s)
    }
}

/// A configurable builder for a [`Pattern`].
///
/// A builder can be used to configure how the pattern is compiled, for
/// example, by setting the default flags (which can be overridden in the
/// expression itself) or setting various limits.
#[derive(Clone, Debug)]
pub struct PatternBuilder {
    pattern: String,
    options: CompileOptions,
}

impl PatternBuilder {
    /// Create a new builder with the given pattern.
    ///
    /// If the pattern is invalid, then an error will be returned when
    /// `build` is called.
    pub fn new(pattern: &str) -> PatternBuilder {
        PatternBuilder::with_options(pattern, CompileOptions::default())
    }

    /// Create a new builder starting from an existing set of options, e.g.
    /// one loaded from configuration.
    pub fn with_options(pattern: &str, options: CompileOptions) -> PatternBuilder {
        PatternBuilder { pattern: pattern.to_owned(), options }
    }

    /// Consume the builder and compile the pattern.
    ///
    /// Note that calling `as_str` on the resulting `Pattern` will produce the
    /// pattern given to `new` verbatim. Notably, it will not incorporate any
    /// of the flags set on this builder.
    pub fn build(&self) -> Result<Pattern> {
        let options = &self.options;
        let built = RegexBuilder::new(&self.pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .swap_greed(options.swap_greed)
            .ignore_whitespace(options.ignore_whitespace)
            .unicode(options.unicode)
            .octal(options.octal)
            .size_limit(options.size_limit)
            .dfa_size_limit(options.dfa_size_limit)
            .nest_limit(options.nest_limit)
            .build();
        match built {
            Ok(regex) => {
                debug!(
                    "compiled pattern '{}' with {} capture group(s)",
                    self.pattern,
                    regex.captures_len() - 1
                );
                Ok(Pattern { regex, options: options.clone() })
            }
            Err(source) => {
                debug!("failed to compile pattern '{}': {}", self.pattern, source);
                Err(Error::Compile { pattern: self.pattern.clone(), source })
            }
        }
    }

    /// Set the value for the case insensitive (`i`) flag.
    pub fn case_insensitive(&mut self, yes: bool) -> &mut PatternBuilder {
        self.options.case_insensitive = yes;
        self
    }

    /// Set the value for the multi-line matching (`m`) flag.
    pub fn multi_line(&mut self, yes: bool) -> &mut PatternBuilder {
        self.options.multi_line = yes;
        self
    }

    /// Set the value for the any character (`s`) flag.
    pub fn dot_matches_new_line(&mut self, yes: bool) -> &mut PatternBuilder {
        self.options.dot_matches_new_line = yes;
        self
    }

    /// Set the value for the greedy swap (`U`) flag.
    pub fn swap_greed(&mut self, yes: bool) -> &mut PatternBuilder {
        self.options.swap_greed = yes;
        self
    }

    /// Set the value for the ignore whitespace (`x`) flag.
    pub fn ignore_whitespace(&mut self, yes: bool) -> &mut PatternBuilder {
        self.options.ignore_whitespace = yes;
        self
    }

    /// Set the value for the Unicode (`u`) flag.
    pub fn unicode(&mut self, yes: bool) -> &mut PatternBuilder {
        self.options.unicode = yes;
        self
    }

    /// Whether to support octal syntax or not.
    pub fn octal(&mut self, yes: bool) -> &mut PatternBuilder {
        self.options.octal = yes;
        self
    }

    /// Set the approximate size limit of the compiled pattern.
    pub fn size_limit(&mut self, limit: usize) -> &mut PatternBuilder {
        self.options.size_limit = limit;
        self
    }

    /// Set the approximate size of the cache used by the DFA.
    pub fn dfa_size_limit(&mut self, limit: usize) -> &mut PatternBuilder {
        self.options.dfa_size_limit = limit;
        self
    }

    /// Set the nesting limit for the parser.
    pub fn nest_limit(&mut self, limit: u32) -> &mut PatternBuilder {
        self.options.nest_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{escape, Pattern, PatternBuilder};
    use crate::error::Error;

    #[test]
    fn captures_len_counts_whole_match() {
        assert_eq!(Pattern::new(r"^09\d{2}-\d{6}$").unwrap().captures_len(), 1);
        assert_eq!(Pattern::new(r"^(.+)@(.+\.com)$").unwrap().captures_len(), 3);
    }

    #[test]
    fn invalid_pattern_keeps_source() {
        match Pattern::new("(unclosed") {
            Err(Error::Compile { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected a compile error, got {:?}", other),
        }
    }

    #[test]
    fn builder_flags_reach_engine() {
        let re = PatternBuilder::new("^hello$")
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .unwrap();
        assert!(re.is_match("first\nHELLO\nlast"));
        assert!(re.options().case_insensitive);
        assert_eq!(re.as_str(), "^hello$");

        let re = Pattern::new("^hello$").unwrap();
        assert!(!re.is_match("first\nHELLO\nlast"));
    }

    #[test]
    fn size_limit_is_a_compile_error() {
        let built = PatternBuilder::new(r"\w{1000}").size_limit(16).build();
        assert!(matches!(built, Err(Error::Compile { .. })));
    }

    #[test]
    fn escaped_text_matches_literally() {
        let re = Pattern::new(&escape("1+1=2?")).unwrap();
        assert!(re.is_match("is 1+1=2?"));
        assert!(!re.is_match("11=2"));
    }

    #[test]
    fn parse_from_str() {
        let re: Pattern = "a+b".parse().unwrap();
        assert_eq!(re.to_string(), "a+b");
        assert_eq!(format!("{:?}", re), r#"Pattern("a+b")"#);
    }
}
