//! Compact pattern construction and boolean match predicates, for use in
//! conditional chains and `match` guards:
//!
//! ```rust
//! # use regexp_ext::predicate::{compile, matches};
//! let email = compile(r"^.+@.+\.com$").unwrap();
//! let kind = match "sodas@icloud.com" {
//!     text if matches(&email, text) => "an email",
//!     _ => "just a string",
//! };
//! assert_eq!(kind, "an email");
//! ```

use log::warn;

use crate::error::Result;
use crate::pattern::Pattern;

/// Compiles `pattern` with the default options.
///
/// Same as [`Pattern::new`]; the compile failure is the caller's to handle.
#[inline]
pub fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern)
}

/// Returns true if `pattern` matches anywhere in `text`.
#[inline]
pub fn matches(pattern: &Pattern, text: &str) -> bool {
    pattern.is_match(text)
}

/// Like [`matches`], but accepts the outcome of a compilation.
///
/// A pattern that failed to compile never matches. The failure is not
/// dropped silently: it is logged at `warn` level on every call.
pub fn matches_if_compiled(pattern: &Result<Pattern>, text: &str) -> bool {
    match pattern {
        Ok(pattern) => matches(pattern, text),
        Err(err) => {
            warn!("treating failed pattern as never matching: {}", err);
            false
        }
    }
}
