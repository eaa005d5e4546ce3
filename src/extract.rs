//! Capture group extraction.
//!
//! Every match is turned into the list of its capture group substrings,
//! group 1 first. The whole match (group 0) is left out.
//!
//! A group that did not participate in a match, e.g. the second group of
//! `(a)(b)?` against `"a"`, is reported as the empty string. A set of
//! captures therefore always has `number_of_ranges - 1` entries, one per
//! group the pattern declares. Use [`Match::range_at`] to tell such a group
//! apart from one that matched the empty string.

use core::ops::Range;

use log::trace;

use crate::engine::Match;
use crate::error::Result;
use crate::options::MatchOptions;
use crate::pattern::Pattern;

/// The capture group substrings of one match, in declaration order.
pub type CaptureGroupSet = Vec<String>;

/// One [`CaptureGroupSet`] per match, left to right.
pub type ExtractionResult = Vec<CaptureGroupSet>;

/// Returns the capture groups of every match of `pattern` in the whole of
/// `text`.
///
/// `options` is passed to the matching engine untouched.
///
/// # Example
///
/// ```rust
/// # use regexp_ext::{extract, MatchOptions, Pattern};
/// let email = Pattern::new(r"^(.+)@(.+\.com)$").unwrap();
/// let groups = extract(&email, "sodas@icloud.com", MatchOptions::default());
/// assert_eq!(groups, vec![vec!["sodas", "icloud.com"]]);
/// ```
pub fn extract(pattern: &Pattern, text: &str, options: MatchOptions) -> ExtractionResult {
    let result: ExtractionResult =
        pattern.matches(text, options).map(|m| capture_groups(&m)).collect();
    trace!("'{}' extracted {} match(es)", pattern, result.len());
    result
}

/// Returns the capture groups of every match of `pattern` inside `range`.
///
/// Fails only if `range` is not a valid slice of `text`.
pub fn extract_in_range(
    pattern: &Pattern,
    text: &str,
    range: Range<usize>,
    options: MatchOptions,
) -> Result<ExtractionResult> {
    let result: ExtractionResult = pattern
        .matches_in_range(text, range.clone(), options)?
        .map(|m| capture_groups(&m))
        .collect();
    trace!("'{}' extracted {} match(es) in {:?}", pattern, result.len(), range);
    Ok(result)
}

/// Returns the capture groups of the leftmost match only.
pub fn extract_first(
    pattern: &Pattern,
    text: &str,
    options: MatchOptions,
) -> Option<CaptureGroupSet> {
    pattern.first_match(text, options).map(|m| capture_groups(&m))
}

/// Returns the capture groups of a single match.
pub fn capture_groups(m: &Match<'_>) -> CaptureGroupSet {
    // index 0 is the whole match
    (1..m.number_of_ranges())
        .map(|index| m.get(index).unwrap_or_default().to_owned())
        .collect()
}

impl Pattern {
    /// Method form of [`extract`].
    pub fn matched_capture_groups(&self, text: &str, options: MatchOptions) -> ExtractionResult {
        extract(self, text, options)
    }
}
