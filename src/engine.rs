use core::iter::FusedIterator;
use core::ops::Range;

use regex::CaptureLocations;

use crate::error::{Error, Result};
use crate::options::MatchOptions;
use crate::pattern::Pattern;

/// One match of a pattern in a text.
///
/// A match carries one range per group of the pattern: index 0 is the whole
/// match, indices `1..number_of_ranges()` are the capture groups in
/// declaration order. A group that did not take part in the match has no
/// range.
///
/// All ranges are byte offsets into the full text, even when the search was
/// restricted to a sub-range of it.
///
/// The lifetime parameter `'t` refers to the lifetime of the matched text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Match<'t> {
    text: &'t str,
    ranges: Vec<Option<Range<usize>>>,
}

impl<'t> Match<'t> {
    /// Returns the number of ranges in this match, the whole match included.
    #[inline]
    pub fn number_of_ranges(&self) -> usize {
        self.ranges.len()
    }

    /// Returns the range of the group at `index`, or `None` if the group did
    /// not participate or does not exist.
    #[inline]
    pub fn range_at(&self, index: usize) -> Option<Range<usize>> {
        self.ranges.get(index).cloned().flatten()
    }

    /// Returns the text covered by the group at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'t str> {
        self.range_at(index).map(|range| &self.text[range])
    }

    /// Returns the range of the whole match.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range_at(0).unwrap_or_default()
    }

    /// Returns the starting byte offset of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.range().start
    }

    /// Returns the ending byte offset of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Returns the matched text.
    #[inline]
    pub fn as_str(&self) -> &'t str {
        &self.text[self.range()]
    }

    /// Returns the text this match was found in.
    #[inline]
    pub fn text(&self) -> &'t str {
        self.text
    }

    fn from_locations(text: &'t str, locs: &CaptureLocations, offset: usize) -> Match<'t> {
        let ranges = (0..locs.len())
            .map(|i| locs.get(i).map(|(s, e)| s + offset..e + offset))
            .collect();
        Match { text, ranges }
    }
}

/// An iterator over all non-overlapping successive leftmost-first matches.
///
/// `'r` is the lifetime of the compiled pattern and `'t` is the lifetime of
/// the searched text.
#[derive(Debug)]
pub struct Matches<'r, 't> {
    pattern: &'r Pattern,
    text: &'t str,
    /// What the engine actually searches: either the range itself or, with
    /// transparent bounds, the text up to the end of the range.
    haystack: &'t str,
    /// Added to every haystack offset to make it an offset into `text`.
    offset: usize,
    locs: CaptureLocations,
    anchored: bool,
    /// Where an anchored match has to begin: the search start, then the end
    /// of the previous match.
    anchor: usize,
    last_end: usize,
    last_match: Option<usize>,
    done: bool,
}

impl<'r, 't> Matches<'r, 't> {
    fn new(
        pattern: &'r Pattern,
        text: &'t str,
        range: Range<usize>,
        options: MatchOptions,
    ) -> Matches<'r, 't> {
        let (haystack, offset, last_end) = if options.transparent_bounds {
            (&text[..range.end], 0, range.start)
        } else {
            (&text[range.clone()], range.start, 0)
        };
        Matches {
            pattern,
            text,
            haystack,
            offset,
            locs: pattern.regex().capture_locations(),
            anchored: options.anchored,
            anchor: last_end,
            last_end,
            last_match: None,
            done: false,
        }
    }

    /// Return the text being searched.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Return the underlying pattern.
    pub fn pattern(&self) -> &'r Pattern {
        self.pattern
    }
}

impl<'r, 't> Iterator for Matches<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        loop {
            if self.done || self.last_end > self.haystack.len() {
                return None;
            }
            let found = self.pattern.regex().captures_read_at(
                &mut self.locs,
                self.haystack,
                self.last_end,
            );
            let (s, e) = match found {
                None => {
                    self.done = true;
                    return None;
                }
                Some(m) => (m.start(), m.end()),
            };
            if self.anchored && s != self.anchor {
                self.done = true;
                return None;
            }
            if s == e {
                // This is an empty match. To ensure we make progress, start
                // the next search at the next character following it.
                self.last_end = next_char_boundary(self.haystack, e);
                // Don't accept empty matches immediately following a match.
                if Some(e) == self.last_match {
                    continue;
                }
            } else {
                self.last_end = e;
            }
            self.last_match = Some(e);
            self.anchor = e;
            return Some(Match::from_locations(self.text, &self.locs, self.offset));
        }
    }
}

impl<'r, 't> FusedIterator for Matches<'r, 't> {}

fn next_char_boundary(haystack: &str, at: usize) -> usize {
    at + haystack[at..].chars().next().map_or(1, char::len_utf8)
}

fn check_range(text: &str, range: &Range<usize>) -> Result<()> {
    if range.start > range.end || range.end > text.len() {
        return Err(Error::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len: text.len(),
        });
    }
    for index in [range.start, range.end] {
        if !text.is_char_boundary(index) {
            return Err(Error::NotCharBoundary { index });
        }
    }
    Ok(())
}

/// Searches with the full text as the default range.
impl Pattern {
    /// Returns an iterator over every non-overlapping match in `text`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use regexp_ext::{MatchOptions, Pattern};
    /// let re = Pattern::new(r"\d+").unwrap();
    /// let found: Vec<&str> = re
    ///     .matches("a111b222c", MatchOptions::default())
    ///     .map(|m| m.as_str())
    ///     .collect();
    /// assert_eq!(found, vec!["111", "222"]);
    /// ```
    pub fn matches<'r, 't>(&'r self, text: &'t str, options: MatchOptions) -> Matches<'r, 't> {
        Matches::new(self, text, 0..text.len(), options)
    }

    /// Returns the number of matches in `text`.
    pub fn number_of_matches(&self, text: &str, options: MatchOptions) -> usize {
        self.matches(text, options).count()
    }

    /// Returns the leftmost match in `text`, if any.
    pub fn first_match<'t>(&self, text: &'t str, options: MatchOptions) -> Option<Match<'t>> {
        self.matches(text, options).next()
    }

    /// Returns an iterator over every non-overlapping match inside `range`.
    ///
    /// Offsets of the returned matches are still relative to the start of
    /// `text`. An error is returned if `range` does not describe a valid
    /// slice of `text`.
    pub fn matches_in_range<'r, 't>(
        &'r self,
        text: &'t str,
        range: Range<usize>,
        options: MatchOptions,
    ) -> Result<Matches<'r, 't>> {
        check_range(text, &range)?;
        Ok(Matches::new(self, text, range, options))
    }

    /// Returns the number of matches inside `range`.
    pub fn number_of_matches_in_range(
        &self,
        text: &str,
        range: Range<usize>,
        options: MatchOptions,
    ) -> Result<usize> {
        Ok(self.matches_in_range(text, range, options)?.count())
    }

    /// Returns the leftmost match inside `range`, if any.
    pub fn first_match_in_range<'t>(
        &self,
        text: &'t str,
        range: Range<usize>,
        options: MatchOptions,
    ) -> Result<Option<Match<'t>>> {
        Ok(self.matches_in_range(text, range, options)?.next())
    }
}
