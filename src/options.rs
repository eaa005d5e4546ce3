#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The set of user configurable options for compiling a pattern.
///
/// These are handed to the engine as-is. Flags set here can still be
/// overridden inside the expression itself, e.g. `(?-i)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompileOptions {
    /// Set the value for the case insensitive (`i`) flag.
    pub case_insensitive: bool,
    /// Set the value for the multi-line matching (`m`) flag.
    ///
    /// When enabled, `^` matches the beginning of lines and `$` matches the
    /// end of lines.
    ///
    /// By default, they match beginning/end of the input.
    pub multi_line: bool,
    /// Set the value for the any character (`s`) flag, where in `.` matches
    /// anything when `s` is set and matches anything except for new line when
    /// it is not set (the default).
    pub dot_matches_new_line: bool,
    /// Set the value for the greedy swap (`U`) flag.
    ///
    /// When enabled, a pattern like `a*` is lazy (tries to find shortest
    /// match) and `a*?` is greedy (tries to find longest match).
    ///
    /// By default, `a*` is greedy and `a*?` is lazy.
    pub swap_greed: bool,
    /// Set the value for the ignore whitespace (`x`) flag.
    ///
    /// When enabled, whitespace such as new lines and spaces will be ignored
    /// between expressions of the pattern, and `#` can be used to start a
    /// comment until the next new line.
    pub ignore_whitespace: bool,
    /// Set the value for the Unicode (`u`) flag.
    ///
    /// Enabled by default. When disabled, character classes such as `\w`
    /// only match ASCII word characters instead of all Unicode word
    /// characters.
    pub unicode: bool,
    /// Whether to support octal syntax (`\141`) instead of reporting it as
    /// a backreference error.
    pub octal: bool,
    /// Set the approximate size limit of the compiled regular expression.
    ///
    /// This roughly corresponds to the number of bytes occupied by a single
    /// compiled program. If the program exceeds this number, then a
    /// compilation error is returned.
    pub size_limit: usize,
    /// Set the approximate size of the cache used by the DFA.
    ///
    /// Note that this is a *per thread* limit.
    pub dfa_size_limit: usize,
    /// Set the nesting limit for the parser.
    ///
    /// The nesting limit controls how deep the abstract syntax tree is allowed
    /// to be. If the AST exceeds the given limit (e.g., with too many nested
    /// groups), then an error is returned by the parser.
    pub nest_limit: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            swap_greed: false,
            ignore_whitespace: false,
            unicode: true,
            octal: false,
            size_limit: 10 * (1 << 20),
            dfa_size_limit: 2 * (1 << 20),
            nest_limit: 250,
        }
    }
}

/// Options applied while searching, as opposed to while compiling.
///
/// Capture group extraction forwards these untouched; only the matching
/// engine gives them meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchOptions {
    /// Only report a match if it begins exactly where the search stands:
    /// the start of the search range for the first match, the end of the
    /// previous match after that. Iteration stops at the first gap.
    pub anchored: bool,
    /// Let look-around assertions such as `^` and `\b` see the text before
    /// the start of the search range.
    ///
    /// When disabled (the default) the start of the range behaves like the
    /// start of the text. The end of the range is always a hard bound.
    pub transparent_bounds: bool,
}

impl MatchOptions {
    /// Options with every flag disabled.
    pub const fn new() -> Self {
        MatchOptions { anchored: false, transparent_bounds: false }
    }

    /// Set the value for [`MatchOptions::anchored`].
    pub const fn anchored(mut self, yes: bool) -> Self {
        self.anchored = yes;
        self
    }

    /// Set the value for [`MatchOptions::transparent_bounds`].
    pub const fn transparent_bounds(mut self, yes: bool) -> Self {
        self.transparent_bounds = yes;
        self
    }
}
