/*!
Convenience extensions over the [`regex`] crate.

- searches default to the whole string, and every search also has an
  explicit sub-range form;
- [`extract`] turns each match into the list of its capture group
  substrings;
- [`predicate`] offers a compile factory and a boolean predicate for
  conditional chains and `match` guards;
- [`Classifier`] picks a value by the first of several patterns that matches.

```rust
use regexp_ext::{extract, MatchOptions, Pattern};

let email = Pattern::new(r"^(.+)@(.+\.com)$").unwrap();
let groups = extract(&email, "sodas@icloud.com", MatchOptions::default());
let (account, domain) = (&groups[0][0], &groups[0][1]);
assert_eq!(account, "sodas");
assert_eq!(domain, "icloud.com");
```

All offsets are byte offsets into the searched text.
*/

mod engine;
mod error;
mod options;
mod pattern;

pub mod classify;
pub mod extract;
pub mod predicate;

pub use classify::{describe, Classifier, ContentType};
pub use engine::{Match, Matches};
pub use error::{Error, Result};
pub use extract::{
    capture_groups, extract, extract_first, extract_in_range, CaptureGroupSet, ExtractionResult,
};
pub use options::{CompileOptions, MatchOptions};
pub use pattern::{escape, Pattern, PatternBuilder};
