use pretty_assertions::assert_eq;
use regexp_ext::{extract_in_range, Error, MatchOptions, Pattern};

fn spans(
    re: &Pattern,
    text: &str,
    range: std::ops::Range<usize>,
    options: MatchOptions,
) -> Vec<(usize, usize)> {
    re.matches_in_range(text, range, options)
        .unwrap()
        .map(|m| (m.start(), m.end()))
        .collect()
}

#[test]
fn offsets_stay_absolute() {
    let re = Pattern::new(r"(\d)").unwrap();
    let text = "1 2 3 4";
    assert_eq!(spans(&re, text, 2..5, MatchOptions::new()), vec![(2, 3), (4, 5)]);

    let m = re.first_match_in_range(text, 3..7, MatchOptions::new()).unwrap().unwrap();
    assert_eq!(m.range_at(1), Some(4..5));
    assert_eq!(m.get(1), Some("3"));
}

#[test]
fn range_end_is_a_hard_bound() {
    let re = Pattern::new(r"\d+").unwrap();
    assert_eq!(spans(&re, "12345", 0..3, MatchOptions::new()), vec![(0, 3)]);
    assert_eq!(
        spans(&re, "12345", 0..3, MatchOptions::new().transparent_bounds(true)),
        vec![(0, 3)]
    );
}

#[test]
fn opaque_bounds_anchor_at_range_start() {
    let re = Pattern::new(r"^\w+").unwrap();
    let text = "hello world";
    assert_eq!(spans(&re, text, 6..11, MatchOptions::new()), vec![(6, 11)]);
    assert_eq!(
        spans(&re, text, 6..11, MatchOptions::new().transparent_bounds(true)),
        Vec::<(usize, usize)>::new()
    );
}

#[test]
fn transparent_bounds_see_word_boundaries() {
    let re = Pattern::new(r"\bworld").unwrap();
    let text = "helloworld";
    assert_eq!(spans(&re, text, 5..10, MatchOptions::new()), vec![(5, 10)]);
    assert_eq!(
        spans(&re, text, 5..10, MatchOptions::new().transparent_bounds(true)),
        Vec::<(usize, usize)>::new()
    );
}

#[test]
fn anchored_in_range() {
    let re = Pattern::new(r"ab").unwrap();
    let options = MatchOptions::new().anchored(true);
    assert_eq!(spans(&re, "xababxab", 1..8, options), vec![(1, 3), (3, 5)]);
    assert_eq!(re.number_of_matches_in_range("xababxab", 1..8, MatchOptions::new()).unwrap(), 3);
}

#[test]
fn extraction_in_range() {
    let re = Pattern::new(r"(\w)=(\d)").unwrap();
    let text = "a=1 b=2 c=3";
    assert_eq!(
        extract_in_range(&re, text, 4..11, MatchOptions::new()).unwrap(),
        vec![vec!["b", "2"], vec!["c", "3"]]
    );
    assert_eq!(
        extract_in_range(&re, text, 0..0, MatchOptions::new()).unwrap(),
        Vec::<Vec<&str>>::new()
    );
}

#[test]
fn invalid_ranges_are_errors() {
    let re = Pattern::new("a").unwrap();
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 3..1;
    assert!(matches!(
        extract_in_range(&re, "aaaa", reversed, MatchOptions::new()),
        Err(Error::RangeOutOfBounds { start: 3, end: 1, len: 4 })
    ));
    assert!(matches!(
        re.number_of_matches_in_range("aaaa", 0..5, MatchOptions::new()),
        Err(Error::RangeOutOfBounds { .. })
    ));
    assert!(matches!(
        re.first_match_in_range("a文", 2..4, MatchOptions::new()),
        Err(Error::NotCharBoundary { index: 2 })
    ));
}

#[test]
fn full_range_equals_default() {
    let re = Pattern::new(r"\w+").unwrap();
    let text = "one two three";
    let options = MatchOptions::new();
    let in_range: Vec<_> = re.matches_in_range(text, 0..text.len(), options).unwrap().collect();
    let default: Vec<_> = re.matches(text, options).collect();
    assert_eq!(in_range, default);
    assert_eq!(re.number_of_matches(text, options), 3);
}
