//! Run with: cargo run --example playground

use regexp_ext::predicate::{compile, matches_if_compiled};
use regexp_ext::{describe, extract_first, MatchOptions, Pattern};

fn main() -> Result<(), regexp_ext::Error> {
    // Identify what a string holds
    for text in ["Hello World!", "sodas@icloud.com", "0987-654321"] {
        println!("{}", describe(text));
    }

    // Parse a string's content with capture groups
    let email = Pattern::new(r"^(.+)@(.+\.com)$")?;
    if let Some(groups) = extract_first(&email, "sodas@icloud.com", MatchOptions::default()) {
        println!("account: {}", groups[0]);
        println!("domain: {}", groups[1]);
    }

    // A pattern that fails to compile simply never matches here
    let broken = compile(r"^(.+@");
    println!("broken pattern matches: {}", matches_if_compiled(&broken, "a@b"));

    Ok(())
}
