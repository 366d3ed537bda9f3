//! Name normalizer.
//!
//! Reduces textual variance (casing, spacing, synonyms, leveled-upgrade
//! phrasing) to the canonical strings used as vocabulary keys.
//!
//! # Algorithm
//!
//! 1. Clean: capitalize the first letter of each word, collapse whitespace.
//! 2. Apply the ordered rewrite list (structural spacing/alias fixes).
//! 3. Evaluate the ordered detector rules; first match wins.
//! 4. Nothing matched → return the cleaned name unchanged.
//!
//! Step 4 is an intentional soft failure: unrecognized items still flow
//! through the pipeline with fallback duration and `Category::Other`.
//!
//! Normalization is a pure function of the input string — no dependence
//! on file order or prior lines.

mod rules;

pub use rules::AliasRule;

use once_cell::sync::Lazy;
use regex::Regex;

static PLUS_LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+(\d)").expect("valid plus-level regex"));
static WORD_LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)level\s*(\d)").expect("valid word-level regex"));
static BARE_LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([1-3])\b").expect("valid bare-level regex"));

/// Ordered structural rewrites applied before the detector rules.
/// Each replaces the first occurrence only.
static REWRITES: Lazy<[(Regex, &'static str); 2]> = Lazy::new(|| {
    [
        (
            Regex::new(r"(?i)cybernetics\s*core").expect("valid cybernetics regex"),
            "Cybernetics",
        ),
        (
            Regex::new(r"(?i)warp\s*gate").expect("valid warp gate regex"),
            "Warp Gate",
        ),
    ]
});

/// Maps a free-form item name to its canonical vocabulary key.
///
/// Returns the cleaned input unchanged when no rule recognizes it.
pub fn normalize_name(input: &str) -> String {
    let mut name = clean_name(input);
    for (re, replacement) in REWRITES.iter() {
        name = re.replace(&name, *replacement).into_owned();
    }

    for rule in rules::detectors() {
        if let Some(canonical) = rule.apply(&name) {
            return canonical;
        }
    }
    name
}

/// Capitalizes the first letter of each whitespace-delimited word and
/// collapses repeated whitespace. Characters after the first of each
/// word are left untouched.
pub fn clean_name(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts an upgrade level from `+N`, `level N`, or a bare digit 1–3.
pub fn extract_level(name: &str) -> Option<u32> {
    let digit = |re: &Regex| {
        re.captures(name)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    };
    digit(&PLUS_LEVEL_RE)
        .or_else(|| digit(&WORD_LEVEL_RE))
        .or_else(|| digit(&BARE_LEVEL_RE))
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {
            format!("{}{}", c.to_ascii_uppercase(), chars.as_str())
        }
        Some(c) => format!("{c}{}", chars.as_str()),
        None => String::new(),
    }
}
