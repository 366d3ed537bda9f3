//! Tolerant build-order line parser.
//!
//! Accepts several common build-order dialects and produces
//! [`ParsedLine`] records. Parsing is best-effort and never fatal:
//! lines that match no dialect are skipped silently, and a malformed
//! time token degrades the line to inferred timing instead of dropping
//! it whenever a lower dialect still matches.
//!
//! # Dialects
//!
//! Tried in order against the line after annotation and quantity
//! extraction; the first structural match wins:
//!
//! | | Shape | Example |
//! |-|-------|---------|
//! | a | `<supply> <time> <name>` | `14 0:18 Pylon` |
//! | b | `<supply> <name> @<time>` | `14 Pylon @0:18` |
//! | c | `<name> @<time>` | `Pylon @0:18` |
//! | d | `<supply> <name>` | `14 Pylon` |
//! | e | `<name>` | `Pylon` |
//!
//! Time tokens are `M:SS` or `H:MM:SS`. Lines starting with `#` or `//`
//! are comments.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ParsedLine;

static ANNOTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("valid annotation regex"));
static QUANTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bx(\d+)\b").expect("valid quantity regex"));

static SUPPLY_TIME_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+(\d+:\d+(?::\d+)?)\s+(.+)$").expect("valid dialect-a regex")
});
static SUPPLY_NAME_AT_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+(.+?)\s*@(\d+:\d+(?::\d+)?)$").expect("valid dialect-b regex")
});
static NAME_AT_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*@(\d+:\d+(?::\d+)?)$").expect("valid dialect-c regex"));
static SUPPLY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s+(.+)$").expect("valid dialect-d regex"));

/// Parses a full input text, one logical item per line.
///
/// Line indices refer to physical lines of the input, including the
/// skipped ones.
pub fn parse_text(text: &str) -> Vec<ParsedLine> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(line, index))
        .collect()
}

/// Parses a single raw line.
///
/// Returns `None` for blank lines, comments, and lines matching no
/// dialect — a skip, not an error.
pub fn parse_line(raw: &str, index: usize) -> Option<ParsedLine> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
        return None;
    }

    let mut rest = line.to_string();
    let mut annotation = None;
    let found = ANNOTATION_RE
        .captures(&rest)
        .and_then(|caps| Some((caps.get(0)?.range(), caps.get(1)?.as_str().trim().to_string())));
    if let Some((range, text)) = found {
        annotation = Some(text);
        rest.replace_range(range, "");
    }

    let mut quantity = 1;
    let found = QUANTITY_RE
        .captures(&rest)
        .and_then(|caps| {
            let digits = caps.get(1)?.as_str();
            Some((caps.get(0)?.range(), digits.parse::<u32>().unwrap_or(1)))
        });
    if let Some((range, parsed)) = found {
        quantity = parsed.max(1);
        rest.replace_range(range, "");
    }

    let rest = rest.trim();
    let Some((supply, time, raw_name)) = match_dialect(rest) else {
        debug!("skipping unparseable line {index}: {line:?}");
        return None;
    };

    let mut parsed = ParsedLine::new(index, raw_name).with_quantity(quantity);
    parsed.supply = supply;
    parsed.explicit_time_seconds = time;
    parsed.annotation = annotation;
    Some(parsed)
}

/// Converts a clock token to total seconds.
///
/// Accepts `M:SS` and `H:MM:SS`; any non-numeric component yields
/// `None`, as does a value too large for `i64` seconds.
pub fn parse_clock(token: &str) -> Option<i64> {
    let parts: Vec<i64> = token
        .trim()
        .split(':')
        .map(|p| p.parse().ok())
        .collect::<Option<_>>()?;
    match parts[..] {
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(seconds),
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds),
        _ => None,
    }
}

/// Tries dialects a–e in order, returning `(supply, time, name)`.
fn match_dialect(rest: &str) -> Option<(Option<u32>, Option<i64>, String)> {
    if rest.is_empty() {
        return None;
    }

    if let Some(caps) = SUPPLY_TIME_NAME_RE.captures(rest) {
        let supply = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let time = caps.get(2).and_then(|m| parse_clock(m.as_str()));
        let name = caps.get(3)?.as_str().trim().to_string();
        return Some((supply, time, name));
    }

    if let Some(caps) = SUPPLY_NAME_AT_TIME_RE.captures(rest) {
        let supply = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let name = caps.get(2)?.as_str().trim().to_string();
        let time = caps.get(3).and_then(|m| parse_clock(m.as_str()));
        return Some((supply, time, name));
    }

    if let Some(caps) = NAME_AT_TIME_RE.captures(rest) {
        let name = caps.get(1)?.as_str().trim().to_string();
        let time = caps.get(2).and_then(|m| parse_clock(m.as_str()));
        return Some((None, time, name));
    }

    if let Some(caps) = SUPPLY_NAME_RE.captures(rest) {
        let supply = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let name = caps.get(2)?.as_str().trim().to_string();
        return Some((supply, None, name));
    }

    Some((None, None, rest.to_string()))
}
