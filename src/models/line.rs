//! Parsed build-order line.
//!
//! One `ParsedLine` is produced per recognizable input line. It is a
//! transient record: the timing resolver consumes it and it is not
//! retained in the assembled schedule.

use serde::{Deserialize, Serialize};

/// Upper bound on per-line quantity.
///
/// Keeps a typo like `x4294967295` from expanding into billions of
/// tasks; no real build order comes anywhere near this.
pub const MAX_QUANTITY: u32 = 1000;

/// A structured record extracted from one raw input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Zero-based index of the source line in the input text.
    pub line_index: usize,
    /// Supply count, when the dialect carries one. Not used for timing.
    pub supply: Option<u32>,
    /// Explicit timestamp (seconds), authoritative over inference.
    pub explicit_time_seconds: Option<i64>,
    /// Item name as written, before canonicalization.
    pub raw_name: String,
    /// Number of instances this line produces.
    /// Always in `1..=MAX_QUANTITY`.
    pub quantity: u32,
    /// Free-text annotation from the first parenthesized group.
    pub annotation: Option<String>,
}

impl ParsedLine {
    /// Creates a bare-name line record (quantity 1, nothing else set).
    pub fn new(line_index: usize, raw_name: impl Into<String>) -> Self {
        Self {
            line_index,
            supply: None,
            explicit_time_seconds: None,
            raw_name: raw_name.into(),
            quantity: 1,
            annotation: None,
        }
    }

    /// Sets the supply count.
    pub fn with_supply(mut self, supply: u32) -> Self {
        self.supply = Some(supply);
        self
    }

    /// Sets the explicit timestamp (seconds).
    pub fn with_explicit_time(mut self, seconds: i64) -> Self {
        self.explicit_time_seconds = Some(seconds);
        self
    }

    /// Sets the quantity (clamped to `1..=MAX_QUANTITY`).
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.clamp(1, MAX_QUANTITY);
        self
    }

    /// Sets the annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Whether this line carries an explicit timestamp.
    pub fn has_explicit_time(&self) -> bool {
        self.explicit_time_seconds.is_some()
    }
}
