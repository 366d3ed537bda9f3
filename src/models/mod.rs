//! Build-order domain models.
//!
//! Plain data types shared across the pipeline. None of these carry
//! behavior beyond lookups and query helpers — classification and
//! producer associations are flat data tables, not a type hierarchy.
//!
//! # Pipeline Mapping
//!
//! | Type | Produced by | Consumed by |
//! |------|-------------|-------------|
//! | `Vocabulary` | static data | resolver |
//! | `ParsedLine` | line parser | resolver |
//! | `ScheduledTask` | resolver | renderers |
//! | `BuildSchedule` | assembler | renderers |

mod line;
mod task;
mod vocabulary;

pub use line::{ParsedLine, MAX_QUANTITY};
pub use task::{BuildSchedule, ScheduledTask, SortMode};
pub use vocabulary::{
    Category, DurationOverrides, Vocabulary, VocabularyEntry, FALLBACK_DURATION_SECONDS,
};
