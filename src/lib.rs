//! Build-order text → timeline schedule.
//!
//! Converts loosely-structured build-order text (the notation players
//! paste from guides) into a normalized, time-ordered task list suitable
//! for timeline rendering. The hard part lives here: tolerant line
//! parsing, name canonicalization against a domain vocabulary, and
//! timing resolution that reconciles explicit timestamps with inferred
//! per-producer queue sequencing.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Vocabulary`, `ParsedLine`,
//!   `ScheduledTask`, `BuildSchedule`
//! - **`normalize`**: Free-form name → canonical vocabulary key
//! - **`parser`**: Raw line → `ParsedLine` (multi-dialect, best-effort)
//! - **`resolver`**: Explicit and queue-inferred start times
//! - **`pipeline`**: End-to-end composition and clock formatting
//!
//! # Architecture
//!
//! The crate is a pure core: each pipeline run is a function of
//! `(input text, duration overrides)` with no cross-invocation state,
//! so it is safe to re-run on every edit. Rendering, persistence of
//! saved builds, and UI are collaborator concerns — they consume the
//! task list and feed nothing back except duration overrides.

pub mod models;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod resolver;
