//! Timing resolver.
//!
//! Assigns start times to parsed lines in original line order: explicit
//! timestamps are authoritative and never delayed or reordered, while
//! untimed lines queue behind earlier work from the same producer.
//!
//! # Algorithm
//!
//! A single pass threads two watermarks through the lines:
//!
//! - `current_time`: latest end time seen so far (global watermark).
//! - `producer_free`: per-producer earliest next available start.
//!
//! For each line, explicit time wins outright; otherwise
//! `start = max(current_time, producer_free[producer])` when the item
//! has a known producer, else `start = current_time`. Every line then
//! advances `current_time` to `max(current_time, end)`, and lines with
//! a known producer advance that producer's watermark to
//! `max(producer_free, end)` — explicitly-timed lines included, so later
//! untimed items from the same producer queue after them. An explicit
//! time earlier than the producer watermark never rolls the watermark
//! backward.
//!
//! Quantity expansion happens after timing: a line with quantity N
//! yields N tasks sharing one computed start time.

use std::collections::HashMap;

use log::debug;

use crate::models::{DurationOverrides, ParsedLine, ScheduledTask, Vocabulary};
use crate::normalize::normalize_name;

/// Watermark state threaded through one resolution pass.
#[derive(Debug, Default)]
struct ResolverState {
    /// Latest end time seen so far (seconds).
    current_time: i64,
    /// Earliest next available start per producer (seconds).
    producer_free: HashMap<String, i64>,
}

/// Resolves start/end times for parsed lines and expands quantities.
///
/// Lines are processed in slice order (the original input order);
/// the returned tasks keep that order. Names are canonicalized exactly
/// once here, before any timing or grouping decision depends on them.
pub fn resolve(
    lines: &[ParsedLine],
    vocabulary: &Vocabulary,
    overrides: &DurationOverrides,
) -> Vec<ScheduledTask> {
    let mut state = ResolverState::default();
    let mut tasks = Vec::with_capacity(lines.len());

    for line in lines {
        let name = normalize_name(&line.raw_name);
        if vocabulary.lookup(&name).is_none() && !overrides.contains_key(&name) {
            debug!("unknown item {name:?} on line {}, using fallback", line.line_index);
        }
        let duration = vocabulary.duration_for(&name, overrides);
        let producer = vocabulary.producer_for(&name);

        let start = match line.explicit_time_seconds {
            Some(explicit) => explicit,
            None => match producer {
                Some(p) => state
                    .current_time
                    .max(state.producer_free.get(p).copied().unwrap_or(0)),
                None => state.current_time,
            },
        };
        // Saturating: an explicit time near i64::MAX must not panic.
        let end = start.saturating_add(duration);

        state.current_time = state.current_time.max(end);
        if let Some(p) = producer {
            let free = state.producer_free.entry(p.to_string()).or_insert(0);
            *free = (*free).max(end);
        }

        let category = vocabulary.category_for(&name);
        for instance in 0..line.quantity {
            tasks.push(ScheduledTask {
                id: format!("{}_{}_{}", name, line.line_index, instance),
                name: name.clone(),
                category,
                start_seconds: start,
                duration_seconds: duration,
                end_seconds: end,
                source_line_index: line.line_index,
                annotation: line.annotation.clone(),
            });
        }
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn untimed(index: usize, name: &str) -> ParsedLine {
        ParsedLine::new(index, name)
    }

    fn timed(index: usize, name: &str, seconds: i64) -> ParsedLine {
        ParsedLine::new(index, name).with_explicit_time(seconds)
    }

    fn resolve_default(lines: &[ParsedLine]) -> Vec<ScheduledTask> {
        resolve(lines, Vocabulary::standard(), &DurationOverrides::new())
    }

    #[test]
    fn test_explicit_time_is_authoritative() {
        let lines = vec![timed(0, "Probe", 0), timed(1, "Probe", 5)];
        let tasks = resolve_default(&lines);
        // Second Probe keeps 5 even though the Nexus is busy until 12.
        assert_eq!(tasks[0].start_seconds, 0);
        assert_eq!(tasks[1].start_seconds, 5);
    }

    #[test]
    fn test_untimed_items_queue_per_producer() {
        let lines = vec![untimed(0, "Probe"), untimed(1, "Probe")];
        let tasks = resolve_default(&lines);
        assert_eq!(tasks[0].start_seconds, 0);
        assert_eq!(tasks[0].end_seconds, 12);
        assert_eq!(tasks[1].start_seconds, 12);
        assert_eq!(tasks[1].end_seconds, 24);
    }

    #[test]
    fn test_untimed_item_without_producer_starts_at_watermark() {
        let lines = vec![untimed(0, "Probe"), untimed(1, "Pylon")];
        let tasks = resolve_default(&lines);
        // Pylon has no producer: it starts at the global watermark (12).
        assert_eq!(tasks[1].start_seconds, 12);
        assert_eq!(tasks[1].end_seconds, 30);
    }

    #[test]
    fn test_global_watermark_advances_for_every_line() {
        let lines = vec![untimed(0, "Probe"), untimed(1, "Pylon"), untimed(2, "Probe")];
        let tasks = resolve_default(&lines);
        // Third line: Nexus free at 12, but the watermark is 30 after Pylon.
        assert_eq!(tasks[2].start_seconds, 30);
    }

    #[test]
    fn test_explicit_line_pushes_producer_watermark() {
        let lines = vec![timed(0, "Probe", 30), untimed(1, "Probe")];
        let tasks = resolve_default(&lines);
        // The untimed Probe queues after the explicit one completes at 42.
        assert_eq!(tasks[1].start_seconds, 42);
    }

    #[test]
    fn test_explicit_earlier_than_watermark_does_not_roll_back() {
        let lines = vec![
            timed(0, "Probe", 30),  // Nexus busy until 42
            timed(1, "Probe", 10),  // manual correction, ends at 22
            untimed(2, "Probe"),
        ];
        let tasks = resolve_default(&lines);
        assert_eq!(tasks[1].start_seconds, 10);
        // Watermark stays at 42: the earlier explicit line never lowers it.
        assert_eq!(tasks[2].start_seconds, 42);
    }

    #[test]
    fn test_quantity_expands_to_simultaneous_tasks() {
        let lines = vec![timed(0, "Probe", 47).with_quantity(2)];
        let tasks = resolve_default(&lines);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].start_seconds, 47);
        assert_eq!(tasks[1].start_seconds, 47);
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn test_unknown_item_fallback() {
        let lines = vec![timed(0, "Zorblax", 5)];
        let tasks = resolve_default(&lines);
        assert_eq!(tasks[0].duration_seconds, 10);
        assert_eq!(tasks[0].end_seconds, 15);
        assert_eq!(tasks[0].category, Category::Other);
    }

    #[test]
    fn test_duration_override_applies() {
        let mut overrides = DurationOverrides::new();
        overrides.insert("Probe".to_string(), 20);
        let lines = vec![untimed(0, "Probe"), untimed(1, "Probe")];
        let tasks = resolve(&lines, Vocabulary::standard(), &overrides);
        assert_eq!(tasks[0].end_seconds, 20);
        assert_eq!(tasks[1].start_seconds, 20);
    }

    #[test]
    fn test_names_normalized_before_lookup() {
        let lines = vec![untimed(0, "probe")];
        let tasks = resolve_default(&lines);
        assert_eq!(tasks[0].name, "Probe");
        assert_eq!(tasks[0].duration_seconds, 12);
    }

    #[test]
    fn test_annotation_carried_to_tasks() {
        let lines = vec![timed(0, "Probe", 47)
            .with_quantity(2)
            .with_annotation("Chrono Boost")];
        let tasks = resolve_default(&lines);
        assert_eq!(tasks[0].annotation.as_deref(), Some("Chrono Boost"));
        assert_eq!(tasks[1].annotation.as_deref(), Some("Chrono Boost"));
    }

    #[test]
    fn test_end_equals_start_plus_duration() {
        let lines = vec![untimed(0, "Probe"), timed(1, "Pylon", 19), untimed(2, "Zealot")];
        for task in resolve_default(&lines) {
            assert_eq!(task.end_seconds, task.start_seconds + task.duration_seconds);
            assert!(task.start_seconds >= 0);
        }
    }

    #[test]
    fn test_extreme_explicit_time_saturates() {
        let lines = vec![timed(0, "Pylon", i64::MAX), untimed(1, "Probe")];
        let tasks = resolve_default(&lines);
        assert_eq!(tasks[0].start_seconds, i64::MAX);
        assert_eq!(tasks[0].end_seconds, i64::MAX);
        // The global watermark saturates too; later lines still resolve.
        assert_eq!(tasks[1].start_seconds, i64::MAX);
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_default(&[]).is_empty());
    }
}
