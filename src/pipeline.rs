//! Schedule assembler.
//!
//! Composes the full pipeline: line parsing → name canonicalization →
//! duration lookup → timing resolution → quantity expansion → stable
//! presentation ordering. The pipeline is total over its input domain:
//! every string produces some schedule (possibly empty), and no error
//! escapes it.
//!
//! Resolution runs in original line order (required for producer-queue
//! correctness); the returned task list is then re-sorted by start time
//! with canonical name as tie-break, which is presentation order only.

use crate::models::{BuildSchedule, DurationOverrides, Vocabulary};
use crate::parser;
use crate::resolver;

/// Runs the full text-to-schedule pipeline.
///
/// Pure in `(text, overrides)`: repeated calls with identical input
/// yield identical output, and no state survives between calls.
///
/// # Example
///
/// ```
/// use buildorder::models::DurationOverrides;
/// use buildorder::pipeline::build_schedule;
///
/// let schedule = build_schedule("14  0:19  Pylon", &DurationOverrides::new());
/// assert_eq!(schedule.task_count(), 1);
/// assert_eq!(schedule.tasks[0].start_seconds, 19);
/// assert_eq!(schedule.tasks[0].end_seconds, 37);
/// ```
pub fn build_schedule(text: &str, overrides: &DurationOverrides) -> BuildSchedule {
    let lines = parser::parse_text(text);
    let mut tasks = resolver::resolve(&lines, Vocabulary::standard(), overrides);
    // Stable sort: ties keep resolution order (original line order).
    tasks.sort_by(|a, b| {
        a.start_seconds
            .cmp(&b.start_seconds)
            .then_with(|| a.name.cmp(&b.name))
    });
    BuildSchedule::from_tasks(tasks)
}

/// Formats seconds as `M:SS` — minutes unpadded, seconds zero-padded.
///
/// `125` → `"2:05"`. Intended for non-negative timeline values.
pub fn format_clock(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn schedule(text: &str) -> BuildSchedule {
        build_schedule(text, &DurationOverrides::new())
    }

    #[test]
    fn test_end_to_end_scenario() {
        let s = schedule("12  0:00  Probe\n14  0:19  Pylon\n16  0:44  Gateway");
        assert_eq!(s.task_count(), 3);

        let starts: Vec<i64> = s.tasks.iter().map(|t| t.start_seconds).collect();
        let ends: Vec<i64> = s.tasks.iter().map(|t| t.end_seconds).collect();
        assert_eq!(starts, vec![0, 19, 44]);
        assert_eq!(ends, vec![12, 37, 90]);
        assert_eq!(s.makespan_seconds(), 90);
    }

    #[test]
    fn test_dialect_equivalence() {
        for text in ["14 0:18 Pylon", "14 Pylon @0:18", "Pylon @0:18"] {
            let s = schedule(text);
            assert_eq!(s.task_count(), 1, "input {text:?}");
            assert_eq!(s.tasks[0].name, "Pylon");
            assert_eq!(s.tasks[0].start_seconds, 18);
        }
    }

    #[test]
    fn test_quantity_expansion() {
        let s = schedule("16  0:47  Probe x2 (Chrono Boost)");
        assert_eq!(s.task_count(), 2);
        for task in &s.tasks {
            assert_eq!(task.name, "Probe");
            assert_eq!(task.start_seconds, 47);
            assert_eq!(task.annotation.as_deref(), Some("Chrono Boost"));
        }
        assert_ne!(s.tasks[0].id, s.tasks[1].id);
    }

    #[test]
    fn test_unknown_item_fallback() {
        let s = schedule("10  0:05  Zorblax");
        assert_eq!(s.task_count(), 1);
        assert_eq!(s.tasks[0].duration_seconds, 10);
        assert_eq!(s.tasks[0].category, Category::Other);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(schedule("").is_empty());
        assert!(schedule("   \n\n  ").is_empty());
    }

    #[test]
    fn test_malformed_lines_do_not_abort_batch() {
        let s = schedule("14 0:18 Pylon\n(note only)\n16 0:44 Gateway");
        assert_eq!(s.task_count(), 2);
    }

    #[test]
    fn test_extreme_timestamps_still_produce_a_schedule() {
        // Clock values at and beyond the i64 range must not panic:
        // past-range tokens degrade to inferred timing, in-range ones
        // saturate at the end of the timeline.
        let s = schedule("14 9223372036854775807:00 Pylon\nPylon @0:9223372036854775807");
        assert_eq!(s.task_count(), 2);
        assert_eq!(s.tasks[0].start_seconds, 0);
        assert_eq!(s.tasks[1].end_seconds, i64::MAX);
    }

    #[test]
    fn test_idempotence() {
        let text = "12  0:00  Probe\n16  0:47  Probe x2 (Chrono Boost)\nZealot";
        let a = build_schedule(text, &DurationOverrides::new());
        let b = build_schedule(text, &DurationOverrides::new());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_override_insertion_order_is_irrelevant() {
        let text = "Probe\nPylon\nGateway";
        let mut forward = DurationOverrides::new();
        forward.insert("Probe".to_string(), 20);
        forward.insert("Pylon".to_string(), 25);
        let mut reverse = DurationOverrides::new();
        reverse.insert("Pylon".to_string(), 25);
        reverse.insert("Probe".to_string(), 20);

        let a = build_schedule(text, &forward);
        let b = build_schedule(text, &reverse);
        assert_eq!(a, b);
    }

    #[test]
    fn test_presentation_sort_by_start_then_name() {
        // Explicit times out of order; same start resolves alphabetically.
        let s = schedule("Zealot @0:10\nAdept @0:10\nProbe @0:00");
        let names: Vec<&str> = s.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Probe", "Adept", "Zealot"]);
    }

    #[test]
    fn test_resolution_uses_line_order_despite_resort() {
        // The explicit Probe at 0:30 occupies the Nexus until 0:42, so the
        // later untimed Probe starts at 42 even though presentation order
        // puts it after re-sorting.
        let s = schedule("Probe @0:30\nProbe");
        let starts: Vec<i64> = s.tasks.iter().map(|t| t.start_seconds).collect();
        assert_eq!(starts, vec![30, 42]);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(125), "2:05");
        assert_eq!(format_clock(3723), "62:03");
    }

    #[test]
    fn test_source_line_indices_survive_resort() {
        let s = schedule("Pylon @0:30\nProbe @0:00");
        assert_eq!(s.tasks[0].name, "Probe");
        assert_eq!(s.tasks[0].source_line_index, 1);
        assert_eq!(s.tasks[1].source_line_index, 0);
    }
}
