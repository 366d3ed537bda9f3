//! Scheduled task and assembled schedule models.
//!
//! A `ScheduledTask` is one produced unit placed on the timeline; a
//! `BuildSchedule` is the full ordered result of a pipeline run. The
//! task list is replaced wholesale whenever input text or duration
//! overrides change — tasks are never mutated in place.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Category;

/// One produced unit placed on the timeline.
///
/// A line with quantity N expands to N tasks sharing start time and name
/// but with distinct ids.
///
/// Invariants: `end_seconds == start_seconds + duration_seconds`
/// (saturating at `i64::MAX`) and `start_seconds >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Unique, deterministic task id (`<name>_<line>_<instance>`).
    pub id: String,
    /// Canonical item name.
    pub name: String,
    /// Item classification.
    pub category: Category,
    /// Start time (seconds).
    pub start_seconds: i64,
    /// Duration (seconds).
    pub duration_seconds: i64,
    /// End time (seconds).
    pub end_seconds: i64,
    /// Zero-based index of the input line this task came from.
    pub source_line_index: usize,
    /// Free-text annotation carried over from the input line.
    pub annotation: Option<String>,
}

/// How renderers order timeline rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Rows sorted by name (A→Z).
    #[default]
    Alphabetical,
    /// Rows sorted by each name's earliest start time, then name.
    FirstStart,
}

/// The assembled schedule: tasks sorted by start time, then name.
///
/// Produced by [`crate::pipeline::build_schedule`]; holds no state
/// beyond the task list itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSchedule {
    /// Tasks in presentation order (start ascending, name ascending).
    pub tasks: Vec<ScheduledTask>,
}

impl BuildSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-ordered task list.
    pub fn from_tasks(tasks: Vec<ScheduledTask>) -> Self {
        Self { tasks }
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the schedule has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Latest end time across all tasks (seconds), 0 when empty.
    pub fn makespan_seconds(&self) -> i64 {
        self.tasks.iter().map(|t| t.end_seconds).max().unwrap_or(0)
    }

    /// Returns all tasks for a given canonical name.
    pub fn tasks_for_name(&self, name: &str) -> Vec<&ScheduledTask> {
        self.tasks.iter().filter(|t| t.name == name).collect()
    }

    /// Earliest start time for a given canonical name (seconds).
    pub fn first_start_for_name(&self, name: &str) -> Option<i64> {
        self.tasks
            .iter()
            .filter(|t| t.name == name)
            .map(|t| t.start_seconds)
            .min()
    }

    /// Unique task names ordered for row layout.
    ///
    /// Ties under [`SortMode::FirstStart`] break alphabetically, so row
    /// order is deterministic for any input.
    pub fn row_names(&self, mode: SortMode) -> Vec<String> {
        let mut first_start: HashMap<&str, i64> = HashMap::new();
        let mut names: Vec<&str> = Vec::new();
        for task in &self.tasks {
            let entry = first_start.entry(task.name.as_str()).or_insert_with(|| {
                names.push(task.name.as_str());
                task.start_seconds
            });
            *entry = (*entry).min(task.start_seconds);
        }

        match mode {
            SortMode::Alphabetical => names.sort_unstable(),
            SortMode::FirstStart => {
                names.sort_by(|a, b| first_start[a].cmp(&first_start[b]).then_with(|| a.cmp(b)));
            }
        }
        names.into_iter().map(str::to_string).collect()
    }
}
