//! Task store, sorter, and progress calculator for DonutDo.
//!
//! This module owns the application's data model: an ordered, in-memory
//! list of tasks with a completion flag each. The list lives for the
//! lifetime of the process; nothing is persisted.
//!
//! # Ordering
//!
//! The list keeps a sorted invariant at all times: incomplete tasks come
//! first, completed tasks last, and each group preserves its relative
//! order (a stable two-way partition, not a total order). Every mutation
//! re-sorts before returning, so positional indices handed out by the
//! renderer are always valid against the current order.
//!
//! # Example
//!
//! ```
//! use donutdo::tasks::TaskList;
//!
//! let mut list = TaskList::new();
//! list.add("write the report");
//! list.add("send the report");
//! list.toggle(0);
//!
//! let data = list.chart_data();
//! assert_eq!(data.completed_count, 1);
//! assert_eq!(data.percentage, 50);
//! ```

/// A unit of work with display text and a completed/incomplete flag.
///
/// The two states form the entire lifecycle: a task is created incomplete
/// and toggles between `Incomplete` and `Completed` on user action. There
/// is no terminal state and no deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Trimmed, non-empty display text.
    pub text: String,
    /// Whether the task has been marked done.
    pub completed: bool,
}

impl Task {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            completed: false,
        }
    }
}

/// Counts and completion percentage derived from the task list.
///
/// `percentage` is `round(completed / total * 100)` with round-half-up
/// semantics, and defined as `0` for an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartData {
    /// Number of completed tasks.
    pub completed_count: usize,
    /// Number of tasks still to do.
    pub uncompleted_count: usize,
    /// Completion percentage in `0..=100`.
    pub percentage: u8,
}

/// Progress stage selected from the completion percentage.
///
/// The six stages mirror the fixed threshold table of the progress
/// imagery: thresholds are evaluated highest-first, and only an exact
/// 100% reaches [`ProgressStage::Bloom100`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProgressStage {
    /// Nothing done yet (percentage below 20).
    Seed0,
    /// At least 20%.
    Sprout20,
    /// At least 40%.
    Stem40,
    /// At least 60%.
    Leaves60,
    /// At least 80% but not everything.
    Bud80,
    /// Exactly 100%.
    Bloom100,
}

impl ProgressStage {
    /// Selects the stage for a completion percentage.
    ///
    /// Thresholds are checked from the top down: `100` is an exact match,
    /// everything else falls through `>= 80`, `>= 60`, `>= 40`, `>= 20`
    /// to the seed stage.
    ///
    /// # Example
    ///
    /// ```
    /// use donutdo::tasks::ProgressStage;
    ///
    /// assert_eq!(ProgressStage::from_percentage(79), ProgressStage::Leaves60);
    /// assert_eq!(ProgressStage::from_percentage(80), ProgressStage::Bud80);
    /// assert_eq!(ProgressStage::from_percentage(100), ProgressStage::Bloom100);
    /// ```
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage == 100 {
            ProgressStage::Bloom100
        } else if percentage >= 80 {
            ProgressStage::Bud80
        } else if percentage >= 60 {
            ProgressStage::Leaves60
        } else if percentage >= 40 {
            ProgressStage::Stem40
        } else if percentage >= 20 {
            ProgressStage::Sprout20
        } else {
            ProgressStage::Seed0
        }
    }

    /// The threshold key this stage corresponds to.
    #[must_use]
    pub fn threshold(self) -> u8 {
        match self {
            ProgressStage::Seed0 => 0,
            ProgressStage::Sprout20 => 20,
            ProgressStage::Stem40 => 40,
            ProgressStage::Leaves60 => 60,
            ProgressStage::Bud80 => 80,
            ProgressStage::Bloom100 => 100,
        }
    }
}

/// Ordered, in-memory collection of tasks.
///
/// This is the single authoritative state object of the application. It
/// is constructed once at startup and mutated only through [`TaskList::add`]
/// and [`TaskList::toggle`]; both re-sort before returning so the sorted
/// invariant holds whenever a caller observes the list.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new incomplete task, rejecting blank input.
    ///
    /// The text is trimmed first; if nothing remains the call is a no-op
    /// and returns `false`. No error is surfaced for blank input — the
    /// caller simply keeps its state.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.tasks.push(Task::new(trimmed));
        self.sort();
        true
    }

    /// Flips the completion flag of the task at `index` in the current
    /// (sorted) order, then re-sorts.
    ///
    /// Returns `false` for an out-of-range index. The renderer never
    /// presents such an index; the guard keeps a stale index from
    /// panicking rather than signalling a user-visible error.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            return false;
        };
        task.completed = !task.completed;
        self.sort();
        true
    }

    /// Stable two-way partition: incomplete tasks first, completed last.
    ///
    /// `sort_by_key` is stable, so ties (same status) keep their relative
    /// order from before the sort.
    pub fn sort(&mut self) {
        self.tasks.sort_by_key(|task| task.completed);
    }

    /// Derives counts and the completion percentage.
    ///
    /// Percentage is rounded half-up; an empty list reports zero rather
    /// than dividing by zero.
    #[must_use]
    pub fn chart_data(&self) -> ChartData {
        let completed_count = self.tasks.iter().filter(|t| t.completed).count();
        let total = self.tasks.len();
        let uncompleted_count = total - completed_count;

        let percentage = if total == 0 {
            0
        } else {
            ((completed_count as f64 / total as f64) * 100.0).round() as u8
        };

        ChartData {
            completed_count,
            uncompleted_count,
            percentage,
        }
    }

    /// The progress stage for the current completion percentage.
    #[must_use]
    pub fn progress_stage(&self) -> ProgressStage {
        ProgressStage::from_percentage(self.chart_data().percentage)
    }

    /// Number of tasks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The task at `index` in the current (sorted) order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Iterates tasks in the current (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}
