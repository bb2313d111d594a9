//! Progress statistics for the analytics line.

use crate::model::task::Task;

/// Counts of active and finished tasks plus the done percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub active: usize,
    pub done: usize,
    /// Percentage of tasks done, rounded to one decimal. `0.0` when empty.
    pub pct: f64,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.active + self.done
    }

    /// Text shown in the analytics line.
    pub fn analytics_text(&self) -> String {
        format!(
            "Active: {} · Done: {} · Done %: {:.1}%",
            self.active, self.done, self.pct
        )
    }
}

pub fn summarize(tasks: &[Task]) -> Summary {
    let total = tasks.len();
    let done = tasks.iter().filter(|task| task.done).count();
    let pct = if total == 0 {
        0.0
    } else {
        (done as f64 / total as f64 * 1000.0).round() / 10.0
    };

    Summary {
        active: total - done,
        done,
        pct,
    }
}
