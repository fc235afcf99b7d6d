use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum task name length, in characters
pub const NAME_MAX_LEN: usize = 40;

/// Maximum task description length, in characters
pub const DESCRIPTION_MAX_LEN: usize = 254;

/// Stable surrogate identity for a task.
///
/// Assigned by the store from a monotonically increasing counter and never
/// reused within a process, so two tasks with identical fields stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Task name (1..=40 characters)
    pub name: String,
    /// Optional description, never `Some("")`
    pub description: Option<String>,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-done task. Empty descriptions collapse to `None`.
    pub fn new(id: TaskId, name: String, description: Option<String>) -> Self {
        Task {
            id,
            name,
            description: description.filter(|d| !d.is_empty()),
            done: false,
        }
    }

    /// Description to show in a list row: hidden once the task is done,
    /// and hidden when it is only whitespace.
    pub fn visible_description(&self) -> Option<&str> {
        if self.done {
            return None;
        }
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

/// Length in characters (Unicode scalar values), the unit all limits use
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_not_done() {
        let task = Task::new(TaskId(1), "Write report".into(), None);
        assert!(!task.done);
        assert_eq!(task.description, None);
    }

    #[test]
    fn empty_description_normalized() {
        let task = Task::new(TaskId(1), "A".into(), Some(String::new()));
        assert_eq!(task.description, None);
    }

    #[test]
    fn visible_description_hidden_when_done() {
        let mut task = Task::new(TaskId(1), "A".into(), Some("details".into()));
        assert_eq!(task.visible_description(), Some("details"));
        task.done = true;
        assert_eq!(task.visible_description(), None);
    }

    #[test]
    fn visible_description_hidden_when_blank() {
        let task = Task::new(TaskId(1), "A".into(), Some("   ".into()));
        assert_eq!(task.description.as_deref(), Some("   "));
        assert_eq!(task.visible_description(), None);
    }

    #[test]
    fn char_len_counts_scalars_not_bytes() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!("héllo".len(), 6);
    }

    #[test]
    fn task_id_display() {
        assert_eq!(TaskId(7).to_string(), "#7");
    }
}
