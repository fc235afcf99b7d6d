use serde::Serialize;

use crate::model::sort::SortKey;
use crate::model::task::Task;
use crate::ops::view::TaskRow;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub done: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub sort: SortKey,
    pub total: usize,
    pub done: usize,
    pub tasks: Vec<TaskJson>,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.0,
        name: task.name.clone(),
        description: task.description.clone(),
        done: task.done,
    }
}

pub fn task_list_json<'a>(tasks: impl IntoIterator<Item = &'a Task>, sort: SortKey) -> TaskListJson {
    let tasks: Vec<TaskJson> = tasks.into_iter().map(task_to_json).collect();
    TaskListJson {
        sort,
        total: tasks.len(),
        done: tasks.iter().filter(|t| t.done).count(),
        tasks,
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// `[x] name`, followed by the indented description if the row shows one
pub fn format_row(row: &TaskRow) -> Vec<String> {
    let check = if row.done { 'x' } else { ' ' };
    let mut lines = vec![format!("[{}] {}", check, row.name)];
    if let Some(desc) = &row.description {
        lines.push(format!("    {}", desc));
    }
    lines
}

pub fn format_listing(rows: &[TaskRow]) -> Vec<String> {
    if rows.is_empty() {
        return vec!["(no tasks)".to_string()];
    }
    rows.iter().flat_map(format_row).collect()
}
