use crate::model::sort::SortKey;
use crate::model::task::TaskId;
use crate::ops::sort::sorted;
use crate::ops::store::TaskStore;

/// One displayed list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub name: String,
    pub done: bool,
    /// Present only for undone tasks with a non-blank description
    pub description: Option<String>,
}

/// Build the display rows: a stable sort of the store's insertion order
/// under `key`. Pure; the store is not touched.
pub fn build_rows(store: &TaskStore, key: SortKey) -> Vec<TaskRow> {
    sorted(store.all(), key)
        .into_iter()
        .map(|task| TaskRow {
            id: task.id,
            name: task.name.clone(),
            done: task.done,
            description: task.visible_description().map(str::to_string),
        })
        .collect()
}

/// Index of the row showing `id`
pub fn row_index(rows: &[TaskRow], id: TaskId) -> Option<usize> {
    rows.iter().position(|r| r.id == id)
}
