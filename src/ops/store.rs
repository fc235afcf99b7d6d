use indexmap::IndexMap;

use crate::model::task::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN, Task, TaskId, char_len};

/// Error type for store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task name must not be empty")]
    EmptyName,
    #[error("task name is {len} characters (max {max})")]
    NameTooLong { len: usize, max: usize },
    #[error("task description is {len} characters (max {max})")]
    DescriptionTooLong { len: usize, max: usize },
}

/// Change notification delivered to store subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TaskId),
    Removed(TaskId),
    DoneChanged { id: TaskId, done: bool },
}

/// Handle returned by [`TaskStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// In-memory, insertion-ordered task collection.
///
/// Every successful mutation bumps [`revision`](Self::revision) and is
/// reported to subscribers synchronously, in subscription order. Rejected
/// and no-op calls notify nobody.
#[derive(Default)]
pub struct TaskStore {
    tasks: IndexMap<TaskId, Task>,
    next_id: u64,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new task and return a copy of it.
    pub fn add(&mut self, name: &str, description: Option<&str>) -> Result<Task, StoreError> {
        validate(name, description)?;

        self.next_id += 1;
        let id = TaskId(self.next_id);
        let task = Task::new(id, name.to_string(), description.map(str::to_string));
        self.tasks.insert(id, task.clone());

        tracing::debug!(%id, task = name, "task added");
        self.notify(StoreEvent::Added(id));
        Ok(task)
    }

    /// Remove a task by identity. Absent ids are a no-op.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let task = self.tasks.shift_remove(&id)?;
        tracing::debug!(%id, task = %task.name, "task removed");
        self.notify(StoreEvent::Removed(id));
        Some(task)
    }

    /// Set the done flag. Returns false if the task is absent.
    pub fn set_done(&mut self, id: TaskId, done: bool) -> bool {
        let Some(task) = self.tasks.get_mut(&id) else {
            return false;
        };
        if task.done != done {
            task.done = done;
            tracing::debug!(%id, done, "task done flag changed");
            self.notify(StoreEvent::DoneChanged { id, done });
        }
        true
    }

    /// Flip the done flag, returning the new value.
    pub fn toggle_done(&mut self, id: TaskId) -> Option<bool> {
        let done = !self.tasks.get(&id)?.done;
        self.set_done(id, done);
        Some(done)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Tasks in insertion order
    pub fn all(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Owned copy of the tasks in insertion order
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.tasks.values().filter(|t| t.done).count()
    }

    /// Number of successful mutations so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn validate(name: &str, description: Option<&str>) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    let len = char_len(name);
    if len > NAME_MAX_LEN {
        return Err(StoreError::NameTooLong {
            len,
            max: NAME_MAX_LEN,
        });
    }
    if let Some(desc) = description {
        let len = char_len(desc);
        if len > DESCRIPTION_MAX_LEN {
            return Err(StoreError::DescriptionTooLong {
                len,
                max: DESCRIPTION_MAX_LEN,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn names(store: &TaskStore) -> Vec<&str> {
        store.all().map(|t| t.name.as_str()).collect()
    }

    fn recording(store: &mut TaskStore) -> Rc<RefCell<Vec<StoreEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |e| sink.borrow_mut().push(*e));
        events
    }

    #[test]
    fn add_appends_undone_task() {
        let mut store = TaskStore::new();
        store.add("first", None).unwrap();
        let task = store.add("second", Some("details")).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!task.done);
        assert_eq!(task.description.as_deref(), Some("details"));
        assert_eq!(names(&store), vec!["first", "second"]);
    }

    #[test]
    fn add_at_limits_succeeds() {
        let mut store = TaskStore::new();
        let name = "n".repeat(NAME_MAX_LEN);
        let desc = "d".repeat(DESCRIPTION_MAX_LEN);
        store.add(&name, Some(&desc)).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_invalid_input() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("", None), Err(StoreError::EmptyName));
        assert_eq!(
            store.add(&"n".repeat(41), None),
            Err(StoreError::NameTooLong { len: 41, max: 40 })
        );
        assert_eq!(
            store.add("ok", Some(&"d".repeat(255))),
            Err(StoreError::DescriptionTooLong { len: 255, max: 254 })
        );
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn add_counts_characters_not_bytes() {
        let mut store = TaskStore::new();
        // 40 two-byte characters
        let name = "é".repeat(NAME_MAX_LEN);
        assert!(store.add(&name, None).is_ok());
    }

    #[test]
    fn add_normalizes_empty_description() {
        let mut store = TaskStore::new();
        let task = store.add("a", Some("")).unwrap();
        assert_eq!(task.description, None);
    }

    #[test]
    fn identical_tasks_are_distinct() {
        let mut store = TaskStore::new();
        let a = store.add("same", None).unwrap();
        let b = store.add("same", None).unwrap();
        assert_ne!(a.id, b.id);

        store.remove(a.id);
        assert_eq!(store.len(), 1);
        assert!(store.contains(b.id));
        assert!(!store.contains(a.id));
    }

    #[test]
    fn remove_preserves_order() {
        let mut store = TaskStore::new();
        store.add("a", None).unwrap();
        let b = store.add("b", None).unwrap();
        store.add("c", None).unwrap();

        let removed = store.remove(b.id).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&store), vec!["a", "c"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = TaskStore::new();
        let a = store.add("a", None).unwrap();
        store.remove(a.id);
        let rev = store.revision();

        assert!(store.remove(a.id).is_none());
        assert!(store.remove(TaskId(999)).is_none());
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut store = TaskStore::new();
        let a = store.add("a", None).unwrap();
        store.remove(a.id);
        let b = store.add("a", None).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn set_done_keeps_insertion_order() {
        let mut store = TaskStore::new();
        let a = store.add("a", None).unwrap();
        store.add("b", None).unwrap();
        store.add("c", None).unwrap();

        assert!(store.set_done(a.id, true));
        assert!(store.get(a.id).unwrap().done);
        assert_eq!(names(&store), vec!["a", "b", "c"]);
        assert_eq!(store.done_count(), 1);
    }

    #[test]
    fn set_done_absent_returns_false() {
        let mut store = TaskStore::new();
        assert!(!store.set_done(TaskId(3), true));
    }

    #[test]
    fn toggle_done_flips() {
        let mut store = TaskStore::new();
        let a = store.add("a", None).unwrap();
        assert_eq!(store.toggle_done(a.id), Some(true));
        assert_eq!(store.toggle_done(a.id), Some(false));
        assert_eq!(store.toggle_done(TaskId(42)), None);
    }

    #[test]
    fn subscribers_see_each_successful_mutation() {
        let mut store = TaskStore::new();
        let events = recording(&mut store);

        let a = store.add("a", None).unwrap();
        let _ = store.add("", None);
        store.set_done(a.id, true);
        store.set_done(a.id, true); // unchanged
        store.remove(a.id);
        store.remove(a.id); // absent

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Added(a.id),
                StoreEvent::DoneChanged { id: a.id, done: true },
                StoreEvent::Removed(a.id),
            ]
        );
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = TaskStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let sub = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add("a", None).unwrap();
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add("b", None).unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = TaskStore::new();
        let a = store.add("a", None).unwrap();
        let snap = store.snapshot();
        store.set_done(a.id, true);
        assert!(!snap[0].done);
    }
}
