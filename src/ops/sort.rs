use std::cmp::Ordering;

use crate::model::sort::SortKey;
use crate::model::task::Task;

/// Holds the active ordering key for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSelector {
    active: SortKey,
}

impl SortSelector {
    pub fn new(active: SortKey) -> Self {
        SortSelector { active }
    }

    pub fn active(&self) -> SortKey {
        self.active
    }

    /// Change the active key. Returns true if it actually changed.
    pub fn set_active(&mut self, key: SortKey) -> bool {
        if self.active == key {
            return false;
        }
        tracing::debug!(from = %self.active, to = %key, "sort key changed");
        self.active = key;
        true
    }

    /// Comparison function for the active key
    pub fn comparator(&self) -> fn(&Task, &Task) -> Ordering {
        self.active.comparator()
    }
}

/// Stable-sort a task sequence for display. The input order is the
/// tie-breaker, so passing the store's insertion order keeps equal-key
/// tasks in the order they were added.
pub fn sorted<'a>(tasks: impl IntoIterator<Item = &'a Task>, key: SortKey) -> Vec<&'a Task> {
    let cmp = SortSelector::new(key).comparator();
    let mut out: Vec<&Task> = tasks.into_iter().collect();
    out.sort_by(|a, b| cmp(a, b));
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ops::store::TaskStore;

    fn names<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    fn sample_store() -> TaskStore {
        let mut store = TaskStore::new();
        store.add("Task 1", None).unwrap();
        store.add("ALO", Some("Small description")).unwrap();
        store.add("Task 3", Some("Long description.")).unwrap();
        store
    }

    #[test]
    fn selector_defaults_to_name() {
        let selector = SortSelector::default();
        assert_eq!(selector.active(), SortKey::Name);
    }

    #[test]
    fn set_active_reports_change() {
        let mut selector = SortSelector::default();
        assert!(!selector.set_active(SortKey::Name));
        assert!(selector.set_active(SortKey::Done));
        assert_eq!(selector.active(), SortKey::Done);
    }

    #[test]
    fn sample_by_name() {
        let store = sample_store();
        let rows = sorted(store.all(), SortKey::Name);
        assert_eq!(names(&rows), vec!["ALO", "Task 1", "Task 3"]);
    }

    #[test]
    fn sample_by_done_after_marking_alo() {
        let mut store = sample_store();
        let alo = store.all().find(|t| t.name == "ALO").unwrap().id;
        store.set_done(alo, true);

        let rows = sorted(store.all(), SortKey::Done);
        assert_eq!(names(&rows), vec!["Task 1", "Task 3", "ALO"]);
    }

    #[test]
    fn sorting_never_reorders_store() {
        let store = sample_store();
        let _ = sorted(store.all(), SortKey::Name);
        let stored: Vec<&str> = store.all().map(|t| t.name.as_str()).collect();
        assert_eq!(stored, vec!["Task 1", "ALO", "Task 3"]);
    }

    #[test]
    fn by_name_is_non_decreasing() {
        let mut store = TaskStore::new();
        for name in ["pear", "Apple", "apple", "banana", "Zed", "apple", "42"] {
            store.add(name, None).unwrap();
        }
        let rows = sorted(store.all(), SortKey::Name);
        assert!(rows.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn by_done_is_stable() {
        let mut store = TaskStore::new();
        let ids: Vec<_> = ["e", "d", "c", "b", "a"]
            .iter()
            .map(|n| store.add(n, None).unwrap().id)
            .collect();
        store.set_done(ids[0], true);
        store.set_done(ids[2], true);

        let rows = sorted(store.all(), SortKey::Done);
        assert_eq!(names(&rows), vec!["d", "b", "a", "e", "c"]);
        let first_done = rows.iter().position(|t| t.done).unwrap();
        assert!(rows[..first_done].iter().all(|t| !t.done));
        assert!(rows[first_done..].iter().all(|t| t.done));
    }

    #[test]
    fn comparator_follows_selection() {
        let mut selector = SortSelector::new(SortKey::Done);
        let store = sample_store();
        let tasks: Vec<&Task> = store.all().collect();
        assert_eq!((selector.comparator())(tasks[0], tasks[1]), Ordering::Equal);
        selector.set_active(SortKey::Name);
        assert_eq!((selector.comparator())(tasks[0], tasks[1]), Ordering::Greater);
    }
}
