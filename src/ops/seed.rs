use crate::model::config::{SeedConfig, SeedTask};
use crate::model::task::{DESCRIPTION_MAX_LEN, TaskId};
use crate::ops::store::{StoreError, TaskStore};

const LOREM: &str = "Long description. Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed tincidunt blandit nunc ac ultricies. Nunc congue orci vitae tincidunt maximus. Morbi \
pellentesque, dui non dapibus consequat, lectus lacus hendrerit eros, id dictum sapien nisl nec \
risus. Sed vel posuere ipsum, at bibendum tortor. Nullam commodo feugiat enim eget scelerisque.";

/// The built-in sample tasks shown on a fresh start
pub fn sample_tasks() -> Vec<SeedTask> {
    vec![
        SeedTask {
            name: "Task 1".into(),
            description: None,
            done: false,
        },
        SeedTask {
            name: "ALO".into(),
            description: Some("Small description".into()),
            done: false,
        },
        SeedTask {
            name: "Task 3".into(),
            description: Some(LOREM.chars().take(DESCRIPTION_MAX_LEN).collect()),
            done: false,
        },
    ]
}

/// A seed entry that could not be added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRejection {
    pub name: String,
    pub error: StoreError,
}

/// Populate `store` from the seed config: samples first (if enabled), then
/// configured tasks. Invalid entries are skipped and returned.
pub fn apply_seed(store: &mut TaskStore, seed: &SeedConfig) -> Vec<SeedRejection> {
    let samples = if seed.samples { sample_tasks() } else { Vec::new() };
    let mut rejected = Vec::new();

    for entry in samples.iter().chain(seed.tasks.iter()) {
        if let Err(error) = add_seed_task(store, entry) {
            tracing::warn!(task = %entry.name, %error, "skipping seed task");
            rejected.push(SeedRejection {
                name: entry.name.clone(),
                error,
            });
        }
    }
    rejected
}

/// Build the startup store: seeded from config, or empty when `empty`.
pub fn initial_store(seed: &SeedConfig, empty: bool) -> TaskStore {
    let mut store = TaskStore::new();
    if !empty {
        apply_seed(&mut store, seed);
    }
    store
}

fn add_seed_task(store: &mut TaskStore, entry: &SeedTask) -> Result<TaskId, StoreError> {
    let task = store.add(&entry.name, entry.description.as_deref())?;
    if entry.done {
        store.set_done(task.id, true);
    }
    Ok(task.id)
}
