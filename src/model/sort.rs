use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Ordering key for the displayed task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ordinal comparison on the task name
    #[default]
    Name,
    /// Not-done tasks before done tasks
    Done,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Name, SortKey::Done];

    /// Label shown in the sort bar and choice list
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Done => "Done",
        }
    }

    /// Config / CLI spelling
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Done => "done",
        }
    }

    /// The comparison function for this key.
    ///
    /// `Name` is a case-sensitive byte-wise comparison with no locale
    /// collation. `Done` only looks at the flag, so equal keys must be kept
    /// in insertion order by a stable sort.
    pub fn comparator(self) -> fn(&Task, &Task) -> Ordering {
        match self {
            SortKey::Name => by_name,
            SortKey::Done => by_done,
        }
    }
}

fn by_name(left: &Task, right: &Task) -> Ordering {
    left.name.cmp(&right.name)
}

fn by_done(left: &Task, right: &Task) -> Ordering {
    left.done.cmp(&right.done)
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized sort key string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key \"{0}\" (expected \"name\" or \"done\")")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "done" => Ok(SortKey::Done),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}
