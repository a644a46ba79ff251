//! Learned-word progress tracking.
//!
//! An in-memory set of mastered word ids. How the set is persisted (and in
//! what format) is the caller's concern; the engine never reads or writes
//! it on its own.

use std::collections::HashSet;

/// The set of word ids the player has learned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    learned: HashSet<String>,
}

impl Progress {
    /// Creates an empty progress record.
    pub fn new() -> Progress {
        Progress::default()
    }

    /// Restores a progress record from previously persisted ids.
    pub fn from_ids<I>(ids: I) -> Progress
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Progress {
            learned: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Records a word as learned. Returns whether the id was newly added.
    pub fn mark_learned(&mut self, id: &str) -> bool {
        self.learned.insert(id.to_string())
    }

    /// Whether the given word id has been learned.
    pub fn is_learned(&self, id: &str) -> bool {
        self.learned.contains(id)
    }

    /// The number of learned words.
    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    /// The learned word ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.learned.iter().map(String::as_str)
    }
}
