//! File name de-duplication
//!
//! Two files cannot share a name, so a later duplicate receives the suffix
//! `(k)` with the smallest `k` whose result is still unused.

use crate::constants::{FIRST_SUFFIX, SUFFIX_CLOSE, SUFFIX_OPEN};

#[cfg(feature = "fx-hash")]
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
#[cfg(not(feature = "fx-hash"))]
use std::collections::{HashMap, HashSet};

/// Assign a unique name to every file, in input order
///
/// The output has the same length and order as `names`. A name already
/// present among earlier outputs is probed as `name(1)`, `name(2)`, ...
/// Literal inputs such as `file(1)` occupy their slot like any other name.
pub fn rename_files<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut renamer = FileRenamer::with_capacity(names.len());
    names.iter().map(|name| renamer.assign(name.as_ref())).collect()
}

/// Incremental renamer holding the names assigned so far
///
/// The set of used names only grows, so the first free suffix for a base
/// name never decreases; probing resumes from the last suffix found.
#[derive(Debug, Default)]
pub struct FileRenamer {
    used: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl FileRenamer {
    /// Create an empty renamer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty renamer sized for `capacity` names
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            used: HashSet::with_capacity_and_hasher(capacity, Default::default()),
            next_suffix: HashMap::default(),
        }
    }

    /// Assign the next output name for `name`
    pub fn assign(&mut self, name: &str) -> String {
        if !self.used.contains(name) {
            self.used.insert(name.to_string());
            return name.to_string();
        }

        let mut suffix = self.next_suffix.get(name).copied().unwrap_or(FIRST_SUFFIX);
        let mut candidate = with_suffix(name, suffix);
        while self.used.contains(&candidate) {
            suffix += 1;
            candidate = with_suffix(name, suffix);
        }

        tracing::trace!(name, suffix, "renamed duplicate file");

        self.next_suffix.insert(name.to_string(), suffix + 1);
        self.used.insert(candidate.clone());
        candidate
    }

    /// Whether `name` has been assigned already
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Number of names assigned so far
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether no name has been assigned yet
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

/// Format `name(k)`
fn with_suffix(name: &str, k: usize) -> String {
    format!("{name}{SUFFIX_OPEN}{k}{SUFFIX_CLOSE}")
}
