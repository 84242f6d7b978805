// Reference extraction — finding Asana task links in free text and diffing
// them against a previous revision of the same text.

pub mod diff;
pub mod extract;

use std::collections::BTreeSet;
use std::fmt;

/// An Asana task identifier pulled out of a link.
///
/// Kept as the exact digit string from the URL. Asana task gids routinely
/// exceed what a JSON number can carry without precision loss, so they are
/// never parsed into an integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskRef(String);

impl TaskRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The unique task references found in one piece of text.
///
/// Backed by a BTreeSet so log output and iteration are stable between runs,
/// though callers should not depend on any particular order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet(BTreeSet<TaskRef>);

impl ReferenceSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskRef> {
        self.0.iter()
    }

    /// Every reference in `self` that is not in `other`.
    pub fn difference(&self, other: &ReferenceSet) -> ReferenceSet {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// The identifiers as plain strings, for logging and display.
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(TaskRef::as_str).collect()
    }
}

impl FromIterator<TaskRef> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = TaskRef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ReferenceSet {
    type Item = TaskRef;
    type IntoIter = std::collections::btree_set::IntoIter<TaskRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceSet {
    type Item = &'a TaskRef;
    type IntoIter = std::collections::btree_set::Iter<'a, TaskRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
