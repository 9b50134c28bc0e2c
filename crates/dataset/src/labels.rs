//! Label Column

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Class identifiers, one per feature-table row, aligned by position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelColumn<L> {
    /// Target column name
    pub name: String,
    values: Vec<L>,
}

impl<L> LabelColumn<L> {
    /// Create a label column
    pub fn new(name: impl Into<String>, values: Vec<L>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no labels
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Labels in row order
    pub fn values(&self) -> &[L] {
        &self.values
    }
}

impl<L: Eq + Hash> LabelColumn<L> {
    /// Number of distinct classes
    pub fn distinct_count(&self) -> usize {
        self.values.iter().collect::<HashSet<_>>().len()
    }
}

impl<L> From<Vec<L>> for LabelColumn<L> {
    fn from(values: Vec<L>) -> Self {
        Self::new("target", values)
    }
}
