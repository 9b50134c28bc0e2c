//! Class Partition

use std::collections::HashMap;
use std::hash::Hash;

/// Row indices grouped by class label.
///
/// Classes are numbered by first appearance in the label sequence. Every
/// per-class statistic in this crate is stored densely in that order.
#[derive(Debug, Clone)]
pub struct ClassPartition<L> {
    /// Distinct labels, first-appearance order
    classes: Vec<L>,
    /// Slot of each row
    row_class: Vec<usize>,
    /// Rows per slot
    counts: Vec<usize>,
}

impl<L: Eq + Hash + Clone> ClassPartition<L> {
    /// Partition a label sequence
    pub fn new(labels: &[L]) -> Self {
        let mut classes = Vec::new();
        let mut index = HashMap::new();
        let mut counts = Vec::new();
        let mut row_class = Vec::with_capacity(labels.len());

        for label in labels {
            let slot = *index.entry(label.clone()).or_insert_with(|| {
                classes.push(label.clone());
                counts.push(0);
                classes.len() - 1
            });
            counts[slot] += 1;
            row_class.push(slot);
        }

        Self {
            classes,
            row_class,
            counts,
        }
    }
}

impl<L> ClassPartition<L> {
    /// Number of distinct classes (C)
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Distinct labels in slot order
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Row count per slot
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Slot of every row, in row order
    pub fn row_classes(&self) -> &[usize] {
        &self.row_class
    }

    /// Every unordered pair of distinct slots, (0,1), (0,2), ..., (C-2,C-1)
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.classes.len();
        (0..n).flat_map(move |a| (a + 1..n).map(move |b| (a, b)))
    }
}
