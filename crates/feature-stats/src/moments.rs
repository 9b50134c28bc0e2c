//! Class Means and Counts

use crate::partition::ClassPartition;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use tracing::debug;

/// First moments of each feature, per class and overall
#[derive(Debug, Clone)]
pub struct ClassMoments {
    /// Rows per class (n_c)
    pub counts: Vec<usize>,
    /// C x D class means
    pub class_means: Array2<f64>,
    /// D global means over all rows
    pub global_mean: Array1<f64>,
}

impl ClassMoments {
    /// Compute class and global means of an N x D matrix
    pub fn compute<L>(matrix: ArrayView2<'_, f64>, partition: &ClassPartition<L>) -> Self {
        let n_classes = partition.n_classes();
        let n_features = matrix.ncols();
        let counts = partition.counts().to_vec();

        let mut class_means = Array2::<f64>::zeros((n_classes, n_features));
        for (row, &slot) in matrix.outer_iter().zip(partition.row_classes()) {
            let mut sums = class_means.row_mut(slot);
            sums += &row;
        }
        for (mut means, &count) in class_means.outer_iter_mut().zip(&counts) {
            if count > 0 {
                means /= count as f64;
            }
        }

        let global_mean = matrix
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(n_features));

        debug!(
            "Class moments: {} classes x {} features, counts={:?}",
            n_classes, n_features, counts
        );

        Self {
            counts,
            class_means,
            global_mean,
        }
    }

    /// Number of classes (C)
    pub fn n_classes(&self) -> usize {
        self.counts.len()
    }

    /// Number of features (D)
    pub fn n_features(&self) -> usize {
        self.global_mean.len()
    }
}
