//! Class Bounding Boxes

use crate::partition::ClassPartition;
use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::debug;

/// Per-class, per-feature minimum and maximum
#[derive(Debug, Clone)]
pub struct ClassBounds {
    /// C x D minima
    pub min: Array2<f64>,
    /// C x D maxima
    pub max: Array2<f64>,
}

impl ClassBounds {
    /// Compute class bounding boxes of an N x D matrix
    pub fn compute<L>(matrix: ArrayView2<'_, f64>, partition: &ClassPartition<L>) -> Self {
        let shape = (partition.n_classes(), matrix.ncols());
        let mut min = Array2::from_elem(shape, f64::INFINITY);
        let mut max = Array2::from_elem(shape, f64::NEG_INFINITY);

        for (row, &slot) in matrix.outer_iter().zip(partition.row_classes()) {
            min.row_mut(slot).zip_mut_with(&row, |lo, &v| *lo = lo.min(v));
            max.row_mut(slot).zip_mut_with(&row, |hi, &v| *hi = hi.max(v));
        }

        debug!("Class bounds: {} classes x {} features", shape.0, shape.1);

        Self { min, max }
    }

    /// Number of classes (C)
    pub fn n_classes(&self) -> usize {
        self.min.nrows()
    }

    /// Minima of one class
    pub fn class_min(&self, slot: usize) -> ArrayView1<'_, f64> {
        self.min.row(slot)
    }

    /// Maxima of one class
    pub fn class_max(&self, slot: usize) -> ArrayView1<'_, f64> {
        self.max.row(slot)
    }
}
