//! Input Validator for Labeled Feature Tables

use crate::error::ValidationError;
use dataset::{FeatureTable, LabelColumn};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::debug;

/// Smallest class count any separability measure accepts
pub const MIN_CLASSES: usize = 2;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum number of distinct labels (never below 2)
    pub min_classes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_classes: MIN_CLASSES,
        }
    }
}

/// Table that passed validation, as a dense row-major matrix
#[derive(Debug, Clone)]
pub struct ValidatedInput {
    /// N x D feature values
    pub matrix: Array2<f64>,
    /// Feature names in column order
    pub feature_names: Vec<String>,
    /// Number of distinct classes
    pub n_classes: usize,
}

impl ValidatedInput {
    /// Number of rows (N)
    pub fn n_instances(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of features (D)
    pub fn n_features(&self) -> usize {
        self.matrix.ncols()
    }
}

/// Validator for feature/label pairs
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(mut config: ValidationConfig) -> Self {
        config.min_classes = config.min_classes.max(MIN_CLASSES);
        Self { config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run every check and build the dense matrix.
    ///
    /// Checks run in order: empty table, row alignment, numeric columns,
    /// class count. The first failure is returned.
    pub fn validate<L: Eq + Hash>(
        &self,
        features: &FeatureTable,
        labels: &LabelColumn<L>,
    ) -> Result<ValidatedInput, ValidationError> {
        self.validate_not_empty(features)?;
        self.validate_shape(features, labels)?;
        let columns = self.validate_numeric(features)?;
        let n_classes = self.validate_classes(labels)?;

        let (n, d) = (features.n_rows(), columns.len());
        let matrix = Array2::from_shape_fn((n, d), |(i, j)| columns[j][i]);

        debug!(
            "Validated input: {} instances, {} features, {} classes",
            n, d, n_classes
        );

        Ok(ValidatedInput {
            matrix,
            feature_names: features.feature_names(),
            n_classes,
        })
    }

    /// Require at least one row and one column
    pub fn validate_not_empty(&self, features: &FeatureTable) -> Result<(), ValidationError> {
        if features.is_empty() {
            Err(ValidationError::EmptyInput {
                rows: features.n_rows(),
                features: features.n_features(),
            })
        } else {
            Ok(())
        }
    }

    /// Require one label per feature row
    pub fn validate_shape<L>(
        &self,
        features: &FeatureTable,
        labels: &LabelColumn<L>,
    ) -> Result<(), ValidationError> {
        if features.n_rows() != labels.len() {
            Err(ValidationError::ShapeMismatch {
                features: features.n_rows(),
                labels: labels.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Require every column to be numeric with finite values
    pub fn validate_numeric<'a>(
        &self,
        features: &'a FeatureTable,
    ) -> Result<Vec<&'a [f64]>, ValidationError> {
        features
            .columns()
            .iter()
            .map(|column| {
                let values = column.values.as_numeric().ok_or_else(|| {
                    ValidationError::NonNumericFeature {
                        feature: column.name.clone(),
                        reason: format!("column has {} values", column.values.dtype()),
                    }
                })?;

                if let Some((row, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                    return Err(ValidationError::NonNumericFeature {
                        feature: column.name.clone(),
                        reason: format!("row {} holds {}", row, value),
                    });
                }

                Ok(values)
            })
            .collect()
    }

    /// Require enough distinct labels, returning the class count
    pub fn validate_classes<L: Eq + Hash>(
        &self,
        labels: &LabelColumn<L>,
    ) -> Result<usize, ValidationError> {
        let found = labels.distinct_count();
        if found < self.config.min_classes {
            Err(ValidationError::InsufficientClasses {
                found,
                required: self.config.min_classes,
            })
        } else {
            Ok(found)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
