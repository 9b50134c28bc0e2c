//! Validation Error Types

use thiserror::Error;

/// Errors during input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Table has no columns or no rows
    #[error("Feature table is empty ({rows} rows, {features} features)")]
    EmptyInput { rows: usize, features: usize },

    /// Feature and label row counts differ
    #[error("Features and target must have the same number of instances: {features} vs {labels}")]
    ShapeMismatch { features: usize, labels: usize },

    /// Feature column is not numeric or holds a missing value
    #[error("Feature '{feature}' is not numeric: {reason}")]
    NonNumericFeature { feature: String, reason: String },

    /// Not enough distinct labels
    #[error("Found {found} distinct class(es), at least {required} required")]
    InsufficientClasses { found: usize, required: usize },
}
