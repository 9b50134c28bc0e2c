//! Data Validation
//!
//! Checks that a feature table and its label column can be fed to a
//! complexity measure, and converts the table into a dense matrix.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidatedInput, ValidationConfig, Validator, MIN_CLASSES};
