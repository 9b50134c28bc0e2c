//! Tabular Dataset Contract
//!
//! Feature tables and label columns handed over by whatever loads the data.
//! Nothing here checks that a table is usable for a measure; that is the
//! validator's job.

mod error;
mod labels;
mod table;

pub use error::DatasetError;
pub use labels::LabelColumn;
pub use table::{ColumnValues, FeatureColumn, FeatureTable};
