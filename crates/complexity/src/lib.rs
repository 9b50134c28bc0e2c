//! Classification Complexity Measures
//!
//! Classifier-independent scores describing how separable a labeled dataset is:
//! - F1: maximum Fisher discriminant ratio, generalized to any number of classes
//! - F2: volume of the overlapping region of class bounding boxes, per class pair
//!
//! Both measures validate their input, derive per-class statistics and reduce
//! them to a single scalar. See Lorena et al., "How Complex is your
//! classification problem?" (arXiv:1808.03591).

pub mod aggregation;
pub mod config;
pub mod fisher;
pub mod logging;
pub mod overlap;
pub mod profile;

mod error;

pub use aggregation::Aggregator;
pub use config::ComplexityConfig;
pub use error::ComplexityError;
pub use fisher::{fisher_discriminant_ratio, fisher_report, FisherReport};
pub use overlap::{
    overlap_report, volume_of_overlap, volume_of_overlap_by_name, OverlapOptions, OverlapReport,
    PairOverlap, ZeroRangePolicy,
};
pub use profile::ComplexityProfile;

pub use data_validator::ValidationError;
pub use dataset::{ColumnValues, DatasetError, FeatureColumn, FeatureTable, LabelColumn};
