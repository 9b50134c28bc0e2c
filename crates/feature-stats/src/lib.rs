//! Per-Class Feature Statistics
//!
//! Groups rows by class and computes the per-feature statistics the
//! complexity measures reduce: class means and counts for the Fisher ratio,
//! class bounding boxes for the overlap volume.

mod bounds;
mod moments;
mod partition;

pub use bounds::ClassBounds;
pub use moments::ClassMoments;
pub use partition::ClassPartition;
