//! Volume of Overlapping Region (F2)
//!
//! For each pair of classes, every feature contributes the share of the
//! pair's joint value range covered by both classes:
//!
//! ```text
//! ratio[f] = max(0, min(max_a, max_b) - max(min_a, min_b)) / (max(max_a, max_b) - min(min_a, min_b))
//! volume   = prod_f ratio[f]
//! ```
//!
//! A single feature on which the two bounding boxes do not meet collapses
//! the pair volume to 0. Pair volumes are combined by an [`Aggregator`].

use crate::aggregation::Aggregator;
use crate::error::ComplexityError;
use data_validator::{ValidatedInput, Validator};
use dataset::{FeatureTable, LabelColumn};
use feature_stats::{ClassBounds, ClassPartition};
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::{debug, warn};

/// Ratio used when both classes hold one identical value on a feature (0/0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroRangePolicy {
    /// Classes cannot be told apart on the feature: ratio 1
    #[default]
    FullOverlap,
    /// Treat the degenerate range as contributing no overlap: ratio 0
    NoOverlap,
}

impl ZeroRangePolicy {
    /// Ratio assigned to a zero-length range
    pub fn ratio(&self) -> f64 {
        match self {
            ZeroRangePolicy::FullOverlap => 1.0,
            ZeroRangePolicy::NoOverlap => 0.0,
        }
    }
}

/// Options for the F2 measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlapOptions {
    /// Reduction over class pairs
    pub aggregator: Aggregator,
    /// Zero-range handling
    pub zero_range: ZeroRangePolicy,
}

impl OverlapOptions {
    /// Options with the given aggregator and default zero-range policy
    pub fn with_aggregator(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            ..Default::default()
        }
    }
}

/// Overlap of one class pair
#[derive(Debug, Clone, Serialize)]
pub struct PairOverlap<L> {
    /// First class of the pair
    pub first: L,
    /// Second class of the pair
    pub second: L,
    /// Overlap ratio per feature, each in [0, 1]
    pub feature_ratios: Vec<f64>,
    /// Product of the feature ratios
    pub volume: f64,
}

/// Per-pair breakdown of the F2 measure
#[derive(Debug, Clone, Serialize)]
pub struct OverlapReport<L> {
    /// One entry per unordered class pair, in class first-appearance order
    pub pairs: Vec<PairOverlap<L>>,
    /// Aggregator applied to the pair volumes
    pub aggregator: Aggregator,
    /// Aggregated score
    pub score: f64,
    /// Pair/feature combinations that fell back to the zero-range policy
    pub zero_ranges: usize,
}

impl<L> OverlapReport<L> {
    /// Pair volumes in pair order
    pub fn volumes(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.volume).collect()
    }
}

/// Compute the F2 measure of a labeled feature table.
///
/// Higher values mean the classes share more of the feature space.
pub fn volume_of_overlap<L: Eq + Hash + Clone>(
    features: &FeatureTable,
    labels: &LabelColumn<L>,
    aggregator: Aggregator,
) -> Result<f64, ComplexityError> {
    overlap_report(features, labels, &OverlapOptions::with_aggregator(aggregator))
        .map(|report| report.score)
}

/// Compute the F2 measure, selecting the aggregator by name ("mean", "sum" or "max").
///
/// The name is checked before the data is looked at.
pub fn volume_of_overlap_by_name<L: Eq + Hash + Clone>(
    features: &FeatureTable,
    labels: &LabelColumn<L>,
    aggregator: &str,
) -> Result<f64, ComplexityError> {
    let aggregator: Aggregator = aggregator.parse()?;
    volume_of_overlap(features, labels, aggregator)
}

/// Compute the F2 measure together with every pair's overlap
pub fn overlap_report<L: Eq + Hash + Clone>(
    features: &FeatureTable,
    labels: &LabelColumn<L>,
    options: &OverlapOptions,
) -> Result<OverlapReport<L>, ComplexityError> {
    let input = Validator::default().validate(features, labels)?;
    Ok(overlap_from_validated(&input, labels.values(), options))
}

pub(crate) fn overlap_from_validated<L: Eq + Hash + Clone>(
    input: &ValidatedInput,
    labels: &[L],
    options: &OverlapOptions,
) -> OverlapReport<L> {
    let partition = ClassPartition::new(labels);
    let bounds = ClassBounds::compute(input.matrix.view(), &partition);
    let classes = partition.classes();
    let mut zero_ranges = 0usize;

    let pairs: Vec<PairOverlap<L>> = partition
        .pairs()
        .map(|(a, b)| {
            let feature_ratios: Vec<f64> = pair_overlaps(&bounds, a, b)
                .into_iter()
                .map(|ratio| {
                    ratio.unwrap_or_else(|| {
                        zero_ranges += 1;
                        options.zero_range.ratio()
                    })
                })
                .collect();
            let volume = feature_ratios.iter().product();
            PairOverlap {
                first: classes[a].clone(),
                second: classes[b].clone(),
                feature_ratios,
                volume,
            }
        })
        .collect();

    if zero_ranges > 0 {
        warn!(
            "{} pair/feature combinations have a zero-length range, using {:?}",
            zero_ranges, options.zero_range
        );
    }

    let volumes: Vec<f64> = pairs.iter().map(|p| p.volume).collect();
    let score = options.aggregator.reduce(&volumes);

    debug!(
        "F2: {} class pairs, {} aggregate {:.6}",
        pairs.len(),
        options.aggregator,
        score
    );

    OverlapReport {
        pairs,
        aggregator: options.aggregator,
        score,
        zero_ranges,
    }
}

/// Overlap ratio of two classes on every feature, `None` where the range has zero length
fn pair_overlaps(bounds: &ClassBounds, a: usize, b: usize) -> Vec<Option<f64>> {
    let (min_a, max_a) = (bounds.class_min(a), bounds.class_max(a));
    let (min_b, max_b) = (bounds.class_min(b), bounds.class_max(b));

    (0..min_a.len())
        .map(|f| {
            let ratio = feature_overlap((min_a[f], max_a[f]), (min_b[f], max_b[f]));
            if ratio.is_none() {
                debug!("Classes {} and {} share a single value on feature {}", a, b, f);
            }
            ratio
        })
        .collect()
}

/// Overlap ratio of two closed intervals, `None` when their union has zero length.
///
/// Widths that overflow (endpoints near `f64::MAX` of opposite sign) are taken
/// on halved endpoints; the ratio is unchanged.
pub fn feature_overlap(a: (f64, f64), b: (f64, f64)) -> Option<f64> {
    let (lo, hi) = (a.0.max(b.0), a.1.min(b.1));
    let (min, max) = (a.0.min(b.0), a.1.max(b.1));

    let (overlap, range) = if (max - min).is_finite() {
        (hi - lo, max - min)
    } else {
        (hi * 0.5 - lo * 0.5, max * 0.5 - min * 0.5)
    };

    if range > 0.0 {
        Some((overlap.max(0.0) / range).min(1.0))
    } else {
        None
    }
}
