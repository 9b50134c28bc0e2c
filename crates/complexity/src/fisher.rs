//! Maximum Fisher Discriminant Ratio (F1)
//!
//! For every feature, the ratio of between-class to within-class scatter:
//!
//! ```text
//! r[f] = sum_c n_c (mean_c[f] - mean[f])^2 / sum_i (x[i,f] - mean_class(i)[f])^2
//! F1   = 1 / (1 + max_f r[f])
//! ```
//!
//! The between-class term sums over all classes, which generalizes the
//! two-class formula to any number of classes. Ratios that are not finite
//! (zero within-class scatter) count as 0. This also zeroes a feature whose
//! classes are each constant but distinct, i.e. one that separates them
//! perfectly, so such a feature never lowers the score.

use crate::aggregation::Aggregator;
use crate::error::ComplexityError;
use data_validator::{ValidatedInput, Validator};
use dataset::{FeatureTable, LabelColumn};
use feature_stats::{ClassMoments, ClassPartition};
use ndarray::{Array1, ArrayView2, Zip};
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::{debug, warn};

/// Per-feature breakdown of the F1 measure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FisherReport {
    /// Feature names in column order
    pub feature_names: Vec<String>,
    /// Discriminant ratio per feature (non-finite ratios already zeroed)
    pub ratios: Vec<f64>,
    /// Feature with the largest ratio
    pub dominant_feature: String,
    /// Largest ratio
    pub max_ratio: f64,
    /// F1 score in (0, 1]
    pub score: f64,
}

/// Compute the F1 measure of a labeled feature table.
///
/// Lower values mean some feature separates the classes well.
pub fn fisher_discriminant_ratio<L: Eq + Hash + Clone>(
    features: &FeatureTable,
    labels: &LabelColumn<L>,
) -> Result<f64, ComplexityError> {
    fisher_report(features, labels).map(|report| report.score)
}

/// Compute the F1 measure together with the per-feature ratios
pub fn fisher_report<L: Eq + Hash + Clone>(
    features: &FeatureTable,
    labels: &LabelColumn<L>,
) -> Result<FisherReport, ComplexityError> {
    let input = Validator::default().validate(features, labels)?;
    fisher_from_validated(&input, labels.values())
}

pub(crate) fn fisher_from_validated<L: Eq + Hash + Clone>(
    input: &ValidatedInput,
    labels: &[L],
) -> Result<FisherReport, ComplexityError> {
    let matrix = input.matrix.view();
    let partition = ClassPartition::new(labels);
    let moments = ClassMoments::compute(matrix, &partition);

    let numerator = between_class_scatter(&moments);
    let denominator = within_class_scatter(matrix, &partition, &moments);
    let ratios = discriminant_ratios(&numerator, &denominator, &input.feature_names);

    if ratios.iter().all(|&r| r <= 0.0) {
        return Err(ComplexityError::DegenerateData);
    }

    let max_ratio = Aggregator::Max.reduce(&ratios);
    let dominant = ratios.iter().position(|&r| r == max_ratio).unwrap_or(0);
    let score = 1.0 / (1.0 + max_ratio);

    debug!(
        "F1: max ratio {:.6} on feature '{}', score {:.6}",
        max_ratio, input.feature_names[dominant], score
    );

    Ok(FisherReport {
        feature_names: input.feature_names.clone(),
        dominant_feature: input.feature_names[dominant].clone(),
        ratios,
        max_ratio,
        score,
    })
}

/// Between-class scatter per feature: sum_c n_c (mean_c - mean)^2
pub fn between_class_scatter(moments: &ClassMoments) -> Array1<f64> {
    let mut scatter = Array1::<f64>::zeros(moments.n_features());
    for (means, &count) in moments.class_means.outer_iter().zip(&moments.counts) {
        let weight = count as f64;
        Zip::from(&mut scatter)
            .and(&means)
            .and(&moments.global_mean)
            .for_each(|acc, &m, &g| *acc += weight * (m - g) * (m - g));
    }
    scatter
}

/// Within-class scatter per feature, in one pass over the rows
pub fn within_class_scatter<L>(
    matrix: ArrayView2<'_, f64>,
    partition: &ClassPartition<L>,
    moments: &ClassMoments,
) -> Array1<f64> {
    let mut scatter = Array1::<f64>::zeros(matrix.ncols());
    for (row, &slot) in matrix.outer_iter().zip(partition.row_classes()) {
        let means = moments.class_means.row(slot);
        Zip::from(&mut scatter)
            .and(&row)
            .and(&means)
            .for_each(|acc, &x, &m| *acc += (x - m) * (x - m));
    }
    scatter
}

fn discriminant_ratios(
    numerator: &Array1<f64>,
    denominator: &Array1<f64>,
    feature_names: &[String],
) -> Vec<f64> {
    numerator
        .iter()
        .zip(denominator.iter())
        .zip(feature_names)
        .map(|((&num, &den), name)| {
            let ratio = num / den;
            if ratio.is_finite() {
                ratio
            } else {
                warn!(
                    "Feature '{}' has zero within-class scatter, ratio counted as 0",
                    name
                );
                0.0
            }
        })
        .collect()
}
