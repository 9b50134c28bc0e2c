//! Combined complexity profile

use crate::aggregation::Aggregator;
use crate::config::ComplexityConfig;
use crate::error::ComplexityError;
use crate::fisher::{fisher_from_validated, FisherReport};
use crate::overlap::{overlap_from_validated, OverlapReport};
use data_validator::Validator;
use dataset::{FeatureTable, LabelColumn};
use serde::Serialize;
use std::hash::Hash;
use tracing::info;

/// F1 and F2 of one dataset, validated once
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityProfile<L> {
    /// Number of rows
    pub n_instances: usize,
    /// Number of features
    pub n_features: usize,
    /// Number of distinct classes
    pub n_classes: usize,
    /// Fisher discriminant ratio breakdown
    pub fisher: FisherReport,
    /// Volume of overlap breakdown
    pub overlap: OverlapReport<L>,
}

impl<L: Eq + Hash + Clone> ComplexityProfile<L> {
    /// Validate the input and compute both measures
    pub fn compute(
        features: &FeatureTable,
        labels: &LabelColumn<L>,
        config: &ComplexityConfig,
    ) -> Result<Self, ComplexityError> {
        let options = config.overlap_options()?;
        let input = Validator::new(config.validation_config()).validate(features, labels)?;

        let fisher = fisher_from_validated(&input, labels.values())?;
        let overlap = overlap_from_validated(&input, labels.values(), &options);

        info!(
            "Complexity of '{}': {} instances, {} features, {} classes, F1={:.4}, F2({})={:.4}",
            labels.name,
            input.n_instances(),
            input.n_features(),
            input.n_classes,
            fisher.score,
            overlap.aggregator,
            overlap.score
        );

        Ok(Self {
            n_instances: input.n_instances(),
            n_features: input.n_features(),
            n_classes: input.n_classes,
            fisher,
            overlap,
        })
    }
}

impl<L> ComplexityProfile<L> {
    /// F1 score
    pub fn f1(&self) -> f64 {
        self.fisher.score
    }

    /// F2 score
    pub fn f2(&self) -> f64 {
        self.overlap.score
    }

    /// Aggregator used for F2
    pub fn aggregator(&self) -> Aggregator {
        self.overlap.aggregator
    }
}

impl<L: Serialize> ComplexityProfile<L> {
    /// Serialize as JSON
    pub fn to_json(&self) -> Result<String, ComplexityError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fisher::fisher_discriminant_ratio;
    use crate::overlap::{volume_of_overlap, ZeroRangePolicy};

    fn three_class_data() -> (FeatureTable, LabelColumn<&'static str>) {
        let features = FeatureTable::from_rows(
            &["length", "width"],
            &[
                vec![1.0, 0.2],
                vec![1.4, 0.3],
                vec![1.2, 0.1],
                vec![4.0, 1.3],
                vec![4.5, 1.5],
                vec![4.2, 1.2],
                vec![5.5, 2.0],
                vec![6.0, 2.3],
                vec![4.4, 1.8],
            ],
        )
        .unwrap();
        let labels = LabelColumn::new(
            "species",
            vec!["setosa", "setosa", "setosa", "versicolor", "versicolor", "versicolor",
                 "virginica", "virginica", "virginica"],
        );
        (features, labels)
    }

    #[test]
    fn test_matches_standalone_measures() {
        let (features, labels) = three_class_data();
        let profile = ComplexityProfile::compute(&features, &labels, &ComplexityConfig::default()).unwrap();

        assert_eq!(profile.n_instances, 9);
        assert_eq!(profile.n_features, 2);
        assert_eq!(profile.n_classes, 3);
        assert_eq!(profile.f1(), fisher_discriminant_ratio(&features, &labels).unwrap());
        assert_eq!(profile.f2(), volume_of_overlap(&features, &labels, Aggregator::Mean).unwrap());
        assert_eq!(profile.overlap.pairs.len(), 3);
    }

    #[test]
    fn test_strict_config() {
        let (features, labels) = three_class_data();
        let profile = ComplexityProfile::compute(&features, &labels, &ComplexityConfig::strict()).unwrap();

        assert_eq!(profile.aggregator(), Aggregator::Max);
        assert_eq!(profile.f2(), volume_of_overlap(&features, &labels, Aggregator::Max).unwrap());
        assert_eq!(ComplexityConfig::strict().zero_range, ZeroRangePolicy::NoOverlap);
    }

    #[test]
    fn test_min_classes_from_config() {
        let (features, labels) = three_class_data();
        let config = ComplexityConfig {
            min_classes: 4,
            ..Default::default()
        };

        assert!(matches!(
            ComplexityProfile::compute(&features, &labels, &config),
            Err(ComplexityError::Validation(_))
        ));
    }

    #[test]
    fn test_bad_aggregator_before_validation() {
        let features = FeatureTable::default();
        let labels: LabelColumn<u8> = LabelColumn::new("target", Vec::new());
        let config = ComplexityConfig {
            aggregator: "median".to_string(),
            ..Default::default()
        };

        let err = ComplexityProfile::compute(&features, &labels, &config).unwrap_err();
        assert!(matches!(err, ComplexityError::UnknownAggregator(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_to_json() {
        let (features, labels) = three_class_data();
        let profile = ComplexityProfile::compute(&features, &labels, &ComplexityConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&profile.to_json().unwrap()).unwrap();

        assert_eq!(json["n_classes"], 3);
        assert_eq!(json["overlap"]["aggregator"], "mean");
        assert_eq!(json["overlap"]["pairs"][0]["first"], "setosa");
        assert_eq!(json["fisher"]["feature_names"][1], "width");
    }
}
