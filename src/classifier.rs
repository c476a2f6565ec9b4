//! Decision-tree classifier wrapper.
//!
//! The terminal estimator of a pipeline. Tree construction itself (split
//! criterion, stopping rules) is delegated to `linfa-trees`; this module only
//! adapts it to the crate's frame/matrix boundary and error type.

use crate::error::PrepError;
use linfa::prelude::*;
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2};

/// Decision-tree classifier (untrained).
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier {
    max_depth: Option<usize>,
    split_quality: SplitQuality,
}

impl Default for DecisionTreeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTreeClassifier {
    /// Create a classifier with no depth limit and Gini split quality.
    pub fn new() -> Self {
        Self {
            max_depth: None,
            split_quality: SplitQuality::Gini,
        }
    }

    /// Limit the tree depth, or `None` for unlimited.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Choose the split quality measure (Gini or entropy).
    pub fn with_split_quality(mut self, split_quality: SplitQuality) -> Self {
        self.split_quality = split_quality;
        self
    }

    /// Train a tree on a feature matrix and aligned class labels.
    ///
    /// # Errors
    /// - [`PrepError::EmptyData`] on an empty matrix
    /// - [`PrepError::LengthMismatch`] if labels and rows disagree
    /// - [`PrepError::Training`] if tree construction fails
    pub fn fit(
        &self,
        records: Array2<f64>,
        targets: &[usize],
    ) -> Result<FittedDecisionTree, PrepError> {
        if records.nrows() == 0 {
            return Err(PrepError::EmptyData(
                "cannot train a decision tree on an empty matrix".to_string(),
            ));
        }
        if targets.len() != records.nrows() {
            return Err(PrepError::LengthMismatch {
                expected: records.nrows(),
                got: targets.len(),
            });
        }

        let n_features = records.ncols();
        let dataset = linfa::Dataset::new(records, Array1::from(targets.to_vec()));
        let model = DecisionTree::params()
            .split_quality(self.split_quality)
            .max_depth(self.max_depth)
            .fit(&dataset)?;

        Ok(FittedDecisionTree { model, n_features })
    }
}

/// Trained decision tree ready for prediction.
#[derive(Clone, Debug)]
pub struct FittedDecisionTree {
    model: DecisionTree<f64, usize>,
    n_features: usize,
}

impl FittedDecisionTree {
    /// Number of features seen during training.
    pub fn n_features_in(&self) -> usize {
        self.n_features
    }

    /// Predict a class label per row.
    ///
    /// # Errors
    /// [`PrepError::FeatureMismatch`] if the column count differs from training.
    pub fn predict(&self, records: &Array2<f64>) -> Result<Vec<usize>, PrepError> {
        if records.ncols() != self.n_features {
            return Err(PrepError::FeatureMismatch {
                expected_features: self.n_features,
                got_features: records.ncols(),
            });
        }
        Ok(self.model.predict(records).to_vec())
    }
}
