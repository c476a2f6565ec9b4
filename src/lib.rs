//! Leak-free tabular preprocessing pipelines.
//!
//! The crate covers the preprocessing half of a small classification
//! workflow: a named-column [`Frame`] for numeric data with NaN-encoded
//! missing cells, fit/apply transform steps ([`MissingIndicator`],
//! [`MedianImputer`]), and a [`Pipeline`] that chains those steps in front
//! of a decision tree. Every step learns its parameters once, from the
//! training frame, and replays them unchanged on any later frame.
//!
//! # Example
//! ```
//! use tabprep::{
//!     Column, DecisionTreeClassifier, Frame, Labels, MedianImputer, MissingIndicator, Pipeline,
//! };
//!
//! let train = Frame::new(vec![
//!     Column::new("x", vec![1.0, f64::NAN, 5.0, 5.2]),
//!     Column::new("y", vec![1.1, 0.9, 5.0, 4.8]),
//! ])
//! .unwrap()
//! .with_labels(Labels::new(
//!     "class",
//!     vec![0, 0, 1, 1],
//!     vec!["low".to_string(), "high".to_string()],
//! ))
//! .unwrap();
//!
//! let mut pipeline = Pipeline::new(DecisionTreeClassifier::new())
//!     .add_missing_indicator(MissingIndicator::new(["x"]))
//!     .add_median_imputer(MedianImputer::new(["x"]));
//!
//! pipeline.fit(&train).unwrap();
//! let predictions = pipeline.predict(&train).unwrap();
//! assert_eq!(predictions.len(), 4);
//! ```

pub mod classifier;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod serialization;
pub mod transform;

pub use classifier::{DecisionTreeClassifier, FittedDecisionTree};
pub use dataset::{load_iris, train_test_split, IRIS_CLASSES, IRIS_FEATURES};
pub use error::PrepError;
pub use frame::{is_missing, Column, Frame, Labels};
pub use metrics::{accuracy, classification_report, ClassMetrics, ClassificationReport};
pub use serialization::SerializableParams;
pub use transform::{
    FittedMedianImputer, FittedMissingIndicator, FittedTransformer, MedianImputer,
    MissingIndicator, Pipeline, Transformer,
};
