//! Pipeline composing transform steps with a terminal classifier.
//!
//! A [`Pipeline`] is an ordered sequence of transform steps terminated by a
//! decision tree. Fitting happens once, on the training frame: step N is
//! fitted on the output of steps 1..N-1 applied to that same frame, and the
//! tree is trained on the final feature matrix. Transforming or predicting
//! replays exactly those learned parameters on any frame and never re-fits,
//! so a test frame's own statistics cannot leak into the output.
//!
//! # Example
//! ```ignore
//! use tabprep::{DecisionTreeClassifier, MedianImputer, MissingIndicator, Pipeline};
//!
//! let mut pipeline = Pipeline::new(DecisionTreeClassifier::new())
//!     .add_missing_indicator(MissingIndicator::new(["age"]))
//!     .add_median_imputer(MedianImputer::new(["age"]));
//!
//! pipeline.fit(&train)?;
//! let predictions = pipeline.predict(&test)?;
//! ```

use crate::classifier::{DecisionTreeClassifier, FittedDecisionTree};
use crate::error::PrepError;
use crate::frame::Frame;
use crate::transform::impute::{FittedMedianImputer, MedianImputer};
use crate::transform::missing_flag::{FittedMissingIndicator, MissingIndicator};
use crate::transform::traits::{FittedTransformer, Transformer};

/// An unfitted step registered with a pipeline.
#[derive(Clone)]
pub enum PipelineStep {
    /// Missing-value indicator step.
    MissingIndicator(MissingIndicator),
    /// Median imputation step.
    MedianImputer(MedianImputer),
}

impl PipelineStep {
    fn fit(&self, frame: &Frame) -> Result<FittedPipelineStep, PrepError> {
        match self {
            PipelineStep::MissingIndicator(t) => {
                t.fit(frame).map(FittedPipelineStep::MissingIndicator)
            }
            PipelineStep::MedianImputer(t) => t.fit(frame).map(FittedPipelineStep::MedianImputer),
        }
    }

    /// The step name for debugging.
    pub fn step_name(&self) -> &'static str {
        match self {
            PipelineStep::MissingIndicator(_) => "MissingIndicator",
            PipelineStep::MedianImputer(_) => "MedianImputer",
        }
    }
}

/// A fitted step held by a fitted pipeline.
#[derive(Clone)]
pub enum FittedPipelineStep {
    /// Fitted missing-value indicator.
    MissingIndicator(FittedMissingIndicator),
    /// Fitted median imputer.
    MedianImputer(FittedMedianImputer),
}

impl FittedPipelineStep {
    fn transform(&self, frame: &Frame) -> Result<Frame, PrepError> {
        match self {
            FittedPipelineStep::MissingIndicator(t) => t.transform(frame),
            FittedPipelineStep::MedianImputer(t) => t.transform(frame),
        }
    }

    /// The step name for debugging.
    pub fn step_name(&self) -> &'static str {
        match self {
            FittedPipelineStep::MissingIndicator(_) => "MissingIndicator",
            FittedPipelineStep::MedianImputer(_) => "MedianImputer",
        }
    }
}

#[derive(Clone)]
struct FittedState {
    steps: Vec<FittedPipelineStep>,
    model: FittedDecisionTree,
}

/// Ordered transform steps plus a terminal decision tree.
///
/// The pipeline owns its fitted state: [`Pipeline::fit`] learns every step's
/// parameters in sequence and trains the tree, overwriting whatever a prior
/// fit learned. [`Pipeline::transform`] and [`Pipeline::predict`] fail with
/// [`PrepError::NotFitted`] until a fit has succeeded.
#[derive(Clone)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
    classifier: DecisionTreeClassifier,
    fitted: Option<FittedState>,
}

impl Pipeline {
    /// Create a pipeline with the given terminal classifier and no steps.
    pub fn new(classifier: DecisionTreeClassifier) -> Self {
        Self {
            steps: Vec::new(),
            classifier,
            fitted: None,
        }
    }

    /// Append a missing-value indicator step.
    pub fn add_missing_indicator(mut self, step: MissingIndicator) -> Self {
        self.steps.push(PipelineStep::MissingIndicator(step));
        self
    }

    /// Append a median imputation step.
    pub fn add_median_imputer(mut self, step: MedianImputer) -> Self {
        self.steps.push(PipelineStep::MedianImputer(step));
        self
    }

    /// Number of transform steps (the terminal classifier not counted).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no transform steps are registered.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True once a fit has succeeded.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The registered step names, in order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }

    /// Fit every step in sequence on the training frame, then train the tree.
    ///
    /// Step N is fitted on the output of steps 1..N-1 applied to `frame`.
    /// A second call overwrites all previously learned state.
    ///
    /// # Errors
    /// - [`PrepError::MissingLabels`] if the frame has no label column
    /// - [`PrepError::EmptyData`] on an empty frame
    /// - any step or classifier fit error
    pub fn fit(&mut self, frame: &Frame) -> Result<(), PrepError> {
        let labels = frame.labels().ok_or(PrepError::MissingLabels)?.clone();
        if frame.n_rows() == 0 {
            return Err(PrepError::EmptyData(
                "cannot fit a pipeline on an empty frame".to_string(),
            ));
        }

        let mut fitted_steps = Vec::with_capacity(self.steps.len());
        let mut current = frame.clone();
        for step in &self.steps {
            let fitted = step.fit(&current)?;
            current = fitted.transform(&current)?;
            fitted_steps.push(fitted);
        }

        let records = current.to_matrix()?;
        let model = self.classifier.fit(records, labels.values())?;

        self.fitted = Some(FittedState {
            steps: fitted_steps,
            model,
        });
        Ok(())
    }

    /// Replay the fitted steps on a frame, in order, without re-fitting.
    ///
    /// # Errors
    /// [`PrepError::NotFitted`] if [`Pipeline::fit`] has not succeeded yet.
    pub fn transform(&self, frame: &Frame) -> Result<Frame, PrepError> {
        let state = self.fitted.as_ref().ok_or(PrepError::NotFitted)?;
        let mut current = frame.clone();
        for step in &state.steps {
            current = step.transform(&current)?;
        }
        Ok(current)
    }

    /// Transform a frame and classify each row.
    ///
    /// # Errors
    /// [`PrepError::NotFitted`] if [`Pipeline::fit`] has not succeeded yet;
    /// [`PrepError::MissingValues`] if the transformed frame still has gaps.
    pub fn predict(&self, frame: &Frame) -> Result<Vec<usize>, PrepError> {
        let state = self.fitted.as_ref().ok_or(PrepError::NotFitted)?;
        let transformed = self.transform(frame)?;
        let records = transformed.to_matrix()?;
        state.model.predict(&records)
    }
}
