//! Core traits for transform steps.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; has configuration and can learn from data.
//! - [`FittedTransformer`]: After fitting; ready to be applied and serialized.

use crate::error::PrepError;
use crate::frame::Frame;
use crate::serialization::SerializableParams;

/// Trait for unfitted transform steps.
///
/// A transformer learns parameters from a reference frame (the training set)
/// and can then transform any frame using those learned parameters. This trait
/// represents the configurable, unfitted state; fitting never mutates the
/// transformer itself.
pub trait Transformer: Clone {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;
    /// The corresponding fitted step type.
    type Fitted: FittedTransformer<Params = Self::Params>;

    /// Fit the step to the reference frame.
    ///
    /// # Errors
    /// Returns [`PrepError`] if the frame is empty or a target column is absent.
    fn fit(&self, frame: &Frame) -> Result<Self::Fitted, PrepError>;

    /// Fit the step and transform the reference frame in one call.
    fn fit_transform(&self, frame: &Frame) -> Result<Frame, PrepError> {
        let fitted = self.fit(frame)?;
        fitted.transform(frame)
    }
}

/// Trait for fitted transform steps.
///
/// A fitted step holds parameters learned at fit time and applies them to
/// any frame without re-learning: applying a step to a test frame uses only
/// statistics of the training frame it was fitted on.
pub trait FittedTransformer: Clone {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform a frame using the learned parameters.
    ///
    /// Never drops or reorders rows; untargeted columns pass through
    /// unchanged and new columns are appended at the end.
    ///
    /// # Errors
    /// Returns [`PrepError::ColumnNotFound`] if a target column is absent.
    fn transform(&self, frame: &Frame) -> Result<Frame, PrepError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted step from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PrepError>
    where
        Self: Sized;

    /// Save the fitted step to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let params = self.extract_params();
        let bytes = params.to_bytes().map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load a fitted step from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PrepError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PrepError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }

    /// The names of the columns this step targets.
    fn target_columns(&self) -> &[String];
}
