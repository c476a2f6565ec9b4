//! Missing-value indicator step.
//!
//! Appends, for each target column `C`, a column `C_missing` holding 1.0
//! where the cell of `C` is missing and 0.0 otherwise. The step is stateless:
//! fitting only validates that the targets exist, and the flags are always
//! computed from the frame being transformed.
//!
//! # Example
//! ```ignore
//! use tabprep::{MissingIndicator, Transformer, FittedTransformer};
//!
//! let indicator = MissingIndicator::new(["age"]);
//! let fitted = indicator.fit(&train)?;
//! let flagged = fitted.transform(&test)?; // has an "age_missing" column
//! ```

use crate::error::PrepError;
use crate::frame::{is_missing, Column, Frame};
use crate::transform::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

/// Suffix appended to a target column name to form its flag column name.
pub const FLAG_SUFFIX: &str = "_missing";

/// The flag column name for a target column.
pub fn flag_column_name(column: &str) -> String {
    format!("{}{}", column, FLAG_SUFFIX)
}

/// Serializable parameters for a fitted MissingIndicator.
#[derive(Clone, Serialize, Deserialize)]
pub struct MissingIndicatorParams {
    /// Target column names, in registration order.
    pub columns: Vec<String>,
}

/// Missing-value indicator step (unfitted).
#[derive(Clone, Debug)]
pub struct MissingIndicator {
    columns: Vec<String>,
}

impl MissingIndicator {
    /// Create an indicator for the given target columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl Transformer for MissingIndicator {
    type Params = MissingIndicatorParams;
    type Fitted = FittedMissingIndicator;

    fn fit(&self, frame: &Frame) -> Result<Self::Fitted, PrepError> {
        if self.columns.is_empty() {
            return Err(PrepError::InvalidParameter(
                "MissingIndicator requires at least one target column".to_string(),
            ));
        }
        if frame.n_rows() == 0 {
            return Err(PrepError::EmptyData(
                "cannot fit MissingIndicator on an empty frame".to_string(),
            ));
        }

        // No parameters to learn; fail early on absent targets.
        for name in &self.columns {
            frame.column(name)?;
        }

        Ok(FittedMissingIndicator {
            columns: self.columns.clone(),
        })
    }
}

/// Fitted missing-value indicator.
///
/// Holds only the target column list; flags are recomputed from each frame
/// it is applied to.
#[derive(Clone, Debug)]
pub struct FittedMissingIndicator {
    columns: Vec<String>,
}

impl FittedTransformer for FittedMissingIndicator {
    type Params = MissingIndicatorParams;

    fn transform(&self, frame: &Frame) -> Result<Frame, PrepError> {
        let mut out = frame.clone();
        for name in &self.columns {
            let flags: Vec<f64> = frame
                .column(name)?
                .values()
                .iter()
                .map(|&v| if is_missing(v) { 1.0 } else { 0.0 })
                .collect();
            out.push_column(Column::new(flag_column_name(name), flags))?;
        }
        Ok(out)
    }

    fn extract_params(&self) -> Self::Params {
        MissingIndicatorParams {
            columns: self.columns.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PrepError> {
        if params.columns.is_empty() {
            return Err(PrepError::InvalidParameter(
                "MissingIndicator parameters name no target columns".to_string(),
            ));
        }
        Ok(Self {
            columns: params.columns,
        })
    }

    fn target_columns(&self) -> &[String] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_gaps() -> Frame {
        Frame::new(vec![
            Column::new("age", vec![22.0, f64::NAN, 35.0, f64::NAN]),
            Column::new("fare", vec![7.25, 71.28, 8.05, 53.10]),
        ])
        .unwrap()
    }

    #[test]
    fn test_flags_match_missing_cells() {
        let frame = frame_with_gaps();
        let fitted = MissingIndicator::new(["age"]).fit(&frame).unwrap();
        let out = fitted.transform(&frame).unwrap();

        let flags = out.column("age_missing").unwrap().values();
        assert_eq!(flags, &[0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_input_columns_untouched() {
        let frame = frame_with_gaps();
        let fitted = MissingIndicator::new(["age"]).fit(&frame).unwrap();
        let out = fitted.transform(&frame).unwrap();

        assert_eq!(out.n_rows(), frame.n_rows());
        assert_eq!(out.column_names(), vec!["age", "fare", "age_missing"]);
        assert_eq!(out.column("fare").unwrap().values(), frame.column("fare").unwrap().values());
        // The target itself keeps its missing cells.
        assert_eq!(out.column("age").unwrap().missing_count(), 2);
    }

    #[test]
    fn test_multiple_targets_in_order() {
        let frame = frame_with_gaps();
        let fitted = MissingIndicator::new(["fare", "age"]).fit(&frame).unwrap();
        let out = fitted.transform(&frame).unwrap();

        assert_eq!(
            out.column_names(),
            vec!["age", "fare", "fare_missing", "age_missing"]
        );
        assert_eq!(out.column("fare_missing").unwrap().values(), &[0.0; 4]);
    }

    #[test]
    fn test_fit_unknown_column() {
        let frame = frame_with_gaps();
        let result = MissingIndicator::new(["cabin"]).fit(&frame);
        assert!(matches!(result, Err(PrepError::ColumnNotFound(_))));
    }

    #[test]
    fn test_transform_unknown_column() {
        let frame = frame_with_gaps();
        let fitted = MissingIndicator::new(["age"]).fit(&frame).unwrap();

        let other = Frame::new(vec![Column::new("fare", vec![1.0])]).unwrap();
        let result = fitted.transform(&other);
        assert!(matches!(result, Err(PrepError::ColumnNotFound(_))));
    }

    #[test]
    fn test_flag_name_collision() {
        let frame = Frame::new(vec![
            Column::new("age", vec![1.0, f64::NAN]),
            Column::new("age_missing", vec![0.0, 0.0]),
        ])
        .unwrap();

        let fitted = MissingIndicator::new(["age"]).fit(&frame).unwrap();
        let result = fitted.transform(&frame);
        assert!(matches!(result, Err(PrepError::DuplicateColumn(_))));
    }

    #[test]
    fn test_no_targets_rejected() {
        let frame = frame_with_gaps();
        let result = MissingIndicator::new(Vec::<String>::new()).fit(&frame);
        assert!(matches!(result, Err(PrepError::InvalidParameter(_))));
    }

    #[test]
    fn test_flags_computed_from_applied_frame() {
        // Stateless: flags reflect the frame being transformed, not the
        // reference frame the step was fitted on.
        let train = frame_with_gaps();
        let fitted = MissingIndicator::new(["age"]).fit(&train).unwrap();

        let test = Frame::new(vec![
            Column::new("age", vec![f64::NAN, 40.0]),
            Column::new("fare", vec![9.0, 12.0]),
        ])
        .unwrap();
        let out = fitted.transform(&test).unwrap();
        assert_eq!(out.column("age_missing").unwrap().values(), &[1.0, 0.0]);
    }

    #[test]
    fn test_params_roundtrip() {
        let frame = frame_with_gaps();
        let fitted = MissingIndicator::new(["age", "fare"]).fit(&frame).unwrap();

        let params = fitted.extract_params();
        let restored = FittedMissingIndicator::from_params(params).unwrap();
        assert_eq!(restored.target_columns(), fitted.target_columns());
    }

    #[test]
    fn test_fit_transform_matches_fit_then_transform() {
        let frame = frame_with_gaps();
        let step = MissingIndicator::new(["age"]);

        let direct = step.fit_transform(&frame).unwrap();
        let staged = step.fit(&frame).unwrap().transform(&frame).unwrap();
        assert_eq!(
            direct.column("age_missing").unwrap().values(),
            staged.column("age_missing").unwrap().values()
        );
    }
}
