//! Median imputation step.
//!
//! Fitting computes, per target column, the median of its non-missing values
//! in the reference frame and stores that scalar. Applying replaces every
//! missing cell of a target column with its stored median; all other columns
//! pass through unchanged. The statistics are fixed after the fit call, so
//! transforming a test frame leaks none of its own values.
//!
//! A target column with no non-missing values in the reference frame has no
//! median. By default fitting then fails with
//! [`PrepError::UndefinedStatistic`]; callers that want a fill value instead
//! opt in through [`MedianImputer::with_fallback`].

use crate::error::PrepError;
use crate::frame::{is_missing, Frame};
use crate::transform::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted MedianImputer.
#[derive(Clone, Serialize, Deserialize)]
pub struct MedianImputerParams {
    /// Target column names, in registration order.
    pub columns: Vec<String>,
    /// Fill value (the learned median) for each target column.
    pub statistics_: Vec<f64>,
}

/// Median imputer (unfitted).
#[derive(Clone, Debug)]
pub struct MedianImputer {
    columns: Vec<String>,
    fallback: Option<f64>,
}

impl MedianImputer {
    /// Create a median imputer for the given target columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            fallback: None,
        }
    }

    /// Use `value` as the fill statistic for any target column that is
    /// entirely missing in the reference frame, instead of failing the fit.
    pub fn with_fallback(mut self, value: f64) -> Self {
        self.fallback = Some(value);
        self
    }
}

/// Median of the non-missing values of a column slice, if any exist.
fn column_median(values: &[f64]) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().copied().filter(|&v| !is_missing(v)).collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = present.len();
    Some(if n % 2 == 0 {
        (present[n / 2 - 1] + present[n / 2]) / 2.0
    } else {
        present[n / 2]
    })
}

impl Transformer for MedianImputer {
    type Params = MedianImputerParams;
    type Fitted = FittedMedianImputer;

    fn fit(&self, frame: &Frame) -> Result<Self::Fitted, PrepError> {
        if self.columns.is_empty() {
            return Err(PrepError::InvalidParameter(
                "MedianImputer requires at least one target column".to_string(),
            ));
        }
        if frame.n_rows() == 0 {
            return Err(PrepError::EmptyData(
                "cannot fit MedianImputer on an empty frame".to_string(),
            ));
        }

        let mut statistics_ = Vec::with_capacity(self.columns.len());
        for name in &self.columns {
            let column = frame.column(name)?;
            let statistic = match column_median(column.values()) {
                Some(median) => median,
                None => self
                    .fallback
                    .ok_or_else(|| PrepError::UndefinedStatistic(name.clone()))?,
            };
            statistics_.push(statistic);
        }

        Ok(FittedMedianImputer {
            columns: self.columns.clone(),
            statistics_,
        })
    }
}

/// Fitted median imputer holding one fill value per target column.
#[derive(Clone, Debug)]
pub struct FittedMedianImputer {
    columns: Vec<String>,
    statistics_: Vec<f64>,
}

impl FittedMedianImputer {
    /// The learned fill values, aligned with [`FittedTransformer::target_columns`].
    pub fn statistics(&self) -> &[f64] {
        &self.statistics_
    }

    /// The learned fill value for a target column, if it is one.
    pub fn statistic_for(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.statistics_[i])
    }
}

impl FittedTransformer for FittedMedianImputer {
    type Params = MedianImputerParams;

    fn transform(&self, frame: &Frame) -> Result<Frame, PrepError> {
        let mut out = frame.clone();
        for (name, &statistic) in self.columns.iter().zip(self.statistics_.iter()) {
            let column = out.column_mut(name)?;
            for value in column.values_mut() {
                if is_missing(*value) {
                    *value = statistic;
                }
            }
        }
        Ok(out)
    }

    fn extract_params(&self) -> Self::Params {
        MedianImputerParams {
            columns: self.columns.clone(),
            statistics_: self.statistics_.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PrepError> {
        if params.columns.len() != params.statistics_.len() {
            return Err(PrepError::LengthMismatch {
                expected: params.columns.len(),
                got: params.statistics_.len(),
            });
        }
        Ok(Self {
            columns: params.columns,
            statistics_: params.statistics_,
        })
    }

    fn target_columns(&self) -> &[String] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;

    fn frame_with_gaps() -> Frame {
        Frame::new(vec![
            Column::new("age", vec![1.0, 2.0, f64::NAN, 4.0]),
            Column::new("fare", vec![7.0, f64::NAN, 9.0, 11.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_median_odd_count() {
        // Median of {1, 2, 4} is 2.
        let frame = frame_with_gaps();
        let fitted = MedianImputer::new(["age"]).fit(&frame).unwrap();
        assert_eq!(fitted.statistic_for("age"), Some(2.0));

        let out = fitted.transform(&frame).unwrap();
        assert_eq!(out.column("age").unwrap().values(), &[1.0, 2.0, 2.0, 4.0]);
    }

    #[test]
    fn test_median_even_count() {
        let frame = Frame::new(vec![Column::new(
            "x",
            vec![1.0, 3.0, 5.0, 7.0, f64::NAN],
        )])
        .unwrap();
        let fitted = MedianImputer::new(["x"]).fit(&frame).unwrap();
        // Median of {1, 3, 5, 7} is (3 + 5) / 2.
        assert_eq!(fitted.statistic_for("x"), Some(4.0));
    }

    #[test]
    fn test_non_target_columns_untouched() {
        let frame = frame_with_gaps();
        let fitted = MedianImputer::new(["age"]).fit(&frame).unwrap();
        let out = fitted.transform(&frame).unwrap();

        // "fare" was not a target, so its missing cell survives.
        assert_eq!(out.column("fare").unwrap().missing_count(), 1);
        assert_eq!(out.column_names(), frame.column_names());
        assert_eq!(out.n_rows(), frame.n_rows());
    }

    #[test]
    fn test_no_leakage_from_applied_frame() {
        let train = frame_with_gaps();
        let fitted = MedianImputer::new(["age"]).fit(&train).unwrap();

        // The test frame's own values would give a very different median;
        // the fill must still come from the training frame.
        let test = Frame::new(vec![
            Column::new("age", vec![100.0, f64::NAN, 300.0]),
            Column::new("fare", vec![1.0, 2.0, 3.0]),
        ])
        .unwrap();
        let out = fitted.transform(&test).unwrap();
        assert_eq!(out.column("age").unwrap().values(), &[100.0, 2.0, 300.0]);
    }

    #[test]
    fn test_wholly_missing_column_fails() {
        let frame = Frame::new(vec![Column::new(
            "x",
            vec![f64::NAN, f64::NAN, f64::NAN],
        )])
        .unwrap();
        let result = MedianImputer::new(["x"]).fit(&frame);
        assert!(matches!(result, Err(PrepError::UndefinedStatistic(_))));
    }

    #[test]
    fn test_wholly_missing_column_with_fallback() {
        let frame = Frame::new(vec![Column::new(
            "x",
            vec![f64::NAN, f64::NAN, f64::NAN],
        )])
        .unwrap();
        let fitted = MedianImputer::new(["x"])
            .with_fallback(0.0)
            .fit(&frame)
            .unwrap();
        assert_eq!(fitted.statistic_for("x"), Some(0.0));

        let out = fitted.transform(&frame).unwrap();
        assert_eq!(out.column("x").unwrap().values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_fit_unknown_column() {
        let frame = frame_with_gaps();
        let result = MedianImputer::new(["cabin"]).fit(&frame);
        assert!(matches!(result, Err(PrepError::ColumnNotFound(_))));
    }

    #[test]
    fn test_transform_unknown_column() {
        let frame = frame_with_gaps();
        let fitted = MedianImputer::new(["age"]).fit(&frame).unwrap();

        let other = Frame::new(vec![Column::new("fare", vec![1.0])]).unwrap();
        let result = fitted.transform(&other);
        assert!(matches!(result, Err(PrepError::ColumnNotFound(_))));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let frame = frame_with_gaps();
        let fitted = MedianImputer::new(["age", "fare"]).fit(&frame).unwrap();

        let once = fitted.transform(&frame).unwrap();
        let twice = fitted.transform(&once).unwrap();
        for name in ["age", "fare"] {
            assert_eq!(
                once.column(name).unwrap().values(),
                twice.column(name).unwrap().values()
            );
        }
    }

    #[test]
    fn test_params_roundtrip() {
        let frame = frame_with_gaps();
        let fitted = MedianImputer::new(["age", "fare"]).fit(&frame).unwrap();

        let params = fitted.extract_params();
        let restored = FittedMedianImputer::from_params(params).unwrap();
        assert_eq!(restored.statistics(), fitted.statistics());

        let a = fitted.transform(&frame).unwrap();
        let b = restored.transform(&frame).unwrap();
        assert_eq!(
            a.column("age").unwrap().values(),
            b.column("age").unwrap().values()
        );
    }

    #[test]
    fn test_from_params_rejects_misaligned() {
        let params = MedianImputerParams {
            columns: vec!["a".to_string(), "b".to_string()],
            statistics_: vec![1.0],
        };
        let result = FittedMedianImputer::from_params(params);
        assert!(matches!(result, Err(PrepError::LengthMismatch { .. })));
    }

    #[test]
    fn test_save_load_file() {
        let frame = frame_with_gaps();
        let fitted = MedianImputer::new(["age"]).fit(&frame).unwrap();

        let temp_file = std::env::temp_dir().join("test_median_imputer.bin");
        fitted.save_to_file(&temp_file).unwrap();

        let loaded = FittedMedianImputer::load_from_file(&temp_file).unwrap();
        assert_eq!(loaded.statistics(), fitted.statistics());

        std::fs::remove_file(temp_file).ok();
    }

    #[test]
    fn test_empty_frame_rejected() {
        let frame = Frame::new(vec![Column::new("x", vec![])]).unwrap();
        let result = MedianImputer::new(["x"]).fit(&frame);
        assert!(matches!(result, Err(PrepError::EmptyData(_))));
    }
}
