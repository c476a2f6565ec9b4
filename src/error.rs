//! Error types for frame and preprocessing operations.

use std::fmt;

/// Error type for frame construction, transform steps, and pipeline operations.
#[derive(Debug)]
pub enum PrepError {
    /// A column was requested by name but does not exist in the frame.
    ColumnNotFound(String),
    /// Adding a column whose name is already taken.
    DuplicateColumn(String),
    /// Two row-aligned sequences have different lengths.
    LengthMismatch { expected: usize, got: usize },
    /// Feature dimension mismatch between fit and transform/predict data.
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Empty data provided where non-empty was required.
    EmptyData(String),
    /// Data contains missing values (NaN) where none are allowed.
    MissingValues(String),
    /// A statistic could not be computed (e.g., median of a wholly missing column).
    UndefinedStatistic(String),
    /// A pipeline was asked to transform or predict before being fitted.
    NotFitted,
    /// A pipeline was fitted on a frame without a label column.
    MissingLabels,
    /// Invalid parameter or configuration value.
    InvalidParameter(String),
    /// The terminal estimator failed to train.
    Training(String),
    /// Serialization or deserialization error.
    SerializationError(String),
    /// I/O error during file operations.
    IoError(String),
}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepError::ColumnNotFound(name) => {
                write!(f, "Column not found: {}", name)
            }
            PrepError::DuplicateColumn(name) => {
                write!(f, "Duplicate column name: {}", name)
            }
            PrepError::LengthMismatch { expected, got } => {
                write!(f, "Length mismatch: expected {}, got {}", expected, got)
            }
            PrepError::FeatureMismatch {
                expected_features,
                got_features,
            } => {
                write!(
                    f,
                    "Feature mismatch: expected {} features, got {}",
                    expected_features, got_features
                )
            }
            PrepError::EmptyData(msg) => {
                write!(f, "Empty data: {}", msg)
            }
            PrepError::MissingValues(msg) => {
                write!(f, "Missing values: {}", msg)
            }
            PrepError::UndefinedStatistic(column) => {
                write!(
                    f,
                    "Undefined statistic: column '{}' has no non-missing values",
                    column
                )
            }
            PrepError::NotFitted => {
                write!(f, "Pipeline is not fitted: call fit before transform or predict")
            }
            PrepError::MissingLabels => {
                write!(f, "Missing labels: fitting requires a frame with a label column")
            }
            PrepError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            PrepError::Training(msg) => {
                write!(f, "Training error: {}", msg)
            }
            PrepError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            PrepError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PrepError {}

impl From<std::io::Error> for PrepError {
    fn from(err: std::io::Error) -> Self {
        PrepError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for PrepError {
    fn from(err: bincode::Error) -> Self {
        PrepError::SerializationError(err.to_string())
    }
}

impl From<linfa::error::Error> for PrepError {
    fn from(err: linfa::error::Error) -> Self {
        PrepError::Training(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_column_not_found() {
        let err = PrepError::ColumnNotFound("age".to_string());
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_error_display_length_mismatch() {
        let err = PrepError::LengthMismatch {
            expected: 4,
            got: 3,
        };
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn test_error_display_undefined_statistic() {
        let err = PrepError::UndefinedStatistic("fare".to_string());
        assert!(err.to_string().contains("fare"));
    }

    #[test]
    fn test_error_display_not_fitted() {
        let err = PrepError::NotFitted;
        assert!(err.to_string().contains("not fitted"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: PrepError = io_err.into();
        assert!(matches!(err, PrepError::IoError(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: Result<String, bincode::Error> = bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: PrepError = e.into();
            assert!(matches!(err, PrepError::SerializationError(_)));
        }
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PrepError::NotFitted;
        let _: &dyn std::error::Error = &err;
    }
}
