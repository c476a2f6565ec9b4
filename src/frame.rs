//! In-memory tabular data with named numeric columns.
//!
//! A [`Frame`] is the unit of data every transform step consumes and
//! produces: an ordered list of equally sized `f64` columns addressed by
//! name, plus an optional label column for supervised training. Missing
//! cells are represented by the `f64::NAN` sentinel.
//!
//! Transform steps never drop or reorder rows; columns they do not target
//! pass through unchanged and keep their relative order, and any columns a
//! step produces are appended at the end.

use crate::error::PrepError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Returns true if a cell value is the missing sentinel.
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

/// A single named feature column.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cell values, missing cells encoded as NaN.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable access to the cell values. The length is fixed.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|&&v| is_missing(v)).count()
    }
}

/// The label column of a supervised frame: class indices plus class names.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Labels {
    name: String,
    values: Vec<usize>,
    classes: Vec<String>,
}

impl Labels {
    /// Create a label column. `values` are indices into `classes`.
    pub fn new(name: impl Into<String>, values: Vec<usize>, classes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
            classes,
        }
    }

    /// The label column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class index of each row.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// The class names, indexed by label value.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The class name for a label value, if in range.
    pub fn class_name(&self, value: usize) -> Option<&str> {
        self.classes.get(value).map(|s| s.as_str())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A table of named numeric columns with an optional label column.
///
/// All columns have the same number of rows and unique names.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
    labels: Option<Labels>,
    n_rows: usize,
}

impl Frame {
    /// Create a frame from feature columns.
    ///
    /// # Errors
    /// - [`PrepError::EmptyData`] if no columns are given
    /// - [`PrepError::DuplicateColumn`] if two columns share a name
    /// - [`PrepError::LengthMismatch`] if column lengths differ
    pub fn new(columns: Vec<Column>) -> Result<Self, PrepError> {
        let first = columns
            .first()
            .ok_or_else(|| PrepError::EmptyData("a frame requires at least one column".to_string()))?;
        let n_rows = first.len();

        for (i, column) in columns.iter().enumerate() {
            if column.len() != n_rows {
                return Err(PrepError::LengthMismatch {
                    expected: n_rows,
                    got: column.len(),
                });
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(PrepError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self {
            columns,
            labels: None,
            n_rows,
        })
    }

    /// Attach a label column, consuming the frame.
    ///
    /// # Errors
    /// [`PrepError::LengthMismatch`] if the label count differs from the row count.
    pub fn with_labels(mut self, labels: Labels) -> Result<Self, PrepError> {
        if labels.len() != self.n_rows {
            return Err(PrepError::LengthMismatch {
                expected: self.n_rows,
                got: labels.len(),
            });
        }
        self.labels = Some(labels);
        Ok(self)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of feature columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in frame order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// True if a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Look up a column by name.
    ///
    /// # Errors
    /// [`PrepError::ColumnNotFound`] if absent.
    pub fn column(&self, name: &str) -> Result<&Column, PrepError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| PrepError::ColumnNotFound(name.to_string()))
    }

    /// Look up a column by name for mutation.
    ///
    /// # Errors
    /// [`PrepError::ColumnNotFound`] if absent.
    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column, PrepError> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| PrepError::ColumnNotFound(name.to_string()))
    }

    /// All feature columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The label column, if any.
    pub fn labels(&self) -> Option<&Labels> {
        self.labels.as_ref()
    }

    /// Append a column at the end of the frame.
    ///
    /// # Errors
    /// - [`PrepError::DuplicateColumn`] if the name is taken
    /// - [`PrepError::LengthMismatch`] if the length differs from the row count
    pub fn push_column(&mut self, column: Column) -> Result<(), PrepError> {
        if self.has_column(&column.name) {
            return Err(PrepError::DuplicateColumn(column.name.clone()));
        }
        if column.len() != self.n_rows {
            return Err(PrepError::LengthMismatch {
                expected: self.n_rows,
                got: column.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Build a new frame from the given row indices, labels included.
    ///
    /// Indices may repeat or reorder rows; each must be in bounds.
    ///
    /// # Errors
    /// [`PrepError::InvalidParameter`] on an out-of-bounds index.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Frame, PrepError> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.n_rows) {
            return Err(PrepError::InvalidParameter(format!(
                "row index {} out of bounds (frame has {} rows)",
                bad, self.n_rows
            )));
        }

        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: indices.iter().map(|&i| c.values[i]).collect(),
            })
            .collect();

        let labels = self.labels.as_ref().map(|l| Labels {
            name: l.name.clone(),
            values: indices.iter().map(|&i| l.values[i]).collect(),
            classes: l.classes.clone(),
        });

        Ok(Frame {
            columns,
            labels,
            n_rows: indices.len(),
        })
    }

    /// Convert the feature columns into a row-major matrix for an estimator.
    ///
    /// # Errors
    /// [`PrepError::MissingValues`] if any cell is still missing: estimators
    /// require a fully imputed frame.
    pub fn to_matrix(&self) -> Result<Array2<f64>, PrepError> {
        for column in &self.columns {
            if column.missing_count() > 0 {
                return Err(PrepError::MissingValues(format!(
                    "column '{}' still contains missing cells; impute before training",
                    column.name
                )));
            }
        }

        let n_cols = self.columns.len();
        let mut flat = Vec::with_capacity(self.n_rows * n_cols);
        for row in 0..self.n_rows {
            for column in &self.columns {
                flat.push(column.values[row]);
            }
        }

        Array2::from_shape_vec((self.n_rows, n_cols), flat).map_err(|e| {
            PrepError::InvalidParameter(format!("matrix shape error: {}", e))
        })
    }
}
