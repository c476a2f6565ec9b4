//! Bundled sample data and train/test splitting.
//!
//! The iris dataset here is a teaching prop: 150 rows, four numeric
//! measurements, three species. [`load_iris`] converts the bundled copy into
//! a labelled [`Frame`]; [`train_test_split`] produces a seeded shuffled
//! split so the class-ordered rows do not end up partitioned by class.

use crate::error::PrepError;
use crate::frame::{Column, Frame, Labels};
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Iris feature column names, in dataset order.
pub const IRIS_FEATURES: [&str; 4] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];

/// Iris class names, indexed by label value.
pub const IRIS_CLASSES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Load the bundled iris dataset as a labelled frame.
pub fn load_iris() -> Result<Frame, PrepError> {
    let dataset = linfa_datasets::iris();
    let records = dataset.records();
    let targets = dataset.targets();

    let columns = IRIS_FEATURES
        .iter()
        .enumerate()
        .map(|(j, name)| Column::new(*name, records.column(j).to_vec()))
        .collect();

    Frame::new(columns)?.with_labels(Labels::new(
        "species",
        targets.to_vec(),
        IRIS_CLASSES.iter().map(|s| s.to_string()).collect(),
    ))
}

/// Split a frame into `(train, test)` by a seeded shuffle.
///
/// `test_ratio` is the fraction of rows assigned to the test frame; both
/// halves are guaranteed non-empty. The same seed always produces the same
/// split.
///
/// # Errors
/// - [`PrepError::InvalidParameter`] if `test_ratio` is not in (0, 1)
/// - [`PrepError::EmptyData`] if the frame has fewer than two rows
pub fn train_test_split(
    frame: &Frame,
    test_ratio: f64,
    seed: u64,
) -> Result<(Frame, Frame), PrepError> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(PrepError::InvalidParameter(format!(
            "test_ratio must be in (0, 1), got {}",
            test_ratio
        )));
    }
    let n = frame.n_rows();
    if n < 2 {
        return Err(PrepError::EmptyData(
            "splitting requires at least two rows".to_string(),
        ));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n as f64) * test_ratio).round() as usize;
    let n_test = n_test.clamp(1, n - 1);
    let (test_idx, train_idx) = indices.split_at(n_test);

    Ok((frame.select_rows(train_idx)?, frame.select_rows(test_idx)?))
}
