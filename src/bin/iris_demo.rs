//! End-to-end demo: iris with injected missing values.
//!
//! Loads the bundled iris dataset, knocks out a fraction of the petal
//! measurements, splits into train and test, fits a preprocessing pipeline
//! with a decision tree and prints a per-class report for the held-out rows.
//!
//! Run with `cargo run --bin iris_demo`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabprep::{
    classification_report, load_iris, train_test_split, DecisionTreeClassifier, Frame,
    MedianImputer, MissingIndicator, Pipeline, PrepError,
};

const MISSING_COLUMNS: [&str; 2] = ["petal_length", "petal_width"];
const MISSING_RATE: f64 = 0.2;

/// Replace roughly `rate` of the cells in the given columns with NaN.
fn inject_missing(frame: &mut Frame, columns: &[&str], rate: f64, seed: u64) -> Result<(), PrepError> {
    let mut rng = StdRng::seed_from_u64(seed);
    for name in columns {
        for value in frame.column_mut(name)?.values_mut() {
            if rng.gen_bool(rate) {
                *value = f64::NAN;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), PrepError> {
    println!("=== Iris with missing values ===\n");

    let mut frame = load_iris()?;
    inject_missing(&mut frame, &MISSING_COLUMNS, MISSING_RATE, 7)?;
    for name in MISSING_COLUMNS {
        println!(
            "{}: {} of {} cells missing",
            name,
            frame.column(name)?.missing_count(),
            frame.n_rows()
        );
    }

    let (train, test) = train_test_split(&frame, 0.3, 42)?;
    println!("\ntrain rows: {}, test rows: {}", train.n_rows(), test.n_rows());

    let mut pipeline = Pipeline::new(DecisionTreeClassifier::new().with_max_depth(Some(5)))
        .add_missing_indicator(MissingIndicator::new(MISSING_COLUMNS))
        .add_median_imputer(MedianImputer::new(MISSING_COLUMNS));
    pipeline.fit(&train)?;
    println!("fitted steps: {:?}", pipeline.step_names());

    let predictions = pipeline.predict(&test)?;
    let labels = test.labels().ok_or(PrepError::MissingLabels)?;
    let report = classification_report(labels.values(), &predictions, labels.classes())?;

    println!("\n{}", report);
    Ok(())
}
