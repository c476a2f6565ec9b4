//! Classification metrics and a printable per-class report.
//!
//! [`classification_report`] computes precision, recall and F1 per class plus
//! overall accuracy and macro averages. Counts where a denominator is zero
//! (a class never predicted, or absent from the truth) score 0.0 rather than
//! failing, matching the usual reporting convention.

use crate::error::PrepError;
use std::fmt;

/// Precision, recall and F1 for one class.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassMetrics {
    /// Class name.
    pub label: String,
    /// tp / (tp + fp), or 0.0 when the class was never predicted.
    pub precision: f64,
    /// tp / (tp + fn), or 0.0 when the class has no true rows.
    pub recall: f64,
    /// Harmonic mean of precision and recall, or 0.0 when both are zero.
    pub f1: f64,
    /// Number of true rows of this class.
    pub support: usize,
}

/// A full per-class classification report.
#[derive(Clone, Debug)]
pub struct ClassificationReport {
    /// One metrics row per class, in class-index order.
    pub classes: Vec<ClassMetrics>,
    /// Fraction of rows predicted correctly.
    pub accuracy: f64,
    /// Unweighted mean of the per-class precisions.
    pub macro_precision: f64,
    /// Unweighted mean of the per-class recalls.
    pub macro_recall: f64,
    /// Unweighted mean of the per-class F1 scores.
    pub macro_f1: f64,
    /// Total number of rows.
    pub total_support: usize,
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .classes
            .iter()
            .map(|c| c.label.len())
            .max()
            .unwrap_or(0)
            .max("macro avg".len());

        writeln!(
            f,
            "{:>name_width$}  {:>9}  {:>9}  {:>9}  {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for class in &self.classes {
            writeln!(
                f,
                "{:>name_width$}  {:>9.3}  {:>9.3}  {:>9.3}  {:>9}",
                class.label, class.precision, class.recall, class.f1, class.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>name_width$}  {:>9}  {:>9}  {:>9.3}  {:>9}",
            "accuracy", "", "", self.accuracy, self.total_support
        )?;
        writeln!(
            f,
            "{:>name_width$}  {:>9.3}  {:>9.3}  {:>9.3}  {:>9}",
            "macro avg", self.macro_precision, self.macro_recall, self.macro_f1, self.total_support
        )
    }
}

/// Fraction of predictions matching the truth.
///
/// # Errors
/// - [`PrepError::LengthMismatch`] if the slices differ in length
/// - [`PrepError::EmptyData`] on empty input
pub fn accuracy(y_true: &[usize], y_pred: &[usize]) -> Result<f64, PrepError> {
    if y_true.len() != y_pred.len() {
        return Err(PrepError::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(PrepError::EmptyData(
            "accuracy requires at least one row".to_string(),
        ));
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Build a per-class report from true and predicted labels.
///
/// `class_names` maps label values to names; every label in either slice must
/// index into it.
///
/// # Errors
/// - [`PrepError::LengthMismatch`] if the slices differ in length
/// - [`PrepError::EmptyData`] on empty input or no class names
/// - [`PrepError::InvalidParameter`] on a label outside `class_names`
pub fn classification_report(
    y_true: &[usize],
    y_pred: &[usize],
    class_names: &[String],
) -> Result<ClassificationReport, PrepError> {
    if y_true.len() != y_pred.len() {
        return Err(PrepError::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(PrepError::EmptyData(
            "classification report requires at least one row".to_string(),
        ));
    }
    if class_names.is_empty() {
        return Err(PrepError::EmptyData(
            "classification report requires at least one class name".to_string(),
        ));
    }

    let n_classes = class_names.len();
    if let Some(&bad) = y_true.iter().chain(y_pred.iter()).find(|&&v| v >= n_classes) {
        return Err(PrepError::InvalidParameter(format!(
            "label {} out of range for {} classes",
            bad, n_classes
        )));
    }

    let mut tp = vec![0usize; n_classes];
    let mut fp = vec![0usize; n_classes];
    let mut fn_ = vec![0usize; n_classes];
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        if t == p {
            tp[t] += 1;
        } else {
            fp[p] += 1;
            fn_[t] += 1;
        }
    }

    let ratio = |num: usize, den: usize| if den == 0 { 0.0 } else { num as f64 / den as f64 };

    let classes: Vec<ClassMetrics> = (0..n_classes)
        .map(|c| {
            let precision = ratio(tp[c], tp[c] + fp[c]);
            let recall = ratio(tp[c], tp[c] + fn_[c]);
            let f1 = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };
            ClassMetrics {
                label: class_names[c].clone(),
                precision,
                recall,
                f1,
                support: tp[c] + fn_[c],
            }
        })
        .collect();

    let n = n_classes as f64;
    Ok(ClassificationReport {
        accuracy: accuracy(y_true, y_pred)?,
        macro_precision: classes.iter().map(|c| c.precision).sum::<f64>() / n,
        macro_recall: classes.iter().map(|c| c.recall).sum::<f64>() / n,
        macro_f1: classes.iter().map(|c| c.f1).sum::<f64>() / n,
        total_support: y_true.len(),
        classes,
    })
}
