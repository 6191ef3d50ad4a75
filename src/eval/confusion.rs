//! Binary confusion matrix
//!
//! Specialized 2x2 confusion matrix for boolean classification (the
//! positive class is `true`). Cell counts follow the usual convention:
//! rows are ground truth, columns are predictions.

use std::fmt;

/// Binary confusion matrix.
///
/// # Example
///
/// ```
/// use ascender::eval::BinaryConfusionMatrix;
///
/// let y_true = [true, true, false, false, true];
/// let y_pred = [true, false, false, true, true];
/// let cm = BinaryConfusionMatrix::from_labels(&y_true, &y_pred);
///
/// assert_eq!(cm.tp(), 2);
/// assert_eq!(cm.fn_(), 1);
/// assert_eq!(cm.fp(), 1);
/// assert_eq!(cm.tn(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryConfusionMatrix {
    tn: usize,
    fp: usize,
    fn_: usize,
    tp: usize,
}

impl BinaryConfusionMatrix {
    /// Build directly from the four cell counts.
    pub fn from_counts(tn: usize, fp: usize, fn_: usize, tp: usize) -> Self {
        Self { tn, fp, fn_, tp }
    }

    /// Build from ground-truth and predicted labels.
    ///
    /// # Panics
    ///
    /// Panics if the two slices differ in length.
    pub fn from_labels(y_true: &[bool], y_pred: &[bool]) -> Self {
        assert_eq!(y_true.len(), y_pred.len(), "labels and predictions must have same length");

        let mut cm = Self::from_counts(0, 0, 0, 0);
        for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
            match (truth, pred) {
                (false, false) => cm.tn += 1,
                (false, true) => cm.fp += 1,
                (true, false) => cm.fn_ += 1,
                (true, true) => cm.tp += 1,
            }
        }
        cm
    }

    /// True negatives: predicted negative, was negative.
    pub fn tn(&self) -> usize {
        self.tn
    }

    /// False positives: predicted positive, was negative.
    pub fn fp(&self) -> usize {
        self.fp
    }

    /// False negatives: predicted negative, was positive.
    pub fn fn_(&self) -> usize {
        self.fn_
    }

    /// True positives: predicted positive, was positive.
    pub fn tp(&self) -> usize {
        self.tp
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }

    /// Fraction of correct predictions.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.tn + self.tp) as f64 / total as f64
    }

    /// Precision for the positive class.
    pub fn precision(&self) -> f64 {
        let denom = self.tp + self.fp;
        if denom == 0 {
            return 0.0;
        }
        self.tp as f64 / denom as f64
    }

    /// Recall for the positive class.
    pub fn recall(&self) -> f64 {
        let denom = self.tp + self.fn_;
        if denom == 0 {
            return 0.0;
        }
        self.tp as f64 / denom as f64
    }

    /// F1 score for the positive class.
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }
}

impl fmt::Display for BinaryConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;
        writeln!(f, "            Pred neg  Pred pos")?;
        writeln!(f, "True neg  {:>10} {:>9}", self.tn, self.fp)?;
        writeln!(f, "True pos  {:>10} {:>9}", self.fn_, self.tp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_labels_cells() {
        let y_true = [false, false, true, true, false, true];
        let y_pred = [false, true, true, false, false, true];
        let cm = BinaryConfusionMatrix::from_labels(&y_true, &y_pred);

        assert_eq!(cm.tn(), 2);
        assert_eq!(cm.fp(), 1);
        assert_eq!(cm.fn_(), 1);
        assert_eq!(cm.tp(), 2);
        assert_eq!(cm.total(), 6);
    }

    #[test]
    fn test_perfect_predictions() {
        let y = [true, false, true, false];
        let cm = BinaryConfusionMatrix::from_labels(&y, &y);
        assert_eq!(cm.fp(), 0);
        assert_eq!(cm.fn_(), 0);
        assert_relative_eq!(cm.accuracy(), 1.0);
        assert_relative_eq!(cm.f1(), 1.0);
    }

    #[test]
    fn test_empty_input() {
        let cm = BinaryConfusionMatrix::from_labels(&[], &[]);
        assert_eq!(cm.total(), 0);
        assert_relative_eq!(cm.accuracy(), 0.0);
        assert_relative_eq!(cm.f1(), 0.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        BinaryConfusionMatrix::from_labels(&[true], &[true, false]);
    }

    #[test]
    fn test_precision_recall_f1() {
        // TP=3, FP=2, FN=1, TN=2
        let cm = BinaryConfusionMatrix::from_counts(2, 2, 1, 3);
        assert_relative_eq!(cm.precision(), 0.6);
        assert_relative_eq!(cm.recall(), 0.75);
        // F1 = 2 * 0.6 * 0.75 / 1.35 = 0.6667
        assert_relative_eq!(cm.f1(), 2.0 * 0.6 * 0.75 / 1.35);
    }

    #[test]
    fn test_display() {
        let cm = BinaryConfusionMatrix::from_counts(10, 2, 1, 7);
        let shown = format!("{cm}");
        assert!(shown.contains("Confusion Matrix"));
        assert!(shown.contains("10"));
        assert!(shown.contains("7"));
    }
}
