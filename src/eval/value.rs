//! Business-value estimation from a confusion matrix
//!
//! Assigns a currency value to each prediction outcome and sums over the
//! matrix. The default table models a churn-prevention campaign: a missed
//! churner costs the full customer value, an intervention costs a discount,
//! a correctly targeted churner retains the customer minus the discount.

use serde::{Deserialize, Serialize};

use super::BinaryConfusionMatrix;

/// Per-outcome unit values (currency units, may be negative).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostTable {
    /// Value of a true negative (correctly left alone)
    pub tn: f64,
    /// Value of a false positive (needless intervention)
    pub fp: f64,
    /// Value of a false negative (missed churner)
    pub fn_: f64,
    /// Value of a true positive (churner retained)
    pub tp: f64,
}

impl CostTable {
    /// Sample churn-campaign configuration.
    ///
    /// Derived from a customer lifetime value of 2000 and a retention
    /// discount of 500: tn=0, fp=-500, fn=2000, tp=1500.
    #[must_use]
    pub fn churn_default() -> Self {
        let cost_of_churn = 2000.0;
        let cost_of_discount = 500.0;
        Self {
            tn: 0.0,
            fp: -cost_of_discount,
            fn_: cost_of_churn,
            tp: cost_of_churn - cost_of_discount,
        }
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::churn_default()
    }
}

/// Sum per-cell unit values over the confusion matrix into a single
/// dollar figure.
///
/// # Example
///
/// ```
/// use ascender::eval::{business_value, BinaryConfusionMatrix, CostTable};
///
/// let cm = BinaryConfusionMatrix::from_counts(10, 2, 1, 7);
/// let value = business_value(&cm, &CostTable::churn_default());
/// assert_eq!(value, 11500.0);
/// ```
pub fn business_value(cm: &BinaryConfusionMatrix, costs: &CostTable) -> f64 {
    cm.tn() as f64 * costs.tn
        + cm.fp() as f64 * costs.fp
        + cm.fn_() as f64 * costs.fn_
        + cm.tp() as f64 * costs.tp
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_churn_default_table() {
        let t = CostTable::churn_default();
        assert_relative_eq!(t.tn, 0.0);
        assert_relative_eq!(t.fp, -500.0);
        assert_relative_eq!(t.fn_, 2000.0);
        assert_relative_eq!(t.tp, 1500.0);
    }

    #[test]
    fn test_reference_value() {
        // 10*0 + 2*(-500) + 1*2000 + 7*1500 = 11500
        let cm = BinaryConfusionMatrix::from_counts(10, 2, 1, 7);
        assert_relative_eq!(business_value(&cm, &CostTable::churn_default()), 11500.0);
    }

    #[test]
    fn test_empty_matrix_is_zero() {
        let cm = BinaryConfusionMatrix::from_counts(0, 0, 0, 0);
        assert_relative_eq!(business_value(&cm, &CostTable::churn_default()), 0.0);
    }

    #[test]
    fn test_custom_table() {
        let cm = BinaryConfusionMatrix::from_counts(1, 1, 1, 1);
        let costs = CostTable { tn: 1.0, fp: 2.0, fn_: 3.0, tp: 4.0 };
        assert_relative_eq!(business_value(&cm, &costs), 10.0);
    }

    #[test]
    fn test_table_serde_roundtrip() {
        let t = CostTable::churn_default();
        let json = serde_json::to_string(&t).unwrap();
        let back: CostTable = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
