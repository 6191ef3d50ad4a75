//! Evaluation primitives for challenger/champion comparison
//!
//! - [`confusion`]: binary confusion matrix (tn/fp/fn/tp) with the usual
//!   derived metrics
//! - [`value`]: dollar-value estimation from a confusion matrix and a
//!   per-outcome cost table

pub mod confusion;
pub mod value;

pub use confusion::BinaryConfusionMatrix;
pub use value::{business_value, CostTable};
