//! Labeled validation data
//!
//! A small tabular container for held-out labeled rows used by the
//! business-value simulation. Rows carry numeric features, a boolean
//! ground-truth label, and a split name; the simulation operates on the
//! `"validate"` split.


use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One labeled example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// Numeric feature values by column name
    #[serde(default)]
    pub features: std::collections::HashMap<String, f64>,
    /// Ground-truth label (positive class = `true`)
    pub label: bool,
    /// Dataset split this row belongs to ("train", "validate", ...)
    pub split: String,
}

/// A table of labeled examples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationFrame {
    /// All rows, across splits
    pub rows: Vec<Example>,
}

/// Errors from dataset loading.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidationFrame {
    /// Create a frame from rows.
    #[must_use]
    pub fn new(rows: Vec<Example>) -> Self {
        Self { rows }
    }

    /// Load a frame from a JSON file (array of examples or a frame object).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let json = fs::read_to_string(path)?;
        // Accept either the full frame object or a bare row array
        if let Ok(frame) = serde_json::from_str::<ValidationFrame>(&json) {
            return Ok(frame);
        }
        let rows: Vec<Example> = serde_json::from_str(&json)?;
        Ok(Self::new(rows))
    }

    /// Rows belonging to the named split.
    #[must_use]
    pub fn filter_split(&self, split: &str) -> Self {
        Self { rows: self.rows.iter().filter(|r| r.split == split).cloned().collect() }
    }

    /// Ground-truth labels in row order.
    #[must_use]
    pub fn labels(&self) -> Vec<bool> {
        self.rows.iter().map(|r| r.label).collect()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
