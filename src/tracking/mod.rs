//! Training-run metric lookup
//!
//! Registered model versions reference the training run that produced them.
//! The [`RunStore`] trait resolves a run ID to its recorded metrics (e.g.
//! `test_f1_score` logged at training time), giving traceability from a
//! deployed model back to its training run.
//!
//! # Example
//!
//! ```
//! use ascender::tracking::{InMemoryRunStore, RunStore, TrainingRun};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = InMemoryRunStore::new();
//! let mut run = TrainingRun::new("run-1");
//! run.metrics.insert("test_f1_score".into(), 0.87);
//! store.record_run(run)?;
//!
//! let f1 = store.get_metric("run-1", "test_f1_score")?;
//! assert_eq!(f1, 0.87);
//! # Ok(())
//! # }
//! ```


use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A completed training run with its logged metrics and parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRun {
    /// Unique run identifier
    pub run_id: String,
    /// Final metric values: name -> value
    pub metrics: HashMap<String, f64>,
    /// Hyperparameters: key -> value (string-encoded)
    pub params: HashMap<String, String>,
}

impl TrainingRun {
    /// Create an empty run record with the given ID.
    pub fn new(run_id: impl Into<String>) -> Self {
        Self { run_id: run_id.into(), metrics: HashMap::new(), params: HashMap::new() }
    }
}

/// Errors from run store operations.
#[derive(Debug, Error)]
pub enum RunStoreError {
    #[error("run not found: {0}")]
    RunNotFound(String),

    #[error("run {run_id} has no metric '{metric}'")]
    MetricNotFound { run_id: String, metric: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for run store operations.
pub type Result<T> = std::result::Result<T, RunStoreError>;

/// Trait for run store backends.
pub trait RunStore {
    /// Persist a run record. Overwrites any existing record with the same ID.
    fn record_run(&mut self, run: TrainingRun) -> Result<()>;

    /// Load a run by its ID.
    fn get_run(&self, run_id: &str) -> Result<TrainingRun>;

    /// Fetch a single metric value from a run.
    fn get_metric(&self, run_id: &str, metric: &str) -> Result<f64> {
        let run = self.get_run(run_id)?;
        run.metrics.get(metric).copied().ok_or_else(|| RunStoreError::MetricNotFound {
            run_id: run_id.to_string(),
            metric: metric.to_string(),
        })
    }
}

/// In-memory run store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct InMemoryRunStore {
    runs: HashMap<String, TrainingRun>,
}

impl InMemoryRunStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunStore for InMemoryRunStore {
    fn record_run(&mut self, run: TrainingRun) -> Result<()> {
        self.runs.insert(run.run_id.clone(), run);
        Ok(())
    }

    fn get_run(&self, run_id: &str) -> Result<TrainingRun> {
        self.runs
            .get(run_id)
            .cloned()
            .ok_or_else(|| RunStoreError::RunNotFound(run_id.to_string()))
    }
}

/// JSON file-based run store.
///
/// Stores each run as `{run_id}.json` in a directory.
#[derive(Debug)]
pub struct JsonFileRunStore {
    dir: PathBuf,
}

impl JsonFileRunStore {
    /// Create a new JSON file run store, creating the directory lazily.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    fn run_path(&self, run_id: &str) -> PathBuf {
        self.dir.join(format!("{run_id}.json"))
    }
}

impl RunStore for JsonFileRunStore {
    fn record_run(&mut self, run: TrainingRun) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let json = serde_json::to_string_pretty(&run)?;
        fs::write(self.run_path(&run.run_id), json)?;
        Ok(())
    }

    fn get_run(&self, run_id: &str) -> Result<TrainingRun> {
        let path = self.run_path(run_id);
        if !path.exists() {
            return Err(RunStoreError::RunNotFound(run_id.to_string()));
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
