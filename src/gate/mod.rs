//! Promotion gate
//!
//! The single decision point of the pipeline. After validation has written
//! its tags, the gate reads them back from the registry (post-write, to
//! confirm durability) and either promotes the challenger by atomically
//! moving the `@Champion` alias onto it, or rejects with a fatal error.
//!
//! There is no partial promotion and no retry: a rejected version leaves
//! the current champion alias untouched.
//!
//! States: `Pending` (tags not yet inspected) -> `Promoted` | `Rejected`.


use thiserror::Error;

use crate::checks::{TAG_HAS_DESCRIPTION, TAG_METRIC_F1_PASSED};
use crate::registry::{Alias, ModelRegistry, ModelVersion, RegistryError};

/// Gate state for a challenger version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Validation tags not yet inspected
    Pending,
    /// All required tags read back "True"; champion alias reassigned
    Promoted,
    /// One or more required tags missing or not "True"
    Rejected,
}

impl std::fmt::Display for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GateState::Pending => "Pending",
            GateState::Promoted => "Promoted",
            GateState::Rejected => "Rejected",
        };
        write!(f, "{s}")
    }
}

/// Errors from the promotion gate.
#[derive(Debug, Error)]
pub enum GateError {
    /// Required validation tags are missing or false. The champion alias
    /// is left untouched.
    #[error("model not ready for promotion, failing checks: {}", failing.join(", "))]
    NotReady { failing: Vec<String> },

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Result type for gate operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// The promotion gate.
///
/// `required_tags` lists the tag keys that must all read back as the
/// literal string `"True"` for promotion.
#[derive(Debug, Clone)]
pub struct PromotionGate {
    /// Tag keys that must equal "True"
    pub required_tags: Vec<&'static str>,
}

impl Default for PromotionGate {
    fn default() -> Self {
        Self { required_tags: vec![TAG_HAS_DESCRIPTION, TAG_METRIC_F1_PASSED] }
    }
}

impl PromotionGate {
    /// Tag keys that do not read back as the literal "True".
    fn failing_tags(&self, version: &ModelVersion) -> Vec<String> {
        self.required_tags
            .iter()
            .filter(|&&key| version.tags.get(key).map(String::as_str) != Some("True"))
            .map(|&key| key.to_string())
            .collect()
    }

    /// Decide the gate state from a version's recorded tags.
    ///
    /// Promotes iff every required tag equals the literal string "True";
    /// a missing tag or any other value rejects.
    #[must_use]
    pub fn decide(&self, version: &ModelVersion) -> GateState {
        if self.failing_tags(version).is_empty() {
            GateState::Promoted
        } else {
            GateState::Rejected
        }
    }

    /// Read the challenger's tags back from the registry and promote it to
    /// `@Champion` if every required tag is "True".
    ///
    /// The alias reassignment displaces any previous champion atomically
    /// (a registry guarantee). On rejection, returns
    /// [`GateError::NotReady`] and performs no writes.
    pub fn promote(
        &self,
        registry: &mut dyn ModelRegistry,
        model_name: &str,
    ) -> Result<GateState> {
        let challenger = registry.get_version_by_alias(model_name, Alias::Challenger)?;

        // Re-fetch by version number: the gate trusts only what the
        // registry durably recorded, not in-process check results.
        let version = registry.get_version(model_name, challenger.version)?;

        let failing = self.failing_tags(&version);
        if !failing.is_empty() {
            return Err(GateError::NotReady { failing });
        }

        registry.set_alias(model_name, Alias::Champion, version.version)?;
        Ok(GateState::Promoted)
    }
}
