//! Model registry abstraction
//!
//! Provides the [`ModelRegistry`] trait over a model registry holding
//! versioned models with descriptions, tags, and alias labels
//! (`@Challenger`, `@Champion`), plus two implementations:
//!
//! - [`InMemoryRegistry`]: HashMap-backed, for tests and ephemeral runs
//! - [`JsonFileRegistry`]: one JSON document per model under a directory
//!
//! Alias assignment is atomic from the caller's perspective: after
//! [`ModelRegistry::set_alias`] returns, the named version holds the alias
//! and any previous holder no longer does. At most one version per model
//! may hold a given alias at a time.
//!
//! # Example
//!
//! ```
//! use ascender::registry::{Alias, InMemoryRegistry, ModelRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = InMemoryRegistry::new();
//! let v1 = registry.register_version("churn", Some("first cut"), "run-1")?;
//! registry.set_alias("churn", Alias::Challenger, v1.version)?;
//!
//! let challenger = registry.get_version_by_alias("churn", Alias::Challenger)?;
//! assert_eq!(challenger.version, 1);
//! # Ok(())
//! # }
//! ```

mod json;
mod memory;


pub use json::JsonFileRegistry;
pub use memory::InMemoryRegistry;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Alias label a model version may carry.
///
/// At most one version of a model holds a given alias at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alias {
    /// Candidate model under validation
    Challenger,
    /// Model currently serving production traffic
    Champion,
}

impl Alias {
    /// Display name for the alias.
    pub fn as_str(self) -> &'static str {
        match self {
            Alias::Challenger => "Challenger",
            Alias::Champion => "Champion",
        }
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Alias {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "challenger" => Ok(Alias::Challenger),
            "champion" => Ok(Alias::Champion),
            other => Err(format!("unknown alias '{other}'")),
        }
    }
}

/// A registered model version.
///
/// Identity is the (name, version) pair; version numbers are assigned
/// sequentially per model starting at 1. Tags are free-form key-value
/// metadata; validation checks record their results here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelVersion {
    /// Registered model name (e.g., "mlops_churn")
    pub name: String,
    /// Sequential version number, starting at 1
    pub version: u64,
    /// Free-text description supplied at registration
    pub description: Option<String>,
    /// Key-value metadata tags
    pub tags: HashMap<String, String>,
    /// ID of the training run that produced this version
    pub run_id: String,
    /// When this version was registered
    pub created_at: DateTime<Utc>,
}

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The requested model has no versions in the registry.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The requested (name, version) pair does not exist.
    #[error("version not found: {name} v{version}")]
    VersionNotFound { name: String, version: u64 },

    /// No version of the model currently holds the alias.
    ///
    /// Callers treat this as expected absence when probing for a champion.
    #[error("no version of {name} holds alias @{alias}")]
    AliasNotFound { name: String, alias: Alias },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Trait for model registry backends.
///
/// Implementations persist versioned models and maintain the alias
/// uniqueness invariant: [`set_alias`](Self::set_alias) reassigns the label
/// atomically, displacing any previous holder.
pub trait ModelRegistry {
    /// Register a new version of the named model, assigning the next
    /// sequential version number.
    fn register_version(
        &mut self,
        name: &str,
        description: Option<&str>,
        run_id: &str,
    ) -> Result<ModelVersion>;

    /// Fetch a version by its number.
    fn get_version(&self, name: &str, version: u64) -> Result<ModelVersion>;

    /// Fetch the version currently holding the given alias.
    ///
    /// Returns [`RegistryError::AliasNotFound`] if no version holds it.
    fn get_version_by_alias(&self, name: &str, alias: Alias) -> Result<ModelVersion>;

    /// Set a tag on a version. Last write wins; re-running validation
    /// overwrites previous values for the same key.
    fn set_version_tag(&mut self, name: &str, version: u64, key: &str, value: &str) -> Result<()>;

    /// Atomically assign the alias to the given version.
    ///
    /// Any previous holder of the alias loses it in the same operation;
    /// there is no observable state in which two versions hold the alias.
    fn set_alias(&mut self, name: &str, alias: Alias, version: u64) -> Result<()>;

    /// List all versions of the named model, oldest first.
    fn list_versions(&self, name: &str) -> Result<Vec<ModelVersion>>;
}

/// Serializable registry state for one model: its versions plus the
/// alias assignment table.
///
/// Shared by the in-memory and JSON file backends so both enforce the
/// same alias semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ModelRecord {
    /// Versions keyed by version number
    pub versions: HashMap<u64, ModelVersion>,
    /// Alias -> version number currently holding it
    pub aliases: HashMap<Alias, u64>,
    /// Next version number to assign
    pub next_version: u64,
}

impl ModelRecord {
    pub(crate) fn new() -> Self {
        Self { versions: HashMap::new(), aliases: HashMap::new(), next_version: 1 }
    }

    pub(crate) fn register(
        &mut self,
        name: &str,
        description: Option<&str>,
        run_id: &str,
    ) -> ModelVersion {
        let version = self.next_version;
        self.next_version += 1;
        let mv = ModelVersion {
            name: name.to_string(),
            version,
            description: description.map(String::from),
            tags: HashMap::new(),
            run_id: run_id.to_string(),
            created_at: Utc::now(),
        };
        self.versions.insert(version, mv.clone());
        mv
    }

    pub(crate) fn get(&self, name: &str, version: u64) -> Result<ModelVersion> {
        self.versions.get(&version).cloned().ok_or_else(|| RegistryError::VersionNotFound {
            name: name.to_string(),
            version,
        })
    }

    pub(crate) fn get_by_alias(&self, name: &str, alias: Alias) -> Result<ModelVersion> {
        let version = self
            .aliases
            .get(&alias)
            .copied()
            .ok_or_else(|| RegistryError::AliasNotFound { name: name.to_string(), alias })?;
        self.get(name, version)
    }

    pub(crate) fn set_tag(
        &mut self,
        name: &str,
        version: u64,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let mv = self.versions.get_mut(&version).ok_or_else(|| RegistryError::VersionNotFound {
            name: name.to_string(),
            version,
        })?;
        mv.tags.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Single-map insert keeps the reassignment atomic: the old holder is
    /// displaced in the same operation that installs the new one.
    pub(crate) fn set_alias(&mut self, name: &str, alias: Alias, version: u64) -> Result<()> {
        if !self.versions.contains_key(&version) {
            return Err(RegistryError::VersionNotFound { name: name.to_string(), version });
        }
        self.aliases.insert(alias, version);
        Ok(())
    }

    pub(crate) fn list(&self) -> Vec<ModelVersion> {
        let mut versions: Vec<ModelVersion> = self.versions.values().cloned().collect();
        versions.sort_by_key(|mv| mv.version);
        versions
    }
}
