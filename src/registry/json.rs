//! JSON file-based registry backend
//!
//! Stores each model as a separate JSON document in a directory. File names
//! are `{model_name}.json`. Each mutation loads the document, applies the
//! change, and rewrites the whole file.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Alias, ModelRecord, ModelRegistry, ModelVersion, RegistryError, Result};

/// JSON file-based model registry.
///
/// # Example
///
/// ```no_run
/// use ascender::registry::{JsonFileRegistry, ModelRegistry};
///
/// let mut registry = JsonFileRegistry::new("/tmp/registry");
/// ```
#[derive(Debug)]
pub struct JsonFileRegistry {
    dir: PathBuf,
}

impl JsonFileRegistry {
    /// Create a new JSON file registry rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// Directory this registry persists into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn model_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    fn load(&self, name: &str) -> Result<ModelRecord> {
        let path = self.model_path(name);
        if !path.exists() {
            return Err(RegistryError::ModelNotFound(name.to_string()));
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn load_or_new(&self, name: &str) -> Result<ModelRecord> {
        match self.load(name) {
            Ok(record) => Ok(record),
            Err(RegistryError::ModelNotFound(_)) => Ok(ModelRecord::new()),
            Err(e) => Err(e),
        }
    }

    fn save(&self, name: &str, record: &ModelRecord) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.model_path(name), json)?;
        Ok(())
    }
}

impl ModelRegistry for JsonFileRegistry {
    fn register_version(
        &mut self,
        name: &str,
        description: Option<&str>,
        run_id: &str,
    ) -> Result<ModelVersion> {
        let mut record = self.load_or_new(name)?;
        let mv = record.register(name, description, run_id);
        self.save(name, &record)?;
        Ok(mv)
    }

    fn get_version(&self, name: &str, version: u64) -> Result<ModelVersion> {
        self.load(name)?.get(name, version)
    }

    fn get_version_by_alias(&self, name: &str, alias: Alias) -> Result<ModelVersion> {
        self.load(name)?.get_by_alias(name, alias)
    }

    fn set_version_tag(&mut self, name: &str, version: u64, key: &str, value: &str) -> Result<()> {
        let mut record = self.load(name)?;
        record.set_tag(name, version, key, value)?;
        self.save(name, &record)
    }

    fn set_alias(&mut self, name: &str, alias: Alias, version: u64) -> Result<()> {
        let mut record = self.load(name)?;
        record.set_alias(name, alias, version)?;
        self.save(name, &record)
    }

    fn list_versions(&self, name: &str) -> Result<Vec<ModelVersion>> {
        Ok(self.load(name)?.list())
    }
}
