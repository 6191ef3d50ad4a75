//! In-memory registry backend for tests and ephemeral runs

use std::collections::HashMap;

use super::{Alias, ModelRecord, ModelRegistry, ModelVersion, RegistryError, Result};

/// In-memory model registry.
///
/// Stores everything in a `HashMap`. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    models: HashMap<String, ModelRecord>,
}

impl InMemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, name: &str) -> Result<&ModelRecord> {
        self.models.get(name).ok_or_else(|| RegistryError::ModelNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut ModelRecord> {
        self.models.get_mut(name).ok_or_else(|| RegistryError::ModelNotFound(name.to_string()))
    }
}

impl ModelRegistry for InMemoryRegistry {
    fn register_version(
        &mut self,
        name: &str,
        description: Option<&str>,
        run_id: &str,
    ) -> Result<ModelVersion> {
        let record = self.models.entry(name.to_string()).or_insert_with(ModelRecord::new);
        Ok(record.register(name, description, run_id))
    }

    fn get_version(&self, name: &str, version: u64) -> Result<ModelVersion> {
        self.record(name)?.get(name, version)
    }

    fn get_version_by_alias(&self, name: &str, alias: Alias) -> Result<ModelVersion> {
        self.record(name)?.get_by_alias(name, alias)
    }

    fn set_version_tag(&mut self, name: &str, version: u64, key: &str, value: &str) -> Result<()> {
        self.record_mut(name)?.set_tag(name, version, key, value)
    }

    fn set_alias(&mut self, name: &str, alias: Alias, version: u64) -> Result<()> {
        self.record_mut(name)?.set_alias(name, alias, version)
    }

    fn list_versions(&self, name: &str) -> Result<Vec<ModelVersion>> {
        Ok(self.record(name)?.list())
    }
}
