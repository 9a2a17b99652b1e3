//! Variable value storage

use az_core::{ObjectId, StoreError, Value, ValueStore};
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors when seeding a store from a YAML snapshot
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueSnapshotError {
    #[error("value snapshot must be a mapping")]
    NotAMapping,

    #[error("invalid object id '{0}'")]
    InvalidId(String),

    #[error("invalid value for object {id}: {reason}")]
    InvalidValue { id: ObjectId, reason: String },
}

/// Thread-safe in-memory variable store
///
/// Every stored ID exists; IDs never set do not.
#[derive(Default)]
pub struct MemoryValueStore {
    values: DashMap<ObjectId, Value>,
}

impl MemoryValueStore {
    /// Create an empty value store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from a YAML mapping of object id to scalar value
    pub fn from_yaml(yaml: &serde_yaml::Value) -> Result<Self, ValueSnapshotError> {
        let store = Self::new();
        store.reload_from_yaml(yaml)?;
        Ok(store)
    }

    /// Replace the whole content of the store with a YAML snapshot
    ///
    /// The snapshot is parsed completely before anything is replaced, so an
    /// invalid snapshot leaves the previous values in place.
    pub fn reload_from_yaml(&self, yaml: &serde_yaml::Value) -> Result<usize, ValueSnapshotError> {
        let entries = parse_snapshot(yaml)?;
        self.replace_all(entries);
        debug!(count = self.len(), "Loaded value snapshot");
        Ok(self.len())
    }

    /// Replace the whole content of the store
    pub fn replace_all(&self, entries: impl IntoIterator<Item = (ObjectId, Value)>) {
        self.values.clear();
        for (id, value) in entries {
            self.set(id, value);
        }
    }

    /// Remove every variable
    pub fn clear(&self) {
        self.values.clear();
    }

    /// Set the value of a variable, creating it if needed
    pub fn set(&self, id: ObjectId, value: impl Into<Value>) {
        let value = value.into();
        trace!(%id, %value, "Setting variable value");
        self.values.insert(id, value);
    }

    /// Get the current value of a variable
    pub fn get(&self, id: ObjectId) -> Option<Value> {
        self.values.get(&id).map(|v| v.clone())
    }

    /// Remove a variable, returning its last value
    pub fn remove(&self, id: ObjectId) -> Option<Value> {
        self.values.remove(&id).map(|(_, v)| v)
    }

    /// Get the total number of variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse a YAML mapping of object id to scalar value
fn parse_snapshot(yaml: &serde_yaml::Value) -> Result<Vec<(ObjectId, Value)>, ValueSnapshotError> {
    let mapping = yaml.as_mapping().ok_or(ValueSnapshotError::NotAMapping)?;

    mapping
        .iter()
        .map(|(key, value)| -> Result<(ObjectId, Value), ValueSnapshotError> {
            let id = match key {
                serde_yaml::Value::Number(n) => n.as_i64().map(ObjectId::new),
                serde_yaml::Value::String(s) => s.parse().ok(),
                _ => None,
            }
            .ok_or_else(|| ValueSnapshotError::InvalidId(format!("{:?}", key)))?;

            let value: Value = serde_yaml::from_value(value.clone()).map_err(|e| {
                ValueSnapshotError::InvalidValue {
                    id,
                    reason: e.to_string(),
                }
            })?;
            Ok((id, value))
        })
        .collect()
}

impl ValueStore for MemoryValueStore {
    fn exists(&self, id: ObjectId) -> Result<bool, StoreError> {
        Ok(self.values.contains_key(&id))
    }

    fn value(&self, id: ObjectId) -> Result<Value, StoreError> {
        self.get(id).ok_or(StoreError::NotFound(id))
    }
}

/// Thread-safe wrapper for MemoryValueStore
pub type SharedValueStore = Arc<MemoryValueStore>;
