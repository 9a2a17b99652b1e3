//! Capabilities provided by the host environment
//!
//! The aggregator never owns configuration, variable storage or status
//! outputs. It is handed implementations of these traits at construction.

use thiserror::Error;

use crate::{Category, ObjectId, SummaryValue, Value, ZoneReference};

/// Errors a value store may report for a lookup
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("object {0} not found")]
    NotFound(ObjectId),

    #[error("value store unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the configured reference list of each category
pub trait ReferenceProvider: Send + Sync {
    /// The decoded reference list, in configured order
    ///
    /// Lists that cannot be decoded are returned empty.
    fn references(&self, category: Category) -> Vec<ZoneReference>;
}

/// Read access to the live values of monitored variables
pub trait ValueStore: Send + Sync {
    fn exists(&self, id: ObjectId) -> Result<bool, StoreError>;

    fn value(&self, id: ObjectId) -> Result<Value, StoreError>;
}

/// Receives the summary values
pub trait StatusSink: Send + Sync {
    fn set_value(&self, slot: &str, value: SummaryValue);
}

/// Host-wide switches suspending automatic updates
pub trait UpdateGate: Send + Sync {
    fn is_in_maintenance(&self) -> bool;

    fn is_update_mode_disabled(&self) -> bool;
}
