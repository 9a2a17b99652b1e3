//! Status output storage

use az_core::{StatusSink, SummaryValue};
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument};

/// A status output at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct StatusVariable {
    pub value: SummaryValue,

    /// When the value last differed from the previous one
    pub last_changed: DateTime<Utc>,

    /// When the value was last written, changed or not
    pub last_updated: DateTime<Utc>,
}

impl StatusVariable {
    pub fn new(value: SummaryValue) -> Self {
        let now = Utc::now();
        Self {
            value,
            last_changed: now,
            last_updated: now,
        }
    }

    /// Create an updated variable, preserving last_changed if the value is the same
    pub fn with_update(&self, value: SummaryValue) -> Self {
        let now = Utc::now();
        let changed = self.value != value;
        Self {
            last_changed: if changed { now } else { self.last_changed },
            last_updated: now,
            value,
        }
    }
}

/// Thread-safe status output store
///
/// Writes replace a whole slot under its shard lock, so concurrent writers
/// to different slots never observe each other's partial state.
#[derive(Default)]
pub struct StatusStore {
    slots: DashMap<String, StatusVariable>,
    writes: AtomicU64,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a slot
    #[instrument(skip(self, value), fields(slot = %slot))]
    pub fn set(&self, slot: &str, value: SummaryValue) -> StatusVariable {
        let (updated, changed) = match self.slots.entry(slot.to_string()) {
            Entry::Occupied(mut entry) => {
                let updated = entry.get().with_update(value);
                let changed = entry.get().value != updated.value;
                entry.insert(updated.clone());
                (updated, changed)
            }
            Entry::Vacant(entry) => {
                let created = StatusVariable::new(value);
                entry.insert(created.clone());
                (created, true)
            }
        };

        debug!(value = %updated.value, changed, "Setting status output");

        self.writes.fetch_add(1, Ordering::Relaxed);
        updated
    }

    pub fn get(&self, slot: &str) -> Option<StatusVariable> {
        self.slots.get(slot).map(|s| s.clone())
    }

    /// The current value of a slot, or None if it was never written
    pub fn value(&self, slot: &str) -> Option<SummaryValue> {
        self.slots.get(slot).map(|s| s.value.clone())
    }

    /// All written slot names, sorted
    pub fn slots(&self) -> Vec<String> {
        let mut slots: Vec<String> = self.slots.iter().map(|r| r.key().clone()).collect();
        slots.sort();
        slots
    }

    /// Total number of writes since creation
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

impl StatusSink for StatusStore {
    fn set_value(&self, slot: &str, value: SummaryValue) {
        self.set(slot, value);
    }
}

/// Thread-safe wrapper for StatusStore
pub type SharedStatusStore = Arc<StatusStore>;
