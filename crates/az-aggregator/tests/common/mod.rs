//! Recording test doubles for the host capabilities

#![allow(dead_code)]

use az_aggregator::StateAggregator;
use az_core::{
    Category, ObjectId, ReferenceProvider, StatusSink, StoreError, SummaryValue, UpdateGate,
    Value, ValueStore, ZoneReference,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Reference lists per category, counting how often each was read
#[derive(Default)]
pub struct MockReferences {
    lists: HashMap<Category, Vec<ZoneReference>>,
    reads: Mutex<Vec<Category>>,
}

impl MockReferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: Category, references: &[(i64, bool)]) -> Self {
        self.lists.insert(
            category,
            references
                .iter()
                .map(|(id, enabled)| ZoneReference::new(*id, *enabled))
                .collect(),
        );
        self
    }

    /// Categories read so far, in order
    pub fn reads(&self) -> Vec<Category> {
        self.reads.lock().unwrap().clone()
    }
}

impl ReferenceProvider for MockReferences {
    fn references(&self, category: Category) -> Vec<ZoneReference> {
        self.reads.lock().unwrap().push(category);
        self.lists.get(&category).cloned().unwrap_or_default()
    }
}

/// Value store with optional failing lookups, counting value reads
#[derive(Default)]
pub struct MockValues {
    values: HashMap<ObjectId, Value>,
    broken: HashSet<ObjectId>,
    unreadable: HashSet<ObjectId>,
    value_reads: Mutex<Vec<ObjectId>>,
}

impl MockValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: i64, value: impl Into<Value>) -> Self {
        self.values.insert(ObjectId::new(id), value.into());
        self
    }

    /// Make the existence check of an object fail with an error
    pub fn broken(mut self, id: i64) -> Self {
        self.broken.insert(ObjectId::new(id));
        self
    }

    /// Make the value read of an existing object fail with an error
    pub fn unreadable(mut self, id: i64) -> Self {
        self.unreadable.insert(ObjectId::new(id));
        self
    }

    pub fn value_reads(&self) -> Vec<ObjectId> {
        self.value_reads.lock().unwrap().clone()
    }
}

impl ValueStore for MockValues {
    fn exists(&self, id: ObjectId) -> Result<bool, StoreError> {
        if self.broken.contains(&id) {
            return Err(StoreError::Unavailable("lookup failed".to_string()));
        }
        Ok(self.values.contains_key(&id))
    }

    fn value(&self, id: ObjectId) -> Result<Value, StoreError> {
        self.value_reads.lock().unwrap().push(id);
        if self.unreadable.contains(&id) {
            return Err(StoreError::Unavailable("read failed".to_string()));
        }
        self.values.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }
}

/// Status sink recording every write
#[derive(Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<(String, SummaryValue)>>,
}

impl RecordingSink {
    pub fn writes(&self) -> Vec<(String, SummaryValue)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn last(&self, slot: &str) -> Option<SummaryValue> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(s, _)| s == slot)
            .map(|(_, v)| v.clone())
    }
}

impl StatusSink for RecordingSink {
    fn set_value(&self, slot: &str, value: SummaryValue) {
        self.writes.lock().unwrap().push((slot.to_string(), value));
    }
}

#[derive(Default)]
pub struct MockGate {
    pub maintenance: bool,
    pub update_mode_disabled: bool,
}

impl UpdateGate for MockGate {
    fn is_in_maintenance(&self) -> bool {
        self.maintenance
    }

    fn is_update_mode_disabled(&self) -> bool {
        self.update_mode_disabled
    }
}

/// An aggregator wired to the given doubles
pub struct Harness {
    pub aggregator: StateAggregator,
    pub references: Arc<MockReferences>,
    pub values: Arc<MockValues>,
    pub sink: Arc<RecordingSink>,
}

impl Harness {
    pub fn new(references: MockReferences, values: MockValues) -> Self {
        Self::with_gate(references, values, MockGate::default())
    }

    pub fn with_gate(references: MockReferences, values: MockValues, gate: MockGate) -> Self {
        let references = Arc::new(references);
        let values = Arc::new(values);
        let sink = Arc::new(RecordingSink::default());
        let aggregator = StateAggregator::new(
            references.clone(),
            values.clone(),
            sink.clone(),
            Arc::new(gate),
        );
        Self {
            aggregator,
            references,
            values,
            sink,
        }
    }
}
