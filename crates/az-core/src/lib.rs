//! Core types for alarm zone control
//!
//! This crate provides the fundamental types shared by the alarm zone
//! crates: ObjectId, ZoneReference, Value, Category and the summary
//! values written back to the status outputs. It also defines the host
//! capabilities the aggregator is built against.

mod category;
mod host;
mod object_id;
mod reference;
mod summary;
mod value;

pub use category::{Category, ValueKind};
pub use host::{ReferenceProvider, StatusSink, StoreError, UpdateGate, ValueStore};
pub use object_id::{ObjectId, ObjectIdError};
pub use reference::{decode_references, decode_serialized_references, ZoneReference};
pub use summary::{AlarmState, ProtectionMode, SummaryValue, SystemDetailedState, SystemState};
pub use value::Value;
