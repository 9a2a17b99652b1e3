//! In-memory host services for alarm zone control
//!
//! This crate provides the stores the aggregator reads from and writes to
//! when no external host is attached:
//!
//! - [`MemoryValueStore`] holds the live values of monitored variables
//! - [`StatusStore`] holds the summary outputs with change timestamps
//! - [`RuntimeGate`] holds the maintenance and update-mode switches

mod gate;
mod status;
mod values;

pub use gate::RuntimeGate;
pub use status::{SharedStatusStore, StatusStore, StatusVariable};
pub use values::{MemoryValueStore, SharedValueStore, ValueSnapshotError};
