//! State aggregation for alarm zone control
//!
//! The StateAggregator reduces the configured variables of each summary
//! category to one status value:
//!
//! | Category | Output slot | Reduction |
//! |---|---|---|
//! | ProtectionMode | `Mode` | all zones in the same mode, else individual |
//! | SystemState | `SystemState` | delayed armed > armed > disarmed |
//! | SystemDetailedState | `SystemDetailedState` | see [`rules::system_detailed_state`] |
//! | AlarmState | `AlarmState` | alarm if any variable is 1 |
//! | AlertingSensor | `AlertingSensor` | last non-empty name in list order |
//! | DoorWindowState .. AlarmCall | same as category | true if any variable is true |
//!
//! Every update reports `true` only when at least one configured variable
//! was in use, assignable and present in the value store. Otherwise the
//! output is left untouched.

mod aggregator;
mod report;
pub mod rules;

pub use aggregator::StateAggregator;
pub use report::UpdateReport;
