//! Summary values written to the status outputs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall protection mode across all alarm zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtectionMode {
    Disarmed = 0,
    Full = 1,
    /// Perimeter (doors/windows) only
    Hull = 2,
    Partial = 3,
    /// Zones are in differing modes
    Individual = 4,
}

impl ProtectionMode {
    pub fn description(self) -> &'static str {
        match self {
            ProtectionMode::Disarmed => "all alarm zones disarmed",
            ProtectionMode::Full => "full protection of all alarm zones",
            ProtectionMode::Hull => "hull protection of all alarm zones",
            ProtectionMode::Partial => "partial protection of all alarm zones",
            ProtectionMode::Individual => "individual protection, alarm zones differ",
        }
    }
}

/// Coarse armed state of the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemState {
    Disarmed = 0,
    Armed = 1,
    DelayedArmed = 2,
}

impl SystemState {
    pub fn description(self) -> &'static str {
        match self {
            SystemState::Disarmed => "disarmed",
            SystemState::Armed => "armed",
            SystemState::DelayedArmed => "delayed armed",
        }
    }
}

/// Armed state distinguishing full and partial arming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemDetailedState {
    Disarmed = 0,
    Armed = 1,
    DelayedArmed = 2,
    PartialArmed = 3,
    DelayedPartialArmed = 4,
}

impl SystemDetailedState {
    pub fn description(self) -> &'static str {
        match self {
            SystemDetailedState::Disarmed => "disarmed",
            SystemDetailedState::Armed => "armed",
            SystemDetailedState::DelayedArmed => "delayed armed",
            SystemDetailedState::PartialArmed => "partial armed",
            SystemDetailedState::DelayedPartialArmed => "delayed partial armed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmState {
    Idle = 0,
    Alarm = 1,
}

impl AlarmState {
    pub fn description(self) -> &'static str {
        match self {
            AlarmState::Idle => "no alarm",
            AlarmState::Alarm => "alarm",
        }
    }
}

/// The value written to a status output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Boolean(bool),
    Integer(i64),
    String(String),
}

macro_rules! impl_from_state {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SummaryValue {
                fn from(state: $ty) -> Self {
                    SummaryValue::Integer(state as i64)
                }
            }
        )*
    };
}

impl_from_state!(ProtectionMode, SystemState, SystemDetailedState, AlarmState);

impl From<bool> for SummaryValue {
    fn from(v: bool) -> Self {
        SummaryValue::Boolean(v)
    }
}

impl From<String> for SummaryValue {
    fn from(v: String) -> Self {
        SummaryValue::String(v)
    }
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Boolean(b) => write!(f, "{}", b),
            SummaryValue::Integer(i) => write!(f, "{}", i),
            SummaryValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_discriminants() {
        assert_eq!(
            SummaryValue::from(ProtectionMode::Individual),
            SummaryValue::Integer(4)
        );
        assert_eq!(
            SummaryValue::from(SystemState::DelayedArmed),
            SummaryValue::Integer(2)
        );
        assert_eq!(
            SummaryValue::from(SystemDetailedState::DelayedPartialArmed),
            SummaryValue::Integer(4)
        );
        assert_eq!(SummaryValue::from(AlarmState::Alarm), SummaryValue::Integer(1));
    }
}
