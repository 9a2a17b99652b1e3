//! The ten summary categories and their fixed metadata

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a category reads the values of its references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Boolean,
    String,
}

/// A summary category
///
/// Each category owns one configured reference list and one status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    ProtectionMode,
    SystemState,
    SystemDetailedState,
    AlarmState,
    AlertingSensor,
    DoorWindowState,
    MotionDetectorState,
    AlarmSiren,
    AlarmLight,
    AlarmCall,
}

impl Category {
    /// All categories in the order a full update runs them
    pub const ALL: [Category; 10] = [
        Category::ProtectionMode,
        Category::SystemState,
        Category::SystemDetailedState,
        Category::AlarmState,
        Category::AlertingSensor,
        Category::DoorWindowState,
        Category::MotionDetectorState,
        Category::AlarmSiren,
        Category::AlarmLight,
        Category::AlarmCall,
    ];

    /// Name of the configuration property holding the reference list
    pub fn config_key(self) -> &'static str {
        match self {
            Category::ProtectionMode => "ProtectionMode",
            Category::SystemState => "SystemState",
            Category::SystemDetailedState => "SystemDetailedState",
            Category::AlarmState => "AlarmState",
            Category::AlertingSensor => "AlertingSensor",
            Category::DoorWindowState => "DoorWindowState",
            Category::MotionDetectorState => "MotionDetectorState",
            Category::AlarmSiren => "AlarmSiren",
            Category::AlarmLight => "AlarmLight",
            Category::AlarmCall => "AlarmCall",
        }
    }

    /// Name of the status output the summary is written to
    pub fn output_slot(self) -> &'static str {
        match self {
            Category::ProtectionMode => "Mode",
            other => other.config_key(),
        }
    }

    pub fn value_kind(self) -> ValueKind {
        match self {
            Category::ProtectionMode
            | Category::SystemState
            | Category::SystemDetailedState
            | Category::AlarmState => ValueKind::Integer,
            Category::AlertingSensor => ValueKind::String,
            Category::DoorWindowState
            | Category::MotionDetectorState
            | Category::AlarmSiren
            | Category::AlarmLight
            | Category::AlarmCall => ValueKind::Boolean,
        }
    }

    /// Whether a disabled update mode suspends this category
    pub fn is_mode_category(self) -> bool {
        self.value_kind() == ValueKind::Integer
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}
