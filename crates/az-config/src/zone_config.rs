//! Alarm zone control configuration
//!
//! Parses the `alarm_zone_control:` section from alarm_zone.yaml

use az_core::{decode_serialized_references, Category, ReferenceProvider, ZoneReference};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::loader::load_yaml;

/// Default configuration file name inside the config directory
pub const CONFIG_FILE: &str = "alarm_zone.yaml";

const SECTION: &str = "alarm_zone_control";

/// A configured reference list, as written in the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceList {
    /// A YAML sequence of `{ID, Use}` records
    Records(Vec<Value>),
    /// The serialized JSON text the host stores lists as
    Serialized(String),
    /// Anything else; decodes to an empty list
    Invalid(Value),
}

impl Default for ReferenceList {
    fn default() -> Self {
        ReferenceList::Records(Vec::new())
    }
}

impl ReferenceList {
    /// Decode into typed references
    ///
    /// Malformed records become unused references; a list that cannot be
    /// decoded at all becomes empty.
    pub fn decode(&self, category: Category) -> Vec<ZoneReference> {
        match self {
            ReferenceList::Records(records) => records.iter().map(decode_record).collect(),
            ReferenceList::Serialized(text) => {
                decode_serialized_references(text).unwrap_or_else(|| {
                    warn!(%category, "Reference list is not a JSON array, treating as empty");
                    Vec::new()
                })
            }
            ReferenceList::Invalid(value) => {
                warn!(%category, ?value, "Reference list has an unexpected shape, treating as empty");
                Vec::new()
            }
        }
    }
}

/// Decode one YAML record, substituting an unused reference if it is malformed
fn decode_record(record: &Value) -> ZoneReference {
    serde_yaml::from_value(record.clone()).unwrap_or_else(|_| ZoneReference::unused())
}

/// Configuration from the `alarm_zone_control:` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Suspends all automatic updates
    #[serde(default)]
    pub maintenance_mode: bool,

    /// Suspends updates of the mode categories
    #[serde(default)]
    pub disable_update_mode: bool,

    #[serde(default)]
    pub protection_mode: ReferenceList,

    #[serde(default)]
    pub system_state: ReferenceList,

    #[serde(default)]
    pub system_detailed_state: ReferenceList,

    #[serde(default)]
    pub alarm_state: ReferenceList,

    #[serde(default)]
    pub alerting_sensor: ReferenceList,

    #[serde(default)]
    pub door_window_state: ReferenceList,

    #[serde(default)]
    pub motion_detector_state: ReferenceList,

    #[serde(default)]
    pub alarm_siren: ReferenceList,

    #[serde(default)]
    pub alarm_light: ReferenceList,

    #[serde(default)]
    pub alarm_call: ReferenceList,
}

impl ZoneConfig {
    /// Load the configuration from a config directory
    pub fn load(config_dir: impl AsRef<Path>) -> ConfigResult<Self> {
        let config_dir = config_dir.as_ref();
        let yaml = load_yaml(config_dir, CONFIG_FILE)?;

        Self::from_yaml(&yaml)
    }

    /// Parse the configuration from a YAML value
    pub fn from_yaml(yaml: &Value) -> ConfigResult<Self> {
        let mapping = yaml.as_mapping().ok_or_else(|| ConfigError::InvalidValue {
            key: "root".to_string(),
            reason: "configuration must be a mapping".to_string(),
        })?;

        let section = mapping
            .get(&Value::String(SECTION.to_string()))
            .cloned()
            .unwrap_or(Value::Mapping(serde_yaml::Mapping::new()));

        serde_yaml::from_value(section).map_err(|e| ConfigError::InvalidValue {
            key: SECTION.to_string(),
            reason: e.to_string(),
        })
    }

    /// The raw list configured for a category
    pub fn list(&self, category: Category) -> &ReferenceList {
        match category {
            Category::ProtectionMode => &self.protection_mode,
            Category::SystemState => &self.system_state,
            Category::SystemDetailedState => &self.system_detailed_state,
            Category::AlarmState => &self.alarm_state,
            Category::AlertingSensor => &self.alerting_sensor,
            Category::DoorWindowState => &self.door_window_state,
            Category::MotionDetectorState => &self.motion_detector_state,
            Category::AlarmSiren => &self.alarm_siren,
            Category::AlarmLight => &self.alarm_light,
            Category::AlarmCall => &self.alarm_call,
        }
    }

    pub fn references_for(&self, category: Category) -> Vec<ZoneReference> {
        self.list(category).decode(category)
    }
}

impl ReferenceProvider for ZoneConfig {
    fn references(&self, category: Category) -> Vec<ZoneReference> {
        self.references_for(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> ZoneConfig {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        ZoneConfig::from_yaml(&value).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ZoneConfig::default();
        assert!(!config.maintenance_mode);
        assert!(!config.disable_update_mode);
        for category in Category::ALL {
            assert!(config.references_for(category).is_empty());
        }
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = parse("other_integration:\n  key: value\n");
        assert!(!config.maintenance_mode);
        assert!(config.references_for(Category::AlarmSiren).is_empty());
    }

    #[test]
    fn test_parse_sequences() {
        let config = parse(
            r#"
alarm_zone_control:
  maintenance_mode: true
  protection_mode:
    - ID: 12001
      Use: true
    - ID: 12002
      Use: false
  door_window_state:
    - {ID: 13001, Use: true}
"#,
        );
        assert!(config.maintenance_mode);
        assert_eq!(
            config.references_for(Category::ProtectionMode),
            vec![ZoneReference::new(12001, true), ZoneReference::new(12002, false)]
        );
        assert_eq!(
            config.references_for(Category::DoorWindowState),
            vec![ZoneReference::new(13001, true)]
        );
        assert!(config.references_for(Category::MotionDetectorState).is_empty());
    }

    #[test]
    fn test_parse_serialized_list() {
        let config = parse(
            r#"
alarm_zone_control:
  alerting_sensor: '[{"ID":14001,"Use":true},{"ID":14002,"Use":true}]'
"#,
        );
        assert_eq!(
            config.references_for(Category::AlertingSensor),
            vec![ZoneReference::new(14001, true), ZoneReference::new(14002, true)]
        );
    }

    #[test]
    fn test_malformed_lists_fail_closed() {
        let config = parse(
            r#"
alarm_zone_control:
  alarm_call: 'not json'
  alarm_light: 42
  alarm_siren:
    - {ID: 15001}
    - {ID: 15002, Use: true}
"#,
        );
        assert!(config.references_for(Category::AlarmCall).is_empty());
        assert!(config.references_for(Category::AlarmLight).is_empty());
        assert_eq!(
            config.references_for(Category::AlarmSiren),
            vec![ZoneReference::unused(), ZoneReference::new(15002, true)]
        );
    }

    #[test]
    fn test_records_with_non_string_keys_fail_closed() {
        let config = parse(
            r#"
alarm_zone_control:
  alarm_siren:
    - {1: 2}
    - {ID: 15002, Use: true}
  alarm_light:
    ? [nested, key]
    : value
"#,
        );
        assert_eq!(
            config.references_for(Category::AlarmSiren),
            vec![ZoneReference::unused(), ZoneReference::new(15002, true)]
        );
        assert!(config.references_for(Category::AlarmLight).is_empty());
    }

    #[test]
    fn test_root_must_be_mapping() {
        let value: Value = serde_yaml::from_str("- just\n- a list\n").unwrap();
        let result = ZoneConfig::from_yaml(&value);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
