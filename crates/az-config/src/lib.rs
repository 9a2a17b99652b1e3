//! YAML configuration loading for alarm zone control
//!
//! The configuration names, per summary category, the list of variables
//! to aggregate. Lists may be written as YAML sequences or as the
//! serialized JSON text the host stores them as.
//!
//! The loader understands two custom tags:
//!
//! - `!include path` - Include another YAML file
//! - `!env_var VAR` - Environment variable substitution
//!
//! # Example
//!
//! ```ignore
//! use az_config::ZoneConfig;
//!
//! let config = ZoneConfig::load("/etc/alarmzone")?;
//! let references = config.references_for(Category::DoorWindowState);
//! ```

mod error;
mod loader;
mod zone_config;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_yaml, load_yaml_string, YamlLoader};
pub use zone_config::{ReferenceList, ZoneConfig, CONFIG_FILE};

pub use serde_yaml::Value;
