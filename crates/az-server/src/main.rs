//! Alarm zone control
//!
//! Loads the zone configuration and a snapshot of variable values, then
//! aggregates them into the summary status outputs once or periodically.

use anyhow::{Context, Result};
use az_aggregator::StateAggregator;
use az_config::{load_yaml, ConfigError, ZoneConfig};
use az_value_store::{MemoryValueStore, RuntimeGate, StatusStore};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Value snapshot file name inside the config directory
const VALUES_FILE: &str = "values.yaml";

#[derive(Debug, Parser)]
#[command(name = "alarmzone", version, about = "Aggregate alarm zone states")]
struct Args {
    /// Directory containing alarm_zone.yaml and values.yaml
    #[arg(short, long, env = "ALARMZONE_CONFIG_DIR", default_value = ".")]
    config_dir: PathBuf,

    /// Repeat the update every N seconds until interrupted
    #[arg(short, long, env = "ALARMZONE_INTERVAL")]
    interval: Option<u64>,
}

/// The wired aggregator and the stores it works on
struct AlarmZone {
    config_dir: PathBuf,
    aggregator: StateAggregator,
    values: Arc<MemoryValueStore>,
    status: Arc<StatusStore>,
}

impl AlarmZone {
    /// Load the configuration and the current value snapshot
    fn load(config_dir: &Path) -> Result<Self> {
        let config = ZoneConfig::load(config_dir)
            .with_context(|| format!("loading configuration from {}", config_dir.display()))?;

        let gate = RuntimeGate::new(config.maintenance_mode, config.disable_update_mode);
        let values = Arc::new(MemoryValueStore::new());
        let status = Arc::new(StatusStore::new());
        let aggregator = StateAggregator::new(
            Arc::new(config),
            values.clone(),
            status.clone(),
            Arc::new(gate),
        );

        let zone = Self {
            config_dir: config_dir.to_path_buf(),
            aggregator,
            values,
            status,
        };
        let count = zone.refresh_values()?;
        info!(variables = count, "Value store ready");
        Ok(zone)
    }

    /// Reload the value snapshot from disk
    ///
    /// A missing snapshot empties the store; any other failure leaves the
    /// previous values untouched and is returned.
    fn refresh_values(&self) -> Result<usize> {
        match load_yaml(self.config_dir.as_path(), VALUES_FILE) {
            Ok(snapshot) => self
                .values
                .reload_from_yaml(&snapshot)
                .with_context(|| format!("reading {}", VALUES_FILE)),
            Err(ConfigError::ReadFile { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                warn!("No {} found, starting with no variables", VALUES_FILE);
                self.values.clear();
                Ok(0)
            }
            Err(e) => Err(e).with_context(|| format!("loading {}", VALUES_FILE)),
        }
    }

    /// Run a full update and log the outcome
    fn update(&self) -> bool {
        let report = self.aggregator.update_all_report();
        for (category, ok) in report.iter() {
            if !ok {
                warn!(%category, "Update produced no result");
            }
        }
        for slot in self.status.slots() {
            if let Some(value) = self.status.value(&slot) {
                info!(slot = %slot, value = %value, "Status");
            }
        }

        let ok = report.all_succeeded();
        info!(success = ok, "States updated");
        ok
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    info!("Starting alarm zone control");

    let zone = AlarmZone::load(&args.config_dir)?;

    let Some(seconds) = args.interval else {
        zone.update();
        return Ok(());
    };

    let mut ticker = tokio::time::interval(Duration::from_secs(seconds.max(1)));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = zone.refresh_values() {
                    warn!("Keeping previous values: {:#}", e);
                }
                zone.update();
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down...");
                break;
            }
        }
    }

    Ok(())
}
