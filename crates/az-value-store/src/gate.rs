//! Maintenance and update-mode switches

use az_core::UpdateGate;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Update gate whose switches can be flipped at runtime
#[derive(Debug, Default)]
pub struct RuntimeGate {
    maintenance: AtomicBool,
    update_mode_disabled: AtomicBool,
}

impl RuntimeGate {
    pub fn new(maintenance: bool, update_mode_disabled: bool) -> Self {
        Self {
            maintenance: AtomicBool::new(maintenance),
            update_mode_disabled: AtomicBool::new(update_mode_disabled),
        }
    }

    pub fn set_maintenance(&self, enabled: bool) {
        if self.maintenance.swap(enabled, Ordering::SeqCst) != enabled {
            info!(enabled, "Maintenance mode changed");
        }
    }

    pub fn set_update_mode_disabled(&self, disabled: bool) {
        if self.update_mode_disabled.swap(disabled, Ordering::SeqCst) != disabled {
            info!(disabled, "Update mode switch changed");
        }
    }
}

impl UpdateGate for RuntimeGate {
    fn is_in_maintenance(&self) -> bool {
        self.maintenance.load(Ordering::SeqCst)
    }

    fn is_update_mode_disabled(&self) -> bool {
        self.update_mode_disabled.load(Ordering::SeqCst)
    }
}
