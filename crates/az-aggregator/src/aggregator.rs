//! The state aggregator and its ten update operations

use az_core::{
    Category, ReferenceProvider, StatusSink, SummaryValue, UpdateGate, Value, ValueStore,
    ZoneReference,
};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

use crate::report::UpdateReport;
use crate::rules;

/// The classified values of one pass over a category's references
struct Scan<T> {
    /// References in use, whether or not they resolved
    amount: usize,
    /// Values of the valid references, in list order
    values: Vec<T>,
}

/// Aggregates the configured variables of each category into its status output
///
/// All collaborators are injected; the aggregator itself holds no state
/// between updates.
pub struct StateAggregator {
    references: Arc<dyn ReferenceProvider>,
    values: Arc<dyn ValueStore>,
    sink: Arc<dyn StatusSink>,
    gate: Arc<dyn UpdateGate>,
}

impl StateAggregator {
    /// Create a new aggregator over the given host capabilities
    pub fn new(
        references: Arc<dyn ReferenceProvider>,
        values: Arc<dyn ValueStore>,
        sink: Arc<dyn StatusSink>,
        gate: Arc<dyn UpdateGate>,
    ) -> Self {
        Self {
            references,
            values,
            sink,
            gate,
        }
    }

    /// Run every update in order and report whether all of them succeeded
    ///
    /// A failing update never prevents the following ones from running.
    pub fn update_all(&self) -> bool {
        self.update_all_report().all_succeeded()
    }

    /// Run every update in order and collect the individual results
    #[instrument(skip(self))]
    pub fn update_all_report(&self) -> UpdateReport {
        let mut report = UpdateReport::new();
        for category in Category::ALL {
            report.record(category, self.update(category));
        }
        debug!(failed = ?report.failed(), "Full update finished");
        report
    }

    /// Run the update of a single category
    pub fn update(&self, category: Category) -> bool {
        match category {
            Category::ProtectionMode => self.update_protection_mode(),
            Category::SystemState => self.update_system_state(),
            Category::SystemDetailedState => self.update_system_detailed_state(),
            Category::AlarmState => self.update_alarm_state(),
            Category::AlertingSensor => self.update_alerting_sensor(),
            Category::DoorWindowState => self.update_door_window_state(),
            Category::MotionDetectorState => self.update_motion_detector_state(),
            Category::AlarmSiren => self.update_alarm_siren(),
            Category::AlarmLight => self.update_alarm_light(),
            Category::AlarmCall => self.update_alarm_call(),
        }
    }

    /// Update `Mode`: the protection mode shared by all zones
    pub fn update_protection_mode(&self) -> bool {
        let category = Category::ProtectionMode;
        let Some(scan) = self.scan(category, Value::as_integer) else {
            return false;
        };
        let mode = rules::protection_mode(&scan.values, scan.amount);
        debug!(mode = mode as i64, "Protection mode: {}", mode.description());
        self.write(category, mode.into());
        true
    }

    /// Update `SystemState`: disarmed, armed or delayed armed
    pub fn update_system_state(&self) -> bool {
        let category = Category::SystemState;
        let Some(scan) = self.scan(category, Value::as_integer) else {
            return false;
        };
        let state = rules::system_state(&scan.values);
        debug!(state = state as i64, "System state: {}", state.description());
        self.write(category, state.into());
        true
    }

    /// Update `SystemDetailedState`, distinguishing full and partial arming
    pub fn update_system_detailed_state(&self) -> bool {
        let category = Category::SystemDetailedState;
        let Some(scan) = self.scan(category, Value::as_integer) else {
            return false;
        };
        let state = rules::system_detailed_state(&scan.values, scan.amount);
        debug!(
            state = state as i64,
            "System detailed state: {}",
            state.description()
        );
        self.write(category, state.into());
        true
    }

    /// Update `AlarmState`: alarm if any zone reports an alarm
    pub fn update_alarm_state(&self) -> bool {
        let category = Category::AlarmState;
        let Some(scan) = self.scan(category, Value::as_integer) else {
            return false;
        };
        let state = rules::alarm_state(&scan.values);
        debug!(state = state as i64, "Alarm state: {}", state.description());
        self.write(category, state.into());
        true
    }

    /// Update `AlertingSensor` with the last non-empty sensor name
    pub fn update_alerting_sensor(&self) -> bool {
        let category = Category::AlertingSensor;
        let Some(scan) = self.scan(category, Value::as_text) else {
            return false;
        };
        let sensor = rules::alerting_sensor(&scan.values);
        debug!(sensor = %sensor, "Alerting sensor");
        self.write(category, sensor.into());
        true
    }

    /// Update `DoorWindowState`: true if any door or window is open
    pub fn update_door_window_state(&self) -> bool {
        self.update_any_active(Category::DoorWindowState)
    }

    /// Update `MotionDetectorState`: true if any motion was detected
    pub fn update_motion_detector_state(&self) -> bool {
        self.update_any_active(Category::MotionDetectorState)
    }

    /// Update `AlarmSiren`: true if any siren is on
    pub fn update_alarm_siren(&self) -> bool {
        self.update_any_active(Category::AlarmSiren)
    }

    /// Update `AlarmLight`: true if any alarm light is on
    pub fn update_alarm_light(&self) -> bool {
        self.update_any_active(Category::AlarmLight)
    }

    /// Update `AlarmCall`: true if any alarm call is active
    pub fn update_alarm_call(&self) -> bool {
        self.update_any_active(Category::AlarmCall)
    }

    /// Boolean categories: active if any variable is true
    fn update_any_active(&self, category: Category) -> bool {
        let Some(scan) = self.scan(category, Value::as_boolean) else {
            return false;
        };
        let active = rules::any_active(&scan.values);
        debug!(%category, active, "Indicator state");
        self.write(category, active.into());
        true
    }

    /// Read and classify the valid references of a category
    ///
    /// Returns None when the update is gated, nothing is configured, or no
    /// reference was valid. In all those cases nothing must be written.
    #[instrument(skip_all, fields(category = %category))]
    fn scan<T>(&self, category: Category, classify: impl Fn(&Value) -> T) -> Option<Scan<T>> {
        debug!("Updating");

        if self.gate.is_in_maintenance() {
            debug!("Maintenance mode is active, skipping");
            return None;
        }
        if category.is_mode_category() && self.gate.is_update_mode_disabled() {
            debug!("Update mode is disabled, skipping");
            return None;
        }

        let references = self.references.references(category);
        if references.is_empty() {
            debug!("No references configured");
            return None;
        }

        let mut scan = Scan {
            amount: 0,
            values: Vec::new(),
        };
        for reference in references.iter().filter(|r| r.enabled) {
            scan.amount += 1;
            if let Some(value) = self.resolve(reference) {
                scan.values.push(classify(&value));
            }
        }

        if scan.values.is_empty() {
            debug!(in_use = scan.amount, "No valid reference, leaving output unchanged");
            return None;
        }
        Some(scan)
    }

    /// Look up the value of an enabled reference, failing closed
    fn resolve(&self, reference: &ZoneReference) -> Option<Value> {
        let id = reference.id;
        if !id.is_assignable() {
            trace!(%id, "Skipping unassigned reference");
            return None;
        }
        match self.values.exists(id) {
            Ok(true) => {}
            Ok(false) => {
                trace!(%id, "Skipping reference to missing object");
                return None;
            }
            Err(e) => {
                trace!(%id, error = %e, "Existence check failed, treating as missing");
                return None;
            }
        }
        self.values
            .value(id)
            .map_err(|e| trace!(%id, error = %e, "Value lookup failed, treating as missing"))
            .ok()
    }

    fn write(&self, category: Category, value: SummaryValue) {
        self.sink.set_value(category.output_slot(), value);
    }
}
