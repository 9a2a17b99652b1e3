//! Classification and reduction rules of the summary categories
//!
//! Mode reductions are written as ordered rule tables. Rules are listed
//! from lowest to highest priority; every matching rule overwrites the
//! result, so the last match wins.

use az_core::{AlarmState, ProtectionMode, SystemDetailedState, SystemState};
use std::collections::HashMap;

/// Number of valid references per raw integer value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<i64, usize>,
}

impl Tally {
    pub fn from_values(values: &[i64]) -> Self {
        let mut counts = HashMap::new();
        for value in values {
            *counts.entry(*value).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, value: i64) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn any(&self, value: i64) -> bool {
        self.count(value) > 0
    }
}

/// One entry of a precedence table
pub struct Rule<S> {
    pub applies: fn(&Tally, usize) -> bool,
    pub state: S,
}

/// Evaluate a precedence table; `amount` is the number of references in use
pub fn resolve<S: Copy>(rules: &[Rule<S>], baseline: S, tally: &Tally, amount: usize) -> S {
    rules
        .iter()
        .filter(|rule| (rule.applies)(tally, amount))
        .last()
        .map(|rule| rule.state)
        .unwrap_or(baseline)
}

// Raw protection mode values
const PM_DISARMED: i64 = 0;
const PM_FULL: i64 = 1;
const PM_HULL: i64 = 2;
const PM_PARTIAL: i64 = 3;

const PROTECTION_MODE_RULES: [Rule<ProtectionMode>; 4] = [
    Rule {
        applies: |t, amount| t.count(PM_DISARMED) == amount,
        state: ProtectionMode::Disarmed,
    },
    Rule {
        applies: |t, amount| t.count(PM_FULL) == amount,
        state: ProtectionMode::Full,
    },
    Rule {
        applies: |t, amount| t.count(PM_HULL) == amount,
        state: ProtectionMode::Hull,
    },
    Rule {
        applies: |t, amount| t.count(PM_PARTIAL) == amount,
        state: ProtectionMode::Partial,
    },
];

/// Protection mode shared by all zones, or individual if they differ
///
/// `amount` counts every reference in use, including ones that did not
/// resolve, so a single unresolved zone yields `Individual`.
pub fn protection_mode(values: &[i64], amount: usize) -> ProtectionMode {
    resolve(
        &PROTECTION_MODE_RULES,
        ProtectionMode::Individual,
        &Tally::from_values(values),
        amount,
    )
}

// Raw system state values
const ST_ARMED: i64 = 1;
const ST_DELAYED_ARMED: i64 = 2;
const ST_PARTIAL_ARMED: i64 = 3;
const ST_DELAYED_PARTIAL_ARMED: i64 = 4;

const SYSTEM_STATE_RULES: [Rule<SystemState>; 2] = [
    Rule {
        applies: |t, _| t.any(ST_ARMED),
        state: SystemState::Armed,
    },
    Rule {
        applies: |t, _| t.any(ST_DELAYED_ARMED),
        state: SystemState::DelayedArmed,
    },
];

/// Coarse system state: delayed armed > armed > disarmed
pub fn system_state(values: &[i64]) -> SystemState {
    let tally = Tally::from_values(values);
    resolve(&SYSTEM_STATE_RULES, SystemState::Disarmed, &tally, values.len())
}

const SYSTEM_DETAILED_STATE_RULES: [Rule<SystemDetailedState>; 5] = [
    Rule {
        applies: |t, amount| t.any(ST_ARMED) && t.count(ST_ARMED) == amount,
        state: SystemDetailedState::Armed,
    },
    Rule {
        applies: |t, amount| t.any(ST_ARMED) && t.count(ST_ARMED) != amount,
        state: SystemDetailedState::PartialArmed,
    },
    Rule {
        applies: |t, _| t.any(ST_DELAYED_ARMED),
        state: SystemDetailedState::DelayedArmed,
    },
    Rule {
        applies: |t, _| t.any(ST_PARTIAL_ARMED),
        state: SystemDetailedState::PartialArmed,
    },
    Rule {
        applies: |t, _| t.any(ST_DELAYED_PARTIAL_ARMED),
        state: SystemDetailedState::DelayedPartialArmed,
    },
];

/// Detailed system state
///
/// | Priority | Condition | State |
/// |---|---|---|
/// | 5 | any delayed partial armed | DelayedPartialArmed |
/// | 4 | any partial armed | PartialArmed |
/// | 3 | any delayed armed | DelayedArmed |
/// | 2 | some but not all zones in use armed | PartialArmed |
/// | 1 | all zones in use armed | Armed |
/// | - | otherwise | Disarmed |
pub fn system_detailed_state(values: &[i64], amount: usize) -> SystemDetailedState {
    resolve(
        &SYSTEM_DETAILED_STATE_RULES,
        SystemDetailedState::Disarmed,
        &Tally::from_values(values),
        amount,
    )
}

const ALARM: i64 = 1;

pub fn alarm_state(values: &[i64]) -> AlarmState {
    if values.contains(&ALARM) {
        AlarmState::Alarm
    } else {
        AlarmState::Idle
    }
}

/// The last non-empty sensor name in list order, or empty
pub fn alerting_sensor(values: &[String]) -> String {
    values
        .iter()
        .rev()
        .find(|name| !name.is_empty())
        .cloned()
        .unwrap_or_default()
}

pub fn any_active(values: &[bool]) -> bool {
    values.iter().any(|v| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protection_mode_uniform() {
        assert_eq!(protection_mode(&[0, 0, 0], 3), ProtectionMode::Disarmed);
        assert_eq!(protection_mode(&[1, 1], 2), ProtectionMode::Full);
        assert_eq!(protection_mode(&[2], 1), ProtectionMode::Hull);
        assert_eq!(protection_mode(&[3, 3], 2), ProtectionMode::Partial);
    }

    #[test]
    fn test_protection_mode_mixed() {
        assert_eq!(protection_mode(&[1, 2], 2), ProtectionMode::Individual);
        assert_eq!(protection_mode(&[7, 7], 2), ProtectionMode::Individual);
    }

    #[test]
    fn test_protection_mode_counts_unresolved_references() {
        // Two zones in use, only one resolved
        assert_eq!(protection_mode(&[1], 2), ProtectionMode::Individual);
    }

    #[test]
    fn test_system_state() {
        assert_eq!(system_state(&[0, 0]), SystemState::Disarmed);
        assert_eq!(system_state(&[0, 1]), SystemState::Armed);
        assert_eq!(system_state(&[0, 2]), SystemState::DelayedArmed);
        assert_eq!(system_state(&[2, 0]), SystemState::DelayedArmed);
        assert_eq!(system_state(&[2, 1]), SystemState::DelayedArmed);
        assert_eq!(system_state(&[5]), SystemState::Disarmed);
    }

    #[test]
    fn test_system_detailed_state_armed() {
        assert_eq!(system_detailed_state(&[1, 1], 2), SystemDetailedState::Armed);
        assert_eq!(system_detailed_state(&[1, 0], 2), SystemDetailedState::PartialArmed);
        // An unresolved zone in use prevents "all armed"
        assert_eq!(system_detailed_state(&[1, 1], 3), SystemDetailedState::PartialArmed);
    }

    #[test]
    fn test_system_detailed_state_precedence() {
        assert_eq!(system_detailed_state(&[0], 1), SystemDetailedState::Disarmed);
        assert_eq!(system_detailed_state(&[1, 1, 3], 3), SystemDetailedState::PartialArmed);
        assert_eq!(system_detailed_state(&[1, 2], 2), SystemDetailedState::DelayedArmed);
        assert_eq!(system_detailed_state(&[2, 3], 2), SystemDetailedState::PartialArmed);
        assert_eq!(
            system_detailed_state(&[4, 3, 2, 1], 4),
            SystemDetailedState::DelayedPartialArmed
        );
    }

    #[test]
    fn test_alarm_state() {
        assert_eq!(alarm_state(&[0, 0]), AlarmState::Idle);
        assert_eq!(alarm_state(&[0, 1]), AlarmState::Alarm);
        assert_eq!(alarm_state(&[2, 3]), AlarmState::Idle);
    }

    #[test]
    fn test_alerting_sensor_keeps_last_non_empty() {
        let names: Vec<String> = ["", "Kitchen", "", "Hallway"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(alerting_sensor(&names), "Hallway");
        assert_eq!(alerting_sensor(&names[..3]), "Kitchen");
        assert_eq!(alerting_sensor(&[String::new()]), "");
    }

    #[test]
    fn test_any_active() {
        assert!(!any_active(&[false, false]));
        assert!(any_active(&[false, true, false]));
        assert!(!any_active(&[]));
    }
}
