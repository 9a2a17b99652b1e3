//! Per-category outcome of a full update

use az_core::Category;

/// Results of one full update, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    results: Vec<(Category, bool)>,
}

impl UpdateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category, succeeded: bool) {
        self.results.push((category, succeeded));
    }

    /// The result of a category, if it ran
    pub fn get(&self, category: Category) -> Option<bool> {
        self.results
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, ok)| *ok)
    }

    /// True if every recorded update succeeded
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|(_, ok)| *ok)
    }

    /// Categories whose update failed, in execution order
    pub fn failed(&self) -> Vec<Category> {
        self.results
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(c, _)| *c)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, bool)> + '_ {
        self.results.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let mut report = UpdateReport::new();
        report.record(Category::ProtectionMode, true);
        report.record(Category::SystemState, false);
        report.record(Category::AlarmCall, true);

        assert_eq!(report.len(), 3);
        assert!(!report.all_succeeded());
        assert_eq!(report.failed(), vec![Category::SystemState]);
        assert_eq!(report.get(Category::AlarmCall), Some(true));
        assert_eq!(report.get(Category::AlarmLight), None);
    }

    #[test]
    fn test_empty_report_succeeds() {
        assert!(UpdateReport::new().all_succeeded());
    }
}
