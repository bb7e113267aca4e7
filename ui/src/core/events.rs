//! Static notable-event table keyed by month index since birth.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LifeEvents {
    by_month: BTreeMap<u32, String>,
}

impl LifeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milestones shown for every profile.
    pub fn milestones() -> Self {
        let mut events = Self::new();
        events.insert(0, "Born");
        events.insert(6 * 12, "First day of school");
        events.insert(18 * 12, "Coming of age");
        events.insert(30 * 12, "Thirtieth birthday");
        events.insert(50 * 12, "Half a century");
        events.insert(65 * 12, "Retirement age");
        events
    }

    pub fn insert(&mut self, month_index: u32, label: impl Into<String>) {
        self.by_month.insert(month_index, label.into());
    }

    pub fn get(&self, month_index: u32) -> Option<&str> {
        self.by_month.get(&month_index).map(String::as_str)
    }

    pub fn contains(&self, month_index: u32) -> bool {
        self.by_month.contains_key(&month_index)
    }

    pub fn len(&self) -> usize {
        self.by_month.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_month.is_empty()
    }
}
