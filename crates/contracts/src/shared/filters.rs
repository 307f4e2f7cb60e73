use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date bounds applied to every dashboard query.
///
/// A missing bound means the range is open on that side. The order of the
/// two bounds is never checked: a start after the end is sent as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Query parameter `data_inicio`
    pub start_date: Option<NaiveDate>,
    /// Query parameter `data_fim`
    pub end_date: Option<NaiveDate>,
}

impl FilterState {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Build the filter from the raw values of two `<input type="date">` fields.
    ///
    /// Blank or unparseable values are treated as absent.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start_date: parse_date_input(start),
            end_date: parse_date_input(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Ordered list of month inputs (`YYYY-MM`) of the comparative chart.
///
/// Display order is insertion order. The list never drops below one slot;
/// a slot may be empty while the user has not picked a month yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodList {
    slots: Vec<String>,
}

impl Default for PeriodList {
    fn default() -> Self {
        Self {
            slots: vec![String::new()],
        }
    }
}

impl PeriodList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Append an empty slot at the end.
    pub fn push_empty(&mut self) {
        self.slots.push(String::new());
    }

    /// Remove the last slot. Returns `false` and leaves the list untouched
    /// when only one slot is left.
    pub fn remove_last(&mut self) -> bool {
        if self.slots.len() <= 1 {
            return false;
        }
        self.slots.pop();
        true
    }

    /// Replace the value of slot `index`. Returns `false` for an unknown index.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value.into().trim().to_string();
                true
            }
            None => false,
        }
    }

    /// Non-empty period tokens in display order.
    pub fn selected(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inputs() {
        let filter = FilterState::from_inputs("2024-01-01", "");
        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.end_date, None);

        let filter = FilterState::from_inputs("  ", "31/12/2024");
        assert!(filter.is_unbounded());
    }

    #[test]
    fn test_reversed_range_is_kept() {
        let filter = FilterState::from_inputs("2024-12-31", "2024-01-01");
        assert!(filter.start_date > filter.end_date);
    }

    #[test]
    fn test_period_list_never_drops_below_one() {
        let mut periods = PeriodList::new();
        assert_eq!(periods.len(), 1);
        assert!(!periods.remove_last());
        assert_eq!(periods.len(), 1);

        periods.push_empty();
        periods.push_empty();
        assert_eq!(periods.len(), 3);
        assert!(periods.remove_last());
        assert!(periods.remove_last());
        assert!(!periods.remove_last());
        assert_eq!(periods.len(), 1);
    }

    #[test]
    fn test_selected_skips_empty_slots_and_keeps_order() {
        let mut periods = PeriodList::new();
        periods.push_empty();
        periods.push_empty();
        assert!(periods.set(0, "2024-03"));
        assert!(periods.set(2, "2024-01"));
        assert!(!periods.set(7, "2024-05"));

        assert_eq!(periods.selected(), vec!["2024-03", "2024-01"]);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut periods = PeriodList::new();
        periods.push_empty();
        periods.set(0, "2024-02");
        periods.set(1, "2024-02");
        assert_eq!(periods.selected().len(), 2);
    }
}
