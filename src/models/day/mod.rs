// Day module
// A single cell of a week or month grid

use chrono::NaiveDate;

use crate::utils::date::short_day_label;

/// One grid cell. Identity is the date; the label is computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
    label: String,
    /// Leading/trailing days of neighbouring months shown for layout continuity
    ignored: bool,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self::with_ignored(date, false)
    }

    pub fn with_ignored(date: NaiveDate, ignored: bool) -> Self {
        Self {
            date,
            label: short_day_label(date),
            ignored,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }
}
