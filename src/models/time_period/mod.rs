// Time period module
// A week or month worth of grid cells, positioned in a 3-wide paging window

use chrono::NaiveDate;

use super::day::Day;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Week,
    Month,
}

/// Slot of a period inside its sliding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowIndex {
    Previous,
    Current,
    Next,
}

impl WindowIndex {
    pub const ALL: [WindowIndex; 3] = [Self::Previous, Self::Current, Self::Next];

    /// Signed offset from the anchor: -1, 0 or +1.
    pub fn offset(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Current => 0,
            Self::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePeriod {
    kind: PeriodKind,
    /// Start of the week or first of the month this period represents
    anchor_date: NaiveDate,
    index: WindowIndex,
    days: Vec<Day>,
}

impl TimePeriod {
    pub(crate) fn new(
        kind: PeriodKind,
        anchor_date: NaiveDate,
        index: WindowIndex,
        days: Vec<Day>,
    ) -> Self {
        debug_assert!(!days.is_empty() && days.len() % 7 == 0);
        Self {
            kind,
            anchor_date,
            index,
            days,
        }
    }

    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    pub fn index(&self) -> WindowIndex {
        self.index
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn rows(&self) -> usize {
        self.days.len() / 7
    }

    /// Whether any cell, ignored or not, shows `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.iter().any(|day| day.date() == date)
    }

    pub fn week_rows(&self) -> impl Iterator<Item = &[Day]> {
        self.days.chunks(7)
    }
}

/// Zero-based row of the week that contains `date` within a grid, if shown.
pub fn week_row(days: &[Day], date: NaiveDate) -> Option<usize> {
    days.iter()
        .position(|day| day.date() == date)
        .map(|index| index / 7)
}
