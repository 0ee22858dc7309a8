//! Grid builder.
//!
//! Produces the day cells for one week or one month. Month grids cover the
//! full weeks that overlap the month and are left at their natural size of
//! 5 or 6 rows. A 28-day month starting on the first weekday gets a trailing
//! week of ignored days. Padding to a fixed row count is the layout's job.

use chrono::NaiveDate;

use crate::error::CalendarResult;
use crate::models::day::Day;
use crate::models::time_period::{PeriodKind, TimePeriod, WindowIndex};
use crate::utils::date::{days_in_month, start_of_month, WeekCalendar};

/// Fewest cells a month grid carries.
const MIN_MONTH_CELLS: i64 = 35;

#[derive(Debug, Clone, Copy, Default)]
pub struct GridBuilder {
    calendar: WeekCalendar,
}

impl GridBuilder {
    pub fn new(calendar: WeekCalendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &WeekCalendar {
        &self.calendar
    }

    /// Seven consecutive days starting at the week start of `anchor`.
    pub fn build_week(&self, anchor: NaiveDate, index: WindowIndex) -> CalendarResult<TimePeriod> {
        let start = self.calendar.start_of_week(anchor)?;
        let days = (0..7)
            .map(|offset| self.calendar.add_days(start, offset).map(Day::new))
            .collect::<CalendarResult<Vec<_>>>()?;
        Ok(TimePeriod::new(PeriodKind::Week, start, index, days))
    }

    /// The month of `anchor`, padded with ignored days to whole weeks.
    pub fn build_month(&self, anchor: NaiveDate, index: WindowIndex) -> CalendarResult<TimePeriod> {
        let first = start_of_month(anchor);
        let month_len = days_in_month(first) as i64;
        let leading = self.calendar.weekday_index(first) as i64;
        let trailing = (7 - (leading + month_len) % 7) % 7;
        let total = (leading + month_len + trailing).max(MIN_MONTH_CELLS);

        let days = (0..total)
            .map(|slot| {
                let offset = slot - leading;
                let ignored = offset < 0 || offset >= month_len;
                self.calendar
                    .add_days(first, offset)
                    .map(|date| Day::with_ignored(date, ignored))
            })
            .collect::<CalendarResult<Vec<_>>>()?;

        Ok(TimePeriod::new(PeriodKind::Month, first, index, days))
    }

    /// Previous/current/next weeks around `anchor`.
    pub fn weeks_window(&self, anchor: NaiveDate) -> CalendarResult<[TimePeriod; 3]> {
        let [previous, current, next] = WindowIndex::ALL;
        Ok([
            self.build_week(self.calendar.add_weeks(anchor, previous.offset() as i64)?, previous)?,
            self.build_week(anchor, current)?,
            self.build_week(self.calendar.add_weeks(anchor, next.offset() as i64)?, next)?,
        ])
    }

    /// Previous/current/next months around `anchor`.
    pub fn months_window(&self, anchor: NaiveDate) -> CalendarResult<[TimePeriod; 3]> {
        let first = start_of_month(anchor);
        let [previous, current, next] = WindowIndex::ALL;
        Ok([
            self.build_month(self.calendar.add_months(first, previous.offset())?, previous)?,
            self.build_month(first, current)?,
            self.build_month(self.calendar.add_months(first, next.offset())?, next)?,
        ])
    }
}
