// Date utility functions
// Thin calendar arithmetic layer over chrono, parameterised by the first weekday

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::{CalendarError, CalendarResult};

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists for every month chrono can represent
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = start_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        // Last representable month; chrono stops at Dec 31 of its max year
        None => 31,
    }
}

/// Short label rendered inside a grid cell ("1", "14", "31").
pub fn short_day_label(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}

/// Title label for a month ("February 2024").
pub fn month_year_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn weekday_from_index(index: u8) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Week-aware calendar arithmetic.
///
/// Everything that depends on where a week starts goes through this type so
/// the grid, the store and the labels agree on the locale's first weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCalendar {
    first_weekday: Weekday,
}

impl Default for WeekCalendar {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl WeekCalendar {
    pub fn new(first_weekday: Weekday) -> Self {
        Self { first_weekday }
    }

    /// Build from the settings encoding: 0 = Sunday .. 6 = Saturday.
    pub fn from_first_day_of_week(first_day_of_week: u8) -> Self {
        Self::new(weekday_from_index(first_day_of_week))
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Column of `date` in a week row, 0 being the first weekday.
    pub fn weekday_index(&self, date: NaiveDate) -> u32 {
        let day = date.weekday().num_days_from_sunday();
        let first = self.first_weekday.num_days_from_sunday();
        (day + 7 - first) % 7
    }

    pub fn start_of_week(&self, date: NaiveDate) -> CalendarResult<NaiveDate> {
        let offset = self.weekday_index(date);
        date.checked_sub_days(Days::new(offset as u64)).ok_or_else(|| {
            CalendarError::date_resolution(format!("finding the week start of {date}"))
        })
    }

    pub fn add_days(&self, date: NaiveDate, days: i64) -> CalendarResult<NaiveDate> {
        let shifted = if days >= 0 {
            date.checked_add_days(Days::new(days as u64))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.ok_or_else(|| {
            CalendarError::date_resolution(format!("adding {days} day(s) to {date}"))
        })
    }

    pub fn add_weeks(&self, date: NaiveDate, weeks: i64) -> CalendarResult<NaiveDate> {
        weeks
            .checked_mul(7)
            .ok_or_else(|| {
                CalendarError::date_resolution(format!("adding {weeks} week(s) to {date}"))
            })
            .and_then(|days| self.add_days(date, days))
    }

    /// Shift by whole months, clamping the day to the target month's length.
    pub fn add_months(&self, date: NaiveDate, months: i32) -> CalendarResult<NaiveDate> {
        let shifted = if months >= 0 {
            date.checked_add_months(Months::new(months as u32))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.ok_or_else(|| {
            CalendarError::date_resolution(format!("adding {months} month(s) to {date}"))
        })
    }

    /// Short weekday names in display order, starting at the first weekday.
    pub fn weekday_symbols(&self) -> [&'static str; 7] {
        const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        let first = self.first_weekday.num_days_from_sunday() as usize;
        std::array::from_fn(|i| NAMES[(first + i) % 7])
    }
}
