// Test fixtures - reusable test data
// Provides consistent dates, settings and headers across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use morph_calendar::models::scope::Scope;
use morph_calendar::models::settings::Settings;
use morph_calendar::services::header::CalendarHeader;
use morph_calendar::services::store::CalendarStore;
use morph_calendar::utils::date::WeekCalendar;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Feb 14, 2024 (a Wednesday; Feb 1 2024 is a Thursday)
    pub fn valentine_2024() -> NaiveDate {
        ymd(2024, 2, 14)
    }

    /// Mar 12, 2024
    pub fn mid_march_2024() -> NaiveDate {
        ymd(2024, 3, 12)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }

    /// Dec 31, 2024, for year boundaries
    pub fn new_years_eve_2024() -> NaiveDate {
        ymd(2024, 12, 31)
    }
}

/// Settings variants
pub mod settings {
    use super::*;

    /// Defaults with the settle animation disabled so scope changes land at
    /// rest immediately.
    pub fn instant(scope: Scope) -> Settings {
        Settings {
            initial_scope: scope,
            settle_duration_ms: 0,
            ..Settings::default()
        }
    }

    pub fn monday_first(scope: Scope) -> Settings {
        Settings {
            first_day_of_week: 1,
            ..instant(scope)
        }
    }
}

pub fn store(date: NaiveDate, scope: Scope) -> CalendarStore {
    CalendarStore::new(date, scope, WeekCalendar::default()).unwrap()
}

pub fn header(date: NaiveDate, scope: Scope) -> CalendarHeader {
    CalendarHeader::with_date(&settings::instant(scope), date).unwrap()
}
