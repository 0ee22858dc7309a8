// Properties of the week and month grids for arbitrary dates

use chrono::{Datelike, Days, NaiveDate};
use morph_calendar::models::time_period::WindowIndex;
use morph_calendar::services::grid::GridBuilder;
use morph_calendar::utils::date::{days_in_month, start_of_month, WeekCalendar};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 .. roughly 2100
    let start = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    (0u64..73_000).prop_map(move |offset| start + Days::new(offset))
}

proptest! {
    #[test]
    fn month_grid_covers_whole_weeks(date in any_date(), first_day in 0u8..7) {
        let grid = GridBuilder::new(WeekCalendar::from_first_day_of_week(first_day));
        let month = grid.build_month(date, WindowIndex::Current).unwrap();
        let days = month.days();

        prop_assert_eq!(days.len() % 7, 0);
        prop_assert!(days.len() == 35 || days.len() == 42);

        let shown = days.iter().filter(|day| !day.is_ignored()).count();
        prop_assert_eq!(shown as u32, days_in_month(date));

        // Non-ignored days form one contiguous run starting at the 1st
        let first = days.iter().position(|day| !day.is_ignored()).unwrap();
        let run = &days[first..first + shown];
        prop_assert!(run.iter().all(|day| !day.is_ignored()));
        prop_assert_eq!(run[0].date(), start_of_month(date));
        prop_assert!(days[first + shown..].iter().all(|day| day.is_ignored()));
        prop_assert_eq!(days[0].date().weekday(), grid.calendar().first_weekday());
    }

    #[test]
    fn week_grid_is_seven_consecutive_days(date in any_date(), first_day in 0u8..7) {
        let calendar = WeekCalendar::from_first_day_of_week(first_day);
        let week = GridBuilder::new(calendar).build_week(date, WindowIndex::Current).unwrap();
        let days = week.days();

        prop_assert_eq!(days.len(), 7);
        prop_assert_eq!(days[0].date(), calendar.start_of_week(date).unwrap());
        for pair in days.windows(2) {
            prop_assert_eq!(pair[0].date().succ_opt(), Some(pair[1].date()));
        }
        prop_assert!(days.iter().all(|day| !day.is_ignored()));
        prop_assert!(week.contains(date));
    }
}
