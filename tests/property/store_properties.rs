// Window consistency of the store after random operation sequences

use chrono::{Days, NaiveDate};
use morph_calendar::models::scope::{Direction, Scope};
use morph_calendar::services::store::CalendarStore;
use morph_calendar::utils::date::{start_of_month, WeekCalendar};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Select(u64),
    Navigate(Direction),
    SetScope(Scope),
}

fn any_scope() -> impl Strategy<Value = Scope> {
    prop_oneof![Just(Scope::Week), Just(Scope::Month), Just(Scope::Transition)]
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0u64..1_500).prop_map(Operation::Select),
        prop_oneof![Just(Direction::Backward), Just(Direction::Forward)]
            .prop_map(Operation::Navigate),
        any_scope().prop_map(Operation::SetScope),
    ]
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn windows_follow_anchors(
        first_day in 0u8..7,
        operations in prop::collection::vec(operation(), 1..40),
    ) {
        let calendar = WeekCalendar::from_first_day_of_week(first_day);
        let mut store = CalendarStore::new(base_date(), Scope::Month, calendar).unwrap();

        for operation in operations {
            match operation {
                Operation::Select(offset) => store.select(base_date() + Days::new(offset)).unwrap(),
                Operation::Navigate(direction) => store.navigate(direction).unwrap(),
                Operation::SetScope(scope) => store.set_scope(scope).unwrap(),
            }

            let week_start = calendar.start_of_week(store.week_anchor()).unwrap();
            prop_assert_eq!(store.current_week().anchor_date(), week_start);
            let month_start = start_of_month(store.month_anchor());
            prop_assert_eq!(store.current_month().anchor_date(), month_start);
            prop_assert!(store.weeks()[0].anchor_date() < store.weeks()[1].anchor_date());
            prop_assert!(store.months()[1].anchor_date() < store.months()[2].anchor_date());
        }
    }

    #[test]
    fn set_scope_is_idempotent(
        offset in 0u64..1_500,
        scope in any_scope(),
    ) {
        let date = base_date() + Days::new(offset);
        let mut store = CalendarStore::new(date, Scope::Month, WeekCalendar::default()).unwrap();
        store.set_scope(scope).unwrap();
        let once = store.snapshot();
        store.set_scope(scope).unwrap();
        prop_assert_eq!(store.snapshot(), once);
    }
}
