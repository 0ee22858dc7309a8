//! Calendar store.
//!
//! Single source of truth for the header: the selected date, the week and
//! month anchors, the scope, and the two 3-wide paging windows built from
//! the anchors. Every mutation rebuilds both windows before it returns, and
//! a mutation whose dates cannot be resolved leaves the previous state in
//! place.

mod navigation;
mod subscription;

pub use subscription::{ChangeKind, StoreChange, StoreSubscriber, Subscription};

use chrono::{Local, NaiveDate};

use self::subscription::SubscriberList;
use crate::error::CalendarResult;
use crate::models::scope::Scope;
use crate::models::time_period::{week_row, TimePeriod};
use crate::services::grid::GridBuilder;
use crate::utils::date::{month_year_label, start_of_month, WeekCalendar};

/// Cloned, read-only view of the store for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub selected_date: NaiveDate,
    pub week_anchor: NaiveDate,
    pub month_anchor: NaiveDate,
    pub scope: Scope,
    pub weeks: [TimePeriod; 3],
    pub months: [TimePeriod; 3],
}

pub struct CalendarStore {
    grid: GridBuilder,
    selected_date: NaiveDate,
    /// Always a week start
    week_anchor: NaiveDate,
    /// Always the first of a month
    month_anchor: NaiveDate,
    scope: Scope,
    weeks: [TimePeriod; 3],
    months: [TimePeriod; 3],
    subscribers: SubscriberList,
}

impl CalendarStore {
    pub fn new(date: NaiveDate, scope: Scope, calendar: WeekCalendar) -> CalendarResult<Self> {
        let grid = GridBuilder::new(calendar);
        let week_anchor = calendar.start_of_week(date)?;
        let month_anchor = start_of_month(date);
        let weeks = grid.weeks_window(week_anchor)?;
        let months = grid.months_window(month_anchor)?;

        log::debug!(
            "Calendar store created on {} in {:?} scope (week {}, month {})",
            date,
            scope,
            week_anchor,
            month_anchor
        );

        Ok(Self {
            grid,
            selected_date: date,
            week_anchor,
            month_anchor,
            scope,
            weeks,
            months,
            subscribers: SubscriberList::default(),
        })
    }

    /// Store opened on today's local date.
    pub fn today(scope: Scope, calendar: WeekCalendar) -> CalendarResult<Self> {
        Self::new(Local::now().date_naive(), scope, calendar)
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn week_anchor(&self) -> NaiveDate {
        self.week_anchor
    }

    pub fn month_anchor(&self) -> NaiveDate {
        self.month_anchor
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn weeks(&self) -> &[TimePeriod; 3] {
        &self.weeks
    }

    pub fn months(&self) -> &[TimePeriod; 3] {
        &self.months
    }

    pub fn current_week(&self) -> &TimePeriod {
        &self.weeks[1]
    }

    pub fn current_month(&self) -> &TimePeriod {
        &self.months[1]
    }

    pub fn calendar(&self) -> &WeekCalendar {
        self.grid.calendar()
    }

    /// Row of the selected date's week inside the current month grid, 0 when
    /// the month grid does not show it.
    pub fn selected_week_row(&self) -> usize {
        week_row(self.current_month().days(), self.selected_date).unwrap_or(0)
    }

    pub fn title_label(&self) -> String {
        month_year_label(self.month_anchor)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            selected_date: self.selected_date,
            week_anchor: self.week_anchor,
            month_anchor: self.month_anchor,
            scope: self.scope,
            weeks: self.weeks.clone(),
            months: self.months.clone(),
        }
    }

    pub fn subscribe(&self, subscriber: StoreSubscriber) -> Subscription {
        self.subscribers.subscribe(subscriber)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Select a day. The week anchor follows the date; the month anchor only
    /// moves when the displayed month grid does not already show the date.
    pub fn select(&mut self, date: NaiveDate) -> CalendarResult<()> {
        let week_anchor = self.calendar().start_of_week(date)?;
        let month_visible = self.scope != Scope::Week && self.current_month().contains(date);
        let month_anchor = if month_visible {
            self.month_anchor
        } else {
            start_of_month(date)
        };

        self.rebuild(week_anchor, month_anchor)?;
        self.selected_date = date;
        log::debug!(
            "Selected {} (week {}, month {})",
            date,
            self.week_anchor,
            self.month_anchor
        );
        self.notify(ChangeKind::Selected);
        Ok(())
    }

    pub fn select_today(&mut self) -> CalendarResult<()> {
        self.select(Local::now().date_naive())
    }

    /// Build both windows from the given anchors and commit them together.
    /// Nothing is modified when either window fails to build.
    fn rebuild(&mut self, week_anchor: NaiveDate, month_anchor: NaiveDate) -> CalendarResult<()> {
        let week_anchor = self.calendar().start_of_week(week_anchor)?;
        let month_anchor = start_of_month(month_anchor);
        let weeks = self.grid.weeks_window(week_anchor)?;
        let months = self.grid.months_window(month_anchor)?;

        self.week_anchor = week_anchor;
        self.month_anchor = month_anchor;
        self.weeks = weeks;
        self.months = months;
        Ok(())
    }

    fn notify(&self, kind: ChangeKind) {
        self.subscribers.notify(&StoreChange {
            kind,
            selected_date: self.selected_date,
            week_anchor: self.week_anchor,
            month_anchor: self.month_anchor,
            scope: self.scope,
        });
    }
}
