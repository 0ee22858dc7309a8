use super::{CalendarStore, ChangeKind};
use crate::error::CalendarResult;
use crate::models::scope::{Direction, Scope};
use crate::models::time_period::WindowIndex;
use crate::utils::date::start_of_month;

impl CalendarStore {
    /// Page one week (Week scope) or one month (Month scope) in `direction`,
    /// then re-derive the other anchor. Both windows are rebuilt whatever
    /// the scope.
    pub fn navigate(&mut self, direction: Direction) -> CalendarResult<()> {
        let calendar = *self.calendar();
        let (week_anchor, month_anchor) = match self.scope {
            Scope::Week => {
                let week_anchor = calendar.add_weeks(self.week_anchor, direction.step() as i64)?;
                let shows_selection = self
                    .grid
                    .build_week(week_anchor, WindowIndex::Current)
                    .map(|week| week.contains(self.selected_date))?;
                let month_anchor = if shows_selection {
                    start_of_month(self.selected_date)
                } else {
                    start_of_month(week_anchor)
                };
                (week_anchor, month_anchor)
            }
            Scope::Month => {
                let month_anchor = calendar.add_months(self.month_anchor, direction.step())?;
                let shows_selection = self
                    .grid
                    .build_month(month_anchor, WindowIndex::Current)
                    .map(|month| month.contains(self.selected_date))?;
                let week_anchor = if shows_selection {
                    calendar.start_of_week(self.selected_date)?
                } else {
                    calendar.start_of_week(month_anchor)?
                };
                (week_anchor, month_anchor)
            }
            Scope::Transition => {
                log::debug!(
                    "Navigation {:?} requested mid-transition; refreshing windows only",
                    direction
                );
                (self.week_anchor, self.month_anchor)
            }
        };

        self.rebuild(week_anchor, month_anchor)?;
        log::debug!(
            "Navigated {:?} in {:?} scope (week {}, month {})",
            direction,
            self.scope,
            self.week_anchor,
            self.month_anchor
        );
        self.notify(ChangeKind::Navigated(direction));
        Ok(())
    }

    /// Change the resting scope. Entering Week lines the month anchor up with
    /// the displayed week; entering Month lines the week anchor up with the
    /// displayed month. Transition changes nothing but the tag.
    pub fn set_scope(&mut self, scope: Scope) -> CalendarResult<()> {
        if self.scope == scope {
            return Ok(());
        }

        let from = self.scope;
        self.scope = scope;

        let result = match scope {
            Scope::Week => {
                let month_anchor = if self.current_week().contains(self.selected_date) {
                    start_of_month(self.selected_date)
                } else {
                    start_of_month(self.current_week().anchor_date())
                };
                self.rebuild(self.week_anchor, month_anchor)
            }
            Scope::Month => {
                let calendar = *self.calendar();
                let week_anchor = if self.current_month().contains(self.selected_date) {
                    calendar.start_of_week(self.selected_date)
                } else {
                    calendar.start_of_week(self.current_month().anchor_date())
                };
                week_anchor.and_then(|week_anchor| self.rebuild(week_anchor, self.month_anchor))
            }
            Scope::Transition => Ok(()),
        };

        log::debug!("Scope changed {:?} -> {:?}", from, scope);
        self.notify(ChangeKind::ScopeChanged { from });
        result
    }
}
