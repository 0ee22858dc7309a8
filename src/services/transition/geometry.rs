use crate::error::CalendarResult;
use crate::models::scope::Scope;
use crate::models::settings::Settings;

/// Fixed layout metrics of the header, derived from validated settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderGeometry {
    pub row_height: f32,
    pub week_label_height: f32,
    pub title_height: f32,
    pub vertical_padding: f32,
    pub horizontal_padding: f32,
    pub top_inset: f32,
    pub max_rows: u32,
}

impl HeaderGeometry {
    pub fn from_settings(settings: &Settings) -> CalendarResult<Self> {
        settings.validate()?;
        Ok(Self {
            row_height: settings.row_height,
            week_label_height: settings.week_label_height,
            title_height: settings.title_height,
            vertical_padding: settings.vertical_padding,
            horizontal_padding: settings.horizontal_padding,
            top_inset: settings.top_inset,
            max_rows: settings.max_rows,
        })
    }

    /// Everything above and around the day grid.
    pub fn frame_height(&self) -> f32 {
        self.title_height + self.week_label_height + 2.0 * self.vertical_padding + self.top_inset
    }

    pub fn min_grid_height(&self) -> f32 {
        self.row_height
    }

    pub fn max_grid_height(&self) -> f32 {
        self.max_rows as f32 * self.row_height
    }

    pub fn min_calendar_height(&self) -> f32 {
        self.min_grid_height() + self.frame_height()
    }

    pub fn max_calendar_height(&self) -> f32 {
        self.max_grid_height() + self.frame_height()
    }

    /// Distance a drag travels between the collapsed and expanded header.
    pub fn max_translation(&self) -> f32 {
        self.max_grid_height() - self.min_grid_height()
    }

    pub fn base_height(&self, scope: Scope) -> f32 {
        match scope {
            Scope::Week => self.min_calendar_height(),
            Scope::Month | Scope::Transition => self.max_calendar_height(),
        }
    }

    pub fn calendar_height(&self, scope: Scope, delta: f32) -> f32 {
        (self.base_height(scope) + delta)
            .clamp(self.min_calendar_height(), self.max_calendar_height())
    }

    /// Height left for the day grid inside a header of `height`.
    pub fn grid_height(&self, height: f32) -> f32 {
        (height - self.frame_height()).max(self.min_grid_height())
    }

    /// Progress toward the opposite scope for a drag of `delta`.
    pub fn progress(&self, scope: Scope, delta: f32) -> f32 {
        let max_translation = self.max_translation();
        if max_translation <= 0.0 || !delta.is_finite() {
            return 0.0;
        }
        let ratio = delta / max_translation;
        match scope {
            Scope::Month => (-ratio).clamp(0.0, 1.0),
            Scope::Week => ratio.clamp(0.0, 1.0),
            Scope::Transition => 0.0,
        }
    }

    /// Vertical shift of the month grid that keeps the selected week's row in
    /// place while the rows around it collapse or expand.
    pub fn grid_offset(
        &self,
        scope: Scope,
        progress: f32,
        selected_row: usize,
        dragging: bool,
    ) -> f32 {
        let target = -(selected_row as f32) * self.row_height;
        match scope {
            Scope::Month => target * progress,
            Scope::Week if dragging => target * (1.0 - progress),
            Scope::Week | Scope::Transition => 0.0,
        }
    }

    /// Empty rows to append so a month grid of `rows` fills the fixed layout.
    pub fn padding_rows(&self, rows: usize) -> usize {
        (self.max_rows as usize).saturating_sub(rows)
    }
}

/// Progress value of a scope at rest.
pub fn resting_progress(scope: Scope) -> f32 {
    match scope {
        Scope::Week => 1.0,
        Scope::Month | Scope::Transition => 0.0,
    }
}
