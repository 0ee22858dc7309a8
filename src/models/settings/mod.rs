// Settings module
// Geometry and gesture constants for the calendar header

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::models::scope::Scope;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub use_system_theme: bool,
    pub first_day_of_week: u8,
    pub initial_scope: Scope,
    /// Height of one week row of the day grid
    pub row_height: f32,
    pub week_label_height: f32,
    pub title_height: f32,
    pub vertical_padding: f32,
    pub horizontal_padding: f32,
    /// Safe-area inset above the title
    pub top_inset: f32,
    /// Rows reserved for the expanded month grid
    pub max_rows: u32,
    /// Fraction of the collapsible distance a drag must cover to commit
    pub translation_threshold_ratio: f32,
    /// Release velocity (points/sec) that commits regardless of distance
    pub velocity_threshold: f32,
    /// Travel before a vertical drag is recognised
    pub min_drag_distance: f32,
    pub settle_duration_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            use_system_theme: false,
            first_day_of_week: 0, // Sunday
            initial_scope: Scope::Month,
            row_height: 38.0,
            week_label_height: 20.0,
            title_height: 44.0,
            vertical_padding: 5.0,
            horizontal_padding: 16.0,
            top_inset: 0.0,
            max_rows: 6,
            translation_threshold_ratio: 0.5,
            velocity_threshold: 800.0,
            min_drag_distance: 35.0,
            settle_duration_ms: 250,
        }
    }
}

impl Settings {
    /// Validate every constant the header depends on.
    pub fn validate(&self) -> CalendarResult<()> {
        positive("row_height", self.row_height)?;
        positive("velocity_threshold", self.velocity_threshold)?;
        non_negative("week_label_height", self.week_label_height)?;
        non_negative("title_height", self.title_height)?;
        non_negative("vertical_padding", self.vertical_padding)?;
        non_negative("horizontal_padding", self.horizontal_padding)?;
        non_negative("top_inset", self.top_inset)?;
        non_negative("min_drag_distance", self.min_drag_distance)?;

        if self.max_rows == 0 {
            return Err(CalendarError::configuration(
                "max_rows",
                "the month grid needs at least one row",
            ));
        }

        if !(self.translation_threshold_ratio > 0.0 && self.translation_threshold_ratio <= 1.0) {
            return Err(CalendarError::configuration(
                "translation_threshold_ratio",
                format!("{} is outside (0, 1]", self.translation_threshold_ratio),
            ));
        }

        if self.first_day_of_week > 6 {
            return Err(CalendarError::configuration(
                "first_day_of_week",
                format!(
                    "{} is not a weekday index (0 = Sunday .. 6 = Saturday)",
                    self.first_day_of_week
                ),
            ));
        }

        if !self.initial_scope.is_resting() {
            return Err(CalendarError::configuration(
                "initial_scope",
                "the header must start in Week or Month scope",
            ));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> CalendarResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalendarError::configuration(
            field,
            format!("{value} must be a finite value greater than zero"),
        ))
    }
}

fn non_negative(field: &'static str, value: f32) -> CalendarResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalendarError::configuration(
            field,
            format!("{value} must be a finite, non-negative value"),
        ))
    }
}
