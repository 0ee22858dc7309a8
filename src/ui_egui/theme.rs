//! Theme module for the calendar header shell
//!
//! Defines the colours the header and the card list are painted with.

use egui::Color32;

use crate::models::settings::Settings;

/// Colours used by the header and the content list
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    pub app_background: Color32,
    pub header_background: Color32,

    /// Day numbers of the displayed month
    pub text_primary: Color32,

    /// Weekday labels and days outside the displayed month
    pub text_secondary: Color32,

    pub selected_background: Color32,
    pub selected_text: Color32,
    pub today_border: Color32,
    pub card_background: Color32,
    pub grabber: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(242, 242, 247),
            header_background: Color32::from_rgb(255, 255, 255),
            text_primary: Color32::from_rgb(28, 28, 30),
            text_secondary: Color32::from_rgb(142, 142, 147),
            selected_background: Color32::from_rgb(0, 122, 255),
            selected_text: Color32::WHITE,
            today_border: Color32::from_rgb(255, 59, 48),
            card_background: Color32::from_rgb(255, 255, 255),
            grabber: Color32::from_rgb(199, 199, 204),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(0, 0, 0),
            header_background: Color32::from_rgb(28, 28, 30),
            text_primary: Color32::from_rgb(242, 242, 247),
            text_secondary: Color32::from_rgb(99, 99, 102),
            selected_background: Color32::from_rgb(10, 132, 255),
            selected_text: Color32::WHITE,
            today_border: Color32::from_rgb(255, 69, 58),
            card_background: Color32::from_rgb(44, 44, 46),
            grabber: Color32::from_rgb(72, 72, 74),
        }
    }

    /// Theme named by the settings, or the system preference when
    /// `use_system_theme` is on.
    pub fn for_settings(settings: &Settings) -> Self {
        let theme_name = if settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => "Dark".to_string(),
                dark_light::Mode::Light => "Light".to_string(),
                dark_light::Mode::Default => settings.theme.clone(),
            }
        } else {
            settings.theme.clone()
        };
        Self::from_name(&theme_name)
    }

    pub fn from_name(name: &str) -> Self {
        if name.to_lowercase().contains("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
