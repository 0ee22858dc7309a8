mod input;
mod lifecycle;

use self::input::{PageSettle, PointerTracker};
use crate::models::settings::Settings;
use crate::services::header::CalendarHeader;
use crate::services::store::Subscription;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::ContentList;

pub struct MorphCalendarApp {
    header: CalendarHeader,
    settings: Settings,
    /// Currently applied theme colors
    theme: CalendarTheme,
    pointer: PointerTracker,
    /// Page strip animating onto a slot after a swipe
    page_settle: Option<PageSettle>,
    content_list: ContentList,
    /// Repaints the window whenever the store changes
    _repaint_on_change: Subscription,
}

impl eframe::App for MorphCalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
