use super::input::PointerTracker;
use super::MorphCalendarApp;
use crate::models::settings::Settings;
use crate::services::header::CalendarHeader;
use crate::services::store::StoreChange;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{ContentList, HeaderView, HeaderViewAction};
use std::rc::Rc;

/// Longest frame step fed to animations, in seconds.
const MAX_FRAME_DT: f32 = 0.1;

impl MorphCalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        header: CalendarHeader,
    ) -> Self {
        let theme = CalendarTheme::for_settings(&settings);
        theme.apply_to_context(&cc.egui_ctx);

        let ctx = cc.egui_ctx.clone();
        let repaint = header.subscribe(Rc::new(move |change: &StoreChange| {
            log::trace!("Store changed ({:?}), repainting", change.kind);
            ctx.request_repaint();
        }));

        log::info!(
            "Loaded settings: theme={}, first_day_of_week={}, initial_scope={:?}",
            settings.theme,
            settings.first_day_of_week,
            settings.initial_scope
        );

        Self {
            header,
            settings,
            theme,
            pointer: PointerTracker::default(),
            page_settle: None,
            content_list: ContentList::default(),
            _repaint_on_change: repaint,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        self.header.tick(dt);
        self.advance_page_settle(dt);

        self.handle_focus_loss(ctx);
        self.handle_shortcuts(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.app_background))
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;

                let header_view = HeaderView::new(&self.header, &self.theme, self.strip_offset());
                let (response, action) = header_view.show(ui);
                self.handle_header_pointer(ctx, &response);
                self.apply_header_action(action);

                self.content_list.show(ui, &self.header, &self.theme);
            });

        if self.header.is_animating() || self.header.is_dragging() || self.page_settle.is_some() {
            ctx.request_repaint();
        }
    }

    fn apply_header_action(&mut self, action: HeaderViewAction) {
        if let Some(date) = action.tapped {
            self.header.on_date_tapped(date);
        }
        if action.today {
            self.header.on_today_tapped();
        }
        if action.toggle_scope {
            let target = self.header.store().scope().opposite();
            // Refusal is logged by the header
            let _ = self.header.request_scope(target);
        }
    }

    pub(super) fn settings(&self) -> &Settings {
        &self.settings
    }
}
