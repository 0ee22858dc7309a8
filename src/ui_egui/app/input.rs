use super::MorphCalendarApp;
use crate::models::scope::Scope;
use crate::models::time_period::WindowIndex;
use crate::services::paging::release_slot;
use crate::services::transition::ease_out_cubic;
use egui::{Key, Pos2, Vec2};

/// Duration of the page strip settle animation, in seconds.
const PAGE_SETTLE_SECS: f32 = 0.2;

/// Pointer translation of the current header gesture.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct PointerTracker {
    origin: Option<Pos2>,
    translation: Vec2,
    /// Horizontal swipe owned by the pager
    paging: bool,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct PageSettle {
    from: f32,
    width: f32,
    elapsed: f32,
}

impl MorphCalendarApp {
    pub(super) fn handle_header_pointer(&mut self, ctx: &egui::Context, response: &egui::Response) {
        if response.drag_started() {
            self.pointer = PointerTracker {
                origin: ctx.input(|i| i.pointer.press_origin()),
                ..PointerTracker::default()
            };
            self.header.on_pointer_pressed();
        }

        if response.dragged() {
            let pos = response.interact_pointer_pos();
            if let (Some(origin), Some(pos)) = (self.pointer.origin, pos) {
                self.pointer.translation = pos - origin;
                let translation = self.pointer.translation;
                self.header.on_pointer_moved(translation.x, translation.y);
                self.pointer.paging = self.header.pointer_is_paging();
            }
        }

        if response.drag_stopped() {
            let velocity = ctx.input(|i| i.pointer.velocity());
            let translation = self.pointer.translation;

            if self.pointer.paging {
                let width = response.rect.width();
                let threshold = self.settings().velocity_threshold;
                let slot = release_slot(translation.x, velocity.x, width, threshold);
                self.header.on_page_selected(slot);
                self.page_settle = Some(PageSettle {
                    from: translation.x,
                    width,
                    elapsed: 0.0,
                });
            }

            self.header.on_pointer_released(translation.y, velocity.y);
            self.pointer = PointerTracker::default();
        }
    }

    /// Losing focus mid-drag is treated as a platform cancellation.
    pub(super) fn handle_focus_loss(&mut self, ctx: &egui::Context) {
        let focused = ctx.input(|i| i.focused);
        if !focused && self.pointer.origin.is_some() {
            log::debug!("Window lost focus during a header gesture");
            self.header.on_pointer_cancelled();
            self.pointer = PointerTracker::default();
        }
    }

    pub(super) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (escape, left, right, up, down, today) = ctx.input(|i| {
            (
                i.key_pressed(Key::Escape),
                i.key_pressed(Key::ArrowLeft),
                i.key_pressed(Key::ArrowRight),
                i.key_pressed(Key::ArrowUp),
                i.key_pressed(Key::ArrowDown),
                i.key_pressed(Key::T),
            )
        });

        if escape && self.pointer.origin.is_some() {
            self.header.on_pointer_cancelled();
            self.pointer = PointerTracker::default();
        }
        if self.page_settle.is_some() || self.header.is_dragging() {
            return;
        }

        if left {
            self.header.on_page_settled(WindowIndex::Previous);
        }
        if right {
            self.header.on_page_settled(WindowIndex::Next);
        }
        // Refusals are logged by the header
        if up {
            let _ = self.header.request_scope(Scope::Week);
        }
        if down {
            let _ = self.header.request_scope(Scope::Month);
        }
        if today {
            self.header.on_today_tapped();
        }
    }

    pub(super) fn advance_page_settle(&mut self, dt: f32) {
        let Some(settle) = self.page_settle.as_mut() else {
            return;
        };
        settle.elapsed += dt;
        if settle.elapsed >= PAGE_SETTLE_SECS {
            self.page_settle = None;
            let slot = self.header.active_slot();
            self.header.on_page_settled(slot);
        }
    }

    /// Horizontal shift of the page strip for this frame.
    pub(super) fn strip_offset(&self) -> f32 {
        if self.pointer.paging {
            return self.pointer.translation.x;
        }
        match self.page_settle {
            Some(settle) => {
                let eased = ease_out_cubic((settle.elapsed / PAGE_SETTLE_SECS).clamp(0.0, 1.0));
                let target = self.header.page_offset(settle.width);
                settle.from + (target - settle.from) * eased
            }
            None => 0.0,
        }
    }
}
