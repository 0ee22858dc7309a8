use egui::RichText;

use crate::services::header::CalendarHeader;
use crate::ui_egui::theme::CalendarTheme;

const CARD_COUNT: usize = 24;

/// Scrolling list of placeholder cards under the header. When a scroll comes
/// to rest, the offset is passed through the header's snapping rule.
#[derive(Debug, Default)]
pub struct ContentList {
    last_offset: f32,
    /// Offset change per second, negative toward the top
    velocity: f32,
    scrolling: bool,
    pending_target: Option<f32>,
}

impl ContentList {
    pub fn show(&mut self, ui: &mut egui::Ui, header: &CalendarHeader, theme: &CalendarTheme) {
        let viewport_height = ui.available_height();
        let mut area = egui::ScrollArea::vertical()
            .id_source("content_list")
            .auto_shrink([false, false]);
        if let Some(target) = self.pending_target.take() {
            area = area.vertical_scroll_offset(target);
        }

        let output = area.show(ui, |ui| {
            for index in 0..CARD_COUNT {
                render_card(ui, index, theme);
            }
        });

        let offset = output.state.offset.y;
        let dt = ui.input(|i| i.stable_dt).max(1e-3);
        let pointer_down = ui.input(|i| i.pointer.any_down());

        if (offset - self.last_offset).abs() > 0.5 {
            self.velocity = (offset - self.last_offset) / dt;
            self.scrolling = true;
        } else if self.scrolling && !pointer_down {
            self.scrolling = false;
            let target = header.scroll_target(offset, viewport_height, self.velocity);
            if (target - offset).abs() > 0.5 {
                log::debug!("Snapping content list from {:.1} to {:.1}", offset, target);
                self.pending_target = Some(target);
                ui.ctx().request_repaint();
            }
        }
        self.last_offset = offset;
    }
}

fn render_card(ui: &mut egui::Ui, index: usize, theme: &CalendarTheme) {
    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(12.0))
        .outer_margin(egui::Margin::symmetric(16.0, 6.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("Card {}", index + 1)).strong());
            ui.label(RichText::new("Nothing scheduled").color(theme.text_secondary));
        });
}
