use chrono::{Local, NaiveDate};
use egui::{pos2, vec2, Align2, FontId, Painter, Pos2, Rect, Sense, Stroke};

use crate::models::day::Day;
use crate::models::scope::Scope;
use crate::models::time_period::{PeriodKind, TimePeriod};
use crate::services::header::{CalendarHeader, HeaderFrame};
use crate::services::transition::HeaderGeometry;
use crate::ui_egui::theme::CalendarTheme;

const TITLE_FONT_SIZE: f32 = 22.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const DAY_FONT_SIZE: f32 = 16.0;
const BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(64.0, 24.0);

/// What the user did on the header this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderViewAction {
    pub tapped: Option<NaiveDate>,
    pub today: bool,
    pub toggle_scope: bool,
}

/// Paints the title, weekday labels and the morphing day grid.
pub struct HeaderView<'a> {
    header: &'a CalendarHeader,
    theme: &'a CalendarTheme,
    /// Horizontal shift of the page strip while swiping
    strip_offset: f32,
}

impl<'a> HeaderView<'a> {
    pub fn new(header: &'a CalendarHeader, theme: &'a CalendarTheme, strip_offset: f32) -> Self {
        Self {
            header,
            theme,
            strip_offset,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> (egui::Response, HeaderViewAction) {
        let frame = self.header.frame();
        let geometry = *self.header.geometry();
        let width = ui.available_width();

        let (rect, response) =
            ui.allocate_exact_size(vec2(width, frame.height), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, self.theme.header_background);

        let layout = HeaderLayout::new(rect, &geometry, &frame);
        let mut action = HeaderViewAction::default();

        painter.text(
            layout.title.left_center(),
            Align2::LEFT_CENTER,
            self.header.title(),
            FontId::proportional(TITLE_FONT_SIZE),
            self.theme.text_primary,
        );

        let toggle_rect = Rect::from_center_size(
            pos2(layout.title.right() - BUTTON_SIZE.x / 2.0, layout.title.center().y),
            BUTTON_SIZE,
        );
        let toggle_label = match self.header.store().scope().opposite() {
            Scope::Month => "Month",
            Scope::Week | Scope::Transition => "Week",
        };
        action.toggle_scope = ui.put(toggle_rect, egui::Button::new(toggle_label)).clicked();

        let today_rect = toggle_rect.translate(vec2(-(BUTTON_SIZE.x + 8.0), 0.0));
        action.today = ui.put(today_rect, egui::Button::new("Today")).clicked();

        let symbols = self.header.store().calendar().weekday_symbols();
        for (column, symbol) in symbols.iter().enumerate() {
            painter.text(
                pos2(layout.column_center(column, 0.0), layout.labels.center().y),
                Align2::CENTER_CENTER,
                *symbol,
                FontId::proportional(LABEL_FONT_SIZE),
                self.theme.text_secondary,
            );
        }

        self.paint_grid(&painter.with_clip_rect(layout.grid), &layout, &frame, &geometry);
        self.paint_grabber(&painter, rect, &geometry);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                action.tapped = self.day_at(&layout, &frame, &geometry, pos);
            }
        }

        (response, action)
    }

    fn paint_grid(
        &self,
        painter: &Painter,
        layout: &HeaderLayout,
        frame: &HeaderFrame,
        geometry: &HeaderGeometry,
    ) {
        let selected = self.header.store().selected_date();
        let today = Local::now().date_naive();
        let radius = (geometry.row_height / 2.0 - 3.0)
            .min(layout.column_width / 2.0 - 2.0)
            .max(4.0);
        let top = layout.grid.top() + frame.grid_offset;

        for period in self.header.visible_window() {
            let shift = period.index().offset() as f32 * layout.grid.width() + self.strip_offset;
            let rows = layout_rows(period, geometry);
            self.paint_row_lines(painter, layout, top, shift, rows, geometry);
            for (row, week) in period.week_rows().enumerate() {
                let y = top + geometry.row_height * (row as f32 + 0.5);
                for (column, day) in week.iter().enumerate() {
                    let center = pos2(layout.column_center(column, shift), y);
                    self.paint_day(painter, center, radius, day, selected, today);
                }
            }
        }
    }

    /// Hairlines between rows, padding rows of short months included.
    fn paint_row_lines(
        &self,
        painter: &Painter,
        layout: &HeaderLayout,
        top: f32,
        shift: f32,
        rows: usize,
        geometry: &HeaderGeometry,
    ) {
        let left = layout.grid_left + shift;
        let right = left + layout.column_width * 7.0;
        let stroke = Stroke::new(0.5, self.theme.text_secondary.gamma_multiply(0.25));
        for row in 1..rows {
            let y = top + geometry.row_height * row as f32;
            painter.hline(left..=right, y, stroke);
        }
    }

    fn paint_day(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        day: &Day,
        selected: NaiveDate,
        today: NaiveDate,
    ) {
        let is_selected = day.date() == selected;
        let text_color = if is_selected {
            painter.circle_filled(center, radius, self.theme.selected_background);
            self.theme.selected_text
        } else if day.is_ignored() {
            self.theme.text_secondary
        } else {
            self.theme.text_primary
        };

        if day.date() == today && !is_selected {
            painter.circle_stroke(center, radius, Stroke::new(1.5, self.theme.today_border));
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            day.label(),
            FontId::proportional(DAY_FONT_SIZE),
            text_color,
        );
    }

    fn paint_grabber(&self, painter: &Painter, rect: Rect, geometry: &HeaderGeometry) {
        let center = pos2(rect.center().x, rect.bottom() - geometry.vertical_padding / 2.0);
        let grabber = Rect::from_center_size(center, vec2(36.0, 4.0));
        painter.rect_filled(grabber, 2.0, self.theme.grabber);
    }

    fn day_at(
        &self,
        layout: &HeaderLayout,
        frame: &HeaderFrame,
        geometry: &HeaderGeometry,
        pos: Pos2,
    ) -> Option<NaiveDate> {
        if !layout.grid.contains(pos) {
            return None;
        }
        let local = pos - pos2(layout.grid_left, layout.grid.top() + frame.grid_offset);
        let (row, column) = cell_at(local.x, local.y, layout.column_width, geometry.row_height)?;
        let current = &self.header.visible_window()[1];
        current.days().get(row * 7 + column).map(Day::date)
    }
}

/// Screen rectangles of the header parts for one frame.
struct HeaderLayout {
    title: Rect,
    labels: Rect,
    grid: Rect,
    grid_left: f32,
    column_width: f32,
}

impl HeaderLayout {
    fn new(rect: Rect, geometry: &HeaderGeometry, frame: &HeaderFrame) -> Self {
        let inner_width = (rect.width() - 2.0 * geometry.horizontal_padding).max(0.0);
        let grid_left = rect.left() + geometry.horizontal_padding;

        let title = Rect::from_min_size(
            pos2(grid_left, rect.top() + geometry.top_inset),
            vec2(inner_width, geometry.title_height),
        );
        let labels = Rect::from_min_size(
            pos2(grid_left, title.bottom() + geometry.vertical_padding),
            vec2(inner_width, geometry.week_label_height),
        );
        let grid = Rect::from_min_size(
            pos2(rect.left(), labels.bottom()),
            vec2(rect.width(), frame.grid_height),
        );

        Self {
            title,
            labels,
            grid,
            grid_left,
            column_width: inner_width / 7.0,
        }
    }

    fn column_center(&self, column: usize, shift: f32) -> f32 {
        self.grid_left + shift + self.column_width * (column as f32 + 0.5)
    }
}

/// Rows a period occupies on screen. Month grids shorter than the fixed
/// layout keep their padding rows so the grid height stays stable.
pub fn layout_rows(period: &TimePeriod, geometry: &HeaderGeometry) -> usize {
    match period.kind() {
        PeriodKind::Month => period.rows() + geometry.padding_rows(period.rows()),
        PeriodKind::Week => period.rows(),
    }
}

/// Row and column of the cell under a point given relative to the top-left
/// corner of the (offset) grid.
pub fn cell_at(x: f32, y: f32, column_width: f32, row_height: f32) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 || column_width <= 0.0 || row_height <= 0.0 {
        return None;
    }
    let column = (x / column_width) as usize;
    let row = (y / row_height) as usize;
    (column < 7).then_some((row, column))
}
