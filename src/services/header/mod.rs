//! Calendar header facade.
//!
//! Owns the store, the transition engine, the drag recognizer and the pager,
//! and exposes the hooks the presentation layer calls. Hooks never surface
//! errors to the caller: a date that cannot be resolved leaves the previous
//! state in place and is logged as a warning, and an invalid scope change is
//! logged as an error and ignored. Only [`CalendarHeader::request_scope`]
//! returns its error, since it is a programmatic call.

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};
use crate::models::scope::{Direction, Scope};
use crate::models::settings::Settings;
use crate::models::time_period::{TimePeriod, WindowIndex};
use crate::services::paging::{release_slot, PagingController};
use crate::services::scroll::snap_scroll_target;
use crate::services::store::{CalendarStore, StoreSnapshot, StoreSubscriber, Subscription};
use crate::services::transition::{
    CommitDecision, DragRecognizer, HeaderGeometry, RecognizerEvent, TransitionEngine,
};
use crate::utils::date::WeekCalendar;

/// Everything the presentation layer needs to lay out one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderFrame {
    /// Scope whose window is on screen
    pub scope: Scope,
    pub progress: f32,
    /// Full header height, title and labels included
    pub height: f32,
    /// Vertical shift of the month grid inside its clip
    pub grid_offset: f32,
    pub grid_height: f32,
    /// Top inset of the content list below the header
    pub content_inset: f32,
    pub dragging: bool,
    pub settling: bool,
}

pub struct CalendarHeader {
    store: CalendarStore,
    engine: TransitionEngine,
    recognizer: DragRecognizer,
    pager: PagingController,
    velocity_threshold: f32,
}

impl CalendarHeader {
    /// Header opened on today's date.
    pub fn new(settings: &Settings) -> CalendarResult<Self> {
        settings.validate()?;
        let calendar = WeekCalendar::from_first_day_of_week(settings.first_day_of_week);
        let store = CalendarStore::today(settings.initial_scope, calendar)?;
        Self::with_store(settings, store)
    }

    pub fn with_date(settings: &Settings, date: NaiveDate) -> CalendarResult<Self> {
        settings.validate()?;
        let calendar = WeekCalendar::from_first_day_of_week(settings.first_day_of_week);
        let store = CalendarStore::new(date, settings.initial_scope, calendar)?;
        Self::with_store(settings, store)
    }

    fn with_store(settings: &Settings, store: CalendarStore) -> CalendarResult<Self> {
        let engine = TransitionEngine::new(settings)?;
        log::info!(
            "Calendar header ready: {:?} scope on {}",
            store.scope(),
            store.selected_date()
        );
        Ok(Self {
            store,
            engine,
            recognizer: DragRecognizer::new(settings.min_drag_distance),
            pager: PagingController::new(),
            velocity_threshold: settings.velocity_threshold,
        })
    }

    pub fn store(&self) -> &CalendarStore {
        &self.store
    }

    pub fn geometry(&self) -> &HeaderGeometry {
        self.engine.geometry()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn subscribe(&self, subscriber: StoreSubscriber) -> Subscription {
        self.store.subscribe(subscriber)
    }

    pub fn title(&self) -> String {
        self.store.title_label()
    }

    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    pub fn active_slot(&self) -> WindowIndex {
        self.pager.active_slot()
    }

    /// Window the pager should draw: the week strip at rest in Week scope and
    /// for drags that do not morph, months otherwise.
    pub fn visible_window(&self) -> &[TimePeriod; 3] {
        match self.engine.display_scope(self.store.scope()) {
            Scope::Week => self.store.weeks(),
            Scope::Month | Scope::Transition => self.store.months(),
        }
    }

    pub fn on_date_tapped(&mut self, date: NaiveDate) {
        if self.engine.is_morphing() {
            log::debug!("Ignoring tap on {} during a drag", date);
            return;
        }
        let result = self.store.select(date);
        self.report("select", result);
    }

    pub fn on_today_tapped(&mut self) {
        let result = self.store.select_today();
        self.report("select today", result);
    }

    pub fn on_pointer_pressed(&mut self) {
        self.recognizer.pointer_pressed();
    }

    /// Raw pointer translation since the press. Only near-vertical motion
    /// past the minimum distance reaches the transition engine.
    pub fn on_pointer_moved(&mut self, dx: f32, dy: f32) {
        for event in self.recognizer.pointer_moved(dx, dy) {
            if let RecognizerEvent::Changed(delta) = event {
                self.on_drag_changed(delta);
            }
        }
    }

    pub fn on_pointer_released(&mut self, dy: f32, velocity_y: f32) {
        if let Some(RecognizerEvent::Ended(delta)) = self.recognizer.pointer_released(dy) {
            self.on_drag_ended(delta, velocity_y);
        }
    }

    pub fn on_pointer_cancelled(&mut self) {
        if self.recognizer.cancel().is_some() {
            self.on_drag_cancelled();
        }
    }

    /// Whether the current pointer gesture belongs to the horizontal pager.
    pub fn pointer_is_paging(&self) -> bool {
        self.recognizer.is_rejected()
    }

    /// Feed a drag sample. The store enters Transition only while the grid
    /// actually morphs; an upward drag from Week leaves it resting.
    pub fn on_drag_changed(&mut self, delta: f32) {
        let result = self.engine.drag_changed(self.store.scope(), delta);
        if self.report("drag", result).is_none() || !self.engine.is_dragging() {
            return;
        }
        let scope = self.engine.display_scope(self.store.scope());
        let result = self.store.set_scope(scope);
        self.report("update drag scope", result);
    }

    pub fn on_drag_ended(&mut self, delta: f32, velocity: f32) -> Option<CommitDecision> {
        let selected_row = self.store.selected_week_row();
        match self.engine.drag_ended(self.store.scope(), delta, velocity, selected_row) {
            Ok(decision) => {
                // No-op when the store never left the target scope
                let result = self.store.set_scope(decision.target);
                self.report("commit scope", result);
                Some(decision)
            }
            Err(err) => {
                self.report::<()>("end drag", Err(err));
                None
            }
        }
    }

    pub fn on_drag_cancelled(&mut self) {
        if let Some(origin) = self.engine.drag_cancelled() {
            let result = self.store.set_scope(origin);
            self.report("restore scope", result);
        }
    }

    /// The pager is showing or animating to `slot`.
    pub fn on_page_selected(&mut self, slot: WindowIndex) {
        self.pager.select(slot);
    }

    pub fn on_page_settled(&mut self, slot: WindowIndex) -> Option<Direction> {
        let result = self.pager.on_page_settled(slot, &mut self.store);
        self.report("page", result).flatten()
    }

    /// Horizontal swipe released after `dx` at velocity `vx` on pages
    /// `width` wide.
    pub fn on_page_released(&mut self, dx: f32, vx: f32, width: f32) -> Option<Direction> {
        let slot = release_slot(dx, vx, width, self.velocity_threshold);
        self.on_page_settled(slot)
    }

    pub fn page_offset(&self, width: f32) -> f32 {
        self.pager.page_offset(width)
    }

    /// Programmatic scope change. Refused while a drag owns the scope.
    pub fn request_scope(&mut self, scope: Scope) -> CalendarResult<()> {
        if self.engine.is_dragging() || !scope.is_resting() {
            let err = CalendarError::InvalidStateTransition {
                from: self.store.scope(),
                to: scope,
            };
            log::error!("{err}");
            return Err(err);
        }
        self.engine.finish_settling();
        self.store.set_scope(scope)
    }

    /// Advance animations by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.engine.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_settling()
    }

    pub fn frame(&self) -> HeaderFrame {
        let transition = self.engine.frame(self.store.scope(), self.store.selected_week_row());
        HeaderFrame {
            scope: self.engine.display_scope(self.store.scope()),
            progress: transition.progress,
            height: transition.height,
            grid_offset: transition.grid_offset,
            grid_height: self.geometry().grid_height(transition.height),
            content_inset: transition.height,
            dragging: transition.dragging,
            settling: transition.settling,
        }
    }

    /// Snap a proposed content list scroll target for a viewport of
    /// `viewport_height`.
    pub fn scroll_target(&self, proposed: f32, viewport_height: f32, velocity_y: f32) -> f32 {
        snap_scroll_target(proposed, self.geometry().max_translation(), viewport_height, velocity_y)
    }

    fn report<T>(&self, action: &str, result: CalendarResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err @ CalendarError::InvalidStateTransition { .. }) => {
                log::error!("Ignoring {action}: {err}");
                None
            }
            Err(err) => {
                log::warn!("Keeping previous state after failed {action}: {err}");
                None
            }
        }
    }
}
