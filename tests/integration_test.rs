// Integration tests for the calendar header core
// Drives the store, transition engine and pager through the header hooks

mod fixtures;

use fixtures::dates::{self, ymd};
use morph_calendar::models::scope::{Direction, Scope};
use morph_calendar::models::settings::Settings;
use morph_calendar::models::time_period::WindowIndex;
use morph_calendar::services::header::CalendarHeader;
use morph_calendar::services::store::{ChangeKind, StoreChange, Subscription};
use morph_calendar::services::transition::{GestureState, TransitionEngine};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn record_changes(header: &CalendarHeader) -> (Rc<RefCell<Vec<ChangeKind>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = header.subscribe(Rc::new(move |change: &StoreChange| {
        sink.borrow_mut().push(change.kind);
    }));
    (seen, subscription)
}

#[test]
fn test_month_grid_around_valentines_day() {
    let store = fixtures::store(dates::valentine_2024(), Scope::Month);
    let month = store.current_month();

    let valentine = month
        .days()
        .iter()
        .find(|day| day.date() == dates::valentine_2024())
        .expect("Feb 14 shown");
    assert!(!valentine.is_ignored());

    let first = &month.days()[0];
    assert_eq!(first.date(), ymd(2024, 1, 28));
    assert!(first.is_ignored());

    let leading = month.days().iter().take_while(|day| day.is_ignored()).count();
    assert_eq!(leading, 4);
}

#[test]
fn test_full_upward_drag_commits_to_week() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Month);
    let max_translation = header.geometry().max_translation();

    header.on_drag_changed(-max_translation);
    assert_eq!(header.frame().progress, 1.0);
    header.on_drag_ended(-max_translation, 0.0);

    assert_eq!(header.store().scope(), Scope::Week);
    let frame = header.frame();
    assert_eq!(frame.progress, 1.0);
    assert!(!frame.dragging);
    assert_eq!(frame.height, header.geometry().min_calendar_height());
}

#[test]
fn test_small_downward_drag_reverts_to_week() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Week);

    header.on_drag_changed(10.0);
    header.on_drag_ended(10.0, 0.0);

    assert_eq!(header.store().scope(), Scope::Week);
    assert_eq!(header.frame().height, header.geometry().min_calendar_height());
    assert_eq!(header.frame().progress, 1.0);
}

#[test]
fn test_navigate_forward_from_march() {
    let mut store = fixtures::store(dates::mid_march_2024(), Scope::Month);
    store.navigate(Direction::Forward).unwrap();

    assert_eq!(store.month_anchor(), ymd(2024, 4, 1));
    let anchors: Vec<_> = store.months().iter().map(|m| m.anchor_date()).collect();
    assert_eq!(anchors, vec![ymd(2024, 3, 1), ymd(2024, 4, 1), ymd(2024, 5, 1)]);
}

#[test]
fn test_page_settles_on_next_in_week_scope() {
    let mut header = fixtures::header(dates::mid_march_2024(), Scope::Week);
    let (seen, _subscription) = record_changes(&header);

    header.on_page_selected(WindowIndex::Next);
    assert_eq!(header.active_slot(), WindowIndex::Next);
    let direction = header.on_page_settled(WindowIndex::Next);

    assert_eq!(direction, Some(Direction::Forward));
    assert_eq!(seen.borrow().as_slice(), &[ChangeKind::Navigated(Direction::Forward)]);
    assert_eq!(header.active_slot(), WindowIndex::Current);
    assert_eq!(header.store().week_anchor(), ymd(2024, 3, 17));
}

#[test]
fn test_drag_notifies_scope_changes() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Month);
    let (seen, _subscription) = record_changes(&header);

    header.on_drag_changed(-50.0);
    header.on_drag_changed(-120.0);
    header.on_drag_ended(-120.0, 0.0);

    assert_eq!(
        seen.borrow().as_slice(),
        &[
            ChangeKind::ScopeChanged { from: Scope::Month },
            ChangeKind::ScopeChanged { from: Scope::Transition },
        ]
    );
}

#[test]
fn test_upward_drag_in_week_scope_is_not_a_drag() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Week);
    let (seen, _subscription) = record_changes(&header);

    header.on_drag_changed(-60.0);
    assert_eq!(header.store().scope(), Scope::Week);
    assert_eq!(header.snapshot().scope, Scope::Week);
    assert_eq!(header.visible_window()[1].anchor_date(), ymd(2024, 2, 11));
    assert_eq!(header.frame().height, header.geometry().min_calendar_height());

    let decision = header.on_drag_ended(-60.0, 0.0).unwrap();
    assert!(!decision.committed());
    assert_eq!(header.store().scope(), Scope::Week);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_month_drag_keeps_selected_row_anchored() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Month);
    assert_eq!(header.store().selected_week_row(), 2);

    header.on_drag_changed(-95.0);
    let frame = header.frame();
    assert_eq!(frame.scope, Scope::Transition);
    assert_eq!(frame.progress, 0.5);
    assert_eq!(frame.grid_offset, -38.0);
    assert_eq!(frame.height, header.geometry().max_calendar_height() - 95.0);
    assert_eq!(frame.content_inset, frame.height);
}

#[test]
fn test_week_drag_expands_from_selected_row() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Week);

    header.on_drag_changed(95.0);
    let frame = header.frame();
    assert!(frame.dragging);
    assert_eq!(frame.progress, 0.5);
    assert_eq!(frame.grid_offset, -38.0);
    assert_eq!(frame.height, header.geometry().min_calendar_height() + 95.0);
    // The month grid is what morphs
    assert_eq!(header.visible_window()[1].anchor_date(), ymd(2024, 2, 1));
}

#[test]
fn test_fast_flick_commits_below_distance_threshold() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Week);
    header.on_drag_changed(20.0);
    let decision = header.on_drag_ended(20.0, 1500.0).unwrap();
    assert!(decision.committed());
    assert_eq!(header.store().scope(), Scope::Month);
    assert_eq!(header.frame().progress, 0.0);
}

#[test]
fn test_cancelled_gesture_leaves_no_trace() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Month);
    let before_snapshot = header.snapshot();
    let before_frame = header.frame();

    header.on_pointer_pressed();
    header.on_pointer_moved(0.0, -50.0);
    header.on_pointer_moved(0.0, -180.0);
    assert!(header.is_dragging());
    header.on_pointer_cancelled();

    assert!(!header.is_dragging());
    assert_eq!(header.snapshot(), before_snapshot);
    assert_eq!(header.frame(), before_frame);
}

#[test]
fn test_settle_animation_reaches_rest() {
    let settings = Settings::default();
    let mut header = CalendarHeader::with_date(&settings, dates::valentine_2024()).unwrap();

    header.on_drag_changed(-150.0);
    let release_height = header.frame().height;
    header.on_drag_ended(-150.0, 0.0);

    assert_eq!(header.store().scope(), Scope::Week);
    assert!(header.is_animating());
    let start = header.frame();
    assert!(start.settling);
    assert_eq!(start.height, release_height);

    for _ in 0..10 {
        header.tick(1.0 / 60.0);
    }
    let mid = header.frame().height;
    assert!(mid < release_height);

    header.tick(1.0);
    assert!(!header.is_animating());
    assert_eq!(header.frame().height, header.geometry().min_calendar_height());
}

#[test]
fn test_tap_on_trailing_day_keeps_month() {
    let mut header = fixtures::header(dates::valentine_2024(), Scope::Month);
    header.on_date_tapped(ymd(2024, 3, 2));

    let snapshot = header.snapshot();
    assert_eq!(snapshot.selected_date, ymd(2024, 3, 2));
    assert_eq!(snapshot.month_anchor, ymd(2024, 2, 1));
    assert_eq!(snapshot.week_anchor, ymd(2024, 2, 25));
    assert_eq!(header.title(), "February 2024");
}

#[test]
fn test_paging_across_year_boundary() {
    let mut header = fixtures::header(dates::new_years_eve_2024(), Scope::Month);
    header.on_page_settled(WindowIndex::Next);
    assert_eq!(header.title(), "January 2025");
    header.on_page_settled(WindowIndex::Previous);
    header.on_page_settled(WindowIndex::Previous);
    assert_eq!(header.title(), "November 2024");
}

#[test]
fn test_monday_first_calendar() {
    let settings = fixtures::settings::monday_first(Scope::Month);
    let header = CalendarHeader::with_date(&settings, dates::leap_day_2024()).unwrap();
    let snapshot = header.snapshot();

    assert_eq!(snapshot.week_anchor, ymd(2024, 2, 26));
    assert_eq!(snapshot.months[1].days()[0].date(), ymd(2024, 1, 29));
    assert_eq!(header.store().calendar().weekday_symbols()[0], "Mon");
}

#[test]
fn test_programmatic_scope_during_settle() {
    let settings = Settings::default();
    let mut header = CalendarHeader::with_date(&settings, dates::valentine_2024()).unwrap();
    header.on_drag_changed(-150.0);
    header.on_drag_ended(-150.0, 0.0);
    assert!(header.is_animating());

    header.request_scope(Scope::Month).unwrap();
    assert_eq!(header.store().scope(), Scope::Month);
    assert!(!header.is_animating());
    assert_eq!(header.frame().height, header.geometry().max_calendar_height());
}

#[test]
fn test_gesture_state_is_exposed_for_debugging() {
    let settings = fixtures::settings::instant(Scope::Month);
    let mut engine = TransitionEngine::new(&settings).unwrap();
    engine.drag_changed(Scope::Month, -10.0).unwrap();
    assert_eq!(
        engine.state(),
        GestureState::Dragging {
            origin: Scope::Month,
            delta: -10.0
        }
    );
}
