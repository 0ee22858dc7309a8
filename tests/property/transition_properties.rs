// Progress and height stay inside their bounds for any drag

use morph_calendar::models::scope::Scope;
use morph_calendar::models::settings::Settings;
use morph_calendar::services::transition::{HeaderGeometry, TransitionEngine};
use proptest::prelude::*;

fn resting_scope() -> impl Strategy<Value = Scope> {
    prop_oneof![Just(Scope::Week), Just(Scope::Month)]
}

proptest! {
    #[test]
    fn progress_is_clamped(scope in resting_scope(), delta in -1.0e6f32..1.0e6) {
        let geometry = HeaderGeometry::from_settings(&Settings::default()).unwrap();
        let progress = geometry.progress(scope, delta);
        prop_assert!((0.0..=1.0).contains(&progress));
    }

    #[test]
    fn dragged_frame_stays_in_bounds(
        scope in resting_scope(),
        deltas in prop::collection::vec(-2_000.0f32..2_000.0, 1..20),
        selected_row in 0usize..6,
    ) {
        let mut engine = TransitionEngine::new(&Settings::default()).unwrap();
        let geometry = *engine.geometry();

        for delta in deltas {
            engine.drag_changed(scope, delta).unwrap();
            let frame = engine.frame(Scope::Transition, selected_row);
            prop_assert!((0.0..=1.0).contains(&frame.progress));
            prop_assert!(frame.height >= geometry.min_calendar_height());
            prop_assert!(frame.height <= geometry.max_calendar_height());
            prop_assert!(frame.grid_offset <= 0.0);
            prop_assert!(frame.grid_offset >= -(selected_row as f32) * geometry.row_height);
        }
    }

    #[test]
    fn drag_end_lands_on_a_resting_scope(
        scope in resting_scope(),
        delta in -500.0f32..500.0,
        velocity in -3_000.0f32..3_000.0,
    ) {
        let mut engine = TransitionEngine::new(&Settings::default()).unwrap();
        engine.drag_changed(scope, delta).unwrap();
        let decision = engine.drag_ended(Scope::Transition, delta, velocity, 0).unwrap();
        prop_assert_eq!(decision.origin, scope);
        prop_assert!(decision.target.is_resting());
        prop_assert!(!engine.is_dragging());
    }
}
