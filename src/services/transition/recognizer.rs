//! Vertical drag recognizer.
//!
//! Sits between raw pointer translation and the transition engine. A drag
//! only becomes a header morph once it has travelled `min_distance` and is
//! mostly vertical; a mostly horizontal drag is left to the pager for the
//! rest of the gesture. The translation at activation is subtracted so the
//! engine sees deltas starting from zero.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecognizerState {
    Idle,
    /// Pointer is down but has not moved far enough to decide
    Tracking,
    Active { start_offset: f32 },
    /// Horizontal gesture, owned by the pager
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecognizerEvent {
    Began,
    Changed(f32),
    Ended(f32),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct DragRecognizer {
    min_distance: f32,
    state: RecognizerState,
}

impl DragRecognizer {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance: min_distance.max(0.0),
            state: RecognizerState::Idle,
        }
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, RecognizerState::Active { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.state, RecognizerState::Rejected)
    }

    pub fn pointer_pressed(&mut self) {
        self.state = RecognizerState::Tracking;
    }

    /// Feed the translation since the press. Returns the engine-facing event,
    /// if any: `Began` is followed by `Changed(0.0)` on the activating move.
    pub fn pointer_moved(&mut self, dx: f32, dy: f32) -> Vec<RecognizerEvent> {
        match self.state {
            RecognizerState::Idle | RecognizerState::Rejected => Vec::new(),
            RecognizerState::Tracking => {
                if dx.hypot(dy) < self.min_distance {
                    return Vec::new();
                }
                if dy.abs() >= dx.abs() {
                    self.state = RecognizerState::Active { start_offset: dy };
                    vec![RecognizerEvent::Began, RecognizerEvent::Changed(0.0)]
                } else {
                    log::trace!("Horizontal drag ({dx:.1}, {dy:.1}) left to the pager");
                    self.state = RecognizerState::Rejected;
                    Vec::new()
                }
            }
            RecognizerState::Active { start_offset } => {
                vec![RecognizerEvent::Changed(dy - start_offset)]
            }
        }
    }

    pub fn pointer_released(&mut self, dy: f32) -> Option<RecognizerEvent> {
        let event = match self.state {
            RecognizerState::Active { start_offset } => {
                Some(RecognizerEvent::Ended(dy - start_offset))
            }
            _ => None,
        };
        self.state = RecognizerState::Idle;
        event
    }

    /// Platform interruption. Only an active drag reports a cancellation.
    pub fn cancel(&mut self) -> Option<RecognizerEvent> {
        let was_active = self.is_active();
        self.state = RecognizerState::Idle;
        was_active.then_some(RecognizerEvent::Cancelled)
    }
}
