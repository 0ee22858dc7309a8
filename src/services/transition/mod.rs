//! Transition engine.
//!
//! Turns vertical drag deltas into the week/month morph: a progress value,
//! the header height and the grid offset that keeps the selected week row
//! anchored. At gesture end it applies the distance and velocity thresholds
//! to pick the resulting scope, then eases the height to rest.

mod geometry;
mod recognizer;

pub use geometry::{resting_progress, HeaderGeometry};
pub use recognizer::{DragRecognizer, RecognizerEvent, RecognizerState};

use crate::error::{CalendarError, CalendarResult};
use crate::models::scope::Scope;
use crate::models::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Dragging {
        /// Resting scope the gesture started from
        origin: Scope,
        delta: f32,
    },
    Settling {
        target: Scope,
        from_height: f32,
        from_offset: f32,
        elapsed: f32,
    },
}

/// Outcome of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitDecision {
    pub origin: Scope,
    pub target: Scope,
}

impl CommitDecision {
    pub fn committed(&self) -> bool {
        self.origin != self.target
    }
}

/// Geometry of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Scope whose formulas produced this frame
    pub scope: Scope,
    pub progress: f32,
    pub height: f32,
    pub grid_offset: f32,
    /// True while a drag is actively morphing the grid
    pub dragging: bool,
    pub settling: bool,
}

#[derive(Debug, Clone)]
pub struct TransitionEngine {
    geometry: HeaderGeometry,
    translation_threshold_ratio: f32,
    velocity_threshold: f32,
    /// Seconds
    settle_duration: f32,
    state: GestureState,
}

impl TransitionEngine {
    pub fn new(settings: &Settings) -> CalendarResult<Self> {
        let geometry = HeaderGeometry::from_settings(settings)?;
        Ok(Self {
            geometry,
            translation_threshold_ratio: settings.translation_threshold_ratio,
            velocity_threshold: settings.velocity_threshold,
            settle_duration: settings.settle_duration_ms as f32 / 1000.0,
            state: GestureState::Idle,
        })
    }

    pub fn geometry(&self) -> &HeaderGeometry {
        &self.geometry
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn translation_threshold(&self) -> f32 {
        self.geometry.max_translation() * self.translation_threshold_ratio
    }

    pub fn velocity_threshold(&self) -> f32 {
        self.velocity_threshold
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.state, GestureState::Settling { .. })
    }

    /// Dragging and actually moving the grid. Upward drags from Week scope
    /// count as no drag: the grid cannot shrink below one row.
    pub fn is_morphing(&self) -> bool {
        match self.state {
            GestureState::Dragging { origin, delta } => !(origin == Scope::Week && delta < 0.0),
            _ => false,
        }
    }

    /// Scope whose window should be on screen, given the store's scope.
    /// Collapsing to Week keeps the month grid until the settle ends.
    pub fn display_scope(&self, store_scope: Scope) -> Scope {
        match self.state {
            _ if self.is_morphing() => Scope::Transition,
            GestureState::Dragging { origin, .. } => origin,
            GestureState::Settling { target: Scope::Week, .. } => Scope::Transition,
            GestureState::Settling { target, .. } => target,
            GestureState::Idle => store_scope,
        }
    }

    /// Record a drag sample. `store_scope` names the resting scope when the
    /// gesture starts; later samples keep the first origin.
    pub fn drag_changed(&mut self, store_scope: Scope, delta: f32) -> CalendarResult<()> {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite drag delta {delta}");
            return Ok(());
        }

        let origin = match self.state {
            GestureState::Dragging { origin, .. } => origin,
            _ if store_scope.is_resting() => store_scope,
            _ => {
                return Err(CalendarError::InvalidStateTransition {
                    from: store_scope,
                    to: Scope::Transition,
                })
            }
        };

        if !self.is_dragging() {
            log::debug!("Drag started from {:?} scope", origin);
        }
        self.state = GestureState::Dragging { origin, delta };
        Ok(())
    }

    /// Decide the scope a released drag lands in and start settling from
    /// the pose at release. `selected_row` is the row the grid offset keeps
    /// anchored.
    pub fn drag_ended(
        &mut self,
        store_scope: Scope,
        delta: f32,
        velocity: f32,
        selected_row: usize,
    ) -> CalendarResult<CommitDecision> {
        let origin = match self.state {
            GestureState::Dragging { origin, .. } => origin,
            _ if store_scope.is_resting() => store_scope,
            _ => {
                return Err(CalendarError::InvalidStateTransition {
                    from: store_scope,
                    to: store_scope,
                })
            }
        };
        let delta = if delta.is_finite() { delta } else { 0.0 };
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };

        let distance = self.translation_threshold();
        let speed = self.velocity_threshold;
        let target = match origin {
            Scope::Month if delta < -distance || velocity < -speed => Scope::Week,
            Scope::Week if delta > distance || velocity > speed => Scope::Month,
            _ => origin,
        };

        self.state = GestureState::Dragging { origin, delta };
        let release = self.frame(origin, selected_row);

        log::debug!(
            "Drag ended (delta {:.1}, velocity {:.1}): {:?} -> {:?}",
            delta,
            velocity,
            origin,
            target
        );

        self.state = if self.settle_duration > 0.0 {
            GestureState::Settling {
                target,
                from_height: release.height,
                from_offset: release.grid_offset,
                elapsed: 0.0,
            }
        } else {
            GestureState::Idle
        };
        Ok(CommitDecision { origin, target })
    }

    /// Abandon the active drag. Returns the scope to restore, if a drag was
    /// in progress.
    pub fn drag_cancelled(&mut self) -> Option<Scope> {
        let origin = match self.state {
            GestureState::Dragging { origin, .. } => Some(origin),
            _ => None,
        };
        if origin.is_some() {
            log::debug!("Drag cancelled; reverting to {:?}", origin);
        }
        self.state = GestureState::Idle;
        origin
    }

    /// Jump a running settle animation to its rest pose.
    pub fn finish_settling(&mut self) {
        if self.is_settling() {
            self.state = GestureState::Idle;
        }
    }

    /// Advance the settle animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let GestureState::Settling { elapsed, .. } = &mut self.state {
            *elapsed += dt.max(0.0);
            if *elapsed >= self.settle_duration {
                self.state = GestureState::Idle;
            }
        }
    }

    /// Progress in [0, 1]: directional while morphing, the resting value of
    /// the scope otherwise.
    pub fn progress(&self, store_scope: Scope) -> f32 {
        match self.state {
            GestureState::Dragging { origin, delta } if self.is_morphing() => {
                self.geometry.progress(origin, delta)
            }
            GestureState::Dragging { origin, .. } => resting_progress(origin),
            GestureState::Settling { target, .. } => resting_progress(target),
            GestureState::Idle => resting_progress(store_scope),
        }
    }

    /// Geometry for the current frame. `selected_row` is the row of the
    /// selected week inside the current month grid.
    pub fn frame(&self, store_scope: Scope, selected_row: usize) -> TransitionFrame {
        let progress = self.progress(store_scope);
        match self.state {
            GestureState::Dragging { origin, delta } if self.is_morphing() => TransitionFrame {
                scope: origin,
                progress,
                height: self.geometry.calendar_height(origin, delta),
                grid_offset: self.geometry.grid_offset(origin, progress, selected_row, true),
                dragging: true,
                settling: false,
            },
            GestureState::Dragging { origin, .. } => self.rest_frame(origin),
            GestureState::Settling {
                target,
                from_height,
                from_offset,
                elapsed,
            } => {
                let t = ease_out_cubic((elapsed / self.settle_duration).clamp(0.0, 1.0));
                let rest = self.rest_frame(target);
                // The month grid ends with only the selected row showing
                let to_offset = match target {
                    Scope::Week => self.geometry.grid_offset(Scope::Month, 1.0, selected_row, true),
                    Scope::Month | Scope::Transition => rest.grid_offset,
                };
                TransitionFrame {
                    height: lerp(from_height, rest.height, t),
                    grid_offset: lerp(from_offset, to_offset, t),
                    settling: true,
                    ..rest
                }
            }
            GestureState::Idle => self.rest_frame(store_scope),
        }
    }

    fn rest_frame(&self, scope: Scope) -> TransitionFrame {
        TransitionFrame {
            scope,
            progress: resting_progress(scope),
            height: self.geometry.base_height(scope),
            grid_offset: 0.0,
            dragging: false,
            settling: false,
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Cubic ease-out over `t` in [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
