// Paging controller
// Infinite swipe paging over the fixed 3-slot window of the active scope

use crate::error::CalendarResult;
use crate::models::scope::Direction;
use crate::models::time_period::WindowIndex;
use crate::services::store::CalendarStore;

/// Share of the page width a release must pass to change page.
const PAGE_DISTANCE_RATIO: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingController {
    active: WindowIndex,
}

impl Default for PagingController {
    fn default() -> Self {
        Self::new()
    }
}

impl PagingController {
    pub fn new() -> Self {
        Self {
            active: WindowIndex::Current,
        }
    }

    pub fn active_slot(&self) -> WindowIndex {
        self.active
    }

    /// Slot the paging surface is currently showing or animating to.
    pub fn select(&mut self, slot: WindowIndex) {
        self.active = slot;
    }

    /// The surface came to rest on `slot`. Previous/next slots navigate the
    /// store once; the controller always returns to the center slot.
    pub fn on_page_settled(
        &mut self,
        slot: WindowIndex,
        store: &mut CalendarStore,
    ) -> CalendarResult<Option<Direction>> {
        self.active = slot;
        self.settle(store)
    }

    /// Navigate for the slot that is currently active, then recenter.
    pub fn settle(&mut self, store: &mut CalendarStore) -> CalendarResult<Option<Direction>> {
        let direction = direction_for(self.active);
        self.active = WindowIndex::Current;

        match direction {
            Some(direction) => {
                log::debug!("Page settled {:?} in {:?} scope", direction, store.scope());
                store.navigate(direction)?;
                Ok(Some(direction))
            }
            None => Ok(None),
        }
    }

    /// Horizontal translation of the page strip, relative to the center page,
    /// for pages `width` wide.
    pub fn page_offset(&self, width: f32) -> f32 {
        -(self.active.offset() as f32) * width
    }
}

fn direction_for(slot: WindowIndex) -> Option<Direction> {
    match slot {
        WindowIndex::Previous => Some(Direction::Backward),
        WindowIndex::Current => None,
        WindowIndex::Next => Some(Direction::Forward),
    }
}

/// Slot a horizontal swipe lands on when released after travelling `dx`
/// with velocity `vx`. Half a page or a fast enough fling changes page.
pub fn release_slot(dx: f32, vx: f32, width: f32, velocity_threshold: f32) -> WindowIndex {
    if !dx.is_finite() || width <= 0.0 {
        return WindowIndex::Current;
    }
    let vx = if vx.is_finite() { vx } else { 0.0 };
    let distance = width * PAGE_DISTANCE_RATIO;

    if dx < -distance || vx < -velocity_threshold {
        WindowIndex::Next
    } else if dx > distance || vx > velocity_threshold {
        WindowIndex::Previous
    } else {
        WindowIndex::Current
    }
}
