// Content list scroll snapping
// Keeps the list under the header from resting halfway through the collapse band

/// Adjust a proposed scroll target offset of the content list.
///
/// `band` is the collapsible header distance (max height - min height).
/// A target that would rest inside the band snaps back to the top; so does a
/// target within the top quarter of the viewport when flung upward
/// (`velocity_y < 0`).
pub fn snap_scroll_target(proposed: f32, band: f32, viewport_height: f32, velocity_y: f32) -> f32 {
    if !proposed.is_finite() {
        return 0.0;
    }
    if proposed < band {
        return 0.0;
    }
    if proposed < viewport_height / 4.0 && velocity_y < 0.0 {
        return 0.0;
    }
    proposed
}
