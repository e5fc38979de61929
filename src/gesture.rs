use iced::Point;
use serde::Deserialize;

/// Resting offset of the open-app overlay, in pixels.
pub(crate) const OVERLAY_REST: f32 = 0.0;
/// Shade offset when fully hidden, in percent of viewport height.
pub(crate) const SHADE_HIDDEN: f32 = -100.0;
/// Shade offset when fully shown.
pub(crate) const SHADE_SHOWN: f32 = 0.0;

/// Tunable thresholds for drag recognition and commit decisions.
///
/// Distances are in logical pixels, progress values in percent of the
/// viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct GesturePolicy {
    /// Samples drifting further than this horizontally from the start point
    /// are treated as scroll/tap jitter and ignored.
    pub(crate) horizontal_jitter_limit: f32,
    /// Downward overlay drag that dismisses the open app on release.
    pub(crate) close_commit_threshold: f32,
    /// Height of the top band a shade pull must start in.
    pub(crate) shade_arm_band: f32,
    /// Shade progress that keeps it open on release.
    pub(crate) shade_commit_progress: f32,
    /// Shade progress after which it starts rendering mid-drag.
    pub(crate) shade_reveal_progress: f32,
}

impl Default for GesturePolicy {
    fn default() -> Self {
        Self {
            horizontal_jitter_limit: 50.0,
            close_commit_threshold: 150.0,
            shade_arm_band: 100.0,
            shade_commit_progress: 50.0,
            shade_reveal_progress: 10.0,
        }
    }
}

/// Outcome of a drag at release time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Release {
    /// The drag's effect becomes permanent.
    Commit,
    /// The dragged element snaps back to rest.
    Cancel,
}

/// Tracks the start point of a single-finger drag.
///
/// A new start overwrites the old one; there is no queueing.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DragTracker {
    start: Option<Point>,
}

impl DragTracker {
    pub(crate) fn start(&mut self, at: Point) {
        self.start = Some(at);
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.start.is_some()
    }

    pub(crate) fn reset(&mut self) {
        self.start = None;
    }

    /// Vertical distance from the start point, or `None` when the tracker
    /// was never armed or the sample drifted sideways past the jitter limit.
    pub(crate) fn vertical_delta(&self, at: Point, policy: &GesturePolicy) -> Option<f32> {
        let start = self.start?;
        if (at.x - start.x).abs() > policy.horizontal_jitter_limit {
            return None;
        }
        Some(at.y - start.y)
    }

    /// Disarms the tracker, reporting whether it was armed.
    pub(crate) fn finish(&mut self) -> bool {
        self.start.take().is_some()
    }
}

/// Live overlay offset for a vertical delta. Only downward drags move it.
pub(crate) fn overlay_offset(delta_y: f32) -> Option<f32> {
    (delta_y > 0.0).then_some(delta_y)
}

pub(crate) fn overlay_release(offset: f32, policy: &GesturePolicy) -> Release {
    if offset > policy.close_commit_threshold {
        Release::Commit
    } else {
        Release::Cancel
    }
}

/// Shade offset for a drag that began at `base` (hidden or shown).
///
/// The pixel delta is normalised to percent of `viewport_height` and the
/// result is clamped to the hidden..shown range.
pub(crate) fn shade_offset(base: f32, delta_y: f32, viewport_height: f32) -> f32 {
    let height = viewport_height.max(1.0);
    (base + delta_y / height * 100.0).clamp(SHADE_HIDDEN, SHADE_SHOWN)
}

/// How far the shade has been pulled out of its hidden position, 0..=100.
pub(crate) fn shade_progress(offset: f32) -> f32 {
    offset - SHADE_HIDDEN
}

pub(crate) fn shade_revealed(offset: f32, policy: &GesturePolicy) -> bool {
    shade_progress(offset) > policy.shade_reveal_progress
}

pub(crate) fn shade_release(offset: f32, policy: &GesturePolicy) -> Release {
    if offset > SHADE_HIDDEN + policy.shade_commit_progress {
        Release::Commit
    } else {
        Release::Cancel
    }
}

pub(crate) fn overlay_scale(offset: f32) -> f32 {
    (1.0 - offset / 1000.0).max(0.0)
}

pub(crate) fn overlay_opacity(offset: f32) -> f32 {
    (1.0 - offset / 500.0).clamp(0.0, 1.0)
}
