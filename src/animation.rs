use std::time::{Duration, Instant};

/// Cubic ease-out over normalised time.
pub(crate) fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A value easing from where a drag was released back to its rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Snap {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Snap {
    pub(crate) fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub(crate) fn target(&self) -> f32 {
        self.to
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    pub(crate) fn sample(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * ease_out(self.progress(now))
    }

    pub(crate) fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// The offset to draw for a raw state offset.
///
/// While the raw value is away from the snap's rest (an active drag) it is
/// drawn as-is; once it sits at the rest the snap eases toward it.
pub(crate) fn displayed_offset(raw: f32, snap: Option<&Snap>, now: Instant) -> f32 {
    match snap {
        Some(snap) if snap.target() == raw && !snap.is_finished(now) => snap.sample(now),
        _ => raw,
    }
}
