use std::time::{Duration, Instant};

/// Ease-out animation of the thumbnail strip towards a target offset.
///
/// A new request replaces the running one, starting from wherever the strip
/// currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ThumbnailTween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ThumbnailTween {
    pub(crate) fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        ThumbnailTween {
            from,
            to,
            started,
            duration,
        }
    }

    pub(crate) fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`, and whether the animation has finished.
    pub(crate) fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// Last observed geometry of the two scrollable strips.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ViewportState {
    pub(crate) viewer_offset_x: f32,
    pub(crate) viewer_width: f32,
    pub(crate) thumbnails_offset_x: f32,
    pub(crate) pointer_x: f32,
}
