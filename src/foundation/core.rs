/// Smallest duration a timeline segment may have, in seconds.
pub const MIN_SEGMENT_DURATION: f64 = 0.1;

/// Nominal preview refresh rate used when no other rate is configured.
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Half-open time window `[start, end)` in seconds on the timeline axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    /// Inclusive window start.
    pub start: f64,
    /// Window length.
    pub duration: f64,
}

impl TimeWindow {
    /// Create a window starting at `start` lasting `duration` seconds.
    pub fn new(start: f64, duration: f64) -> Self {
        Self { start, duration }
    }

    /// Exclusive window end.
    pub fn end(self) -> f64 {
        self.start + self.duration
    }

    /// Return `true` when `t` is inside `[start, end)`.
    pub fn contains(self, t: f64) -> bool {
        self.start <= t && t < self.end()
    }

    /// Return `true` when the window covers no time.
    pub fn is_empty(self) -> bool {
        self.duration <= 0.0
    }
}

/// Clamp a playback position into `[0, upper]`.
///
/// With no upper bound (duration not yet known) only the lower bound applies. Non-finite
/// inputs collapse to `0`.
pub fn clamp_time(t: f64, upper: Option<f64>) -> f64 {
    let t = if t.is_finite() { t.max(0.0) } else { 0.0 };
    match upper {
        Some(max) if max.is_finite() => t.min(max.max(0.0)),
        _ => t,
    }
}

/// Format seconds as `m:ss` for display.
pub fn format_clock(secs: f64) -> String {
    let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    let whole = secs.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
