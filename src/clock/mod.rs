//! Playback clocks.
//!
//! A [`ClockSource`] answers two questions for the controller: where playback is, and how long it
//! can run. Two implementations exist: [`ExternalAudioClock`] follows an attached audio player,
//! [`FreeRunningClock`] advances by measured wall time between frames.

mod external;
mod free_running;

use std::time::Instant;

pub use external::{AudioPlayer, ExternalAudioClock};
pub use free_running::FreeRunningClock;

use crate::timeline::model::ScheduleMode;

/// Time provider driven by the playback controller.
pub trait ClockSource {
    /// Short name used in diagnostics.
    fn label(&self) -> &'static str;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Playable length in seconds, or `None` while it is not yet known.
    fn duration(&self) -> Option<f64>;

    /// Start advancing.
    fn play(&mut self);

    /// Stop advancing, keeping the position.
    fn pause(&mut self);

    /// Move to `t` seconds. Callers clamp beforehand.
    fn seek(&mut self, t: f64);

    /// Called once per delivered frame, before the position is read.
    fn on_frame(&mut self, _now: Instant) {}

    /// The timeline was replaced and now spans `total` seconds.
    fn timeline_changed(&mut self, _total: f64) {}

    /// The backing media reported its length.
    fn metadata_loaded(&mut self, _duration: f64) {}

    /// Tear down the clock, handing back any attached audio player.
    fn detach_audio(self: Box<Self>) -> Option<Box<dyn AudioPlayer>>;
}

/// Settings for the free-running clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreeRunningOpts {
    /// Advance applied on the first frame after `play`, before any interval can be measured.
    pub nominal_step: f64,
    /// Upper bound on the advance of a single frame.
    pub max_step: Option<f64>,
}

/// Pick the clock for a timeline.
///
/// The audio-backed clock is used only for offset timelines with an attached player. Otherwise a
/// free-running clock spanning `total` is built and the player, if any, is handed back unused.
pub fn select_clock(
    mode: ScheduleMode,
    audio: Option<Box<dyn AudioPlayer>>,
    total: f64,
    opts: FreeRunningOpts,
) -> (Box<dyn ClockSource>, Option<Box<dyn AudioPlayer>>) {
    match (mode, audio) {
        (ScheduleMode::Offset, Some(player)) => (Box::new(ExternalAudioClock::new(player)), None),
        (_, parked) => (Box::new(FreeRunningClock::new(total, opts)), parked),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/select.rs"]
mod tests;
