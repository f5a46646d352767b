use std::time::Instant;

use crate::clock::{AudioPlayer, ClockSource, FreeRunningClock, FreeRunningOpts, select_clock};
use crate::foundation::core::{DEFAULT_FRAME_RATE, clamp_time};
use crate::playback::scheduler::{FrameQueue, FrameRequest, FrameScheduler};
use crate::playback::state::{PlayState, PlaybackEvent, PlaybackState, transition};
use crate::timeline::model::Timeline;
use crate::timeline::resolve::{resolve_active, total_duration};

/// Options controlling preview timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackOpts {
    /// Nominal frames per second of the host's refresh loop.
    pub frame_rate: f64,
    /// Cap on how far the free-running clock may advance in one frame.
    pub max_frame_delta_secs: Option<f64>,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            max_frame_delta_secs: None,
        }
    }
}

impl PlaybackOpts {
    /// Seconds between frames; invalid rates fall back to the default.
    pub fn frame_interval_secs(&self) -> f64 {
        if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            1.0 / self.frame_rate
        } else {
            1.0 / DEFAULT_FRAME_RATE
        }
    }

    fn clock_opts(&self) -> FreeRunningOpts {
        FreeRunningOpts {
            nominal_step: self.frame_interval_secs(),
            max_step: self.max_frame_delta_secs.filter(|d| d.is_finite() && *d > 0.0),
        }
    }
}

/// Drives one clock against one timeline and keeps the "what is playing now" state.
///
/// All calls, frame deliveries included, must come from the same thread of control; every call
/// runs to completion before the next. A frame delivered for a request that was withdrawn
/// (pause, stop, replacement, drop) is ignored.
pub struct PlaybackController<S: FrameScheduler = FrameQueue> {
    timeline: Timeline,
    clock: Box<dyn ClockSource>,
    parked_audio: Option<Box<dyn AudioPlayer>>,
    scheduler: S,
    pending: Option<FrameRequest>,
    play_state: PlayState,
    current_time: f64,
    active: Option<usize>,
    opts: PlaybackOpts,
}

impl PlaybackController<FrameQueue> {
    /// Controller with a host-drained [`FrameQueue`] and default options.
    pub fn new(timeline: &Timeline, audio: Option<Box<dyn AudioPlayer>>) -> Self {
        Self::with_scheduler(timeline, audio, FrameQueue::new(), PlaybackOpts::default())
    }

    /// Deliver the queued frame, if any. Returns `true` when state was updated.
    pub fn pump(&mut self, now: Instant) -> bool {
        match self.scheduler.take_due() {
            Some(request) => self.on_frame(request, now),
            None => false,
        }
    }
}

impl<S: FrameScheduler> PlaybackController<S> {
    /// Controller using `scheduler` for frame callbacks.
    ///
    /// The timeline is copied and clamped; the caller's value is never modified.
    pub fn with_scheduler(
        timeline: &Timeline,
        audio: Option<Box<dyn AudioPlayer>>,
        scheduler: S,
        opts: PlaybackOpts,
    ) -> Self {
        let timeline = timeline.sanitized();
        let (clock, parked_audio) = select_clock(
            timeline.mode,
            audio,
            total_duration(&timeline),
            opts.clock_opts(),
        );
        tracing::debug!(clock = clock.label(), segments = timeline.len(), "preview opened");
        let active = resolve_active(0.0, &timeline);
        Self {
            timeline,
            clock,
            parked_audio,
            scheduler,
            pending: None,
            play_state: PlayState::Stopped,
            current_time: 0.0,
            active,
            opts,
        }
    }

    /// Snapshot for display.
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_time: self.current_time,
            duration: self.duration(),
            is_playing: self.is_playing(),
            active_segment_index: self.active,
        }
    }

    /// Transport state.
    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    /// Whether the transport is playing.
    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    /// Playback position in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Playable length in seconds, `0` while unknown.
    pub fn duration(&self) -> f64 {
        self.clock.duration().unwrap_or(0.0)
    }

    /// Whether the playable length is known.
    pub fn duration_known(&self) -> bool {
        self.clock.duration().is_some()
    }

    /// Index of the segment under the playhead.
    pub fn active_segment_index(&self) -> Option<usize> {
        self.active
    }

    /// Scene index of the segment under the playhead.
    pub fn active_scene(&self) -> Option<usize> {
        self.active
            .and_then(|i| self.timeline.segments.get(i))
            .map(|s| s.scene_index)
    }

    /// Position as a fraction of the duration, `0` while the duration is unknown or zero.
    pub fn progress(&self) -> f64 {
        let d = self.duration();
        if d > 0.0 {
            (self.current_time / d).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Timeline currently driving resolution.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Timing options.
    pub fn opts(&self) -> PlaybackOpts {
        self.opts
    }

    /// Label of the active clock.
    pub fn clock_label(&self) -> &'static str {
        self.clock.label()
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler, for hosts that drain it.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start or resume playback.
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        self.play_state = transition(self.play_state, PlaybackEvent::Play);
        self.clock.play();
        self.schedule_next();
        tracing::debug!(at = self.current_time, "play");
    }

    /// Pause playback, keeping the position.
    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.play_state = transition(self.play_state, PlaybackEvent::Pause);
        self.clock.pause();
        self.cancel_pending();
        tracing::debug!(at = self.current_time, "pause");
    }

    /// Play when not playing, otherwise pause.
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to `t` seconds, clamped to `[0, duration]`. The transport state is unchanged.
    ///
    /// While the duration is unknown it counts as `0`, so every seek lands on the start.
    pub fn seek(&mut self, t: f64) {
        let t = clamp_time(t, Some(self.duration()));
        self.current_time = t;
        self.active = resolve_active(t, &self.timeline);
        self.clock.seek(t);
        tracing::debug!(to = t, active = ?self.active, "seek");
    }

    /// Pause and return to the start.
    pub fn reset(&mut self) {
        self.pause();
        self.seek(0.0);
    }

    /// Handle a delivered frame.
    ///
    /// Returns `false` without touching state when `request` is not the one outstanding.
    pub fn on_frame(&mut self, request: FrameRequest, now: Instant) -> bool {
        if self.pending != Some(request) || !self.is_playing() {
            tracing::trace!(?request, "dropping stale frame");
            return false;
        }
        self.pending = None;

        self.clock.on_frame(now);
        let duration = self.clock.duration();
        let t = clamp_time(self.clock.current_time(), duration);

        match duration {
            Some(end) if t >= end => {
                self.current_time = end;
                self.active = resolve_active(end, &self.timeline);
                self.play_state = transition(self.play_state, PlaybackEvent::ReachedEnd);
                self.clock.pause();
                self.clock.seek(end);
                tracing::debug!(at = end, "reached end");
            }
            _ => {
                self.current_time = t;
                self.active = resolve_active(t, &self.timeline);
                self.schedule_next();
                tracing::trace!(at = t, active = ?self.active, "frame");
            }
        }
        true
    }

    /// Replace the timeline. The transport state and position are kept.
    ///
    /// While playing, a position past the new end is clamped by the next frame, which then stops
    /// playback. Otherwise it is clamped immediately.
    pub fn set_timeline(&mut self, timeline: &Timeline) {
        let timeline = timeline.sanitized();
        let total = total_duration(&timeline);
        let mode_changed = timeline.mode != self.timeline.mode;
        self.timeline = timeline;

        if mode_changed {
            let audio = self.take_audio();
            self.install_clock(audio);
        } else {
            self.clock.timeline_changed(total);
        }
        self.active = resolve_active(self.current_time, &self.timeline);
        self.clamp_idle_position();
        tracing::debug!(total, mode_changed, "timeline replaced");
    }

    /// Attach, replace or remove the audio player.
    ///
    /// The previous clock is torn down and any previous player dropped before the new clock
    /// starts.
    pub fn set_audio(&mut self, audio: Option<Box<dyn AudioPlayer>>) {
        drop(self.take_audio());
        self.install_clock(audio);
    }

    /// The attached audio reported its length.
    pub fn notify_metadata_loaded(&mut self, duration: f64) {
        self.clock.metadata_loaded(duration);
        self.clamp_idle_position();
        tracing::debug!(
            duration,
            known = self.duration_known(),
            "audio metadata loaded"
        );
    }

    fn take_audio(&mut self) -> Option<Box<dyn AudioPlayer>> {
        let idle = Box::new(FreeRunningClock::new(0.0, self.opts.clock_opts()));
        let mut old = std::mem::replace(&mut self.clock, idle);
        old.pause();
        old.detach_audio().or_else(|| self.parked_audio.take())
    }

    fn install_clock(&mut self, audio: Option<Box<dyn AudioPlayer>>) {
        let (clock, parked) = select_clock(
            self.timeline.mode,
            audio,
            total_duration(&self.timeline),
            self.opts.clock_opts(),
        );
        self.clock = clock;
        self.parked_audio = parked;

        let t = clamp_time(self.current_time, Some(self.duration()));
        self.current_time = t;
        self.active = resolve_active(t, &self.timeline);
        self.clock.seek(t);
        if self.is_playing() {
            self.clock.play();
        }
        tracing::debug!(clock = self.clock.label(), at = t, "clock installed");
    }

    fn clamp_idle_position(&mut self) {
        if self.is_playing() {
            return;
        }
        let t = clamp_time(self.current_time, self.clock.duration());
        if t != self.current_time {
            self.current_time = t;
            self.active = resolve_active(t, &self.timeline);
            self.clock.seek(t);
            tracing::debug!(to = t, "idle position clamped to new end");
        }
    }

    fn schedule_next(&mut self) {
        self.cancel_pending();
        self.pending = Some(self.scheduler.request_frame());
    }

    fn cancel_pending(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
    }
}

impl<S: FrameScheduler> Drop for PlaybackController<S> {
    fn drop(&mut self) {
        self.cancel_pending();
        if self.is_playing() {
            self.clock.pause();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/controller.rs"]
mod tests;
