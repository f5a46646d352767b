use std::time::Instant;

use crate::clock::{AudioPlayer, ClockSource, FreeRunningOpts};

/// Clock that advances by the wall time elapsed between frames.
///
/// Its duration is the static length of the timeline and is always known.
#[derive(Clone, Debug)]
pub struct FreeRunningClock {
    position: f64,
    duration: f64,
    running: bool,
    last_frame: Option<Instant>,
    opts: FreeRunningOpts,
}

impl FreeRunningClock {
    /// Clock spanning `duration` seconds, stopped at `0`.
    pub fn new(duration: f64, opts: FreeRunningOpts) -> Self {
        Self {
            position: 0.0,
            duration: duration.max(0.0),
            running: false,
            last_frame: None,
            opts,
        }
    }

    /// Whether the clock is advancing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn step_since(&self, now: Instant) -> f64 {
        let step = match self.last_frame {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f64(),
            None => self.opts.nominal_step,
        };
        match self.opts.max_step {
            Some(max) => step.min(max),
            None => step,
        }
    }
}

impl ClockSource for FreeRunningClock {
    fn label(&self) -> &'static str {
        "free-running"
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        Some(self.duration)
    }

    fn play(&mut self) {
        self.running = true;
        self.last_frame = None;
    }

    fn pause(&mut self) {
        self.running = false;
        self.last_frame = None;
    }

    fn seek(&mut self, t: f64) {
        self.position = t;
    }

    fn on_frame(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        self.position += self.step_since(now);
        self.last_frame = Some(now);
    }

    fn timeline_changed(&mut self, total: f64) {
        self.duration = total.max(0.0);
    }

    fn detach_audio(self: Box<Self>) -> Option<Box<dyn AudioPlayer>> {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/free_running.rs"]
mod tests;
