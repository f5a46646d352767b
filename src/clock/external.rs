use crate::clock::ClockSource;

/// Playable audio resource the preview can follow.
///
/// Implementations wrap whatever actually produces sound; the engine only reads and moves the
/// playhead.
pub trait AudioPlayer {
    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Move the playhead. Implementations clamp to their own range.
    fn set_position(&mut self, secs: f64);

    /// Start or resume output.
    fn play(&mut self);

    /// Pause output.
    fn pause(&mut self);

    /// Length in seconds if metadata is already available.
    fn loaded_duration(&self) -> Option<f64> {
        None
    }
}

/// Clock that mirrors an attached audio player.
pub struct ExternalAudioClock {
    player: Box<dyn AudioPlayer>,
    duration: Option<f64>,
}

impl ExternalAudioClock {
    /// Follow `player`. Its length is picked up now if the player already knows it.
    pub fn new(player: Box<dyn AudioPlayer>) -> Self {
        let duration = player.loaded_duration().filter(|d| usable_duration(*d));
        Self { player, duration }
    }
}

fn usable_duration(d: f64) -> bool {
    d.is_finite() && d > 0.0
}

impl ClockSource for ExternalAudioClock {
    fn label(&self) -> &'static str {
        "external-audio"
    }

    fn current_time(&self) -> f64 {
        self.player.position()
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn play(&mut self) {
        self.player.play();
    }

    fn pause(&mut self) {
        self.player.pause();
    }

    fn seek(&mut self, t: f64) {
        self.player.set_position(t);
    }

    fn metadata_loaded(&mut self, duration: f64) {
        if usable_duration(duration) {
            self.duration = Some(duration);
        } else {
            tracing::warn!(duration, "ignoring unusable audio duration");
        }
    }

    fn detach_audio(self: Box<Self>) -> Option<Box<dyn AudioPlayer>> {
        Some(self.player)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/external.rs"]
mod tests;
