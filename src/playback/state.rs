/// Transport state of a preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayState {
    /// Not started, or ran to the end.
    #[default]
    Stopped,
    /// Advancing every frame.
    Playing,
    /// Halted by the user mid-way.
    Paused,
}

/// Inputs that move the transport between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// User asked to play.
    Play,
    /// User asked to pause.
    Pause,
    /// Playback position reached a known duration.
    ReachedEnd,
}

/// Next transport state for `event` in `state`.
///
/// Events that do not apply to the current state leave it unchanged.
pub fn transition(state: PlayState, event: PlaybackEvent) -> PlayState {
    match (state, event) {
        (PlayState::Stopped | PlayState::Paused | PlayState::Playing, PlaybackEvent::Play) => {
            PlayState::Playing
        }
        (PlayState::Playing, PlaybackEvent::Pause) => PlayState::Paused,
        (PlayState::Playing, PlaybackEvent::ReachedEnd) => PlayState::Stopped,
        (s, PlaybackEvent::Pause | PlaybackEvent::ReachedEnd) => s,
    }
}

/// Read model republished after every frame and control call.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Playback position in seconds.
    pub current_time: f64,
    /// Playable length in seconds; `0` while unknown.
    pub duration: f64,
    /// Whether the transport is playing.
    pub is_playing: bool,
    /// Index of the segment under the playhead.
    pub active_segment_index: Option<usize>,
}

#[cfg(test)]
#[path = "../../tests/unit/playback/state.rs"]
mod tests;
