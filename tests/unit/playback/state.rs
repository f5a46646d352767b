use super::*;

#[test]
fn play_starts_from_any_state() {
    for s in [PlayState::Stopped, PlayState::Paused, PlayState::Playing] {
        assert_eq!(transition(s, PlaybackEvent::Play), PlayState::Playing);
    }
}

#[test]
fn pause_only_affects_playing() {
    assert_eq!(
        transition(PlayState::Playing, PlaybackEvent::Pause),
        PlayState::Paused
    );
    assert_eq!(
        transition(PlayState::Stopped, PlaybackEvent::Pause),
        PlayState::Stopped
    );
    assert_eq!(
        transition(PlayState::Paused, PlaybackEvent::Pause),
        PlayState::Paused
    );
}

#[test]
fn reaching_the_end_stops_playback() {
    assert_eq!(
        transition(PlayState::Playing, PlaybackEvent::ReachedEnd),
        PlayState::Stopped
    );
    assert_eq!(
        transition(PlayState::Paused, PlaybackEvent::ReachedEnd),
        PlayState::Paused
    );
}

#[test]
fn read_model_serializes_for_display() {
    let s = PlaybackState {
        current_time: 1.5,
        duration: 8.0,
        is_playing: true,
        active_segment_index: None,
    };
    let json = serde_json::to_value(s).unwrap();
    assert_eq!(json["currentTime"], 1.5);
    assert_eq!(json["isPlaying"], true);
    assert!(json["activeSegmentIndex"].is_null());
}
