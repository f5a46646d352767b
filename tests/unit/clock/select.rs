use super::*;
use crate::test_support::FakePlayer;

fn opts() -> FreeRunningOpts {
    FreeRunningOpts {
        nominal_step: 1.0 / 60.0,
        max_step: None,
    }
}

#[test]
fn offset_with_audio_follows_the_player() {
    let (player, _probe) = FakePlayer::new(None);
    let (clock, parked) = select_clock(ScheduleMode::Offset, Some(Box::new(player)), 9.0, opts());
    assert_eq!(clock.label(), "external-audio");
    assert_eq!(clock.duration(), None);
    assert!(parked.is_none());
}

#[test]
fn offset_without_audio_runs_free() {
    let (clock, parked) = select_clock(ScheduleMode::Offset, None, 9.0, opts());
    assert_eq!(clock.label(), "free-running");
    assert_eq!(clock.duration(), Some(9.0));
    assert!(parked.is_none());
}

#[test]
fn sequential_parks_attached_audio() {
    let (player, _probe) = FakePlayer::new(Some(30.0));
    let (clock, parked) = select_clock(
        ScheduleMode::Sequential,
        Some(Box::new(player)),
        8.0,
        opts(),
    );
    assert_eq!(clock.label(), "free-running");
    assert_eq!(clock.duration(), Some(8.0));
    assert!(parked.is_some());
}
