use super::*;
use crate::foundation::core::MIN_SEGMENT_DURATION;

#[test]
fn sequential_builder_keeps_order_and_omits_starts() {
    let t = TimelineBuilder::sequential()
        .scene(2, 5.0)
        .scene(0, 3.0)
        .build()
        .unwrap();
    assert_eq!(t.mode, ScheduleMode::Sequential);
    assert_eq!(
        t.segments,
        vec![
            TimelineSegment::sequential(2, 5.0),
            TimelineSegment::sequential(0, 3.0)
        ]
    );
}

#[test]
fn offset_builder_places_unpinned_scenes_at_zero() {
    let t = TimelineBuilder::offset()
        .scene(0, 4.0)
        .scene_at(1, 2.5, 4.0)
        .build()
        .unwrap();
    assert_eq!(t.segments[0].start_time, Some(0.0));
    assert_eq!(t.segments[1].start_time, Some(2.5));
}

#[test]
fn builder_clamps_like_the_editor() {
    let t = TimelineBuilder::offset()
        .scene_at(0, -4.0, 0.0)
        .scene(1, -1.0)
        .build()
        .unwrap();
    assert_eq!(t.segments[0].start_time, Some(0.0));
    assert_eq!(t.segments[0].duration, MIN_SEGMENT_DURATION);
    assert_eq!(t.segments[1].duration, MIN_SEGMENT_DURATION);
}
