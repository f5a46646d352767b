//! Time-to-segment mapping.
//!
//! Everything here is a pure function of its inputs: no caching, no history. The controller calls
//! into it on every tick and every control call.

use crate::foundation::core::TimeWindow;
use crate::timeline::model::{ScheduleMode, Timeline};

/// Total timeline length in seconds.
///
/// Sequential: sum of all durations. Offset: latest `startTime + duration`, ignoring segments
/// without a start; `0` when none have one.
pub fn total_duration(timeline: &Timeline) -> f64 {
    match timeline.mode {
        ScheduleMode::Sequential => timeline.segments.iter().map(|s| s.duration).sum(),
        ScheduleMode::Offset => timeline
            .segments
            .iter()
            .filter_map(|s| s.start_time.map(|start| start + s.duration))
            .fold(0.0, f64::max),
    }
}

/// Half-open window of each segment, in list order.
///
/// Offset segments without a start have no window.
pub fn segment_windows(timeline: &Timeline) -> Vec<Option<TimeWindow>> {
    match timeline.mode {
        ScheduleMode::Sequential => {
            let mut cursor = 0.0;
            timeline
                .segments
                .iter()
                .map(|s| {
                    let w = TimeWindow::new(cursor, s.duration);
                    cursor += s.duration;
                    Some(w)
                })
                .collect()
        }
        ScheduleMode::Offset => timeline
            .segments
            .iter()
            .map(|s| s.start_time.map(|start| TimeWindow::new(start, s.duration)))
            .collect(),
    }
}

/// Index of the segment playing at `time`, if any.
///
/// Negative times resolve as `0`. In offset mode overlapping windows are broken by list order:
/// the first segment whose window contains `time` wins, regardless of which starts earliest.
pub fn resolve_active(time: f64, timeline: &Timeline) -> Option<usize> {
    let t = if time.is_nan() { 0.0 } else { time.max(0.0) };
    match timeline.mode {
        ScheduleMode::Sequential => {
            let mut cursor = 0.0;
            for (i, s) in timeline.segments.iter().enumerate() {
                if t >= cursor && t < cursor + s.duration {
                    return Some(i);
                }
                cursor += s.duration;
            }
            None
        }
        ScheduleMode::Offset => timeline.segments.iter().position(|s| {
            s.start_time
                .is_some_and(|start| TimeWindow::new(start, s.duration).contains(t))
        }),
    }
}

/// Scene index of the segment playing at `time`, if any.
pub fn active_scene(time: f64, timeline: &Timeline) -> Option<usize> {
    resolve_active(time, timeline).map(|i| timeline.segments[i].scene_index)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolve.rs"]
mod tests;
