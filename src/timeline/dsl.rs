use crate::foundation::error::ReelResult;
use crate::timeline::model::{
    ScheduleMode, Timeline, TimelineSegment, sanitize_duration, sanitize_start,
};

/// Incremental timeline construction with the same clamping rules the editor applies.
///
/// Durations below the minimum become the minimum and negative starts become `0`, so a built
/// timeline always validates.
pub struct TimelineBuilder {
    mode: ScheduleMode,
    segments: Vec<TimelineSegment>,
}

impl TimelineBuilder {
    /// Start a timeline in `mode`.
    pub fn new(mode: ScheduleMode) -> Self {
        Self {
            mode,
            segments: Vec::new(),
        }
    }

    /// Start a sequential timeline.
    pub fn sequential() -> Self {
        Self::new(ScheduleMode::Sequential)
    }

    /// Start an offset timeline.
    pub fn offset() -> Self {
        Self::new(ScheduleMode::Offset)
    }

    /// Append a scene with no explicit start.
    ///
    /// In offset mode the scene is placed at `0`, matching how new scenes enter a music-video
    /// timeline.
    pub fn scene(mut self, scene_index: usize, duration: f64) -> Self {
        let start_time = match self.mode {
            ScheduleMode::Sequential => None,
            ScheduleMode::Offset => Some(0.0),
        };
        self.segments.push(TimelineSegment {
            scene_index,
            duration: sanitize_duration(duration),
            start_time,
        });
        self
    }

    /// Append a scene pinned at `start_time`.
    pub fn scene_at(mut self, scene_index: usize, start_time: f64, duration: f64) -> Self {
        self.segments.push(TimelineSegment {
            scene_index,
            duration: sanitize_duration(duration),
            start_time: Some(sanitize_start(start_time)),
        });
        self
    }

    /// Finish and validate.
    pub fn build(self) -> ReelResult<Timeline> {
        let timeline = Timeline::new(self.mode, self.segments);
        timeline.validate()?;
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
