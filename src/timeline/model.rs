use crate::foundation::core::MIN_SEGMENT_DURATION;
use crate::foundation::error::{ReelError, ReelResult};

/// How the ordered segments of a timeline map onto the time axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleMode {
    /// Segments laid end-to-end in list order.
    #[default]
    Sequential,
    /// Segments pinned to explicit, possibly overlapping, start times.
    Offset,
}

/// Project output type; decides the scheduling mode of its timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputType {
    /// Feature film, scenes concatenated.
    #[default]
    FeatureFilm,
    /// Short film, scenes concatenated.
    ShortFilm,
    /// Music video, scenes placed against an audio track.
    MusicVideo,
}

impl OutputType {
    /// Scheduling mode used by timelines of this output type.
    pub fn schedule_mode(self) -> ScheduleMode {
        match self {
            Self::FeatureFilm | Self::ShortFilm => ScheduleMode::Sequential,
            Self::MusicVideo => ScheduleMode::Offset,
        }
    }
}

/// One scene's placement within a timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    /// Index of the scene in the owning project.
    pub scene_index: usize,
    /// Length in seconds, never below [`MIN_SEGMENT_DURATION`] once sanitized.
    pub duration: f64,
    /// Explicit start in seconds; only meaningful in offset mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
}

impl TimelineSegment {
    /// Segment for a sequential timeline.
    pub fn sequential(scene_index: usize, duration: f64) -> Self {
        Self {
            scene_index,
            duration,
            start_time: None,
        }
    }

    /// Segment pinned at `start_time` for an offset timeline.
    pub fn offset(scene_index: usize, start_time: f64, duration: f64) -> Self {
        Self {
            scene_index,
            duration,
            start_time: Some(start_time),
        }
    }

    /// Copy with duration and start clamped to their minimums.
    pub fn sanitized(self) -> Self {
        Self {
            scene_index: self.scene_index,
            duration: sanitize_duration(self.duration),
            start_time: self.start_time.map(sanitize_start),
        }
    }
}

pub(crate) fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() {
        duration.max(MIN_SEGMENT_DURATION)
    } else {
        MIN_SEGMENT_DURATION
    }
}

pub(crate) fn sanitize_start(start: f64) -> f64 {
    if start.is_finite() { start.max(0.0) } else { 0.0 }
}

/// Ordered list of segments assembled for preview, plus its scheduling mode.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Scheduling mode.
    #[serde(default)]
    pub mode: ScheduleMode,
    /// Segments in list order.
    #[serde(default)]
    pub segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Create a timeline from its parts.
    pub fn new(mode: ScheduleMode, segments: Vec<TimelineSegment>) -> Self {
        Self { mode, segments }
    }

    /// Empty timeline in `mode`.
    pub fn empty(mode: ScheduleMode) -> Self {
        Self::new(mode, Vec::new())
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Return `true` when the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check every segment value is finite and within its allowed range.
    ///
    /// Start times on sequential timelines are ignored rather than rejected.
    pub fn validate(&self) -> ReelResult<()> {
        for (i, seg) in self.segments.iter().enumerate() {
            if !seg.duration.is_finite() || seg.duration < MIN_SEGMENT_DURATION {
                return Err(ReelError::validation(format!(
                    "segment {i} duration must be finite and >= {MIN_SEGMENT_DURATION}"
                )));
            }
            if let Some(start) = seg.start_time
                && (!start.is_finite() || start < 0.0)
            {
                return Err(ReelError::validation(format!(
                    "segment {i} startTime must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Copy with every segment clamped to its minimums.
    pub fn sanitized(&self) -> Self {
        Self {
            mode: self.mode,
            segments: self.segments.iter().map(|s| s.sanitized()).collect(),
        }
    }

    /// Scene indices referenced by segments that fall outside `scene_count`.
    pub fn dangling_scene_refs(&self, scene_count: usize) -> Vec<usize> {
        self.segments
            .iter()
            .filter(|s| s.scene_index >= scene_count)
            .map(|s| s.scene_index)
            .collect()
    }

    /// Parse and validate a timeline from JSON text.
    #[tracing::instrument(skip(s), fields(len = s.len()))]
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let timeline: Self = serde_json::from_str(s)?;
        timeline.validate()?;
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
