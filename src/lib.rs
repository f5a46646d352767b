//! reelsync turns an ordered list of timed scene segments plus a clock into a continuously updated
//! "what is playing right now" state for assembly previews.
//!
//! # Model
//!
//! - A [`Timeline`] is a list of [`TimelineSegment`]s scheduled either **sequentially**
//!   (concatenated, feature/short films) or at explicit **offsets** against an audio track
//!   (music videos).
//! - [`resolve_active`] maps a time to the segment under the playhead; it is pure.
//! - A [`ClockSource`] provides position and duration: [`FreeRunningClock`] advances by measured
//!   wall time, [`ExternalAudioClock`] follows an attached [`AudioPlayer`].
//! - [`PlaybackController`] owns the transport state (`Stopped`/`Playing`/`Paused`), drives its
//!   clock once per delivered frame and republishes a [`PlaybackState`].
//!
//! # Threading
//!
//! Everything is single-threaded and cooperative. Control calls and frame deliveries run on one
//! thread of control, one at a time. Frames are requested through a [`FrameScheduler`]; pausing,
//! stopping or dropping the controller withdraws the outstanding request, and a late delivery of
//! a withdrawn request is ignored.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod audio;
mod catalog;
mod clock;
mod foundation;
mod playback;
mod timeline;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;

pub use audio::manager::{AudioFile, AudioResourceManager, HandleId, HandleIssuer};
pub use catalog::{SceneCatalog, SceneInfo, display_title};
pub use clock::{
    AudioPlayer, ClockSource, ExternalAudioClock, FreeRunningClock, FreeRunningOpts, select_clock,
};
pub use foundation::core::{
    DEFAULT_FRAME_RATE, MIN_SEGMENT_DURATION, TimeWindow, clamp_time, format_clock,
};
pub use foundation::error::{ReelError, ReelResult};
pub use playback::controller::{PlaybackController, PlaybackOpts};
pub use playback::driver::{PacedStats, run_paced};
pub use playback::scheduler::{FrameQueue, FrameRequest, FrameScheduler};
pub use playback::state::{PlayState, PlaybackEvent, PlaybackState, transition};
pub use timeline::dsl::TimelineBuilder;
pub use timeline::model::{OutputType, ScheduleMode, Timeline, TimelineSegment};
pub use timeline::resolve::{active_scene, resolve_active, segment_windows, total_duration};
