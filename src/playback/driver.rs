use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crate::playback::controller::PlaybackController;
use crate::playback::scheduler::FrameQueue;
use crate::playback::state::PlaybackState;

/// Totals reported by [`run_paced`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PacedStats {
    /// Frames delivered to the controller.
    pub frames: u64,
    /// Whether the observer ended the run early.
    pub interrupted: bool,
}

/// Deliver frames to `controller` in real time on the calling thread until nothing is scheduled.
///
/// Sleeps one frame interval between deliveries and hands every resulting state to `observe`.
/// Returning [`ControlFlow::Break`] pauses the controller and ends the run. A controller that is
/// not playing returns immediately.
pub fn run_paced<F>(controller: &mut PlaybackController<FrameQueue>, mut observe: F) -> PacedStats
where
    F: FnMut(&PlaybackState) -> ControlFlow<()>,
{
    let interval = Duration::from_secs_f64(controller.opts().frame_interval_secs());
    let mut stats = PacedStats::default();
    let mut deadline = Instant::now();

    while let Some(request) = controller.scheduler_mut().take_due() {
        deadline += interval;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        } else {
            // Running late: realign instead of bursting to catch up.
            deadline = now;
        }

        if !controller.on_frame(request, Instant::now()) {
            continue;
        }
        stats.frames += 1;

        if observe(&controller.state()).is_break() {
            controller.pause();
            stats.interrupted = true;
            break;
        }
    }

    tracing::debug!(frames = stats.frames, interrupted = stats.interrupted, "paced run finished");
    stats
}

#[cfg(test)]
#[path = "../../tests/unit/playback/driver.rs"]
mod tests;
