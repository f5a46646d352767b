/// Handle for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Capability to ask for the next frame callback, and to take the request back.
///
/// The host delivers each granted request to the controller on the same thread as every control
/// call, so frames and controls never interleave.
pub trait FrameScheduler {
    /// Ask for one frame callback.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraw a request that has not been delivered yet.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Single-slot scheduler drained by the host's frame loop.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Option<FrameRequest>,
}

impl FrameQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request waiting for delivery, if any.
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Remove and return the waiting request for delivery.
    pub fn take_due(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.pending = Some(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }
}
