use std::time::Duration;

/// Work to run once on the next display frame
pub type FrameCallback = Box<dyn FnOnce()>;

/// Handle returned for every frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Next-frame scheduling abstraction
pub trait FrameScheduler {
    /// Queue `callback` for the next frame. Must not run it synchronously.
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;
}

/// Wall-clock readings used to measure animation progress
pub trait TimeSource {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}
