use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::config::FrameLoopConfig;
use crate::frame::FrameInfo;
use crate::traits::{FrameCallback, FrameHandle, FrameScheduler};

/// Frame rate assumed when no display-synced primitive is available
pub const FALLBACK_HZ: f32 = 60.0;

/// How ticks are paced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pacing {
    /// Host presents frames and calls `tick` after each one
    HostVsync,
    /// Timer fallback - one tick per interval
    FixedInterval(Duration),
}

impl Pacing {
    pub fn from_hz(hz: f32) -> Self {
        let hz = if hz.is_finite() && hz > 0.0 { hz } else { FALLBACK_HZ };
        Pacing::FixedInterval(Duration::from_secs_f32(1.0 / hz))
    }
}

/// Single-threaded next-frame callback queue
///
/// Callbacks requested while a tick is running are deferred to the following tick,
/// so a step that reschedules itself runs exactly once per frame.
pub struct FrameLoop {
    pacing: Pacing,
    pending: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    next_handle: Cell<u64>,
    frame_number: Cell<u64>,
}

impl FrameLoop {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            pending: RefCell::new(Vec::new()),
            next_handle: Cell::new(0),
            frame_number: Cell::new(0),
        }
    }

    /// Resolve pacing once from configuration
    pub fn from_config(config: &FrameLoopConfig) -> Self {
        let pacing = if config.host_vsync {
            Pacing::HostVsync
        } else {
            Pacing::from_hz(config.fallback_hz)
        };
        log::debug!("Frame loop pacing resolved to {:?}", pacing);
        Self::new(pacing)
    }

    pub fn host_paced() -> Self {
        Self::new(Pacing::HostVsync)
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Interval between ticks when timer-paced
    pub fn frame_interval(&self) -> Option<Duration> {
        match self.pacing {
            Pacing::HostVsync => None,
            Pacing::FixedInterval(interval) => Some(interval),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.borrow().is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number.get()
    }

    /// Run every callback queued before this tick started
    pub fn tick(&self) -> FrameInfo {
        let due = std::mem::take(&mut *self.pending.borrow_mut());
        let number = self.frame_number.get();
        self.frame_number.set(number + 1);

        let callbacks = due.len();
        for (handle, callback) in due {
            log::trace!("Frame {} running callback {:?}", number, handle);
            callback();
        }

        FrameInfo::new(number, callbacks)
    }

    /// Drive ticks until idle or `max_frames` ticks have run; returns ticks run
    pub fn run_until_idle(&self, max_frames: u64) -> u64 {
        self.run_until_idle_with(max_frames, |_| {})
    }

    /// Like `run_until_idle`, calling `on_frame` after every tick
    pub fn run_until_idle_with(&self, max_frames: u64, mut on_frame: impl FnMut(&FrameInfo)) -> u64 {
        let mut frames = 0;
        while self.has_pending() && frames < max_frames {
            if let Some(interval) = self.frame_interval() {
                std::thread::sleep(interval);
            }
            let info = self.tick();
            frames += 1;
            on_frame(&info);
        }
        frames
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(Pacing::from_hz(FALLBACK_HZ))
    }
}

impl FrameScheduler for FrameLoop {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);
        self.pending.borrow_mut().push((handle, callback));
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_callbacks_wait_for_tick() {
        let frames = FrameLoop::host_paced();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        frames.request_frame(Box::new(move || counter.set(counter.get() + 1)));
        assert_eq!(hits.get(), 0);
        assert!(frames.has_pending());

        let info = frames.tick();
        assert_eq!(hits.get(), 1);
        assert_eq!(info, FrameInfo::new(0, 1));
        assert!(!frames.has_pending());
    }

    #[test]
    fn test_requests_during_tick_run_next_frame() {
        let frames = Rc::new(FrameLoop::host_paced());
        let hits = Rc::new(Cell::new(0));

        let inner_frames = frames.clone();
        let counter = hits.clone();
        frames.request_frame(Box::new(move || {
            counter.set(counter.get() + 1);
            let counter = counter.clone();
            inner_frames.request_frame(Box::new(move || counter.set(counter.get() + 10)));
        }));

        frames.tick();
        assert_eq!(hits.get(), 1);
        assert_eq!(frames.pending_count(), 1);

        frames.tick();
        assert_eq!(hits.get(), 11);
        assert!(frames.tick().is_idle());
    }

    #[test]
    fn test_handles_are_unique() {
        let frames = FrameLoop::host_paced();
        let a = frames.request_frame(Box::new(|| {}));
        let b = frames.request_frame(Box::new(|| {}));
        assert_ne!(a, b);
    }

    #[test]
    fn test_pacing_from_config() {
        let host = FrameLoop::from_config(&FrameLoopConfig {
            host_vsync: true,
            fallback_hz: 60.0,
        });
        assert_eq!(host.pacing(), Pacing::HostVsync);
        assert_eq!(host.frame_interval(), None);

        let timer = FrameLoop::from_config(&FrameLoopConfig {
            host_vsync: false,
            fallback_hz: 60.0,
        });
        let interval = timer.frame_interval().unwrap();
        assert!((interval.as_secs_f64() * 1000.0 - 1000.0 / 60.0).abs() < 0.01);
    }

    #[test]
    fn test_invalid_rate_falls_back_to_sixty_hz() {
        assert_eq!(Pacing::from_hz(0.0), Pacing::from_hz(FALLBACK_HZ));
        assert_eq!(Pacing::from_hz(f32::NAN), Pacing::from_hz(FALLBACK_HZ));
    }

    #[test]
    fn test_run_until_idle_respects_limit() {
        let frames = Rc::new(FrameLoop::host_paced());

        fn forever(frames: Rc<FrameLoop>) {
            let next = frames.clone();
            frames.request_frame(Box::new(move || forever(next)));
        }
        forever(frames.clone());

        assert_eq!(frames.run_until_idle(5), 5);
        assert!(frames.has_pending());
        assert_eq!(frames.frame_number(), 5);
    }

    #[test]
    fn test_frame_hook_sees_every_tick() {
        let frames = Rc::new(FrameLoop::host_paced());
        let remaining = Rc::new(Cell::new(3));

        fn countdown(frames: Rc<FrameLoop>, remaining: Rc<Cell<u32>>) {
            let next = frames.clone();
            frames.request_frame(Box::new(move || {
                remaining.set(remaining.get() - 1);
                if remaining.get() > 0 {
                    countdown(next, remaining);
                }
            }));
        }
        countdown(frames.clone(), remaining.clone());

        let mut seen = Vec::new();
        let ran = frames.run_until_idle_with(10, |info| seen.push(info.number));

        assert_eq!(ran, 3);
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(remaining.get(), 0);
        assert!(!frames.has_pending());
    }
}
