pub mod clock;
pub mod frame_loop;
pub mod queue;
pub mod transition;

pub use clock::{Clock, ManualClock};
pub use frame_loop::{FrameLoop, Pacing, FALLBACK_HZ};
pub use queue::{QueueEntry, TransitionQueue};
pub use transition::{Completer, Phase, Transition};
