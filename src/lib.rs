pub mod animator;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod easing;
pub mod frame;
pub mod math;
pub mod traits;
pub mod types;

pub use animator::{Animator, SharedCamera, ZoomPlan};
pub use easing::Easing;
pub use types::{Pose, RequestId, TransitionOutcome};
