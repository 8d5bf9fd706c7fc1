//! Camera transition engine
//!
//! `Animator` owns two independent FIFO queues (view and zoom) and the continuous
//! rotation state. Every queued request runs a step on each frame the scheduler
//! delivers; only the head of its queue writes to the live camera.
//!
//! All state is single-threaded. Scheduled steps hold weak references, so dropping
//! the animator abandons whatever is still in flight.

mod rotation;
mod view;
mod zoom;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::AnimatorConfig;
use crate::core::TransitionQueue;
use crate::traits::{CameraState, FrameScheduler, TimeSource};
use crate::types::{Pose, RequestId};

pub use zoom::ZoomPlan;

/// Live camera shared between the host and the animator
pub type SharedCamera = Rc<RefCell<dyn CameraState>>;

pub(crate) struct Shared {
    camera: SharedCamera,
    frames: Rc<dyn FrameScheduler>,
    clock: Rc<dyn TimeSource>,
    config: AnimatorConfig,
    view_queue: RefCell<TransitionQueue>,
    zoom_queue: RefCell<TransitionQueue>,
    rotation: RefCell<rotation::RotationLoop>,
    next_id: Cell<u64>,
}

impl Shared {
    fn next_request_id(&self) -> RequestId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        RequestId(id)
    }

    fn live_pose(&self) -> Pose {
        self.camera.borrow().pose()
    }

    fn write_pose(&self, pose: &Pose) {
        self.camera.borrow_mut().set_pose(pose);
    }
}

/// Run `step` on the next frame, unless the animator has been dropped by then
fn schedule(shared: &Rc<Shared>, step: impl FnOnce(&Rc<Shared>) + 'static) {
    let weak = Rc::downgrade(shared);
    shared.frames.request_frame(Box::new(move || {
        if let Some(shared) = weak.upgrade() {
            step(&shared);
        }
    }));
}

/// Frame-driven camera animation engine
///
/// The camera must not be borrowed by the host while the frame loop ticks.
pub struct Animator {
    shared: Rc<Shared>,
}

impl Animator {
    pub fn new(
        camera: SharedCamera,
        frames: Rc<dyn FrameScheduler>,
        clock: Rc<dyn TimeSource>,
        config: AnimatorConfig,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                camera,
                frames,
                clock,
                config,
                view_queue: RefCell::new(TransitionQueue::new()),
                zoom_queue: RefCell::new(TransitionQueue::new()),
                rotation: RefCell::new(rotation::RotationLoop::default()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.shared.config
    }

    pub fn camera(&self) -> &SharedCamera {
        &self.shared.camera
    }

    /// View requests queued or running
    pub fn pending_views(&self) -> usize {
        self.shared.view_queue.borrow().len()
    }

    /// Zoom requests queued or running
    pub fn pending_zooms(&self) -> usize {
        self.shared.zoom_queue.borrow().len()
    }

    /// True when no view or zoom request is in flight and rotation is off
    pub fn is_idle(&self) -> bool {
        self.pending_views() == 0 && self.pending_zooms() == 0 && !self.is_rotating()
    }
}
