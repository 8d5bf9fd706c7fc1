use std::rc::Rc;
use std::time::Duration;

use super::{schedule, Animator, Shared};
use crate::core::{Completer, Phase, Transition};
use crate::easing::Easing;
use crate::math::Decomposed;
use crate::types::{Pose, RequestId, TransitionOutcome};

struct ViewTask {
    id: RequestId,
    start_width: f32,
    target: Pose,
    from: Decomposed,
    to: Decomposed,
    duration: Duration,
    easing: Easing,
    phase: Phase,
    completer: Completer,
}

impl ViewTask {
    fn pose_at(&self, t: f32) -> Pose {
        let transform = self.from.interpolate(&self.to, t).to_matrix();
        let width = self.start_width + (self.target.width - self.start_width) * t;
        Pose::new(transform, width)
    }
}

impl Animator {
    /// Animate the camera to `target` over `duration`.
    ///
    /// Starts from the last queued view target when one exists, so back-to-back
    /// calls chain instead of jumping. A zero duration jumps synchronously.
    pub fn animate_view_to(&self, target: Pose, duration: Duration, easing: Easing) -> Transition {
        let shared = &self.shared;

        if duration.is_zero() {
            shared.write_pose(&target);
            return Transition::resolved(TransitionOutcome::Completed);
        }

        let start = shared
            .view_queue
            .borrow()
            .last_target()
            .unwrap_or_else(|| shared.live_pose());

        if start.matches(&target, shared.config.width_tolerance) {
            return Transition::resolved(TransitionOutcome::Completed);
        }

        let id = shared.next_request_id();
        let (completer, transition) = Transition::pending();
        let task = ViewTask {
            id,
            start_width: start.width,
            target,
            from: Decomposed::from_matrix(&start.transform),
            to: Decomposed::from_matrix(&target.transform),
            duration,
            easing,
            phase: Phase::Queued,
            completer,
        };

        shared.view_queue.borrow_mut().push(id, target);
        log::debug!(
            "View request {:?} queued ({:?}, {}), {} pending",
            id,
            duration,
            easing,
            shared.view_queue.borrow().len()
        );

        step(shared, task);
        transition
    }

    /// `animate_view_to` with the configured default easing
    pub fn animate_view_to_default(&self, target: Pose, duration: Duration) -> Transition {
        self.animate_view_to(target, duration, self.shared.config.default_easing)
    }
}

fn step(shared: &Rc<Shared>, mut task: ViewTask) {
    if !shared.view_queue.borrow().is_head(task.id) {
        // Not our turn yet
        schedule(shared, move |shared| step(shared, task));
        return;
    }

    let now = shared.clock.now();
    let started = task.phase.activate(now);
    let elapsed = now.saturating_sub(started);

    if elapsed < task.duration {
        let progress = elapsed.as_secs_f32() / task.duration.as_secs_f32();
        let pose = task.pose_at(task.easing.apply(progress));
        shared.write_pose(&pose);
        log::trace!("View request {:?} at {:.3}", task.id, progress);
        schedule(shared, move |shared| step(shared, task));
    } else {
        // Exact target, no accumulated drift
        shared.write_pose(&task.target);
        shared.view_queue.borrow_mut().pop_head(task.id);
        task.phase = Phase::Completed;
        log::debug!("View request {:?} completed", task.id);
        task.completer.complete(TransitionOutcome::Completed);
    }
}
