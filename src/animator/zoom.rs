use glam::Vec3;
use std::rc::Rc;
use std::time::Duration;

use super::{schedule, Animator, Shared};
use crate::core::{Completer, Phase, Transition};
use crate::math::{translate_local, view_forward};
use crate::types::{Pose, RequestId, TransitionOutcome};

/// Geometry of one zoom step, computed when the request is made
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPlan {
    pub start: Pose,
    /// Translation in the camera's local frame
    pub offset: Vec3,
    /// Width removed over the whole zoom
    pub delta_width: f32,
    pub target: Pose,
}

impl ZoomPlan {
    /// Move `distance` against the view direction, shrinking the width to match.
    ///
    /// The width change is dropped when it would leave less than one meter of
    /// width, so the projection never collapses or flips.
    pub fn new(start: Pose, distance: f32, field_of_view_degrees: f32, units_per_meter: f32) -> Self {
        let direction = -view_forward(&start.transform);
        let offset = direction * distance;

        let half_fov = field_of_view_degrees.to_radians() / 2.0;
        let mut delta_width = 2.0 * distance * half_fov.tan();
        if start.width - delta_width < units_per_meter {
            log::debug!(
                "Zoom width {} - {} would drop below one meter ({}), keeping width",
                start.width,
                delta_width,
                units_per_meter
            );
            delta_width = 0.0;
        }

        let target = Pose::new(translate_local(&start.transform, offset), start.width - delta_width);
        Self {
            start,
            offset,
            delta_width,
            target,
        }
    }

    /// Pose after fraction `t` of the zoom; orientation never changes
    pub fn pose_at(&self, t: f32) -> Pose {
        let translation = Vec3::ZERO.lerp(self.offset, t);
        Pose::new(
            translate_local(&self.start.transform, translation),
            self.start.width - self.delta_width * t,
        )
    }
}

struct ZoomTask {
    id: RequestId,
    plan: ZoomPlan,
    duration: Duration,
    phase: Phase,
    completer: Completer,
}

impl Animator {
    /// Move the camera `distance` along its view axis over `duration`.
    ///
    /// Chains from the last queued zoom target. A zero duration clears every pending
    /// zoom (they resolve as superseded) and jumps synchronously.
    pub fn animate_zoom(&self, distance: f32, duration: Duration) -> Transition {
        let shared = &self.shared;

        let (live, field_of_view, units_per_meter) = {
            let camera = shared.camera.borrow();
            (camera.pose(), camera.field_of_view_degrees(), camera.units_per_meter())
        };
        let start = shared.zoom_queue.borrow().last_target().unwrap_or(live);
        let plan = ZoomPlan::new(start, distance, field_of_view, units_per_meter);

        if duration.is_zero() {
            let cleared = shared.zoom_queue.borrow_mut().clear();
            if cleared > 0 {
                log::debug!("Hard zoom superseded {} pending zoom request(s)", cleared);
            }
            shared.write_pose(&plan.target);
            return Transition::resolved(TransitionOutcome::Completed);
        }

        let id = shared.next_request_id();
        let (completer, transition) = Transition::pending();
        shared.zoom_queue.borrow_mut().push(id, plan.target);
        log::debug!("Zoom request {:?} queued ({} over {:?})", id, distance, duration);

        step(
            shared,
            ZoomTask {
                id,
                plan,
                duration,
                phase: Phase::Queued,
                completer,
            },
        );
        transition
    }
}

fn step(shared: &Rc<Shared>, mut task: ZoomTask) {
    let (is_head, still_queued) = {
        let queue = shared.zoom_queue.borrow();
        (queue.is_head(task.id), queue.contains(task.id))
    };

    if !is_head {
        if !still_queued {
            log::debug!("Zoom request {:?} superseded", task.id);
            task.completer.complete(TransitionOutcome::Superseded);
            return;
        }
        schedule(shared, move |shared| step(shared, task));
        return;
    }

    let now = shared.clock.now();
    let started = task.phase.activate(now);
    let elapsed = now.saturating_sub(started);

    if elapsed < task.duration {
        let progress = elapsed.as_secs_f32() / task.duration.as_secs_f32();
        shared.write_pose(&task.plan.pose_at(progress));
        log::trace!("Zoom request {:?} at {:.3}", task.id, progress);
        schedule(shared, move |shared| step(shared, task));
    } else {
        shared.write_pose(&task.plan.target);
        shared.zoom_queue.borrow_mut().pop_head(task.id);
        task.phase = Phase::Completed;
        log::debug!("Zoom request {:?} completed", task.id);
        task.completer.complete(TransitionOutcome::Completed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_plan_moves_against_view_direction() {
        let start = Pose::new(Mat4::IDENTITY, 10.0);
        let plan = ZoomPlan::new(start, 2.0, 90.0, 1.0);

        // Forward is -Z, zoom direction is +Z
        assert!(plan.offset.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), EPSILON));
        // tan(45deg) = 1
        assert!((plan.delta_width - 4.0).abs() < EPSILON);
        assert!((plan.target.width - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_plan_singularity_guard() {
        let start = Pose::new(Mat4::IDENTITY, 1.5);
        let plan = ZoomPlan::new(start, 2.0, 90.0, 1.0);

        assert_eq!(plan.delta_width, 0.0);
        assert_eq!(plan.target.width, 1.5);
        assert!(plan.offset.length() > 0.0, "translation still applies");
    }

    #[test]
    fn test_pose_at_endpoints() {
        let start = Pose::new(Mat4::from_rotation_y(0.3), 10.0);
        let plan = ZoomPlan::new(start, 1.0, 60.0, 1.0);

        assert!(plan.pose_at(0.0).transform.abs_diff_eq(start.transform, EPSILON));
        assert!(plan.pose_at(1.0).transform.abs_diff_eq(plan.target.transform, EPSILON));
        assert!((plan.pose_at(0.5).width - (10.0 - plan.delta_width / 2.0)).abs() < EPSILON);
    }

    #[test]
    fn test_negative_distance_zooms_out() {
        let start = Pose::new(Mat4::IDENTITY, 10.0);
        let plan = ZoomPlan::new(start, -2.0, 90.0, 1.0);
        assert!(plan.target.width > start.width);
    }
}
