use std::rc::Rc;

use super::{schedule, Animator, Shared};
use crate::core::{Completer, Transition};
use crate::math::rotate_local_z;
use crate::types::TransitionOutcome;

#[derive(Default)]
pub(crate) struct RotationLoop {
    running: bool,
    /// A step is scheduled and will observe `running` next frame
    loop_alive: bool,
    waiters: Vec<Completer>,
}

impl Animator {
    /// Spin the camera about its vertical axis until `stop_rotation`.
    ///
    /// Resolves when rotation stops, or immediately if it was already running.
    pub fn start_rotation(&self) -> Transition {
        let mut rotation = self.shared.rotation.borrow_mut();
        if rotation.running {
            return Transition::resolved(TransitionOutcome::Completed);
        }

        rotation.running = true;
        let (completer, transition) = Transition::pending();
        rotation.waiters.push(completer);

        // A loop that has not yet seen a stop picks the flag back up
        let spawn = !rotation.loop_alive;
        rotation.loop_alive = true;
        drop(rotation);

        if spawn {
            log::debug!(
                "Rotation started ({} deg per frame)",
                self.shared.config.rotation_step_degrees
            );
            step(&self.shared);
        }
        transition
    }

    /// Ask the rotation loop to stop on its next frame. Idempotent.
    pub fn stop_rotation(&self) {
        let mut rotation = self.shared.rotation.borrow_mut();
        if rotation.running {
            log::debug!("Rotation stop requested");
        }
        rotation.running = false;
    }

    pub fn is_rotating(&self) -> bool {
        self.shared.rotation.borrow().running
    }
}

fn step(shared: &Rc<Shared>) {
    let mut rotation = shared.rotation.borrow_mut();
    if !rotation.running {
        rotation.loop_alive = false;
        let waiters = std::mem::take(&mut rotation.waiters);
        drop(rotation);

        log::debug!("Rotation stopped");
        for waiter in waiters {
            waiter.complete(TransitionOutcome::Completed);
        }
        return;
    }
    drop(rotation);

    let radians = shared.config.rotation_step_degrees.to_radians();
    {
        let mut camera = shared.camera.borrow_mut();
        let rotated = rotate_local_z(&camera.transform(), radians);
        camera.set_transform(rotated);
    }
    schedule(shared, step);
}
