use glam::Mat4;

use crate::types::Pose;

/// Live camera owned by the host viewer
///
/// The animator reads it when a request starts and writes it once per frame.
pub trait CameraState {
    /// Current view transform
    fn transform(&self) -> Mat4;

    /// Replace the view transform
    fn set_transform(&mut self, transform: Mat4);

    /// Orthographic / perspective width in scene units
    fn width(&self) -> f32;

    /// Replace the projection width
    fn set_width(&mut self, width: f32);

    /// Vertical field of view in degrees
    fn field_of_view_degrees(&self) -> f32;

    /// Scene units in one real-world meter
    fn units_per_meter(&self) -> f32;

    fn pose(&self) -> Pose {
        Pose::new(self.transform(), self.width())
    }

    fn set_pose(&mut self, pose: &Pose) {
        self.set_transform(pose.transform);
        self.set_width(pose.width);
    }
}
