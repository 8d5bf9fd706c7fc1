use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::traits::CameraState;

/// Plain viewer camera holding the live pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerCamera {
    pub transform: Mat4,
    pub width: f32,
    pub field_of_view_degrees: f32,
    pub units_per_meter: f32,
}

impl ViewerCamera {
    pub fn new(transform: Mat4, width: f32, field_of_view_degrees: f32, units_per_meter: f32) -> Self {
        Self {
            transform,
            width,
            field_of_view_degrees,
            units_per_meter,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            Mat4::from_translation(Vec3::from_array(config.translation)),
            config.width,
            config.field_of_view_degrees,
            config.units_per_meter,
        )
    }
}

impl Default for ViewerCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl CameraState for ViewerCamera {
    fn transform(&self) -> Mat4 {
        self.transform
    }

    fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    fn field_of_view_degrees(&self) -> f32 {
        self.field_of_view_degrees
    }

    fn units_per_meter(&self) -> f32 {
        self.units_per_meter
    }
}
