use glam::{Mat4, Quat, Vec3};

/// View-space forward axis (camera looks down -Z)
pub const VIEW_FORWARD: Vec3 = Vec3::NEG_Z;

/// Transform split into its scale, rotation and translation parts
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decomposed {
    pub scale: Vec3,
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Decomposed {
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            scale,
            rotation,
            translation,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Slerp rotation, lerp scale and translation
    pub fn interpolate(&self, other: &Decomposed, t: f32) -> Decomposed {
        Decomposed {
            scale: self.scale.lerp(other.scale, t),
            rotation: self.rotation.slerp(other.rotation, t),
            translation: self.translation.lerp(other.translation, t),
        }
    }
}

/// Translate along the transform's own axes (right-multiplied)
pub fn translate_local(matrix: &Mat4, offset: Vec3) -> Mat4 {
    *matrix * Mat4::from_translation(offset)
}

/// Rotate about the transform's own Z axis (right-multiplied)
pub fn rotate_local_z(matrix: &Mat4, radians: f32) -> Mat4 {
    *matrix * Mat4::from_rotation_z(radians)
}

/// Direction the camera looks along, expressed in the transform's local frame
pub fn view_forward(matrix: &Mat4) -> Vec3 {
    let (_, rotation, _) = matrix.inverse().to_scale_rotation_translation();
    rotation * VIEW_FORWARD
}
