use glam::Mat4;

/// Default tolerance when comparing pose widths
pub const WIDTH_TOLERANCE: f32 = 1e-6;

/// Animatable camera state - view transform plus projection width
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub transform: Mat4,
    pub width: f32,
}

impl Pose {
    pub const fn new(transform: Mat4, width: f32) -> Self {
        Self { transform, width }
    }

    /// Transforms must be identical, widths may differ by less than `tolerance`
    pub fn matches(&self, other: &Pose, tolerance: f32) -> bool {
        self.transform == other.transform && (self.width - other.width).abs() < tolerance
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            width: 1.0,
        }
    }
}

/// Opaque identifier handed out per queued request
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub(crate) u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// How a transition ended
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionOutcome {
    /// Target pose reached exactly, or nothing to do
    Completed,
    /// Removed from its queue by a later hard zoom before it could run
    Superseded,
    /// The animator was dropped while the request was in flight
    Abandoned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_pose_matches_within_width_tolerance() {
        let a = Pose::new(Mat4::IDENTITY, 5.0);
        let b = Pose::new(Mat4::IDENTITY, 5.0 + 1e-7);
        assert!(a.matches(&b, WIDTH_TOLERANCE));
    }

    #[test]
    fn test_pose_width_outside_tolerance() {
        let a = Pose::new(Mat4::IDENTITY, 5.0);
        let b = Pose::new(Mat4::IDENTITY, 5.001);
        assert!(!a.matches(&b, WIDTH_TOLERANCE));
    }

    #[test]
    fn test_pose_transform_must_be_exact() {
        let a = Pose::new(Mat4::IDENTITY, 5.0);
        let b = Pose::new(Mat4::from_translation(Vec3::new(0.0, 0.0, 1e-7)), 5.0);
        assert!(!a.matches(&b, WIDTH_TOLERANCE));
    }

    #[test]
    fn test_request_ids_order() {
        assert!(RequestId(1) < RequestId(2));
        assert_eq!(RequestId(7).value(), 7);
    }
}
