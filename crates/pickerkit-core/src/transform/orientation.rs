//! Device-orientation-aware view transforms.
//!
//! Camera overlays and tilt effects counter-rotate their content so it stays
//! upright as the device turns. Angles are in radians; positive angles rotate
//! counter-clockwise about the axis.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use super::matrix::Transform3D;
use crate::geometry::Size;

/// Eye distance used for the yaw perspective effect, in points.
pub const YAW_PERSPECTIVE_DISTANCE: f64 = 500.0;

/// Physical orientation reported by the device (raw values 0-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DeviceOrientation {
    /// Orientation could not be determined.
    #[default]
    Unknown = 0,
    /// Upright, home button / bottom edge down.
    Portrait = 1,
    /// Upside down.
    PortraitUpsideDown = 2,
    /// Rotated so the bottom edge points right.
    LandscapeLeft = 3,
    /// Rotated so the bottom edge points left.
    LandscapeRight = 4,
    /// Lying flat, screen up.
    FaceUp = 5,
    /// Lying flat, screen down.
    FaceDown = 6,
}

impl DeviceOrientation {
    /// Returns true for the two landscape orientations.
    #[inline]
    pub fn is_landscape(self) -> bool {
        matches!(
            self,
            DeviceOrientation::LandscapeLeft | DeviceOrientation::LandscapeRight
        )
    }

    /// Returns true when the device lies flat and gives no rotation hint.
    #[inline]
    pub fn is_flat(self) -> bool {
        matches!(self, DeviceOrientation::FaceUp | DeviceOrientation::FaceDown)
    }

    /// Returns true if content laid out for this orientation swaps width
    /// and height relative to portrait.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        self.is_landscape()
    }

    /// Rotation about Z that keeps content upright in this orientation.
    pub fn correction_angle(self) -> f64 {
        match self {
            DeviceOrientation::LandscapeLeft => FRAC_PI_2,
            DeviceOrientation::LandscapeRight => -FRAC_PI_2,
            DeviceOrientation::PortraitUpsideDown => PI,
            DeviceOrientation::Unknown
            | DeviceOrientation::Portrait
            | DeviceOrientation::FaceUp
            | DeviceOrientation::FaceDown => 0.0,
        }
    }

    /// Size of portrait-laid-out content once shown in this orientation.
    pub fn oriented_size(self, size: Size) -> Size {
        if self.swaps_dimensions() {
            Size::new(size.height, size.width)
        } else {
            size
        }
    }
}

impl From<u32> for DeviceOrientation {
    fn from(value: u32) -> Self {
        match value {
            1 => DeviceOrientation::Portrait,
            2 => DeviceOrientation::PortraitUpsideDown,
            3 => DeviceOrientation::LandscapeLeft,
            4 => DeviceOrientation::LandscapeRight,
            5 => DeviceOrientation::FaceUp,
            6 => DeviceOrientation::FaceDown,
            _ => DeviceOrientation::Unknown,
        }
    }
}

/// Counter-rotation about Z for `orientation`.
pub fn orientation_transform(orientation: DeviceOrientation) -> Transform3D {
    let angle = orientation.correction_angle();
    if angle == 0.0 {
        return Transform3D::IDENTITY;
    }
    Transform3D::rotation(angle, 0.0, 0.0, 1.0)
}

/// Rotation about the Z (viewing) axis.
pub fn roll_transform(angle: f64) -> Transform3D {
    Transform3D::rotation(angle, 0.0, 0.0, 1.0)
}

/// Rotation about the Y axis seen through a perspective projection.
pub fn yaw_transform(angle: f64) -> Transform3D {
    let perspective = Transform3D::IDENTITY.with_perspective(YAW_PERSPECTIVE_DISTANCE);
    Transform3D::rotation(angle, 0.0, 1.0, 0.0).concat(&perspective)
}

/// Yaw tilt followed by the orientation correction.
pub fn device_effect_transform(yaw: f64, orientation: DeviceOrientation) -> Transform3D {
    yaw_transform(yaw).concat(&orientation_transform(orientation))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(DeviceOrientation::from(1), DeviceOrientation::Portrait);
        assert_eq!(DeviceOrientation::from(3), DeviceOrientation::LandscapeLeft);
        assert_eq!(DeviceOrientation::from(6), DeviceOrientation::FaceDown);
        assert_eq!(DeviceOrientation::from(0), DeviceOrientation::Unknown);
        assert_eq!(DeviceOrientation::from(99), DeviceOrientation::Unknown);
    }

    #[test]
    fn test_orientation_classification() {
        assert!(DeviceOrientation::LandscapeLeft.is_landscape());
        assert!(DeviceOrientation::LandscapeRight.swaps_dimensions());
        assert!(!DeviceOrientation::PortraitUpsideDown.swaps_dimensions());
        assert!(DeviceOrientation::FaceUp.is_flat());
        assert!(!DeviceOrientation::Portrait.is_flat());
    }

    #[test]
    fn test_oriented_size() {
        let size = Size::new(320.0, 480.0);
        assert_eq!(DeviceOrientation::Portrait.oriented_size(size), size);
        assert_eq!(
            DeviceOrientation::LandscapeLeft.oriented_size(size),
            Size::new(480.0, 320.0)
        );
    }

    #[test]
    fn test_upright_orientations_are_identity() {
        for o in [
            DeviceOrientation::Unknown,
            DeviceOrientation::Portrait,
            DeviceOrientation::FaceUp,
            DeviceOrientation::FaceDown,
        ] {
            assert!(orientation_transform(o).is_identity(), "{:?}", o);
        }
    }

    #[test]
    fn test_landscape_transforms_are_opposite() {
        let left = orientation_transform(DeviceOrientation::LandscapeLeft);
        let right = orientation_transform(DeviceOrientation::LandscapeRight);
        assert!(left.concat(&right).approx_eq(&Transform3D::IDENTITY, TOL));

        let p = left.project_point(1.0, 0.0, 0.0);
        assert!((p[0]).abs() < TOL && (p[1] - 1.0).abs() < TOL);
    }

    #[test]
    fn test_upside_down_flips_both_axes() {
        let t = orientation_transform(DeviceOrientation::PortraitUpsideDown);
        let p = t.project_point(3.0, 4.0, 0.0);
        assert!((p[0] + 3.0).abs() < TOL);
        assert!((p[1] + 4.0).abs() < TOL);
    }

    #[test]
    fn test_roll_matches_z_rotation() {
        let t = roll_transform(0.3);
        assert!(t.approx_eq(&Transform3D::rotation(0.3, 0.0, 0.0, 1.0), TOL));
        assert_eq!(t.m34, 0.0);
    }

    #[test]
    fn test_yaw_has_perspective() {
        let t = yaw_transform(0.0);
        assert!((t.m34 + 1.0 / YAW_PERSPECTIVE_DISTANCE).abs() < TOL);
        // Zero yaw leaves the z = 0 plane untouched
        let p = t.project_point(10.0, 20.0, 0.0);
        assert!((p[0] - 10.0).abs() < TOL && (p[1] - 20.0).abs() < TOL);
    }

    #[test]
    fn test_yaw_foreshortens_receding_edge() {
        let t = yaw_transform(0.5);
        let near = t.project_point(-100.0, 100.0, 0.0);
        let far = t.project_point(100.0, 100.0, 0.0);
        // One vertical edge moves toward the viewer and appears taller
        assert!((near[1].abs() - far[1].abs()).abs() > 1.0);
    }

    #[test]
    fn test_device_effect_composes_yaw_and_orientation() {
        let effect = device_effect_transform(0.0, DeviceOrientation::Portrait);
        assert!(effect.approx_eq(&yaw_transform(0.0), TOL));

        let effect = device_effect_transform(0.2, DeviceOrientation::LandscapeRight);
        let expected = yaw_transform(0.2)
            .concat(&orientation_transform(DeviceOrientation::LandscapeRight));
        assert!(effect.approx_eq(&expected, TOL));
    }
}
