//! 3D view transforms: rotation, perspective and orientation correction.
//!
//! # Coordinate System
//!
//! - Angles are in radians, positive = counter-clockwise about the axis
//! - Points are row vectors (`p' = p · M`), so `a.concat(&b)` applies `a` first
//! - The viewer looks down the -Z axis; perspective uses `m34 = -1/distance`

mod matrix;
mod orientation;

pub use matrix::Transform3D;
pub use orientation::{
    device_effect_transform, orientation_transform, roll_transform, yaw_transform,
    DeviceOrientation, YAW_PERSPECTIVE_DISTANCE,
};
