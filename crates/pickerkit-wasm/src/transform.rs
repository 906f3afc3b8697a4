//! WASM bindings for orientation-aware view transforms.
//!
//! Matrices are returned as 16 numbers in row-major order
//! (`m11, m12, ..., m44`), with points as row vectors. That is also the
//! argument order of CSS `matrix3d()`; [`to_css_matrix3d`] builds the style
//! string.

use crate::types::orientation_from_u8;
use pickerkit_core::transform::{self, Transform3D};
use wasm_bindgen::prelude::*;

/// Yaw tilt followed by the counter-rotation for the device orientation.
///
/// # Arguments
///
/// * `yaw` - Rotation about the vertical axis, in radians
/// * `orientation` - Raw device orientation (0 = Unknown, 1 = Portrait,
///   2 = PortraitUpsideDown, 3 = LandscapeLeft, 4 = LandscapeRight,
///   5 = FaceUp, 6 = FaceDown)
#[wasm_bindgen]
pub fn device_effect_transform(yaw: f64, orientation: u8) -> Vec<f64> {
    transform::device_effect_transform(yaw, orientation_from_u8(orientation))
        .to_row_major()
        .to_vec()
}

/// Counter-rotation about Z for a raw device orientation.
#[wasm_bindgen]
pub fn orientation_transform(orientation: u8) -> Vec<f64> {
    transform::orientation_transform(orientation_from_u8(orientation))
        .to_row_major()
        .to_vec()
}

/// Rotation about the viewing axis, in radians.
#[wasm_bindgen]
pub fn roll_transform(angle: f64) -> Vec<f64> {
    transform::roll_transform(angle).to_row_major().to_vec()
}

/// Rotation about the vertical axis with perspective, in radians.
#[wasm_bindgen]
pub fn yaw_transform(angle: f64) -> Vec<f64> {
    transform::yaw_transform(angle).to_row_major().to_vec()
}

/// Format a row-major matrix as a CSS `matrix3d(...)` value.
///
/// Returns an error if `matrix` does not hold exactly 16 numbers.
#[wasm_bindgen]
pub fn to_css_matrix3d(matrix: &[f64]) -> Result<String, JsValue> {
    css_matrix3d(matrix).ok_or_else(|| JsValue::from_str("matrix3d needs exactly 16 values"))
}

fn css_matrix3d(matrix: &[f64]) -> Option<String> {
    let m: [f64; 16] = matrix.try_into().ok()?;
    let t = Transform3D::from_row_major(m);
    // CSS matrix3d lists the column-vector matrix column by column, which is
    // our row-vector matrix row by row
    let values: Vec<String> = t.to_row_major().iter().map(|v| v.to_string()).collect();
    Some(format!("matrix3d({})", values.join(", ")))
}
