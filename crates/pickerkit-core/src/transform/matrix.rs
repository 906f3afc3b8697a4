//! 4x4 homogeneous transform matrix.
//!
//! Points are row vectors multiplied on the left: `p' = p · M`. With this
//! convention `a.concat(&b)` applies `a` first and then `b`, and the
//! translation lives in the bottom row (`m41..m43`).

use serde::{Deserialize, Serialize};

const PERSPECTIVE_EPSILON: f64 = 1e-12;

/// A 3D affine or projective transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m14: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m24: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
    pub m34: f64,
    pub m41: f64,
    pub m42: f64,
    pub m43: f64,
    pub m44: f64,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    pub const IDENTITY: Transform3D = Transform3D::from_row_major([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub const fn from_row_major(m: [f64; 16]) -> Self {
        Self {
            m11: m[0],
            m12: m[1],
            m13: m[2],
            m14: m[3],
            m21: m[4],
            m22: m[5],
            m23: m[6],
            m24: m[7],
            m31: m[8],
            m32: m[9],
            m33: m[10],
            m34: m[11],
            m41: m[12],
            m42: m[13],
            m43: m[14],
            m44: m[15],
        }
    }

    pub fn to_row_major(&self) -> [f64; 16] {
        [
            self.m11, self.m12, self.m13, self.m14, //
            self.m21, self.m22, self.m23, self.m24, //
            self.m31, self.m32, self.m33, self.m34, //
            self.m41, self.m42, self.m43, self.m44,
        ]
    }

    /// Rotation by `angle` radians around the axis `(x, y, z)`.
    ///
    /// The axis is normalized first. A zero-length axis yields identity.
    pub fn rotation(angle: f64, x: f64, y: f64, z: f64) -> Self {
        let len = (x * x + y * y + z * z).sqrt();
        if len == 0.0 || !len.is_finite() {
            return Self::IDENTITY;
        }
        let (x, y, z) = (x / len, y / len, z / len);

        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Self::from_row_major([
            c + x * x * t,
            x * y * t + z * s,
            x * z * t - y * s,
            0.0,
            x * y * t - z * s,
            c + y * y * t,
            y * z * t + x * s,
            0.0,
            x * z * t + y * s,
            y * z * t - x * s,
            c + z * z * t,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.m11 = sx;
        m.m22 = sy;
        m.m33 = sz;
        m
    }

    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.m41 = tx;
        m.m42 = ty;
        m.m43 = tz;
        m
    }

    /// Set the perspective term so that the eye sits `distance` points in
    /// front of the z = 0 plane.
    pub fn with_perspective(mut self, distance: f64) -> Self {
        self.m34 = -1.0 / distance;
        self
    }

    /// Matrix product `self · other`: apply `self`, then `other`.
    pub fn concat(&self, other: &Transform3D) -> Transform3D {
        let a = self.to_row_major();
        let b = other.to_row_major();
        let mut out = [0.0f64; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = (0..4).map(|k| a[row * 4 + k] * b[k * 4 + col]).sum();
            }
        }
        Self::from_row_major(out)
    }

    /// Apply `other` first and then this transform.
    pub fn pre_concat(&self, other: &Transform3D) -> Transform3D {
        other.concat(self)
    }

    /// Transform a point, returning homogeneous `(x, y, z, w)`.
    pub fn transform_point(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64, f64) {
        (
            x * self.m11 + y * self.m21 + z * self.m31 + self.m41,
            x * self.m12 + y * self.m22 + z * self.m32 + self.m42,
            x * self.m13 + y * self.m23 + z * self.m33 + self.m43,
            x * self.m14 + y * self.m24 + z * self.m34 + self.m44,
        )
    }

    /// Transform a point and apply the perspective divide when possible.
    pub fn project_point(&self, x: f64, y: f64, z: f64) -> [f64; 3] {
        let (tx, ty, tz, tw) = self.transform_point(x, y, z);
        if tw.abs() < PERSPECTIVE_EPSILON {
            [tx, ty, tz]
        } else {
            [tx / tw, ty / tw, tz / tw]
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Element-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Transform3D, tolerance: f64) -> bool {
        self.to_row_major()
            .iter()
            .zip(other.to_row_major().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}
