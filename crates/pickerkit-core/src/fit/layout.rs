//! Pure geometry for fitting a source size into a target size.
//!
//! # Algorithm
//!
//! ```text
//! scale_x = target_w / source_w          (zero target extents count as 1)
//! scale_y = target_h / source_h
//!
//! Fill       -> (scale_x, scale_y)
//! AspectFit  -> min(scale_x, scale_y) on both axes
//! AspectFill -> max(scale_x, scale_y) on both axes
//!
//! scaled = (eff_x * source_w, eff_y * source_h)
//! canvas = trim ? scaled : target
//! origin = (canvas - scaled) * alignment_anchor
//! ```
//!
//! Alignment only applies to aspect-fit. Aspect-fill overflow is always
//! centered and fill content always starts at the canvas origin.

use super::types::{Alignment, ScaleMode};
use crate::geometry::{Point, Rect, Size};

/// Result of the geometric step of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitLayout {
    /// Effective horizontal scale factor.
    pub scale_x: f64,
    /// Effective vertical scale factor.
    pub scale_y: f64,
    /// Size of the source after scaling.
    pub scaled: Size,
    /// Size of the output surface.
    pub canvas: Size,
    /// Where the scaled source is drawn inside the canvas.
    pub origin: Point,
}

impl FitLayout {
    /// Compute the layout for drawing `source` into `target`.
    ///
    /// A zero-width or zero-height source is not rejected here: its scale
    /// factors come out infinite or NaN, exactly as the division produces
    /// them. [`super::fit_image`] refuses to rasterize such sources.
    pub fn compute(
        source: Size,
        target: Size,
        scale_mode: ScaleMode,
        alignment: Alignment,
        trim: bool,
    ) -> Self {
        let target_w = if target.width == 0.0 { 1.0 } else { target.width };
        let target_h = if target.height == 0.0 { 1.0 } else { target.height };

        let raw_x = target_w / source.width;
        let raw_y = target_h / source.height;

        let (scale_x, scale_y) = match scale_mode {
            ScaleMode::Fill => (raw_x, raw_y),
            ScaleMode::AspectFit => {
                let s = raw_x.min(raw_y);
                (s, s)
            }
            ScaleMode::AspectFill => {
                let s = raw_x.max(raw_y);
                (s, s)
            }
        };

        let scaled = Size::new(scale_x * source.width, scale_y * source.height);
        let canvas = if trim { scaled } else { target };

        let (fx, fy) = match scale_mode {
            ScaleMode::AspectFit => (alignment.horizontal_factor(), alignment.vertical_factor()),
            ScaleMode::AspectFill => (0.5, 0.5),
            ScaleMode::Fill => (0.0, 0.0),
        };

        let origin = if trim {
            Point::ZERO
        } else {
            Point::new(
                anchor(canvas.width, scaled.width, fx),
                anchor(canvas.height, scaled.height, fy),
            )
        };

        Self {
            scale_x,
            scale_y,
            scaled,
            canvas,
            origin,
        }
    }

    /// The rectangle the scaled source occupies in canvas coordinates.
    pub fn draw_rect(&self) -> Rect {
        Rect {
            origin: self.origin,
            size: self.scaled,
        }
    }
}

/// Offset of content of length `content` inside `space`, anchored at `factor`.
#[inline]
fn anchor(space: f64, content: f64, factor: f64) -> f64 {
    if factor == 0.0 {
        0.0
    } else {
        (space - content) * factor
    }
}
