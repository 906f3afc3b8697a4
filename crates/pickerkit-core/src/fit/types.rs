//! Request and error types for image fitting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Size;
use crate::raster::FilterType;

/// Error types for image fitting operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// The source has no pixels along at least one axis, so no finite
    /// scale factor exists.
    #[error("Cannot fit an empty source image ({width}x{height})")]
    EmptySource { width: u32, height: u32 },

    /// The pixel buffer length does not match the declared dimensions.
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    InvalidBuffer { expected: usize, actual: usize },

    /// The output canvas would exceed the raster allocation limit.
    #[error("Canvas of {width}x{height} pixels is too large to allocate")]
    CanvasTooLarge { width: u32, height: u32 },
}

/// How the source size maps onto the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum ScaleMode {
    /// Stretch each axis independently to exactly cover the target.
    Fill,
    /// Uniform scale that covers the whole target, overflowing one axis.
    AspectFill,
    /// Uniform scale that fits entirely inside the target.
    #[default]
    AspectFit,
}

/// Placement of aspect-fit content inside the extra canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Center,
    Left,
    Top,
    Right,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Alignment {
    /// Every alignment, in declaration order.
    pub const ALL: [Alignment; 9] = [
        Alignment::Center,
        Alignment::Left,
        Alignment::Top,
        Alignment::Right,
        Alignment::Bottom,
        Alignment::TopLeft,
        Alignment::TopRight,
        Alignment::BottomLeft,
        Alignment::BottomRight,
    ];

    /// Horizontal anchor as a fraction of the free space (0 = left, 1 = right).
    pub(crate) fn horizontal_factor(self) -> f64 {
        match self {
            Alignment::Left | Alignment::TopLeft | Alignment::BottomLeft => 0.0,
            Alignment::Right | Alignment::TopRight | Alignment::BottomRight => 1.0,
            Alignment::Center | Alignment::Top | Alignment::Bottom => 0.5,
        }
    }

    /// Vertical anchor as a fraction of the free space (0 = top, 1 = bottom).
    pub(crate) fn vertical_factor(self) -> f64 {
        match self {
            Alignment::Top | Alignment::TopLeft | Alignment::TopRight => 0.0,
            Alignment::Bottom | Alignment::BottomLeft | Alignment::BottomRight => 1.0,
            Alignment::Center | Alignment::Left | Alignment::Right => 0.5,
        }
    }
}

/// Parameters for a single fit operation.
///
/// Defaults to aspect-fit, centered, untrimmed, bilinear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitRequest {
    pub target: Size,
    pub scale_mode: ScaleMode,
    pub alignment: Alignment,
    /// Crop the output to the scaled content instead of keeping the
    /// full target size.
    pub trim: bool,
    pub filter: FilterType,
}

impl FitRequest {
    pub fn new(target: Size) -> Self {
        Self {
            target,
            scale_mode: ScaleMode::default(),
            alignment: Alignment::default(),
            trim: false,
            filter: FilterType::default(),
        }
    }

    pub fn scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = FitRequest::new(Size::new(10.0, 20.0));
        assert_eq!(req.scale_mode, ScaleMode::AspectFit);
        assert_eq!(req.alignment, Alignment::Center);
        assert!(!req.trim);
        assert_eq!(req.filter, FilterType::Bilinear);
    }

    #[test]
    fn test_request_builder() {
        let req = FitRequest::new(Size::new(10.0, 20.0))
            .scale_mode(ScaleMode::Fill)
            .alignment(Alignment::BottomRight)
            .trim(true)
            .filter(FilterType::Nearest);
        assert_eq!(req.scale_mode, ScaleMode::Fill);
        assert_eq!(req.alignment, Alignment::BottomRight);
        assert!(req.trim);
        assert_eq!(req.filter, FilterType::Nearest);
    }

    #[test]
    fn test_alignment_factors() {
        assert_eq!(Alignment::TopLeft.horizontal_factor(), 0.0);
        assert_eq!(Alignment::TopLeft.vertical_factor(), 0.0);
        assert_eq!(Alignment::Bottom.horizontal_factor(), 0.5);
        assert_eq!(Alignment::Bottom.vertical_factor(), 1.0);
        assert_eq!(Alignment::Right.horizontal_factor(), 1.0);
        assert_eq!(Alignment::Right.vertical_factor(), 0.5);
    }

    #[test]
    fn test_fit_error_display() {
        let err = FitError::EmptySource {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "Cannot fit an empty source image (0x10)");
    }
}
