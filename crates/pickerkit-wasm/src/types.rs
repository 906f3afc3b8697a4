//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core PickerKit
//! types, plus the integer codes used to pass enums across the boundary.

use pickerkit_core::fit::{Alignment, ScaleMode};
use pickerkit_core::raster::{FilterType, RasterImage};
use pickerkit_core::transform::DeviceOrientation;
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is
/// made to JavaScript memory as a `Uint8Array`, ready for `new ImageData(...)`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this
/// is optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core RasterImage. Clones the pixel data.
    pub(crate) fn to_raster(&self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}

/// Convert a u8 scale mode value: 0 = Fill, 1 = AspectFill, 2 = AspectFit.
///
/// Any other value defaults to AspectFit.
pub(crate) fn scale_mode_from_u8(value: u8) -> ScaleMode {
    match value {
        0 => ScaleMode::Fill,
        1 => ScaleMode::AspectFill,
        _ => ScaleMode::AspectFit,
    }
}

/// Convert a u8 alignment value.
///
/// Values 0-8 map to Center, Left, Top, Right, Bottom, TopLeft, TopRight,
/// BottomLeft, BottomRight. Any other value defaults to Center.
pub(crate) fn alignment_from_u8(value: u8) -> Alignment {
    Alignment::ALL
        .get(value as usize)
        .copied()
        .unwrap_or_default()
}

/// Convert a raw device orientation value (0-6); unknown values map to Unknown.
pub(crate) fn orientation_from_u8(value: u8) -> DeviceOrientation {
    DeviceOrientation::from(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_raster_image_creation() {
        let img = JsRasterImage::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_raster_conversion() {
        let core = RasterImage::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let js = JsRasterImage::from_raster(core.clone());
        assert_eq!(js.pixels(), core.pixels);
        assert_eq!(js.to_raster(), core);
    }

    #[test]
    fn test_filter_from_u8() {
        assert!(matches!(filter_from_u8(0), FilterType::Nearest));
        assert!(matches!(filter_from_u8(1), FilterType::Bilinear));
        assert!(matches!(filter_from_u8(2), FilterType::Lanczos3));
        // Unknown values default to Bilinear
        assert!(matches!(filter_from_u8(3), FilterType::Bilinear));
        assert!(matches!(filter_from_u8(255), FilterType::Bilinear));
    }

    #[test]
    fn test_scale_mode_from_u8() {
        assert_eq!(scale_mode_from_u8(0), ScaleMode::Fill);
        assert_eq!(scale_mode_from_u8(1), ScaleMode::AspectFill);
        assert_eq!(scale_mode_from_u8(2), ScaleMode::AspectFit);
        assert_eq!(scale_mode_from_u8(9), ScaleMode::AspectFit);
    }

    #[test]
    fn test_alignment_from_u8() {
        assert_eq!(alignment_from_u8(0), Alignment::Center);
        assert_eq!(alignment_from_u8(2), Alignment::Top);
        assert_eq!(alignment_from_u8(8), Alignment::BottomRight);
        assert_eq!(alignment_from_u8(9), Alignment::Center);
    }

    #[test]
    fn test_orientation_from_u8() {
        assert_eq!(orientation_from_u8(4), DeviceOrientation::LandscapeRight);
        assert_eq!(orientation_from_u8(200), DeviceOrientation::Unknown);
    }
}
