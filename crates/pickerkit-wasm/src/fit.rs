//! WASM bindings for image fitting.
//!
//! These back the picker's grid thumbnails and preview frames.

use crate::types::{alignment_from_u8, filter_from_u8, scale_mode_from_u8, JsRasterImage};
use pickerkit_core::fit::{self, FitLayout, FitRequest};
use pickerkit_core::geometry::Size;
use wasm_bindgen::prelude::*;

fn build_request(
    width: f64,
    height: f64,
    scale_mode: u8,
    alignment: u8,
    trim: bool,
    filter: u8,
) -> FitRequest {
    FitRequest::new(Size::new(width, height))
        .scale_mode(scale_mode_from_u8(scale_mode))
        .alignment(alignment_from_u8(alignment))
        .trim(trim)
        .filter(filter_from_u8(filter))
}

/// Scale and align an image inside a `width` x `height` canvas.
///
/// # Arguments
///
/// * `image` - Source RGBA image
/// * `width`, `height` - Target canvas size (0 is treated as 1 for scaling)
/// * `scale_mode` - 0 = Fill, 1 = AspectFill, 2 = AspectFit
/// * `alignment` - 0-8: Center, Left, Top, Right, Bottom, TopLeft, TopRight,
///   BottomLeft, BottomRight (only used by AspectFit)
/// * `trim` - Crop the result to the scaled content
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
///
/// # Errors
///
/// Returns an error if the image is empty, its buffer does not match its
/// dimensions, or the output canvas is too large to allocate.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Square grid thumbnail
/// const thumb = fit_image(photo, 256, 256, 1, 0, false, 1);
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(thumb.pixels()), thumb.width), 0, 0);
/// ```
#[wasm_bindgen]
pub fn fit_image(
    image: &JsRasterImage,
    width: f64,
    height: f64,
    scale_mode: u8,
    alignment: u8,
    trim: bool,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    let request = build_request(width, height, scale_mode, alignment, trim, filter);
    fit::fit_image(&image.to_raster(), &request)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute the fit geometry without rendering.
///
/// Returns `[scaleX, scaleY, originX, originY, scaledW, scaledH, canvasW, canvasH]`.
#[wasm_bindgen]
pub fn fit_layout(
    source_width: f64,
    source_height: f64,
    width: f64,
    height: f64,
    scale_mode: u8,
    alignment: u8,
    trim: bool,
) -> Vec<f64> {
    let l = FitLayout::compute(
        Size::new(source_width, source_height),
        Size::new(width, height),
        scale_mode_from_u8(scale_mode),
        alignment_from_u8(alignment),
        trim,
    );
    vec![
        l.scale_x,
        l.scale_y,
        l.origin.x,
        l.origin.y,
        l.scaled.width,
        l.scaled.height,
        l.canvas.width,
        l.canvas.height,
    ]
}
