//! Rasterization of a [`FitLayout`] into a fresh canvas.
//!
//! The source is resampled with the `image` crate's filters and copied into a
//! transparent RGBA canvas. Content that falls outside the canvas (aspect-fill
//! overflow) is cropped from the source before resampling. When whole source
//! pixels would still overhang the canvas by a wide margin, the visible window
//! is sampled directly instead, so the work stays bounded by the canvas.

use image::{imageops, Rgba, RgbaImage};

use super::layout::FitLayout;
use super::types::{FitError, FitRequest};
use crate::raster::{raster_byte_len, FilterType, RasterImage, BYTES_PER_PIXEL};

/// Largest resampled patch, as a multiple of the visible area, before
/// switching to direct sampling.
const MAX_PATCH_OVERDRAW: u64 = 2;

/// Scale and align `image` into the canvas described by `request`.
///
/// # Errors
///
/// - [`FitError::EmptySource`] if the source has zero width or height
/// - [`FitError::InvalidBuffer`] if the pixel buffer does not match the
///   declared dimensions
/// - [`FitError::CanvasTooLarge`] if the output canvas exceeds
///   [`crate::raster::MAX_RASTER_BYTES`]
#[tracing::instrument(
    skip(image, request),
    fields(src_w = image.width, src_h = image.height, mode = ?request.scale_mode)
)]
pub fn fit_image(image: &RasterImage, request: &FitRequest) -> Result<RasterImage, FitError> {
    if image.width == 0 || image.height == 0 {
        return Err(FitError::EmptySource {
            width: image.width,
            height: image.height,
        });
    }

    let source = image.to_rgba_image().ok_or(FitError::InvalidBuffer {
        expected: image.pixel_count() * BYTES_PER_PIXEL,
        actual: image.pixels.len(),
    })?;

    let layout = FitLayout::compute(
        image.size(),
        request.target,
        request.scale_mode,
        request.alignment,
        request.trim,
    );
    tracing::debug!(?layout, "computed fit layout");

    let canvas = render_layout(&source, &layout, request.filter)?;
    Ok(RasterImage::from_rgba_image(canvas))
}

/// Fit an optional image. An absent source yields an absent result.
pub fn fit_optional(
    image: Option<&RasterImage>,
    request: &FitRequest,
) -> Result<Option<RasterImage>, FitError> {
    image.map(|img| fit_image(img, request)).transpose()
}

/// Draw `source` into a new canvas according to `layout`.
fn render_layout(
    source: &RgbaImage,
    layout: &FitLayout,
    filter: FilterType,
) -> Result<RgbaImage, FitError> {
    let (canvas_w, canvas_h) = layout.canvas.to_pixels();
    if raster_byte_len(canvas_w, canvas_h).is_none() {
        tracing::warn!(canvas_w, canvas_h, "refusing oversized fit canvas");
        return Err(FitError::CanvasTooLarge {
            width: canvas_w,
            height: canvas_h,
        });
    }
    let (draw_w, draw_h) = layout.scaled.to_pixels();
    let draw_x = pixel_offset(layout.origin.x);
    let draw_y = pixel_offset(layout.origin.y);

    // Zero-initialized buffer == fully transparent
    let mut canvas = RgbaImage::new(canvas_w, canvas_h);

    let (src_w, src_h) = source.dimensions();
    let (Some(xs), Some(ys)) = (
        clip_axis(draw_x, draw_w, canvas_w, src_w),
        clip_axis(draw_y, draw_h, canvas_h, src_h),
    ) else {
        return Ok(canvas);
    };

    if needs_direct_sampling(&xs, &ys) {
        tracing::trace!(?xs, ?ys, "sampling visible window directly");
        let patch = sample_visible(source, &xs, &ys, filter);
        imageops::replace(&mut canvas, &patch, xs.vis_start, ys.vis_start);
        return Ok(canvas);
    }

    let patch = if xs.covers(src_w) && ys.covers(src_h) {
        resample(source, xs.dst_len, ys.dst_len, filter)
    } else {
        let visible = imageops::crop_imm(source, xs.src_start, ys.src_start, xs.src_len, ys.src_len)
            .to_image();
        resample(&visible, xs.dst_len, ys.dst_len, filter)
    };

    imageops::replace(&mut canvas, &patch, xs.dst_start, ys.dst_start);
    Ok(canvas)
}

fn resample(image: &RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    imageops::resize(image, width, height, filter.to_image_filter())
}

/// Whether resampling whole source pixels would produce a patch much larger
/// than what lands on the canvas.
fn needs_direct_sampling(xs: &AxisSpan, ys: &AxisSpan) -> bool {
    let patch = u64::from(xs.dst_len) * u64::from(ys.dst_len);
    let visible = u64::from(xs.vis_len) * u64::from(ys.vis_len);
    patch > visible.saturating_mul(MAX_PATCH_OVERDRAW)
        || raster_byte_len(xs.dst_len, ys.dst_len).is_none()
}

/// Inverse-map every visible canvas pixel into the source.
///
/// Only reached under heavy magnification, where Lanczos3 and bilinear are
/// indistinguishable, so both use bilinear sampling.
fn sample_visible(
    source: &RgbaImage,
    xs: &AxisSpan,
    ys: &AxisSpan,
    filter: FilterType,
) -> RgbaImage {
    RgbaImage::from_fn(xs.vis_len, ys.vis_len, |x, y| {
        let u = xs.normalized(x);
        let v = ys.normalized(y);
        let sampled = match filter {
            FilterType::Nearest => imageops::sample_nearest(source, u, v),
            FilterType::Bilinear | FilterType::Lanczos3 => imageops::sample_bilinear(source, u, v),
        };
        sampled.unwrap_or(Rgba([0, 0, 0, 0]))
    })
}

fn pixel_offset(v: f64) -> i64 {
    if v.is_finite() {
        v.round() as i64
    } else {
        0
    }
}

/// The part of one axis of the draw rectangle that lands on the canvas,
/// expressed in canvas pixels (`vis_*`) and as a whole-source-pixel range
/// with its resampled destination (`src_*`, `dst_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisSpan {
    draw_pos: i64,
    draw_len: u32,
    vis_start: i64,
    vis_len: u32,
    src_start: u32,
    src_len: u32,
    dst_start: i64,
    dst_len: u32,
}

impl AxisSpan {
    fn covers(&self, src_len: u32) -> bool {
        self.src_start == 0 && self.src_len == src_len
    }

    /// Position of the center of visible pixel `i` along the draw span, in
    /// `[0, 1]`.
    fn normalized(&self, i: u32) -> f32 {
        let offset = (self.vis_start - self.draw_pos) as f64 + f64::from(i) + 0.5;
        (offset / f64::from(self.draw_len)).clamp(0.0, 1.0) as f32
    }
}

/// Clip a draw span `[draw_pos, draw_pos + draw_len)` to `[0, canvas_len)`.
///
/// The source range is widened to whole source pixels, so the destination
/// span may overhang the canvas; `imageops::replace` clips the overhang.
fn clip_axis(draw_pos: i64, draw_len: u32, canvas_len: u32, src_len: u32) -> Option<AxisSpan> {
    let draw_end = draw_pos + draw_len as i64;
    let vis_start = draw_pos.max(0);
    let vis_end = draw_end.min(canvas_len as i64);
    if vis_start >= vis_end {
        return None;
    }
    let vis_len = (vis_end - vis_start) as u32;

    if vis_start == draw_pos && vis_end == draw_end {
        return Some(AxisSpan {
            draw_pos,
            draw_len,
            vis_start,
            vis_len,
            src_start: 0,
            src_len,
            dst_start: draw_pos,
            dst_len: draw_len,
        });
    }

    let src_per_dst = src_len as f64 / draw_len as f64;
    let s0 = (((vis_start - draw_pos) as f64) * src_per_dst).floor() as u32;
    let s1 = ((((vis_end - draw_pos) as f64) * src_per_dst).ceil() as u32)
        .min(src_len)
        .max(s0 + 1);

    let dst_per_src = draw_len as f64 / src_len as f64;
    let d0 = draw_pos + (s0 as f64 * dst_per_src).round() as i64;
    let d1 = draw_pos + (s1 as f64 * dst_per_src).round() as i64;

    Some(AxisSpan {
        draw_pos,
        draw_len,
        vis_start,
        vis_len,
        src_start: s0,
        src_len: s1 - s0,
        dst_start: d0,
        dst_len: (d1 - d0).max(1) as u32,
    })
}
