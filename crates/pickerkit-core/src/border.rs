//! Retained layer tree and the bottom-border decoration.
//!
//! Picker cells and toolbars draw a hairline under their content. The border
//! is a named sublayer so it can be found and replaced when the host view is
//! resized or restyled.

use thiserror::Error;

use crate::color::Color;
use crate::geometry::Rect;
use crate::raster::{raster_byte_len, RasterImage};

/// Name of the sublayer added by [`add_bottom_border`].
pub const BOTTOM_BORDER_LAYER_NAME: &str = "bottom-border";

/// Error types for border decoration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BorderError {
    /// Border width must be a positive finite number of points.
    #[error("Border width must be positive, got {0}")]
    InvalidWidth(f64),

    /// The layer's frame is too large to rasterize.
    #[error("Layer of {width}x{height} pixels is too large to rasterize")]
    CanvasTooLarge { width: u32, height: u32 },
}

/// A rectangular node in a view's layer tree.
///
/// Sublayer frames are relative to the parent's top-left corner and are
/// painted in order, later sublayers on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    pub name: Option<String>,
    pub frame: Rect,
    pub background: Option<Color>,
    pub sublayers: Vec<Layer>,
}

impl Layer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn add_sublayer(&mut self, layer: Layer) {
        self.sublayers.push(layer);
    }

    /// First direct sublayer with the given name.
    pub fn sublayer(&self, name: &str) -> Option<&Layer> {
        self.sublayers
            .iter()
            .find(|l| l.name.as_deref() == Some(name))
    }

    /// Remove every direct sublayer with the given name, returning how many
    /// were removed.
    pub fn remove_sublayers_named(&mut self, name: &str) -> usize {
        let before = self.sublayers.len();
        self.sublayers.retain(|l| l.name.as_deref() != Some(name));
        before - self.sublayers.len()
    }

    /// Paint this layer and its sublayers into an image the size of the
    /// layer's frame. Uncovered pixels stay transparent.
    ///
    /// # Errors
    ///
    /// Returns [`BorderError::CanvasTooLarge`] if the frame exceeds
    /// [`crate::raster::MAX_RASTER_BYTES`].
    pub fn rasterize(&self) -> Result<RasterImage, BorderError> {
        let (width, height) = self.frame.size.to_pixels();
        if raster_byte_len(width, height).is_none() {
            return Err(BorderError::CanvasTooLarge { width, height });
        }
        let mut canvas = RasterImage::transparent(width, height);
        // Children are positioned relative to this layer, not its parent
        let local = Rect {
            origin: Default::default(),
            size: self.frame.size,
        };
        self.paint_into(&mut canvas, local);
        Ok(canvas)
    }

    fn paint_into(&self, canvas: &mut RasterImage, frame: Rect) {
        if let Some(color) = self.background {
            // Any partially covered pixel is painted, so hairlines survive
            let x0 = frame.min_x().floor() as i64;
            let y0 = frame.min_y().floor() as i64;
            let x1 = frame.max_x().ceil() as i64;
            let y1 = frame.max_y().ceil() as i64;
            canvas.fill_rect(x0, y0, x1 - x0, y1 - y0, color);
        }
        for sub in &self.sublayers {
            let child = sub.frame.offset(frame.min_x(), frame.min_y());
            sub.paint_into(canvas, child);
        }
    }
}

/// Add a `width`-point line of `color` along the bottom edge of `layer`.
///
/// Any bottom border added earlier is replaced, so calling this again after
/// a resize or theme change never stacks borders.
///
/// # Errors
///
/// Returns [`BorderError::InvalidWidth`] if `width` is not a positive finite
/// number.
pub fn add_bottom_border(layer: &mut Layer, color: Color, width: f64) -> Result<(), BorderError> {
    if !(width.is_finite() && width > 0.0) {
        return Err(BorderError::InvalidWidth(width));
    }

    let size = layer.frame.size;
    let border = Layer::new(Rect::new(0.0, size.height - width, size.width, width))
        .named(BOTTOM_BORDER_LAYER_NAME)
        .with_background(color);

    let replaced = layer.remove_sublayers_named(BOTTOM_BORDER_LAYER_NAME);
    tracing::trace!(width, replaced, "adding bottom border");
    layer.add_sublayer(border);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Color = Color::rgb(200, 200, 200);

    fn cell() -> Layer {
        Layer::new(Rect::new(0.0, 0.0, 100.0, 40.0))
    }

    #[test]
    fn test_border_frame_hugs_bottom_edge() {
        let mut layer = cell();
        add_bottom_border(&mut layer, GRAY, 1.0).unwrap();

        let border = layer.sublayer(BOTTOM_BORDER_LAYER_NAME).unwrap();
        assert_eq!(border.frame, Rect::new(0.0, 39.0, 100.0, 1.0));
        assert_eq!(border.background, Some(GRAY));
    }

    #[test]
    fn test_border_is_not_duplicated() {
        let mut layer = cell();
        add_bottom_border(&mut layer, GRAY, 1.0).unwrap();
        add_bottom_border(&mut layer, Color::BLACK, 2.0).unwrap();

        assert_eq!(layer.sublayers.len(), 1);
        let border = layer.sublayer(BOTTOM_BORDER_LAYER_NAME).unwrap();
        assert_eq!(border.frame.size.height, 2.0);
        assert_eq!(border.background, Some(Color::BLACK));
    }

    #[test]
    fn test_border_keeps_other_sublayers() {
        let mut layer = cell();
        layer.add_sublayer(Layer::new(Rect::new(0.0, 0.0, 10.0, 10.0)).named("icon"));
        add_bottom_border(&mut layer, GRAY, 1.0).unwrap();

        assert_eq!(layer.sublayers.len(), 2);
        assert!(layer.sublayer("icon").is_some());
        // Border is appended last so it paints on top
        assert_eq!(
            layer.sublayers[1].name.as_deref(),
            Some(BOTTOM_BORDER_LAYER_NAME)
        );
    }

    #[test]
    fn test_invalid_widths_are_rejected() {
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut layer = cell();
            let err = add_bottom_border(&mut layer, GRAY, width).unwrap_err();
            assert!(matches!(err, BorderError::InvalidWidth(_)));
            assert!(layer.sublayers.is_empty());
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BorderError::InvalidWidth(0.0).to_string(),
            "Border width must be positive, got 0"
        );
    }

    #[test]
    fn test_rasterize_paints_border_on_background() {
        let mut layer = cell().with_background(Color::WHITE);
        add_bottom_border(&mut layer, GRAY, 2.0).unwrap();

        let img = layer.rasterize().unwrap();
        assert_eq!((img.width, img.height), (100, 40));
        assert_eq!(img.pixel(50, 37), Some([255, 255, 255, 255]));
        assert_eq!(img.pixel(50, 38), Some([200, 200, 200, 255]));
        assert_eq!(img.pixel(0, 39), Some([200, 200, 200, 255]));
    }

    #[test]
    fn test_rasterize_offsets_nested_layers() {
        let mut root = Layer::new(Rect::new(500.0, 500.0, 20.0, 20.0));
        let mut child = Layer::new(Rect::new(10.0, 10.0, 10.0, 10.0));
        child.add_sublayer(Layer::new(Rect::new(5.0, 5.0, 5.0, 5.0)).with_background(GRAY));
        root.add_sublayer(child);

        let img = root.rasterize().unwrap();
        assert_eq!(img.pixel(14, 14), Some([0, 0, 0, 0]));
        assert_eq!(img.pixel(15, 15), Some([200, 200, 200, 255]));
        assert_eq!(img.pixel(19, 19), Some([200, 200, 200, 255]));
    }

    #[test]
    fn test_rasterize_keeps_hairline_border() {
        let mut layer = cell().with_background(Color::WHITE);
        add_bottom_border(&mut layer, GRAY, 0.5).unwrap();

        let img = layer.rasterize().unwrap();
        assert_eq!(img.pixel(50, 38), Some([255, 255, 255, 255]));
        assert_eq!(img.pixel(50, 39), Some([200, 200, 200, 255]));
    }

    #[test]
    fn test_rasterize_rejects_huge_frame() {
        let layer = Layer::new(Rect::new(0.0, 0.0, 1e10, 1e10));
        let err = layer.rasterize().unwrap_err();
        assert!(matches!(err, BorderError::CanvasTooLarge { .. }));
    }
}
