//! Image fitting: scale and align an image inside a fixed-size canvas.
//!
//! This is what the picker uses to build grid thumbnails and preview frames.
//! The work is split in two steps:
//! - [`FitLayout::compute`] - pure geometry (scale factors, scaled size,
//!   canvas size, placement origin)
//! - [`fit_image`] - rasterizes the layout into a new RGBA image
//!
//! # Example
//!
//! ```ignore
//! use pickerkit_core::fit::{fit_image, Alignment, FitRequest, ScaleMode};
//! use pickerkit_core::geometry::Size;
//!
//! let request = FitRequest::new(Size::new(256.0, 256.0))
//!     .scale_mode(ScaleMode::AspectFit)
//!     .alignment(Alignment::Bottom);
//! let thumbnail = fit_image(&photo, &request)?;
//! ```

mod layout;
mod render;
mod types;

pub use layout::FitLayout;
pub use render::{fit_image, fit_optional};
pub use types::{Alignment, FitError, FitRequest, ScaleMode};
