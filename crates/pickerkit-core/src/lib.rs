//! PickerKit Core - presentation helpers for a photo/video picker
//!
//! This crate provides the platform-independent pieces of the picker UI:
//! thumbnail fitting, view decorations, orientation transforms, media
//! durations, and picker-wide configuration.
//!
//! # Modules
//!
//! - [`fit`] - scale and align an image inside a fixed-size canvas
//! - [`border`] - layer tree with a bottom-border decoration
//! - [`transform`] - 3D rotation/perspective and device orientation
//! - [`media_time`] - rational timestamps converted to seconds
//! - [`config`] - colors, titles, icons, tab order and toggles

pub mod border;
pub mod color;
pub mod config;
pub mod fit;
pub mod geometry;
pub mod media_time;
pub mod raster;
pub mod transform;

pub use border::{add_bottom_border, BorderError, Layer};
pub use color::Color;
pub use config::{ConfigError, PickerConfiguration};
pub use fit::{fit_image, fit_optional, Alignment, FitError, FitLayout, FitRequest, ScaleMode};
pub use geometry::{Point, Rect, Size};
pub use media_time::MediaTime;
pub use raster::{FilterType, RasterImage};
pub use transform::{device_effect_transform, DeviceOrientation, Transform3D};
