//! PickerKit WASM - WebAssembly bindings for PickerKit
//!
//! This crate provides WASM bindings to expose the pickerkit-core helpers
//! to the JavaScript/TypeScript picker UI.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data and enum codes
//! - `fit` - Thumbnail and preview fitting
//! - `transform` - Orientation-aware 3D transforms
//! - `media` - Media time to seconds / duration badges
//! - `config` - Picker configuration objects
//!
//! # Usage
//!
//! ```typescript
//! import init, { fit_image, JsRasterImage } from '@pickerkit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const source = new JsRasterImage(bitmap.width, bitmap.height, rgba);
//! const thumb = fit_image(source, 256, 256, 1, 0, false, 1);
//! console.log(`Thumbnail ${thumb.width}x${thumb.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod config;
mod fit;
mod media;
mod transform;
mod types;

// Re-export public types
pub use config::{
    current_configuration, default_configuration, install_configuration, parse_configuration,
};
pub use fit::{fit_image, fit_layout};
pub use media::{format_duration, media_time_seconds};
pub use transform::{
    device_effect_transform, orientation_transform, roll_transform, to_css_matrix3d,
    yaw_transform,
};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
