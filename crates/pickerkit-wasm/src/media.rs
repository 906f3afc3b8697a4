//! WASM bindings for media time conversion.

use pickerkit_core::media_time::MediaTime;
use wasm_bindgen::prelude::*;

/// Convert `value / timescale` to seconds. A non-positive timescale gives NaN.
#[wasm_bindgen]
pub fn media_time_seconds(value: i64, timescale: i32) -> f64 {
    MediaTime::new(value, timescale).seconds()
}

/// Format a duration for a video badge, e.g. `"1:05"`, or `"--:--"` when the
/// timescale is not usable.
///
/// # Example (TypeScript)
///
/// ```typescript
/// badge.textContent = format_duration(BigInt(asset.durationTicks), asset.timescale);
/// ```
#[wasm_bindgen]
pub fn format_duration(value: i64, timescale: i32) -> String {
    MediaTime::new(value, timescale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_time_seconds() {
        assert_eq!(media_time_seconds(900, 600), 1.5);
        assert!(media_time_seconds(900, 0).is_nan());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(65 * 600, 600), "1:05");
        assert_eq!(format_duration(1, 0), "--:--");
    }
}
