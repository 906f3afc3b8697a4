//! Rational media timestamps.
//!
//! A [`MediaTime`] counts `value` ticks of `1 / timescale` seconds, which keeps
//! frame-accurate durations exact. The picker only needs it to show video
//! durations, so conversion goes one way: to floating-point seconds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a [`MediaTime`] holds a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum TimeKind {
    /// `value / timescale` is meaningful.
    Numeric,
    /// No time at all (the default).
    #[default]
    Invalid,
    PositiveInfinity,
    NegativeInfinity,
    /// A time that exists but is not known yet, such as a live stream's
    /// duration.
    Indefinite,
}

/// A timestamp or duration expressed as `value / timescale` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct MediaTime {
    pub value: i64,
    pub timescale: i32,
    pub kind: TimeKind,
}

impl MediaTime {
    pub const INVALID: MediaTime = MediaTime::special(TimeKind::Invalid);
    pub const POSITIVE_INFINITY: MediaTime = MediaTime::special(TimeKind::PositiveInfinity);
    pub const NEGATIVE_INFINITY: MediaTime = MediaTime::special(TimeKind::NegativeInfinity);
    pub const INDEFINITE: MediaTime = MediaTime::special(TimeKind::Indefinite);

    const fn special(kind: TimeKind) -> Self {
        Self {
            value: 0,
            timescale: 0,
            kind,
        }
    }

    /// A numeric time of `value` ticks at `timescale` ticks per second.
    pub const fn new(value: i64, timescale: i32) -> Self {
        Self {
            value,
            timescale,
            kind: TimeKind::Numeric,
        }
    }

    /// Nearest time to `seconds` at the given timescale.
    ///
    /// Non-finite input maps onto the matching special time; NaN and a
    /// non-positive timescale yield [`MediaTime::INVALID`].
    pub fn from_seconds(seconds: f64, timescale: i32) -> Self {
        if seconds.is_nan() || timescale <= 0 {
            return Self::INVALID;
        }
        if seconds == f64::INFINITY {
            return Self::POSITIVE_INFINITY;
        }
        if seconds == f64::NEG_INFINITY {
            return Self::NEGATIVE_INFINITY;
        }
        // `as` saturates at the i64 bounds
        Self::new((seconds * timescale as f64).round() as i64, timescale)
    }

    /// Numeric with a usable timescale.
    pub fn is_numeric(&self) -> bool {
        self.kind == TimeKind::Numeric && self.timescale > 0
    }

    /// Convert to seconds.
    ///
    /// Infinite times map onto the matching infinity; invalid and
    /// indefinite times, and numeric times with a non-positive timescale,
    /// map onto NaN.
    pub fn seconds(&self) -> f64 {
        match self.kind {
            TimeKind::Numeric if self.timescale > 0 => self.value as f64 / self.timescale as f64,
            TimeKind::PositiveInfinity => f64::INFINITY,
            TimeKind::NegativeInfinity => f64::NEG_INFINITY,
            TimeKind::Numeric | TimeKind::Invalid | TimeKind::Indefinite => f64::NAN,
        }
    }
}

impl fmt::Display for MediaTime {
    /// Formats as `m:ss` (duration badge style), `--:--` when not finite.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.seconds();
        if !seconds.is_finite() {
            return f.write_str("--:--");
        }

        let total = seconds.abs().round() as u64;
        let sign = if seconds < 0.0 && total > 0 { "-" } else { "" };
        write!(f, "{}{}:{:02}", sign, total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_from_ticks() {
        assert_eq!(MediaTime::new(600, 600).seconds(), 1.0);
        assert_eq!(MediaTime::new(1500, 1000).seconds(), 1.5);
        assert_eq!(MediaTime::new(-300, 600).seconds(), -0.5);
    }

    #[test]
    fn test_special_times() {
        assert!(MediaTime::INVALID.seconds().is_nan());
        assert!(MediaTime::INDEFINITE.seconds().is_nan());
        assert_eq!(MediaTime::POSITIVE_INFINITY.seconds(), f64::INFINITY);
        assert_eq!(MediaTime::NEGATIVE_INFINITY.seconds(), f64::NEG_INFINITY);
        assert_eq!(MediaTime::default(), MediaTime::INVALID);
    }

    #[test]
    fn test_zero_timescale_is_nan() {
        let t = MediaTime::new(10, 0);
        assert!(!t.is_numeric());
        assert!(t.seconds().is_nan());
        assert!(MediaTime::new(10, -5).seconds().is_nan());
    }

    #[test]
    fn test_from_seconds_rounds_to_nearest_tick() {
        let t = MediaTime::from_seconds(1.2346, 1000);
        assert_eq!(t, MediaTime::new(1235, 1000));
        assert!(t.is_numeric());
    }

    #[test]
    fn test_from_seconds_special_inputs() {
        assert_eq!(MediaTime::from_seconds(f64::NAN, 600), MediaTime::INVALID);
        assert_eq!(MediaTime::from_seconds(1.0, 0), MediaTime::INVALID);
        assert_eq!(
            MediaTime::from_seconds(f64::INFINITY, 600),
            MediaTime::POSITIVE_INFINITY
        );
        assert_eq!(
            MediaTime::from_seconds(f64::NEG_INFINITY, 600),
            MediaTime::NEGATIVE_INFINITY
        );
    }

    #[test]
    fn test_display_duration_badge() {
        assert_eq!(MediaTime::new(0, 600).to_string(), "0:00");
        assert_eq!(MediaTime::new(5 * 600, 600).to_string(), "0:05");
        assert_eq!(MediaTime::new(754, 10).to_string(), "1:15");
        assert_eq!(MediaTime::new(3725, 1).to_string(), "62:05");
        assert_eq!(MediaTime::new(-90, 1).to_string(), "-1:30");
        assert_eq!(MediaTime::INDEFINITE.to_string(), "--:--");
        assert_eq!(MediaTime::POSITIVE_INFINITY.to_string(), "--:--");
    }
}
