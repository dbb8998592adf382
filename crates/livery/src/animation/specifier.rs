//! Animation timing specifiers.

use std::time::Duration;

use super::curve::AnimationCurve;
use crate::coerce;
use crate::value::RawSource;

/// Delay, duration and curve for one animation.
///
/// Read from three independently inherited keys: `key + "Duration"`,
/// `key + "Delay"` (both in seconds) and `key + "Curve"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnimationSpecifier {
    delay: Duration,
    duration: Duration,
    curve: AnimationCurve,
}

impl AnimationSpecifier {
    pub fn new(delay: Duration, duration: Duration, curve: AnimationCurve) -> Self {
        Self {
            delay,
            duration,
            curve,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn curve(&self) -> AnimationCurve {
        self.curve
    }

    /// Delay plus duration.
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// Decodes a specifier for `key`. Never fails.
    pub fn coerce<S: RawSource + ?Sized>(source: &S, key: &str) -> Self {
        let seconds = |suffix: &str| {
            let raw = source.raw_for(&format!("{key}{suffix}"));
            seconds_to_duration(coerce::time_interval(raw.as_ref()))
        };
        let curve = AnimationCurve::coerce(source.raw_for(&format!("{key}Curve")).as_ref());
        Self::new(seconds("Delay"), seconds("Duration"), curve)
    }
}

/// Negative, non-finite and overflowing values become zero.
fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}
