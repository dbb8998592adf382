//! Animation timing curves.

use crate::value::RawValue;

/// The easing applied over an animation's duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimationCurve {
    #[default]
    EaseInOut,
    EaseOut,
    EaseIn,
    Linear,
}

impl AnimationCurve {
    /// Matches `easeinout`, `easeout`, `easein` or `linear` in any case.
    /// Unrecognized names fall back to [`AnimationCurve::EaseInOut`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "easeout" => AnimationCurve::EaseOut,
            "easein" => AnimationCurve::EaseIn,
            "linear" => AnimationCurve::Linear,
            _ => AnimationCurve::EaseInOut,
        }
    }

    pub fn coerce(raw: Option<&RawValue>) -> Self {
        raw.and_then(RawValue::as_str)
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// The canonical lowercase name, accepted by [`parse`](Self::parse).
    pub fn name(&self) -> &'static str {
        match self {
            AnimationCurve::EaseInOut => "easeinout",
            AnimationCurve::EaseOut => "easeout",
            AnimationCurve::EaseIn => "easein",
            AnimationCurve::Linear => "linear",
        }
    }

    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    ///
    /// Inputs outside the range are clamped.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            AnimationCurve::Linear => t,
            AnimationCurve::EaseIn => t * t * t,
            AnimationCurve::EaseOut => 1.0 - (1.0 - t).powi(3),
            AnimationCurve::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AnimationCurve; 4] = [
        AnimationCurve::EaseInOut,
        AnimationCurve::EaseOut,
        AnimationCurve::EaseIn,
        AnimationCurve::Linear,
    ];

    #[test]
    fn test_parse_is_case_insensitive() {
        for name in ["EaseOut", "easeout", "EASEOUT"] {
            assert_eq!(AnimationCurve::parse(name), AnimationCurve::EaseOut);
        }
        assert_eq!(AnimationCurve::parse("LINEAR"), AnimationCurve::Linear);
        assert_eq!(AnimationCurve::parse("EaseIn"), AnimationCurve::EaseIn);
        assert_eq!(AnimationCurve::parse("easeInOut"), AnimationCurve::EaseInOut);
    }

    #[test]
    fn test_unknown_falls_back_to_ease_in_out() {
        assert_eq!(AnimationCurve::parse("bounce"), AnimationCurve::EaseInOut);
        assert_eq!(AnimationCurve::coerce(None), AnimationCurve::EaseInOut);
        assert_eq!(
            AnimationCurve::coerce(Some(&RawValue::Real(1.0))),
            AnimationCurve::EaseInOut
        );
    }

    #[test]
    fn test_name_round_trips() {
        for curve in ALL {
            assert_eq!(AnimationCurve::parse(curve.name()), curve);
        }
    }

    #[test]
    fn test_apply_endpoints() {
        for curve in ALL {
            assert!((curve.apply(0.0) - 0.0).abs() < 1e-12);
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_apply_shapes() {
        assert_eq!(AnimationCurve::Linear.apply(0.25), 0.25);
        assert!(AnimationCurve::EaseIn.apply(0.25) < 0.25);
        assert!(AnimationCurve::EaseOut.apply(0.25) > 0.25);
        assert!((AnimationCurve::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_apply_clamps() {
        assert_eq!(AnimationCurve::EaseOut.apply(-1.0), 0.0);
        assert_eq!(AnimationCurve::EaseIn.apply(2.0), 1.0);
    }
}
