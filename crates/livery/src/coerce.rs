//! Scalar coercers.
//!
//! Each function decodes an optional raw value into a primitive and is total:
//! absence, an explicit null, or an unexpected shape all produce the type's
//! default instead of an error. Strings holding numbers are accepted wherever
//! a number is expected, since hand-edited documents often quote them.

use crate::value::RawValue;

/// Decodes a boolean.
///
/// Accepts booleans, numbers (zero is `false`), and the strings
/// `true`/`yes`/`on` or `false`/`no`/`off` in any case. A numeric string is
/// treated like a number. Anything else is `false`.
pub fn boolean(raw: Option<&RawValue>) -> bool {
    match raw {
        Some(RawValue::Bool(b)) => *b,
        Some(RawValue::Integer(i)) => *i != 0,
        Some(RawValue::Real(r)) => *r != 0.0 && !r.is_nan(),
        Some(RawValue::String(s)) => parse_bool(s),
        _ => false,
    }
}

fn parse_bool(s: &str) -> bool {
    let s = s.trim();
    if ["true", "yes", "on"].iter().any(|t| s.eq_ignore_ascii_case(t)) {
        return true;
    }
    match s.parse::<f64>() {
        Ok(n) => n != 0.0 && !n.is_nan(),
        Err(_) => false,
    }
}

/// Decodes a string. Numbers and booleans render as their text form.
pub fn string(raw: Option<&RawValue>) -> String {
    match raw {
        Some(RawValue::String(s)) => s.clone(),
        Some(RawValue::Integer(i)) => i.to_string(),
        Some(RawValue::Real(r)) => r.to_string(),
        Some(RawValue::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Decodes an integer. Reals are truncated toward zero, saturating at the
/// bounds of `i64`; NaN becomes 0.
pub fn integer(raw: Option<&RawValue>) -> i64 {
    match raw {
        Some(RawValue::Integer(i)) => *i,
        Some(RawValue::Real(r)) => r.trunc() as i64,
        Some(RawValue::Bool(b)) => i64::from(*b),
        Some(RawValue::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| parse_finite(s).map(|r| r.trunc() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Decodes a real number from an integer, a real, or a numeric string.
pub fn real(raw: Option<&RawValue>) -> f64 {
    match raw {
        Some(RawValue::Integer(i)) => *i as f64,
        Some(RawValue::Real(r)) => *r,
        Some(RawValue::String(s)) => parse_finite(s.trim()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Decodes a time interval in seconds. Non-finite values become 0.
pub fn time_interval(raw: Option<&RawValue>) -> f64 {
    let seconds = real(raw);
    if seconds.is_finite() {
        seconds
    } else {
        0.0
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn s(v: &str) -> RawValue {
        RawValue::String(v.to_string())
    }

    // =========================================================================
    // Boolean
    // =========================================================================

    #[test]
    fn test_boolean_literals() {
        assert!(boolean(Some(&RawValue::Bool(true))));
        assert!(!boolean(Some(&RawValue::Bool(false))));
    }

    #[test]
    fn test_boolean_numeric() {
        assert!(!boolean(Some(&RawValue::Integer(0))));
        assert!(boolean(Some(&RawValue::Integer(-2))));
        assert!(boolean(Some(&RawValue::Real(0.5))));
        assert!(!boolean(Some(&RawValue::Real(0.0))));
        assert!(!boolean(Some(&RawValue::Real(f64::NAN))));
    }

    #[test]
    fn test_boolean_strings() {
        assert!(boolean(Some(&s("YES"))));
        assert!(boolean(Some(&s(" true "))));
        assert!(boolean(Some(&s("On"))));
        assert!(boolean(Some(&s("1"))));
        assert!(!boolean(Some(&s("no"))));
        assert!(!boolean(Some(&s("0"))));
        assert!(!boolean(Some(&s("maybe"))));
    }

    #[test]
    fn test_boolean_defaults() {
        assert!(!boolean(None));
        assert!(!boolean(Some(&RawValue::Null)));
        assert!(!boolean(Some(&RawValue::Pair(1.0, 1.0))));
    }

    // =========================================================================
    // String
    // =========================================================================

    #[test]
    fn test_string_values() {
        assert_eq!(string(Some(&s("hello"))), "hello");
        assert_eq!(string(Some(&RawValue::Integer(7))), "7");
        assert_eq!(string(Some(&RawValue::Real(1.5))), "1.5");
        assert_eq!(string(Some(&RawValue::Bool(true))), "true");
    }

    #[test]
    fn test_string_defaults() {
        assert_eq!(string(None), "");
        assert_eq!(string(Some(&RawValue::Null)), "");
        assert_eq!(string(Some(&RawValue::Quad(1.0, 2.0, 3.0, 4.0))), "");
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    #[test]
    fn test_integer_truncates_toward_zero() {
        assert_eq!(integer(Some(&RawValue::Real(2.9))), 2);
        assert_eq!(integer(Some(&RawValue::Real(-2.9))), -2);
        assert_eq!(integer(Some(&RawValue::Real(f64::NAN))), 0);
        assert_eq!(integer(Some(&RawValue::Real(1e300))), i64::MAX);
    }

    #[test]
    fn test_integer_from_strings() {
        assert_eq!(integer(Some(&s("12"))), 12);
        assert_eq!(integer(Some(&s("-7.8"))), -7);
        assert_eq!(integer(Some(&s("twelve"))), 0);
    }

    #[test]
    fn test_integer_defaults() {
        assert_eq!(integer(None), 0);
        assert_eq!(integer(Some(&RawValue::Null)), 0);
        assert_eq!(integer(Some(&RawValue::Bool(true))), 1);
    }

    #[test]
    fn test_real_values() {
        assert_eq!(real(Some(&RawValue::Integer(3))), 3.0);
        assert_eq!(real(Some(&RawValue::Real(0.25))), 0.25);
        assert_eq!(real(Some(&s("1.75"))), 1.75);
        assert_eq!(real(Some(&s("inf"))), 0.0);
        assert_eq!(real(None), 0.0);
        assert_eq!(real(Some(&RawValue::Pair(1.0, 2.0))), 0.0);
    }

    #[test]
    fn test_time_interval() {
        assert_eq!(time_interval(Some(&RawValue::Real(0.3))), 0.3);
        assert_eq!(time_interval(Some(&RawValue::Integer(2))), 2.0);
        assert_eq!(time_interval(Some(&RawValue::Real(f64::INFINITY))), 0.0);
        assert_eq!(time_interval(None), 0.0);
    }

    proptest! {
        #[test]
        fn prop_integer_matches_truncation(r in -1e15f64..1e15f64) {
            prop_assert_eq!(integer(Some(&RawValue::Real(r))), r.trunc() as i64);
        }

        #[test]
        fn prop_integer_round_trips_through_string(i in any::<i64>()) {
            prop_assert_eq!(integer(Some(&RawValue::String(i.to_string()))), i);
        }

        #[test]
        fn prop_real_never_panics_on_strings(text in ".*") {
            let _ = real(Some(&RawValue::String(text)));
        }
    }
}
