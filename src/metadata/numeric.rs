//! Numeric GPS components and degrees/minutes/seconds conversion.

use crate::constants::coordinates::{MINUTES_PER_DEGREE, SECONDS_PER_DEGREE};
use exif::Value;

/// A single numeric tag component, either a plain number or a fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// Integer or floating-point value.
    Plain(f64),
    /// Numerator/denominator pair as stored in EXIF RATIONAL fields.
    Rational {
        /// Numerator.
        numerator: i64,
        /// Denominator.
        denominator: i64,
    },
}

impl NumericValue {
    /// Resolve to a float. A zero denominator yields NaN.
    #[allow(clippy::cast_precision_loss)]
    pub fn resolve(self) -> f64 {
        match self {
            Self::Plain(value) => value,
            Self::Rational {
                numerator,
                denominator,
            } => {
                if denominator == 0 {
                    f64::NAN
                } else {
                    numerator as f64 / denominator as f64
                }
            }
        }
    }
}

/// Split an EXIF value into its numeric components.
///
/// Non-numeric values (ASCII, undefined blobs) yield no components.
pub fn components(value: &Value) -> Vec<NumericValue> {
    match value {
        Value::Rational(values) => values
            .iter()
            .map(|r| NumericValue::Rational {
                numerator: i64::from(r.num),
                denominator: i64::from(r.denom),
            })
            .collect(),
        Value::SRational(values) => values
            .iter()
            .map(|r| NumericValue::Rational {
                numerator: i64::from(r.num),
                denominator: i64::from(r.denom),
            })
            .collect(),
        Value::Float(values) => values
            .iter()
            .map(|v| NumericValue::Plain(f64::from(*v)))
            .collect(),
        Value::Double(values) => values.iter().map(|v| NumericValue::Plain(*v)).collect(),
        Value::Byte(values) => values
            .iter()
            .map(|v| NumericValue::Plain(f64::from(*v)))
            .collect(),
        Value::Short(values) => values
            .iter()
            .map(|v| NumericValue::Plain(f64::from(*v)))
            .collect(),
        Value::Long(values) => values
            .iter()
            .map(|v| NumericValue::Plain(f64::from(*v)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Combine degrees, minutes and seconds into decimal degrees.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / MINUTES_PER_DEGREE + seconds / SECONDS_PER_DEGREE
}

/// Convert a degrees/minutes/seconds triplet to decimal degrees.
///
/// Returns `None` when fewer than three components are present.
pub fn triplet_to_decimal(triplet: &[NumericValue]) -> Option<f64> {
    match triplet {
        [degrees, minutes, seconds, ..] => Some(dms_to_decimal(
            degrees.resolve(),
            minutes.resolve(),
            seconds.resolve(),
        )),
        _ => None,
    }
}

/// Negate `value` when `reference` names the negative hemisphere.
///
/// `negative` is `"S"` for latitude and `"W"` for longitude. A missing
/// reference keeps the value as converted.
pub fn apply_hemisphere(value: f64, reference: Option<&str>, negative: &str) -> f64 {
    match reference {
        Some(r) if r == negative => -value,
        _ => value,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use exif::{Rational, SRational};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_resolve_plain_and_rational() {
        assert_eq!(NumericValue::Plain(12.5).resolve(), 12.5);
        let half = NumericValue::Rational {
            numerator: 1,
            denominator: 2,
        };
        assert_eq!(half.resolve(), 0.5);
    }

    #[test]
    fn test_resolve_zero_denominator_is_nan() {
        let broken = NumericValue::Rational {
            numerator: 5,
            denominator: 0,
        };
        assert!(broken.resolve().is_nan());
    }

    #[test]
    fn test_dms_formula() {
        // 48°51'29.6"
        let decimal = dms_to_decimal(48.0, 51.0, 29.6);
        assert!((decimal - (48.0 + 51.0 / 60.0 + 29.6 / 3600.0)).abs() < EPSILON);
        assert!((decimal - 48.858_222_222).abs() < 1e-6);
    }

    #[test]
    fn test_dms_monotonic_in_each_component() {
        let base = dms_to_decimal(10.0, 20.0, 30.0);
        assert!(dms_to_decimal(11.0, 20.0, 30.0) > base);
        assert!(dms_to_decimal(10.0, 21.0, 30.0) > base);
        assert!(dms_to_decimal(10.0, 20.0, 31.0) > base);
        // A full minute of seconds never overtakes the next minute
        assert!(dms_to_decimal(10.0, 20.0, 59.999) < dms_to_decimal(10.0, 21.0, 0.0));
    }

    #[test]
    fn test_triplet_with_mixed_representations() {
        let triplet = [
            NumericValue::Plain(2.0),
            NumericValue::Rational {
                numerator: 17,
                denominator: 1,
            },
            NumericValue::Rational {
                numerator: 402,
                denominator: 10,
            },
        ];
        let decimal = triplet_to_decimal(&triplet).unwrap_or_default();
        assert!((decimal - (2.0 + 17.0 / 60.0 + 40.2 / 3600.0)).abs() < EPSILON);
    }

    #[test]
    fn test_triplet_too_short() {
        assert_eq!(triplet_to_decimal(&[NumericValue::Plain(1.0)]), None);
        assert_eq!(triplet_to_decimal(&[]), None);
    }

    #[test]
    fn test_components_from_exif_values() {
        let rational = Value::Rational(vec![
            Rational { num: 48, denom: 1 },
            Rational { num: 51, denom: 1 },
            Rational {
                num: 296,
                denom: 10,
            },
        ]);
        let parts = components(&rational);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].resolve(), 29.6);

        let signed = Value::SRational(vec![SRational { num: -3, denom: 2 }]);
        assert_eq!(components(&signed)[0].resolve(), -1.5);

        assert_eq!(components(&Value::Double(vec![1.25]))[0].resolve(), 1.25);
        assert_eq!(components(&Value::Short(vec![7]))[0].resolve(), 7.0);
        assert!(components(&Value::Ascii(vec![b"N".to_vec()])).is_empty());
    }

    #[test]
    fn test_hemisphere_flip() {
        assert_eq!(apply_hemisphere(12.0, Some("S"), "S"), -12.0);
        assert_eq!(apply_hemisphere(12.0, Some("W"), "W"), -12.0);
        assert_eq!(apply_hemisphere(12.0, Some("N"), "S"), 12.0);
        assert_eq!(apply_hemisphere(12.0, Some("E"), "W"), 12.0);
        assert_eq!(apply_hemisphere(12.0, None, "S"), 12.0);
    }
}
