//! Aspect-ratio descriptors, parsing, and validation.
//!
//! A descriptor is either a plain ratio (`1.77`) or a fraction (`"4:3"`,
//! `"3/2"`). Descriptors are parsed once, then [resolved](RatioDescriptor::resolve)
//! into an [`AspectRatio`] that is guaranteed finite and positive.
//!
//! # Example
//!
//! ```
//! use ratiolock::{AspectRatio, RatioDescriptor};
//!
//! let descriptor: RatioDescriptor = "4:3".parse().unwrap();
//! assert_eq!(descriptor, RatioDescriptor::Fraction(4.0, 3.0));
//!
//! let ratio = descriptor.resolve().unwrap();
//! assert!((ratio.get() - 4.0 / 3.0).abs() < 1e-12);
//! assert_eq!(ratio.height_for(400.0), 300.0);
//!
//! assert!("abc".parse::<RatioDescriptor>().is_err());
//! assert!(AspectRatio::new(0.0).is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::{RatioFault, ResizeError};

/// Separators accepted between the width and height parts of a fraction.
const SEPARATORS: [char; 2] = [':', '/'];

/// Unvalidated aspect-ratio description, as written in a preset list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RatioDescriptor {
    /// Ratio given directly as width / height.
    Numeric(f64),
    /// Ratio given as separate width and height parts (`W:H` or `W/H`).
    Fraction(f64, f64),
}

impl RatioDescriptor {
    /// Validate and reduce to a single width / height ratio.
    pub fn resolve(&self) -> Result<AspectRatio, ResizeError> {
        match *self {
            Self::Numeric(ratio) => AspectRatio::new(ratio),
            Self::Fraction(width, height) => AspectRatio::from_fraction(width, height),
        }
    }
}

impl From<f64> for RatioDescriptor {
    fn from(ratio: f64) -> Self {
        Self::Numeric(ratio)
    }
}

impl FromStr for RatioDescriptor {
    type Err = ResizeError;

    /// Parse `W:H`, `W/H`, or a bare number. Only syntax is checked here;
    /// value checks happen in [`resolve`](Self::resolve).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RatioFault::Empty.into());
        }
        match s.split_once(SEPARATORS) {
            Some((width, height)) => {
                if height.contains(SEPARATORS) {
                    return Err(RatioFault::Malformed.into());
                }
                Ok(Self::Fraction(parse_part(width)?, parse_part(height)?))
            }
            None => Ok(Self::Numeric(parse_part(s)?)),
        }
    }
}

impl fmt::Display for RatioDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(ratio) => write!(f, "{ratio}"),
            Self::Fraction(width, height) => write!(f, "{width}:{height}"),
        }
    }
}

fn parse_part(part: &str) -> Result<f64, RatioFault> {
    let part = part.trim();
    if part.is_empty() {
        return Err(RatioFault::Malformed);
    }
    part.parse::<f64>().map_err(|_| RatioFault::Malformed)
}

/// A validated width / height ratio. Always finite and strictly positive.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// 1:1.
    pub const SQUARE: Self = Self(1.0);

    /// Wrap a ratio, rejecting zero, negative, infinite, and NaN values.
    pub fn new(ratio: f64) -> Result<Self, ResizeError> {
        Ok(Self(check(ratio)?))
    }

    /// Build from separate parts. Each part must itself be finite and positive.
    pub fn from_fraction(width: f64, height: f64) -> Result<Self, ResizeError> {
        let width = check(width)?;
        let height = check(height)?;
        Self::new(width / height)
    }

    /// The ratio as width / height.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Height that matches `width` at this ratio.
    pub fn height_for(self, width: f64) -> f64 {
        width / self.0
    }

    /// Width that matches `height` at this ratio.
    pub fn width_for(self, height: f64) -> f64 {
        height * self.0
    }

    /// Scale factor for switching from `self` to `new`: `self / new`.
    pub fn coefficient_to(self, new: AspectRatio) -> f64 {
        self.0 / new.0
    }
}

impl TryFrom<f64> for AspectRatio {
    type Error = ResizeError;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        Self::new(ratio)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check(value: f64) -> Result<f64, RatioFault> {
    if !value.is_finite() {
        Err(RatioFault::NonFinite)
    } else if value <= 0.0 {
        Err(RatioFault::NonPositive)
    } else {
        Ok(value)
    }
}

/// Parse and resolve a descriptor string in one step.
///
/// `"4:3"` → `1.333…`, `"3/2"` → `1.5`, `"1.77"` → `1.77`.
pub fn sanitize_aspect_ratio(descriptor: &str) -> Result<f64, ResizeError> {
    Ok(descriptor.parse::<RatioDescriptor>()?.resolve()?.get())
}

/// Coefficient for switching between two descriptors: `old / new`.
pub fn aspect_ratio_coefficient(
    old: &RatioDescriptor,
    new: &RatioDescriptor,
) -> Result<f64, ResizeError> {
    Ok(old.resolve()?.coefficient_to(new.resolve()?))
}

/// Preset ratios offered to the user, in display order.
pub const DEFAULT_PRESETS: [(&str, RatioDescriptor); 5] = [
    ("1:1 (Square)", RatioDescriptor::Numeric(1.0)),
    ("16:9 (Widescreen)", RatioDescriptor::Numeric(1.77)),
    ("4:3 (Standard)", RatioDescriptor::Fraction(4.0, 3.0)),
    ("3:2 (Photo)", RatioDescriptor::Fraction(3.0, 2.0)),
    ("21:9 (Ultrawide)", RatioDescriptor::Numeric(2.33)),
];

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

    use super::RatioDescriptor;
    use crate::error::{RatioFault, ResizeError};

    const UNSUPPORTED: ResizeError =
        ResizeError::InvalidAspectRatio(RatioFault::UnsupportedDescriptor);

    impl<'de> Deserialize<'de> for RatioDescriptor {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(DescriptorVisitor)
        }
    }

    struct DescriptorVisitor;

    impl<'de> Visitor<'de> for DescriptorVisitor {
        type Value = RatioDescriptor;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a `W:H` / `W/H` string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(RatioDescriptor::Numeric(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(RatioDescriptor::Numeric(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(RatioDescriptor::Numeric(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
            Err(E::custom(UNSUPPORTED))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Err(E::custom(UNSUPPORTED))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Err(E::custom(UNSUPPORTED))
        }

        fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
            Err(de::Error::custom(UNSUPPORTED))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
            Err(de::Error::custom(UNSUPPORTED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ── parsing ─────────────────────────────────────────────────────────

    #[test]
    fn colon_and_slash_fractions() {
        assert_eq!(
            "4:3".parse::<RatioDescriptor>(),
            Ok(RatioDescriptor::Fraction(4.0, 3.0))
        );
        assert_eq!(
            "3/2".parse::<RatioDescriptor>(),
            Ok(RatioDescriptor::Fraction(3.0, 2.0))
        );
    }

    #[test]
    fn equal_parts_are_square() {
        for n in [1.0, 2.0, 7.0, 16.0, 1920.0] {
            assert_eq!(sanitize_aspect_ratio(&format!("{n}:{n}")), Ok(1.0));
            assert_eq!(sanitize_aspect_ratio(&format!("{n}/{n}")), Ok(1.0));
        }
    }

    #[test]
    fn bare_numbers() {
        assert_eq!(sanitize_aspect_ratio("1"), Ok(1.0));
        assert_eq!(sanitize_aspect_ratio("1.77"), Ok(1.77));
        assert_eq!(sanitize_aspect_ratio(" 2.33 "), Ok(2.33));
    }

    #[test]
    fn whitespace_around_parts() {
        let ratio = sanitize_aspect_ratio(" 16 : 9 ").unwrap();
        assert!(close(ratio, 16.0 / 9.0));
    }

    #[test]
    fn known_values() {
        assert_eq!(
            RatioDescriptor::Numeric(1.77).resolve().map(AspectRatio::get),
            Ok(1.77)
        );
        assert!(close(sanitize_aspect_ratio("4:3").unwrap(), 1.333_333_333_3));
        assert_eq!(sanitize_aspect_ratio("3/2"), Ok(1.5));
    }

    #[test]
    fn garbage_is_malformed() {
        let malformed = Err(ResizeError::InvalidAspectRatio(RatioFault::Malformed));
        assert_eq!("abc".parse::<RatioDescriptor>(), malformed);
        assert_eq!("4:".parse::<RatioDescriptor>(), malformed);
        assert_eq!(":3".parse::<RatioDescriptor>(), malformed);
        assert_eq!("1:2:3".parse::<RatioDescriptor>(), malformed);
        assert_eq!("4:3/2".parse::<RatioDescriptor>(), malformed);
        assert_eq!("4x3".parse::<RatioDescriptor>(), malformed);
    }

    #[test]
    fn empty_descriptor() {
        assert_eq!(
            "   ".parse::<RatioDescriptor>(),
            Err(ResizeError::InvalidAspectRatio(RatioFault::Empty))
        );
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn zero_and_negative_rejected() {
        let non_positive = Err(ResizeError::InvalidAspectRatio(RatioFault::NonPositive));
        assert_eq!(sanitize_aspect_ratio("0"), non_positive);
        assert_eq!(sanitize_aspect_ratio("0:5"), non_positive);
        assert_eq!(sanitize_aspect_ratio("4:0"), non_positive);
        assert_eq!(sanitize_aspect_ratio("-1.5"), non_positive);
        // Quotient is positive but the parts are not.
        assert_eq!(sanitize_aspect_ratio("-4:-3"), non_positive);
    }

    #[test]
    fn non_finite_rejected() {
        let non_finite = Err(ResizeError::InvalidAspectRatio(RatioFault::NonFinite));
        assert_eq!(sanitize_aspect_ratio("inf"), non_finite);
        assert_eq!(sanitize_aspect_ratio("NaN"), non_finite);
        assert_eq!(sanitize_aspect_ratio("1e400:1"), non_finite);
        assert_eq!(
            AspectRatio::new(f64::NAN),
            Err(ResizeError::InvalidAspectRatio(RatioFault::NonFinite))
        );
    }

    #[test]
    fn tiny_over_huge_underflows_to_zero() {
        assert_eq!(
            AspectRatio::from_fraction(1e-300, 1e300),
            Err(ResizeError::InvalidAspectRatio(RatioFault::NonPositive))
        );
    }

    // ── coefficient ─────────────────────────────────────────────────────

    #[test]
    fn coefficient_is_old_over_new() {
        let square = RatioDescriptor::Numeric(1.0);
        let photo = RatioDescriptor::Fraction(3.0, 2.0);
        let to_photo = aspect_ratio_coefficient(&square, &photo).unwrap();
        let to_square = aspect_ratio_coefficient(&photo, &square).unwrap();
        assert!(close(to_photo, 2.0 / 3.0));
        assert!(close(to_square, 1.5));
    }

    #[test]
    fn coefficient_rejects_bad_side() {
        let bad = RatioDescriptor::Numeric(-1.0);
        assert!(aspect_ratio_coefficient(&bad, &RatioDescriptor::Numeric(1.0)).is_err());
        assert!(aspect_ratio_coefficient(&RatioDescriptor::Numeric(1.0), &bad).is_err());
    }

    #[test]
    fn default_presets_all_resolve() {
        for (label, descriptor) in DEFAULT_PRESETS {
            assert!(descriptor.resolve().is_ok(), "{label} did not resolve");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for (_, descriptor) in DEFAULT_PRESETS {
            let text = descriptor.to_string();
            assert_eq!(text.parse::<RatioDescriptor>(), Ok(descriptor));
        }
    }
}
