//! Rescaling the box when the user switches to a different preset ratio.

use core::fmt;
use core::str::FromStr;

use crate::error::ResizeError;
use crate::ratio::AspectRatio;
use crate::resize::{Axis, Dimensions};

/// Which axis stays fixed when the active ratio changes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum KeepAxis {
    /// Keep width, rescale height.
    #[default]
    Width,
    /// Keep height, rescale width.
    Height,
}

impl KeepAxis {
    /// Choices in display order.
    pub const ALL: [Self; 2] = [Self::Width, Self::Height];

    /// Lowercase name, as shown in a selection control.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    /// The axis this choice holds fixed.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Width => Axis::Width,
            Self::Height => Axis::Height,
        }
    }
}

impl FromStr for KeepAxis {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("width") => Ok(Self::Width),
            v if v.eq_ignore_ascii_case("height") => Ok(Self::Height),
            _ => Err(ResizeError::InvalidDimensionSelection),
        }
    }
}

impl fmt::Display for KeepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recompute one axis of `captured` for a switch from `old` to `new`.
///
/// With `coefficient = old / new`: keeping width multiplies height by the
/// coefficient; keeping height divides width by it. A box that sat at `old`
/// comes out at exactly `new`.
pub fn rescale(
    captured: Dimensions,
    old: AspectRatio,
    new: AspectRatio,
    keep: KeepAxis,
) -> Dimensions {
    let coefficient = old.coefficient_to(new);
    match keep {
        KeepAxis::Width => Dimensions::new(captured.width, captured.height * coefficient),
        KeepAxis::Height => Dimensions::new(captured.width / coefficient, captured.height),
    }
}
