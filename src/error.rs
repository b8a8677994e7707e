//! Error types shared by the parser, the rescaler, and the session.

/// Why an aspect-ratio descriptor was rejected.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RatioFault {
    /// The descriptor string was empty or all whitespace.
    #[error("descriptor is empty")]
    Empty,
    /// The string is not `W:H`, `W/H`, or a bare number.
    #[error("expected a number, `W:H`, or `W/H`")]
    Malformed,
    /// A part, or the resulting ratio, is zero or negative.
    #[error("ratio must be positive")]
    NonPositive,
    /// A part, or the resulting ratio, is infinite or NaN.
    #[error("ratio must be finite")]
    NonFinite,
    /// The descriptor is neither a number nor a string.
    #[error("descriptor is neither a number nor a string")]
    UnsupportedDescriptor,
    /// The ratio parsed but matches no entry in the preset list.
    #[error("ratio is not one of the available presets")]
    UnknownPreset,
}

/// Error from resize configuration or a rejected user selection.
///
/// Every variant is recoverable: the operation that returned it left the
/// prior dimensions and selection untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ResizeError {
    /// An aspect-ratio descriptor could not be turned into a usable ratio.
    #[error("invalid aspect ratio: {0}")]
    InvalidAspectRatio(RatioFault),
    /// The fixed-axis choice was not `width` or `height`.
    #[error("invalid dimension selection: expected `width` or `height`")]
    InvalidDimensionSelection,
    /// Initial box width or height is zero, negative, or not finite.
    #[error("box size must be positive and finite")]
    InvalidSize,
    /// Minimum width or height is zero, negative, or not finite.
    #[error("minimum size must be positive and finite")]
    InvalidFloor,
}

impl From<RatioFault> for ResizeError {
    fn from(fault: RatioFault) -> Self {
        Self::InvalidAspectRatio(fault)
    }
}
