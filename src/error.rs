//! Error type shared by parsing and metrics operations.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

use crate::geometry::Rect;
use crate::length::Length;

/// Coarse classification of a [`MetricsError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A length or alignment string did not match its grammar.
    Parse,
    /// A numeric precondition was violated or arguments conflict.
    InvalidArgument,
}

/// Which crop operation rejected its length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CropOp {
    Left,
    Right,
    Top,
    Bottom,
    /// Crop the width to a target length.
    Width,
    /// Crop the width by subtracting a length.
    WidthBy,
    /// Crop the height to a target length.
    Height,
    /// Crop the height by subtracting a length.
    HeightBy,
}

impl CropOp {
    fn describe(self) -> &'static str {
        match self {
            Self::Left => "crop the left side by",
            Self::Right => "crop the right side by",
            Self::Top => "crop the top side by",
            Self::Bottom => "crop the bottom side by",
            Self::Width => "crop the width to",
            Self::WidthBy => "crop the width by",
            Self::Height => "crop the height to",
            Self::HeightBy => "crop the height by",
        }
    }

    fn dimension(self) -> &'static str {
        match self {
            Self::Left | Self::Right | Self::Width | Self::WidthBy => "width",
            Self::Top | Self::Bottom | Self::Height | Self::HeightBy => "height",
        }
    }
}

/// Error returned by length/alignment parsing and size metrics operations.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum MetricsError {
    /// Input is not a valid length expression.
    InvalidLength(String),
    /// Input is not a valid alignment expression.
    InvalidAlignment(String),
    /// A crop length is larger than the dimension it applies to.
    CropExceedsDimension {
        op: CropOp,
        length: Length,
        available: f64,
    },
    /// A crop rectangle lies entirely outside of the current bounds.
    EmptyIntersection { bounds: Rect },
    /// A requested output dimension was given as a percentage.
    RelativeRequest(Length),
    /// Both values of one flag concern, or several resize modes, were set.
    ConflictingFlags(&'static str),
    /// Aspect ratio must be positive and finite.
    InvalidRatio(f64),
    /// A percentage was resolved against a NaN or infinite anchor.
    NonFiniteAnchor(f64),
}

impl MetricsError {
    /// Whether this is a parse failure or an argument failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength(_) | Self::InvalidAlignment(_) => ErrorKind::Parse,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(input) => write!(f, "invalid length value: {input}"),
            Self::InvalidAlignment(input) => write!(f, "invalid alignment: {input}"),
            Self::CropExceedsDimension {
                op,
                length,
                available,
            } => write!(
                f,
                "unable to {} {length} because the {} {available} is too small",
                op.describe(),
                op.dimension()
            ),
            Self::EmptyIntersection { bounds } => write!(
                f,
                "unable to crop to the rectangle because it is outside of {bounds}"
            ),
            Self::RelativeRequest(length) => {
                write!(f, "invalid size {length}, value must be absolute")
            }
            Self::ConflictingFlags(msg) => f.write_str(msg),
            Self::InvalidRatio(r) => write!(f, "invalid aspect ratio {r}"),
            Self::NonFiniteAnchor(a) => write!(f, "anchor size {a} is not finite"),
        }
    }
}

impl core::error::Error for MetricsError {}
