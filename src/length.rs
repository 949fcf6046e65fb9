//! One-dimensional lengths: absolute pixels or a percentage of an anchor.
//!
//! ```
//! use zenmetrics::Length;
//!
//! let l: Length = "25%".parse().unwrap();
//! assert!(l.is_relative());
//! assert_eq!(l.resolve(640.0).unwrap(), 160.0);
//!
//! assert_eq!(Length::parse("10px").unwrap(), Length::Pixel(10.0));
//! assert_eq!(Length::parse("10").unwrap(), Length::Pixel(10.0));
//! ```

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;
use core::str::FromStr;

use crate::error::MetricsError;

/// A length that is either absolute or relative to an anchor dimension.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Pixel(f64),
    /// Percentage of the anchor (`100.0` = the whole anchor).
    Percent(f64),
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Pixel(0.0);

    /// Parse `-?[0-9]+(\.[0-9]+)?(%|px)?`.
    ///
    /// A bare number or a `px` suffix gives [`Pixel`](Self::Pixel), a `%`
    /// suffix gives [`Percent`](Self::Percent). No surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, MetricsError> {
        let invalid = || MetricsError::InvalidLength(String::from(input));
        let (number, percent) = match input.strip_suffix('%') {
            Some(n) => (n, true),
            None => (input.strip_suffix("px").unwrap_or(input), false),
        };
        if !is_decimal(number, true) {
            return Err(invalid());
        }
        let value: f64 = number.parse().map_err(|_| invalid())?;
        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Pixel(value)
        })
    }

    /// Like [`parse`](Self::parse), but returns `None` on malformed input.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Parse a length expression and resolve it against `anchor` in one step.
    pub fn eval(expr: impl IntoLength, anchor: f64) -> Result<f64, MetricsError> {
        expr.into_length()?.resolve(anchor)
    }

    /// Resolve to pixels. Percentages are taken of `anchor`.
    ///
    /// The anchor must be finite even for pixel lengths, so a bad anchor is
    /// reported regardless of which variant is being resolved.
    pub fn resolve(&self, anchor: f64) -> Result<f64, MetricsError> {
        if !anchor.is_finite() {
            return Err(MetricsError::NonFiniteAnchor(anchor));
        }
        Ok(match *self {
            Self::Pixel(px) => px,
            Self::Percent(pct) => pct * 0.01 * anchor,
        })
    }

    /// The raw number, in whichever unit is set.
    pub const fn value(&self) -> f64 {
        match *self {
            Self::Pixel(v) | Self::Percent(v) => v,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value() == 0.0
    }

    /// Whether this is a percentage that needs an anchor.
    pub const fn is_relative(&self) -> bool {
        matches!(self, Self::Percent(_))
    }

    /// Apply `f` to the number, keeping the unit.
    pub fn map_value(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Pixel(v) => Self::Pixel(f(v)),
            Self::Percent(v) => Self::Percent(f(v)),
        }
    }

    /// Flip the sign, keeping the unit.
    pub fn negate(self) -> Self {
        self.map_value(|v| -v)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl FromStr for Length {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Self::Pixel(px)
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Self::Pixel(px as f64)
    }
}

impl From<i32> for Length {
    fn from(px: i32) -> Self {
        Self::Pixel(px as f64)
    }
}

impl From<u32> for Length {
    fn from(px: u32) -> Self {
        Self::Pixel(px as f64)
    }
}

/// Anything usable as a length expression: a [`Length`], a plain number
/// (pixels), or a string in the length grammar.
pub trait IntoLength {
    fn into_length(self) -> Result<Length, MetricsError>;
}

impl IntoLength for Length {
    fn into_length(self) -> Result<Length, MetricsError> {
        Ok(self)
    }
}

impl IntoLength for f64 {
    fn into_length(self) -> Result<Length, MetricsError> {
        Ok(Length::from(self))
    }
}

impl IntoLength for f32 {
    fn into_length(self) -> Result<Length, MetricsError> {
        Ok(Length::from(self))
    }
}

impl IntoLength for i32 {
    fn into_length(self) -> Result<Length, MetricsError> {
        Ok(Length::from(self))
    }
}

impl IntoLength for u32 {
    fn into_length(self) -> Result<Length, MetricsError> {
        Ok(Length::from(self))
    }
}

impl IntoLength for &str {
    fn into_length(self) -> Result<Length, MetricsError> {
        Length::parse(self)
    }
}

impl IntoLength for &String {
    fn into_length(self) -> Result<Length, MetricsError> {
        Length::parse(self)
    }
}

impl IntoLength for String {
    fn into_length(self) -> Result<Length, MetricsError> {
        Length::parse(&self)
    }
}

/// `-?[0-9]+`, optionally followed by `\.[0-9]+` when `allow_fraction`.
pub(crate) fn is_decimal(s: &str, allow_fraction: bool) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    match digits.split_once('.') {
        None => all_digits(digits),
        Some((int, frac)) => allow_fraction && all_digits(int) && all_digits(frac),
    }
}

/// `-?[0-9]+(%|px)?` — the integer-only token accepted as a bare axis value
/// in two-value and single-value alignments.
pub(crate) fn is_integer_length(s: &str) -> bool {
    let number = s
        .strip_suffix('%')
        .or_else(|| s.strip_suffix("px"))
        .unwrap_or(s);
    is_decimal(number, false)
}
