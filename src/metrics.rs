//! Crop and resize metrics for a box of known size.
//!
//! [`SizeMetrics`] answers "which part of the image" and "where does it go"
//! questions for a `width × height` source. Crops return a [`Rect`] in
//! source coordinates, scaling operations return a [`Resize`] pairing the
//! source rect with a target rect on the requested canvas. Nothing touches
//! pixels.
//!
//! # Example
//!
//! ```
//! use zenmetrics::{Rect, SizeMetrics, UpsizePolicy};
//!
//! let metrics = SizeMetrics::new(200.0, 100.0);
//!
//! let r = metrics.contain(50, 50, "center", UpsizePolicy::Allow).unwrap();
//! assert_eq!(r.to_rect, Rect::new(0.0, 12.5, 50.0, 25.0));
//!
//! let r = metrics.cover(200, 200, "center", UpsizePolicy::Prevent).unwrap();
//! assert_eq!(r.to_rect, Rect::new(0.0, 50.0, 200.0, 100.0));
//! assert!(!r.upsized);
//! ```
//!
//! Percent lengths are taken of the dimension they crop. Requested canvas
//! sizes for [`cover`](SizeMetrics::cover), [`contain`](SizeMetrics::contain)
//! and [`resize`](SizeMetrics::resize) must be absolute.

use core::ops::{BitOr, BitOrAssign};

use crate::alignment::Alignment;
use crate::error::{CropOp, MetricsError};
use crate::geometry::{Rect, Size};
use crate::length::{IntoLength, Length};
use crate::log::debug;
use crate::resize::Resize;

// ============================================================================
// Resize configuration
// ============================================================================

/// How a source is fitted into a requested size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResizeMode {
    /// Scale each axis independently to the requested size.
    #[default]
    Stretch,
    /// Scale uniformly to fit inside the requested size.
    Contain,
    /// Scale uniformly to fill the requested size, overflowing one axis.
    Cover,
}

/// Whether scaling may enlarge the source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpsizePolicy {
    #[default]
    Allow,
    /// Clamp scale factors to 1.
    Prevent,
}

/// Whether stretch and single-axis resizes keep the aspect ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RatioPolicy {
    Preserve,
    #[default]
    Ignore,
}

/// Validated resize configuration.
///
/// ```
/// use zenmetrics::{RatioPolicy, ResizeMode, ResizeOptions, UpsizePolicy};
///
/// let opts = ResizeOptions::new()
///     .upsize(UpsizePolicy::Prevent)
///     .ratio(RatioPolicy::Preserve);
/// assert_eq!(opts.mode, ResizeMode::Stretch);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResizeOptions {
    pub mode: ResizeMode,
    pub upsize: UpsizePolicy,
    pub ratio: RatioPolicy,
}

impl ResizeOptions {
    /// Stretch, allow upsizing, ignore the ratio.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: ResizeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn upsize(mut self, upsize: UpsizePolicy) -> Self {
        self.upsize = upsize;
        self
    }

    pub fn ratio(mut self, ratio: RatioPolicy) -> Self {
        self.ratio = ratio;
        self
    }
}

/// Resize options as a combinable bit set.
///
/// Unset concerns fall back to defaults. Setting both values of a concern,
/// or more than one mode, is rejected when the flags are turned into
/// [`ResizeOptions`].
///
/// ```
/// use zenmetrics::{ResizeFlags, ResizeMode, ResizeOptions, UpsizePolicy};
///
/// let flags = ResizeFlags::RESIZE_COVER | ResizeFlags::UPSIZE_PREVENT;
/// let opts = ResizeOptions::try_from(flags).unwrap();
/// assert_eq!(opts.mode, ResizeMode::Cover);
/// assert_eq!(opts.upsize, UpsizePolicy::Prevent);
///
/// let bad = ResizeFlags::RESIZE_COVER | ResizeFlags::RESIZE_CONTAIN;
/// assert!(ResizeOptions::try_from(bad).is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResizeFlags(u8);

impl ResizeFlags {
    pub const NONE: Self = Self(0);
    pub const RATIO_PRESERVE: Self = Self(1);
    pub const RATIO_IGNORE: Self = Self(2);
    pub const UPSIZE_ALLOW: Self = Self(4);
    pub const UPSIZE_PREVENT: Self = Self(8);
    pub const RESIZE_STRETCH: Self = Self(16);
    pub const RESIZE_CONTAIN: Self = Self(32);
    pub const RESIZE_COVER: Self = Self(64);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Validate into options, filling unset concerns from `defaults`.
    pub fn to_options(self, defaults: ResizeOptions) -> Result<ResizeOptions, MetricsError> {
        let ratio = match (
            self.contains(Self::RATIO_PRESERVE),
            self.contains(Self::RATIO_IGNORE),
        ) {
            (true, true) => {
                return Err(MetricsError::ConflictingFlags(
                    "ratio cannot be both preserved and ignored",
                ));
            }
            (true, false) => RatioPolicy::Preserve,
            (false, true) => RatioPolicy::Ignore,
            (false, false) => defaults.ratio,
        };
        let upsize = match (
            self.contains(Self::UPSIZE_ALLOW),
            self.contains(Self::UPSIZE_PREVENT),
        ) {
            (true, true) => {
                return Err(MetricsError::ConflictingFlags(
                    "upsizing cannot be both allowed and prevented",
                ));
            }
            (true, false) => UpsizePolicy::Allow,
            (false, true) => UpsizePolicy::Prevent,
            (false, false) => defaults.upsize,
        };
        let mode = match (
            self.contains(Self::RESIZE_STRETCH),
            self.contains(Self::RESIZE_CONTAIN),
            self.contains(Self::RESIZE_COVER),
        ) {
            (false, false, false) => defaults.mode,
            (true, false, false) => ResizeMode::Stretch,
            (false, true, false) => ResizeMode::Contain,
            (false, false, true) => ResizeMode::Cover,
            _ => {
                return Err(MetricsError::ConflictingFlags(
                    "only one of stretch, contain and cover can be set",
                ));
            }
        };
        Ok(ResizeOptions {
            mode,
            upsize,
            ratio,
        })
    }
}

impl BitOr for ResizeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ResizeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl TryFrom<ResizeFlags> for ResizeOptions {
    type Error = MetricsError;

    fn try_from(flags: ResizeFlags) -> Result<Self, Self::Error> {
        flags.to_options(Self::default())
    }
}

impl From<ResizeMode> for ResizeOptions {
    fn from(mode: ResizeMode) -> Self {
        Self::default().mode(mode)
    }
}

// ============================================================================
// SizeMetrics
// ============================================================================

/// Crop and resize calculations for a `width × height` box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SizeMetrics {
    pub width: f64,
    pub height: f64,
}

impl From<Size> for SizeMetrics {
    fn from(s: Size) -> Self {
        Self::new(s.width, s.height)
    }
}

impl SizeMetrics {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Width divided by height.
    pub fn ratio(&self) -> f64 {
        self.size().ratio()
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }

    /// The largest box of the given aspect ratio that fits, positioned by
    /// `align` (full alignment grammar).
    pub fn crop_to_ratio(&self, ratio: f64, align: &str) -> Result<Rect, MetricsError> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(MetricsError::InvalidRatio(ratio));
        }
        let alignment = Alignment::parse(align)?;
        let crop = if ratio > self.ratio() {
            Size::new(self.width, self.width / ratio)
        } else {
            Size::new(self.height * ratio, self.height)
        };
        place(&alignment, self.size(), crop)
    }

    // ── single edges ────────────────────────────────────────────────────

    /// Trim `length` off the left edge.
    pub fn crop_left(&self, length: impl IntoLength) -> Result<Rect, MetricsError> {
        let v = trim_amount(CropOp::Left, length, self.width)?;
        Ok(Rect::new(v, 0.0, self.width - v, self.height))
    }

    /// Trim `length` off the right edge.
    pub fn crop_right(&self, length: impl IntoLength) -> Result<Rect, MetricsError> {
        let v = trim_amount(CropOp::Right, length, self.width)?;
        Ok(Rect::new(0.0, 0.0, self.width - v, self.height))
    }

    /// Trim `length` off the top edge.
    pub fn crop_top(&self, length: impl IntoLength) -> Result<Rect, MetricsError> {
        let v = trim_amount(CropOp::Top, length, self.height)?;
        Ok(Rect::new(0.0, v, self.width, self.height - v))
    }

    /// Trim `length` off the bottom edge.
    pub fn crop_bottom(&self, length: impl IntoLength) -> Result<Rect, MetricsError> {
        let v = trim_amount(CropOp::Bottom, length, self.height)?;
        Ok(Rect::new(0.0, 0.0, self.width, self.height - v))
    }

    /// The part of `Rect(x, y, width, height)` that lies inside the box.
    pub fn crop_rect(&self, x: f64, y: f64, width: f64, height: f64) -> Result<Rect, MetricsError> {
        let bounds = self.bounds();
        bounds
            .intersection(&Rect::new(x, y, width, height))
            .ok_or(MetricsError::EmptyIntersection { bounds })
    }

    // ── one axis, aligned ───────────────────────────────────────────────

    /// Crop the width to `length`, positioned by a horizontal alignment.
    pub fn crop_width(&self, length: impl IntoLength, align: &str) -> Result<Rect, MetricsError> {
        let target = trim_amount(CropOp::Width, length, self.width)?;
        let alignment = Alignment::parse_h(align)?;
        place(&alignment, self.size(), Size::new(target, self.height))
    }

    /// Crop `length` off the width, positioned by a horizontal alignment.
    pub fn crop_width_by(&self, length: impl IntoLength, align: &str) -> Result<Rect, MetricsError> {
        let amount = trim_amount(CropOp::WidthBy, length, self.width)?;
        let alignment = Alignment::parse_h(align)?;
        place(
            &alignment,
            self.size(),
            Size::new(self.width - amount, self.height),
        )
    }

    /// Crop the height to `length`, positioned by a vertical alignment.
    pub fn crop_height(&self, length: impl IntoLength, align: &str) -> Result<Rect, MetricsError> {
        let target = trim_amount(CropOp::Height, length, self.height)?;
        let alignment = Alignment::parse_v(align)?;
        place(&alignment, self.size(), Size::new(self.width, target))
    }

    /// Crop `length` off the height, positioned by a vertical alignment.
    pub fn crop_height_by(&self, length: impl IntoLength, align: &str) -> Result<Rect, MetricsError> {
        let amount = trim_amount(CropOp::HeightBy, length, self.height)?;
        let alignment = Alignment::parse_v(align)?;
        place(
            &alignment,
            self.size(),
            Size::new(self.width, self.height - amount),
        )
    }

    // ── both axes ───────────────────────────────────────────────────────

    /// A `width × height` crop positioned by `align`. Lengths are relative
    /// to the own dimensions; the crop is not checked against the bounds.
    pub fn crop_to_size(
        &self,
        width: impl IntoLength,
        height: impl IntoLength,
        align: &str,
    ) -> Result<Rect, MetricsError> {
        let crop = Size::new(
            Length::eval(width, self.width)?,
            Length::eval(height, self.height)?,
        );
        let alignment = Alignment::parse(align)?;
        place(&alignment, self.size(), crop)
    }

    /// Trim all four sides at once. Not checked against the bounds.
    pub fn crop_sides(
        &self,
        left: impl IntoLength,
        top: impl IntoLength,
        right: impl IntoLength,
        bottom: impl IntoLength,
    ) -> Result<Rect, MetricsError> {
        let l = Length::eval(left, self.width)?;
        let t = Length::eval(top, self.height)?;
        let r = Length::eval(right, self.width)?;
        let b = Length::eval(bottom, self.height)?;
        Ok(Rect::new(l, t, self.width - l - r, self.height - t - b))
    }

    // ── scaling ─────────────────────────────────────────────────────────

    /// Scale uniformly so the result covers `width × height`.
    ///
    /// The scaled box is positioned on the requested canvas by `align`, so
    /// the overflowing axis gets a negative origin before normalization.
    pub fn cover(
        &self,
        width: impl IntoLength,
        height: impl IntoLength,
        align: &str,
        upsize: UpsizePolicy,
    ) -> Result<Resize, MetricsError> {
        let requested = Size::from_lengths(width, height)?;
        let mut factor = self.size().cover_ratio(&requested);
        if upsize == UpsizePolicy::Prevent && factor > 1.0 {
            factor = 1.0;
        }
        debug!(factor, ?upsize, "cover");
        self.scaled(requested, self.size().scale(factor), align)
    }

    /// Scale uniformly so the result fits inside `width × height`.
    pub fn contain(
        &self,
        width: impl IntoLength,
        height: impl IntoLength,
        align: &str,
        upsize: UpsizePolicy,
    ) -> Result<Resize, MetricsError> {
        let requested = Size::from_lengths(width, height)?;
        let mut factor = self.size().contain_ratio(&requested);
        if upsize == UpsizePolicy::Prevent && factor > 1.0 {
            factor = 1.0;
        }
        debug!(factor, ?upsize, "contain");
        self.scaled(requested, self.size().scale(factor), align)
    }

    /// Resize to `width × height` as described by `flags`.
    ///
    /// Unset flag concerns default to stretch, allow upsizing and ignore
    /// the ratio.
    pub fn resize(
        &self,
        width: impl IntoLength,
        height: impl IntoLength,
        flags: ResizeFlags,
        align: &str,
    ) -> Result<Resize, MetricsError> {
        self.resize_with(width, height, ResizeOptions::try_from(flags)?, align)
    }

    /// Resize to `width × height` with validated options.
    pub fn resize_with(
        &self,
        width: impl IntoLength,
        height: impl IntoLength,
        options: ResizeOptions,
        align: &str,
    ) -> Result<Resize, MetricsError> {
        match options.mode {
            ResizeMode::Cover => self.cover(width, height, align, options.upsize),
            ResizeMode::Contain => self.contain(width, height, align, options.upsize),
            ResizeMode::Stretch => {
                let requested = Size::from_lengths(width, height)?;
                let mut rx = requested.width / self.width;
                let mut ry = requested.height / self.height;
                if options.upsize == UpsizePolicy::Prevent {
                    rx = rx.min(1.0);
                    ry = ry.min(1.0);
                }
                if options.ratio == RatioPolicy::Preserve {
                    rx = rx.min(ry);
                    ry = rx;
                }
                debug!(rx, ry, ?options, "stretch");
                let target = Size::new(self.width * rx, self.height * ry);
                self.scaled(requested, target, align)
            }
        }
    }

    /// New size with the width set to `length`.
    ///
    /// The height follows the aspect ratio unless `RATIO_IGNORE` is set.
    /// With `UPSIZE_PREVENT` the width never exceeds the current width.
    pub fn resize_width(&self, length: impl IntoLength, flags: ResizeFlags) -> Result<Size, MetricsError> {
        let options = flags.to_options(ResizeOptions::new().ratio(RatioPolicy::Preserve))?;
        let mut width = Length::eval(length, self.width)?;
        if options.upsize == UpsizePolicy::Prevent {
            width = width.min(self.width);
        }
        let height = match options.ratio {
            RatioPolicy::Preserve => width / self.ratio(),
            RatioPolicy::Ignore => self.height,
        };
        Ok(Size::new(width, height))
    }

    /// New size with the height set to `length`.
    ///
    /// The width follows the aspect ratio unless `RATIO_IGNORE` is set.
    /// With `UPSIZE_PREVENT` the height never exceeds the current height.
    pub fn resize_height(&self, length: impl IntoLength, flags: ResizeFlags) -> Result<Size, MetricsError> {
        let options = flags.to_options(ResizeOptions::new().ratio(RatioPolicy::Preserve))?;
        let mut height = Length::eval(length, self.height)?;
        if options.upsize == UpsizePolicy::Prevent {
            height = height.min(self.height);
        }
        let width = match options.ratio {
            RatioPolicy::Preserve => height * self.ratio(),
            RatioPolicy::Ignore => self.width,
        };
        Ok(Size::new(width, height))
    }

    /// Pair the full source with `target` placed on the `requested` canvas.
    fn scaled(&self, requested: Size, target: Size, align: &str) -> Result<Resize, MetricsError> {
        let alignment = Alignment::parse(align)?;
        let to = place(&alignment, requested, target)?;
        Ok(Resize::new(self.bounds(), to))
    }
}

/// Resolve `length` against `available` and reject anything larger.
fn trim_amount(op: CropOp, length: impl IntoLength, available: f64) -> Result<f64, MetricsError> {
    let length = length.into_length()?;
    let v = length.resolve(available)?;
    if v > available {
        return Err(MetricsError::CropExceedsDimension {
            op,
            length,
            available,
        });
    }
    Ok(v)
}

fn place(alignment: &Alignment, container: Size, child: Size) -> Result<Rect, MetricsError> {
    let p = alignment.resolve(container, child)?;
    Ok(Rect::new(p.x, p.y, child.width, child.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const LANDSCAPE: SizeMetrics = SizeMetrics::new(150.0, 100.0);
    const WIDE: SizeMetrics = SizeMetrics::new(200.0, 100.0);

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    // ── flags ───────────────────────────────────────────────────────────

    #[test]
    fn empty_flags_give_defaults() {
        let opts = ResizeOptions::try_from(ResizeFlags::NONE).unwrap();
        assert_eq!(opts, ResizeOptions::default());
        assert_eq!(opts.mode, ResizeMode::Stretch);
        assert_eq!(opts.upsize, UpsizePolicy::Allow);
        assert_eq!(opts.ratio, RatioPolicy::Ignore);
    }

    #[test]
    fn conflicting_flags_rejected() {
        for flags in [
            ResizeFlags::RESIZE_COVER | ResizeFlags::RESIZE_CONTAIN,
            ResizeFlags::RESIZE_STRETCH | ResizeFlags::RESIZE_COVER,
            ResizeFlags::RATIO_PRESERVE | ResizeFlags::RATIO_IGNORE,
            ResizeFlags::UPSIZE_ALLOW | ResizeFlags::UPSIZE_PREVENT,
        ] {
            let err = ResizeOptions::try_from(flags).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{flags:?}");
        }
    }

    #[test]
    fn flags_combine() {
        let mut flags = ResizeFlags::RATIO_PRESERVE;
        flags |= ResizeFlags::UPSIZE_PREVENT;
        assert!(flags.contains(ResizeFlags::RATIO_PRESERVE));
        assert!(flags.contains(ResizeFlags::UPSIZE_PREVENT));
        assert!(!flags.contains(ResizeFlags::RESIZE_COVER));
        assert_eq!(flags.bits(), 9);
        let opts = ResizeOptions::try_from(flags).unwrap();
        assert_eq!(
            opts,
            ResizeOptions::new()
                .ratio(RatioPolicy::Preserve)
                .upsize(UpsizePolicy::Prevent)
        );
    }

    // ── crop_to_ratio ───────────────────────────────────────────────────

    #[test]
    fn crop_to_square() {
        let r = LANDSCAPE.crop_to_ratio(1.0, "center").unwrap();
        assert_eq!(r.size(), Size::new(100.0, 100.0));
        assert_eq!(r.x, 25.0);
    }

    #[test]
    fn crop_to_portrait_ratio() {
        let r = LANDSCAPE.crop_to_ratio(2.0 / 3.0, "left").unwrap();
        assert_close(r.width, 200.0 / 3.0);
        assert_eq!(r.height, 100.0);
        assert_eq!(r.x, 0.0);
    }

    #[test]
    fn crop_to_own_ratio_is_identity() {
        let r = LANDSCAPE.crop_to_ratio(1.5, "center").unwrap();
        assert_eq!(r, Rect::new(0.0, 0.0, 150.0, 100.0));
    }

    #[test]
    fn crop_to_wider_ratio_trims_height() {
        let r = LANDSCAPE.crop_to_ratio(3.0, "bottom").unwrap();
        assert_eq!(r, Rect::new(0.0, 50.0, 150.0, 50.0));
    }

    #[test]
    fn crop_to_ratio_rejects_bad_ratio() {
        for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                LANDSCAPE.crop_to_ratio(ratio, "center"),
                Err(MetricsError::InvalidRatio(_))
            ));
        }
    }

    // ── single edges ────────────────────────────────────────────────────

    #[test]
    fn crop_left_pixels_and_percent() {
        let r = LANDSCAPE.crop_left(90).unwrap();
        assert_eq!((r.left(), r.width), (90.0, 60.0));
        let r = LANDSCAPE.crop_left("50%").unwrap();
        assert_eq!((r.left(), r.width), (75.0, 75.0));
    }

    #[test]
    fn crop_right_keeps_origin() {
        let r = LANDSCAPE.crop_right(90).unwrap();
        assert_eq!((r.left(), r.width), (0.0, 60.0));
    }

    #[test]
    fn crop_top_and_bottom() {
        let r = LANDSCAPE.crop_top(20).unwrap();
        assert_eq!((r.top(), r.height), (20.0, 80.0));
        let r = LANDSCAPE.crop_bottom(20).unwrap();
        assert_eq!(r, Rect::new(0.0, 0.0, 150.0, 80.0));
        assert_eq!(r.bottom(), 80.0);
    }

    #[test]
    fn crop_more_than_available_fails() {
        let err = LANDSCAPE.crop_left("110%").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err,
            MetricsError::CropExceedsDimension {
                op: CropOp::Left,
                length: Length::Percent(110.0),
                available: 150.0,
            }
        );
        assert!(LANDSCAPE.crop_right("110%").is_err());
        assert!(LANDSCAPE.crop_top("110%").is_err());
        assert!(LANDSCAPE.crop_bottom(101).is_err());
    }

    #[test]
    fn crop_rejects_bad_length() {
        let err = LANDSCAPE.crop_left("ninety").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    // ── crop_rect ───────────────────────────────────────────────────────

    #[test]
    fn crop_rect_inside() {
        let r = LANDSCAPE.crop_rect(10.0, 20.0, 75.0, 50.0).unwrap();
        assert_eq!(r, Rect::new(10.0, 20.0, 75.0, 50.0));
    }

    #[test]
    fn crop_rect_clipped_to_bounds() {
        let r = LANDSCAPE.crop_rect(100.0, -10.0, 100.0, 50.0).unwrap();
        assert_eq!(r, Rect::new(100.0, 0.0, 50.0, 40.0));
    }

    #[test]
    fn crop_rect_outside_fails() {
        let err = LANDSCAPE.crop_rect(200.0, 200.0, 10.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            MetricsError::EmptyIntersection {
                bounds: Rect::new(0.0, 0.0, 150.0, 100.0)
            }
        );
    }

    // ── one axis, aligned ───────────────────────────────────────────────

    #[test]
    fn crop_width_aligned() {
        let r = LANDSCAPE.crop_width("50%", "right").unwrap();
        assert_eq!((r.left(), r.width), (75.0, 75.0));
        let r = LANDSCAPE.crop_width("50%", "50%").unwrap();
        assert_eq!(r.left(), 37.5);
        let r = LANDSCAPE.crop_width("50%", "10px").unwrap();
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.height, 100.0);
    }

    #[test]
    fn crop_width_with_edge_offset() {
        let r = LANDSCAPE.crop_width(100, "right 10").unwrap();
        assert_eq!(r.left(), 40.0);
    }

    #[test]
    fn crop_width_too_wide_fails() {
        assert!(LANDSCAPE.crop_width(151, "left").is_err());
        assert!(LANDSCAPE.crop_width(100, "top").is_err());
    }

    #[test]
    fn crop_height_aligned() {
        let r = LANDSCAPE.crop_height("50%", "top").unwrap();
        assert_eq!((r.top(), r.height), (0.0, 50.0));
        let r = LANDSCAPE.crop_height("50%", "center").unwrap();
        assert_eq!(r.top(), 25.0);
        let r = LANDSCAPE.crop_height("50%", "10px").unwrap();
        assert_eq!(r.top(), 10.0);
    }

    #[test]
    fn crop_width_by_aligned() {
        let r = LANDSCAPE.crop_width_by("10px", "right").unwrap();
        assert_eq!((r.left(), r.width), (10.0, 140.0));
        let r = LANDSCAPE.crop_width_by("10px", "left").unwrap();
        assert_eq!(r.left(), 0.0);
        assert!(LANDSCAPE.crop_width_by("101%", "left").is_err());
    }

    #[test]
    fn crop_height_by_aligned() {
        let r = LANDSCAPE.crop_height_by("10px", "top").unwrap();
        assert_eq!((r.top(), r.height), (0.0, 90.0));
        let r = LANDSCAPE.crop_height_by("10px", "bottom").unwrap();
        assert_eq!(r.top(), 10.0);
    }

    // ── both axes ───────────────────────────────────────────────────────

    #[test]
    fn crop_to_size_centered() {
        let r = LANDSCAPE.crop_to_size(75, 50, "center").unwrap();
        assert_eq!(r, Rect::new(37.5, 25.0, 75.0, 50.0));
        let r = LANDSCAPE.crop_to_size("50%", "50%", "right bottom").unwrap();
        assert_eq!(r, Rect::new(75.0, 50.0, 75.0, 50.0));
    }

    #[test]
    fn crop_sides_all_at_once() {
        let r = LANDSCAPE.crop_sides("20px", "30px", "10px", "10px").unwrap();
        assert_eq!(r, Rect::new(20.0, 30.0, 120.0, 60.0));
        let r = LANDSCAPE.crop_sides("10%", 0, "10%", "50%").unwrap();
        assert_eq!(r, Rect::new(15.0, 0.0, 120.0, 50.0));
    }

    // ── cover ───────────────────────────────────────────────────────────

    #[test]
    fn cover_downscale_overflows_width() {
        let r = LANDSCAPE.cover(50, 50, "center", UpsizePolicy::Allow).unwrap();
        assert_eq!(r.to_rect_input, Rect::new(-12.5, 0.0, 75.0, 50.0));
        assert!(!r.upsized);
        assert_eq!(r.from_rect, Rect::new(25.0, 0.0, 125.0, 100.0));
        assert_eq!(r.to_rect, Rect::new(0.0, 0.0, 62.5, 50.0));
    }

    #[test]
    fn cover_portrait_overflows_height() {
        let r = SizeMetrics::new(100.0, 150.0)
            .cover(50, 50, "center", UpsizePolicy::Allow)
            .unwrap();
        assert_eq!(r.to_rect_input, Rect::new(0.0, -12.5, 50.0, 75.0));
        assert_eq!(r.from_rect, Rect::new(0.0, 25.0, 100.0, 125.0));
        assert_eq!(r.to_rect, Rect::new(0.0, 0.0, 50.0, 62.5));
    }

    #[test]
    fn cover_upscale() {
        let r = LANDSCAPE.cover(200, 200, "center", UpsizePolicy::Allow).unwrap();
        assert_eq!(r.to_rect_input, Rect::new(-50.0, 0.0, 300.0, 200.0));
        assert!(r.upsized);
    }

    #[test]
    fn cover_upsize_prevented() {
        let r = LANDSCAPE.cover(200, 200, "center", UpsizePolicy::Prevent).unwrap();
        assert_eq!(r.to_rect_input, Rect::new(25.0, 50.0, 150.0, 100.0));
        assert!(!r.upsized);
    }

    #[test]
    fn cover_rejects_relative_request() {
        let err = LANDSCAPE
            .cover("50%", 50, "center", UpsizePolicy::Allow)
            .unwrap_err();
        assert_eq!(err, MetricsError::RelativeRequest(Length::Percent(50.0)));
    }

    // ── contain ─────────────────────────────────────────────────────────

    #[test]
    fn contain_downscale() {
        let r = WIDE.contain(50, 50, "center", UpsizePolicy::Allow).unwrap();
        assert_eq!(r.to_rect, Rect::new(0.0, 12.5, 50.0, 25.0));
        let r = WIDE.contain(50, 50, "bottom", UpsizePolicy::Allow).unwrap();
        assert_eq!(r.to_rect.top(), 25.0);
    }

    #[test]
    fn contain_upscale() {
        let r = WIDE.contain(500, 500, "center", UpsizePolicy::Allow).unwrap();
        assert_eq!(r.to_rect, Rect::new(0.0, 125.0, 500.0, 250.0));
        assert!(r.upsized);
    }

    #[test]
    fn contain_upsize_prevented() {
        let r = WIDE
            .contain(500, 500, "bottom right", UpsizePolicy::Prevent)
            .unwrap();
        assert_eq!(r.to_rect, Rect::new(300.0, 400.0, 200.0, 100.0));
        assert!(!r.upsized);
    }

    #[test]
    fn contain_rejects_bad_alignment() {
        let err = WIDE
            .contain(50, 50, "middle", UpsizePolicy::Allow)
            .unwrap_err();
        assert_eq!(err, MetricsError::InvalidAlignment("middle".into()));
    }

    // ── resize ──────────────────────────────────────────────────────────

    #[test]
    fn resize_stretches_by_default() {
        let r = WIDE.resize(50, 75, ResizeFlags::NONE, "center").unwrap();
        assert_eq!(r.to_rect, Rect::new(0.0, 0.0, 50.0, 75.0));
        let r = WIDE.resize(500, 500, ResizeFlags::NONE, "center").unwrap();
        assert_eq!(r.to_rect, Rect::new(0.0, 0.0, 500.0, 500.0));
        assert!(r.upsized);
    }

    #[test]
    fn resize_stretch_preserving_ratio() {
        let r = WIDE
            .resize(500, 500, ResizeFlags::RATIO_PRESERVE, "center")
            .unwrap();
        assert_eq!(r.to_rect, Rect::new(0.0, 125.0, 500.0, 250.0));
    }

    #[test]
    fn resize_stretch_upsize_prevented() {
        let r = WIDE
            .resize(500, 500, ResizeFlags::UPSIZE_PREVENT, "center")
            .unwrap();
        assert_eq!(r.to_rect, Rect::new(150.0, 200.0, 200.0, 100.0));
        assert!(!r.upsized);
    }

    #[test]
    fn resize_stretch_prevents_per_axis() {
        let r = WIDE
            .resize(100, 500, ResizeFlags::UPSIZE_PREVENT, "left top")
            .unwrap();
        assert_eq!(r.to_rect, Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn resize_modes_delegate() {
        let contain = WIDE
            .resize(500, 500, ResizeFlags::RESIZE_CONTAIN, "center")
            .unwrap();
        assert_eq!(
            contain,
            WIDE.contain(500, 500, "center", UpsizePolicy::Allow).unwrap()
        );
        let cover = WIDE
            .resize(
                50,
                50,
                ResizeFlags::RESIZE_COVER | ResizeFlags::UPSIZE_PREVENT,
                "left",
            )
            .unwrap();
        assert_eq!(
            cover,
            WIDE.cover(50, 50, "left", UpsizePolicy::Prevent).unwrap()
        );
    }

    #[test]
    fn resize_with_options() {
        let r = WIDE
            .resize_with(50, 50, ResizeMode::Contain.into(), "center")
            .unwrap();
        assert_eq!(r.to_rect, Rect::new(0.0, 12.5, 50.0, 25.0));
    }

    #[test]
    fn resize_conflicting_modes_fail() {
        let err = WIDE
            .resize(
                50,
                50,
                ResizeFlags::RESIZE_COVER | ResizeFlags::RESIZE_CONTAIN,
                "center",
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    // ── single-axis resize ──────────────────────────────────────────────

    #[test]
    fn resize_width_keeps_ratio() {
        assert_eq!(
            WIDE.resize_width(100, ResizeFlags::NONE).unwrap(),
            Size::new(100.0, 50.0)
        );
        assert_eq!(
            WIDE.resize_width(400, ResizeFlags::NONE).unwrap(),
            Size::new(400.0, 200.0)
        );
        assert_eq!(
            WIDE.resize_width("50%", ResizeFlags::RATIO_PRESERVE).unwrap(),
            Size::new(100.0, 50.0)
        );
    }

    #[test]
    fn resize_width_ignoring_ratio() {
        assert_eq!(
            WIDE.resize_width(100, ResizeFlags::RATIO_IGNORE).unwrap(),
            Size::new(100.0, 100.0)
        );
        assert_eq!(
            WIDE.resize_width(400, ResizeFlags::RATIO_IGNORE).unwrap(),
            Size::new(400.0, 100.0)
        );
    }

    #[test]
    fn resize_width_upsize_prevented() {
        assert_eq!(
            WIDE.resize_width(400, ResizeFlags::UPSIZE_PREVENT).unwrap(),
            Size::new(200.0, 100.0)
        );
    }

    #[test]
    fn resize_height_variants() {
        assert_eq!(
            WIDE.resize_height(50, ResizeFlags::NONE).unwrap(),
            Size::new(100.0, 50.0)
        );
        assert_eq!(
            WIDE.resize_height(50, ResizeFlags::RATIO_IGNORE).unwrap(),
            Size::new(200.0, 50.0)
        );
        assert_eq!(
            WIDE.resize_height(200, ResizeFlags::NONE).unwrap(),
            Size::new(400.0, 200.0)
        );
        assert_eq!(
            WIDE.resize_height(200, ResizeFlags::RATIO_IGNORE).unwrap(),
            Size::new(200.0, 200.0)
        );
        assert_eq!(
            WIDE.resize_height(200, ResizeFlags::UPSIZE_PREVENT).unwrap(),
            Size::new(200.0, 100.0)
        );
    }

    #[test]
    fn resize_width_conflicting_flags_fail() {
        assert!(
            WIDE.resize_width(
                100,
                ResizeFlags::RATIO_PRESERVE | ResizeFlags::RATIO_IGNORE
            )
            .is_err()
        );
    }

    // ── conversions ─────────────────────────────────────────────────────

    #[test]
    fn from_size() {
        let m = SizeMetrics::from(Size::new(640.0, 480.0));
        assert_eq!(m.size(), Size::new(640.0, 480.0));
        assert_close(m.ratio(), 4.0 / 3.0);
    }
}
