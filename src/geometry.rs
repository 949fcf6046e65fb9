//! Geometric primitives: [`Point`], [`Size`], [`Rect`].
//!
//! All coordinates are `f64`. Alignment and scaling produce fractional
//! positions; callers round with [`Rect::round`] (or floor/ceil) when they
//! need whole pixels.

use core::fmt;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::MetricsError;
use crate::length::IntoLength;

/// A position in pixel coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={} y={})", self.x, self.y)
    }
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Build a size from two length expressions.
    ///
    /// Both must be absolute; there is nothing to resolve a percentage against.
    pub fn from_lengths(width: impl IntoLength, height: impl IntoLength) -> Result<Self, MetricsError> {
        let w = width.into_length()?;
        let h = height.into_length()?;
        if w.is_relative() {
            return Err(MetricsError::RelativeRequest(w));
        }
        if h.is_relative() {
            return Err(MetricsError::RelativeRequest(h));
        }
        Ok(Self::new(w.value(), h.value()))
    }

    /// Width divided by height.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether `other` fits inside this size on both axes.
    pub fn contains(&self, other: &Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    /// The larger of the per-axis scale factors from `self` to `other`.
    ///
    /// Scaling `self` by this factor covers `other` completely.
    pub fn cover_ratio(&self, other: &Size) -> f64 {
        (other.width / self.width).max(other.height / self.height)
    }

    /// The smaller of the per-axis scale factors from `self` to `other`.
    ///
    /// Scaling `self` by this factor fits inside `other`.
    pub fn contain_ratio(&self, other: &Size) -> f64 {
        (other.width / self.width).min(other.height / self.height)
    }

    /// Scale both axes by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    pub fn floor(self) -> Self {
        Self::new(self.width.floor(), self.height.floor())
    }

    pub fn ceil(self) -> Self {
        Self::new(self.width.ceil(), self.height.ceil())
    }

    pub fn round(self) -> Self {
        Self::new(self.width.round(), self.height.round())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(width={} height={})", self.width, self.height)
    }
}

/// Axis-aligned rectangle in pixel coordinates.
///
/// Width and height may be negative; the edge accessors always report the
/// normalized extent, so `left() <= right()` and `top() <= bottom()` hold
/// for every rect.
///
/// ```
/// use zenmetrics::Rect;
///
/// let r = Rect::new(10.0, 20.0, -10.0, -20.0);
/// assert_eq!((r.left(), r.right()), (0.0, 10.0));
/// assert_eq!((r.top(), r.bottom()), (0.0, 20.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn left(&self) -> f64 {
        if self.width < 0.0 {
            self.x + self.width
        } else {
            self.x
        }
    }

    pub fn top(&self) -> f64 {
        if self.height < 0.0 {
            self.y + self.height
        } else {
            self.y
        }
    }

    pub fn right(&self) -> f64 {
        self.left() + self.width.abs()
    }

    pub fn bottom(&self) -> f64 {
        self.top() + self.height.abs()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Move the origin so width and height are non-negative.
    pub fn normalize(self) -> Self {
        Self::new(
            self.left(),
            self.top(),
            self.width.abs(),
            self.height.abs(),
        )
    }

    /// Whether the two rects overlap. Edges are inclusive, so rects that
    /// only touch still intersect (with zero extent).
    pub fn intersects(&self, other: &Rect) -> bool {
        let a = self.normalize();
        let b = other.normalize();
        !(b.left() > a.right()
            || b.right() < a.left()
            || b.top() > a.bottom()
            || b.bottom() < a.top())
    }

    /// The overlapping region of two rects, normalized.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let a = self.normalize();
        let b = other.normalize();
        let left = a.left().max(b.left());
        let top = a.top().max(b.top());
        let right = a.right().min(b.right());
        let bottom = a.bottom().min(b.bottom());
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Translate the origin.
    pub fn move_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Grow (or shrink, with negative deltas) width and height.
    pub fn resize_by(self, dw: f64, dh: f64) -> Self {
        Self::new(self.x, self.y, self.width + dw, self.height + dh)
    }

    pub fn floor(self) -> Self {
        Self::new(
            self.x.floor(),
            self.y.floor(),
            self.width.floor(),
            self.height.floor(),
        )
    }

    pub fn ceil(self) -> Self {
        Self::new(
            self.x.ceil(),
            self.y.ceil(),
            self.width.ceil(),
            self.height.ceil(),
        )
    }

    pub fn round(self) -> Self {
        Self::new(
            self.x.round(),
            self.y.round(),
            self.width.round(),
            self.height.round(),
        )
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x={} y={} width={} height={})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    // ── Rect edges ──────────────────────────────────────────────────────

    #[test]
    fn rect_edges_positive() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.top(), 0.0);
        assert_eq!(r.right(), 100.0);
        assert_eq!(r.bottom(), 100.0);
    }

    #[test]
    fn rect_negative_extent_keeps_fields() {
        let r = Rect::new(10.0, 20.0, -10.0, -20.0);
        assert_eq!(r.x, 10.0);
        assert_eq!(r.y, 20.0);
        assert_eq!(r.width, -10.0);
        assert_eq!(r.height, -20.0);
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.right(), 10.0);
        assert_eq!(r.top(), 0.0);
        assert_eq!(r.bottom(), 20.0);
    }

    #[test]
    fn rect_normalize_negative_extent() {
        let r = Rect::new(10.0, 20.0, -10.0, -20.0).normalize();
        assert_eq!(r, Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(r.right(), 10.0);
        assert_eq!(r.bottom(), 20.0);
    }

    #[test]
    fn rect_move_by() {
        let r = Rect::new(-12.5, 0.0, 75.0, 50.0).move_by(12.5, 0.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.right(), 75.0);
    }

    #[test]
    fn rect_resize_by_changes_both_axes() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0).resize_by(-10.0, -5.0);
        assert_eq!(r.size(), Size::new(90.0, 45.0));
    }

    // ── Intersection ────────────────────────────────────────────────────

    #[test]
    fn intersection_overlapping() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(90.0, 90.0, 20.0, 20.0);
        assert!(a.intersects(&b));
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Rect::new(90.0, 90.0, 10.0, 10.0));
        assert_eq!(i.x, i.left());
        assert_eq!(i.y, i.top());
    }

    #[test]
    fn intersection_disjoint() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(101.0, 101.0, 100.0, 100.0);
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn intersects_with_negative_width() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(110.0, 110.0, -20.0, -20.0);
        assert!(a.intersects(&b));
        assert_eq!(
            a.intersection(&b),
            Some(Rect::new(90.0, 90.0, 10.0, 10.0))
        );
    }

    #[test]
    fn touching_edges_intersect_with_zero_extent() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 50.0, 50.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(100.0, 0.0, 0.0, 50.0)));
    }

    // ── Size ────────────────────────────────────────────────────────────

    #[test]
    fn size_ratios() {
        let s = Size::new(150.0, 100.0);
        assert_eq!(s.ratio(), 1.5);
        assert_eq!(s.area(), 15000.0);
        assert_eq!(s.cover_ratio(&Size::new(50.0, 50.0)), 0.5);
        assert_eq!(s.contain_ratio(&Size::new(300.0, 400.0)), 2.0);
        assert!(s.contains(&Size::new(150.0, 99.0)));
        assert!(!s.contains(&Size::new(151.0, 99.0)));
    }

    #[test]
    fn size_from_lengths_requires_absolute() {
        assert_eq!(
            Size::from_lengths("50px", 20).unwrap(),
            Size::new(50.0, 20.0)
        );
        assert!(matches!(
            Size::from_lengths("50%", 20),
            Err(MetricsError::RelativeRequest(_))
        ));
    }

    // ── Rounding ────────────────────────────────────────────────────────

    #[test]
    fn rounding_helpers() {
        let r = Rect::new(0.4, 0.6, 62.5, 12.5);
        assert_eq!(r.floor(), Rect::new(0.0, 0.0, 62.0, 12.0));
        assert_eq!(r.ceil(), Rect::new(1.0, 1.0, 63.0, 13.0));
        assert_eq!(r.round(), Rect::new(0.0, 1.0, 63.0, 13.0));
        assert_eq!(Point::new(1.5, -1.5).round(), Point::new(2.0, -2.0));
        assert_eq!(Size::new(66.6, 99.4).floor(), Size::new(66.0, 99.0));
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            Rect::new(25.0, 0.0, 125.0, 100.0).to_string(),
            "(x=25 y=0 width=125 height=100)"
        );
        assert_eq!(Size::new(62.5, 50.0).to_string(), "(width=62.5 height=50)");
        assert_eq!(Point::new(1.0, 2.0).to_string(), "(x=1 y=2)");
    }
}
