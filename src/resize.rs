//! Source/target rectangle pair describing one resize step.
//!
//! A cover resize positions the scaled image so that it overflows the
//! requested canvas, which leaves the target rect at a negative origin.
//! [`Resize`] keeps the rects as computed and also provides a normalized
//! pair in which the part of the target left of (or above) the canvas has
//! been cut away, together with the matching slice of the source.
//!
//! ```
//! use zenmetrics::{Rect, Resize};
//!
//! let r = Resize::new(
//!     Rect::new(0.0, 0.0, 150.0, 100.0),
//!     Rect::new(-12.5, 0.0, 75.0, 50.0),
//! );
//! assert_eq!(r.from_rect, Rect::new(25.0, 0.0, 125.0, 100.0));
//! assert_eq!(r.to_rect, Rect::new(0.0, 0.0, 62.5, 50.0));
//! assert!(!r.upsized);
//! ```

use crate::geometry::Rect;

/// A source region mapped onto a target region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resize {
    /// Source rect as given.
    pub from_rect_input: Rect,
    /// Target rect as given.
    pub to_rect_input: Rect,
    /// Source rect after trimming the slice that maps to negative target
    /// coordinates.
    pub from_rect: Rect,
    /// Target rect moved to a non-negative origin.
    pub to_rect: Rect,
    /// Target is wider or taller than the source.
    pub upsized: bool,
}

impl Resize {
    /// Pair `from` with `to` and normalize negative target origins.
    ///
    /// Only the near edges are trimmed. A target that extends past the far
    /// edge of the canvas keeps its extent. A zero-width (or zero-height)
    /// target at a negative origin yields non-finite source coordinates.
    pub fn new(from: Rect, to: Rect) -> Self {
        let upsized = to.width > from.width || to.height > from.height;

        let mut from_rect = from;
        let mut to_rect = to;

        if to_rect.x < 0.0 {
            let rx = from_rect.width / to_rect.width;
            let to_dx = to_rect.x.abs();
            let from_dx = to_dx * rx;
            from_rect = from_rect.move_by(from_dx, 0.0).resize_by(-from_dx, 0.0);
            to_rect = to_rect.move_by(to_dx, 0.0).resize_by(-to_dx, 0.0);
        }
        if to_rect.y < 0.0 {
            let ry = from_rect.height / to_rect.height;
            let to_dy = to_rect.y.abs();
            let from_dy = to_dy * ry;
            from_rect = from_rect.move_by(0.0, from_dy).resize_by(0.0, -from_dy);
            to_rect = to_rect.move_by(0.0, to_dy).resize_by(0.0, -to_dy);
        }

        Self {
            from_rect_input: from,
            to_rect_input: to,
            from_rect,
            to_rect,
            upsized,
        }
    }

    /// Horizontal scale factor from source to target.
    pub fn scale_x(&self) -> f64 {
        self.to_rect.width / self.from_rect.width
    }

    /// Vertical scale factor from source to target.
    pub fn scale_y(&self) -> f64 {
        self.to_rect.height / self.from_rect.height
    }
}
