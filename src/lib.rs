//! Box alignment, crop and resize metrics for image pipelines.
//!
//! Pure geometry — no pixel operations, `no_std` + `alloc` compatible.
//!
//! # Modules
//!
//! - [`geometry`] — `Point`, `Size`, `Rect` value types
//! - [`length`] — pixel/percent lengths and their string form
//! - [`alignment`] — CSS `background-position` style alignment parsing and resolution
//! - [`resize`] — source/target rect pairs with negative-origin normalization
//! - [`metrics`] — crops, cover/contain/stretch resizes, resize flags and options
//! - `svg` — SVG visualization of a resize (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenmetrics::{Rect, SizeMetrics, UpsizePolicy};
//!
//! let metrics = SizeMetrics::new(150.0, 100.0);
//!
//! // Trim 50% off the left edge.
//! assert_eq!(metrics.crop_left("50%").unwrap(), Rect::new(75.0, 0.0, 75.0, 100.0));
//!
//! // Fill a 50×50 square, centered.
//! let r = metrics.cover(50, 50, "center", UpsizePolicy::Allow).unwrap();
//! assert_eq!(r.to_rect_input, Rect::new(-12.5, 0.0, 75.0, 50.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod alignment;
pub mod error;
pub mod geometry;
pub mod length;
mod log;
pub mod metrics;
pub mod resize;
#[cfg(feature = "svg")]
pub mod svg;

pub use alignment::{Alignment, AlignmentRule, Child, Container};
pub use error::{CropOp, ErrorKind, MetricsError};
pub use geometry::{Point, Rect, Size};
pub use length::{IntoLength, Length};
pub use metrics::{RatioPolicy, ResizeFlags, ResizeMode, ResizeOptions, SizeMetrics, UpsizePolicy};
pub use resize::Resize;
