//! Box alignment in the syntax of CSS `background-position`.
//!
//! An [`Alignment`] stores a position ratio per axis plus an edge offset per
//! axis. Keywords normalize to lengths: `left`/`top` → `0px`,
//! `right`/`bottom` → `100%`, `center` → `50%`. An offset written after
//! `right` or `bottom` moves inward from that edge, so it is stored negated.
//!
//! # Example
//!
//! ```
//! use zenmetrics::{Alignment, Length, Point, Size};
//!
//! let a = Alignment::parse("right 10% top 10px").unwrap();
//! assert_eq!(a.x, Length::Percent(100.0));
//! assert_eq!(a.offset_x, Length::Percent(-10.0));
//! assert_eq!(a.offset_y, Length::Pixel(10.0));
//!
//! let p = Alignment::parse("center")
//!     .unwrap()
//!     .resolve(Size::new(640.0, 480.0), Size::new(200.0, 100.0))
//!     .unwrap();
//! assert_eq!(p, Point::new(220.0, 190.0));
//! ```
//!
//! # Grammar
//!
//! Rules are tried in order; the first match wins. `h` is one of
//! `left|right|center`, `v` one of `top|bottom|center`, `len` a
//! [`Length`], and `any` a keyword or an integer length.
//!
//! ```text
//!  1. h [len] v [len]      right 10% top 10px
//!  2. v [len] h [len]      top 10px right 10%
//!  3. h len                left 10        (10 from the top)
//!  4. len h                10 left
//!  5. len v                10 top         (10 from the left)
//!  6. v len                top 10
//!  7. h                    right          (vertical center)
//!  8. v                    bottom         (horizontal center)
//!  9. any any              40% 100%
//! 10. any                  40%            (vertical center)
//! ```

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::str::FromStr;

use crate::error::MetricsError;
use crate::geometry::{Point, Rect, Size};
use crate::length::{Length, is_integer_length};
use crate::log::debug;

/// Resolved horizontal and vertical position plus edge offsets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Alignment {
    /// Horizontal position ratio.
    pub x: Length,
    /// Vertical position ratio.
    pub y: Length,
    /// Horizontal nudge applied after `x` is resolved.
    pub offset_x: Length,
    /// Vertical nudge applied after `y` is resolved.
    pub offset_y: Length,
}

/// Which grammar rule matched an alignment string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlignmentRule {
    /// `h [len] v [len]`
    HorizontalVertical,
    /// `v [len] h [len]`
    VerticalHorizontal,
    /// `h len`
    HorizontalLength,
    /// `len h`
    LengthHorizontal,
    /// `len v`
    LengthVertical,
    /// `v len`
    VerticalLength,
    /// `h`
    Horizontal,
    /// `v`
    Vertical,
    /// `any any`
    Pair,
    /// `any`
    Single,
}

type Matcher = fn(&[&str]) -> Option<Alignment>;

/// Grammar rules in precedence order. Later rules also match some inputs of
/// earlier ones (`bottom` is both rule 8 and rule 10), so order matters.
const RULES: [(AlignmentRule, Matcher); 10] = [
    (AlignmentRule::HorizontalVertical, horizontal_vertical),
    (AlignmentRule::VerticalHorizontal, vertical_horizontal),
    (AlignmentRule::HorizontalLength, horizontal_length),
    (AlignmentRule::LengthHorizontal, length_horizontal),
    (AlignmentRule::LengthVertical, length_vertical),
    (AlignmentRule::VerticalLength, vertical_length),
    (AlignmentRule::Horizontal, horizontal),
    (AlignmentRule::Vertical, vertical),
    (AlignmentRule::Pair, pair),
    (AlignmentRule::Single, single),
];

/// No rule uses more than four tokens.
const MAX_TOKENS: usize = 4;

impl Alignment {
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(Length::Percent(50.0), Length::Percent(50.0));

    /// Alignment from axis positions, with zero offsets.
    pub const fn new(x: Length, y: Length) -> Self {
        Self::with_offsets(x, y, Length::ZERO, Length::ZERO)
    }

    /// Alignment from axis positions and offsets. Offsets are stored as
    /// given, without the far-edge sign flip applied by the parsers.
    pub const fn with_offsets(x: Length, y: Length, offset_x: Length, offset_y: Length) -> Self {
        Self {
            x,
            y,
            offset_x,
            offset_y,
        }
    }

    /// Alignment from one value per axis, each a keyword or a length.
    ///
    /// Any keyword is accepted on either axis and maps to its usual ratio.
    pub fn from_axes(horizontal: &str, vertical: &str) -> Result<Self, MetricsError> {
        Ok(Self::new(axis_value(horizontal)?, axis_value(vertical)?))
    }

    /// Parse an alignment string with the full grammar.
    pub fn parse(input: &str) -> Result<Self, MetricsError> {
        Self::parse_with_rule(input).map(|(_, alignment)| alignment)
    }

    /// Parse an alignment string and report which rule matched.
    pub fn parse_with_rule(input: &str) -> Result<(AlignmentRule, Self), MetricsError> {
        if let Some((tokens, count)) = tokenize(input) {
            let tokens = &tokens[..count];
            for (rule, matcher) in RULES {
                if let Some(alignment) = matcher(tokens) {
                    debug!(input, ?rule, "alignment rule matched");
                    return Ok((rule, alignment));
                }
            }
        }
        debug!(input, "alignment matched no rule");
        Err(invalid(input))
    }

    /// Like [`parse`](Self::parse), but returns `None` on malformed input.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Parse a horizontal alignment (`h [len]`, or a bare length);
    /// the vertical axis is centered.
    pub fn parse_h(input: &str) -> Result<Self, MetricsError> {
        single_axis(input, Keyword::horizontal)
            .map(|(x, offset_x)| Self::with_offsets(x, Length::Percent(50.0), offset_x, Length::ZERO))
    }

    /// Like [`parse_h`](Self::parse_h), but returns `None` on malformed input.
    pub fn try_parse_h(input: &str) -> Option<Self> {
        Self::parse_h(input).ok()
    }

    /// Parse a vertical alignment (`v [len]`, or a bare length);
    /// the horizontal axis is centered.
    pub fn parse_v(input: &str) -> Result<Self, MetricsError> {
        single_axis(input, Keyword::vertical)
            .map(|(y, offset_y)| Self::with_offsets(Length::Percent(50.0), y, Length::ZERO, offset_y))
    }

    /// Like [`parse_v`](Self::parse_v), but returns `None` on malformed input.
    pub fn try_parse_v(input: &str) -> Option<Self> {
        Self::parse_v(input).ok()
    }

    /// Position `child` inside `container`, returning the child's top-left
    /// corner in the container's coordinate space.
    ///
    /// A [`Size`] container sits at the origin; a [`Point`] child has no
    /// extent. A child larger than the container gets a negative offset.
    pub fn resolve(
        &self,
        container: impl Into<Container>,
        child: impl Into<Child>,
    ) -> Result<Point, MetricsError> {
        let outer = container.into().rect();
        let inner = child.into().rect();

        let dx = outer.width - inner.width;
        let dy = outer.height - inner.height;

        let x = self.x.resolve(dx)? + self.offset_x.resolve(dx)? + outer.x;
        let y = self.y.resolve(dy)? + self.offset_y.resolve(dy)? + outer.y;
        Ok(Point::new(x, y))
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FromStr for Alignment {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The box an alignment positions within.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Container {
    /// A size at the origin.
    Size(Size),
    /// A positioned box; results are offset by its origin.
    Rect(Rect),
}

impl Container {
    fn rect(self) -> Rect {
        match self {
            Self::Size(s) => Rect::from_size(s),
            Self::Rect(r) => r,
        }
    }
}

impl From<Size> for Container {
    fn from(s: Size) -> Self {
        Self::Size(s)
    }
}

impl From<Rect> for Container {
    fn from(r: Rect) -> Self {
        Self::Rect(r)
    }
}

/// The thing being positioned.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Child {
    /// A zero-size anchor.
    Point(Point),
    /// A box with extent.
    Size(Size),
}

impl Child {
    fn rect(self) -> Rect {
        match self {
            Self::Point(p) => Rect::new(p.x, p.y, 0.0, 0.0),
            Self::Size(s) => Rect::from_size(s),
        }
    }
}

impl From<Point> for Child {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<Size> for Child {
    fn from(s: Size) -> Self {
        Self::Size(s)
    }
}

// ============================================================================
// Keywords and tokens
// ============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Keyword {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl Keyword {
    fn horizontal(token: &str) -> Option<Self> {
        match token {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    fn vertical(token: &str) -> Option<Self> {
        match token {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    fn any(token: &str) -> Option<Self> {
        Self::horizontal(token).or_else(|| Self::vertical(token))
    }

    fn axis_length(self) -> Length {
        match self {
            Self::Left | Self::Top => Length::Pixel(0.0),
            Self::Right | Self::Bottom => Length::Percent(100.0),
            Self::Center => Length::Percent(50.0),
        }
    }
}

type KeywordSet = fn(&str) -> Option<Keyword>;

fn invalid(input: &str) -> MetricsError {
    MetricsError::InvalidAlignment(String::from(input))
}

/// The characters `\s` matches.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Split on runs of whitespace. Leading or trailing whitespace, an empty
/// input, or more tokens than any rule takes yields `None`.
fn tokenize(input: &str) -> Option<([&str; MAX_TOKENS], usize)> {
    if input.is_empty() || input.starts_with(is_space) || input.ends_with(is_space) {
        return None;
    }
    let mut tokens = [""; MAX_TOKENS];
    let mut count = 0;
    for token in input.split(is_space).filter(|t| !t.is_empty()) {
        if count == MAX_TOKENS {
            return None;
        }
        tokens[count] = token;
        count += 1;
    }
    Some((tokens, count))
}

/// Keyword-or-length for one axis of an explicit constructor.
fn axis_value(value: &str) -> Result<Length, MetricsError> {
    match Keyword::any(value) {
        Some(k) => Ok(k.axis_length()),
        None => Length::parse(value),
    }
}

/// Offset stored for an axis: negated when the axis sits at the far edge.
fn edge_offset(axis: Length, offset: Option<Length>) -> Length {
    match offset {
        Some(o) if axis == Length::Percent(100.0) => o.negate(),
        Some(o) => o,
        None => Length::ZERO,
    }
}

/// Consume a keyword from `set` and an optional offset length after it.
fn keyword_with_offset<'a, 'b>(
    tokens: &'a [&'b str],
    set: KeywordSet,
) -> Option<(Keyword, Option<Length>, &'a [&'b str])> {
    let (first, rest) = tokens.split_first()?;
    let keyword = set(first)?;
    match rest.split_first() {
        Some((next, tail)) => match Length::try_parse(next) {
            Some(offset) => Some((keyword, Some(offset), tail)),
            None => Some((keyword, None, rest)),
        },
        None => Some((keyword, None, rest)),
    }
}

/// Bare axis value for rules 9 and 10: a keyword of the axis or an
/// integer length.
fn any_value(token: &str, set: KeywordSet) -> Option<Length> {
    match set(token) {
        Some(k) => Some(k.axis_length()),
        None if is_integer_length(token) => Length::try_parse(token),
        None => None,
    }
}

/// Shared grammar of `parse_h`/`parse_v`: `keyword [len]` with the far-edge
/// flip, else the whole input as a bare length.
fn single_axis(input: &str, set: KeywordSet) -> Result<(Length, Length), MetricsError> {
    if let Some((tokens, count)) = tokenize(input)
        && let Some((keyword, offset, [])) = keyword_with_offset(&tokens[..count], set)
    {
        let axis = keyword.axis_length();
        return Ok((axis, edge_offset(axis, offset)));
    }
    match Length::try_parse(input) {
        Some(len) => Ok((len, Length::ZERO)),
        None => Err(invalid(input)),
    }
}

// ============================================================================
// Rules
// ============================================================================

fn edges(h: Keyword, offset_x: Option<Length>, v: Keyword, offset_y: Option<Length>) -> Alignment {
    let x = h.axis_length();
    let y = v.axis_length();
    Alignment::with_offsets(x, y, edge_offset(x, offset_x), edge_offset(y, offset_y))
}

fn horizontal_vertical(tokens: &[&str]) -> Option<Alignment> {
    let (h, offset_x, rest) = keyword_with_offset(tokens, Keyword::horizontal)?;
    let (v, offset_y, rest) = keyword_with_offset(rest, Keyword::vertical)?;
    rest.is_empty().then(|| edges(h, offset_x, v, offset_y))
}

fn vertical_horizontal(tokens: &[&str]) -> Option<Alignment> {
    let (v, offset_y, rest) = keyword_with_offset(tokens, Keyword::vertical)?;
    let (h, offset_x, rest) = keyword_with_offset(rest, Keyword::horizontal)?;
    rest.is_empty().then(|| edges(h, offset_x, v, offset_y))
}

fn horizontal_length(tokens: &[&str]) -> Option<Alignment> {
    let [h, len] = tokens else { return None };
    Some(Alignment::new(
        Keyword::horizontal(h)?.axis_length(),
        Length::try_parse(len)?,
    ))
}

fn length_horizontal(tokens: &[&str]) -> Option<Alignment> {
    let [len, h] = tokens else { return None };
    let x = Keyword::horizontal(h)?.axis_length();
    Some(Alignment::new(x, Length::try_parse(len)?))
}

fn length_vertical(tokens: &[&str]) -> Option<Alignment> {
    let [len, v] = tokens else { return None };
    let y = Keyword::vertical(v)?.axis_length();
    Some(Alignment::new(Length::try_parse(len)?, y))
}

fn vertical_length(tokens: &[&str]) -> Option<Alignment> {
    let [v, len] = tokens else { return None };
    let y = Keyword::vertical(v)?.axis_length();
    Some(Alignment::new(Length::try_parse(len)?, y))
}

fn horizontal(tokens: &[&str]) -> Option<Alignment> {
    let [h] = tokens else { return None };
    Some(Alignment::new(
        Keyword::horizontal(h)?.axis_length(),
        Length::Percent(50.0),
    ))
}

fn vertical(tokens: &[&str]) -> Option<Alignment> {
    let [v] = tokens else { return None };
    Some(Alignment::new(
        Length::Percent(50.0),
        Keyword::vertical(v)?.axis_length(),
    ))
}

fn pair(tokens: &[&str]) -> Option<Alignment> {
    let [h, v] = tokens else { return None };
    Some(Alignment::new(
        any_value(h, Keyword::horizontal)?,
        any_value(v, Keyword::vertical)?,
    ))
}

fn single(tokens: &[&str]) -> Option<Alignment> {
    let [h] = tokens else { return None };
    Some(Alignment::new(
        any_value(h, Keyword::horizontal)?,
        Length::Percent(50.0),
    ))
}
