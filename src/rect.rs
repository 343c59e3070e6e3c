// Copyright 2026 the geomext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{Point, Size, Vector};

/// An axis-aligned rectangle, stored as an origin and a size.
///
/// The center, minimum and maximum corners are views computed from the
/// origin and size. Their setters move the origin and keep the size.
///
/// Adding or subtracting a [`Point`] moves the origin, adding or
/// subtracting a [`Size`] grows or shrinks the size, and multiplying by a
/// scalar scales both. Translating by a [`Vector`] goes through
/// [`Rect::offset`].
///
/// ```
/// use geomext::{Point, Rect, Size};
///
/// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
/// assert_eq!(rect.center(), Point::new(50.0, 25.0));
/// assert_eq!(rect + Size::new(10.0, 10.0), Rect::new(0.0, 0.0, 110.0, 60.0));
/// assert_eq!(rect * 2.0, Rect::new(0.0, 0.0, 200.0, 100.0));
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The origin; the minimum corner when the size is non-negative.
    pub origin: Point,
    /// The extent from the origin.
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at (0, 0).
    pub const ZERO: Rect = Rect::from_origin_size(Point::ZERO, Size::ZERO);

    /// A new rectangle from origin coordinates and dimensions.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect::from_origin_size(Point::new(x, y), Size::new(width, height))
    }

    /// A new rectangle from origin and size.
    ///
    /// Unlike [`Rect::absolute`], negative sizes are kept as given.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Rect {
        Rect { origin, size }
    }

    /// A new rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center_and_size(center: Point, size: Size) -> Rect {
        Rect::from_origin_size(origin_for_center(center, size), size)
    }

    /// The smallest rectangle spanning two corner points, in either order.
    ///
    /// The result always has non-negative width and height.
    ///
    /// ```
    /// use geomext::{Point, Rect};
    ///
    /// let r = Rect::absolute(Point::new(50.0, 100.0), Point::new(200.0, 50.0));
    /// assert_eq!(r, Rect::new(50.0, 50.0, 150.0, 50.0));
    /// ```
    #[inline]
    pub fn absolute(p1: Point, p2: Point) -> Rect {
        Rect::new(
            p1.x.min(p2.x),
            p1.y.min(p2.y),
            (p1.x - p2.x).abs(),
            (p1.y - p2.y).abs(),
        )
    }

    /// The x coordinate of the origin.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// The y coordinate of the origin.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// The x coordinate of the origin plus the width.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// The y coordinate of the origin plus the height.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// The width of the rectangle.
    ///
    /// Note: nothing forbids negative width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// The height of the rectangle.
    ///
    /// Note: nothing forbids negative height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Move the rectangle so that it is centered on `center`.
    ///
    /// The size is unchanged.
    #[inline]
    pub fn set_center(&mut self, center: Point) {
        self.origin = origin_for_center(center, self.size);
    }

    /// The minimum corner, which is the origin.
    #[inline]
    pub fn min(&self) -> Point {
        self.origin
    }

    /// Replace the origin.
    #[inline]
    pub fn set_min(&mut self, min: Point) {
        self.origin = min;
    }

    /// The maximum corner, `origin + size`.
    #[inline]
    pub fn max(&self) -> Point {
        self.origin + self.size
    }

    /// Move the rectangle so that its maximum corner lands on `max`.
    ///
    /// The size is unchanged.
    #[inline]
    pub fn set_max(&mut self, max: Point) {
        self.origin = max - self.size;
    }

    /// Swap the horizontal and vertical fields.
    ///
    /// This relabels the axes of the origin and the size independently;
    /// it is not a reflection of the rectangle about the line `y = x`.
    #[inline]
    pub fn transposed(&self) -> Rect {
        Rect::new(
            self.origin.y,
            self.origin.x,
            self.size.height,
            self.size.width,
        )
    }

    /// Create a new `Rect` with `origin.x` replaced.
    #[inline]
    pub fn with_x(self, x: f64) -> Rect {
        Rect::from_origin_size(self.origin.with_x(x), self.size)
    }

    /// Create a new `Rect` with `origin.y` replaced.
    #[inline]
    pub fn with_y(self, y: f64) -> Rect {
        Rect::from_origin_size(self.origin.with_y(y), self.size)
    }

    /// Create a new `Rect` with the width replaced.
    #[inline]
    pub fn with_width(self, width: f64) -> Rect {
        Rect::from_origin_size(self.origin, self.size.with_width(width))
    }

    /// Create a new `Rect` with the height replaced.
    #[inline]
    pub fn with_height(self, height: f64) -> Rect {
        Rect::from_origin_size(self.origin, self.size.with_height(height))
    }

    /// Create a new `Rect` with the same size as `self` and a new origin.
    #[inline]
    pub fn with_origin(self, origin: Point) -> Rect {
        Rect::from_origin_size(origin, self.size)
    }

    /// Create a new `Rect` with the same origin as `self` and a new size.
    #[inline]
    pub fn with_size(self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size)
    }

    /// Create a new `Rect` with the same size as `self`, centered on `center`.
    #[inline]
    pub fn with_center(self, center: Point) -> Rect {
        Rect::from_center_and_size(center, self.size)
    }

    /// A rectangle the size of `self`, centered in `outer`.
    ///
    /// ```
    /// use geomext::Rect;
    ///
    /// let inner = Rect::new(0.0, 0.0, 10.0, 20.0);
    /// let outer = Rect::new(100.0, 100.0, 50.0, 50.0);
    /// assert_eq!(inner.center_in_rect(outer), Rect::new(120.0, 115.0, 10.0, 20.0));
    /// ```
    #[inline]
    pub fn center_in_rect(self, outer: Rect) -> Rect {
        Rect::from_center_and_size(outer.center(), self.size)
    }

    /// Translate the origin by a displacement.
    ///
    /// The delta may be a [`Vector`], a [`Point`] or a [`Size`]; the two
    /// components of any of them are applied to `x` and `y`.
    ///
    /// ```
    /// use geomext::{Point, Rect, Size, Vector};
    ///
    /// let r = Rect::new(1.0, 2.0, 3.0, 4.0);
    /// let moved = Rect::new(11.0, 22.0, 3.0, 4.0);
    /// assert_eq!(r.offset(Vector::new(10.0, 20.0)), moved);
    /// assert_eq!(r.offset(Point::new(10.0, 20.0)), moved);
    /// assert_eq!(r.offset(Size::new(10.0, 20.0)), moved);
    /// ```
    #[inline]
    pub fn offset(self, delta: impl Into<Vector>) -> Rect {
        let delta: Vector = delta.into();
        Rect::from_origin_size(self.origin + delta, self.size)
    }

    /// A rectangle with the proportions of `aspect_size`, centered on this
    /// rectangle.
    ///
    /// When `self` is relatively wider than `aspect_size`, the height is
    /// kept and the width follows from the target ratio. Otherwise the
    /// result takes `self.width` as its height and `ratio * self.width` as
    /// its width.
    ///
    /// ```
    /// use geomext::{Rect, Size};
    ///
    /// let wide = Rect::new(0.0, 0.0, 200.0, 100.0);
    /// let fitted = wide.fit_inside_with_aspect_ratio(Size::new(1.0, 1.0));
    /// assert_eq!(fitted, Rect::new(50.0, 0.0, 100.0, 100.0));
    /// ```
    ///
    /// Zero heights make the ratios infinite or `NaN`, which propagate.
    pub fn fit_inside_with_aspect_ratio(&self, aspect_size: Size) -> Rect {
        let aspect_ratio = self.size.width / self.size.height;
        let target_aspect_ratio = aspect_size.width / aspect_size.height;
        let size = if aspect_ratio > target_aspect_ratio {
            Size::new(target_aspect_ratio * self.size.height, self.size.height)
        } else {
            // Height is the source width, not `width / ratio`.
            Size::new(target_aspect_ratio * self.size.width, self.size.width)
        };
        Rect::from_center_and_size(self.center(), size)
    }

    /// Is this rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Is this rectangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.origin.is_nan() || self.size.is_nan()
    }
}

#[inline]
fn origin_for_center(center: Point, size: Size) -> Point {
    Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0)
}

impl From<(Point, Size)> for Rect {
    fn from(params: (Point, Size)) -> Rect {
        Rect::from_origin_size(params.0, params.1)
    }
}

impl From<Rect> for (Point, Size) {
    fn from(r: Rect) -> (Point, Size) {
        (r.origin, r.size)
    }
}

impl Add<Point> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, p: Point) -> Rect {
        Rect::from_origin_size(self.origin + p, self.size)
    }
}

impl AddAssign<Point> for Rect {
    #[inline]
    fn add_assign(&mut self, p: Point) {
        self.origin += p;
    }
}

impl Sub<Point> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, p: Point) -> Rect {
        Rect::from_origin_size(self.origin - p, self.size)
    }
}

impl SubAssign<Point> for Rect {
    #[inline]
    fn sub_assign(&mut self, p: Point) {
        self.origin -= p;
    }
}

impl Add<Size> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, s: Size) -> Rect {
        Rect::from_origin_size(self.origin, self.size + s)
    }
}

impl AddAssign<Size> for Rect {
    #[inline]
    fn add_assign(&mut self, s: Size) {
        self.size += s;
    }
}

impl Sub<Size> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, s: Size) -> Rect {
        Rect::from_origin_size(self.origin, self.size - s)
    }
}

impl SubAssign<Size> for Rect {
    #[inline]
    fn sub_assign(&mut self, s: Size) {
        self.size -= s;
    }
}

impl Mul<f64> for Rect {
    type Output = Rect;

    #[inline]
    fn mul(self, scale: f64) -> Rect {
        Rect::from_origin_size(self.origin * scale, self.size * scale)
    }
}

impl MulAssign<f64> for Rect {
    #[inline]
    fn mul_assign(&mut self, scale: f64) {
        *self = *self * scale;
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.origin, self.size)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.origin, formatter)?;
        write!(formatter, " ")?;
        fmt::Display::fmt(&self.size, formatter)
    }
}
