// Copyright 2026 the geomext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{Size, Vector};

/// A 2D point.
///
/// Arithmetic is componentwise. A point can be offset by a scalar (applied
/// to both coordinates), another [`Point`], a [`Size`] (`width` on `x`,
/// `height` on `y`) or a [`Vector`]. It can be scaled by a scalar or,
/// componentwise, by a [`Vector`].
///
/// ```
/// use geomext::{Point, Size, Vector};
///
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p + Point::new(5.0, 15.0), Point::new(15.0, 35.0));
/// assert_eq!(p * 2.0, Point::new(20.0, 40.0));
/// assert_eq!(p - Size::new(10.0, 10.0), Point::new(0.0, 10.0));
/// assert_eq!(p / Vector::new(2.0, 4.0), Point::new(5.0, 5.0));
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Point = Point::new(0., 0.);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point from a size, with `width` mapped to `x` and `height`
    /// mapped to `y`.
    #[inline]
    pub const fn from_size(size: Size) -> Point {
        Point::new(size.width, size.height)
    }

    /// Create a point with the same value for both coordinates.
    #[inline]
    pub const fn uniform(value: f64) -> Point {
        Point::new(value, value)
    }

    /// A copy of this point with `x` replaced.
    #[inline]
    pub const fn with_x(self, x: f64) -> Point {
        Point::new(x, self.y)
    }

    /// A copy of this point with `y` replaced.
    #[inline]
    pub const fn with_y(self, y: f64) -> Point {
        Point::new(self.x, y)
    }

    /// Convert this point into a [`Vector`] from the origin.
    #[inline]
    pub const fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Squared Euclidean distance.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    ///
    /// ```
    /// use geomext::Point;
    /// assert_eq!(Point::new(-11.0, 1.0).distance(Point::new(-7.0, -2.0)), 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// The componentwise mean of a collection of points.
    ///
    /// Accepts anything iterable, so a fixed list and a sequence behave
    /// the same:
    ///
    /// ```
    /// use geomext::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(100.0, 0.0);
    /// let c = Point::new(50.0, 100.0);
    /// let avg = Point::average([a, b, c]);
    /// assert_eq!(avg, Point::average(vec![a, b, c]));
    /// assert_eq!(avg, Point::new(50.0, 100.0 / 3.0));
    /// ```
    ///
    /// An empty input divides by zero and yields `NaN` coordinates.
    pub fn average<I: IntoIterator<Item = Point>>(points: I) -> Point {
        let (sum, count) = points
            .into_iter()
            .fold((Point::ZERO, 0_usize), |(sum, count), p| {
                (Point::new(sum.x + p.x, sum.y + p.y), count + 1)
            });
        let count = count as f64;
        Point::new(sum.x / count, sum.y / count)
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this point NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Point {
        Point { x: v.0, y: v.1 }
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(v: Point) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add<f64> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: f64) -> Point {
        Point::new(self.x + other, self.y + other)
    }
}

impl AddAssign<f64> for Point {
    #[inline]
    fn add_assign(&mut self, other: f64) {
        *self = *self + other;
    }
}

impl Sub<f64> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: f64) -> Point {
        Point::new(self.x - other, self.y - other)
    }
}

impl SubAssign<f64> for Point {
    #[inline]
    fn sub_assign(&mut self, other: f64) {
        *self = *self - other;
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, other: Point) {
        *self = *self + other;
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, other: Point) {
        *self = *self - other;
    }
}

impl Add<Size> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Size) -> Point {
        Point::new(self.x + other.width, self.y + other.height)
    }
}

impl AddAssign<Size> for Point {
    #[inline]
    fn add_assign(&mut self, other: Size) {
        *self = *self + other;
    }
}

impl Sub<Size> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Size) -> Point {
        Point::new(self.x - other.width, self.y - other.height)
    }
}

impl SubAssign<Size> for Point {
    #[inline]
    fn sub_assign(&mut self, other: Size) {
        *self = *self - other;
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vector) -> Point {
        Point::new(self.x + other.dx, self.y + other.dy)
    }
}

impl AddAssign<Vector> for Point {
    #[inline]
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Vector) -> Point {
        Point::new(self.x - other.dx, self.y - other.dy)
    }
}

impl SubAssign<Vector> for Point {
    #[inline]
    fn sub_assign(&mut self, other: Vector) {
        *self = *self - other;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, other: f64) -> Point {
        Point::new(self.x * other, self.y * other)
    }
}

impl MulAssign<f64> for Point {
    #[inline]
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl Div<f64> for Point {
    type Output = Point;

    #[inline]
    fn div(self, other: f64) -> Point {
        Point::new(self.x / other, self.y / other)
    }
}

impl DivAssign<f64> for Point {
    #[inline]
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Mul<Vector> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, other: Vector) -> Point {
        Point::new(self.x * other.dx, self.y * other.dy)
    }
}

impl MulAssign<Vector> for Point {
    #[inline]
    fn mul_assign(&mut self, other: Vector) {
        *self = *self * other;
    }
}

impl Div<Vector> for Point {
    type Output = Point;

    #[inline]
    fn div(self, other: Vector) -> Point {
        Point::new(self.x / other.dx, self.y / other.dy)
    }
}

impl DivAssign<Vector> for Point {
    #[inline]
    fn div_assign(&mut self, other: Vector) {
        *self = *self / other;
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9 * (1.0 + x.abs().max(y.abs())), "{x} != {y}");
    }

    fn random_point(rng: &mut StdRng) -> Point {
        Point::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3))
    }

    #[test]
    fn point_arithmetic() {
        let p = Point::new(10., 20.);
        assert_eq!(p + Point::new(5., 15.), Point::new(15., 35.));
        assert_eq!(p - Point::new(5., 15.), Point::new(5., 5.));
        assert_eq!(p * 2.0, Point::new(20., 40.));
        assert_eq!(p / 2.0, Point::new(5., 10.));
        assert_eq!(p + 1.0, Point::new(11., 21.));
        assert_eq!(p - 1.0, Point::new(9., 19.));
        assert_eq!(p + Size::new(1., 2.), Point::new(11., 22.));
        assert_eq!(p - Vector::new(1., 2.), Point::new(9., 18.));
        assert_eq!(p * Vector::new(2., 3.), Point::new(20., 60.));
    }

    #[test]
    fn assign_ops_mutate_left_operand() {
        let mut p = Point::new(1., 2.);
        p += Point::new(1., 1.);
        assert_eq!(p, Point::new(2., 3.));
        p -= Size::new(2., 3.);
        assert_eq!(p, Point::ZERO);
        p += Vector::new(4., 8.);
        p *= 0.5;
        assert_eq!(p, Point::new(2., 4.));
        p /= Vector::new(2., 4.);
        assert_eq!(p, Point::new(1., 1.));
        p -= 1.0;
        assert_eq!(p, Point::ZERO);
    }

    #[test]
    fn constructors() {
        assert_eq!(Point::from_size(Size::new(3., 4.)), Point::new(3., 4.));
        assert_eq!(Point::uniform(7.), Point::new(7., 7.));
        let p = Point::new(1., 2.);
        assert_eq!(p.with_x(9.), Point::new(9., 2.));
        assert_eq!(p.with_y(9.), Point::new(1., 9.));
    }

    #[test]
    fn distance() {
        let p1 = Point::new(0., 10.);
        let p2 = Point::new(0., 5.);
        assert_eq!(p1.distance(p2), 5.);
        assert_eq!(p1.distance_squared(p2), 25.);
    }

    #[test]
    fn distance_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            assert_eq!(a.distance(b), b.distance(a));
            let d = a.distance(b);
            assert_approx_eq(a.distance_squared(b), d * d);
        }
    }

    #[test]
    fn scale_round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let p = random_point(&mut rng);
            let s = rng.random_range(0.5..100.0);
            let q = (p * s) / s;
            assert_approx_eq(p.x, q.x);
            assert_approx_eq(p.y, q.y);
        }
    }

    #[test]
    fn average() {
        let avg = Point::average([
            Point::new(0., 0.),
            Point::new(100., 0.),
            Point::new(50., 100.),
        ]);
        assert_eq!(avg.x, 50.);
        assert_approx_eq(avg.y, 33.333333333333336);
        assert!(Point::average(core::iter::empty()).is_nan());
    }

    #[cfg(feature = "mint")]
    #[test]
    fn mint_conversion() {
        let m: mint::Point2<f64> = Point::new(1., 2.).into();
        assert_eq!((m.x, m.y), (1., 2.));
        assert_eq!(Point::from(m), Point::new(1., 2.));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Point::new(1., -2.5)), "(1.0, -2.5)");
    }

    #[test]
    fn display() {
        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{}", p), "(0.12345, 9.87654)");
        assert_eq!(format!("{:.2}", p), "(0.12, 9.88)");
    }
}
