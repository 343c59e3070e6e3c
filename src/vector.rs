// Copyright 2026 the geomext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D displacement.

use core::fmt;
use core::ops::{Div, DivAssign, Mul, MulAssign};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{Point, Size};

/// A 2D vector, interpreted as a displacement or direction.
///
/// Vectors scale by a scalar or componentwise by another vector. There is
/// deliberately no `+`/`-` between two vectors; combine them through
/// [`Vector::dot`], [`Vector::cross`] or [`Vector::average`], or add them
/// to a [`Point`] or [`Size`].
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// The horizontal component.
    pub dx: f64,
    /// The vertical component.
    pub dy: f64,
}

impl Vector {
    /// The vector (0, 0).
    pub const ZERO: Vector = Vector::new(0., 0.);

    /// Create a new vector.
    #[inline(always)]
    pub const fn new(dx: f64, dy: f64) -> Vector {
        Vector { dx, dy }
    }

    /// Create a vector with the same value for both components.
    #[inline]
    pub const fn uniform(value: f64) -> Vector {
        Vector::new(value, value)
    }

    /// Create a vector from a size, with `width` mapped to `dx` and
    /// `height` mapped to `dy`.
    #[inline]
    pub const fn from_size(size: Size) -> Vector {
        Vector::new(size.width, size.height)
    }

    /// A copy of this vector with `dx` replaced.
    #[inline]
    pub const fn with_dx(self, dx: f64) -> Vector {
        Vector::new(dx, self.dy)
    }

    /// A copy of this vector with `dy` replaced.
    #[inline]
    pub const fn with_dy(self, dy: f64) -> Vector {
        Vector::new(self.dx, dy)
    }

    /// Convert this vector into a [`Point`].
    #[inline(always)]
    pub const fn to_point(self) -> Point {
        Point::new(self.dx, self.dy)
    }

    /// Convert this vector into a [`Size`].
    #[inline(always)]
    pub const fn to_size(self) -> Size {
        Size::new(self.dx, self.dy)
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use geomext::Vector;
    /// assert_eq!(Vector::new(3.0, 4.0).dot(Vector::new(1.0, 2.0)), 11.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Cross product of two vectors.
    ///
    /// This is the signed area of the parallelogram they span, signed so
    /// that `(1, 0) × (0, 1) = 1`.
    ///
    /// `u.cross(v) = -v.cross(u)` and `v.cross(v) = 0.0`.
    #[inline]
    pub fn cross(self, other: Vector) -> f64 {
        self.dx * other.dy - self.dy * other.dx
    }

    /// Magnitude of vector.
    ///
    /// ```
    /// use geomext::Vector;
    /// assert_eq!(Vector::new(3.0, 4.0).length(), 5.0);
    /// ```
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Magnitude squared of vector.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns a vector of [magnitude] 1.0 pointing the same way as `self`.
    ///
    /// This produces `NaN` values when the magnitude is `0`.
    ///
    /// ```
    /// use geomext::Vector;
    /// assert_eq!(Vector::new(3.0, 4.0).normalized(), Vector::new(0.6, 0.8));
    /// ```
    ///
    /// [magnitude]: Self::length
    #[inline]
    pub fn normalized(self) -> Vector {
        self / self.length()
    }

    /// Squared Euclidean distance between the tips of two vectors.
    #[inline]
    pub fn distance_squared(self, other: Vector) -> f64 {
        let dx = self.dx - other.dx;
        let dy = self.dy - other.dy;
        dx * dx + dy * dy
    }

    /// Euclidean distance between the tips of two vectors.
    #[inline]
    pub fn distance(self, other: Vector) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// The componentwise mean of a collection of vectors.
    ///
    /// An empty input divides by zero and yields `NaN` components.
    pub fn average<I: IntoIterator<Item = Vector>>(vectors: I) -> Vector {
        let (sum, count) = vectors
            .into_iter()
            .fold((Vector::ZERO, 0_usize), |(sum, count), v| {
                (Vector::new(sum.dx + v.dx, sum.dy + v.dy), count + 1)
            });
        let count = count as f64;
        Vector::new(sum.dx / count, sum.dy / count)
    }

    /// Is this vector [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    /// Is this vector [`NaN`]?
    ///
    /// [`NaN`]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.dx.is_nan() || self.dy.is_nan()
    }
}

impl From<(f64, f64)> for Vector {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Vector {
        Vector { dx: v.0, dy: v.1 }
    }
}

impl From<Vector> for (f64, f64) {
    #[inline(always)]
    fn from(v: Vector) -> (f64, f64) {
        (v.dx, v.dy)
    }
}

impl From<Point> for Vector {
    #[inline]
    fn from(p: Point) -> Vector {
        p.to_vector()
    }
}

impl From<Size> for Vector {
    #[inline]
    fn from(s: Size) -> Vector {
        s.to_vector()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, other: f64) -> Vector {
        Vector {
            dx: self.dx * other,
            dy: self.dy * other,
        }
    }
}

impl MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

// Divides each component rather than multiplying by the reciprocal, so
// exact quotients stay exact.
impl Div<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, other: f64) -> Vector {
        Vector {
            dx: self.dx / other,
            dy: self.dy / other,
        }
    }
}

impl DivAssign<f64> for Vector {
    #[inline]
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Mul for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, other: Vector) -> Vector {
        Vector {
            dx: self.dx * other.dx,
            dy: self.dy * other.dy,
        }
    }
}

impl MulAssign for Vector {
    #[inline]
    fn mul_assign(&mut self, other: Vector) {
        *self = *self * other;
    }
}

impl Div for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, other: Vector) -> Vector {
        Vector {
            dx: self.dx / other.dx,
            dy: self.dy / other.dy,
        }
    }
}

impl DivAssign for Vector {
    #[inline]
    fn div_assign(&mut self, other: Vector) {
        *self = *self / other;
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "𝐯=({:?}, {:?})", self.dx, self.dy)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "𝐯=(")?;
        fmt::Display::fmt(&self.dx, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.dy, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Vector> for mint::Vector2<f64> {
    #[inline(always)]
    fn from(v: Vector) -> mint::Vector2<f64> {
        mint::Vector2 { x: v.dx, y: v.dy }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Vector {
    #[inline(always)]
    fn from(v: mint::Vector2<f64>) -> Vector {
        Vector { dx: v.x, dy: v.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < EPSILON * (1.0 + x.abs().max(y.abs())), "{x} != {y}");
    }

    fn random_vector(rng: &mut StdRng) -> Vector {
        Vector::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3))
    }

    #[test]
    fn display() {
        let v = Vector::new(1.2332421, 532.10721213123);
        let s = format!("{v:.2}");
        assert_eq!(s.as_str(), "𝐯=(1.23, 532.11)");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Vector::new(3., -0.5)), "𝐯=(3.0, -0.5)");
    }

    #[cfg(feature = "mint")]
    #[test]
    fn mint_conversion() {
        let m: mint::Vector2<f64> = Vector::new(1., 2.).into();
        assert_eq!((m.x, m.y), (1., 2.));
        assert_eq!(Vector::from(m), Vector::new(1., 2.));
    }

    #[test]
    fn cross_sign() {
        let v = Vector::new(1., 0.).cross(Vector::new(0., 1.));
        assert_eq!(v, 1.);
        let u = Vector::new(0.3, -2.);
        let w = Vector::new(5., 0.25);
        assert_eq!(u.cross(w), -w.cross(u));
    }

    #[test]
    fn normalized() {
        assert_eq!(Vector::new(3., 4.).normalized(), Vector::new(0.6, 0.8));
        assert!(Vector::ZERO.normalized().is_nan());

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = random_vector(&mut rng);
            if v == Vector::ZERO {
                continue;
            }
            assert_approx_eq(v.normalized().length(), 1.0);
        }
    }

    #[test]
    fn products_against_magnitude() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let v = random_vector(&mut rng);
            assert_approx_eq(v.dot(v), v.length() * v.length());
            assert_eq!(v.cross(v), 0.0);
        }
    }

    #[test]
    fn scale_round_trip() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let v = random_vector(&mut rng);
            let s = rng.random_range(0.5..100.0);
            let w = (v * s) / s;
            assert_approx_eq(v.dx, w.dx);
            assert_approx_eq(v.dy, w.dy);
        }
    }

    #[test]
    fn componentwise_ops() {
        let mut v = Vector::new(2., 3.);
        assert_eq!(v * Vector::new(4., 5.), Vector::new(8., 15.));
        assert_eq!(v / Vector::new(4., 6.), Vector::new(0.5, 0.5));
        v *= 2.0;
        v /= Vector::new(4., 3.);
        assert_eq!(v, Vector::new(1., 2.));
        v *= Vector::new(3., 3.);
        v /= 3.0;
        assert_eq!(v, Vector::new(1., 2.));
    }

    #[test]
    fn distance_and_average() {
        let a = Vector::new(1., 1.);
        let b = Vector::new(4., 5.);
        assert_eq!(a.distance(b), 5.);
        assert_eq!(a.distance_squared(b), 25.);
        assert_eq!(b.distance(a), a.distance(b));
        assert_eq!(Vector::average([a, b]), Vector::new(2.5, 3.));
        assert!(Vector::average(Vec::new()).is_nan());
    }

    #[test]
    fn constructors() {
        assert_eq!(Vector::uniform(2.), Vector::new(2., 2.));
        assert_eq!(Vector::from_size(Size::new(3., 4.)), Vector::new(3., 4.));
        assert_eq!(Vector::new(1., 2.).with_dx(0.), Vector::new(0., 2.));
        assert_eq!(Vector::new(1., 2.).with_dy(0.), Vector::new(1., 0.));
        assert_eq!(Vector::from(Point::new(1., 2.)), Vector::new(1., 2.));
    }
}
