// Copyright 2026 the geomext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D size.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::{Point, Vector};

/// A 2D size.
///
/// Nothing forbids negative width or height; they pass through every
/// operation unchanged.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width.
    pub width: f64,
    /// The height.
    pub height: f64,
}

impl Size {
    /// A size with zero width or height.
    pub const ZERO: Size = Size::new(0., 0.);

    /// Create a new `Size` with the provided `width` and `height`.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Create a size from a point, with `x` mapped to `width` and `y`
    /// mapped to `height`.
    #[inline]
    pub const fn from_point(point: Point) -> Size {
        Size::new(point.x, point.y)
    }

    /// A square size with both dimensions equal to `value`.
    #[inline]
    pub const fn uniform(value: f64) -> Size {
        Size::new(value, value)
    }

    /// A copy of this size with `width` replaced.
    #[inline]
    pub const fn with_width(self, width: f64) -> Size {
        Size::new(width, self.height)
    }

    /// A copy of this size with `height` replaced.
    #[inline]
    pub const fn with_height(self, height: f64) -> Size {
        Size::new(self.width, height)
    }

    /// Half of this size along both axes.
    ///
    /// ```
    /// use geomext::Size;
    /// assert_eq!(Size::new(100.0, 50.0).half_size(), Size::new(50.0, 25.0));
    /// ```
    #[inline]
    pub fn half_size(self) -> Size {
        Size::new(self.width / 2.0, self.height / 2.0)
    }

    /// Convert this size into a [`Vector`], with `width` mapped to `dx` and
    /// `height` mapped to `dy`.
    #[inline]
    pub const fn to_vector(self) -> Vector {
        Vector::new(self.width, self.height)
    }

    /// The mean width and mean height of a collection of sizes.
    ///
    /// An empty input divides by zero and yields `NaN` dimensions.
    pub fn average<I: IntoIterator<Item = Size>>(sizes: I) -> Size {
        let (sum, count) = sizes
            .into_iter()
            .fold((Size::ZERO, 0_usize), |(sum, count), s| {
                (Size::new(sum.width + s.width, sum.height + s.height), count + 1)
            });
        let count = count as f64;
        Size::new(sum.width / count, sum.height / count)
    }

    /// Is this size finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Is this size NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.width.is_nan() || self.height.is_nan()
    }
}

impl From<(f64, f64)> for Size {
    #[inline]
    fn from(v: (f64, f64)) -> Size {
        Size {
            width: v.0,
            height: v.1,
        }
    }
}

impl From<Size> for (f64, f64) {
    #[inline]
    fn from(v: Size) -> (f64, f64) {
        (v.width, v.height)
    }
}

impl Add<f64> for Size {
    type Output = Size;

    #[inline]
    fn add(self, other: f64) -> Size {
        Size::new(self.width + other, self.height + other)
    }
}

impl AddAssign<f64> for Size {
    #[inline]
    fn add_assign(&mut self, other: f64) {
        *self = *self + other;
    }
}

impl Sub<f64> for Size {
    type Output = Size;

    #[inline]
    fn sub(self, other: f64) -> Size {
        Size::new(self.width - other, self.height - other)
    }
}

impl SubAssign<f64> for Size {
    #[inline]
    fn sub_assign(&mut self, other: f64) {
        *self = *self - other;
    }
}

impl Add for Size {
    type Output = Size;

    #[inline]
    fn add(self, other: Size) -> Size {
        Size::new(self.width + other.width, self.height + other.height)
    }
}

impl AddAssign for Size {
    #[inline]
    fn add_assign(&mut self, other: Size) {
        *self = *self + other;
    }
}

impl Sub for Size {
    type Output = Size;

    #[inline]
    fn sub(self, other: Size) -> Size {
        Size::new(self.width - other.width, self.height - other.height)
    }
}

impl SubAssign for Size {
    #[inline]
    fn sub_assign(&mut self, other: Size) {
        *self = *self - other;
    }
}

impl Add<Vector> for Size {
    type Output = Size;

    #[inline]
    fn add(self, other: Vector) -> Size {
        Size::new(self.width + other.dx, self.height + other.dy)
    }
}

impl AddAssign<Vector> for Size {
    #[inline]
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Sub<Vector> for Size {
    type Output = Size;

    #[inline]
    fn sub(self, other: Vector) -> Size {
        Size::new(self.width - other.dx, self.height - other.dy)
    }
}

impl SubAssign<Vector> for Size {
    #[inline]
    fn sub_assign(&mut self, other: Vector) {
        *self = *self - other;
    }
}

impl Mul<f64> for Size {
    type Output = Size;

    #[inline]
    fn mul(self, other: f64) -> Size {
        Size::new(self.width * other, self.height * other)
    }
}

impl MulAssign<f64> for Size {
    #[inline]
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl Div<f64> for Size {
    type Output = Size;

    #[inline]
    fn div(self, other: f64) -> Size {
        Size::new(self.width / other, self.height / other)
    }
}

impl DivAssign<f64> for Size {
    #[inline]
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Mul<Vector> for Size {
    type Output = Size;

    #[inline]
    fn mul(self, other: Vector) -> Size {
        Size::new(self.width * other.dx, self.height * other.dy)
    }
}

impl MulAssign<Vector> for Size {
    #[inline]
    fn mul_assign(&mut self, other: Vector) {
        *self = *self * other;
    }
}

impl Div<Vector> for Size {
    type Output = Size;

    #[inline]
    fn div(self, other: Vector) -> Size {
        Size::new(self.width / other.dx, self.height / other.dy)
    }
}

impl DivAssign<Vector> for Size {
    #[inline]
    fn div_assign(&mut self, other: Vector) {
        *self = *self / other;
    }
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}W×{:?}H", self.width, self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.width, formatter)?;
        write!(formatter, "×")?;
        fmt::Display::fmt(&self.height, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Size> for mint::Vector2<f64> {
    #[inline]
    fn from(s: Size) -> mint::Vector2<f64> {
        mint::Vector2 {
            x: s.width,
            y: s.height,
        }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Size {
    #[inline]
    fn from(v: mint::Vector2<f64>) -> Size {
        Size {
            width: v.x,
            height: v.y,
        }
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

    #[test]
    fn size_arithmetic() {
        let s = Size::new(10., 20.);
        assert_eq!(s + Size::new(1., 2.), Size::new(11., 22.));
        assert_eq!(s - Size::new(1., 2.), Size::new(9., 18.));
        assert_eq!(s + 5.0, Size::new(15., 25.));
        assert_eq!(s - 5.0, Size::new(5., 15.));
        assert_eq!(s + Vector::new(-10., -20.), Size::ZERO);
        assert_eq!(s - Vector::new(10., 10.), Size::new(0., 10.));
        assert_eq!(s * 0.5, Size::new(5., 10.));
        assert_eq!(s / 4.0, Size::new(2.5, 5.));
        assert_eq!(s * Vector::new(2., 0.5), Size::new(20., 10.));
        assert_eq!(s / Vector::new(2., 0.5), Size::new(5., 40.));
    }

    #[test]
    fn assign_ops() {
        let mut s = Size::new(2., 4.);
        s *= Vector::new(2., 1.);
        assert_eq!(s, Size::new(4., 4.));
        s /= 4.0;
        assert_eq!(s, Size::new(1., 1.));
        s += Size::new(1., 2.);
        s -= Vector::new(1., 1.);
        assert_eq!(s, Size::new(1., 2.));
        s += 1.0;
        s *= 2.0;
        s -= Size::new(4., 6.);
        s /= Vector::new(1., 1.);
        assert_eq!(s, Size::ZERO);
    }

    #[test]
    fn negative_dimensions_pass_through() {
        let s = Size::new(-4., 6.);
        assert_eq!(s.half_size(), Size::new(-2., 3.));
        assert_eq!(s * -1.0, Size::new(4., -6.));
    }

    #[test]
    fn constructors() {
        assert_eq!(Size::from_point(Point::new(3., 4.)), Size::new(3., 4.));
        assert_eq!(Size::uniform(2.), Size::new(2., 2.));
        let s = Size::new(1., 2.);
        assert_eq!(s.with_width(5.), Size::new(5., 2.));
        assert_eq!(s.with_height(5.), Size::new(1., 5.));
    }

    #[test]
    fn average() {
        let sizes = vec![Size::new(10., 20.), Size::new(30., 40.)];
        assert_eq!(Size::average(sizes), Size::new(20., 30.));
        assert_eq!(
            Size::average([Size::new(1., 1.), Size::new(2., 2.), Size::new(3., 6.)]),
            Size::new(2., 3.)
        );
        assert!(Size::average(Vec::new()).is_nan());
    }

    #[test]
    fn scale_round_trip() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1000 {
            let size = Size::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3));
            let s = rng.random_range(0.5..100.0);
            let back = (size * s) / s;
            assert_approx_eq(size.width, back.width);
            assert_approx_eq(size.height, back.height);
        }
        let tiny = Size::new(1e3, 1e-3);
        let back = (tiny * 37.0) / 37.0;
        assert_approx_eq(tiny.width, back.width);
        assert_approx_eq(tiny.height, back.height);
    }

    #[cfg(feature = "mint")]
    #[test]
    fn mint_conversion() {
        let m: mint::Vector2<f64> = Size::new(1., 2.).into();
        assert_eq!((m.x, m.y), (1., 2.));
        assert_eq!(Size::from(m), Size::new(1., 2.));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Size::new(1., 2.5)), "1.0W×2.5H");
    }

    #[test]
    fn display() {
        let s = Size::new(-0.12345, 9.87654);
        assert_eq!(format!("{}", s), "(-0.12345×9.87654)");
        assert_eq!(format!("{:+6.2}", s), "( -0.12× +9.88)");
    }
}
