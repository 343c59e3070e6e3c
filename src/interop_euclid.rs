// Copyright 2026 the geomext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use euclid::UnknownUnit;

impl From<euclid::Vector2D<f64, UnknownUnit>> for crate::Vector {
    fn from(value: euclid::Vector2D<f64, UnknownUnit>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<crate::Vector> for euclid::Vector2D<f64, UnknownUnit> {
    fn from(value: crate::Vector) -> Self {
        Self::new(value.dx, value.dy)
    }
}

impl From<euclid::Point2D<f64, UnknownUnit>> for crate::Point {
    fn from(value: euclid::Point2D<f64, UnknownUnit>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<crate::Point> for euclid::Point2D<f64, UnknownUnit> {
    fn from(value: crate::Point) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<euclid::Size2D<f64, UnknownUnit>> for crate::Size {
    fn from(value: euclid::Size2D<f64, UnknownUnit>) -> Self {
        Self::new(value.width, value.height)
    }
}

impl From<crate::Size> for euclid::Size2D<f64, UnknownUnit> {
    fn from(value: crate::Size) -> Self {
        Self::new(value.width, value.height)
    }
}

impl From<euclid::Rect<f64, UnknownUnit>> for crate::Rect {
    fn from(value: euclid::Rect<f64, UnknownUnit>) -> Self {
        Self::from_origin_size(value.origin.into(), value.size.into())
    }
}

impl From<crate::Rect> for euclid::Rect<f64, UnknownUnit> {
    fn from(value: crate::Rect) -> Self {
        Self::new(value.origin.into(), value.size.into())
    }
}

// A box is two corners, so it goes through the normalizing constructor.
impl From<euclid::Box2D<f64, UnknownUnit>> for crate::Rect {
    fn from(value: euclid::Box2D<f64, UnknownUnit>) -> Self {
        Self::absolute(value.min.into(), value.max.into())
    }
}

impl From<crate::Rect> for euclid::Box2D<f64, UnknownUnit> {
    fn from(value: crate::Rect) -> Self {
        Self::new(value.min().into(), value.max().into())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Rect, Size, Vector};
    use euclid::default;

    #[test]
    fn rect_keeps_origin_and_size() {
        let r = Rect::new(1., 2., -3., 4.);
        let e: default::Rect<f64> = r.into();
        assert_eq!(e.size.width, -3.);
        assert_eq!(Rect::from(e), r);
    }

    #[test]
    fn box_is_normalized() {
        let b = default::Box2D::new(default::Point2D::new(5., 5.), default::Point2D::new(1., 2.));
        assert_eq!(Rect::from(b), Rect::new(1., 2., 4., 3.));
    }

    #[test]
    fn primitives() {
        let v: default::Vector2D<f64> = Vector::new(1., 2.).into();
        assert_eq!((v.x, v.y), (1., 2.));
        assert_eq!(Point::from(default::Point2D::new(3., 4.)), Point::new(3., 4.));
        assert_eq!(Size::from(default::Size2D::new(5., 6.)), Size::new(5., 6.));
    }
}
