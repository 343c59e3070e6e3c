// Copyright 2026 the geomext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from the host platform's Core Graphics records.

use objc2_core_foundation::{CGPoint, CGRect, CGSize, CGVector};

use crate::{Point, Rect, Size, Vector};

impl From<CGPoint> for Point {
    #[inline]
    fn from(point: CGPoint) -> Self {
        Point::new(point.x, point.y)
    }
}

impl From<Point> for CGPoint {
    #[inline]
    fn from(point: Point) -> Self {
        CGPoint::new(point.x, point.y)
    }
}

impl From<CGSize> for Size {
    #[inline]
    fn from(size: CGSize) -> Self {
        Size::new(size.width, size.height)
    }
}

impl From<Size> for CGSize {
    #[inline]
    fn from(size: Size) -> Self {
        CGSize::new(size.width, size.height)
    }
}

impl From<CGVector> for Vector {
    #[inline]
    fn from(vector: CGVector) -> Self {
        Vector::new(vector.dx, vector.dy)
    }
}

impl From<Vector> for CGVector {
    #[inline]
    fn from(vector: Vector) -> Self {
        CGVector::new(vector.dx, vector.dy)
    }
}

impl From<CGRect> for Rect {
    #[inline]
    fn from(rect: CGRect) -> Self {
        Rect::from_origin_size(rect.origin.into(), rect.size.into())
    }
}

impl From<Rect> for CGRect {
    #[inline]
    fn from(rect: Rect) -> Self {
        CGRect::new(rect.origin.into(), rect.size.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_round_trip() {
        let r = Rect::new(1., 2., 3., -4.);
        let cg: CGRect = r.into();
        assert_eq!(cg.size.height, -4.);
        assert_eq!(Rect::from(cg), r);
        assert_eq!(Vector::from(CGVector::new(1., 2.)), Vector::new(1., 2.));
    }
}
