//! Geometry of hexagonal grids in a 2d cartesian coordinate system.

mod rect;

pub use self::rect::Rect;

use log::warn;
use nalgebra::{ Point2, Vector2 };

use std::f64::consts::PI;

use crate::grid::Cube;

/// The square root of 3, i.e. the ratio between the width and the
/// side length of a pointy-top hexagon.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A direction of rotation.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Rotation {
    /// Clockwise.
    CW,
    /// Counterclockwise.
    CCW,
}

/// The orientation of the hexagons of a grid in a cartesian coordinate
/// system.
///
/// The forward coefficients `f0..f3` form the 2x2 matrix mapping axial
/// coordinates `(q, r)` to cartesian coordinates for a hexagon of unit size,
/// the backward coefficients `b0..b3` form its inverse.
///
/// Guide: [Layout]
///
/// [Layout]: https://www.redblobgames.com/grids/hexagons/implementation.html#layout
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Orientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    /// The angle of the first corner of a hexagon, in multiples of 60°.
    pub start_angle: f64,
}

impl Orientation {
    /// Hexagons with a corner pointing up.
    pub const POINTY_TOP: Orientation = Orientation {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// Hexagons with a side facing up.
    pub const FLAT_TOP: Orientation = Orientation {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };
}

/// The layout of a hexagonal grid in a cartesian coordinate system,
/// i.e. the affine mapping between grid coordinates and pixels.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Layout {
    pub(crate) orientation: Orientation,
    pub(crate) origin: Point2<f64>,
    pub(crate) size: Vector2<f64>,
}

impl Layout {
    /// Create a layout placing the center of the hexagon at the grid
    /// origin at `origin`, with `size` being the horizontal and vertical
    /// distance from the center of a hexagon to its corners.
    ///
    /// The size is expected to be positive in both dimensions, otherwise
    /// the layout is degenerate and conversions from cartesian coordinates
    /// are meaningless.
    pub fn new(orientation: Orientation, origin: Point2<f64>, size: Vector2<f64>) -> Layout {
        if !(size.x > 0. && size.y > 0.) {
            warn!("Degenerate hexagon layout with size ({}, {})", size.x, size.y);
        }
        Layout { orientation, origin, size }
    }

    pub fn pointy_top(origin: Point2<f64>, size: Vector2<f64>) -> Layout {
        Self::new(Orientation::POINTY_TOP, origin, size)
    }

    pub fn flat_top(origin: Point2<f64>, size: Vector2<f64>) -> Layout {
        Self::new(Orientation::FLAT_TOP, origin, size)
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn origin(&self) -> Point2<f64> {
        self.origin
    }

    pub fn size(&self) -> Vector2<f64> {
        self.size
    }

    /// Map the axial pair `(q, r)` to the cartesian coordinates
    /// of the center of the corresponding hexagon.
    pub(crate) fn forward(&self, q: i32, r: i32) -> Point2<f64> {
        let m = &self.orientation;
        let (q, r) = (f64::from(q), f64::from(r));
        Point2::new(
            self.origin.x + (m.f0 * q + m.f1 * r) * self.size.x,
            self.origin.y + (m.f2 * q + m.f3 * r) * self.size.y,
        )
    }

    /// Map a cartesian point to fractional axial coordinates `(q, r)`.
    pub(crate) fn backward(&self, p: Point2<f64>) -> (f64, f64) {
        let m = &self.orientation;
        let x = (p.x - self.origin.x) / self.size.x;
        let y = (p.y - self.origin.y) / self.size.y;
        (m.b0 * x + m.b1 * y, m.b2 * x + m.b3 * y)
    }

    /// The offset of the `i`-th corner of a hexagon from its center.
    pub fn corner_offset(&self, i: u8) -> Vector2<f64> {
        let angle = 2.0 * PI * (self.orientation.start_angle + f64::from(i)) / 6.0;
        Vector2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// The corners of the hexagon with the given coordinates.
    pub fn corners(&self, c: Cube) -> [Point2<f64>; 6] {
        let center = c.cartesian(self);
        let mut corners = [center; 6];
        for (i, p) in corners.iter_mut().enumerate() {
            *p = center + self.corner_offset(i as u8);
        }
        corners
    }

    /// The rectangular bounds of the hexagon with the given coordinates.
    pub fn bounds(&self, c: Cube) -> Rect {
        let corners = self.corners(c);
        let (mut min, mut max) = (corners[0], corners[0]);
        for p in &corners[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::new(min, max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::*;
    use quickcheck::*;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    impl Arbitrary for Rotation {
        fn arbitrary<G: Gen>(g: &mut G) -> Rotation {
            if bool::arbitrary(g) { Rotation::CW } else { Rotation::CCW }
        }
    }

    fn unit_layout(o: Orientation) -> Layout {
        Layout::new(o, Point2::origin(), Vector2::new(1., 1.))
    }

    #[test]
    fn test_orientation_inverse() {
        for m in &[Orientation::POINTY_TOP, Orientation::FLAT_TOP] {
            assert!(approx(m.b0 * m.f0 + m.b1 * m.f2, 1.));
            assert!(approx(m.b0 * m.f1 + m.b1 * m.f3, 0.));
            assert!(approx(m.b2 * m.f0 + m.b3 * m.f2, 0.));
            assert!(approx(m.b2 * m.f1 + m.b3 * m.f3, 1.));
        }
    }

    #[test]
    fn test_forward_pointy_top() {
        let l = unit_layout(Orientation::POINTY_TOP);
        let p = l.forward(1, 0);
        assert!(approx(p.x, SQRT_3) && approx(p.y, 0.));
        let p = l.forward(0, 1);
        assert!(approx(p.x, SQRT_3 / 2.) && approx(p.y, 1.5));
    }

    #[test]
    fn test_forward_origin_and_size() {
        let l = Layout::flat_top(Point2::new(10., 20.), Vector2::new(2., 3.));
        assert_eq!(l.forward(0, 0), Point2::new(10., 20.));
        let p = l.forward(2, 0);
        assert!(approx(p.x, 10. + 3. * 2.));
        assert!(approx(p.y, 20. + SQRT_3 * 3.));
    }

    #[test]
    fn test_corners_pointy_top() {
        let l = unit_layout(Orientation::POINTY_TOP);
        let cs = l.corners(Cube::origin());
        // The first corner is at 30°, the second straight below the
        // center (y grows downwards on screens).
        assert!(approx(cs[0].x, SQRT_3 / 2.) && approx(cs[0].y, 0.5));
        assert!(approx(cs[1].x, 0.) && approx(cs[1].y, 1.));
    }

    #[test]
    fn test_bounds_flat_top() {
        let l = Layout::flat_top(Point2::new(5., 5.), Vector2::new(2., 2.));
        let b = l.bounds(Cube::origin());
        assert!(approx(b.min_x(), 3.) && approx(b.max_x(), 7.));
        assert!(approx(b.height(), 2. * SQRT_3));
        assert!(b.contains(Point2::new(5., 5.)));
    }

    #[test]
    fn prop_corners_equidistant() {
        fn prop(c: Cube) -> bool {
            let l = Layout::pointy_top(Point2::new(-3., 7.), Vector2::new(12., 12.));
            let center = c.cartesian(&l);
            l.corners(c).iter().all(|p| (nalgebra::distance(p, &center) - 12.).abs() < 1e-6)
        }
        quickcheck(prop as fn(_) -> _);
    }
}
