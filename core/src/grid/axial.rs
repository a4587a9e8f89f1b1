//! Axial coordinates.

use nalgebra::Point2;

use std::fmt;

use super::*;
use crate::geo::Layout;

/// Axial coordinates, i.e. cube coordinates with one of the three
/// components left implicit.
///
/// In the embedding into cube coordinates the axial `q` is the cube `q`
/// and the axial `r` is the cube `s`, leaving the cube `r` implicit.
///
/// Guide: [Axial Coordinates]
///
/// [Axial Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-axial
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub fn new(q: i32, r: i32) -> Axial {
        Axial { q, r }
    }

    /// The center of the hexagon with these coordinates in the
    /// cartesian coordinate system of the given layout.
    pub fn cartesian(self, layout: &Layout) -> Point2<f64> {
        layout.forward(self.q, self.r)
    }
}

impl Coords for Axial {}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

impl From<Cube> for Axial {
    fn from(c: Cube) -> Axial {
        Axial { q: c.q(), r: c.s() }
    }
}

impl From<Axial> for Cube {
    fn from(a: Axial) -> Cube {
        Cube::new(a.q, -a.q - a.r, a.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for Axial {
        fn arbitrary<G: Gen>(g: &mut G) -> Axial {
            let (q, r) = (g.gen::<i16>(), g.gen::<i16>());
            Axial::new(i32::from(q), i32::from(r))
        }
    }

    #[test]
    fn test_to_cube() {
        assert_eq!(Cube::from(Axial::new(2, -1)), Cube::new(2, -1, -1));
        assert_eq!(Cube::from(Axial::new(1, 2)), Cube::new(1, -3, 2));
        assert_eq!(Cube::from(Axial::new(0, 0)), Cube::origin());
    }

    #[test]
    fn prop_from_to_cube_identity() {
        fn prop(c: Cube) -> bool {
            Cube::from(Axial::from(c)) == c
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_to_from_cube_identity() {
        fn prop(a: Axial) -> bool {
            Axial::from(Cube::from(a)) == a
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn test_cartesian() {
        let l = Layout::pointy_top(Point2::new(100., 50.), Vector2::new(10., 10.));
        let p = Axial::new(2, 0).cartesian(&l);
        assert!((p.x - (100. + 20. * 3f64.sqrt())).abs() < 1e-9);
        assert!((p.y - 50.).abs() < 1e-9);
        let p = Axial::new(0, -2).cartesian(&l);
        assert!((p.x - (100. - 10. * 3f64.sqrt())).abs() < 1e-9);
        assert!((p.y - 20.).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Axial::new(-3, 4).to_string(), "(-3,4)");
    }
}
