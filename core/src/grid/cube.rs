//! Cube coordinates.
pub mod dir;

pub use self::dir::*;

use nalgebra::{ Point2, Point3 };

use std::cmp::max;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{ Add, Mul, Neg, Sub };

use super::*;
use crate::error::Error;
use crate::geo::{ Layout, Rotation };

/// Cube coordinates, i.e. points in 3d space, satisfying `q + r + s = 0`.
///
/// Cube coordinates are points on a diagonal plane that "cuts through"
/// a cube grid (a cube made of many smaller cubes). The cubes intersecting
/// the plane project regular hexagons onto the plane, allowing to see the
/// plane as a hexagonal grid whereby the coordinates of each hexagon can be
/// identified with the coordinates of the cube it is projected from.
/// This yields a coordinate system that simplifies many algorithms and
/// thus serves as the canonical coordinate system for any grid
/// (see [`Coords`]).
///
/// Equality and hashing take all three components into account.
///
/// Guide: [Cube coordinates]
///
/// [Cube coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-cube
/// [`Coords`]: ../trait.Coords.html
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Cube {
    p: Point3<i32>,
}

impl Cube {
    /// Create cube coordinates.
    ///
    /// # Panics
    ///
    /// If `q + r + s != 0`. Use `Cube::try_from((q, r, s))` for
    /// components that are not known to be valid.
    pub fn new(q: i32, r: i32, s: i32) -> Cube {
        assert!(sums_to_zero(q, r, s), "invalid cube coordinates ({},{},{})", q, r, s);
        Cube { p: Point3::new(q, r, s) }
    }

    pub fn origin() -> Cube {
        Self::new(0, 0, 0)
    }

    pub fn q(&self) -> i32 { self.p.x }
    pub fn r(&self) -> i32 { self.p.y }
    pub fn s(&self) -> i32 { self.p.z }

    /// Round fractional cube coordinates to the nearest cube coordinates.
    ///
    /// Each component is rounded to the nearest integer, halfway cases
    /// away from zero. Since the rounded components need not sum up to
    /// zero, the component with the largest rounding error is then
    /// recomputed from the other two, whereby ties are resolved in
    /// favour of recomputing `s`.
    ///
    /// # Panics
    ///
    /// If a rounded component lies outside the range of `i32`.
    pub fn round(q: f64, r: f64, s: f64) -> Cube {
        let (mut rq, mut rr, mut rs) = (q.round(), r.round(), s.round());
        let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());
        if dq > dr && dq > ds {
            rq = -rr - rs;
        }
        else if dq > ds {
            rr = -rq - rs;
        }
        else {
            rs = -rq - rr;
        }
        debug_assert!([rq, rr, rs].iter().all(|c| in_i32_range(*c)),
            "cube coordinates ({},{},{}) out of range", rq, rr, rs);
        Self::new(rq as i32, rr as i32, rs as i32)
    }

    /// The cube coordinates of the hexagon containing the given
    /// point in the cartesian coordinate system of the given layout.
    pub fn from_cartesian(p: Point2<f64>, layout: &Layout) -> Cube {
        let (q, r) = layout.backward(p);
        Self::round(q, r, -q - r)
    }

    /// The center of the hexagon with these coordinates in the cartesian
    /// coordinate system of the given layout, satisfying
    /// ```ignore
    /// Cube::from_cartesian(c.cartesian(&l), &l) == c
    /// ```
    /// for all cube coordinates `c` and layouts `l`.
    ///
    /// Note that the layout is applied to the pair `(q, r)`, whereas
    /// [`Axial::cartesian`] applies it to the axial `(q, r)` which
    /// corresponds to the cube `(q, s)`.
    ///
    /// [`Axial::cartesian`]: ../axial/struct.Axial.html#method.cartesian
    pub fn cartesian(self, layout: &Layout) -> Point2<f64> {
        layout.forward(self.q(), self.r())
    }

    /// Multiply all components by `k`.
    pub fn scale(self, k: i32) -> Cube {
        Cube { p: self.p * k }
    }

    /// The distance to another cube coordinate, i.e. the number of
    /// steps between adjacent hexagons needed to get there.
    pub fn distance(self, other: Cube) -> u32 {
        let d = self - other;
        max(d.q().abs(), max(d.r().abs(), d.s().abs())) as u32
    }

    /// The adjacent cube coordinates in the given direction.
    pub fn neighbor(self, d: Direction) -> Cube {
        self + d.unit()
    }

    /// Iterate over the neighbouring (adjacent) cube coordinates in the
    /// order of [`Direction::all`].
    ///
    /// [`Direction::all`]: dir/enum.Direction.html#method.all
    pub fn neighbours(self) -> impl ExactSizeIterator<Item=Cube> {
        Direction::all().map(move |d| self.neighbor(d))
    }

    /// Iterate over the cube coordinates at exactly the given distance.
    ///
    /// For a radius of zero, that is just `self`. Otherwise the ring
    /// starts at the corner in direction [`Direction::D150`] and is
    /// walked counterclockwise, `radius` steps along each side, the
    /// sides running in the directions `D270, D330, D30, D90, D150, D210`.
    /// Every position is yielded before the step away from it.
    ///
    /// [`Direction::D150`]: dir/enum.Direction.html#variant.D150
    pub fn ring(self, radius: u32) -> impl ExactSizeIterator<Item=Cube> {
        self.walk_ring(Direction::D150, radius, Rotation::CCW)
    }

    /// Iterate over the coordinates in the ring at a given distance
    /// from `self`, starting at the corner of the ring in the given
    /// direction from `self` and walking along the ring as per the
    /// given `Rotation`.
    pub fn walk_ring(self, corner: Direction, radius: u32, rot: Rotation)
            -> impl ExactSizeIterator<Item=Cube> {
        RingIterator {
            pos: self + corner.unit() * radius as i32,
            dirs: corner.walk(rot),
            dir: None,
            radius,
            steps: radius,
            remaining: Self::num_in_ring(radius),
        }
    }

    /// Iterate over the cube coordinates within the given distance,
    /// ring by ring, starting with `self`.
    pub fn spiral(self, radius: u32) -> impl Iterator<Item=Cube> {
        (0 ..= radius).flat_map(move |r| self.ring(r))
    }

    /// The number of cube coordinates in the ring of the given radius.
    pub fn num_in_ring(radius: u32) -> usize {
        if radius == 0 { 1 } else { 6 * radius as usize }
    }

    /// The number of cube coordinates in the spiral of the given radius.
    pub fn num_in_spiral(radius: u32) -> usize {
        let r = radius as usize;
        3 * r * (r + 1) + 1
    }
}

impl Coords for Cube {}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.q(), self.r(), self.s())
    }
}

impl TryFrom<(i32, i32, i32)> for Cube {
    type Error = Error;

    fn try_from((q, r, s): (i32, i32, i32)) -> crate::Result<Cube> {
        if sums_to_zero(q, r, s) {
            Ok(Cube::new(q, r, s))
        } else {
            Err(Error::InvalidCube { q, r, s })
        }
    }
}

impl From<Cube> for (i32, i32, i32) {
    fn from(c: Cube) -> (i32, i32, i32) {
        (c.q(), c.r(), c.s())
    }
}

impl Add<Cube> for Cube {
    type Output = Cube;

    fn add(self, other: Cube) -> Cube {
        Cube { p: self.p + other.p.coords }
    }
}

impl Sub<Cube> for Cube {
    type Output = Cube;

    fn sub(self, other: Cube) -> Cube {
        Cube { p: self.p - other.p.coords }
    }
}

impl Neg for Cube {
    type Output = Cube;

    fn neg(self) -> Cube {
        Cube { p: -self.p }
    }
}

impl Mul<i32> for Cube {
    type Output = Cube;

    fn mul(self, k: i32) -> Cube {
        self.scale(k)
    }
}

/// Whether the components lie in the plane `q + r + s = 0`,
/// computed without overflow.
fn sums_to_zero(q: i32, r: i32, s: i32) -> bool {
    i64::from(q) + i64::from(r) + i64::from(s) == 0
}

fn in_i32_range(c: f64) -> bool {
    f64::from(i32::MIN) <= c && c <= f64::from(i32::MAX)
}

/// Walks the sides of a ring, yielding the position before each step.
struct RingIterator<I> {
    pos: Cube,
    dirs: I,
    dir: Option<Direction>,
    radius: u32,
    steps: u32,
    remaining: usize,
}

impl<I: Iterator<Item=Direction>> Iterator for RingIterator<I> {
    type Item = Cube;

    fn next(&mut self) -> Option<Cube> {
        if self.remaining == 0 {
            return None
        }
        self.remaining -= 1;
        if self.radius == 0 {
            return Some(self.pos)
        }
        if self.steps == self.radius {
            self.dir = self.dirs.next();
            self.steps = 0;
        }
        let pos = self.pos;
        self.pos = pos.neighbor(self.dir?);
        self.steps += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator<Item=Direction>> ExactSizeIterator for RingIterator<I> {}
