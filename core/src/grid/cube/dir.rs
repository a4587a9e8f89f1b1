//! Directions in the cube coordinate system.
//!
//! The six directions are named after the angle (in degrees) under
//! which the adjacent hexagon lies and are enumerated in
//! counterclockwise order.

use either::Either;
use num_traits::FromPrimitive;

use super::Cube;
use crate::geo::Rotation;

/// Vectors for the displacement to a neighbouring (adjacent) cube coordinate
/// along one of the sides of a hexagon, indexed by `Direction`.
const CUBE_DIR_VECTORS: [[i32; 3]; 6] =
    [ [ 1, -1, 0], [0, -1,  1], [-1, 0,  1]
    , [-1,  1, 0], [0,  1, -1], [ 1, 0, -1]
    ];

const DIRECTIONS: [Direction; 6] =
    [ Direction::D30, Direction::D90, Direction::D150
    , Direction::D210, Direction::D270, Direction::D330
    ];

/// Directions for adjacent neighbours.
#[derive(PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
#[derive(FromPrimitive, Debug)]
pub enum Direction {
    D30  = 0,
    D90  = 1,
    D150 = 2,
    D210 = 3,
    D270 = 4,
    D330 = 5
}

impl Direction {
    /// All directions in counterclockwise order, starting with `D30`.
    pub fn all() -> impl DoubleEndedIterator<Item=Direction> + ExactSizeIterator + Clone {
        DIRECTIONS.iter().copied()
    }

    /// The position of the direction in the order of `Direction::all`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Direction> {
        Direction::from_usize(i)
    }

    /// The displacement to the adjacent hexagon in this direction.
    pub fn unit(self) -> Cube {
        let [q, r, s] = CUBE_DIR_VECTORS[self.index()];
        Cube::new(q, r, s)
    }

    /// The angle of the direction in degrees.
    pub fn angle(self) -> u16 {
        30 + 60 * self as u16
    }

    /// Rotate the direction `n` times by 60 degrees.
    pub fn rotate(self, rot: Rotation, n: usize) -> Direction {
        let n = n % 6;
        match rot {
            Rotation::CCW => DIRECTIONS[(self.index() + n) % 6],
            Rotation::CW  => DIRECTIONS[(self.index() + 6 - n) % 6],
        }
    }

    pub fn opposite(self) -> Direction {
        self.rotate(Rotation::CCW, 3)
    }

    /// The directions of the six sides of a ring that is walked,
    /// as per the given `Rotation`, from its corner in direction
    /// `self`. The first side runs along `self` rotated by 120
    /// degrees, every following one is rotated by another 60.
    pub fn walk(self, rot: Rotation) -> impl Iterator<Item=Direction> {
        let dirs = Self::all();
        match rot {
            Rotation::CCW => Either::Left(
                dirs.cycle().skip((self.index() + 2) % 6).take(6)
            ),
            Rotation::CW  => Either::Right(
                dirs.rev().cycle().skip((7 - self.index()) % 6).take(6)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for Direction {
        fn arbitrary<G: Gen>(g: &mut G) -> Direction {
            Direction::from_index(g.gen_range(0, 6)).unwrap()
        }
    }

    #[test]
    fn test_cube_vectors_valid() {
        for [q, r, s] in &CUBE_DIR_VECTORS {
            assert!(q + r + s == 0);
            assert!(q.abs().max(r.abs()).max(s.abs()) == 1);
        }
    }

    #[test]
    fn test_units() {
        assert_eq!(Direction::D30.unit(), Cube::new(1, -1, 0));
        assert_eq!(Direction::D90.unit(), Cube::new(0, -1, 1));
        assert_eq!(Direction::D150.unit(), Cube::new(-1, 0, 1));
        assert_eq!(Direction::D210.unit(), Cube::new(-1, 1, 0));
        assert_eq!(Direction::D270.unit(), Cube::new(0, 1, -1));
        assert_eq!(Direction::D330.unit(), Cube::new(1, 0, -1));
        assert_eq!(Direction::D330.angle(), 330);
    }

    #[test]
    fn test_index() {
        assert!(Direction::all().enumerate().all(|(i, d)| d.index() == i));
        assert_eq!(Direction::from_index(2), Some(Direction::D150));
        assert_eq!(Direction::from_index(6), None);
    }

    #[test]
    fn test_walk() {
        use Direction::*;
        let ccw = D150.walk(Rotation::CCW).collect::<Vec<_>>();
        assert_eq!(ccw, vec![D270, D330, D30, D90, D150, D210]);
        let cw = D150.walk(Rotation::CW).collect::<Vec<_>>();
        assert_eq!(cw, vec![D30, D330, D270, D210, D150, D90]);
    }

    #[test]
    fn prop_walk_turns() {
        fn prop(d: Direction, rot: Rotation) -> bool {
            let v = d.walk(rot).collect::<Vec<_>>();
            v.len() == 6
                && v[0] == d.rotate(rot, 2)
                && v.windows(2).all(|w| w[1] == w[0].rotate(rot, 1))
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_rotate() {
        fn prop(d: Direction, n: usize) -> bool {
            d.rotate(Rotation::CW, n) == d.rotate(Rotation::CCW, 6 - n % 6)
                && d.rotate(Rotation::CCW, n).rotate(Rotation::CW, n) == d
                && d.unit() + d.opposite().unit() == Cube::origin()
        }
        quickcheck(prop as fn(_, _) -> _);
    }
}
