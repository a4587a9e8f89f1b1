//! Hexagonal grids with overlaid coordinate systems.
pub mod axial;
pub mod cube;
pub mod shape;

pub use self::axial::*;
pub use self::cube::*;
pub use self::shape::*;

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt::{ Debug, Display };
use std::hash::Hash;
use std::iter::FromIterator;

/// Coordinates on a grid. Every coordinate system is embedded in
/// the cube coordinate system, which serves as the canonical one
/// for all algorithms.
pub trait Coords:
    From<Cube> + Into<Cube> + Eq + Copy + Debug + Display + Hash {
}

/// The distance between two coordinates.
pub fn distance<C: Coords>(from: C, to: C) -> u32 {
    let a: Cube = from.into();
    a.distance(to.into())
}

/// Iterate over the neighbouring (adjacent) coordinates.
pub fn neighbours<C: Coords>(c: C) -> impl Iterator<Item=C> {
    let center: Cube = c.into();
    center.neighbours().map(C::from)
}

/// The coordinates at exactly the given distance, in the order
/// of [`Cube::ring`].
pub fn ring<C: Coords>(c: C, radius: u32) -> impl ExactSizeIterator<Item=C> {
    let center: Cube = c.into();
    center.ring(radius).map(C::from)
}

/// The coordinates within the given distance, ring by ring.
pub fn spiral<C: Coords>(c: C, radius: u32) -> impl Iterator<Item=C> {
    let center: Cube = c.into();
    center.spiral(radius).map(C::from)
}

/// A mapping from locations on a grid to the contents of the cells
/// at these locations.
#[derive(Clone, Debug)]
pub struct Grid<L, T> where L: Eq + Hash {
    cells: HashMap<L, T>,
}

/// A grid of hexagons located by cube coordinates.
pub type HexGrid<T> = Grid<Cube, T>;

impl<L: Eq + Hash, T> Grid<L, T> {
    pub fn new() -> Grid<L, T> {
        Grid { cells: HashMap::new() }
    }

    pub fn with_capacity(n: usize) -> Grid<L, T> {
        Grid { cells: HashMap::with_capacity(n) }
    }

    /// Put a cell at the given location, returning the previous
    /// cell at that location, if any.
    pub fn insert(&mut self, loc: L, cell: T) -> Option<T> {
        self.cells.insert(loc, cell)
    }

    pub fn get(&self, loc: &L) -> Option<&T> {
        self.cells.get(loc)
    }

    pub fn get_mut(&mut self, loc: &L) -> Option<&mut T> {
        self.cells.get_mut(loc)
    }

    pub fn remove(&mut self, loc: &L) -> Option<T> {
        self.cells.remove(loc)
    }

    pub fn contains(&self, loc: &L) -> bool {
        self.cells.contains_key(loc)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, L, T> {
        self.cells.iter()
    }

    pub fn locations(&self) -> hash_map::Keys<'_, L, T> {
        self.cells.keys()
    }
}

impl<L: Eq + Hash, T> Default for Grid<L, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Eq + Hash, T> FromIterator<(L, T)> for Grid<L, T> {
    fn from_iter<I: IntoIterator<Item=(L, T)>>(iter: I) -> Self {
        Grid { cells: HashMap::from_iter(iter) }
    }
}

impl<L: Eq + Hash, T> Extend<(L, T)> for Grid<L, T> {
    fn extend<I: IntoIterator<Item=(L, T)>>(&mut self, iter: I) {
        self.cells.extend(iter)
    }
}

impl<'a, L: Eq + Hash, T> IntoIterator for &'a Grid<L, T> {
    type Item = (&'a L, &'a T);
    type IntoIter = hash_map::Iter<'a, L, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
