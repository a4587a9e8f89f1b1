//! Coordinates, layouts and neighbourhoods for hexagonal grids.
//!
//! Guide: [Hexagonal Grids](https://www.redblobgames.com/grids/hexagons/)

extern crate either;
extern crate nalgebra;
extern crate num_traits;
#[macro_use]
extern crate num_derive;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod error;
pub mod geo;
pub mod grid;

pub use self::error::{ Error, Result };
