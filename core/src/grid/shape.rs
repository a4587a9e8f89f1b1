//! Grid shapes.

use super::*;

/// The outline of a finite hexagonal grid.
///
/// Guide: [Map storage]
///
/// Shapes only describe a grid. Which coordinates belong to a
/// shape depends on the coordinate system the grid is laid out in
/// and is left to the users of the shape.
///
/// [Map storage]: https://www.redblobgames.com/grids/hexagons/#map-storage
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Shape {
    Parallelogram { width: u32, height: u32 },
    Rectangular { width: u32, height: u32 },
    Hexagonal { radius: u32 },
    Triangular { side: u32 },
}

/// A grid of hexagons with a declared shape.
#[derive(Clone, Debug)]
pub struct ShapedGrid<T> {
    shape: Shape,
    cells: HexGrid<T>,
}

impl<T> ShapedGrid<T> {
    pub fn new(shape: Shape) -> ShapedGrid<T> {
        ShapedGrid { shape, cells: Grid::new() }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn cells(&self) -> &HexGrid<T> {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut HexGrid<T> {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shaped_grid() {
        let mut g = ShapedGrid::new(Shape::Hexagonal { radius: 2 });
        g.cells_mut().extend(Cube::origin().spiral(2).map(|c| (c, ())));
        assert_eq!(g.shape(), Shape::Hexagonal { radius: 2 });
        assert_eq!(g.cells().len(), 19);
        assert_ne!(g.shape(), Shape::Triangular { side: 2 });
    }
}
