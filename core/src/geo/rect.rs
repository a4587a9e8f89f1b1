use nalgebra::{ Point2, Vector2 };

/// An axis-aligned rectangle in a cartesian coordinate system.
///
/// The size of a rectangle may be negative, in which case the origin
/// is not its minimum corner. See [`Rect::standardized`].
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Rect {
    pub origin: Point2<f64>,
    pub size: Vector2<f64>,
}

impl Rect {
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Self::new(Point2::new(x, y), Vector2::new(width, height))
    }

    /// The rectangle with zero origin and size.
    pub fn zero() -> Rect {
        Self::from_xywh(0., 0., 0., 0.)
    }

    pub fn width(&self) -> f64 { self.size.x }
    pub fn height(&self) -> f64 { self.size.y }

    pub fn min_x(&self) -> f64 { self.origin.x.min(self.origin.x + self.size.x) }
    pub fn min_y(&self) -> f64 { self.origin.y.min(self.origin.y + self.size.y) }
    pub fn max_x(&self) -> f64 { self.origin.x.max(self.origin.x + self.size.x) }
    pub fn max_y(&self) -> f64 { self.origin.y.max(self.origin.y + self.size.y) }

    /// The same rectangle with a non-negative width and height.
    pub fn standardized(&self) -> Rect {
        Self::from_xywh(self.min_x(), self.min_y(), self.size.x.abs(), self.size.y.abs())
    }

    /// The smallest rectangle with integral coordinates containing
    /// this rectangle.
    pub fn integral(&self) -> Rect {
        let (x, y) = (self.min_x().floor(), self.min_y().floor());
        Self::from_xywh(x, y, self.max_x().ceil() - x, self.max_y().ceil() - y)
    }

    /// Shrink (or grow, for negative values) the standardized rectangle
    /// by `dx` on the left and right and by `dy` on the top and bottom.
    pub fn inset_by(&self, dx: f64, dy: f64) -> Rect {
        let r = self.standardized();
        Self::from_xywh(
            r.origin.x + dx,
            r.origin.y + dy,
            r.size.x - 2. * dx,
            r.size.y - 2. * dy)
    }

    pub fn offset_by(&self, dx: f64, dy: f64) -> Rect {
        Self::new(self.origin + Vector2::new(dx, dy), self.size)
    }

    /// Whether the point lies within the rectangle, edges included.
    pub fn contains(&self, p: Point2<f64>) -> bool {
        self.min_x() <= p.x && p.x <= self.max_x() &&
        self.min_y() <= p.y && p.y <= self.max_y()
    }

    /// Whether the interiors of the two rectangles overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x() &&
        self.max_x() > other.min_x() &&
        self.min_y() < other.max_y() &&
        self.max_y() > other.min_y()
    }
}
