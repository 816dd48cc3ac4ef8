//! 2D point.

use crate::gp::Vec2d;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in cartesian coordinates.
///
/// A point has no identity beyond its coordinates; it serves both as an
/// intersection candidate and as a finished triangle vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pnt2d {
    x: f64,
    y: f64,
}

impl Pnt2d {
    /// Creates a point at the origin (0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Creates a point with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns coordinates as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(&self, other: &Pnt2d) -> f64 {
        self.square_distance(other).sqrt()
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub const fn square_distance(&self, other: &Pnt2d) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Checks if this point is equal to another within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Pnt2d, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }

    /// Returns true when both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns translated copy.
    #[inline]
    pub fn translated(&self, vec: Vec2d) -> Pnt2d {
        Pnt2d::from_coords(self.x + vec.x(), self.y + vec.y())
    }

    /// Returns copy scaled from a center point.
    #[inline]
    pub fn scaled(&self, center: &Pnt2d, factor: f64) -> Pnt2d {
        let dx = (self.x - center.x) * factor;
        let dy = (self.y - center.y) * factor;
        Pnt2d::from_coords(center.x + dx, center.y + dy)
    }

    /// Signed orientation of the turn `a -> b -> self`.
    ///
    /// Positive when `self` lies to the left of the directed line `a -> b`,
    /// negative to the right, zero when collinear.
    #[inline]
    pub fn side_of(&self, a: &Pnt2d, b: &Pnt2d) -> f64 {
        (*b - *a).crossed(&(*self - *a))
    }
}

impl Add<Vec2d> for Pnt2d {
    type Output = Pnt2d;
    #[inline]
    fn add(self, vec: Vec2d) -> Pnt2d {
        self.translated(vec)
    }
}

impl Sub for Pnt2d {
    type Output = Vec2d;
    #[inline]
    fn sub(self, other: Pnt2d) -> Vec2d {
        Vec2d::from_coords(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnt2d_new() {
        let p = Pnt2d::new();
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.y(), 0.0);
    }

    #[test]
    fn test_pnt2d_distance() {
        let p1 = Pnt2d::from_coords(0.0, 0.0);
        let p2 = Pnt2d::from_coords(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
        assert_eq!(p1.square_distance(&p2), 25.0);
    }

    #[test]
    fn test_pnt2d_is_equal() {
        let p1 = Pnt2d::from_coords(1.0, 2.0);
        let p2 = Pnt2d::from_coords(1.0 + 1e-8, 2.0);
        assert!(p1.is_equal(&p2, 1e-7));
        assert!(!p1.is_equal(&p2, 1e-9));
    }

    #[test]
    fn test_pnt2d_scaled() {
        let center = Pnt2d::from_coords(1.0, 1.0);
        let p = Pnt2d::from_coords(2.0, 3.0).scaled(&center, 2.0);
        assert_eq!(p.coords(), (3.0, 5.0));
    }

    #[test]
    fn test_pnt2d_side_of() {
        let a = Pnt2d::from_coords(0.0, 0.0);
        let b = Pnt2d::from_coords(1.0, 0.0);
        assert!(Pnt2d::from_coords(0.5, 1.0).side_of(&a, &b) > 0.0);
        assert!(Pnt2d::from_coords(0.5, -1.0).side_of(&a, &b) < 0.0);
        assert_eq!(Pnt2d::from_coords(2.0, 0.0).side_of(&a, &b), 0.0);
    }

    #[test]
    fn test_pnt2d_sub_gives_vector() {
        let v = Pnt2d::from_coords(4.0, 6.0) - Pnt2d::from_coords(1.0, 2.0);
        assert_eq!(v.coords(), (3.0, 4.0));
    }
}
