//! 2D vector.

use nalgebra::Vector2;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector in cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2d {
    x: f64,
    y: f64,
}

impl Vec2d {
    /// Creates a zero vector.
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Creates a vector with given components.
    #[inline]
    pub const fn from_coords(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the X component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns components as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the squared magnitude of the vector.
    #[inline]
    pub const fn square_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Computes the dot product.
    #[inline]
    pub const fn dot(&self, other: &Vec2d) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (scalar result).
    #[inline]
    pub const fn crossed(&self, other: &Vec2d) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the vector rotated by +90 degrees.
    #[inline]
    pub const fn perpendicular(&self) -> Vec2d {
        Vec2d::from_coords(-self.y, self.x)
    }

    /// Returns normalized copy. Returns None if zero-length.
    pub fn normalized(&self) -> Option<Vec2d> {
        let m = self.magnitude();
        if m <= f64::MIN_POSITIVE {
            None
        } else {
            Some(Vec2d::from_coords(self.x / m, self.y / m))
        }
    }

    /// Returns the angle (in radians) from positive X-axis.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unsigned angle to another vector, in `[0, PI]`.
    ///
    /// Zero-length input yields 0.
    #[inline]
    pub fn angle_to(&self, other: &Vec2d) -> f64 {
        self.to_nalgebra().angle(&other.to_nalgebra())
    }

    /// Returns vector multiplied by scalar.
    #[inline]
    pub fn multiplied(&self, scalar: f64) -> Vec2d {
        Vec2d::from_coords(self.x * scalar, self.y * scalar)
    }

    /// Converts to a nalgebra column vector.
    #[inline]
    pub fn to_nalgebra(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl Add for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn add(self, other: Vec2d) -> Vec2d {
        Vec2d::from_coords(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn sub(self, other: Vec2d) -> Vec2d {
        Vec2d::from_coords(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn mul(self, scalar: f64) -> Vec2d {
        self.multiplied(scalar)
    }
}

impl Mul<Vec2d> for f64 {
    type Output = Vec2d;
    #[inline]
    fn mul(self, vec: Vec2d) -> Vec2d {
        vec.multiplied(self)
    }
}

impl Neg for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn neg(self) -> Vec2d {
        Vec2d::from_coords(-self.x, -self.y)
    }
}
