//! 2D circle.

use crate::gp::Pnt2d;
use crate::{LensError, Result};
use serde::Serialize;

/// A 2D circle defined by center and radius.
///
/// The radius is always finite and strictly positive; circles are
/// immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circ2d {
    center: Pnt2d,
    radius: f64,
}

impl Circ2d {
    /// Creates a circle, rejecting non-finite centers and non-positive radii.
    pub fn new(center: Pnt2d, radius: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(LensError::InvalidGeometry(format!(
                "circle center must be finite, got ({}, {})",
                center.x(),
                center.y()
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LensError::InvalidGeometry(format!(
                "circle radius must be positive and finite, got {}",
                radius
            )));
        }
        Ok(Self { center, radius })
    }

    /// Creates a circle from raw center coordinates and radius.
    #[inline]
    pub fn from_coords(x: f64, y: f64, radius: f64) -> Result<Self> {
        Self::new(Pnt2d::from_coords(x, y), radius)
    }

    /// Returns the center.
    #[inline]
    pub fn center(&self) -> Pnt2d {
        self.center
    }

    /// Returns the radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the area of the circle.
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Computes the distance from a point to the circle.
    /// Positive if outside, negative if inside, zero on the circle.
    pub fn distance(&self, point: Pnt2d) -> f64 {
        self.center.distance(&point) - self.radius
    }

    /// Checks if a point is on the circle within tolerance.
    pub fn contains(&self, point: Pnt2d, tolerance: f64) -> bool {
        self.distance(point).abs() <= tolerance
    }

    /// Checks if a point lies inside or on the circle, within tolerance.
    pub fn contains_point(&self, point: Pnt2d, tolerance: f64) -> bool {
        self.distance(point) <= tolerance
    }

    /// Returns the circle scaled about `origin` by `factor`.
    pub fn scaled(&self, origin: &Pnt2d, factor: f64) -> Result<Circ2d> {
        Circ2d::new(self.center.scaled(origin, factor), self.radius * factor.abs())
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x() - self.radius,
            self.center.y() - self.radius,
            self.center.x() + self.radius,
            self.center.y() + self.radius,
        )
    }
}
