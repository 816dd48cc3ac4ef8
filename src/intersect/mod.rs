//! Circle-circle intersection
//!
//! Computes the 0, 1 or 2 points where two circles cross. Tangent pairs
//! produce a single point rather than a repeated one, so downstream vertex
//! counting never sees duplicates.

use crate::{
    gp::{Circ2d, Pnt2d},
    precision::{self, TANGENCY},
    {LensError, Result},
};

/// Outcome of intersecting two circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection {
    /// Disjoint circles, or one circle strictly inside the other
    None,
    /// Circles touch at exactly one point
    Tangent(Pnt2d),
    /// Circles cross at two distinct points
    Pair(Pnt2d, Pnt2d),
}

impl CircleIntersection {
    /// Returns the intersection points as a vector of 0, 1 or 2 elements.
    pub fn points(&self) -> Vec<Pnt2d> {
        match *self {
            CircleIntersection::None => vec![],
            CircleIntersection::Tangent(p) => vec![p],
            CircleIntersection::Pair(p, q) => vec![p, q],
        }
    }

    /// Number of intersection points.
    pub fn len(&self) -> usize {
        match self {
            CircleIntersection::None => 0,
            CircleIntersection::Tangent(_) => 1,
            CircleIntersection::Pair(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CircleIntersection::None)
    }
}

/// Intersect two circles.
///
/// Uses the radical-line construction: with `d` the center distance,
/// the chord's foot lies at `a = (r1² - r2² + d²) / 2d` along the center
/// axis and the half-chord is `h = sqrt(r1² - a²)`.
///
/// # Returns
/// * `Ok(CircleIntersection::None)` - disjoint or nested circles
/// * `Ok(CircleIntersection::Tangent(p))` - touching circles
/// * `Ok(CircleIntersection::Pair(p, q))` - crossing circles
/// * `Err(LensError::DegenerateInput)` - identical circles (infinitely many points)
pub fn intersect_circles(c1: &Circ2d, c2: &Circ2d) -> Result<CircleIntersection> {
    let r1 = c1.radius();
    let r2 = c2.radius();
    let axis = c2.center() - c1.center();
    let d = axis.magnitude();

    if precision::is_zero_length(d) {
        if precision::is_zero_length(r1 - r2) {
            return Err(LensError::DegenerateInput(format!(
                "identical circles at ({}, {}) with radius {}",
                c1.center().x(),
                c1.center().y(),
                r1
            )));
        }
        // Concentric with different radii: one contains the other
        return Ok(CircleIntersection::None);
    }

    if d > r1 + r2 || d < (r1 - r2).abs() {
        return Ok(CircleIntersection::None);
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    // Rounding near tangency can push r1² - a² slightly negative
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let unit = axis * (1.0 / d);
    let foot = c1.center() + unit * a;

    if h <= TANGENCY * r1.max(r2) {
        return Ok(CircleIntersection::Tangent(foot));
    }

    let offset = unit.perpendicular() * h;
    Ok(CircleIntersection::Pair(foot + -offset, foot + offset))
}

/// Intersect two circles and return the points as a vector.
pub fn intersection_points(c1: &Circ2d, c2: &Circ2d) -> Result<Vec<Pnt2d>> {
    Ok(intersect_circles(c1, c2)?.points())
}
