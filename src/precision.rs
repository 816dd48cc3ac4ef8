//! Precision constants for geometric comparisons.
//!
//! These values are the ground truth for every tolerance check in the
//! crate; the intersection, locator and area code never use bare literals.

/// Angular tolerance for checking equality of angles (radians).
/// Value: 1.0e-12
pub const ANGULAR: f64 = 1.0e-12;

/// Confusion tolerance for checking coincidence of two points in real space.
/// Two points are coincident if their distance < CONFUSION.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Square of CONFUSION for performance.
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;

/// Relative tolerance used to decide tangency of two circles.
/// The half-chord `h` of a circle pair is treated as zero when
/// `h <= TANGENCY * r`. Sits above the `sqrt(EPSILON)` noise floor of
/// `h = sqrt(r² - a²)`.
/// Value: CONFUSION = 1.0e-7
pub const TANGENCY: f64 = CONFUSION;

/// A full turn in radians. Direct segment angles above this are rejected.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Check if a length is zero at CONFUSION level.
#[inline]
pub fn is_zero_length(value: f64) -> bool {
    value.abs() < CONFUSION
}

/// Check if an angle is zero at ANGULAR level.
#[inline]
pub fn is_zero_angle(value: f64) -> bool {
    value.abs() < ANGULAR
}
