//! Lens area composition
//!
//! The area of the curvilinear triangle is the area of the straight-edged
//! triangle through its vertices plus, for every circle, the circular
//! segment between that circle's chord and its boundary arc.

use crate::{
    gp::{Circ2d, Pnt2d},
    locate::{locate, CurvilinearTriangle, CIRCLE_LABELS},
    precision::{self, TWO_PI},
    {LensError, Result},
};
use serde::Serialize;
use tracing::debug;

/// Which of the two arcs cut by a chord bounds the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcSide {
    /// The arc subtending the angle in `[0, PI]`
    Minor,
    /// The complementary arc, subtending `2*PI` minus the minor angle
    Major,
}

/// Area breakdown of a three-circle lens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaResult {
    /// Area of the straight-edged triangle through the three vertices
    pub triangle_area: f64,
    /// Segment area for circles A, B and C
    pub segment_areas: [f64; 3],
    /// Triangle plus all three segments
    pub total_area: f64,
}

impl AreaResult {
    /// Sum of the three segment areas.
    pub fn segments_total(&self) -> f64 {
        self.segment_areas.iter().sum()
    }
}

/// Area of the triangle through three vertices (shoelace formula).
///
/// Winding order does not matter; the result is never negative.
pub fn triangle_area(vertices: &[Pnt2d; 3]) -> f64 {
    let [a, b, c] = vertices;
    (c.side_of(a, b) * 0.5).abs()
}

/// Area of the circular segment cut off by the chord `p`-`q`.
///
/// The subtended angle is recovered from the radius vectors and lies in
/// `[0, PI]`; `side` selects whether the segment is bounded by that minor
/// arc or by its major complement.
///
/// # Returns
/// * `Err(LensError::DegenerateInput)` - `p` or `q` coincides with the center
pub fn segment_area(circle: &Circ2d, p: Pnt2d, q: Pnt2d, side: ArcSide) -> Result<f64> {
    let center = circle.center();
    for point in [p, q] {
        if precision::is_zero_length(point.distance(&center)) {
            return Err(LensError::DegenerateInput(format!(
                "chord endpoint ({}, {}) coincides with the circle center",
                point.x(),
                point.y()
            )));
        }
    }

    let minor = (p - center).angle_to(&(q - center));
    let angle = match side {
        ArcSide::Minor => minor,
        ArcSide::Major => TWO_PI - minor,
    };
    segment_area_from_angle(circle, angle)
}

/// Area of a circular segment from its subtended angle in radians.
///
/// `0.5 * r² * (angle - sin(angle))`
///
/// # Returns
/// * `Err(LensError::UnitMismatch)` - angle above `2*PI`, most likely degrees
/// * `Err(LensError::InvalidGeometry)` - negative or non-finite angle
pub fn segment_area_from_angle(circle: &Circ2d, angle: f64) -> Result<f64> {
    if !angle.is_finite() || angle < 0.0 {
        return Err(LensError::InvalidGeometry(format!(
            "segment angle must be a non-negative finite number of radians, got {}",
            angle
        )));
    }
    if angle > TWO_PI {
        return Err(LensError::UnitMismatch(format!(
            "segment angle {} exceeds 2*PI; convert degrees to radians first",
            angle
        )));
    }
    if precision::is_zero_angle(angle) {
        return Ok(0.0);
    }

    let r = circle.radius();
    Ok(0.5 * r * r * (angle - angle.sin()))
}

/// The arc of circle `index` that bounds the shared region.
///
/// The region is convex and contains the triangle, so its arc lies on the
/// far side of the chord from the opposite vertex. When the circle center
/// is on that side too, the arc is longer than a half circle.
pub fn lens_arc_side(triangle: &CurvilinearTriangle, index: usize) -> ArcSide {
    let (p, q) = triangle.chord(index);
    let center_side = triangle.circles()[index].center().side_of(&p, &q);
    let opposite_side = triangle.opposite_vertex(index).side_of(&p, &q);

    if center_side * opposite_side < 0.0 {
        ArcSide::Major
    } else {
        ArcSide::Minor
    }
}

/// Total area of a located curvilinear triangle.
///
/// The triangle carries the circles, the vertices and the mapping from
/// each circle to its chord, so every segment is measured on the right
/// pair of vertices.
pub fn total_area(triangle: &CurvilinearTriangle) -> Result<AreaResult> {
    let tri = triangle_area(triangle.vertices());
    debug!("triangle area: {:.6}", tri);

    let mut segment_areas = [0.0; 3];
    for (index, circle) in triangle.circles().iter().enumerate() {
        let (p, q) = triangle.chord(index);
        let side = lens_arc_side(triangle, index);
        segment_areas[index] = segment_area(circle, p, q, side)?;
        debug!(
            "circle {} segment ({:?} arc): {:.6}",
            CIRCLE_LABELS[index], side, segment_areas[index]
        );
    }

    let total = tri + segment_areas.iter().sum::<f64>();
    debug!("total area: {:.6}", total);

    Ok(AreaResult {
        triangle_area: tri,
        segment_areas,
        total_area: total,
    })
}

/// Locate the shared region of three circles and compute its area.
pub fn lens_area(a: &Circ2d, b: &Circ2d, c: &Circ2d) -> Result<AreaResult> {
    let triangle = locate(a, b, c)?;
    total_area(&triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn circle(x: f64, y: f64, r: f64) -> Circ2d {
        Circ2d::from_coords(x, y, r).unwrap()
    }

    #[test]
    fn test_triangle_area_ignores_winding() {
        let ccw = [
            Pnt2d::from_coords(0.0, 0.0),
            Pnt2d::from_coords(4.0, 0.0),
            Pnt2d::from_coords(0.0, 3.0),
        ];
        let cw = [ccw[0], ccw[2], ccw[1]];
        assert!((triangle_area(&ccw) - 6.0).abs() < 1e-12);
        assert!((triangle_area(&cw) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_area_collinear_is_zero() {
        let points = [
            Pnt2d::from_coords(0.0, 0.0),
            Pnt2d::from_coords(1.0, 1.0),
            Pnt2d::from_coords(2.0, 2.0),
        ];
        assert_eq!(triangle_area(&points), 0.0);
    }

    #[test]
    fn test_quarter_circle_segments() {
        let c = circle(0.0, 0.0, 1.0);
        let p = Pnt2d::from_coords(1.0, 0.0);
        let q = Pnt2d::from_coords(0.0, 1.0);

        let minor = segment_area(&c, p, q, ArcSide::Minor).unwrap();
        let major = segment_area(&c, p, q, ArcSide::Major).unwrap();

        assert!((minor - 0.5 * (FRAC_PI_2 - 1.0)).abs() < 1e-12);
        assert!((major - 0.5 * (3.0 * FRAC_PI_2 + 1.0)).abs() < 1e-12);
        assert!((minor + major - c.area()).abs() < 1e-12);
    }

    #[test]
    fn test_segment_point_at_center_rejected() {
        let c = circle(2.0, 3.0, 1.0);
        let on_circle = Pnt2d::from_coords(3.0, 3.0);
        let result = segment_area(&c, c.center(), on_circle, ArcSide::Minor);
        assert!(matches!(result, Err(LensError::DegenerateInput(_))));
        let result = segment_area(&c, on_circle, c.center(), ArcSide::Minor);
        assert!(matches!(result, Err(LensError::DegenerateInput(_))));
    }

    #[test]
    fn test_segment_from_angle() {
        let c = circle(0.0, 0.0, 2.0);
        let half = segment_area_from_angle(&c, PI).unwrap();
        assert!((half - 2.0 * PI).abs() < 1e-12);
        let full = segment_area_from_angle(&c, TWO_PI).unwrap();
        assert!((full - c.area()).abs() < 1e-12);
        assert_eq!(segment_area_from_angle(&c, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_segment_angle_in_degrees_rejected() {
        let c = circle(0.0, 0.0, 1.0);
        let result = segment_area_from_angle(&c, 400.0);
        assert!(matches!(result, Err(LensError::UnitMismatch(_))));
    }

    #[test]
    fn test_segment_negative_angle_rejected() {
        let c = circle(0.0, 0.0, 1.0);
        assert!(matches!(
            segment_area_from_angle(&c, -0.5),
            Err(LensError::InvalidGeometry(_))
        ));
        assert!(segment_area_from_angle(&c, f64::NAN).is_err());
    }

    #[test]
    fn test_example_breakdown() {
        let result = lens_area(
            &circle(0.0, 0.0, 100.0),
            &circle(70.0, 0.0, 100.0),
            &circle(0.0, 70.0, 100.0),
        )
        .unwrap();

        assert!((result.triangle_area - 5326.4265614229535).abs() < 1e-6);
        assert!((result.segment_areas[0] - 503.2705975193802).abs() < 1e-6);
        assert!((result.segment_areas[1] - 2424.314859262506).abs() < 1e-6);
        assert!((result.segment_areas[2] - 2424.314859262506).abs() < 1e-6);
        assert!((result.total_area - 10678.326877467345).abs() < 1e-6);
        assert!((result.triangle_area + result.segments_total() - result.total_area).abs() < 1e-9);
    }

    #[test]
    fn test_major_arc_selected_for_small_circle() {
        // A's boundary arc inside B and C is longer than a half circle
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(1.1, 0.0, 2.0);
        let c = circle(0.2, 0.1, 1.2);

        let triangle = locate(&a, &b, &c).unwrap();
        assert_eq!(lens_arc_side(&triangle, 0), ArcSide::Major);
        assert_eq!(lens_arc_side(&triangle, 1), ArcSide::Minor);

        let result = total_area(&triangle).unwrap();
        assert!((result.total_area - 3.056272680108143).abs() < 1e-9);
        assert!(result.total_area <= a.area());
    }
}
