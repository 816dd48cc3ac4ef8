//! End-to-end properties of the three-circle lens area

use std::f64::consts::PI;
use trilens::{
    intersection_points, lens_area, locate, segment_area_from_angle, total_area, triangle_area,
    Circ2d, LensError, Pnt2d,
};

fn circle(x: f64, y: f64, r: f64) -> Circ2d {
    Circ2d::from_coords(x, y, r).expect("valid circle")
}

fn example() -> [Circ2d; 3] {
    [
        circle(0.0, 0.0, 100.0),
        circle(70.0, 0.0, 100.0),
        circle(0.0, 70.0, 100.0),
    ]
}

/// Valid triples with their expected areas; two of them have a boundary
/// arc longer than a half circle.
fn fixtures() -> Vec<([Circ2d; 3], f64)> {
    vec![
        (example(), 10678.326877467345),
        ([circle(0.0, 0.0, 2.0), circle(2.0, 0.0, 3.0), circle(0.0, 2.0, 3.0)], 7.0878672211852),
        ([circle(0.0, 0.0, 1.0), circle(1.1, 0.0, 2.0), circle(0.2, 0.1, 1.2)], 3.056272680108143),
        ([circle(0.0, 0.0, 1.9), circle(1.9, 0.8, 1.9), circle(0.0, 2.0, 1.4)], 1.045916390361064),
        ([circle(0.0, 0.0, 2.0), circle(2.1, 0.6, 1.2), circle(-0.8, 0.7, 2.6)], 1.224879356833306),
        ([circle(0.0, 0.0, 1.9), circle(2.6, 0.0, 2.3), circle(0.0, 2.2, 1.9)], 0.8218309636515955),
        ([circle(0.0, 0.0, 1.1), circle(2.1, 0.6, 1.5), circle(-1.7, 1.3, 2.9)], 0.27180348225468337),
        ([circle(0.0, 0.0, 1.8), circle(1.0, -0.5, 2.9), circle(1.2, 1.3, 2.8)], 8.039925669929744),
        ([circle(0.0, 0.0, 2.7), circle(1.0, -0.7, 2.8), circle(1.3, 1.1, 1.4)], 5.0860563044054015),
    ]
}

#[test]
fn test_example_end_to_end() {
    let [a, b, c] = example();
    let triangle = locate(&a, &b, &c).expect("example is a valid configuration");

    let v = triangle.vertices();
    assert!(!v[0].is_equal(&v[1], 1e-6));
    assert!(!v[0].is_equal(&v[2], 1e-6));
    assert!(!v[1].is_equal(&v[2], 1e-6));

    let result = total_area(&triangle).unwrap();
    assert!((result.triangle_area - triangle_area(v)).abs() < 1e-12);
    assert!(result.total_area.is_finite());
    assert!(result.total_area > 0.0);
    assert!(result.total_area < PI * 100.0 * 100.0);
    assert!((result.total_area - 10678.326877467345).abs() < 1e-6);
}

#[test]
fn test_known_areas() {
    for ([a, b, c], expected) in fixtures() {
        let result = lens_area(&a, &b, &c).expect("fixture is valid");
        assert!(
            (result.total_area - expected).abs() < 1e-9 * expected.max(1.0),
            "expected {}, got {}",
            expected,
            result.total_area
        );
    }
}

#[test]
fn test_area_is_symmetric_under_relabeling() {
    let permutations = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for (circles, _) in fixtures() {
        let reference = lens_area(&circles[0], &circles[1], &circles[2]).unwrap().total_area;
        for [i, j, k] in permutations {
            let area = lens_area(&circles[i], &circles[j], &circles[k]).unwrap().total_area;
            assert!(
                (area - reference).abs() < 1e-9 * reference.max(1.0),
                "permutation {:?}: {} vs {}",
                [i, j, k],
                area,
                reference
            );
        }
    }
}

#[test]
fn test_area_bounded_by_smallest_circle() {
    for (circles, _) in fixtures() {
        let result = lens_area(&circles[0], &circles[1], &circles[2]).unwrap();
        let smallest = circles
            .iter()
            .map(Circ2d::area)
            .fold(f64::INFINITY, f64::min);

        assert!(result.total_area >= 0.0);
        assert!(result.total_area <= smallest);
        assert!(result.triangle_area >= 0.0);
        assert!(result.segment_areas.iter().all(|s| *s >= 0.0));
    }
}

#[test]
fn test_similarity_scales_area_by_k_squared() {
    let origin = Pnt2d::new();
    for k in [0.5, 2.0, 3.7] {
        for (circles, _) in fixtures() {
            let base = lens_area(&circles[0], &circles[1], &circles[2]).unwrap().total_area;
            let scaled: Vec<Circ2d> = circles
                .iter()
                .map(|c| c.scaled(&origin, k).unwrap())
                .collect();
            let area = lens_area(&scaled[0], &scaled[1], &scaled[2]).unwrap().total_area;
            assert!((area - k * k * base).abs() < 1e-9 * (k * k * base).max(1.0));
        }
    }
}

#[test]
fn test_growing_radii_with_fixed_centers_grows_area() {
    let mut previous = 0.0;
    for radius in [100.0, 105.0, 110.0, 120.0] {
        let area = lens_area(
            &circle(0.0, 0.0, radius),
            &circle(70.0, 0.0, radius),
            &circle(0.0, 70.0, radius),
        )
        .unwrap()
        .total_area;
        assert!(area > previous);
        previous = area;
    }
}

#[test]
fn test_intersection_known_points() {
    let points = intersection_points(&circle(0.0, 0.0, 5.0), &circle(8.0, 0.0, 5.0)).unwrap();
    assert_eq!(points.len(), 2);
    let mut ys: Vec<f64> = points.iter().map(|p| p.y()).collect();
    ys.sort_by(f64::total_cmp);
    assert!((points[0].x() - 4.0).abs() < 1e-9);
    assert!((points[1].x() - 4.0).abs() < 1e-9);
    assert!((ys[0] + 3.0).abs() < 1e-9);
    assert!((ys[1] - 3.0).abs() < 1e-9);
}

#[test]
fn test_degenerate_and_disjoint_pairs() {
    let c = circle(0.0, 0.0, 5.0);
    assert!(matches!(
        intersection_points(&c, &c),
        Err(LensError::DegenerateInput(_))
    ));
    assert!(intersection_points(&c, &circle(100.0, 0.0, 5.0)).unwrap().is_empty());
}

#[test]
fn test_invalid_configurations_abort() {
    // One circle far away
    let result = lens_area(&circle(0.0, 0.0, 5.0), &circle(6.0, 0.0, 5.0), &circle(50.0, 50.0, 5.0));
    assert!(matches!(result, Err(LensError::InvalidConfiguration(_))));

    // One circle contains the other two
    let result = lens_area(&circle(-1.0, 0.0, 2.0), &circle(1.0, 0.0, 2.0), &circle(0.0, 0.0, 20.0));
    assert!(matches!(result, Err(LensError::InvalidConfiguration(_))));

    // Nested circles
    let result = lens_area(&circle(0.0, 0.0, 1.0), &circle(0.0, 0.0, 3.0), &circle(1.0, 1.0, 2.0));
    assert!(matches!(result, Err(LensError::InvalidConfiguration(_))));
}

#[test]
fn test_angle_unit_guard() {
    let result = segment_area_from_angle(&circle(0.0, 0.0, 1.0), 400.0);
    assert!(matches!(result, Err(LensError::UnitMismatch(_))));
}
