//! Curvilinear triangle location
//!
//! Finds the three vertices of the region shared by three circles. Each
//! circle pair contributes the one intersection point that lies inside the
//! third circle; anything other than exactly one such point per pair means
//! the shared region is not a three-arc curvilinear triangle.

use crate::{
    gp::{Circ2d, Pnt2d},
    intersect::intersection_points,
    {LensError, Result, TOLERANCE},
};
use tracing::{debug, trace};

/// Display labels for the three input circles, in input order.
pub const CIRCLE_LABELS: [char; 3] = ['A', 'B', 'C'];

/// One of the three unordered circle pairs, in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CirclePair {
    AB,
    AC,
    BC,
}

impl CirclePair {
    /// All pairs in vertex order.
    pub const ALL: [CirclePair; 3] = [CirclePair::AB, CirclePair::AC, CirclePair::BC];

    /// Indices of the two circles of this pair.
    pub const fn circles(self) -> (usize, usize) {
        match self {
            CirclePair::AB => (0, 1),
            CirclePair::AC => (0, 2),
            CirclePair::BC => (1, 2),
        }
    }

    /// Index of the circle not in this pair.
    pub const fn third(self) -> usize {
        match self {
            CirclePair::AB => 2,
            CirclePair::AC => 1,
            CirclePair::BC => 0,
        }
    }

    /// Position of this pair's vertex in the triangle.
    pub const fn vertex_index(self) -> usize {
        match self {
            CirclePair::AB => 0,
            CirclePair::AC => 1,
            CirclePair::BC => 2,
        }
    }
}

/// The region common to three circles, described by its three vertices.
///
/// Vertices are stored in discovery order `[AB, AC, BC]`. Each vertex lies
/// on the boundary of the two circles of its pair and inside (or on) the
/// third circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvilinearTriangle {
    circles: [Circ2d; 3],
    vertices: [Pnt2d; 3],
}

impl CurvilinearTriangle {
    /// The input circles, in input order.
    pub fn circles(&self) -> &[Circ2d; 3] {
        &self.circles
    }

    /// The three vertices, in order `[AB, AC, BC]`.
    pub fn vertices(&self) -> &[Pnt2d; 3] {
        &self.vertices
    }

    /// The vertex contributed by a circle pair.
    pub fn vertex(&self, pair: CirclePair) -> Pnt2d {
        self.vertices[pair.vertex_index()]
    }

    /// For each circle, the indices of the two vertices on its boundary.
    ///
    /// Circle `i` owns the vertices of the two pairs that contain `i`, so
    /// its chord is the triangle edge opposite the vertex of the pair that
    /// excludes it.
    pub fn edge_to_circle_map(&self) -> [(usize, usize); 3] {
        [(0, 1), (0, 2), (1, 2)]
    }

    /// The chord endpoints on circle `index`.
    pub fn chord(&self, index: usize) -> (Pnt2d, Pnt2d) {
        let (i, j) = self.edge_to_circle_map()[index];
        (self.vertices[i], self.vertices[j])
    }

    /// The vertex not on circle `index`.
    pub fn opposite_vertex(&self, index: usize) -> Pnt2d {
        self.vertices[2 - index]
    }
}

/// Locate the curvilinear triangle shared by three circles.
///
/// # Returns
/// * `Ok(CurvilinearTriangle)` - exactly one vertex per circle pair
/// * `Err(LensError::InvalidConfiguration)` - a pair contributes no vertex or
///   more than one (disjoint circles, containment, or several shared zones)
/// * `Err(LensError::DegenerateInput)` - two of the circles are identical
pub fn locate(a: &Circ2d, b: &Circ2d, c: &Circ2d) -> Result<CurvilinearTriangle> {
    let circles = [*a, *b, *c];
    let mut vertices = [Pnt2d::new(); 3];

    for pair in CirclePair::ALL {
        let (i, j) = pair.circles();
        let k = pair.third();
        let third = &circles[k];
        let tolerance = TOLERANCE * third.radius().max(1.0);

        let candidates = intersection_points(&circles[i], &circles[j])?;
        let inside: Vec<Pnt2d> = candidates
            .into_iter()
            .filter(|p| {
                let keep = third.contains_point(*p, tolerance);
                if !keep {
                    trace!(
                        "{:?} candidate ({}, {}) lies outside circle {}",
                        pair,
                        p.x(),
                        p.y(),
                        CIRCLE_LABELS[k]
                    );
                }
                keep
            })
            .collect();

        match inside.as_slice() {
            [vertex] => {
                debug!("{:?} vertex at ({:.6}, {:.6})", pair, vertex.x(), vertex.y());
                vertices[pair.vertex_index()] = *vertex;
            }
            [] => {
                return Err(LensError::InvalidConfiguration(format!(
                    "circles {} and {} contribute no intersection point inside circle {}",
                    CIRCLE_LABELS[i], CIRCLE_LABELS[j], CIRCLE_LABELS[k]
                )));
            }
            many => {
                return Err(LensError::InvalidConfiguration(format!(
                    "circles {} and {} contribute {} intersection points inside circle {}; \
                     the shared region is not a single curvilinear triangle",
                    CIRCLE_LABELS[i],
                    CIRCLE_LABELS[j],
                    many.len(),
                    CIRCLE_LABELS[k]
                )));
            }
        }
    }

    Ok(CurvilinearTriangle { circles, vertices })
}
