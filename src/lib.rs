//! trilens: area of the region common to three circles
//!
//! The shared region of three mutually overlapping circles is a curvilinear
//! triangle. Its area is the straight-edged triangle through the three
//! boundary vertices plus the three circular segments that bulge outward
//! from the triangle edges.

pub mod precision;
pub mod gp;
pub mod intersect;
pub mod locate;
pub mod area;
pub mod io;
pub mod config;

// Re-exports for convenience
pub use gp::{Pnt2d, Vec2d, Circ2d};
pub use intersect::{intersect_circles, intersection_points, CircleIntersection};
pub use locate::{locate, CirclePair, CurvilinearTriangle};
pub use area::{
    lens_area, segment_area, segment_area_from_angle, total_area, triangle_area, AreaResult,
    ArcSide,
};
pub use io::{render_svg, write_dxf, write_svg, SvgStyle};
pub use config::{CircleSpec, LensConfig};

/// Tolerance for geometric comparisons
pub const TOLERANCE: f64 = precision::CONFUSION;

/// Result type for lens operations
pub type Result<T> = std::result::Result<T, LensError>;

#[derive(Debug, thiserror::Error)]
pub enum LensError {
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unit mismatch: {0}")]
    UnitMismatch(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
