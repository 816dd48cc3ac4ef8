//! DXF (AutoCAD Drawing Exchange Format) export of a located lens

use crate::gp::Pnt2d;
use crate::locate::CurvilinearTriangle;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const LAYER_CIRCLES: &str = "CIRCLES";
const LAYER_VERTICES: &str = "VERTICES";
const LAYER_TRIANGLE: &str = "TRIANGLE";
const LAYER_LENS: &str = "LENS";

/// Write a located lens to DXF ASCII format
///
/// Entities, one layer each:
/// - CIRCLE for every input circle
/// - POINT for every triangle vertex
/// - LINE for every triangle edge
/// - ARC for every boundary arc of the shared region
///
/// # Example
/// ```rust,no_run
/// use trilens::{locate, write_dxf, Circ2d};
///
/// let a = Circ2d::from_coords(0.0, 0.0, 100.0).unwrap();
/// let b = Circ2d::from_coords(70.0, 0.0, 100.0).unwrap();
/// let c = Circ2d::from_coords(0.0, 70.0, 100.0).unwrap();
/// let triangle = locate(&a, &b, &c).unwrap();
/// write_dxf(&triangle, "lens.dxf").unwrap();
/// ```
pub fn write_dxf(triangle: &CurvilinearTriangle, path: impl AsRef<Path>) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    write_dxf_header(&mut file)?;
    write_dxf_entities(&mut file, triangle)?;

    writeln!(file, "  0")?;
    writeln!(file, "ENDSEC")?;
    writeln!(file, "  0")?;
    writeln!(file, "EOF")?;

    file.flush()?;
    Ok(())
}

/// Write DXF header with required sections
fn write_dxf_header<W: Write>(file: &mut W) -> Result<()> {
    // HEADER section
    writeln!(file, "  0")?;
    writeln!(file, "SECTION")?;
    writeln!(file, "  2")?;
    writeln!(file, "HEADER")?;
    writeln!(file, "  9")?;
    writeln!(file, "$ACADVER")?;
    writeln!(file, "  1")?;
    writeln!(file, "AC1021")?; // DXF R2007 version
    writeln!(file, "  0")?;
    writeln!(file, "ENDSEC")?;

    // TABLES section with one layer per entity kind
    writeln!(file, "  0")?;
    writeln!(file, "SECTION")?;
    writeln!(file, "  2")?;
    writeln!(file, "TABLES")?;
    writeln!(file, "  0")?;
    writeln!(file, "TABLE")?;
    writeln!(file, "  2")?;
    writeln!(file, "LAYER")?;
    writeln!(file, " 70")?;
    writeln!(file, "4")?;
    for (name, color) in [
        (LAYER_CIRCLES, 5),
        (LAYER_VERTICES, 1),
        (LAYER_TRIANGLE, 3),
        (LAYER_LENS, 7),
    ] {
        writeln!(file, "  0")?;
        writeln!(file, "LAYER")?;
        writeln!(file, "  2")?;
        writeln!(file, "{}", name)?;
        writeln!(file, " 70")?;
        writeln!(file, "0")?;
        writeln!(file, " 62")?;
        writeln!(file, "{}", color)?;
        writeln!(file, "  6")?;
        writeln!(file, "CONTINUOUS")?;
    }
    writeln!(file, "  0")?;
    writeln!(file, "ENDTAB")?;
    writeln!(file, "  0")?;
    writeln!(file, "ENDSEC")?;

    Ok(())
}

/// Write ENTITIES section with lens geometry
fn write_dxf_entities<W: Write>(file: &mut W, triangle: &CurvilinearTriangle) -> Result<()> {
    writeln!(file, "  0")?;
    writeln!(file, "SECTION")?;
    writeln!(file, "  2")?;
    writeln!(file, "ENTITIES")?;

    for circle in triangle.circles() {
        write_dxf_circle(file, circle.center(), circle.radius())?;
    }

    let vertices = triangle.vertices();
    for vertex in vertices {
        write_dxf_point(file, *vertex)?;
    }
    for i in 0..3 {
        write_dxf_line(file, vertices[i], vertices[(i + 1) % 3])?;
    }

    for (index, circle) in triangle.circles().iter().enumerate() {
        let (start, end) = lens_arc_endpoints(triangle, index);
        write_dxf_arc(file, circle.center(), circle.radius(), start, end)?;
    }

    Ok(())
}

/// Endpoints of the boundary arc on circle `index`, ordered counter-clockwise.
///
/// The CCW arc from `p` to `q` lies right of the directed chord `p -> q`,
/// and the boundary arc lies on the side away from the opposite vertex.
fn lens_arc_endpoints(triangle: &CurvilinearTriangle, index: usize) -> (Pnt2d, Pnt2d) {
    let (p, q) = triangle.chord(index);
    if triangle.opposite_vertex(index).side_of(&p, &q) > 0.0 {
        (p, q)
    } else {
        (q, p)
    }
}

/// Write a CIRCLE entity
fn write_dxf_circle<W: Write>(file: &mut W, center: Pnt2d, radius: f64) -> Result<()> {
    writeln!(file, "  0")?;
    writeln!(file, "CIRCLE")?;
    writeln!(file, "  8")?;
    writeln!(file, "{}", LAYER_CIRCLES)?;
    writeln!(file, " 10")?;
    writeln!(file, "{:.6}", center.x())?;
    writeln!(file, " 20")?;
    writeln!(file, "{:.6}", center.y())?;
    writeln!(file, " 30")?;
    writeln!(file, "0.000000")?;
    writeln!(file, " 40")?;
    writeln!(file, "{:.6}", radius)?;
    Ok(())
}

/// Write a POINT entity
fn write_dxf_point<W: Write>(file: &mut W, point: Pnt2d) -> Result<()> {
    writeln!(file, "  0")?;
    writeln!(file, "POINT")?;
    writeln!(file, "  8")?;
    writeln!(file, "{}", LAYER_VERTICES)?;
    writeln!(file, " 10")?;
    writeln!(file, "{:.6}", point.x())?;
    writeln!(file, " 20")?;
    writeln!(file, "{:.6}", point.y())?;
    writeln!(file, " 30")?;
    writeln!(file, "0.000000")?;
    Ok(())
}

/// Write a LINE entity
fn write_dxf_line<W: Write>(file: &mut W, start: Pnt2d, end: Pnt2d) -> Result<()> {
    writeln!(file, "  0")?;
    writeln!(file, "LINE")?;
    writeln!(file, "  8")?;
    writeln!(file, "{}", LAYER_TRIANGLE)?;
    writeln!(file, " 10")?;
    writeln!(file, "{:.6}", start.x())?;
    writeln!(file, " 20")?;
    writeln!(file, "{:.6}", start.y())?;
    writeln!(file, " 30")?;
    writeln!(file, "0.000000")?;
    writeln!(file, " 11")?;
    writeln!(file, "{:.6}", end.x())?;
    writeln!(file, " 21")?;
    writeln!(file, "{:.6}", end.y())?;
    writeln!(file, " 31")?;
    writeln!(file, "0.000000")?;
    Ok(())
}

/// Write an ARC entity running counter-clockwise from `start` to `end`
fn write_dxf_arc<W: Write>(
    file: &mut W,
    center: Pnt2d,
    radius: f64,
    start: Pnt2d,
    end: Pnt2d,
) -> Result<()> {
    writeln!(file, "  0")?;
    writeln!(file, "ARC")?;
    writeln!(file, "  8")?;
    writeln!(file, "{}", LAYER_LENS)?;
    writeln!(file, " 10")?;
    writeln!(file, "{:.6}", center.x())?;
    writeln!(file, " 20")?;
    writeln!(file, "{:.6}", center.y())?;
    writeln!(file, " 30")?;
    writeln!(file, "0.000000")?;
    writeln!(file, " 40")?;
    writeln!(file, "{:.6}", radius)?;
    writeln!(file, " 50")?;
    writeln!(file, "{:.6}", calculate_angle(center, start))?;
    writeln!(file, " 51")?;
    writeln!(file, "{:.6}", calculate_angle(center, end))?;
    Ok(())
}

/// Calculate angle from center to point in degrees, in `[0, 360)`
fn calculate_angle(center: Pnt2d, point: Pnt2d) -> f64 {
    let angle_deg = (point - center).angle().to_degrees();
    if angle_deg < 0.0 {
        angle_deg + 360.0
    } else {
        angle_deg
    }
}
