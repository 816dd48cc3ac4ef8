//! SVG rendering of three circles and their shared triangle

use crate::gp::{Circ2d, Pnt2d};
use crate::{LensError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const MAX_GRID_LINES: f64 = 500.0;

/// Visual settings for the SVG diagram
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Blank space around the circles' bounding box, in model units
    pub margin: f64,
    /// Stroke width in model units
    pub stroke_width: f64,
    /// Radius of the dots drawn at centers and vertices
    pub point_radius: f64,
    /// Opacity of the shaded triangle (0.0 = transparent, 1.0 = opaque)
    pub fill_opacity: f64,
    /// Spacing of background grid lines; no grid when `None`
    pub grid_step: Option<f64>,
    /// Title drawn above the diagram
    pub title: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        SvgStyle {
            margin: 10.0,
            stroke_width: 1.0,
            point_radius: 2.5,
            fill_opacity: 0.4,
            grid_step: Some(50.0),
            title: "Valid Intersection Points and Triangle".to_string(),
        }
    }
}

impl SvgStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width.max(0.01);
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_grid(mut self, step: Option<f64>) -> Self {
        self.grid_step = step.filter(|s| *s > 0.0);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Render circles, their centers, the triangle vertices and the shaded
/// triangle to an SVG document.
///
/// Model Y points up; the document flips it so the picture matches the
/// usual mathematical orientation.
pub fn render_svg(circles: &[Circ2d], vertices: &[Pnt2d], style: &SvgStyle) -> Result<String> {
    let mut buffer = Vec::new();
    write_svg_to(&mut buffer, circles, vertices, style)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the SVG diagram to a file.
///
/// # Example
/// ```rust,no_run
/// use trilens::{locate, write_svg, Circ2d, SvgStyle};
///
/// let a = Circ2d::from_coords(0.0, 0.0, 100.0).unwrap();
/// let b = Circ2d::from_coords(70.0, 0.0, 100.0).unwrap();
/// let c = Circ2d::from_coords(0.0, 70.0, 100.0).unwrap();
/// let triangle = locate(&a, &b, &c).unwrap();
/// write_svg(triangle.circles(), triangle.vertices(), "lens.svg", &SvgStyle::default()).unwrap();
/// ```
pub fn write_svg(
    circles: &[Circ2d],
    vertices: &[Pnt2d],
    path: impl AsRef<Path>,
    style: &SvgStyle,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_svg_to(&mut writer, circles, vertices, style)?;
    writer.flush()?;
    Ok(())
}

fn write_svg_to<W: Write>(
    out: &mut W,
    circles: &[Circ2d],
    vertices: &[Pnt2d],
    style: &SvgStyle,
) -> Result<()> {
    if circles.is_empty() {
        return Err(LensError::InvalidGeometry("no circles to render".into()));
    }

    let (min_x, min_y, max_x, max_y) = bounds(circles, vertices, style.margin);
    let width = max_x - min_x;
    let height = max_y - min_y;

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.6} {:.6} {:.6} {:.6}" width="{:.0}" height="{:.0}">"#,
        min_x,
        flip(max_y),
        width,
        height,
        width.max(1.0),
        height.max(1.0)
    )?;
    writeln!(out, "  <title>{}</title>", escape(&style.title))?;
    writeln!(
        out,
        r#"  <rect x="{:.6}" y="{:.6}" width="{:.6}" height="{:.6}" fill="white"/>"#,
        min_x, flip(max_y), width, height
    )?;

    if let Some(step) = style.grid_step {
        write_grid(out, step, (min_x, min_y, max_x, max_y), style.stroke_width * 0.25)?;
    }

    if vertices.len() >= 3 {
        let points: Vec<String> = vertices
            .iter()
            .map(|v| format!("{:.6},{:.6}", v.x(), flip(v.y())))
            .collect();
        writeln!(
            out,
            r#"  <polygon class="triangle" points="{}" fill="green" fill-opacity="{:.2}" stroke="green" stroke-width="{:.6}"/>"#,
            points.join(" "),
            style.fill_opacity,
            style.stroke_width
        )?;
    }

    for (index, circle) in circles.iter().enumerate() {
        let center = circle.center();
        writeln!(
            out,
            r#"  <circle class="circle" cx="{:.6}" cy="{:.6}" r="{:.6}" fill="none" stroke="blue" stroke-width="{:.6}" stroke-dasharray="{:.6} {:.6}"/>"#,
            center.x(),
            flip(center.y()),
            circle.radius(),
            style.stroke_width,
            style.stroke_width * 4.0,
            style.stroke_width * 2.0
        )?;
        writeln!(
            out,
            r#"  <circle class="center" cx="{:.6}" cy="{:.6}" r="{:.6}" fill="blue"><title>Circle Center ({}, {})</title></circle>"#,
            center.x(),
            flip(center.y()),
            style.point_radius,
            center.x(),
            center.y()
        )?;
        writeln!(
            out,
            r#"  <text x="{:.6}" y="{:.6}" font-size="{:.6}" fill="blue">{}</text>"#,
            center.x() + style.point_radius * 1.5,
            flip(center.y()) - style.point_radius * 1.5,
            style.point_radius * 5.0,
            label(index)
        )?;
    }

    for vertex in vertices {
        writeln!(
            out,
            r#"  <circle class="vertex" cx="{:.6}" cy="{:.6}" r="{:.6}" fill="red"><title>Valid Point ({:.2}, {:.2})</title></circle>"#,
            vertex.x(),
            flip(vertex.y()),
            style.point_radius,
            vertex.x(),
            vertex.y()
        )?;
    }

    writeln!(out, "</svg>")?;
    Ok(())
}

/// Light grid lines on multiples of `step`
fn write_grid<W: Write>(
    out: &mut W,
    step: f64,
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
    width: f64,
) -> Result<()> {
    if (max_x - min_x) / step > MAX_GRID_LINES || (max_y - min_y) / step > MAX_GRID_LINES {
        return Ok(());
    }
    writeln!(out, r##"  <g class="grid" stroke="#dddddd" stroke-width="{:.6}">"##, width)?;
    let mut x = (min_x / step).ceil() * step;
    while x <= max_x {
        writeln!(
            out,
            r#"    <line x1="{:.6}" y1="{:.6}" x2="{:.6}" y2="{:.6}"/>"#,
            x, flip(max_y), x, flip(min_y)
        )?;
        x += step;
    }
    let mut y = (min_y / step).ceil() * step;
    while y <= max_y {
        writeln!(
            out,
            r#"    <line x1="{:.6}" y1="{:.6}" x2="{:.6}" y2="{:.6}"/>"#,
            min_x, flip(y), max_x, flip(y)
        )?;
        y += step;
    }
    writeln!(out, "  </g>")?;
    Ok(())
}

fn bounds(circles: &[Circ2d], vertices: &[Pnt2d], margin: f64) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for circle in circles {
        let (x0, y0, x1, y1) = circle.bounds();
        min_x = min_x.min(x0);
        min_y = min_y.min(y0);
        max_x = max_x.max(x1);
        max_y = max_y.max(y1);
    }
    for v in vertices {
        min_x = min_x.min(v.x());
        min_y = min_y.min(v.y());
        max_x = max_x.max(v.x());
        max_y = max_y.max(v.y());
    }

    (min_x - margin, min_y - margin, max_x + margin, max_y + margin)
}

/// Model Y to document Y, without producing `-0`
fn flip(y: f64) -> f64 {
    0.0 - y
}

fn label(index: usize) -> String {
    match index {
        0..=25 => ((b'A' + index as u8) as char).to_string(),
        _ => format!("#{}", index),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
