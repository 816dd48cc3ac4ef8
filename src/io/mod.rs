//! Export of lens diagrams
//!
//! Rendering never feeds back into the computation; these writers only
//! consume circles and vertices that the locator already produced.

mod svg;
mod dxf;

pub use svg::{render_svg, write_svg, SvgStyle};
pub use dxf::write_dxf;
