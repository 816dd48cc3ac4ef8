//! Geometric primitives package.
//!
//! Plain 2D value types shared by every algorithm in the crate. All of them
//! are `Copy` and immutable once constructed.

mod pnt2d;
mod vec2d;
mod circ2d;

pub use pnt2d::Pnt2d;
pub use vec2d::Vec2d;
pub use circ2d::Circ2d;
