//! Configuration of the three input circles
//!
//! A configuration file is TOML with exactly three `[[circles]]` tables:
//!
//! ```toml
//! [[circles]]
//! x = 0.0
//! y = 0.0
//! radius = 100.0
//! ```

use crate::gp::Circ2d;
use crate::{LensError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// One circle as written in a configuration file or on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl CircleSpec {
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// Validate and convert to a circle.
    pub fn to_circle(&self) -> Result<Circ2d> {
        Circ2d::from_coords(self.x, self.y, self.radius)
    }
}

impl FromStr for CircleSpec {
    type Err = LensError;

    /// Parses `X,Y,R`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, r] = parts.as_slice() else {
            return Err(LensError::InvalidConfiguration(format!(
                "expected circle as X,Y,R, got '{}'",
                s
            )));
        };
        let number = |field: &str, value: &str| {
            value.parse::<f64>().map_err(|e| {
                LensError::InvalidConfiguration(format!("invalid {} '{}': {}", field, value, e))
            })
        };
        Ok(CircleSpec::new(number("x", *x)?, number("y", *y)?, number("radius", *r)?))
    }
}

/// The three circles whose common region is measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensConfig {
    pub circles: Vec<CircleSpec>,
}

impl LensConfig {
    pub fn new(a: CircleSpec, b: CircleSpec, c: CircleSpec) -> Self {
        Self { circles: vec![a, b, c] }
    }

    /// The demonstration triple: three radius-100 circles centered at
    /// (0, 0), (70, 0) and (0, 70).
    pub fn example() -> Self {
        Self::new(
            CircleSpec::new(0.0, 0.0, 100.0),
            CircleSpec::new(70.0, 0.0, 100.0),
            CircleSpec::new(0.0, 70.0, 100.0),
        )
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LensConfig = toml::from_str(text)?;
        config.circles()?;
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate and convert to exactly three circles.
    pub fn circles(&self) -> Result<[Circ2d; 3]> {
        let [a, b, c] = self.circles.as_slice() else {
            return Err(LensError::InvalidConfiguration(format!(
                "expected exactly 3 circles, got {}",
                self.circles.len()
            )));
        };
        Ok([a.to_circle()?, b.to_circle()?, c.to_circle()?])
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        Self::example()
    }
}
