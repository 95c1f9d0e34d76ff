use serde::Deserialize;

use crate::color::Color;

fn matte() -> f64 {
    1.0
}

/// Surface appearance: base color, Phong shininess, and how mirror-like the
/// surface is.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Material {
    pub color: Color,

    /// Phong specular exponent; higher values tighten the highlight.
    #[serde(default = "matte")]
    pub specular_exponent: f64,

    /// Fraction of the final color taken from the reflected ray, in `[0, 1]`.
    /// The range is a caller precondition and is not validated here.
    #[serde(default)]
    pub reflective: f64,
}

impl Material {
    pub fn new(color: Color, specular_exponent: f64, reflective: f64) -> Self {
        Self {
            color,
            specular_exponent,
            reflective,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::BLACK, matte(), 0.0)
    }
}
