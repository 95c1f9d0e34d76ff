use std::ops::Add;

use image::Rgb;
use serde::Deserialize;

fn opaque() -> f64 {
    1.0
}

/// RGB color with an intensity scaling channel `a`.
///
/// Channels are linear and unbounded above; they are only squeezed into
/// `[0, 255]` when converted to an 8-bit pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    #[inline]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Scale every channel by `factor`, clamping each result below at zero
    /// so no channel ever goes negative.
    ///
    /// Complementary factors blend two colors: `x.with_intensity(1.0 - t) +
    /// y.with_intensity(t)`.
    #[inline]
    pub fn with_intensity(&self, factor: f64) -> Color {
        Color {
            r: (self.r * factor).max(0.0),
            g: (self.g * factor).max(0.0),
            b: (self.b * factor).max(0.0),
            a: (self.a * factor).max(0.0),
        }
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, other: Color) -> Self::Output {
        Color {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
            a: self.a + other.a,
        }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        let channel = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;

        Rgb([channel(color.r), channel(color.g), channel(color.b)])
    }
}

#[test]
fn intensity_scales_every_channel() {
    let color = Color::new(0.5, 1.0, 0.25, 1.0);

    assert_eq!(Color::new(0.25, 0.5, 0.125, 0.5), color.with_intensity(0.5));
}

#[test]
fn negative_intensity_clamps_to_zero() {
    let color = Color::new(0.5, 1.0, 0.25, 1.0);

    assert_eq!(Color::new(0.0, 0.0, 0.0, 0.0), color.with_intensity(-2.0));
}

#[test]
fn add_is_channel_wise() {
    let sum = Color::new(0.1, 0.2, 0.3, 0.5) + Color::new(0.2, 0.3, 0.4, 0.5);

    assert_eq!(Color::new(0.1 + 0.2, 0.2 + 0.3, 0.3 + 0.4, 1.0), sum);
}

#[test]
fn pixel_conversion_clamps_overbright_channels() {
    let color = Color::new(2.0, 0.5, -1.0, 1.0);

    assert_eq!(Rgb([255, 127, 0]), Rgb::from(color));
}
