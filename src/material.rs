//! Surface materials and the 16-bit color arithmetic used while shading.

use image::Rgba;

pub type Colour = Rgba<u16>;

pub const CHANNEL_MAX: f64 = u16::MAX as f64;

#[inline]
pub fn col(r: u16, g: u16, b: u16) -> Colour {
    Rgba([r, g, b, u16::MAX])
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub colour: Colour,
    /// Fraction of the final colour taken from the mirror reflection, in `[0, 1]`.
    pub reflectivity: f64,
    /// Phong exponent. `None` disables the specular term.
    pub specular: Option<f64>,
}

impl Material {
    pub fn new(colour: Colour, reflectivity: f64, specular: Option<f64>) -> Self {
        Self {
            colour,
            reflectivity,
            specular,
        }
    }

    /// Matte, non-reflective surface.
    pub fn matte(colour: Colour) -> Self {
        Self::new(colour, 0.0, None)
    }

    /// Accepts the legacy encoding where an exponent of `-1` means
    /// "no specular highlight".
    pub fn from_raw_specular(colour: Colour, reflectivity: f64, specular: f64) -> Self {
        let specular = if specular == -1.0 { None } else { Some(specular) };
        Self::new(colour, reflectivity, specular)
    }
}

#[inline]
fn constrain(c: f64) -> u16 {
    // `as` saturates, so negative inputs land on 0.
    c.min(CHANNEL_MAX) as u16
}

/// Multiplies the RGB channels by `s`, clamping at the channel maximum.
/// The result is always opaque.
pub fn scale_colour(c: Colour, s: f64) -> Colour {
    Rgba([
        constrain(c[0] as f64 * s),
        constrain(c[1] as f64 * s),
        constrain(c[2] as f64 * s),
        u16::MAX,
    ])
}

/// `local * (1 - r) + reflected * r` per channel, each channel saturating.
pub fn blend(local: Colour, reflected: Colour, reflectivity: f64) -> Colour {
    let a = scale_colour(local, 1.0 - reflectivity);
    let b = scale_colour(reflected, reflectivity);
    Rgba([
        a[0].saturating_add(b[0]),
        a[1].saturating_add(b[1]),
        a[2].saturating_add(b[2]),
        u16::MAX,
    ])
}
