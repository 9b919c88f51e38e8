use num_complex::Complex64;

use crate::fractal::{PlanePoint, RenderConfig};

/// Coin réel du cadre (avec la résolution 4.0, l'axe réel couvre [-2.5, 1.5)).
pub const MIN_REAL: f64 = -2.5;
/// Coin imaginaire du cadre.
pub const MIN_IMAG: f64 = -2.0;

/// Conversion pixel -> plan complexe.
///
/// `real = MIN_REAL + x * (resolution / width)`
/// `imag = MIN_IMAG + y * (resolution / height)`
///
/// Les tailles de pixel sont calculées une fois par rendu et partagées par
/// les deux variantes, ce qui garantit des points identiques au bit près.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneMapper {
    pub pixel_width: f64,
    pub pixel_height: f64,
}

impl PlaneMapper {
    pub fn new(width: u32, height: u32, resolution: f64) -> Self {
        Self {
            pixel_width: resolution / width as f64,
            pixel_height: resolution / height as f64,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height, config.resolution)
    }

    /// Partie réelle de la colonne `x`.
    #[inline]
    pub fn real(&self, x: usize) -> f64 {
        MIN_REAL + x as f64 * self.pixel_width
    }

    /// Partie imaginaire de la ligne `y`.
    ///
    /// Ramenée à 0 quand elle est à moins d'un demi-pixel de l'axe réel,
    /// pour que la ligne de l'axe soit rendue de façon symétrique.
    #[inline]
    pub fn imag(&self, y: usize) -> f64 {
        let imag = MIN_IMAG + y as f64 * self.pixel_height;
        if imag.abs() < self.pixel_height / 2.0 {
            0.0
        } else {
            imag
        }
    }

    #[inline]
    pub fn map(&self, x: usize, y: usize) -> PlanePoint {
        Complex64::new(self.real(x), self.imag(y))
    }
}

/// Version fonctionnelle de [`PlaneMapper::map`].
pub fn map_pixel(x: usize, y: usize, width: u32, height: u32, resolution: f64) -> PlanePoint {
    PlaneMapper::new(width, height, resolution).map(x, y)
}
