use std::path::Path;

use image::{ImageError, RgbImage};
use rayon::prelude::*;

use crate::render::ImageBuffer;

/// Convertit l'image binaire en RGB (même valeur sur les trois canaux).
pub fn to_rgb_image(buffer: &ImageBuffer) -> Result<RgbImage, ImageError> {
    let rgb: Vec<u8> = buffer
        .as_slice()
        .par_iter()
        .flat_map_iter(|&v| [v, v, v])
        .collect();

    RgbImage::from_raw(buffer.width(), buffer.height(), rgb).ok_or_else(|| {
        ImageError::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Impossible de créer l'image depuis le buffer",
        ))
    })
}

/// Enregistre l'image au format PNG.
pub fn save_png(buffer: &ImageBuffer, output: &Path) -> Result<(), ImageError> {
    to_rgb_image(buffer)?.save(output)
}
