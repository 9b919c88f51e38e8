pub mod ppm;
pub mod png;

use std::path::Path;

use thiserror::Error;

use crate::render::ImageBuffer;

/// Erreurs d'écriture de l'image.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("écriture du fichier impossible: {0}")]
    Io(#[from] std::io::Error),
    #[error("encodage de l'image impossible: {0}")]
    Image(#[from] image::ImageError),
}

/// Enregistre l'image : PNG si l'extension est `.png`, sinon texte P3.
pub fn save_image(buffer: &ImageBuffer, output: &Path) -> Result<(), OutputError> {
    let is_png = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if is_png {
        png::save_png(buffer, output)?;
    } else {
        ppm::save_ppm(buffer, output)?;
    }
    Ok(())
}
