use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rayon::prelude::*;

use crate::render::ImageBuffer;

/// Écrit l'image au format texte PPM (`P3`), niveau de gris répété sur les
/// trois canaux : `v v v ` pour chaque pixel, dans l'ordre des lignes.
///
/// Le formatage des lignes est parallélisé, l'écriture reste séquentielle.
pub fn write_ppm<W: Write>(buffer: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "P3\n{} {}\n255\n", buffer.width(), buffer.height())?;

    let rows: Vec<String> = (0..buffer.height() as usize)
        .into_par_iter()
        .map(|y| -> Result<String, std::fmt::Error> {
            let row = buffer.row(y);
            let mut line = String::with_capacity(row.len() * 12);
            for &v in row {
                write!(line, "{v} {v} {v} ")?;
            }
            Ok(line)
        })
        .collect::<Result<_, _>>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    for line in &rows {
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

/// Enregistre l'image PPM dans `output`.
pub fn save_ppm(buffer: &ImageBuffer, output: &Path) -> std::io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    write_ppm(buffer, &mut writer)
}
