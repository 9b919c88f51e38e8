use crate::fractal::{ConfigurationError, RenderConfig};

/// Image binaire : un octet par pixel, lignes de haut en bas.
///
/// Indexation `(ligne, colonne) -> ligne * width + colonne`, partagée par
/// les variantes de rendu et les sérialiseurs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigurationError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(ConfigurationError::ImageTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            pixels: vec![0u8; len],
        })
    }

    pub fn for_config(config: &RenderConfig) -> Result<Self, ConfigurationError> {
        Self::new(config.width, config.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.width as usize + column
    }

    /// Pixel à `(ligne, colonne)`, `None` hors de l'image.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.height as usize || column >= self.width as usize {
            return None;
        }
        self.pixels.get(self.index(row, column)).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let start = self.index(row, 0);
        &self.pixels[start..start + self.width as usize]
    }

    /// Lignes mutables, disjointes : chaque écriture reste dans sa ligne.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.pixels.chunks_exact_mut(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_indexing() {
        let mut buffer = ImageBuffer::new(3, 2).unwrap();
        for (y, row) in buffer.rows_mut().enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = (y * 10 + x) as u8;
            }
        }
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(buffer.get(1, 2), Some(12));
        assert_eq!(buffer.row(1), &[10, 11, 12]);
        assert_eq!(buffer.get(2, 0), None);
        assert_eq!(buffer.get(0, 3), None);
    }

    #[test]
    fn test_single_pixel_buffer() {
        let mut buffer = ImageBuffer::new(1, 1).unwrap();
        assert_eq!(buffer.rows_mut().count(), 1);
        assert_eq!(buffer.as_slice().len(), 1);
    }
}
