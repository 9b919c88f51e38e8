use num_complex::Complex64;

use crate::fractal::iterations::{classify, iterate_group, iterate_point, GROUP_SIZE};
use crate::fractal::plane::PlaneMapper;
use crate::fractal::RenderConfig;
use crate::render::ImageBuffer;

/// Variante V1 : chaque ligne est découpée en groupes de 8 pixels calculés
/// ensemble par [`iterate_group`], puis les `width % 8` derniers pixels
/// passent par le noyau scalaire.
///
/// Mêmes mapping et récurrence que V0 : la sortie est identique octet par octet.
pub fn render_grouped(config: &RenderConfig, buffer: &mut ImageBuffer) {
    assert_eq!(buffer.width(), config.width, "Largeur du buffer invalide");
    assert_eq!(buffer.height(), config.height, "Hauteur du buffer invalide");

    let mapper = PlaneMapper::from_config(config);
    let start = config.start;
    let radius = config.escape_radius;
    let n = config.iteration_max;

    for (y, row) in buffer.rows_mut().enumerate() {
        let cy = [mapper.imag(y); GROUP_SIZE];

        let mut groups = row.chunks_exact_mut(GROUP_SIZE);
        for (g, group) in groups.by_ref().enumerate() {
            let x0 = g * GROUP_SIZE;
            let cx: [f64; GROUP_SIZE] = std::array::from_fn(|lane| mapper.real(x0 + lane));
            let counts = iterate_group(start, &cx, &cy, radius, n);
            for (px, &count) in group.iter_mut().zip(counts.iter()) {
                *px = classify(count, n);
            }
        }

        // Reste de la ligne (width % 8 pixels)
        let x0 = row_len_without_remainder(config.width);
        for (i, px) in groups.into_remainder().iter_mut().enumerate() {
            let c = Complex64::new(mapper.real(x0 + i), cy[0]);
            *px = classify(iterate_point(start, c, radius, n), n);
        }
    }
}

#[inline]
fn row_len_without_remainder(width: u32) -> usize {
    let width = width as usize;
    width - width % GROUP_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::scalar::render_scalar;

    fn render_both(config: &RenderConfig) -> (ImageBuffer, ImageBuffer) {
        let mut scalar = ImageBuffer::for_config(config).unwrap();
        let mut grouped = ImageBuffer::for_config(config).unwrap();
        render_scalar(config, &mut scalar);
        render_grouped(config, &mut grouped);
        (scalar, grouped)
    }

    #[test]
    fn test_matches_scalar_multiple_of_eight() {
        let config = RenderConfig::with_size(64, 48);
        let (scalar, grouped) = render_both(&config);
        assert_eq!(scalar, grouped);
    }

    #[test]
    fn test_matches_scalar_with_remainder() {
        // 61 = 7 groupes + 5 pixels de reste
        let mut config = RenderConfig::with_size(61, 33);
        config.resolution = 3.3;
        config.start = Complex64::new(0.05, -0.1);
        let (scalar, grouped) = render_both(&config);
        assert_eq!(scalar, grouped);
    }

    #[test]
    fn test_narrower_than_one_group() {
        for width in 1..GROUP_SIZE as u32 {
            let config = RenderConfig::with_size(width, 3);
            let (scalar, grouped) = render_both(&config);
            assert_eq!(scalar, grouped, "largeur {width}");
        }
    }

    #[test]
    fn test_single_pixel() {
        let config = RenderConfig::with_size(1, 1);
        let (scalar, grouped) = render_both(&config);
        assert_eq!(grouped.as_slice().len(), 1);
        assert_eq!(scalar, grouped);
    }

    #[test]
    fn test_remainder_length() {
        assert_eq!(row_len_without_remainder(61), 56);
        assert_eq!(row_len_without_remainder(64), 64);
        assert_eq!(row_len_without_remainder(5), 0);
    }
}
