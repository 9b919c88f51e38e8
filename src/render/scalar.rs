use num_complex::Complex64;

use crate::fractal::iterations::{classify, iterate_point};
use crate::fractal::plane::PlaneMapper;
use crate::fractal::RenderConfig;
use crate::render::ImageBuffer;

/// Variante V0 : un appel au noyau par pixel, ligne par ligne.
///
/// Référence de correction pour les autres variantes.
pub fn render_scalar(config: &RenderConfig, buffer: &mut ImageBuffer) {
    assert_eq!(buffer.width(), config.width, "Largeur du buffer invalide");
    assert_eq!(buffer.height(), config.height, "Hauteur du buffer invalide");

    let mapper = PlaneMapper::from_config(config);

    for (y, row) in buffer.rows_mut().enumerate() {
        let cy = mapper.imag(y);
        for (x, px) in row.iter_mut().enumerate() {
            let c = Complex64::new(mapper.real(x), cy);
            let iteration = iterate_point(config.start, c, config.escape_radius, config.iteration_max);
            *px = classify(iteration, config.iteration_max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::iterations::{BOUNDED, ESCAPED};

    #[test]
    fn test_small_frame_corners_and_center() {
        let mut config = RenderConfig::with_size(4, 4);
        config.iteration_max = 50;
        let mut buffer = ImageBuffer::for_config(&config).unwrap();
        render_scalar(&config, &mut buffer);

        // Coins : loin de l'origine
        assert_eq!(buffer.get(0, 0), Some(ESCAPED));
        assert_eq!(buffer.get(0, 3), Some(ESCAPED));
        assert_eq!(buffer.get(3, 0), Some(ESCAPED));
        assert_eq!(buffer.get(3, 3), Some(ESCAPED));
        // (2, 2) correspond à c = -0.5 + 0i
        assert_eq!(buffer.get(2, 2), Some(BOUNDED));
    }

    #[test]
    fn test_only_binary_values() {
        let config = RenderConfig::with_size(37, 21);
        let mut buffer = ImageBuffer::for_config(&config).unwrap();
        render_scalar(&config, &mut buffer);
        assert!(buffer.as_slice().iter().all(|&v| v == BOUNDED || v == ESCAPED));
        assert!(buffer.as_slice().contains(&BOUNDED));
        assert!(buffer.as_slice().contains(&ESCAPED));
    }
}
