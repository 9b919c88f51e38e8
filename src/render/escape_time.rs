use std::time::{Duration, Instant};

use log::debug;

use crate::fractal::{ConfigurationError, RenderConfig, Variant};
use crate::render::grouped::render_grouped;
use crate::render::scalar::render_scalar;
use crate::render::ImageBuffer;

impl Variant {
    /// Exécute une passe complète de cette variante dans `buffer`.
    pub fn render_pass(self, config: &RenderConfig, buffer: &mut ImageBuffer) {
        match self {
            Variant::Scalar => render_scalar(config, buffer),
            Variant::Grouped => render_grouped(config, buffer),
        }
    }
}

/// Calcule l'image binaire pour `config`.
///
/// La variante choisie est exécutée `repeat_count` fois sur le même buffer ;
/// seule la dernière passe compte, les précédentes servent au benchmark.
pub fn render(config: &RenderConfig) -> Result<ImageBuffer, ConfigurationError> {
    render_timed(config).map(|(buffer, _)| buffer)
}

/// Comme [`render`], en mesurant le temps écoulé sur l'ensemble des passes
/// (allocation du buffer exclue).
pub fn render_timed(config: &RenderConfig) -> Result<(ImageBuffer, Duration), ConfigurationError> {
    config.validate()?;
    let mut buffer = ImageBuffer::for_config(config)?;

    let begin = Instant::now();
    render_into(config, &mut buffer);
    Ok((buffer, begin.elapsed()))
}

/// Remplit un buffer déjà alloué (pas de validation).
///
/// Le buffer doit avoir les dimensions de `config` (voir
/// [`ImageBuffer::for_config`]) ; sinon la passe panique avant toute écriture.
pub fn render_into(config: &RenderConfig, buffer: &mut ImageBuffer) {
    for pass in 0..config.repeat_count {
        debug!(
            "passe {}/{} ({}, {}x{})",
            pass + 1,
            config.repeat_count,
            config.variant.name(),
            config.width,
            config.height
        );
        config.variant.render_pass(config, buffer);
    }
}
