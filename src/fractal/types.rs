use num_complex::Complex64;
use thiserror::Error;

/// Point du plan complexe associé à un pixel.
pub type PlanePoint = Complex64;

/// Largeur par défaut de l'image (pixels).
pub const DEFAULT_WIDTH: u32 = 1000;
/// Hauteur par défaut de l'image (pixels).
pub const DEFAULT_HEIGHT: u32 = 1000;
/// Résolution par défaut : 4.0 donne le cadrage classique [-2, 2].
pub const DEFAULT_RESOLUTION: f64 = 4.0;
pub const DEFAULT_ITERATION_MAX: u32 = 255;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Variante de calcul sélectionnée pour le rendu.
///
/// Les identifiants numériques correspondent à l'option `-V` :
/// 0=Scalar (référence), 1=Grouped (groupes de 8 pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Scalar,
    Grouped,
}

impl Variant {
    /// Convertit un identifiant numérique (`-V0`, `-V1`) en enum.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Variant::Scalar),
            1 => Some(Variant::Grouped),
            _ => None,
        }
    }

    pub fn id(self) -> u32 {
        match self {
            Variant::Scalar => 0,
            Variant::Grouped => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Scalar => "Scalar",
            Variant::Grouped => "Grouped",
        }
    }

    /// Accepte l'identifiant numérique ou le nom (`scalar`, `grouped`, `v0`, `v1`...).
    pub fn from_cli_name(value: &str) -> Result<Self, ConfigurationError> {
        let normalized = value.trim().to_lowercase();
        let parsed = match normalized.as_str() {
            "" | "scalar" | "v0" => Some(Variant::Scalar),
            "grouped" | "simd" | "v1" => Some(Variant::Grouped),
            other => other.parse::<u32>().ok().and_then(Variant::from_id),
        };
        parsed.ok_or_else(|| ConfigurationError::UnknownVariant(value.to_string()))
    }

    pub fn all() -> &'static [Variant] {
        &[Variant::Scalar, Variant::Grouped]
    }
}

/// Erreurs de configuration, détectées avant tout calcul.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("la largeur de l'image doit être strictement positive")]
    ZeroWidth,
    #[error("la hauteur de l'image doit être strictement positive")]
    ZeroHeight,
    #[error("le nombre maximal d'itérations doit être strictement positif")]
    ZeroIterations,
    #[error("le nombre de répétitions doit être au moins 1")]
    ZeroRepeat,
    #[error("résolution invalide: {0} (attendu un réel fini strictement positif)")]
    InvalidResolution(f64),
    #[error("rayon d'échappement invalide: {0} (attendu un réel fini strictement positif)")]
    InvalidEscapeRadius(f64),
    #[error("la valeur de départ doit avoir des composantes finies")]
    NonFiniteStart,
    #[error("l'implémentation '{0}' n'existe pas (options: 0/scalar, 1/grouped)")]
    UnknownVariant(String),
    #[error("image trop grande: {width}x{height} pixels")]
    ImageTooLarge { width: u32, height: u32 },
}

/// Paramètres d'un rendu, immuables une fois construits.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Valeur initiale z0 de la récurrence (0+0i pour Mandelbrot).
    pub start: Complex64,
    /// Étendue du plan complexe couverte par l'image.
    pub resolution: f64,
    pub iteration_max: u32,
    pub escape_radius: f64,
    pub variant: Variant,
    /// Nombre de passes (benchmark uniquement, n'influe pas sur le résultat).
    pub repeat_count: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: Complex64::new(0.0, 0.0),
            resolution: DEFAULT_RESOLUTION,
            iteration_max: DEFAULT_ITERATION_MAX,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            variant: Variant::Scalar,
            repeat_count: 1,
        }
    }
}

impl RenderConfig {
    /// Configuration par défaut avec des dimensions données.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Vérifie la configuration avant le rendu.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 {
            return Err(ConfigurationError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigurationError::ZeroHeight);
        }
        if self.iteration_max == 0 {
            return Err(ConfigurationError::ZeroIterations);
        }
        if self.repeat_count == 0 {
            return Err(ConfigurationError::ZeroRepeat);
        }
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(ConfigurationError::InvalidResolution(self.resolution));
        }
        // r^2 doit rester fini pour que le test d'échappement ait un sens.
        if !self.escape_radius_sqr().is_finite() || self.escape_radius <= 0.0 {
            return Err(ConfigurationError::InvalidEscapeRadius(self.escape_radius));
        }
        if !self.start.re.is_finite() || !self.start.im.is_finite() {
            return Err(ConfigurationError::NonFiniteStart);
        }
        self.pixel_count()?;
        Ok(())
    }

    /// Nombre de pixels `width * height`, sans débordement.
    pub fn pixel_count(&self) -> Result<usize, ConfigurationError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(ConfigurationError::ImageTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Carré du rayon d'échappement, comparé à |z|^2.
    pub fn escape_radius_sqr(&self) -> f64 {
        self.escape_radius * self.escape_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 1000);
        assert_eq!(config.height, 1000);
        assert_eq!(config.iteration_max, 255);
        assert_eq!(config.resolution, 4.0);
        assert_eq!(config.variant, Variant::Scalar);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = RenderConfig::with_size(0, 10);
        assert_eq!(config.validate(), Err(ConfigurationError::ZeroWidth));

        config = RenderConfig::with_size(10, 0);
        assert_eq!(config.validate(), Err(ConfigurationError::ZeroHeight));

        config = RenderConfig::with_size(10, 10);
        config.iteration_max = 0;
        assert_eq!(config.validate(), Err(ConfigurationError::ZeroIterations));

        config.iteration_max = 10;
        config.repeat_count = 0;
        assert_eq!(config.validate(), Err(ConfigurationError::ZeroRepeat));
    }

    #[test]
    fn test_validate_rejects_bad_floats() {
        let mut config = RenderConfig::with_size(4, 4);
        config.resolution = -1.0;
        assert!(matches!(config.validate(), Err(ConfigurationError::InvalidResolution(_))));

        config.resolution = 4.0;
        config.escape_radius = 1e200;
        assert!(matches!(config.validate(), Err(ConfigurationError::InvalidEscapeRadius(_))));

        config.escape_radius = 2.0;
        assert_eq!(config.escape_radius_sqr(), 4.0);
        config.start = Complex64::new(f64::NAN, 0.0);
        assert_eq!(config.validate(), Err(ConfigurationError::NonFiniteStart));
    }

    #[test]
    fn test_variant_cli_names() {
        assert_eq!(Variant::from_cli_name("0"), Ok(Variant::Scalar));
        assert_eq!(Variant::from_cli_name("1"), Ok(Variant::Grouped));
        assert_eq!(Variant::from_cli_name("Grouped"), Ok(Variant::Grouped));
        assert_eq!(Variant::from_cli_name(" scalar "), Ok(Variant::Scalar));
        assert_eq!(
            Variant::from_cli_name("2"),
            Err(ConfigurationError::UnknownVariant("2".to_string()))
        );
    }

    #[test]
    fn test_variant_id_roundtrip() {
        for variant in Variant::all() {
            assert_eq!(Variant::from_id(variant.id()), Some(*variant));
        }
    }
}
