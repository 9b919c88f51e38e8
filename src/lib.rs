//! Rendu binaire (dans l'ensemble / échappé) de l'ensemble de Mandelbrot,
//! avec deux noyaux équivalents à comparer en temps d'exécution :
//! V0 scalaire et V1 groupé par 8 pixels.

pub mod fractal;
pub mod io;
pub mod render;

pub use fractal::{ConfigurationError, RenderConfig, Variant};
pub use render::{render, render_timed, ImageBuffer};
