use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use log::info;
use num_complex::Complex64;

use mandelbrot_bench::fractal::types::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_ITERATION_MAX, DEFAULT_RESOLUTION,
};
use mandelbrot_bench::io::save_image;
use mandelbrot_bench::{render_timed, RenderConfig, Variant};

/// Rendu binaire de l'ensemble de Mandelbrot, pour comparer les noyaux.
///
/// Les valeurs peuvent être collées à l'option, comme dans la version C :
///   mandelbrot-bench -V1 -B10 -d1920,1080 -n500 -oimage.ppm
#[derive(Parser, Debug)]
#[command(
    name = "mandelbrot-bench",
    about = "Ensemble de Mandelbrot en noir et blanc : noyau scalaire (V0) ou groupé par 8 (V1)"
)]
struct Cli {
    /// Implémentation à utiliser (0=scalar, 1=grouped)
    #[arg(
        short = 'V',
        long = "variant",
        num_args = 0..=1,
        default_value = "0",
        default_missing_value = "0",
        value_parser = Variant::from_cli_name
    )]
    variant: Variant,

    /// Nombre de répétitions du calcul ; active l'affichage du temps d'exécution
    #[arg(short = 'B', long = "bench", num_args = 0..=1, default_missing_value = "1")]
    bench: Option<u32>,

    /// Valeur de départ z0 : <réel>,<imaginaire>
    #[arg(
        short = 's',
        long = "start",
        value_name = "RE,IM",
        default_value = "0,0",
        allow_hyphen_values = true,
        value_parser = parse_start
    )]
    start: Complex64,

    /// Largeur et hauteur de l'image : <largeur>,<hauteur>
    #[arg(short = 'd', long = "dimensions", value_name = "W,H", default_value = "1000,1000", value_parser = parse_pair::<u32>)]
    dimensions: (u32, u32),

    /// Nombre maximal d'itérations
    #[arg(short = 'n', long = "iterations", default_value_t = DEFAULT_ITERATION_MAX)]
    iterations: u32,

    /// Résolution (étendue du plan complexe couverte par l'image)
    #[arg(short = 'r', long = "resolution", default_value_t = DEFAULT_RESOLUTION)]
    resolution: f64,

    /// Rayon d'échappement
    #[arg(short = 'e', long = "escape-radius", default_value_t = DEFAULT_ESCAPE_RADIUS)]
    escape_radius: f64,

    /// Fichier de sortie (.ppm texte P3, ou .png)
    #[arg(short = 'o', long = "output", value_name = "FICHIER", default_value = "mandelbrot.ppm")]
    output: PathBuf,
}

impl Cli {
    fn to_config(&self) -> RenderConfig {
        let (width, height) = self.dimensions;
        RenderConfig {
            width,
            height,
            start: self.start,
            resolution: self.resolution,
            iteration_max: self.iterations,
            escape_radius: self.escape_radius,
            variant: self.variant,
            repeat_count: self.bench.unwrap_or(1),
        }
    }
}

/// Découpe `a,b` en deux valeurs.
fn parse_pair<T: FromStr>(value: &str) -> Result<(T, T), String> {
    let (a, b) = value
        .split_once(',')
        .ok_or_else(|| format!("Input Missing: '{value}' (attendu <a>,<b>)"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<T>()
            .map_err(|_| format!("Input Missing: valeur invalide '{s}'"))
    };
    Ok((parse(a)?, parse(b)?))
}

fn parse_start(value: &str) -> Result<Complex64, String> {
    let (re, im) = parse_pair::<f64>(value)?;
    Ok(Complex64::new(re, im))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.to_config();

    info!("V{} is used ({})", config.variant.id(), config.variant.name());
    info!("Program will be run {} times", config.repeat_count);
    info!("Dimensions: {}x{}", config.width, config.height);
    info!("Start: real {} imaginary {} * I", config.start.re, config.start.im);
    info!("Resolution: {}, iterations: {}", config.resolution, config.iteration_max);

    let (buffer, elapsed) = match render_timed(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Configuration invalide: {e}");
            std::process::exit(1);
        }
    };

    if cli.bench.is_some() {
        println!("Runtime: {:.6} seconds", elapsed.as_secs_f64());
    }

    if let Err(e) = save_image(&buffer, &cli.output) {
        eprintln!("Erreur lors de l'écriture de '{}': {e}", cli.output.display());
        std::process::exit(1);
    }
    info!("Image écrite dans {}", cli.output.display());
}
