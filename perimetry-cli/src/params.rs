// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use clap::Args;

use perimetry_core::config::RatioConfig;
use perimetry_core::cv::EdgeMode;

/// Shape and raster settings shared by every subcommand
#[derive(Debug, Args)]
pub struct ShapeParams {
    #[arg(
        short = 'c',
        long,
        help = "JSON configuration file. Command line settings take precedence."
    )]
    pub config: Option<String>,

    #[arg(long, help = "Number of Fourier coefficients per shape (default 6).")]
    pub order: Option<usize>,

    #[arg(long, help = "Angular samples per shape (default 200).")]
    pub points: Option<usize>,

    #[arg(
        long,
        help = "Radius lift coefficient. Higher values give rounder shapes (default 1.5)."
    )]
    pub spikeyness: Option<f64>,

    #[arg(long, help = "Side length of the square pixel grid (default 128).")]
    pub pixels: Option<usize>,

    #[arg(short = 's', long, help = "Random seed. Drawn at random if not provided.")]
    pub seed: Option<u64>,

    #[arg(
        long,
        help = "Treat cells past the grid edge as empty instead of wrapping around."
    )]
    pub bounded: bool,
}

impl ShapeParams {
    /// Merge the configuration file (or defaults) with command line settings
    ///
    /// Prints a tagged error and exits if the configuration cannot be read
    /// or the merged settings are invalid.
    pub fn resolve(&self, tag: &str) -> RatioConfig {
        let mut config = match &self.config {
            Some(path) => RatioConfig::open(path).unwrap_or_else(|err| {
                eprintln!("[perimetry::{}] ERROR: {}", tag, err);
                std::process::exit(1);
            }),
            None => RatioConfig::default(),
        };

        if let Some(order) = self.order {
            config.fourier_series_order = order;
        }

        if let Some(points) = self.points {
            config.points_per_shape = points;
        }

        if let Some(spikeyness) = self.spikeyness {
            config.spikeyness_coefficient = spikeyness;
        }

        if let Some(pixels) = self.pixels {
            config.pixel_dimension = pixels;
        }

        if self.seed.is_some() {
            config.seed = self.seed;
        }

        if self.bounded {
            config.edge_mode = EdgeMode::Bounded;
        }

        config
    }
}

/// Check merged settings and exit with a tagged message if they are invalid
pub fn validate_or_exit(config: &RatioConfig, tag: &str) {
    if let Err(err) = config.validate() {
        eprintln!("[perimetry::{}] ERROR: {}", tag, err);
        std::process::exit(1);
    }
}

/// Seed from the configuration or a freshly drawn one
pub fn seed_or_random(config: &RatioConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random::<u64>)
}
