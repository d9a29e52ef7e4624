// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::io::Write;
use std::path::Path;

use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use perimetry_core::constant;
use perimetry_core::im::OccupancyGrid;
use perimetry_core::io;
use perimetry_core::mp;
use perimetry_core::ut;

use crate::params::{ShapeParams, seed_or_random, validate_or_exit};

#[derive(Debug, Args)]
#[command(about = "Measure continuous and discrete boundaries of a single random shape.")]
pub struct ShapeArgs {
    #[command(flatten)]
    pub params: ShapeParams,

    #[arg(short = 'g', long, help = "Write the occupancy grid to a .npy file.")]
    pub grid: Option<String>,

    #[arg(short = 'b', long, help = "Write the order-0 boundary mask to a .npy file.")]
    pub boundary: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,
}

pub fn measure_shape(args: &ShapeArgs) {
    let config = args.params.resolve("shape");
    validate_or_exit(&config, "shape");

    for path in [&args.grid, &args.boundary].into_iter().flatten() {
        if !path.to_lowercase().ends_with(".npy") {
            eprintln!(
                "[perimetry::shape] ERROR: Invalid output path {}. Arrays must be written to a .npy file.",
                path
            );
            std::process::exit(1);
        }
    }

    let seed = seed_or_random(&config);
    let mut rng = StdRng::seed_from_u64(seed);

    ut::track::progress_log(&format!("Measuring shape (seed {}).", seed), args.verbose);

    let trial = mp::run_trial(&mut rng, &config).unwrap_or_else(|err| {
        eprintln!("[perimetry::shape] ERROR: {}", err);
        std::process::exit(1);
    });

    let mut stdout = std::io::stdout();

    let rows: Vec<String> = constant::TRIAL_MEASUREMENT_NAMES
        .iter()
        .zip(trial.measurement.to_row())
        .map(|(name, value)| format!("{}\t{}\n", name, value))
        .collect();

    for row in rows.iter() {
        if stdout.write_all(row.as_bytes()).is_err() {
            std::process::exit(1);
        }
    }

    if let Some(path) = &args.grid {
        write_array(path, &trial.grid, args.verbose);
    }

    if let Some(path) = &args.boundary {
        write_array(path, &trial.boundary, args.verbose);
    }
}

fn write_array(path: &str, grid: &OccupancyGrid, verbose: bool) {
    io::write_grid_numpy(Path::new(path), grid).unwrap_or_else(|err| {
        eprintln!("[perimetry::shape] ERROR: {}", err);
        std::process::exit(1);
    });

    ut::track::progress_log(&format!("Wrote {}.", path), verbose);
}
