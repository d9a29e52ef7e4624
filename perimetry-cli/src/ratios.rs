// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use perimetry_core::constant;
use perimetry_core::io;
use perimetry_core::mp::{self, ConversionRatios};
use perimetry_core::ut;

use crate::params::{ShapeParams, seed_or_random, validate_or_exit};

#[derive(Debug, Args)]
#[command(about = "Compare continuous and discrete shape indices across random shapes.")]
pub struct RatiosArgs {
    #[command(flatten)]
    pub params: ShapeParams,

    #[arg(short = 'n', long, help = "Number of random shapes (default 50).")]
    pub samples: Option<usize>,

    #[arg(
        short = 'o',
        long,
        help = "Output file for per-shape measurements (.csv, .txt, .tsv, .pq)."
    )]
    pub output: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,

    #[arg(short = 't', long, help = "Number of threads.")]
    pub threads: Option<usize>,
}

pub fn compute_ratios(args: &RatiosArgs) {
    if let Some(threads) = args.threads {
        if threads < 1 {
            eprintln!(
                "[perimetry::ratios] ERROR: Threads must be set to a positive integer if provided."
            );
            std::process::exit(1);
        }

        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .unwrap_or_else(|err| {
                eprintln!("[perimetry::ratios] ERROR: Failed to build thread pool. {}", err);
                std::process::exit(1);
            });
    }

    let mut config = args.params.resolve("ratios");

    if let Some(samples) = args.samples {
        config.samples = samples;
    }

    validate_or_exit(&config, "ratios");

    let output = args.output.as_ref().map(PathBuf::from);

    if let Some(output) = &output {
        let extension = output
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        let valid = extension
            .as_deref()
            .is_some_and(|ext| constant::SUPPORTED_TABLE_FORMATS.contains(&ext));

        if !valid {
            eprintln!(
                "[perimetry::ratios] ERROR: Invalid output path. Must end with one of: {}.",
                constant::SUPPORTED_TABLE_FORMATS.join(", ")
            );
            std::process::exit(1);
        }

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                eprintln!(
                    "[perimetry::ratios] ERROR: Invalid file path. Parent directory of output file path does not exist."
                );
                std::process::exit(1);
            }
        }
    }

    let seed = seed_or_random(&config);

    ut::track::progress_log(
        &format!(
            "Measuring {} shapes on a {}x{} grid (seed {}).",
            ut::track::thousands_format(config.samples),
            config.pixel_dimension,
            config.pixel_dimension,
            seed
        ),
        args.verbose,
    );

    let measurements =
        mp::measure_trials_parallel(&config, seed, args.verbose).unwrap_or_else(|err| {
            eprintln!("[perimetry::ratios] ERROR: {}", err);
            std::process::exit(1);
        });

    let ratios = ConversionRatios::from_measurements(&measurements);
    write_summary(&ratios);

    if let Some(output) = output {
        let mut df = io::measurements_table(&measurements).unwrap_or_else(|err| {
            eprintln!("[perimetry::ratios] ERROR: {}", err);
            std::process::exit(1);
        });

        io::write_table(&mut df, &output).unwrap_or_else(|err| {
            eprintln!("[perimetry::ratios] ERROR: {}", err);
            std::process::exit(1);
        });

        ut::track::progress_log(
            &format!("Wrote measurements to {}.", output.display()),
            args.verbose,
        );
    }

    let non_finite = ratios.summary().iter().map(|s| s.non_finite).max().unwrap_or(0);

    let message = if non_finite > 0 {
        format!(
            "Complete. {} shapes measured. {} shapes produced non-finite ratios.",
            ut::track::thousands_format(ratios.len()),
            ut::track::thousands_format(non_finite)
        )
    } else {
        format!(
            "Complete. {} shapes measured.",
            ut::track::thousands_format(ratios.len())
        )
    };

    ut::track::progress_log(&message, args.verbose);
}

/// Print per-order ratio statistics as a tab separated table
fn write_summary(ratios: &ConversionRatios) {
    let mut stdout = std::io::stdout();

    let mut rows = vec!["order\tfinite\tnon_finite\tmean\tstd\n".to_string()];

    for (order, summary) in ratios.summary().iter().enumerate() {
        rows.push(format!(
            "order{}\t{}\t{}\t{}\t{}\n",
            order, summary.finite, summary.non_finite, summary.mean, summary.std
        ));
    }

    for row in rows.iter() {
        if stdout.write_all(row.as_bytes()).is_err() {
            std::process::exit(1);
        }
    }
}
