// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use clap::{Parser, Subcommand};
use perimetry_cli::{ratios, shape};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Ratios(ratios::RatiosArgs),
    Shape(shape::ShapeArgs),
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Ratios(ratios_args)) => ratios::compute_ratios(ratios_args),
        Some(Commands::Shape(shape_args)) => shape::measure_shape(shape_args),
        None => {}
    }
}
