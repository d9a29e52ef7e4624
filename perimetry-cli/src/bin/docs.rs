#![allow(clippy::all)]
use clap::{Parser, Subcommand};
use clap_markdown;

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
    clap_markdown::print_help_markdown::<Cli>();
}
