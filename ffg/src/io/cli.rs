use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// One or more packing requests, solved in parallel
    #[arg(short, long, value_name = "FILE", num_args = 1.., required = true)]
    pub input_file: Vec<PathBuf>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Skip writing an SVG per layer
    #[arg(long)]
    pub no_svg: bool,
}
