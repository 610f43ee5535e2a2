use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use clap::Parser as ClapParser;
use ffg::config::FFGConfig;
use ffg::io;
use ffg::io::cli::Cli;
use ffg::io::output::FFGOutput;
use ffg::pack;
use log::{error, info, warn};
use rayon::prelude::*;
use vtl_core::io::export::export_solution;
use vtl_core::io::ext_repr::ExtPackingRequest;
use vtl_core::io::import::import_request;
use vtl_core::io::svg::layer_to_svg;
use vtl_core::util::{FPA, utilization};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFGConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed FFGConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    //independent requests, one pack call per file
    let results = args
        .input_file
        .par_iter()
        .map(|input_file| {
            let result = solve_request(input_file, &config, &args.solution_folder, !args.no_svg)
                .with_context(|| format!("failed to solve {}", input_file.display()));
            if let Err(e) = &result {
                error!("[MAIN] {e:#}");
            }
            result
        })
        .collect::<Vec<_>>();

    let n_failed = results.iter().filter(|r| r.is_err()).count();
    ensure!(
        n_failed == 0,
        "{n_failed} of {} requests could not be solved",
        results.len()
    );
    Ok(())
}

fn solve_request(input_file: &Path, config: &FFGConfig, output_folder: &Path, draw_svg: bool) -> Result<()> {
    let input_stem = input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", input_file.display()))?;

    let ext_request: ExtPackingRequest = io::read_json(input_file)?;
    let (truck, boxes) = import_request(&ext_request)?;

    let start = Instant::now();
    let solution = pack(&truck, &boxes, config);
    let runtime_ms = start.elapsed().as_secs_f64() * 1000.0;

    //independent recomputation from the box list
    let recomputed = utilization(&truck, &boxes, &solution.placed)?;
    ensure!(
        FPA(recomputed) == FPA(solution.utilization),
        "utilization mismatch: {recomputed} vs {}",
        solution.utilization
    );

    {
        let output = FFGOutput {
            request: ext_request,
            response: export_solution(&solution, &truck, config.origin, runtime_ms),
            config: *config,
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, &solution_path)?;
    }

    if draw_svg {
        for i in 0..solution.layers.len() {
            let svg_path = output_folder.join(format!("sol_{input_stem}_layer_{i}.svg"));
            let title = format!("{} layer {i}", truck.id);
            let svg = layer_to_svg(&truck, &solution, i, config.svg_draw_options, &title);

            io::write_svg(&svg, &svg_path)?;
        }
    }

    Ok(())
}
