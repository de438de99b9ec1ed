use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser;
use cutplan::advisory::assess;
use cutplan::instructions::generate_instructions;
use cutplan::io::export::{export_advisory, export_solution};
use cutplan::io::import::import_request;
use cutplan::io::layout_to_svg::sheet_to_svg;
use cutplan::optimize::{CutConfig, optimize};
use cutplan_cli::io;
use cutplan_cli::io::cli::Cli;
use cutplan_cli::io::output::CutOutput;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("no config file provided, use --config-file to provide a custom config");
            CutConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    info!("running with config: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_request = io::read_request(args.input_file.as_path())?;
    let request = import_request(&ext_request)?;
    let result = optimize(&request, &config)?;

    if !result.unplaced.is_empty() {
        warn!(
            "{} piece(s) could not be placed on any sheet",
            result.unplaced.len()
        );
    }

    let advisory = assess(
        result.utilization_pct,
        result.waste.waste_pct,
        result.cutting_time_mins,
        config.piece_complexity,
    );
    info!(
        "efficiency score {}/100, risk {:?}",
        advisory.score, advisory.risk
    );

    let output = CutOutput {
        request: ext_request,
        config,
        solution: export_solution(&result),
        advisory: export_advisory(&advisory),
    };
    io::write_json(
        &output,
        &args.solution_folder.join(format!("sol_{input_stem}.json")),
    )?;

    let blocks = generate_instructions(&result.sheets, &args.fabric_type, &args.special_requirement);
    io::write_instructions(
        &blocks,
        &args
            .solution_folder
            .join(format!("sol_{input_stem}_instructions.txt")),
    )?;

    for sheet in &result.sheets {
        let svg = sheet_to_svg(sheet, &format!("sheet {}", sheet.index + 1));
        io::write_svg(
            &svg,
            &args
                .solution_folder
                .join(format!("sol_{input_stem}_{}.svg", sheet.index)),
        )?;
    }

    Ok(())
}
