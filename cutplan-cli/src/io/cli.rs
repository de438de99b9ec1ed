use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON cut request
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Fabric label printed on the operator instructions
    #[arg(short, long, value_name = "LABEL", default_value = "cotton")]
    pub fabric_type: String,
    /// Extra setup steps appended to every sheet's instructions
    #[arg(long, value_name = "TEXT")]
    pub special_requirement: Vec<String>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
