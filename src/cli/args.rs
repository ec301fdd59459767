use crate::utils::constants::FORMAT_GHCND_STATIONS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "station-normalizer")]
#[command(about = "Normalize weather station registries into flat tabular rows")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a station registry and write one row per station
    Import {
        #[arg(short, long, default_value = FORMAT_GHCND_STATIONS)]
        format: String,

        #[arg(short, long, help = "Input registry file")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/{format}-{YYMMDD}.csv]"
        )]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Field delimiter [default: ,]")]
        delimiter: Option<char>,

        #[arg(long, help = "Write a header row before the data rows")]
        header: bool,

        #[arg(long, help = "Worker threads [default: one per CPU]")]
        max_workers: Option<usize>,

        #[arg(long)]
        chunk_size: Option<usize>,

        #[arg(long, help = "Override the last_updated column (YYYY-MM-DD)")]
        last_updated: Option<String>,

        #[arg(short, long, help = "TOML settings file")]
        config: Option<PathBuf>,

        #[arg(long, help = "Memory-map the input file")]
        mmap: bool,

        #[arg(short, long, help = "Hide the progress bar")]
        quiet: bool,
    },

    /// Parse a station registry and report counts without writing output
    Validate {
        #[arg(short, long, default_value = FORMAT_GHCND_STATIONS)]
        format: String,

        #[arg(short, long, help = "Input registry file")]
        input: PathBuf,

        #[arg(long, help = "Worker threads [default: one per CPU]")]
        max_workers: Option<usize>,

        #[arg(short, long, help = "TOML settings file")]
        config: Option<PathBuf>,
    },

    /// List the registered source formats
    Formats,

    /// Print the header columns of an entity
    Schema {
        #[arg(short, long, default_value = "station")]
        entity: String,

        #[arg(short, long, default_value = "")]
        prefix: String,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}
