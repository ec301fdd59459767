use crate::cli::args::{Cli, Commands};
use crate::config::ImportConfig;
use crate::error::{ProcessingError, Result};
use crate::processors::{ImportOutcome, StationImporter};
use crate::readers::{LineReader, ParserRegistry};
use crate::schema::{self, EntityKind};
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::RowWriter;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose, cli.log_file.as_deref())?;
    schema::init();

    match cli.command {
        Commands::Import {
            format,
            input,
            output,
            delimiter,
            header,
            max_workers,
            chunk_size,
            last_updated,
            config,
            mmap,
            quiet,
        } => {
            let settings = resolve_settings(
                config.as_deref(),
                SettingOverrides {
                    delimiter,
                    header,
                    max_workers,
                    chunk_size,
                    last_updated,
                    mmap,
                },
            )?;

            let output = output.unwrap_or_else(|| generate_default_output_filename(&format));

            println!("Importing {} stations...", format);
            println!("Input file: {}", input.display());
            println!("Output file: {}", output.display());
            println!(
                "Workers: {}, Chunk size: {}",
                settings.effective_workers(),
                settings.chunk_size
            );

            let (stats, file_info) = tokio::task::spawn_blocking(move || {
                let outcome = import_file(&format, &input, &settings, quiet)?;

                let writer = RowWriter::new()
                    .with_delimiter(settings.delimiter_char()?)?
                    .with_header(settings.write_header)
                    .with_batch_size(settings.chunk_size);
                let file_info = writer.write_records(&outcome.stations, &output)?;

                Ok::<_, ProcessingError>((outcome.stats, file_info))
            })
            .await??;

            println!("\n{}", stats.summary());
            println!("\n{}", file_info.summary());
            println!("Import complete!");
        }

        Commands::Validate {
            format,
            input,
            max_workers,
            config,
        } => {
            println!("Validating {} stations...", format);
            println!("Input file: {}", input.display());

            let settings = resolve_settings(
                config.as_deref(),
                SettingOverrides {
                    max_workers,
                    ..Default::default()
                },
            )?;

            let outcome =
                tokio::task::spawn_blocking(move || import_file(&format, &input, &settings, false))
                    .await??;

            println!("\n{}", outcome.stats.summary());

            if outcome.stats.lines_rejected == 0 && outcome.stats.coordinate_warnings == 0 {
                println!("✅ All lines parsed cleanly");
            } else {
                println!(
                    "⚠️  {} lines rejected, {} stations with out-of-range coordinates",
                    outcome.stats.lines_rejected, outcome.stats.coordinate_warnings
                );
            }
        }

        Commands::Formats => {
            let registry = ParserRegistry::with_defaults();
            println!("Registered formats:");
            for id in registry.formats() {
                let parser = registry.get(id)?;
                println!("  {:<20} {} columns", id, parser.expected_width());
            }
        }

        Commands::Schema {
            entity,
            prefix,
            json,
        } => {
            let kind: EntityKind = entity.parse()?;
            let columns = kind.header_columns(&prefix);

            if json {
                let listing = SchemaListing {
                    entity: kind,
                    prefix: &prefix,
                    columns: &columns,
                };
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for column in &columns {
                    println!("{}", column);
                }
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SchemaListing<'a> {
    entity: EntityKind,
    prefix: &'a str,
    columns: &'a [String],
}

/// Command line flags that take precedence over the loaded settings.
#[derive(Debug, Default)]
struct SettingOverrides {
    delimiter: Option<char>,
    header: bool,
    max_workers: Option<usize>,
    chunk_size: Option<usize>,
    last_updated: Option<String>,
    mmap: bool,
}

impl SettingOverrides {
    fn apply(self, settings: &mut ImportConfig) {
        if let Some(delimiter) = self.delimiter {
            settings.delimiter = delimiter.to_string();
        }
        if self.header {
            settings.write_header = true;
        }
        if let Some(workers) = self.max_workers {
            settings.max_workers = workers;
        }
        if let Some(size) = self.chunk_size {
            settings.chunk_size = size;
        }
        if self.last_updated.is_some() {
            settings.last_updated = self.last_updated;
        }
        if self.mmap {
            settings.use_mmap = true;
        }
    }
}

fn resolve_settings(config: Option<&Path>, overrides: SettingOverrides) -> Result<ImportConfig> {
    let mut settings = ImportConfig::load(config)?;
    overrides.apply(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Read and parse a whole input file with the parser registered for `format`.
fn import_file(
    format: &str,
    input: &Path,
    settings: &ImportConfig,
    quiet: bool,
) -> Result<ImportOutcome> {
    let parser = ParserRegistry::with_defaults().get(format)?;

    let lines = LineReader::with_mmap(settings.use_mmap).read_lines(input)?;
    debug!(lines = lines.len(), path = %input.display(), "Read input");

    let progress = ProgressReporter::new(lines.len() as u64, "Parsing station lines", quiet);

    let importer = StationImporter::new(parser)
        .with_max_workers(settings.effective_workers())
        .with_chunk_size(settings.chunk_size)
        .with_last_updated(settings.last_updated.clone());

    let outcome = importer.import_lines(&lines, Some(&progress))?;
    info!(format, stations = outcome.stats.stations_emitted, "Import parsed");
    Ok(outcome)
}

fn setup_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::fmt::writer::BoxMakeWriter;
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_normalizer={}", log_level)));

    let (writer, ansi) = match log_file {
        Some(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| ProcessingError::Config(format!("Failed to initialize logging: {}", e)))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(File::options().create(true).append(true).open(path)?)
}
