use crate::error::{ProcessingError, Result};
use crate::models::Station;
use crate::readers::RecordParser;
use crate::utils::constants::DEFAULT_CHUNK_SIZE;
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

/// Counters for one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub lines_read: usize,
    pub stations_emitted: usize,
    pub lines_rejected: usize,
    pub coordinate_warnings: usize,
}

impl ImportStats {
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Import Summary:\n");
        summary.push_str(&format!("  Lines read: {}\n", self.lines_read));
        summary.push_str(&format!("  Stations emitted: {}\n", self.stations_emitted));
        summary.push_str(&format!("  Lines rejected: {}\n", self.lines_rejected));
        summary.push_str(&format!(
            "  Stations with out-of-range coordinates: {}",
            self.coordinate_warnings
        ));
        summary
    }
}

#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub stations: Vec<Station>,
    pub stats: ImportStats,
}

/// Use the GHCN id as the canonical station id.
///
/// Merging several registries would pick the id after all sources are
/// combined; with a single source the GHCN id is already unique.
pub fn assign_station_id(station: &mut Station) {
    station.id = station.identifiers.ghcn_id.clone();
}

/// Fans raw lines out to a record parser across a worker pool.
///
/// Each line is one unit of work that yields at most one station. Lines the
/// parser rejects are counted and otherwise dropped.
pub struct StationImporter {
    parser: Arc<dyn RecordParser>,
    max_workers: usize,
    chunk_size: usize,
    last_updated: Option<String>,
}

impl StationImporter {
    pub fn new(parser: Arc<dyn RecordParser>) -> Self {
        Self {
            parser,
            max_workers: num_cpus::get(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            last_updated: None,
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Stamp every emitted station with this `last_updated` date instead of
    /// the source default.
    pub fn with_last_updated(mut self, last_updated: Option<String>) -> Self {
        self.last_updated = last_updated;
        self
    }

    pub fn format_id(&self) -> &'static str {
        self.parser.format_id()
    }

    /// Parse one line and give the result its canonical id.
    pub fn parse_line(&self, line: &str) -> Option<Station> {
        let mut station = self.parser.parse_line(line)?;
        assign_station_id(&mut station);
        if let Some(date) = &self.last_updated {
            station.last_updated = date.clone();
        }
        Some(station)
    }

    pub fn import_lines(
        &self,
        lines: &[String],
        progress: Option<&ProgressReporter>,
    ) -> Result<ImportOutcome> {
        if let Some(p) = progress {
            p.set_message(&format!("Parsing {} lines...", lines.len()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;

        let chunks: Vec<Vec<Station>> = pool.install(|| {
            lines
                .par_chunks(self.chunk_size)
                .map(|chunk| {
                    let stations: Vec<Station> =
                        chunk.iter().filter_map(|line| self.parse_line(line)).collect();

                    if let Some(p) = progress {
                        p.increment(chunk.len() as u64);
                    }

                    stations
                })
                .collect()
        });

        let stations: Vec<Station> = chunks.into_iter().flatten().collect();

        let mut stats = ImportStats {
            lines_read: lines.len(),
            stations_emitted: stations.len(),
            lines_rejected: lines.len() - stations.len(),
            coordinate_warnings: 0,
        };

        for station in &stations {
            if let Err(e) = station.geography.validate() {
                stats.coordinate_warnings += 1;
                warn!(station = %station.id, "Coordinates out of range: {}", e);
            }
        }

        debug!(
            format = self.format_id(),
            workers = self.max_workers,
            chunk_size = self.chunk_size,
            "Import finished"
        );
        info!(
            emitted = stats.stations_emitted,
            rejected = stats.lines_rejected,
            "Parsed {} lines",
            stats.lines_read
        );

        if let Some(p) = progress {
            p.finish_with_message(&format!("Parsed {} stations", stats.stations_emitted));
        }

        Ok(ImportOutcome { stations, stats })
    }
}
