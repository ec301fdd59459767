pub mod station_importer;

pub use station_importer::{assign_station_id, ImportOutcome, ImportStats, StationImporter};
