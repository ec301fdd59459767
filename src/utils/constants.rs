/// Sentinel marking a numeric field as intentionally unset
pub const UNSET_VALUE: i64 = -9999;
pub const UNSET_VALUE_F64: f64 = -9999.0;
pub const UNSET_VALUE_STRING: &str = "-9999";

/// Placeholder cells for map-valued identifier columns
pub const REGIONAL_AVIATION_CODES_LABEL: &str = "map of regional airport codes";
pub const REGIONAL_IDS_LABEL: &str = "map of regional ids";

/// Prefixes used for nested blocks of the station row
pub const IDENTIFIERS_PREFIX: &str = "ids";
pub const GEOGRAPHY_PREFIX: &str = "geo";
pub const ATTRIBUTIONS_PREFIX: &str = "attr";

/// Fixed-point scale of the E7 coordinate columns
pub const E7_SCALE: f64 = 1e7;

/// Source format identifiers
pub const FORMAT_GHCND_STATIONS: &str = "ghcnd-stations";

/// GHCN-Daily station registry layout
pub const GHCND_STATION_LINE_WIDTH: usize = 85;
pub const GHCND_MISSING_ELEVATION: f64 = -999.9;

/// Station validity window used when a source has no per-record dates
pub const OPEN_START_DATE: &str = "0000-01-01";
pub const OPEN_END_DATE: &str = "9999-12-31";
pub const GHCND_LAST_UPDATED: &str = "2023-04-15";

/// Output defaults
pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_CHUNK_SIZE: usize = 4096;
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "STATION_NORMALIZER";
