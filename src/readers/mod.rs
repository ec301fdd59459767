pub mod ghcnd_stations;
pub mod line_reader;
pub mod record_parser;

pub use ghcnd_stations::GhcndStationParser;
pub use line_reader::LineReader;
pub use record_parser::{ParserRegistry, RecordParser};
