use crate::error::{ProcessingError, Result};
use crate::models::Station;
use crate::readers::GhcndStationParser;
use std::collections::HashMap;
use std::sync::Arc;

/// Turns one raw source line into a station, or rejects it.
///
/// Implementations are stateless, so one instance can be shared by any number
/// of workers. Rejection is signalled only by `None`.
pub trait RecordParser: Send + Sync {
    /// Identifier this format is registered under.
    fn format_id(&self) -> &'static str;

    /// Exact byte width of a well-formed line.
    fn expected_width(&self) -> usize;

    fn parse_line(&self, line: &str) -> Option<Station>;
}

/// Lookup table of record parsers keyed by format identifier.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: HashMap<&'static str, Arc<dyn RecordParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in source format.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GhcndStationParser::new());
        registry
    }

    /// Add a format, replacing any parser already registered under its id.
    pub fn register<P: RecordParser + 'static>(&mut self, parser: P) -> &mut Self {
        self.parsers.insert(parser.format_id(), Arc::new(parser));
        self
    }

    pub fn get(&self, format_id: &str) -> Result<Arc<dyn RecordParser>> {
        self.parsers
            .get(format_id.trim())
            .cloned()
            .ok_or_else(|| ProcessingError::UnknownFormat(format_id.to_string()))
    }

    pub fn contains(&self, format_id: &str) -> bool {
        self.parsers.contains_key(format_id.trim())
    }

    /// Registered identifiers in sorted order.
    pub fn formats(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.parsers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::FORMAT_GHCND_STATIONS;

    struct PipeParser;

    impl RecordParser for PipeParser {
        fn format_id(&self) -> &'static str {
            "pipe-test"
        }

        fn expected_width(&self) -> usize {
            11
        }

        fn parse_line(&self, line: &str) -> Option<Station> {
            if line.len() != self.expected_width() {
                return None;
            }
            let (id, name) = line.split_once('|')?;
            let mut station = Station::empty();
            station.identifiers.ghcn_id = id.trim().to_string();
            station.name = name.trim().to_string();
            Some(station)
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = ParserRegistry::with_defaults();
        assert!(registry.contains(FORMAT_GHCND_STATIONS));
        assert_eq!(registry.formats(), vec![FORMAT_GHCND_STATIONS]);

        let parser = registry.get(FORMAT_GHCND_STATIONS).unwrap();
        assert_eq!(parser.expected_width(), 85);
    }

    #[test]
    fn test_unknown_format() {
        let registry = ParserRegistry::with_defaults();
        match registry.get("isd-lite") {
            Err(ProcessingError::UnknownFormat(id)) => assert_eq!(id, "isd-lite"),
            other => panic!("expected UnknownFormat, got {:?}", other.map(|p| p.format_id())),
        }
    }

    #[test]
    fn test_register_new_format() {
        let mut registry = ParserRegistry::with_defaults();
        registry.register(PipeParser);

        assert_eq!(registry.formats(), vec![FORMAT_GHCND_STATIONS, "pipe-test"]);

        let parser = registry.get("pipe-test").unwrap();
        let station = parser.parse_line("ABC01|NORTH").unwrap();
        assert_eq!(station.identifiers.ghcn_id, "ABC01");
        assert_eq!(station.name, "NORTH");
        assert!(parser.parse_line("ABC01|NORTHERN").is_none());
    }
}
