//! Ordered column mapping shared by every entity.
//!
//! Each entity declares its field labels statically through [`Schema`]. The
//! [`SchemaRegistry`] collects them by [`EntityKind`] on first use and is
//! read-only afterwards, so header and value rows can be aligned positionally
//! from any thread.

use crate::error::ProcessingError;
use crate::models::{
    Attributions, DailyObservation, Geography, Identifiers, Observation, Station,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Station,
    Identifiers,
    Geography,
    Attributions,
    Observation,
    DailyObservation,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Station,
        EntityKind::Identifiers,
        EntityKind::Geography,
        EntityKind::Attributions,
        EntityKind::Observation,
        EntityKind::DailyObservation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Station => "station",
            EntityKind::Identifiers => "identifiers",
            EntityKind::Geography => "geography",
            EntityKind::Attributions => "attributions",
            EntityKind::Observation => "observation",
            EntityKind::DailyObservation => "daily_observation",
        }
    }

    /// Header row of a default instance of this kind.
    pub fn header_columns(&self, prefix: &str) -> Vec<String> {
        match self {
            EntityKind::Station => Station::empty().header_columns(prefix),
            EntityKind::Identifiers => Identifiers::default().header_columns(prefix),
            EntityKind::Geography => Geography::default().header_columns(prefix),
            EntityKind::Attributions => Attributions::default().header_columns(prefix),
            EntityKind::Observation => Observation::empty().header_columns(prefix),
            EntityKind::DailyObservation => DailyObservation::empty().header_columns(prefix),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EntityKind {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ProcessingError::UnknownEntity(s.to_string()))
    }
}

/// Static, ordered field list of an entity type.
pub trait Schema {
    const KIND: EntityKind;
    const FIELDS: &'static [&'static str];
}

/// Flat tabular rendering of an entity.
///
/// `header_columns` and `value_columns` always have the same length and
/// order. `csv` joins values without quoting or escaping, so a value that
/// contains the delimiter shifts the row; downstream consumers must tolerate
/// or pre-sanitize that.
pub trait Tabular: Schema {
    fn header_columns(&self, prefix: &str) -> Vec<String> {
        prefix_labels(prefix, fields(Self::KIND))
    }

    fn value_columns(&self) -> Vec<String>;

    fn csv(&self, delim: &str) -> String {
        self.value_columns().join(delim)
    }
}

#[derive(Debug)]
pub struct SchemaRegistry {
    fields: HashMap<EntityKind, &'static [&'static str]>,
}

impl SchemaRegistry {
    fn build() -> Self {
        let mut fields = HashMap::with_capacity(EntityKind::ALL.len());
        fields.insert(Station::KIND, Station::FIELDS);
        fields.insert(Identifiers::KIND, Identifiers::FIELDS);
        fields.insert(Geography::KIND, Geography::FIELDS);
        fields.insert(Attributions::KIND, Attributions::FIELDS);
        fields.insert(Observation::KIND, Observation::FIELDS);
        fields.insert(DailyObservation::KIND, DailyObservation::FIELDS);
        Self { fields }
    }

    pub fn fields(&self, kind: EntityKind) -> &'static [&'static str] {
        self.fields.get(&kind).copied().unwrap_or(&[])
    }
}

static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// Build the registry now instead of on first lookup.
pub fn init() -> &'static SchemaRegistry {
    REGISTRY.get_or_init(SchemaRegistry::build)
}

/// Ordered field labels for an entity type.
pub fn fields(kind: EntityKind) -> &'static [&'static str] {
    init().fields(kind)
}

/// Qualify each label as `prefix.label`.
///
/// A blank prefix, or one that is just `"."`, leaves the labels unchanged.
pub fn prefix_labels<S: AsRef<str>>(prefix: &str, labels: &[S]) -> Vec<String> {
    let prefix = prefix.trim();
    if prefix.is_empty() || prefix == "." {
        return labels.iter().map(|l| l.as_ref().to_string()).collect();
    }

    labels
        .iter()
        .map(|l| format!("{}.{}", prefix, l.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prefix_labels() {
        let labels = ["aa", "bb", "cc"];

        assert!(prefix_labels::<&str>("", &[]).is_empty());
        assert_eq!(prefix_labels("", &labels), vec!["aa", "bb", "cc"]);
        assert_eq!(prefix_labels(".", &labels), vec!["aa", "bb", "cc"]);
        assert_eq!(prefix_labels("  ", &labels), vec!["aa", "bb", "cc"]);
        assert_eq!(
            prefix_labels("nested", &labels),
            vec!["nested.aa", "nested.bb", "nested.cc"]
        );
        assert_eq!(prefix_labels("p", &["aa", "bb"]), vec!["p.aa", "p.bb"]);
    }

    #[test]
    fn test_prefix_labels_leaves_input_untouched() {
        let labels = vec!["aa".to_string(), "bb".to_string()];
        let prefixed = prefix_labels("x", &labels);

        assert_eq!(labels, vec!["aa", "bb"]);
        assert_eq!(prefixed, vec!["x.aa", "x.bb"]);
    }

    #[test]
    fn test_registry_matches_declared_fields() {
        assert_eq!(fields(EntityKind::Geography), Geography::FIELDS);
        assert_eq!(fields(EntityKind::Attributions).len(), 0);
        assert_eq!(
            fields(EntityKind::Observation),
            &["station_id", "date", "time", "temp_c"]
        );
        assert!(std::ptr::eq(init(), init()));
    }

    #[test]
    fn test_header_and_value_lengths_align() {
        for kind in EntityKind::ALL {
            for prefix in ["", ".", "p", "nested.deep"] {
                let headers = kind.header_columns(prefix);
                let values = match kind {
                    EntityKind::Station => Station::empty().value_columns(),
                    EntityKind::Identifiers => Identifiers::default().value_columns(),
                    EntityKind::Geography => Geography::default().value_columns(),
                    EntityKind::Attributions => Attributions::default().value_columns(),
                    EntityKind::Observation => Observation::empty().value_columns(),
                    EntityKind::DailyObservation => DailyObservation::empty().value_columns(),
                };
                assert_eq!(headers.len(), values.len(), "{} with prefix {:?}", kind, prefix);
            }
        }
    }

    #[test]
    fn test_entity_kind_from_str() {
        assert_eq!("station".parse::<EntityKind>().unwrap(), EntityKind::Station);
        assert_eq!(
            "Daily-Observation".parse::<EntityKind>().unwrap(),
            EntityKind::DailyObservation
        );
        assert!("pizza".parse::<EntityKind>().is_err());
    }
}
