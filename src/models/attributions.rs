use crate::schema::{EntityKind, Schema, Tabular};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribution messages and source tags for data merged into a station or
/// observation. Carries no fields yet but keeps its place in the row layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributions {}

impl Schema for Attributions {
    const KIND: EntityKind = EntityKind::Attributions;
    const FIELDS: &'static [&'static str] = &[];
}

impl Tabular for Attributions {
    fn value_columns(&self) -> Vec<String> {
        Vec::new()
    }
}

impl fmt::Display for Attributions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.csv(","))
    }
}
