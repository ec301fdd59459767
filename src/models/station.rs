use crate::models::{Attributions, Geography, Identifiers};
use crate::schema::{prefix_labels, EntityKind, Schema, Tabular};
use crate::utils::constants::{ATTRIBUTIONS_PREFIX, GEOGRAPHY_PREFIX, IDENTIFIERS_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One physical location that records weather observations, with its
/// identifiers, geography and attributions.
///
/// The nested entities are owned by value, so a station always has all three.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Canonical id, distinct from the agency identifiers in `identifiers`.
    pub id: String,
    pub name: String,

    pub identifiers: Identifiers,
    pub geography: Geography,
    pub attributions: Attributions,

    /// `YYYY-MM-DD`
    pub start_date: String,
    pub end_date: String,
    pub last_updated: String,
}

impl Station {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scalar fields placed before the nested blocks (`id`, `name`).
    const LEADING: usize = 2;
}

impl Schema for Station {
    const KIND: EntityKind = EntityKind::Station;
    const FIELDS: &'static [&'static str] =
        &["id", "name", "start_date", "end_date", "last_updated"];
}

impl Tabular for Station {
    fn header_columns(&self, prefix: &str) -> Vec<String> {
        let own = prefix_labels(prefix, Self::FIELDS);

        let mut cols = own[..Self::LEADING].to_vec();
        cols.extend(self.identifiers.header_columns(IDENTIFIERS_PREFIX));
        cols.extend(self.geography.header_columns(GEOGRAPHY_PREFIX));
        cols.extend(self.attributions.header_columns(ATTRIBUTIONS_PREFIX));
        cols.extend_from_slice(&own[Self::LEADING..]);
        cols
    }

    fn value_columns(&self) -> Vec<String> {
        let mut cols = vec![self.id.clone(), self.name.clone()];
        cols.extend(self.identifiers.value_columns());
        cols.extend(self.geography.value_columns());
        cols.extend(self.attributions.value_columns());
        cols.extend([
            self.start_date.clone(),
            self.end_date.clone(),
            self.last_updated.clone(),
        ]);
        cols
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.csv(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_station_has_nested_entities() {
        let station = Station::empty();
        assert_eq!(station.identifiers, Identifiers::default());
        assert_eq!(station.geography.elevation_meters, None);
        assert_eq!(station.header_columns("").len(), station.value_columns().len());
    }

    #[test]
    fn test_station_header_layout() {
        let station = Station::empty();
        let headers = station.header_columns("");

        assert_eq!(&headers[..3], &["id", "name", "ids.wmo_id"]);
        assert!(headers.contains(&"geo.subdivision_1_code".to_string()));
        assert_eq!(
            &headers[headers.len() - 3..],
            &["start_date", "end_date", "last_updated"]
        );

        let prefixed = station.header_columns("stn");
        assert_eq!(prefixed[0], "stn.id");
        assert_eq!(prefixed[2], "ids.wmo_id");
        assert_eq!(prefixed.last().unwrap(), "stn.last_updated");
    }

    #[test]
    fn test_station_values_follow_header_order() {
        let mut station = Station::empty();
        station.id = "USW00023234".to_string();
        station.name = "SAN FRANCISCO INTL AP".to_string();
        station.identifiers.wmo_id = "72494".to_string();
        station.geography.region_code = "US".to_string();
        station.start_date = "0000-01-01".to_string();
        station.end_date = "9999-12-31".to_string();
        station.last_updated = "2023-04-15".to_string();

        let headers = station.header_columns("");
        let values = station.value_columns();
        assert_eq!(headers.len(), values.len());

        let row: Vec<(&str, &str)> = headers
            .iter()
            .map(String::as_str)
            .zip(values.iter().map(String::as_str))
            .collect();
        assert!(row.contains(&("id", "USW00023234")));
        assert!(row.contains(&("name", "SAN FRANCISCO INTL AP")));
        assert!(row.contains(&("ids.wmo_id", "72494")));
        assert!(row.contains(&("geo.region_code", "US")));
        assert!(row.contains(&("geo.elevation_meters", "-9999")));
        assert!(row.contains(&("end_date", "9999-12-31")));

        assert!(station.to_string().starts_with("USW00023234,SAN FRANCISCO INTL AP,72494,"));
        assert!(station.to_string().ends_with(",0000-01-01,9999-12-31,2023-04-15"));
    }

    #[test]
    fn test_csv_does_not_escape_delimiters() {
        let mut station = Station::empty();
        station.name = "FOO, BAR".to_string();
        assert!(station.csv(",").contains(",FOO, BAR,"));
        assert!(station.csv("|").contains("|FOO, BAR|"));
    }
}
