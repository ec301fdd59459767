use crate::schema::{EntityKind, Schema, Tabular};
use crate::utils::constants::{REGIONAL_AVIATION_CODES_LABEL, REGIONAL_IDS_LABEL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The set of currently known identifiers for a station.
///
/// Historical identifiers and time series of changes are not tracked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    pub wmo_id: String,
    pub ghcn_id: String,
    pub ghcn_id_alt: String,

    pub iata: String,
    pub icao: String,

    /// ISO 3166-1 region code to the code issued by that region's air
    /// authority, e.g. `US => SFO`.
    pub regional_aviation_codes: BTreeMap<String, String>,

    /// ISO 3166-1 region code to identifiers issued by that region's
    /// authorities, e.g. `US => EPA:11432`.
    pub regional_ids: BTreeMap<String, String>,
}

impl Schema for Identifiers {
    const KIND: EntityKind = EntityKind::Identifiers;
    const FIELDS: &'static [&'static str] = &[
        "wmo_id",
        "ghcn_id",
        "ghcn_id_alt",
        "iata",
        "icao",
        "regional_aviation_codes",
        "regional_ids",
    ];
}

impl Tabular for Identifiers {
    fn value_columns(&self) -> Vec<String> {
        // Map contents are not flattened; the columns carry a fixed label.
        vec![
            self.wmo_id.clone(),
            self.ghcn_id.clone(),
            self.ghcn_id_alt.clone(),
            self.iata.clone(),
            self.icao.clone(),
            REGIONAL_AVIATION_CODES_LABEL.to_string(),
            REGIONAL_IDS_LABEL.to_string(),
        ]
    }
}

impl fmt::Display for Identifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.csv(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identifier_columns_align() {
        let mut ids = Identifiers {
            wmo_id: "72494".to_string(),
            ghcn_id: "USW00023234".to_string(),
            iata: "SFO".to_string(),
            icao: "KSFO".to_string(),
            ..Default::default()
        };
        ids.regional_aviation_codes
            .insert("US".to_string(), "SFO".to_string());

        let headers = ids.header_columns("ids");
        let values = ids.value_columns();

        assert_eq!(headers.len(), values.len());
        assert_eq!(headers[3], "ids.iata");
        assert_eq!(values[3], "SFO");
        assert_eq!(headers[4], "ids.icao");
        assert_eq!(values[4], "KSFO");
    }

    #[test]
    fn test_maps_render_as_placeholders() {
        let mut ids = Identifiers::default();
        ids.regional_ids
            .insert("US".to_string(), "EPA:11432".to_string());

        assert_eq!(
            ids.to_string(),
            ",,,,,map of regional airport codes,map of regional ids"
        );
    }
}
