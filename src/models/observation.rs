use crate::schema::{EntityKind, Schema, Tabular};
use crate::utils::format::optional_float_string;
use crate::utils::parse::float_or_none;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All tracked values for one station at one point in time.
///
/// Date and time are UTC, adjusted by the importer as needed, at minute
/// granularity. How a reading window maps onto the recorded minute is
/// documented per source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub station_id: String,
    /// `YYYYMMDD`
    pub date: String,
    /// 24 hour `HHMM`
    pub time: String,
    pub temp_c: Option<f64>,
}

impl Observation {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from raw values, treating a sentinel temperature as missing.
    pub fn new(station_id: &str, date: &str, time: &str, temp_c: f64) -> Self {
        Self {
            station_id: station_id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            temp_c: float_or_none(temp_c),
        }
    }

    /// The reading time, if `date` and `time` are well formed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&format!("{}{}", self.date, self.time), "%Y%m%d%H%M").ok()
    }
}

impl Schema for Observation {
    const KIND: EntityKind = EntityKind::Observation;
    const FIELDS: &'static [&'static str] = &["station_id", "date", "time", "temp_c"];
}

impl Tabular for Observation {
    fn value_columns(&self) -> Vec<String> {
        vec![
            self.station_id.clone(),
            self.date.clone(),
            self.time.clone(),
            optional_float_string(self.temp_c),
        ]
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.csv(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_observation_csv() {
        let obs = Observation {
            station_id: String::new(),
            temp_c: None,
            ..Default::default()
        };
        assert_eq!(obs.csv(","), ",,,-9999");

        let sentinel = Observation {
            temp_c: Some(-9999.0),
            ..Default::default()
        };
        assert_eq!(sentinel.csv(","), ",,,-9999");
    }

    #[test]
    fn test_observation_values() {
        let obs = Observation::new("USW00023234", "20230415", "1356", 17.25);
        assert_eq!(obs.to_string(), "USW00023234,20230415,1356,17.25");
        assert_eq!(obs.csv("\t"), "USW00023234\t20230415\t1356\t17.25");
    }

    #[test]
    fn test_new_maps_sentinel_to_missing() {
        let obs = Observation::new("X", "20230415", "0000", -9999.0);
        assert_eq!(obs.temp_c, None);
    }

    #[test]
    fn test_timestamp() {
        let obs = Observation::new("X", "20230415", "1356", 1.0);
        let ts = obs.timestamp().unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 4, 15));
        assert_eq!((ts.hour(), ts.minute()), (13, 56));

        assert!(Observation::new("X", "2023-04-15", "1356", 1.0).timestamp().is_none());
        assert!(Observation::new("X", "20230415", "2460", 1.0).timestamp().is_none());
    }
}
