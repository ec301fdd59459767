use crate::schema::{EntityKind, Schema, Tabular};
use crate::utils::format::optional_float_string;
use crate::utils::parse::float_or_none;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily summary of the values tracked in [`Observation`](crate::models::Observation):
/// min, mean and max per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub station_id: String,
    /// `YYYYMMDD`
    pub date: String,
    pub temp_c_min: Option<f64>,
    pub temp_c_mean: Option<f64>,
    pub temp_c_max: Option<f64>,
}

impl DailyObservation {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from raw values, treating sentinel temperatures as missing.
    pub fn new(station_id: &str, date: &str, min: f64, mean: f64, max: f64) -> Self {
        Self {
            station_id: station_id.to_string(),
            date: date.to_string(),
            temp_c_min: float_or_none(min),
            temp_c_mean: float_or_none(mean),
            temp_c_max: float_or_none(max),
        }
    }

    pub fn temperature_range(&self) -> Option<f64> {
        Some(self.temp_c_max? - self.temp_c_min?)
    }
}

impl Schema for DailyObservation {
    const KIND: EntityKind = EntityKind::DailyObservation;
    const FIELDS: &'static [&'static str] =
        &["station_id", "date", "temp_c_min", "temp_c_mean", "temp_c_max"];
}

impl Tabular for DailyObservation {
    fn value_columns(&self) -> Vec<String> {
        vec![
            self.station_id.clone(),
            self.date.clone(),
            optional_float_string(self.temp_c_min),
            optional_float_string(self.temp_c_mean),
            optional_float_string(self.temp_c_max),
        ]
    }
}

impl fmt::Display for DailyObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.csv(","))
    }
}
