use crate::schema::{EntityKind, Schema, Tabular};
use crate::utils::format::{format_fixed, optional_int_string};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Where an entity sits: its containing ISO 3166-1 region, administrative
/// subdivisions, locality and postal area, plus its coordinates in a few
/// common encodings.
///
/// Values that are unknown or do not exist are left blank. No field is derived
/// from another; the float and E7 coordinates are set independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Geography {
    pub continent: String,
    /// Coarse bucket such as NA, SA, EMEA, APAC.
    pub meta_region: String,
    /// ISO 3166-1 English display name.
    pub region_name: String,
    /// ISO 3166-1 alpha-2 code.
    pub region_code: String,
    pub subdivision_1_name: String,
    pub subdivision_1_code: String,
    pub subdivision_2_name: String,
    pub subdivision_3_name: String,
    pub locality: String,
    pub postal_code: String,
    pub street_address: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f32,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f32,

    /// Coordinates scaled by 1e7.
    pub lat_e7: i32,
    pub lng_e7: i32,

    pub datum: String,

    pub elevation_meters: Option<i32>,

    /// s2geometry.io cell id.
    pub s2_cell_id: u64,

    /// TZ database name such as `America/Los_Angeles`; never a fixed offset.
    pub timezone: String,
}

impl Schema for Geography {
    const KIND: EntityKind = EntityKind::Geography;
    const FIELDS: &'static [&'static str] = &[
        "continent",
        "meta_region",
        "region_name",
        "region_code",
        "subdivision_1_name",
        "subdivision_1_code",
        "subdivision_2_name",
        "subdivision_3_name",
        "locality",
        "postal_code",
        "street_address",
        "lat",
        "lng",
        "lat_e7",
        "lng_e7",
        "datum",
        "elevation_meters",
        "s2_cell_id",
        "time_zone",
    ];
}

impl Tabular for Geography {
    fn value_columns(&self) -> Vec<String> {
        vec![
            self.continent.clone(),
            self.meta_region.clone(),
            self.region_name.clone(),
            self.region_code.clone(),
            self.subdivision_1_name.clone(),
            self.subdivision_1_code.clone(),
            self.subdivision_2_name.clone(),
            self.subdivision_3_name.clone(),
            self.locality.clone(),
            self.postal_code.clone(),
            self.street_address.clone(),
            format_fixed(f64::from(self.lat), 6),
            format_fixed(f64::from(self.lng), 6),
            self.lat_e7.to_string(),
            self.lng_e7.to_string(),
            self.datum.clone(),
            optional_int_string(self.elevation_meters),
            format!("{:#x}", self.s2_cell_id),
            self.timezone.clone(),
        ]
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.csv(","))
    }
}
