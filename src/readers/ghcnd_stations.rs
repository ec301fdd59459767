//! NOAA Global Historical Climatology Network - Daily (GHCN-D) station
//! registry, `ghcnd-stations.txt`.
//!
//! Layout from <https://www.ncei.noaa.gov/pub/data/ghcn/daily/readme.txt>,
//! section IV:
//!
//! ```text
//! ------------------------------
//! Variable   Columns   Type
//! ------------------------------
//! ID            1-11   Character
//! LATITUDE     13-20   Real
//! LONGITUDE    22-30   Real
//! ELEVATION    32-37   Real
//! STATE        39-40   Character
//! NAME         42-71   Character
//! GSN FLAG     73-75   Character
//! HCN/CRN FLAG 77-79   Character
//! WMO ID       81-85   Character
//! ------------------------------
//! ```
//!
//! The first two characters of ID are the FIPS country code, the third is the
//! network code, and the remaining eight are the station number within that
//! network.

use crate::models::Station;
use crate::readers::RecordParser;
use crate::utils::constants::{
    E7_SCALE, FORMAT_GHCND_STATIONS, GHCND_LAST_UPDATED, GHCND_MISSING_ELEVATION,
    GHCND_STATION_LINE_WIDTH, OPEN_END_DATE, OPEN_START_DATE, UNSET_VALUE_F64,
};
use crate::utils::parse::{float_or_none, parse_float, parse_float_scaled};
use std::ops::Range;
use tracing::trace;

// Zero-based byte ranges.
const ID: Range<usize> = 0..11;
const LATITUDE: Range<usize> = 12..20;
const LONGITUDE: Range<usize> = 21..30;
const ELEVATION: Range<usize> = 31..37;
const STATE: Range<usize> = 38..40;
const NAME: Range<usize> = 41..71;
const WMO_ID: Range<usize> = 80..85;

// TODO: derive the region fields from the FIPS country prefix of ID.
const CONTINENT: &str = "North America";
const META_REGION: &str = "NA";
const REGION_CODE: &str = "US";
const REGION_NAME: &str = "United States";

#[derive(Debug, Clone, Copy, Default)]
pub struct GhcndStationParser;

impl GhcndStationParser {
    pub fn new() -> Self {
        Self
    }
}

impl RecordParser for GhcndStationParser {
    fn format_id(&self) -> &'static str {
        FORMAT_GHCND_STATIONS
    }

    fn expected_width(&self) -> usize {
        GHCND_STATION_LINE_WIDTH
    }

    fn parse_line(&self, line: &str) -> Option<Station> {
        if line.len() != GHCND_STATION_LINE_WIDTH {
            trace!(width = line.len(), "Rejecting GHCN-D station line");
            return None;
        }

        // `get` rejects lines whose multi-byte characters straddle a column.
        let id = line.get(ID)?;
        let latitude = line.get(LATITUDE)?;
        let longitude = line.get(LONGITUDE)?;
        let elevation = line.get(ELEVATION)?;
        let state = line.get(STATE)?;
        let name = line.get(NAME)?;
        let wmo_id = line.get(WMO_ID)?;

        let mut station = Station::empty();

        station.identifiers.ghcn_id = id.trim().to_string();
        station.identifiers.wmo_id = wmo_id.trim().to_string();

        let geo = &mut station.geography;
        geo.lat = parse_float(latitude, 0.0) as f32;
        geo.lng = parse_float(longitude, 0.0) as f32;
        geo.lat_e7 = to_e7(latitude);
        geo.lng_e7 = to_e7(longitude);

        // Meters, truncated. GHCN-D marks missing as -999.9.
        geo.elevation_meters = float_or_none(parse_float(elevation, UNSET_VALUE_F64))
            .filter(|e| *e != GHCND_MISSING_ELEVATION)
            .map(|e| e as i32);

        geo.continent = CONTINENT.to_string();
        geo.meta_region = META_REGION.to_string();
        geo.region_code = REGION_CODE.to_string();
        geo.region_name = REGION_NAME.to_string();

        // US postal code of the state, US stations only.
        geo.subdivision_1_code = state.trim().to_string();

        station.name = name.trim().to_string();

        station.start_date = OPEN_START_DATE.to_string();
        station.end_date = OPEN_END_DATE.to_string();
        station.last_updated = GHCND_LAST_UPDATED.to_string();

        Some(station)
    }
}

fn to_e7(text: &str) -> i32 {
    float_or_none(parse_float_scaled(text, E7_SCALE, UNSET_VALUE_F64))
        .map_or(0, |v| v.round() as i32)
}
