use crate::utils::constants::{UNSET_VALUE_F64, UNSET_VALUE_STRING};

/// Render a float with a fixed number of decimals, spelling non-finite values
/// as `NaN`, `+Inf` and `-Inf`.
pub fn format_fixed(v: f64, precision: usize) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "+Inf" } else { "-Inf" }.to_string()
    } else {
        format!("{:.*}", precision, v)
    }
}

/// Two decimal rendering that passes the unset sentinel through verbatim.
pub fn float_or_sentinel_string(v: f64) -> String {
    if v == UNSET_VALUE_F64 {
        return UNSET_VALUE_STRING.to_string();
    }
    format_fixed(v, 2)
}

/// Render an optional measurement, using the sentinel for `None`.
pub fn optional_float_string(v: Option<f64>) -> String {
    match v {
        Some(v) => float_or_sentinel_string(v),
        None => UNSET_VALUE_STRING.to_string(),
    }
}

/// Render an optional integer, using the sentinel for `None`.
pub fn optional_int_string<T: std::fmt::Display>(v: Option<T>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => UNSET_VALUE_STRING.to_string(),
    }
}
