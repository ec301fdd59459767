//! Lenient numeric parsing for untrusted fixed-width source text.
//!
//! Every function here degrades to a caller supplied default instead of
//! returning an error, so one noisy field never aborts a batch. Callers
//! normally pass the unset sentinel as the default.

use crate::utils::constants::{UNSET_VALUE, UNSET_VALUE_F64};

/// Parse a base-10 signed integer, returning `def` when the trimmed text is
/// not a plain integer (scientific notation, stray characters, overflow).
pub fn parse_int(s: &str, def: i64) -> i64 {
    s.trim().parse::<i64>().unwrap_or(def)
}

/// Parse an integer and accept it only when it lies within `[min, max]`.
///
/// A parsed value equal to `def` is returned as is without a bounds check,
/// and an empty range (`min > max`) always yields `def`.
pub fn parse_int_bounded(s: &str, min: i64, max: i64, def: i64) -> i64 {
    let i = parse_int(s, def);
    if i == def {
        return def;
    }

    if !(min..=max).contains(&i) {
        return def;
    }

    i
}

/// Parse an integer and multiply it by `scale`.
///
/// The product is converted back with a saturating cast, so an infinite
/// product clamps to `i64::MIN` or `i64::MAX` (a native x86-64 conversion
/// would give `i64::MIN` for both). A NaN product maps to `i64::MIN`.
pub fn parse_int_scaled(s: &str, scale: f64, def: i64) -> i64 {
    let i = parse_int(s, def);
    if i == def {
        return def;
    }

    let scaled = i as f64 * scale;
    if scaled.is_nan() {
        return i64::MIN;
    }
    scaled as i64
}

/// Parse a decimal or scientific float. `NaN`, `Inf`, `+Inf` and `-Inf` are
/// accepted as their IEEE-754 values; a finite literal too large for `f64`
/// (`1e400`) is a failure and yields `def`.
pub fn parse_float(s: &str, def: f64) -> f64 {
    let t = s.trim();
    match t.parse::<f64>() {
        Ok(f) if !f.is_infinite() || is_inf_literal(t) => f,
        _ => def,
    }
}

fn is_inf_literal(t: &str) -> bool {
    let unsigned = t.strip_prefix(['+', '-']).unwrap_or(t);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parse a float and accept it only when it lies within `[min, max]`.
///
/// Same default and empty range rules as [`parse_int_bounded`]. NaN is never
/// inside a range.
pub fn parse_float_bounded(s: &str, min: f64, max: f64, def: f64) -> f64 {
    let f = parse_float(s, def);
    if f == def {
        return def;
    }

    if !(min..=max).contains(&f) {
        return def;
    }

    f
}

/// Parse a float and multiply it by `scale`, following IEEE-754 for
/// non-finite scales.
pub fn parse_float_scaled(s: &str, scale: f64, def: f64) -> f64 {
    let f = parse_float(s, def);
    if f == def {
        return def;
    }

    f * scale
}

/// Map the integer sentinel to `None`.
pub fn int_or_none(v: i64) -> Option<i64> {
    (v != UNSET_VALUE).then_some(v)
}

/// Map the float sentinel to `None`.
pub fn float_or_none(v: f64) -> Option<f64> {
    (v != UNSET_VALUE_F64).then_some(v)
}
