//! Satoshi/coin conversions and fixed-decimal formatting.
//!
//! Daemon RPC amounts are JSON numbers denominated in whole coins; these
//! helpers move between that representation and integer satoshis.

use bitcoin::SignedAmount;

/// Satoshis per coin.
pub const SATOSHI_PER_COIN: f64 = 100_000_000.0;

// Relative distance below which a scaled value is treated as the integer it
// is closest to. Covers the error of one multiplication plus the parse error
// of the decimal literal the caller started from.
const SNAP_EPSILON: f64 = 4.0 * f64::EPSILON;

/// Convert a satoshi amount into coin units.
///
/// Fractional satoshis are rounded away first, so the result always has at
/// most 8 decimals: `to_coin_units(310000.0 / 53.0) == 0.00005849`.
pub fn to_coin_units(satoshi: f64) -> f64 {
    satoshi.round() / SATOSHI_PER_COIN
}

/// Convert a coin amount into satoshis, rounding half away from zero.
pub fn to_satoshi(coin: f64) -> i64 {
    (coin * SATOSHI_PER_COIN).round() as i64
}

/// Convert a coin amount into a typed [`SignedAmount`].
pub fn to_signed_amount(coin: f64) -> SignedAmount {
    SignedAmount::from_sat(to_satoshi(coin))
}

/// Render `value` with exactly `precision` fractional digits, truncating
/// toward zero instead of rounding.
///
/// The digits are produced from an integer number of `10^-precision` units,
/// so binary floating-point noise never leaks into the output:
/// `to_fixed(1.23456789, 8) == "1.23456789"`. NaN and infinities are
/// spelled out (`"NaN"`, `"inf"`, `"-inf"`).
pub fn to_fixed(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scaled = value * 10f64.powi(precision as i32);
    let nearest = scaled.round();
    let units = if (scaled - nearest).abs() <= scaled.abs() * SNAP_EPSILON {
        nearest
    } else {
        scaled.trunc()
    };

    // Too many units for i128; truncate the exact decimal expansion instead.
    if !units.is_finite() || units.abs() >= I128_LIMIT {
        return truncate_exact(value, precision as usize);
    }

    let units = units as i128;
    let sign = if units < 0 { "-" } else { "" };
    let digits = units.unsigned_abs().to_string();

    if precision == 0 {
        return format!("{sign}{digits}");
    }

    let precision = precision as usize;
    let padded = format!("{digits:0>width$}", width = precision + 1);
    let (whole, fraction) = padded.split_at(padded.len() - precision);
    format!("{sign}{whole}.{fraction}")
}

/// 2^127; whole floats below it in magnitude convert to `i128` exactly.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Longest fractional part of an `f64` written out in decimal.
const MAX_EXACT_FRACTION_DIGITS: usize = 1074;

/// Truncate `value` from its exact decimal expansion.
fn truncate_exact(value: f64, precision: usize) -> String {
    let exact = format!("{value:.digits$}", digits = MAX_EXACT_FRACTION_DIGITS);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    if precision == 0 {
        return whole.to_owned();
    }
    let kept = &fraction[..precision.min(fraction.len())];
    format!("{whole}.{kept:0<precision$}")
}
