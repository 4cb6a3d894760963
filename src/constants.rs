//! Internal constants and scaling helpers for transmission readings.

/// Hundredths per physical unit: readings are stored as `trunc(value * 100)`.
pub(crate) const RAW_PER_UNIT: f64 = 100.0;

/// Hundredths per tenth of a unit, the divisor of both accessor forms.
pub(crate) const RAW_PER_TENTH: i32 = 10;

/// Bias added before dividing by `RAW_PER_TENTH` to round to the nearest tenth.
pub(crate) const TENTH_ROUND_BIAS: i32 = 5;

/// Scale a physical reading to raw hundredths, truncating toward zero.
///
/// No range validation: out-of-range and non-finite inputs saturate per
/// `as`-cast semantics.
#[inline]
pub(crate) fn to_raw(value: f64) -> i32 {
    (value * RAW_PER_UNIT) as i32
}

/// Round raw hundredths to the nearest tenth via `(raw + 5) / 10`.
///
/// Integer division truncates toward zero, so the rounding is asymmetric for
/// negative inputs: 2134 becomes 213 while -2134 becomes -212. The sum is
/// widened to `i64` so a raw saturated at the `i32` bounds cannot overflow;
/// the quotient always fits an `i32`.
#[inline]
pub(crate) fn raw_to_tenths(raw: i32) -> i32 {
    ((i64::from(raw) + i64::from(TENTH_ROUND_BIAS)) / i64::from(RAW_PER_TENTH)) as i32
}

/// Raw hundredths divided by ten: the reading expressed in tenths of a unit.
#[inline]
pub(crate) fn tenths_value(raw: i32) -> f64 {
    f64::from(raw) / f64::from(RAW_PER_TENTH)
}
