//! Transmission record for a single xmitter report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{raw_to_tenths, tenths_value, to_raw};

/// Identifier of the remote sensor device that sent a transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XmitterId(i32);

impl XmitterId {
    /// Sentinel for a transmission whose sender is not known.
    pub const UNKNOWN: XmitterId = XmitterId(-1);

    /// Create an identifier from its raw value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for XmitterId {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for XmitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One radio transmission from a temperature/humidity xmitter.
///
/// Readings are stored fixed-point as hundredths of a unit, truncated toward
/// zero at construction, and never mutated afterwards. All accessors expose
/// the readings in tenths of a unit; see the crate docs for the scaling
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmission {
    xmitter_id: XmitterId,
    /// Temperature in hundredths of a degree.
    temp_raw: i32,
    /// Relative humidity in hundredths of a percent.
    hum_raw: i32,
}

impl Transmission {
    /// Record a transmission from `xmitter_id` carrying a temperature in
    /// degrees and a relative humidity in percent.
    ///
    /// Both readings are scaled to hundredths and truncated toward zero. No
    /// range validation is performed: any finite value is accepted as-is,
    /// including negative or out-of-physical-range readings.
    #[must_use]
    pub fn new(xmitter_id: XmitterId, temp: f64, hum: f64) -> Self {
        Self {
            xmitter_id,
            temp_raw: to_raw(temp),
            hum_raw: to_raw(hum),
        }
    }

    /// The sender of this transmission.
    #[must_use]
    pub const fn xmitter_id(&self) -> XmitterId {
        self.xmitter_id
    }

    /// Temperature rounded to the nearest tenth of a degree, as a whole
    /// count of tenths.
    ///
    /// Computed as `(raw + 5) / 10` on the stored hundredths. The rounding
    /// is asymmetric for negative readings, which truncation pulls one step
    /// toward zero: 21.34 degrees gives 213 but -21.34 degrees gives -212.
    #[must_use]
    pub fn raw_temp(&self) -> i32 {
        raw_to_tenths(self.temp_raw)
    }

    /// Humidity rounded to the nearest tenth of a percent, as a whole count
    /// of tenths. Same formula and negative-value asymmetry as `raw_temp`.
    #[must_use]
    pub fn raw_hum(&self) -> i32 {
        raw_to_tenths(self.hum_raw)
    }

    /// Temperature in tenths of a degree: the stored hundredths divided by
    /// ten, so a reading of 21.34 comes back as 213.4, not 21.34.
    #[must_use]
    pub fn temp(&self) -> f64 {
        tenths_value(self.temp_raw)
    }

    /// Humidity in tenths of a percent; same scale as `temp`.
    #[must_use]
    pub fn hum(&self) -> f64 {
        tenths_value(self.hum_raw)
    }

    /// Whether this transmission differs from `other` by more than the given
    /// hysteresis on either channel.
    ///
    /// The comparison is strict: a difference exactly equal to the
    /// hysteresis is not a change. Thresholds are expressed in the
    /// tenth-scaled units of `temp`/`hum`.
    #[must_use]
    pub fn changed(&self, other: &Transmission, temp_hys: f64, hum_hys: f64) -> bool {
        (self.temp() - other.temp()).abs() > temp_hys || (self.hum() - other.hum()).abs() > hum_hys
    }
}
