//! Named change thresholds for transmission comparison.

use serde::{Deserialize, Serialize};

use crate::transmission::Transmission;

/// Hysteresis thresholds below which a change in reading is ignored.
///
/// A named carrier for the two `Transmission::changed` parameters, so that
/// thresholds can live in configuration. Both values are in the tenth-scaled
/// units of `Transmission::temp` and `Transmission::hum`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hysteresis {
    /// Threshold for the temperature channel.
    pub temperature: f64,
    /// Threshold for the humidity channel.
    pub humidity: f64,
}

impl Hysteresis {
    /// Zero on both channels: any nonzero difference is a change.
    pub const ZERO: Hysteresis = Hysteresis {
        temperature: 0.0,
        humidity: 0.0,
    };

    /// Create thresholds for the temperature and humidity channels.
    #[must_use]
    pub const fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// Whether `current` differs from `previous` by more than these
    /// thresholds on either channel (strict comparison).
    #[must_use]
    pub fn detects(&self, current: &Transmission, previous: &Transmission) -> bool {
        current.changed(previous, self.temperature, self.humidity)
    }
}
