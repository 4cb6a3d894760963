//! `Xmission` - Fixed-point transmission records for temperature/humidity xmitters
//!
//! A transmission is one radio report from a remote sensor (a "xmitter"): the
//! sender identifier plus a temperature and a relative humidity reading. The
//! readings are stored as integers scaled to hundredths of a unit, so a record
//! holds no floating-point state and is immutable once constructed.
//!
//! # Features
//! - **Fixed-point storage**: readings kept as `trunc(value * 100)` in an `i32`
//! - **Change detection**: per-channel hysteresis suppresses noise-driven updates
//! - **Log lines**: semicolon-delimited emission with a matching parser
//! - **Plain values**: `Copy` records, serde-serializable, no validation paths
//!
//! # Scaling
//!
//! Readings are stored in hundredths and exposed in tenths. Construction
//! truncates toward zero. The integer accessors round to the nearest tenth
//! with `(raw + 5) / 10`, which is asymmetric for negative readings (the
//! final truncation pulls them one step toward zero). The float accessors
//! divide the stored hundredths by ten, so they return tenth-scaled values,
//! not whole units: a reading of 21.34 comes back as 213.4.
//!
//! | Input 21.34 °C | Value |
//! |----------------|-------|
//! | stored raw     | 2134  |
//! | `raw_temp()`   | 213   |
//! | `temp()`       | 213.4 |
//!
//! Inputs are accepted unvalidated; values beyond the hundredths range of an
//! `i32` saturate at its bounds.
//!
//! # Example
//! ```
//! use xmission::{Transmission, XmitterId, parse_line};
//!
//! let previous = Transmission::new(XmitterId::new(7), 21.3, 55.0);
//! let current = Transmission::new(XmitterId::new(7), 21.5, 55.0);
//!
//! assert_eq!(current.raw_temp(), 215);
//! assert_eq!(current.temp(), 215.0);
//!
//! // 1.5 tenths of temperature hysteresis, 5.0 tenths for humidity.
//! assert!(current.changed(&previous, 1.5, 5.0));
//!
//! let line = current.to_line();
//! assert_eq!(line, "215;550;\n");
//! let fields = parse_line(&line).unwrap();
//! assert_eq!(fields.temp, 215);
//! ```
//!
//! # Line Format
//!
//! One text line per transmission, `;`-delimited, ending in `\n`:
//!
//! | Field | Content |
//! |-------|---------|
//! | 1 | `temp()` truncated to a whole number |
//! | 2 | `hum()` truncated to a whole number |
//! | 3 | empty; the humidity tenths digit is computed but never emitted |
//!
//! The trailing field is part of the format: the tenths digit of the
//! humidity reading is computed alongside the two populated fields, but the
//! line consumes only the first two values. [`parse_line`] requires the
//! trailing field to be empty.
//!
//! # Change Detection
//!
//! [`Transmission::changed`] compares two records channel-by-channel against
//! hysteresis thresholds given in the same tenth-scaled units the float
//! accessors return. The comparison is strict: a difference exactly equal to
//! the threshold is not a change. [`Hysteresis`] names the threshold pair so
//! it can live in configuration.

#![allow(clippy::cast_possible_truncation)]

mod constants;
mod error;
mod hysteresis;
mod line;
mod transmission;


// Re-export public API
pub use error::ParseLineError;
pub use hysteresis::Hysteresis;
pub use line::LineFields;
pub use line::parse_line;
pub use transmission::Transmission;
pub use transmission::XmitterId;
