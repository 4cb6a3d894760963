//! Log-line emission and parsing for transmission records.
//!
//! A transmission is emitted as one semicolon-delimited text line with two
//! populated fields and an empty trailing field; [`parse_line`] is the
//! inverse. The field layout is documented in the crate docs.

use std::io::{self, Write};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::ParseLineError;
use crate::transmission::Transmission;

/// The populated fields of an emitted log line.
///
/// Both values are the toward-zero truncations of the tenth-scaled float
/// accessors, exactly as they appear on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFields {
    /// Whole tenth-degrees, truncated from `Transmission::temp`.
    pub temp: i32,
    /// Whole tenth-percents, truncated from `Transmission::hum`.
    pub hum: i32,
}

impl Transmission {
    /// Render this transmission as a log line: `<temp>;<hum>;` plus newline.
    ///
    /// Both fields are whole-number truncations of the tenth-scaled
    /// accessors. The humidity tenths digit is computed for the trailing
    /// field, but the line format consumes only the two whole-number values,
    /// so the trailing field stays empty.
    #[must_use]
    pub fn to_line(&self) -> String {
        let temp_whole = self.temp() as i32;
        let hum_whole = self.hum() as i32;
        // Tenths digit of the humidity reading; the line leaves its field empty.
        let _hum_tenths = (self.hum() * 10.0) as i32 % 10;
        format!("{temp_whole};{hum_whole};\n")
    }

    /// Write the log line to `w`.
    ///
    /// # Errors
    /// Returns any error reported by the writer.
    pub fn write_line<W: Write>(&self, w: &mut W) -> io::Result<()> {
        trace!("writing log line for xmitter {}", self.xmitter_id());
        w.write_all(self.to_line().as_bytes())
    }

    /// Write the log line to standard output.
    ///
    /// # Errors
    /// Returns any error reported by standard output.
    pub fn print_line(&self) -> io::Result<()> {
        self.write_line(&mut io::stdout().lock())
    }
}

/// Parse a line as produced by `Transmission::to_line`.
///
/// Accepts the line with or without its trailing newline. The line must
/// carry exactly two populated whole-number fields and the empty trailing
/// field.
///
/// # Errors
/// Returns [`ParseLineError`] when the field count is off, the trailing
/// field is not empty, or a populated field is not a whole number.
pub fn parse_line(line: &str) -> Result<LineFields, ParseLineError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != 3 {
        return Err(ParseLineError::FieldCount { found: fields.len() });
    }
    if !fields[2].is_empty() {
        return Err(ParseLineError::TrailingField {
            text: fields[2].to_string(),
        });
    }
    Ok(LineFields {
        temp: parse_field("temperature", fields[0])?,
        hum: parse_field("humidity", fields[1])?,
    })
}

fn parse_field(field: &'static str, text: &str) -> Result<i32, ParseLineError> {
    text.parse().map_err(|_| ParseLineError::Number {
        field,
        text: text.to_string(),
    })
}
