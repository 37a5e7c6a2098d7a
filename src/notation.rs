//! Engineering-notation rendering of (physical) values.
//!
//! A value is split into a mantissa with magnitude in [1, 1000) and an
//! engineering exponent (a multiple of three). The exponent is then either
//! replaced by an SI unit prefix (see [`SiPrefix`]) or written explicitly
//! (e.g. `1E+6`), followed by an optional unit symbol.
use crate::prefix::SiPrefix;
use log::warn;
use num::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Return the engineering exponent of a given value.
///
/// The result is the largest multiple of three which is smaller than or equal
/// to the order of magnitude of the value. For a value of exactly zero, 0 is
/// returned.
///
/// # Example
/// ```
/// use eng_notation::engineering_exponent;
///
/// assert_eq!(engineering_exponent(0.0), 0);
/// assert_eq!(engineering_exponent(0.1), -3); // could be written as 100e-3
/// assert_eq!(engineering_exponent(1010.0), 3); // could be written as 1.01e3
/// ```
#[must_use]
pub fn engineering_exponent(value: f64) -> i32 {
    if value.is_zero() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let mut exponent = (f64::log10(value.abs()).floor()) as i32;
    if exponent.is_negative() {
        exponent -= 2;
    }
    (exponent / 3) * 3
}

/// Rendering mode of a [`QuantityFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotationMode {
    /// Replace the exponent with an SI unit prefix (e.g. `2.5 kV`).
    ///
    /// Exponents outside the prefix table range of -30..=30 fall back to
    /// [`NotationMode::Exponent`] rendering.
    SiPrefix,
    /// Write the exponent explicitly (e.g. `2.5E+3 V`).
    Exponent,
}

impl Display for NotationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::SiPrefix => "SI prefix",
            Self::Exponent => "engineering exponent",
        };
        write!(f, "{msg}")
    }
}

/// Configuration for rendering values in engineering notation.
///
/// The default formatter uses SI prefixes, two decimal places and no unit
/// symbol. For one-off formatting the free functions [`si_form`] and
/// [`engineering_form`] are more convenient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityFormatter {
    unit: String,
    decimal_places: usize,
    mode: NotationMode,
}

impl Default for QuantityFormatter {
    fn default() -> Self {
        Self {
            unit: String::new(),
            decimal_places: 2,
            mode: NotationMode::SiPrefix,
        }
    }
}

impl QuantityFormatter {
    /// Create a new formatter with the given mode, unit symbol and number of
    /// decimal places the mantissa is rounded to.
    #[must_use]
    pub fn new(mode: NotationMode, unit: &str, decimal_places: usize) -> Self {
        Self {
            unit: unit.to_owned(),
            decimal_places,
            mode,
        }
    }
    /// Format a value according to this configuration.
    ///
    /// The mantissa is rounded to the configured number of decimal places and
    /// trailing zeros are stripped. If rounding pushes the mantissa magnitude
    /// to 1000, the value is re-normalized to the next higher exponent. A
    /// non-finite value is rendered as `nan` / `inf` / `-inf`.
    ///
    /// # Example
    /// ```
    /// use eng_notation::{NotationMode, QuantityFormatter};
    ///
    /// let formatter = QuantityFormatter::new(NotationMode::SiPrefix, "V", 2);
    /// assert_eq!(formatter.format(2500.0), "2.5 kV");
    /// assert_eq!(formatter.format(0.0), "0 V");
    /// ```
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let formatted = if value.is_finite() {
            self.format_finite(value)
        } else if value.is_nan() {
            format!("nan {}", self.unit)
        } else if value == f64::INFINITY {
            format!("inf {}", self.unit)
        } else {
            format!("-inf {}", self.unit)
        };
        if self.unit.is_empty() {
            formatted.trim_end().to_owned()
        } else {
            formatted
        }
    }
    fn format_finite(&self, value: f64) -> String {
        let mut exponent = engineering_exponent(value);
        let mut mantissa = round_to(value / f64::powi(10.0, exponent), self.decimal_places);
        if mantissa.abs() >= 1000.0 {
            // rounding hit the upper boundary, e.g. 999.9 at 0 decimal places
            exponent += 3;
            mantissa = round_to(value / f64::powi(10.0, exponent), self.decimal_places);
        }
        if mantissa.is_zero() {
            // avoid rendering negative zero as "-0"
            mantissa = 0.0;
        }
        let text = format!("{mantissa:.prec$}", prec = self.decimal_places);
        let mantissa = strip_trailing_zeros(&text);
        match self.mode {
            NotationMode::SiPrefix => match SiPrefix::from_exponent(exponent) {
                Some(prefix) => match prefix.symbol() {
                    Some(symbol) => format!("{mantissa} {symbol}{}", self.unit),
                    None => format!("{mantissa} {}", self.unit),
                },
                None => {
                    warn!("exponent {exponent} outside the SI prefix range, falling back to engineering notation");
                    self.exponent_form(mantissa, exponent)
                }
            },
            NotationMode::Exponent => self.exponent_form(mantissa, exponent),
        }
    }
    fn exponent_form(&self, mantissa: &str, exponent: i32) -> String {
        match exponent {
            0 => format!("{mantissa} {}", self.unit),
            e if e > 0 => format!("{mantissa}E+{e} {}", self.unit),
            e => format!("{mantissa}E{e} {}", self.unit),
        }
    }
}

/// Format a value using an SI unit prefix (e.g. `155 kV`).
///
/// The mantissa is rounded to `decimal_places` and trailing zeros are
/// stripped. If the engineering exponent of the value lies outside the prefix
/// table range of -30..=30, the output falls back to [`engineering_form`].
///
/// # Example
/// ```
/// use eng_notation::si_form;
///
/// assert_eq!(si_form(15.504e4, "V", 1), "155 kV");
/// assert_eq!(si_form(0.25, "", 2), "250 m");
/// assert_eq!(si_form(0.0, "", 2), "0");
/// ```
#[must_use]
pub fn si_form(value: f64, unit: &str, decimal_places: usize) -> String {
    QuantityFormatter::new(NotationMode::SiPrefix, unit, decimal_places).format(value)
}

/// Format a value with an explicit engineering exponent (e.g. `1E+6 Hz`).
///
/// The exponent sign is always written for positive exponents; an exponent of
/// zero is omitted entirely.
///
/// # Example
/// ```
/// use eng_notation::engineering_form;
///
/// assert_eq!(engineering_form(1e6, "Hz", 2), "1E+6 Hz");
/// assert_eq!(engineering_form(0.0042, "A", 2), "4.2E-3 A");
/// assert_eq!(engineering_form(42.0, "", 2), "42");
/// ```
#[must_use]
pub fn engineering_form(value: f64, unit: &str, decimal_places: usize) -> String {
    QuantityFormatter::new(NotationMode::Exponent, unit, decimal_places).format(value)
}

fn round_to(value: f64, decimal_places: usize) -> f64 {
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_possible_wrap)]
    let scale = f64::powi(10.0, decimal_places as i32);
    (value * scale).round() / scale
}

fn strip_trailing_zeros(mantissa: &str) -> &str {
    if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    }
}
