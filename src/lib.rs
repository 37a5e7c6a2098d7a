#![warn(missing_docs)]
//! Formatting of physical values in engineering / SI-prefix notation.
//!
//! This crate converts a floating-point value into a human-readable string
//! using engineering notation (exponents of ten restricted to multiples of
//! three) or SI unit prefixes (k, M, μ, n, ...), optionally appending a unit
//! symbol. It is intended for printing physical quantities such as voltages
//! or frequencies in conventional engineering style.
//!
//! # Example
//! ```
//! use eng_notation::{engineering_form, si_form};
//!
//! assert_eq!(si_form(15.504e4, "V", 1), "155 kV");
//! assert_eq!(si_form(0.0331, "s", 2), "33.1 ms");
//! assert_eq!(engineering_form(1e6, "Hz", 2), "1E+6 Hz");
//! ```
pub mod notation;
pub mod prefix;
pub mod test_helper;

pub use notation::{engineering_exponent, engineering_form, si_form, NotationMode, QuantityFormatter};
pub use prefix::SiPrefix;
