//! The standard SI unit prefixes and their engineering exponents.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A standard SI unit prefix.
///
/// Each prefix corresponds to an engineering exponent, i.e. a power of ten
/// which is a multiple of three in the range -30..=30. The exponent 0 is
/// represented by [`SiPrefix::Unit`] which has no symbol (a value without
/// prefix, not a value with an empty prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiPrefix {
    /// quecto (10⁻³⁰)
    Quecto,
    /// ronto (10⁻²⁷)
    Ronto,
    /// yocto (10⁻²⁴)
    Yocto,
    /// zepto (10⁻²¹)
    Zepto,
    /// atto (10⁻¹⁸)
    Atto,
    /// femto (10⁻¹⁵)
    Femto,
    /// pico (10⁻¹²)
    Pico,
    /// nano (10⁻⁹)
    Nano,
    /// micro (10⁻⁶)
    Micro,
    /// milli (10⁻³)
    Milli,
    /// no prefix (10⁰)
    Unit,
    /// kilo (10³)
    Kilo,
    /// mega (10⁶)
    Mega,
    /// giga (10⁹)
    Giga,
    /// tera (10¹²)
    Tera,
    /// peta (10¹⁵)
    Peta,
    /// exa (10¹⁸)
    Exa,
    /// zetta (10²¹)
    Zetta,
    /// yotta (10²⁴)
    Yotta,
    /// ronna (10²⁷)
    Ronna,
    /// quetta (10³⁰)
    Quetta,
}

impl SiPrefix {
    /// Return the SI prefix for a given engineering exponent.
    ///
    /// Returns `None` if the exponent is not a multiple of three or lies
    /// outside the covered range of -30..=30.
    ///
    /// # Example
    /// ```
    /// use eng_notation::SiPrefix;
    ///
    /// assert_eq!(SiPrefix::from_exponent(3), Some(SiPrefix::Kilo));
    /// assert_eq!(SiPrefix::from_exponent(0), Some(SiPrefix::Unit));
    /// assert_eq!(SiPrefix::from_exponent(33), None);
    /// ```
    #[must_use]
    pub const fn from_exponent(exponent: i32) -> Option<Self> {
        match exponent {
            -30 => Some(Self::Quecto),
            -27 => Some(Self::Ronto),
            -24 => Some(Self::Yocto),
            -21 => Some(Self::Zepto),
            -18 => Some(Self::Atto),
            -15 => Some(Self::Femto),
            -12 => Some(Self::Pico),
            -9 => Some(Self::Nano),
            -6 => Some(Self::Micro),
            -3 => Some(Self::Milli),
            0 => Some(Self::Unit),
            3 => Some(Self::Kilo),
            6 => Some(Self::Mega),
            9 => Some(Self::Giga),
            12 => Some(Self::Tera),
            15 => Some(Self::Peta),
            18 => Some(Self::Exa),
            21 => Some(Self::Zetta),
            24 => Some(Self::Yotta),
            27 => Some(Self::Ronna),
            30 => Some(Self::Quetta),
            _ => None,
        }
    }
    /// Return the engineering exponent of this prefix (always a multiple of three).
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        match self {
            Self::Quecto => -30,
            Self::Ronto => -27,
            Self::Yocto => -24,
            Self::Zepto => -21,
            Self::Atto => -18,
            Self::Femto => -15,
            Self::Pico => -12,
            Self::Nano => -9,
            Self::Micro => -6,
            Self::Milli => -3,
            Self::Unit => 0,
            Self::Kilo => 3,
            Self::Mega => 6,
            Self::Giga => 9,
            Self::Tera => 12,
            Self::Peta => 15,
            Self::Exa => 18,
            Self::Zetta => 21,
            Self::Yotta => 24,
            Self::Ronna => 27,
            Self::Quetta => 30,
        }
    }
    /// Return the short display symbol of this prefix.
    ///
    /// [`SiPrefix::Unit`] returns `None` since a value with exponent 0 is
    /// written without any prefix.
    #[must_use]
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Quecto => Some("q"),
            Self::Ronto => Some("r"),
            Self::Yocto => Some("y"),
            Self::Zepto => Some("z"),
            Self::Atto => Some("a"),
            Self::Femto => Some("f"),
            Self::Pico => Some("p"),
            Self::Nano => Some("n"),
            Self::Micro => Some("\u{03BC}"), // greek mu as unicode code point
            Self::Milli => Some("m"),
            Self::Unit => None,
            Self::Kilo => Some("k"),
            Self::Mega => Some("M"),
            Self::Giga => Some("G"),
            Self::Tera => Some("T"),
            Self::Peta => Some("P"),
            Self::Exa => Some("E"),
            Self::Zetta => Some("Z"),
            Self::Yotta => Some("Y"),
            Self::Ronna => Some("R"),
            Self::Quetta => Some("Q"),
        }
    }
    /// Return the conversion factor 10^exponent of this prefix.
    #[must_use]
    pub fn factor(&self) -> f64 {
        f64::powi(10.0, self.exponent())
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol().unwrap_or(""))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    #[test]
    fn from_exponent() {
        assert_eq!(SiPrefix::from_exponent(-30), Some(SiPrefix::Quecto));
        assert_eq!(SiPrefix::from_exponent(-24), Some(SiPrefix::Yocto));
        assert_eq!(SiPrefix::from_exponent(-6), Some(SiPrefix::Micro));
        assert_eq!(SiPrefix::from_exponent(0), Some(SiPrefix::Unit));
        assert_eq!(SiPrefix::from_exponent(3), Some(SiPrefix::Kilo));
        assert_eq!(SiPrefix::from_exponent(30), Some(SiPrefix::Quetta));
        assert_eq!(SiPrefix::from_exponent(1), None);
        assert_eq!(SiPrefix::from_exponent(-5), None);
        assert_eq!(SiPrefix::from_exponent(33), None);
        assert_eq!(SiPrefix::from_exponent(-33), None);
    }
    #[test]
    fn exponent_roundtrip() {
        for exponent in (-30..=30).step_by(3) {
            let prefix = SiPrefix::from_exponent(exponent).unwrap();
            assert_eq!(prefix.exponent(), exponent);
        }
    }
    #[test]
    fn symbol() {
        assert_eq!(SiPrefix::Quecto.symbol(), Some("q"));
        assert_eq!(SiPrefix::Yocto.symbol(), Some("y"));
        assert_eq!(SiPrefix::Micro.symbol(), Some("\u{03BC}"));
        assert_eq!(SiPrefix::Milli.symbol(), Some("m"));
        assert_eq!(SiPrefix::Unit.symbol(), None);
        assert_eq!(SiPrefix::Kilo.symbol(), Some("k"));
        assert_eq!(SiPrefix::Quetta.symbol(), Some("Q"));
    }
    #[test]
    fn symbols_unique() {
        let mut symbols: Vec<&str> = (-30..=30)
            .step_by(3)
            .filter_map(|e| SiPrefix::from_exponent(e).unwrap().symbol())
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 20);
    }
    #[test]
    fn factor() {
        assert_relative_eq!(SiPrefix::Milli.factor(), 0.001);
        assert_relative_eq!(SiPrefix::Unit.factor(), 1.0);
        assert_relative_eq!(SiPrefix::Mega.factor(), 1_000_000.0);
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", SiPrefix::Kilo), "k");
        assert_eq!(format!("{}", SiPrefix::Micro), "μ");
        assert_eq!(format!("{}", SiPrefix::Unit), "");
    }
}
