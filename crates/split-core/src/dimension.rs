// ABOUTME: Absolute and percentage sizes used by the split container.
// ABOUTME: Resolves percentages against a base measurement before layout math.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A size along the resize axis, either in layout units or relative to a base.
///
/// Percentages carry the number written before the `%` sign, so `"20%"` is
/// `Percent(20.0)`. Malformed percentage text parses to `Percent(NaN)` and the
/// NaN flows through whatever arithmetic consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDimension", into = "RawDimension")]
pub enum Dimension {
    Absolute(f64),
    Percent(f64),
}

impl Dimension {
    /// Parse percentage text such as `"50%"`. The trailing `%` is optional.
    /// The whole number must parse: `"12px%"` is `Percent(NaN)`, not 12.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
        Dimension::Percent(number.trim().parse::<f64>().unwrap_or(f64::NAN))
    }

    pub fn is_percent(&self) -> bool {
        matches!(self, Dimension::Percent(_))
    }

    /// Absolute equivalent of this dimension relative to `base`.
    pub fn resolve(self, base: f64) -> f64 {
        match self {
            Dimension::Absolute(value) => value,
            Dimension::Percent(percent) => percent / 100.0 * base,
        }
    }
}

/// Resolve an optional dimension against `base`.
///
/// Absent stays absent, absolute values pass through, percentages become
/// `percent / 100 * base`.
pub fn convert_dimension(dimension: Option<Dimension>, base: f64) -> Option<f64> {
    dimension.map(|d| d.resolve(base))
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Absolute(0.0)
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Absolute(value)
    }
}

impl From<&str> for Dimension {
    fn from(text: &str) -> Self {
        Dimension::parse(text)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Absolute(value) => write!(f, "{}", value),
            Dimension::Percent(percent) => write!(f, "{}%", percent),
        }
    }
}

/// Wire form: a bare number is absolute, a string is a percentage.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Number(f64),
    Text(String),
}

impl From<RawDimension> for Dimension {
    fn from(raw: RawDimension) -> Self {
        match raw {
            RawDimension::Number(value) => Dimension::Absolute(value),
            RawDimension::Text(text) => Dimension::parse(&text),
        }
    }
}

impl From<Dimension> for RawDimension {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Absolute(value) => RawDimension::Number(value),
            Dimension::Percent(_) => RawDimension::Text(dimension.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_resolves_against_base() {
        for (percent, base) in [(20.0, 100.0), (50.0, 333.0), (0.0, 80.0), (150.0, 10.0)] {
            let resolved = convert_dimension(Some(Dimension::Percent(percent)), base).unwrap();
            assert!((resolved - percent / 100.0 * base).abs() < 1e-9);
        }
    }

    #[test]
    fn absolute_passes_through() {
        for base in [0.0, 10.0, 1e6] {
            assert_eq!(convert_dimension(Some(Dimension::Absolute(42.0)), base), Some(42.0));
        }
    }

    #[test]
    fn absent_stays_absent() {
        assert_eq!(convert_dimension(None, 100.0), None);
    }

    #[test]
    fn parses_percent_text() {
        assert_eq!(Dimension::parse("20%"), Dimension::Percent(20.0));
        assert_eq!(Dimension::parse(" 12.5% "), Dimension::Percent(12.5));
        assert_eq!(Dimension::from("33"), Dimension::Percent(33.0));
    }

    #[test]
    fn malformed_percent_propagates_nan() {
        let dimension = Dimension::parse("wide%");
        assert!(dimension.is_percent());
        assert!(dimension.resolve(100.0).is_nan());
        assert!(Dimension::parse("12px%").resolve(100.0).is_nan());
    }

    #[test]
    fn display_keeps_percent_sign() {
        assert_eq!(Dimension::Percent(50.0).to_string(), "50%");
        assert_eq!(Dimension::Absolute(12.0).to_string(), "12");
    }
}
