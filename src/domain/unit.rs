use crate::domain::Unit::*;
use crate::error::FormatError;
use std::fmt::Display;
use std::str::FromStr;

/// Units in which sensor values are reported.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Unit {
    Unknown,
    Count,
    Percent,
    DegreesCelsius,
    DegreesFahrenheit,
    MilligramsPerCubicMeter,
    MicrogramsPerCubicMeter,
    PartsPerMillion,
    PartsPerBillion,
}

impl Unit {
    /// The short code used on the wire, e.g. `µg/m³`.
    pub fn code(&self) -> &'static str {
        match self {
            Unknown => "?",
            Count => "x",
            Percent => "%",
            DegreesCelsius => "C",
            DegreesFahrenheit => "F",
            MilligramsPerCubicMeter => "mg/m³",
            MicrogramsPerCubicMeter => "µg/m³",
            PartsPerMillion => "ppm",
            PartsPerBillion => "ppb",
        }
    }

    pub fn from_code(code: &str) -> Result<Unit, FormatError> {
        Unit::all()
            .into_iter()
            .find(|unit| unit.code() == code)
            .ok_or_else(|| FormatError::UnknownUnit { code: code.to_string() })
    }

    pub fn all() -> [Unit; 9] {
        [
            Unknown,
            Count,
            Percent,
            DegreesCelsius,
            DegreesFahrenheit,
            MilligramsPerCubicMeter,
            MicrogramsPerCubicMeter,
            PartsPerMillion,
            PartsPerBillion,
        ]
    }
}

impl FromStr for Unit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_code(s)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
