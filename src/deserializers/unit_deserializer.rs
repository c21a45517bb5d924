use crate::domain::Unit;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        if let Ok(unit) = Unit::from_code(&value) {
            return Ok(unit);
        }

        match value.to_lowercase().as_str() {
            "unknown" => Ok(Unit::Unknown),
            "count" => Ok(Unit::Count),
            "percent" => Ok(Unit::Percent),
            "degreescelsius" | "celsius" => Ok(Unit::DegreesCelsius),
            "degreesfahrenheit" | "fahrenheit" => Ok(Unit::DegreesFahrenheit),
            "milligramspercubicmeter" => Ok(Unit::MilligramsPerCubicMeter),
            "microgramspercubicmeter" => Ok(Unit::MicrogramsPerCubicMeter),
            "partspermillion" => Ok(Unit::PartsPerMillion),
            "partsperbillion" => Ok(Unit::PartsPerBillion),
            _ => Err(serde::de::Error::custom(format!("invalid unit: {}", value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("C", Unit::DegreesCelsius)]
    #[case("µg/m³", Unit::MicrogramsPerCubicMeter)]
    #[case("DegreesFahrenheit", Unit::DegreesFahrenheit)]
    #[case("fahrenheit", Unit::DegreesFahrenheit)]
    #[case("PartsPerBillion", Unit::PartsPerBillion)]
    fn deserializes_a_code_or_a_name(#[case] value: &str, #[case] expected: Unit) {
        let result = serde_json::from_value::<Unit>(json!(value)).unwrap();
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("kelvin")]
    #[case("")]
    fn fails_for_an_unknown_unit(#[case] value: &str) {
        let result = serde_json::from_value::<Unit>(json!(value));
        assert!(result.is_err());
    }
}
