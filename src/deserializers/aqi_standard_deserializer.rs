use crate::domain::AqiStandard;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for AqiStandard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        match value.to_lowercase().as_str() {
            "us" | "usa" => Ok(AqiStandard::Usa),
            "cn" | "china" => Ok(AqiStandard::China),
            "in" | "india" => Ok(AqiStandard::India),
            _ => Err(serde::de::Error::custom(format!("invalid AQI standard: {}", value))),
        }
    }
}
