use crate::domain::Unit;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(PartialEq, Debug, Clone)]
pub struct DataPoint {
    /// Time at which the value was measured.
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    /// Only present when an AQI standard was requested and applies to the parameter.
    pub aqi: Option<i64>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct ParameterReading {
    pub unit: Unit,
    /// Model of the sub-sensor that captured the reading, e.g. `km102`.
    pub source: Option<String>,
    pub points: Vec<DataPoint>,
}

/// Readings of a single sensor, keyed by parameter name (`rpm25c`, `rhumid`, ...).
pub type SensorSnapshot = HashMap<String, ParameterReading>;

/// One entry per requested sensor, in request order. Sensors that don't exist or
/// never reported any data are `None`.
pub type BatchResult = Vec<Option<SensorSnapshot>>;
