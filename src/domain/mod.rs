mod aqi_standard;
mod reading;
mod sensor_id;
mod timestamp;
mod unit;

pub use aqi_standard::AqiStandard;
pub use reading::{BatchResult, DataPoint, ParameterReading, SensorSnapshot};
pub use sensor_id::is_valid_sensor_id;
pub use timestamp::parse_timestamp;
pub use unit::Unit;
