//! Client for the Kaiterra REST API, retrieving the latest readings of Laser Eggs and Sensedges.

mod client_config;
mod deserializers;
mod domain;
mod error;
mod kaiterra;

pub use client_config::{ClientConfig, ClientConfigBuilder, Credentials, DEFAULT_BASE_URL};
pub use domain::{AqiStandard, BatchResult, DataPoint, ParameterReading, SensorSnapshot, Unit, is_valid_sensor_id, parse_timestamp};
pub use error::{ConfigError, FormatError, InputError, KaiterraError, TransportError};
pub use kaiterra::{
    BATCH_ENDPOINT, BatchOptions, HttpExecutor, HttpRequest, KaiterraClient, MAX_BATCH_SIZE, ReqwestExecutor, SubRequest, build_batch, normalize,
};
