use thiserror::Error;

#[derive(Error, Debug)]
pub enum KaiterraError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("must specify one of api_key or hmac_secret")]
    MissingCredentials,
    #[error("must specify only one of api_key or hmac_secret")]
    ConflictingCredentials,
    #[error("unable to load the client configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("sensor_ids must contain at least one sensor id")]
    EmptyBatch,
    #[error("sensor_ids is too long: {len} ids given, max length is {max}")]
    BatchTooLarge { len: usize, max: usize },
    #[error("sensor id '{id}' is invalid")]
    InvalidSensorId { id: String },
    #[error("the '{key}' query parameter is reserved, authorization is handled by the client")]
    ReservedQueryKey { key: String },
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("'{value}' is not a timestamp in YYYY-MM-DDTHH:MM:SS[.ffffff]Z format")]
    Timestamp { value: String },
    #[error("'{code}' isn't a known unit")]
    UnknownUnit { code: String },
    #[error("invalid sensor response body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("unexpected batch response: {reason}")]
    UnexpectedResponse { reason: String },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
