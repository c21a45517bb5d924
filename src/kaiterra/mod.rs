mod batch_request;
mod batch_response;
mod client;
mod executor;
mod normalize;

pub use batch_request::{BatchOptions, MAX_BATCH_SIZE, SubRequest, build_batch};
pub use client::{BATCH_ENDPOINT, KaiterraClient};
pub use executor::{HttpExecutor, HttpRequest, ReqwestExecutor};
pub use normalize::normalize;
