/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod signature;
pub mod trading;

pub use error::{Result, RobinhoodError};
pub use signature::SignedHeaders;

pub use client::{ClientConfig, DEFAULT_BASE_URL, RobinhoodClient};
pub use trading::{ORDERS_PATH, holdings_path};
