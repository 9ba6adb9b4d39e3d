/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for robinhood-crypto-adapter tests

#![allow(dead_code)]

use robinhood_crypto_adapter::{ClientConfig, Credentials, RobinhoodClient};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_SECRET: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials that count as configured
pub fn test_credentials() -> Credentials {
    Credentials::new("test-api-key", "test-client-id", TEST_SECRET, "123")
}

/// Client pointed at the given base URL with short timeouts
pub fn client_for(base_url: impl Into<String>) -> RobinhoodClient {
    let config = ClientConfig {
        base_url: base_url.into(),
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
    };
    RobinhoodClient::with_config(test_credentials(), config).expect("client should build")
}

/// Base URL of a local port with nothing listening on it
pub fn closed_server_uri() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}")
}
