/*
[INPUT]:  HTTP configuration (base URL, timeouts) and credentials
[OUTPUT]: Signed requests dispatched through a configured reqwest client
[POS]:    HTTP layer - core client implementation and request dispatcher
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::auth::{Credentials, HmacSigner};
use crate::http::signature::SignedHeaders;
use crate::http::{Result, RobinhoodError};

/// Base URL for the Robinhood Crypto API
pub const DEFAULT_BASE_URL: &str = "https://trading.robinhood.com/api/v1/crypto/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Robinhood Crypto API
#[derive(Debug)]
pub struct RobinhoodClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    signer: HmacSigner,
}

impl RobinhoodClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| RobinhoodError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            signer: HmacSigner::new(credentials.shared_secret.clone()),
            credentials,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint path relative to the base URL
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Send one signed request and return the parsed JSON response
    ///
    /// `data` is serialized once and the same string is both signed and sent.
    pub async fn dispatch<T>(&self, method: Method, path: &str, data: Option<&T>) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let body = match data {
            Some(data) => Some(serde_json::to_string(data)?),
            None => None,
        };
        self.send_signed(method, path, body).await
    }

    /// Like `dispatch`, but logs the failure and collapses it to `None`
    pub async fn dispatch_or_none<T>(
        &self,
        method: Method,
        path: &str,
        data: Option<&T>,
    ) -> Option<Value>
    where
        T: Serialize + ?Sized,
    {
        match self.dispatch(method, path, data).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path, error = %err, "request failed");
                None
            }
        }
    }

    /// Signed GET without a body
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.send_signed(Method::GET, path, None).await
    }

    /// Signed POST with a JSON body
    pub async fn post<T>(&self, path: &str, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        self.dispatch(Method::POST, path, Some(data)).await
    }

    /// Dispatch and deserialize the response into `R`
    pub(crate) async fn send_json<T, R>(
        &self,
        method: Method,
        path: &str,
        data: Option<&T>,
    ) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = self.dispatch(method, path, data).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn send_signed(&self, method: Method, path: &str, body: Option<String>) -> Result<Value> {
        let timestamp = chrono::Utc::now().timestamp_millis().to_string();
        let payload = body.as_deref().unwrap_or_default();
        let signature = self
            .signer
            .sign(&timestamp, method.as_str(), path, payload);
        let headers = SignedHeaders::new(&self.credentials, signature, timestamp.clone())
            .to_header_map()?;
        let url = self.endpoint_url(path)?;

        debug!(%method, %url, %timestamp, body = payload, "sending request");
        trace!(?headers, "request headers");

        let mut builder = self.http_client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|err| {
            warn!(path, error = %err, "request error");
            RobinhoodError::Transport(err)
        })?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(path, %status, body = %text, "HTTP error response");
            return Err(RobinhoodError::http_error(status, text));
        }

        debug!(path, %status, "request succeeded");
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|err| RobinhoodError::InvalidResponse(format!("{err}: {text}")))
    }
}

/// Parse the base URL, forcing a trailing slash so relative joins keep its path
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(RobinhoodError::Config(format!("base URL cannot be a base: {raw}")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
