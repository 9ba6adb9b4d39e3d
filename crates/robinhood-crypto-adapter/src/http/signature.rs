/*
[INPUT]:  Credentials, timestamp and computed signature
[OUTPUT]: Authentication header map attached to every request
[POS]:    HTTP layer - request signing headers for authenticated endpoints
[UPDATE]: When changing header names or header format
*/

// Header names are illustrative and still need checking against provider documentation.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::auth::Credentials;
use crate::http::{Result, RobinhoodError};

pub const API_KEY_HEADER: &str = "x-robinhood-api-key";
pub const CLIENT_ID_HEADER: &str = "x-robinhood-client-id";
pub const SIGNATURE_HEADER: &str = "x-robinhood-signature";
pub const TIMESTAMP_HEADER: &str = "x-robinhood-timestamp";

const JSON_MIME: &str = "application/json";

/// Authentication values for one signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub api_key: String,
    pub client_id: String,
    pub signature: String,
    pub timestamp: String,
}

impl SignedHeaders {
    pub fn new(credentials: &Credentials, signature: String, timestamp: String) -> Self {
        Self {
            api_key: credentials.api_key.clone(),
            client_id: credentials.client_id.clone(),
            signature,
            timestamp,
        }
    }

    /// Full header set: content negotiation plus the four auth headers
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(6);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));
        insert(&mut headers, API_KEY_HEADER, &self.api_key)?;
        insert(&mut headers, CLIENT_ID_HEADER, &self.client_id)?;
        insert(&mut headers, SIGNATURE_HEADER, &self.signature)?;
        insert(&mut headers, TIMESTAMP_HEADER, &self.timestamp)?;
        Ok(headers)
    }
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value)
        .map_err(|_| RobinhoodError::Config(format!("invalid value for header {name}")))?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(api_key: &str) -> SignedHeaders {
        let credentials = Credentials::new(api_key, "client-1", "secret", "123");
        SignedHeaders::new(&credentials, "c2lnbmF0dXJl".into(), "1700000000000".into())
    }

    #[test]
    fn test_header_map_contains_all_headers() {
        let map = headers("key-1").to_header_map().unwrap();

        assert_eq!(map.len(), 6);
        assert_eq!(map[CONTENT_TYPE], "application/json");
        assert_eq!(map[ACCEPT], "application/json");
        assert_eq!(map[API_KEY_HEADER], "key-1");
        assert_eq!(map[CLIENT_ID_HEADER], "client-1");
        assert_eq!(map[SIGNATURE_HEADER], "c2lnbmF0dXJl");
        assert_eq!(map[TIMESTAMP_HEADER], "1700000000000");
    }

    #[test]
    fn test_invalid_header_value_is_config_error() {
        let err = headers("bad\nkey").to_header_map().unwrap_err();
        assert!(matches!(err, RobinhoodError::Config(_)));
    }
}
