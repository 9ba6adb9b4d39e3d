/*
[INPUT]:  Process environment (RH_API_KEY, RH_CLIENT_ID, RH_SHARED_SECRET, RH_ACCOUNT_NUMBER)
[OUTPUT]: Immutable API credentials with placeholder detection
[POS]:    Auth layer - credential loading
[UPDATE]: When adding credential sources or environment variables
*/

use std::env;

use crate::http::{Result, RobinhoodError};

pub const API_KEY_ENV: &str = "RH_API_KEY";
pub const CLIENT_ID_ENV: &str = "RH_CLIENT_ID";
pub const SHARED_SECRET_ENV: &str = "RH_SHARED_SECRET";
pub const ACCOUNT_NUMBER_ENV: &str = "RH_ACCOUNT_NUMBER";

/// Values used when the environment does not provide a credential
pub const PLACEHOLDER_API_KEY: &str = "YOUR_ROBINHOOD_API_KEY";
pub const PLACEHOLDER_CLIENT_ID: &str = "YOUR_ROBINHOOD_CLIENT_ID";
pub const PLACEHOLDER_SHARED_SECRET: &str = "YOUR_ROBINHOOD_SHARED_SECRET";
pub const PLACEHOLDER_ACCOUNT_NUMBER: &str = "YOUR_ROBINHOOD_ACCOUNT_NUMBER";

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub client_id: String,
    pub shared_secret: String,
    pub account_number: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        client_id: impl Into<String>,
        shared_secret: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: client_id.into(),
            shared_secret: shared_secret.into(),
            account_number: account_number.into(),
        }
    }

    /// Read credentials from the environment, falling back to placeholders
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build credentials from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, placeholder: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| placeholder.to_string())
        };

        Self {
            api_key: read(API_KEY_ENV, PLACEHOLDER_API_KEY),
            client_id: read(CLIENT_ID_ENV, PLACEHOLDER_CLIENT_ID),
            shared_secret: read(SHARED_SECRET_ENV, PLACEHOLDER_SHARED_SECRET),
            account_number: read(ACCOUNT_NUMBER_ENV, PLACEHOLDER_ACCOUNT_NUMBER),
        }
    }

    /// Placeholder api key means live calls must be skipped
    pub fn is_configured(&self) -> bool {
        self.api_key != PLACEHOLDER_API_KEY
    }

    pub fn ensure_configured(&self) -> Result<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(RobinhoodError::NotConfigured)
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("client_id", &self.client_id)
            .field("shared_secret", &"<redacted>")
            .field("account_number", &self.account_number)
            .finish()
    }
}
