/*
[INPUT]:  Environment credentials and request metadata
[OUTPUT]: Credentials and HMAC request signatures
[POS]:    Auth layer - handles Robinhood Crypto API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::{HmacSigner, sign, signing_message};
