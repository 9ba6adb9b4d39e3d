/*
[INPUT]:  Shared secret, timestamp, HTTP method, path and request body
[OUTPUT]: Base64-encoded HMAC-SHA256 request signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or message layout
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical message covered by the signature
///
/// Format: "{timestamp}{METHOD}{path}{body}" (illustrative, not verified against provider docs)
pub fn signing_message(timestamp: &str, method: &str, path: &str, body: &str) -> String {
    format!("{timestamp}{}{path}{body}", method.to_uppercase())
}

/// Sign a request with the shared secret
///
/// Returns the raw 32-byte digest encoded with the standard base64 alphabet.
pub fn sign(secret: &str, timestamp: &str, method: &str, path: &str, body: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(signing_message(timestamp, method, path, body).as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// HMAC-SHA256 signer bound to one shared secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: String,
}

impl HmacSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a single request
    pub fn sign(&self, timestamp: &str, method: &str, path: &str, body: &str) -> String {
        sign(&self.secret, timestamp, method, path, body)
    }

    /// Check a signature produced for the given request parts
    pub fn verify(
        &self,
        signature: &str,
        timestamp: &str,
        method: &str,
        path: &str,
        body: &str,
    ) -> bool {
        let Ok(expected) = BASE64.decode(signature) else {
            return false;
        };
        let Ok(mut mac) = HmacSha256::new_from_slice(self.secret.as_bytes()) else {
            return false;
        };
        mac.update(signing_message(timestamp, method, path, body).as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_message_layout() {
        assert_eq!(
            signing_message("1700000000000", "post", "trading/orders/", r#"{"a":"b"}"#),
            r#"1700000000000POSTtrading/orders/{"a":"b"}"#
        );
        assert_eq!(
            signing_message("1", "get", "trading/accounts/1/", ""),
            "1GETtrading/accounts/1/"
        );
    }

    #[test]
    fn test_sign_known_vector() {
        let signature = sign(
            "test-secret",
            "1700000000000",
            "GET",
            "trading/accounts/123/",
            "",
        );
        assert_eq!(signature, "NELb9WH+fHUr15L+4ZeuJTKlywkTPRjTBznes3pPNO8=");
    }

    #[test]
    fn test_signer_verify() {
        let signer = HmacSigner::new("test-secret");
        let signature = signer.sign("1700000000000", "POST", "trading/orders/", "{}");
        assert!(signer.verify(&signature, "1700000000000", "POST", "trading/orders/", "{}"));
        assert!(!signer.verify(&signature, "1700000000001", "POST", "trading/orders/", "{}"));
        assert!(!signer.verify("not base64!", "1700000000000", "POST", "trading/orders/", "{}"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = HmacSigner::new("super-secret");
        let debug = format!("{signer:?}");
        assert!(!debug.contains("super-secret"));
    }
}
