/*
[INPUT]:  Fixed secrets, timestamps, methods, paths and bodies
[OUTPUT]: Test results for request signing
[POS]:    Integration tests - HMAC signer
[UPDATE]: When signing algorithm or message layout changes
*/

mod common;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use common::TEST_SECRET;
use robinhood_crypto_adapter::{HmacSigner, sign};
use rstest::rstest;

const TIMESTAMP: &str = "1700000000000";
const PATH: &str = "trading/accounts/123/";

#[test]
fn test_known_signature_fixture() {
    // base64(HMAC_SHA256("test-secret", "1700000000000GETtrading/accounts/123/"))
    assert_eq!(
        sign(TEST_SECRET, TIMESTAMP, "GET", PATH, ""),
        "NELb9WH+fHUr15L+4ZeuJTKlywkTPRjTBznes3pPNO8="
    );
}

#[test]
fn test_known_signature_with_body() {
    assert_eq!(
        sign(
            TEST_SECRET,
            TIMESTAMP,
            "POST",
            "trading/orders/",
            r#"{"instrument_id":"btc"}"#
        ),
        "N3cdLMIiVeU8w/SNWQZFAjnv8AVRZLwU+8i/jjNqghU="
    );
}

#[test]
fn test_sign_is_deterministic() {
    let first = sign(TEST_SECRET, TIMESTAMP, "POST", "trading/orders/", "{}");
    let second = sign(TEST_SECRET, TIMESTAMP, "POST", "trading/orders/", "{}");
    assert_eq!(first, second);
}

#[rstest]
#[case("get")]
#[case("Get")]
#[case("gEt")]
fn test_method_is_case_insensitive(#[case] method: &str) {
    assert_eq!(
        sign(TEST_SECRET, TIMESTAMP, method, PATH, ""),
        sign(TEST_SECRET, TIMESTAMP, "GET", PATH, "")
    );
}

#[rstest]
#[case("other-secret", TIMESTAMP, "GET", PATH, "")]
#[case(TEST_SECRET, "1700000000001", "GET", PATH, "")]
#[case(TEST_SECRET, TIMESTAMP, "POST", PATH, "")]
#[case(TEST_SECRET, TIMESTAMP, "GET", "trading/accounts/124/", "")]
#[case(TEST_SECRET, TIMESTAMP, "GET", PATH, "{}")]
fn test_any_changed_input_changes_signature(
    #[case] secret: &str,
    #[case] timestamp: &str,
    #[case] method: &str,
    #[case] path: &str,
    #[case] body: &str,
) {
    let baseline = sign(TEST_SECRET, TIMESTAMP, "GET", PATH, "");
    assert_ne!(sign(secret, timestamp, method, path, body), baseline);
}

#[rstest]
#[case("", "", "GET", "", "")]
#[case(TEST_SECRET, TIMESTAMP, "DELETE", "trading/orders/o-1/", "")]
#[case("ключ", TIMESTAMP, "PUT", "trading/orders/", r#"{"note":"привет"}"#)]
fn test_signature_decodes_to_digest_length(
    #[case] secret: &str,
    #[case] timestamp: &str,
    #[case] method: &str,
    #[case] path: &str,
    #[case] body: &str,
) {
    let signature = sign(secret, timestamp, method, path, body);
    let decoded = BASE64.decode(&signature).expect("signature should be base64");
    assert_eq!(decoded.len(), 32);
}

#[test]
fn test_signer_matches_free_function() {
    let signer = HmacSigner::new(TEST_SECRET);
    assert_eq!(
        signer.sign(TIMESTAMP, "GET", PATH, ""),
        sign(TEST_SECRET, TIMESTAMP, "GET", PATH, "")
    );
}
