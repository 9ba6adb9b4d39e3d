/*
[INPUT]:  Environment credentials and a sample request
[OUTPUT]: Signing message, signature and header set printed to stdout
[POS]:    Examples - request signing walkthrough
[UPDATE]: When signing flow changes
*/

use robinhood_crypto_adapter::auth::signing_message;
use robinhood_crypto_adapter::*;

/// Example: Request signing
///
/// Shows every value that goes into an authenticated request without sending it:
/// 1. Load credentials from the environment
/// 2. Build the canonical message
/// 3. Sign it and assemble the header set
fn main() {
    println!("=== Robinhood Crypto Signing Example ===\n");

    let credentials = Credentials::from_env();
    if !credentials.is_configured() {
        println!("Placeholder credentials in use (set RH_API_KEY, RH_CLIENT_ID, RH_SHARED_SECRET)");
    }

    let timestamp = chrono::Utc::now().timestamp_millis().to_string();
    let path = http::holdings_path(&credentials.account_number);
    let message = signing_message(&timestamp, "GET", &path, "");
    println!("Message:   {message}");

    let signature = sign(&credentials.shared_secret, &timestamp, "GET", &path, "");
    println!("Signature: {signature}");

    let headers = SignedHeaders::new(&credentials, signature, timestamp);
    match headers.to_header_map() {
        Ok(map) => {
            for (name, value) in &map {
                println!("  {name}: {}", value.to_str().unwrap_or("<binary>"));
            }
        }
        Err(e) => eprintln!("Failed to build headers: {e}"),
    }

    println!("\n✓ Signing example complete");
}
