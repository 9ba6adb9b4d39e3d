/*
[INPUT]:  CLI arguments and RH_* environment credentials
[OUTPUT]: Example holdings fetch and buy order, printed to stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use robinhood_crypto_adapter::http::DEFAULT_BASE_URL;
use robinhood_crypto_adapter::{ClientConfig, Credentials, RobinhoodClient};
use robinhood_crypto_bot::{HoldingsOutcome, OrderOutcome, RunOptions, run};

#[derive(Parser, Debug)]
#[command(name = "robinhood-crypto-bot", version, about = "Robinhood Crypto API example client")]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long = "place-order")]
    place_order: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let credentials = Credentials::from_env();
    info!(
        configured = credentials.is_configured(),
        base_url = %args.base_url,
        "starting robinhood-crypto-bot"
    );

    let config = ClientConfig {
        base_url: args.base_url.clone(),
        ..ClientConfig::default()
    };
    let client = RobinhoodClient::with_config(credentials, config).context("build client")?;

    println!("--- Starting Trading Bot Setup Example ---");
    println!("WARNING: This is a conceptual example. Actual Robinhood API calls require");
    println!("         valid API keys, shared secrets, and precise adherence to their");
    println!("         signature generation and endpoint details.");
    println!("         Ensure environment variables (RH_API_KEY, RH_CLIENT_ID, RH_SHARED_SECRET)");
    println!("         are set for a more secure setup.");
    println!("{}", "-".repeat(40));

    let options = RunOptions {
        dry_run: args.dry_run,
        place_order: args.place_order,
    };
    let report = run(&client, options).await;

    println!("\nAttempting to fetch crypto account info...");
    match &report.holdings {
        HoldingsOutcome::Fetched(value) => {
            println!("\nAccount Info Received:");
            println!("{}", pretty(value)?);
        }
        HoldingsOutcome::Skipped => {
            println!("\nSkipping account info request: credentials are placeholders or --dry-run is set.");
        }
        HoldingsOutcome::Failed(reason) => {
            println!("\nFailed to retrieve account info: {reason}");
            println!("Check your API keys, base URL, and signature logic!");
        }
    }

    println!("\nAttempting to place a buy order...");
    match &report.order {
        OrderOutcome::Simulated(response) => {
            println!("\nUsing placeholder API keys, simulating a successful order response for demonstration.");
            println!("\nBuy Order Placed (MOCK):");
            println!("{}", pretty(response)?);
        }
        OrderOutcome::NotSubmitted => {
            println!("\nUsing actual API keys. Pass --place-order to submit the order.");
            println!("No live trade was executed, so no actual order was placed.");
        }
        OrderOutcome::Placed(response) => {
            println!("\nBuy Order Placed:");
            println!("{}", pretty(response)?);
        }
        OrderOutcome::Failed(reason) => {
            println!("\nFailed to place buy order: {reason}");
        }
    }

    println!("\n--- Trading Bot Setup Example Complete ---");
    println!("Remember to consult the full Robinhood Crypto API documentation for exact details!");
    Ok(())
}

fn pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("render response as JSON")
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
