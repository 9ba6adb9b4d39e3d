/*
[INPUT]:  Configured Robinhood client and run options
[OUTPUT]: Holdings and buy-order outcomes for the example run
[POS]:    Driver layer - exercises the holdings and order endpoints
[UPDATE]: When adding example calls or changing live-call gating
*/

use robinhood_crypto_adapter::{
    OrderRequest, OrderResponse, OrderSide, OrderType, RobinhoodClient, TimeInForce,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{info, warn};

/// Switches controlling which calls go out over the network
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Treat credentials as unconfigured even when they are set
    pub dry_run: bool,
    /// Submit the buy order instead of only describing it
    pub place_order: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HoldingsOutcome {
    Skipped,
    Fetched(Value),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Placeholder credentials: canned response, nothing sent
    Simulated(OrderResponse),
    /// Real credentials without `place_order`
    NotSubmitted,
    Placed(OrderResponse),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub live: bool,
    pub holdings: HoldingsOutcome,
    pub order: OrderOutcome,
}

/// Buy order used by the example run
pub fn sample_order() -> OrderRequest {
    OrderRequest {
        instrument_id: "some-crypto-id".to_string(),
        quantity: Decimal::new(1, 3),
        side: OrderSide::Buy,
        order_type: OrderType::Market,
        price: Some(Decimal::new(1_000_000, 2)),
        time_in_force: TimeInForce::Gtc,
    }
}

/// Response shown when no live order can be placed
pub fn simulated_order_response() -> OrderResponse {
    OrderResponse {
        order_id: "mock_order_12345".to_string(),
        status: "pending".to_string(),
        crypto_symbol: Some("BTC".to_string()),
        quantity: Decimal::new(1, 3),
    }
}

/// Run the holdings fetch and the buy order against the client
pub async fn run(client: &RobinhoodClient, options: RunOptions) -> RunReport {
    let credentials = client.credentials();
    let live = match credentials.ensure_configured() {
        Ok(()) => !options.dry_run,
        Err(err) => {
            info!(reason = %err, "live calls disabled");
            false
        }
    };
    info!(live, place_order = options.place_order, "starting example run");

    let holdings = if live {
        match client.get_holdings(&credentials.account_number).await {
            Ok(value) => HoldingsOutcome::Fetched(value),
            Err(err) => {
                warn!(error = %err, "holdings request failed");
                HoldingsOutcome::Failed(err.to_string())
            }
        }
    } else {
        info!("skipping holdings request");
        HoldingsOutcome::Skipped
    };

    let order = if !live {
        OrderOutcome::Simulated(simulated_order_response())
    } else if !options.place_order {
        OrderOutcome::NotSubmitted
    } else {
        match client.place_order(&sample_order()).await {
            Ok(response) => {
                info!(order_id = %response.order_id, status = %response.status, "order placed");
                OrderOutcome::Placed(response)
            }
            Err(err) => {
                warn!(error = %err, "order request failed");
                OrderOutcome::Failed(err.to_string())
            }
        }
    };

    RunReport {
        live,
        holdings,
        order,
    }
}
