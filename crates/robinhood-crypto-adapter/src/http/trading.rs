/*
[INPUT]:  Account number and order requests
[OUTPUT]: Holdings JSON and order confirmations
[POS]:    HTTP layer - trading endpoints (require signed headers)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

// Endpoint paths are illustrative and still need checking against provider documentation.

use crate::http::{Result, RobinhoodClient};
use crate::types::{OrderRequest, OrderResponse};
use reqwest::Method;
use serde_json::Value;

/// Path of the order placement endpoint, relative to the base URL
pub const ORDERS_PATH: &str = "trading/orders/";

/// Path of the holdings endpoint for an account, relative to the base URL
pub fn holdings_path(account_number: &str) -> String {
    format!("trading/accounts/{account_number}/crypto_holdings/")
}

impl RobinhoodClient {
    /// Fetch crypto holdings for an account
    ///
    /// GET trading/accounts/{account_number}/crypto_holdings/
    pub async fn get_holdings(&self, account_number: &str) -> Result<Value> {
        self.get(&holdings_path(account_number)).await
    }

    /// Place a new order
    ///
    /// POST trading/orders/
    pub async fn place_order(&self, req: &OrderRequest) -> Result<OrderResponse> {
        self.send_json(Method::POST, ORDERS_PATH, Some(req)).await
    }
}
