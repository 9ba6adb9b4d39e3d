/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderSide, OrderType, TimeInForce};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub instrument_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Limit price, ignored by the exchange for market orders
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    pub time_in_force: TimeInForce,
}

impl OrderRequest {
    pub fn market_buy(instrument_id: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            quantity,
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            price: None,
            time_in_force: TimeInForce::Gtc,
        }
    }

    pub fn limit_buy(instrument_id: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self {
            order_type: OrderType::Limit,
            price: Some(price),
            ..Self::market_buy(instrument_id, quantity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_order_request_wire_format() {
        let req = OrderRequest::limit_buy(
            "some-crypto-id",
            Decimal::from_str("0.001").unwrap(),
            Decimal::from_str("10000.00").unwrap(),
        );
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "instrument_id": "some-crypto-id",
                "quantity": "0.001",
                "side": "buy",
                "type": "limit",
                "price": "10000.00",
                "time_in_force": "gtc"
            })
        );
    }

    #[test]
    fn test_market_order_omits_price() {
        let req = OrderRequest::market_buy("btc", Decimal::from_str("2").unwrap());
        let body = serde_json::to_string(&req).unwrap();
        assert!(!body.contains("price"));
        assert!(body.contains(r#""type":"market""#));
    }
}
