//! HTTP-level tests for tinkoff-rs
//!
//! Every endpoint method is exercised against a local mock server, checking
//! the request it sends (method, path, query, body, auth header) and how the
//! response is mapped into `Result`.
//!
//! Run with: cargo test --test client_tests

use std::sync::Once;

use chrono::{TimeZone, Utc};
use mockito::{Matcher, Mock, Server, ServerGuard};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use tinkoff_rs::prelude::*;

static INIT: Once = Once::new();

const TOKEN: &str = "t.test-token";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Start a mock server and a client pointing at `<server>/openapi`
async fn setup() -> (ServerGuard, BrokerClient) {
    init_logging();
    let server = Server::new_async().await;
    let options = ClientOptions::new(format!("{}/openapi", server.url()), TOKEN);
    let client = BrokerClient::new(options).expect("Failed to create client");
    (server, client)
}

/// Wrap a payload in the success envelope
fn ok_envelope(payload: Value) -> String {
    json!({
        "trackingId": "track-ok",
        "payload": payload,
        "status": "OK"
    })
    .to_string()
}

/// Wrap code/message in the error envelope
fn error_envelope(code: &str, message: &str) -> String {
    json!({
        "trackingId": "track-err",
        "payload": { "message": message, "code": code },
        "status": "Error"
    })
    .to_string()
}

async fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: String,
) -> Mock {
    server
        .mock(method, path)
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn instrument_json(figi: &str, ticker: &str, kind: &str) -> Value {
    json!({
        "figi": figi,
        "ticker": ticker,
        "isin": "US0000000000",
        "minPriceIncrement": 0.01,
        "lot": 1,
        "currency": "USD",
        "name": ticker,
        "type": kind
    })
}

// ============================================================================
// MARKET TESTS
// ============================================================================

mod market_tests {
    use super::*;

    #[tokio::test]
    async fn test_stocks() {
        let (mut server, client) = setup().await;
        let payload = json!({
            "total": 2,
            "instruments": [
                instrument_json("BBG000B9XRY4", "AAPL", "Stock"),
                instrument_json("BBG000BPH459", "MSFT", "Stock"),
            ]
        });
        let mock = mock_json(
            &mut server,
            "GET",
            "/openapi/market/stocks",
            200,
            ok_envelope(payload),
        )
        .await;

        let stocks = client.stocks().await.expect("Should list stocks");
        assert_eq!(stocks.len(), 2);
        assert_eq!(stocks[0].ticker, "AAPL");
        assert_eq!(stocks[1].figi, Figi::new("BBG000BPH459"));
        assert_eq!(stocks[0].instrument_type, InstrumentType::Stock);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bonds_etfs_currencies() {
        let (mut server, client) = setup().await;
        let bonds = mock_json(
            &mut server,
            "GET",
            "/openapi/market/bonds",
            200,
            ok_envelope(json!({"total": 1, "instruments": [instrument_json("B1", "OFZ", "Bond")]})),
        )
        .await;
        let etfs = mock_json(
            &mut server,
            "GET",
            "/openapi/market/etfs",
            200,
            ok_envelope(json!({"total": 1, "instruments": [instrument_json("E1", "FXUS", "Etf")]})),
        )
        .await;
        let currencies = mock_json(
            &mut server,
            "GET",
            "/openapi/market/currencies",
            200,
            ok_envelope(json!({"total": 0, "instruments": []})),
        )
        .await;

        assert_eq!(client.bonds().await.unwrap()[0].instrument_type, InstrumentType::Bond);
        assert_eq!(client.etfs().await.unwrap()[0].ticker, "FXUS");
        assert!(client.currencies().await.unwrap().is_empty());

        bonds.assert_async().await;
        etfs.assert_async().await;
        currencies.assert_async().await;
    }
}

// ============================================================================
// OPERATIONS TESTS
// ============================================================================

mod operations_tests {
    use super::*;

    fn operations_payload() -> Value {
        json!({
            "operations": [{
                "id": "op-1",
                "status": "Done",
                "currency": "USD",
                "payment": -261.0,
                "price": 130.5,
                "quantity": 2,
                "figi": "BBG000B9XRY4",
                "instrumentType": "Stock",
                "isMarginCall": false,
                "date": "2021-01-10T10:00:00+03:00",
                "operationType": "Buy"
            }]
        })
    }

    #[tokio::test]
    async fn test_operations_sends_iso_range() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/openapi/operations")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("from".into(), "2021-01-01T00:00:00.000Z".into()),
                Matcher::UrlEncoded("to".into(), "2021-02-01T00:00:00.000Z".into()),
                // Nothing but the range when no filters are given
                Matcher::Regex("^from=[^&]+&to=[^&]+$".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ok_envelope(operations_payload()))
            .create_async()
            .await;

        let from = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap();
        let operations = client
            .operations(from, to, None)
            .await
            .expect("Should list operations");

        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].payment, dec!(-261));
        assert_eq!(
            operations[0].operation_type,
            Some(OperationTypeWithCommission::Buy)
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_operations_with_filters() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/openapi/operations")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("from".into(), "2021-01-01T00:00:00.000Z".into()),
                Matcher::UrlEncoded("to".into(), "2021-02-01T00:00:00.000Z".into()),
                Matcher::UrlEncoded("figi".into(), "BBG000B9XRY4".into()),
                Matcher::UrlEncoded("brokerAccountId".into(), "2000123456".into()),
            ]))
            .with_status(200)
            .with_body(ok_envelope(operations_payload()))
            .create_async()
            .await;

        let from = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap();
        let options = OperationsOptions::new()
            .with_figi("BBG000B9XRY4")
            .with_account("2000123456");

        let operations = client.operations(from, to, Some(options)).await;
        assert!(operations.is_ok(), "Should list filtered operations: {:?}", operations);
        mock.assert_async().await;
    }
}

// ============================================================================
// ORDERS TESTS
// ============================================================================

mod orders_tests {
    use super::*;

    #[tokio::test]
    async fn test_active_orders() {
        let (mut server, client) = setup().await;
        let payload = json!([{
            "orderId": "o-1",
            "figi": "BBG000B9XRY4",
            "operation": "Buy",
            "status": "New",
            "requestedLots": 3,
            "executedLots": 1,
            "type": "Limit",
            "price": 120.5
        }]);
        let mock = mock_json(&mut server, "GET", "/openapi/orders", 200, ok_envelope(payload)).await;

        let orders = client.active_orders(None).await.expect("Should list orders");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, OrderId::new("o-1"));
        assert_eq!(orders[0].remaining_lots(), 2);
        assert_eq!(orders[0].price, dec!(120.5));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_active_orders_for_account() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/openapi/orders")
            .match_query(Matcher::UrlEncoded(
                "brokerAccountId".into(),
                "2000123456".into(),
            ))
            .with_status(200)
            .with_body(ok_envelope(json!([])))
            .create_async()
            .await;

        let account = BrokerAccountId::new("2000123456");
        let orders = client.active_orders(Some(&account)).await.unwrap();
        assert!(orders.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_cancel_order() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/openapi/orders/cancel")
            .match_query(Matcher::UrlEncoded("orderId".into(), "o-42".into()))
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .with_status(200)
            .with_body(ok_envelope(json!({})))
            .create_async()
            .await;

        let result = client.cancel_order(&OrderId::new("o-42"), None).await;
        assert!(result.is_ok(), "Should cancel order: {:?}", result);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_cancel_order_with_empty_body() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/openapi/orders/cancel")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("orderId".into(), "o-43".into()),
                Matcher::UrlEncoded("brokerAccountId".into(), "2000123456".into()),
            ]))
            .with_status(204)
            .create_async()
            .await;

        let account = BrokerAccountId::new("2000123456");
        client
            .cancel_order(&OrderId::new("o-43"), Some(&account))
            .await
            .expect("Empty 2xx body should be success");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_place_limit_order() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/openapi/orders/limit-order")
            .match_query(Matcher::UrlEncoded("figi".into(), "BBG000B9XRY4".into()))
            .match_body(Matcher::Json(json!({
                "operation": "Buy",
                "lots": 2,
                "price": 150.5
            })))
            .with_status(200)
            .with_body(ok_envelope(json!({
                "orderId": "o-100",
                "operation": "Buy",
                "status": "New",
                "requestedLots": 2,
                "executedLots": 0
            })))
            .create_async()
            .await;

        let order =
            PlaceLimitOrderOptions::new("BBG000B9XRY4", OperationType::Buy, 2, dec!(150.50));
        let placed = client
            .place_limit_order(&order)
            .await
            .expect("Should place limit order");

        assert_eq!(placed.order_id, OrderId::new("o-100"));
        assert_eq!(placed.status, OrderStatus::New);
        assert_eq!(placed.requested_lots, 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_place_market_order() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/openapi/orders/market-order")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("figi".into(), "BBG000BPH459".into()),
                Matcher::UrlEncoded("brokerAccountId".into(), "2000123456".into()),
            ]))
            .match_body(Matcher::Json(json!({"operation": "Sell", "lots": 1})))
            .with_status(200)
            .with_body(ok_envelope(json!({
                "orderId": "o-101",
                "operation": "Sell",
                "status": "Fill",
                "requestedLots": 1,
                "executedLots": 1,
                "commission": {"currency": "USD", "value": -0.3}
            })))
            .create_async()
            .await;

        let order = PlaceMarketOrderOptions::new("BBG000BPH459", OperationType::Sell, 1)
            .with_account("2000123456");
        let placed = client.place_market_order(&order).await.unwrap();

        assert_eq!(placed.executed_lots, 1);
        assert_eq!(
            placed.commission,
            Some(MoneyAmount::new(Currency::Usd, dec!(-0.3)))
        );
        mock.assert_async().await;
    }
}

// ============================================================================
// USER AND PORTFOLIO TESTS
// ============================================================================

mod portfolio_tests {
    use super::*;

    #[tokio::test]
    async fn test_accounts() {
        let (mut server, client) = setup().await;
        let mock = mock_json(
            &mut server,
            "GET",
            "/openapi/user/accounts",
            200,
            ok_envelope(json!({
                "accounts": [
                    {"brokerAccountType": "Tinkoff", "brokerAccountId": "2000123456"},
                    {"brokerAccountType": "TinkoffIis", "brokerAccountId": "2000654321"}
                ]
            })),
        )
        .await;

        let accounts = client.accounts().await.expect("Should list accounts");
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].broker_account_type, BrokerAccountType::TinkoffIis);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_portfolio() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/openapi/portfolio")
            .match_query(Matcher::UrlEncoded(
                "brokerAccountId".into(),
                "2000123456".into(),
            ))
            .with_status(200)
            .with_body(ok_envelope(json!({
                "positions": [{
                    "figi": "BBG000B9XRY4",
                    "ticker": "AAPL",
                    "instrumentType": "Stock",
                    "balance": 3,
                    "blocked": 1,
                    "lots": 3,
                    "expectedYield": {"currency": "USD", "value": 12.3},
                    "averagePositionPrice": {"currency": "USD", "value": 120.0},
                    "name": "Apple"
                }]
            })))
            .create_async()
            .await;

        let account = BrokerAccountId::new("2000123456");
        let positions = client.portfolio(Some(&account)).await.unwrap();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].lots, 3);
        assert_eq!(positions[0].blocked, Some(dec!(1)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_currency_portfolio() {
        let (mut server, client) = setup().await;
        let mock = mock_json(
            &mut server,
            "GET",
            "/openapi/portfolio/currencies",
            200,
            ok_envelope(json!({
                "currencies": [
                    {"currency": "RUB", "balance": 1500.25},
                    {"currency": "USD", "balance": 100, "blocked": 40}
                ]
            })),
        )
        .await;

        let currencies = client.currency_portfolio(None).await.unwrap();
        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies[0].currency, Currency::Rub);
        assert_eq!(currencies[1].available(), dec!(60));
        mock.assert_async().await;
    }
}

// ============================================================================
// ERROR HANDLING TESTS
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_error_envelope_becomes_api_error() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/openapi/orders/limit-order")
            .match_query(Matcher::UrlEncoded("figi".into(), "BBG000B9XRY4".into()))
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(error_envelope(
                "VALIDATION_ERROR",
                "[lots]: must be greater than 0",
            ))
            .create_async()
            .await;

        let order = PlaceLimitOrderOptions::new("BBG000B9XRY4", OperationType::Buy, 0, dec!(1));
        let err = client.place_limit_order(&order).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "[VALIDATION_ERROR] [lots]: must be greater than 0"
        );
        match &err {
            Error::Api {
                status,
                tracking_id,
                ..
            } => {
                assert_eq!(*status, 500);
                assert_eq!(tracking_id.as_deref(), Some("track-err"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
        assert!(err.is_server_error());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_without_body() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/openapi/user/accounts")
            .with_status(401)
            .create_async()
            .await;

        let err = client.accounts().await.unwrap_err();
        assert_eq!(err.to_string(), "[401]");
        assert!(err.is_auth_error());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/openapi/market/stocks")
            .with_status(502)
            .with_header("content-type", "text/html")
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let err = client.stocks().await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 502 }));
        assert_eq!(err.to_string(), "[502]");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unexpected_success_shape_is_decode_error() {
        let (mut server, client) = setup().await;
        let mock = mock_json(
            &mut server,
            "GET",
            "/openapi/portfolio",
            200,
            ok_envelope(json!({"unexpected": []})),
        )
        .await;

        let err = client.portfolio(None).await.unwrap_err();
        assert!(matches!(err, Error::Json(_)), "Expected Json error, got {:?}", err);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_on_success_is_decode_error() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/openapi/market/etfs")
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let err = client.etfs().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_transport_failure_is_http_error() {
        init_logging();
        // Nothing listens on port 1
        let client = BrokerClient::new(ClientOptions::new("http://127.0.0.1:1/openapi", TOKEN))
            .unwrap();

        let err = client.stocks().await.unwrap_err();
        assert!(err.is_transport_error(), "Expected transport error, got {:?}", err);
        assert!(err.status().is_none());
    }
}

// ============================================================================
// CONCURRENCY TESTS
// ============================================================================

mod concurrency_tests {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_calls_share_one_client() {
        let (mut server, client) = setup().await;
        let stocks = mock_json(
            &mut server,
            "GET",
            "/openapi/market/stocks",
            200,
            ok_envelope(json!({"total": 0, "instruments": []})),
        )
        .await;
        let accounts = mock_json(
            &mut server,
            "GET",
            "/openapi/user/accounts",
            200,
            ok_envelope(json!({"accounts": []})),
        )
        .await;

        let other = client.clone();
        let (stocks_result, accounts_result) = tokio::join!(client.stocks(), other.accounts());

        assert!(stocks_result.unwrap().is_empty());
        assert!(accounts_result.unwrap().is_empty());
        stocks.assert_async().await;
        accounts.assert_async().await;
    }
}
