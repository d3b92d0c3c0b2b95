//! HTTP server for blockfeed.
//!
//! Exposes the range-validated block export endpoint: validate the
//! requested ledger range against retained history, load the three flat
//! row sets, assemble them into nested block documents, then return the
//! documents or forward them to the kafka proxy, depending on the request
//! flag.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::BlockfeedServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use chrono::{TimeZone, Utc};
    use tower::util::ServiceExt;

    use blockfeed_history::{HistoryError, HistoryReader, InMemoryHistory};
    use blockfeed_publish::PublishConfig;
    use blockfeed_types::{LedgerRow, OperationRow, TransactionRow};

    struct FailingHistory;

    impl HistoryReader for FailingHistory {
        fn oldest_retained_sequence(&self) -> Result<i32, HistoryError> {
            Ok(1)
        }

        fn ledgers_in_range(&self, _: i32, _: i32) -> Result<Vec<LedgerRow>, HistoryError> {
            Err(HistoryError::QueryFailed("ledgers relation missing".into()))
        }

        fn transactions_in_range(
            &self,
            _: i32,
            _: i32,
        ) -> Result<Vec<TransactionRow>, HistoryError> {
            Err(HistoryError::QueryFailed("transactions relation missing".into()))
        }

        fn operations_in_range(
            &self,
            _: i32,
            _: i32,
        ) -> Result<Vec<OperationRow>, HistoryError> {
            Err(HistoryError::QueryFailed("operations relation missing".into()))
        }
    }

    fn ledger(sequence: i32) -> LedgerRow {
        LedgerRow {
            id: (sequence as i64) << 32,
            sequence,
            hash: format!("hash-{sequence}"),
            prev_hash: Some(format!("hash-{}", sequence - 1)),
            transaction_count: 1,
            successful_transaction_count: Some(1),
            failed_transaction_count: Some(0),
            operation_count: 1,
            closed_at: Utc.with_ymd_and_hms(2019, 4, 1, 12, 0, 0).unwrap(),
            total_coins: 1_000_000_000_000_000_000,
            fee_pool: 3_000_000,
            base_fee: 100,
            base_reserve: 5_000_000,
            max_tx_set_size: 50,
            protocol_version: 10,
            header_xdr: Some("AAAA".into()),
        }
    }

    fn transaction(id: i64, ledger_sequence: i32) -> TransactionRow {
        TransactionRow {
            id,
            hash: format!("tx-{id}"),
            ledger_sequence,
            account: "GSOURCE".into(),
            account_sequence: "12885".into(),
            fee_charged: 100,
            operation_count: 1,
            envelope_xdr: "env".into(),
            result_xdr: "res".into(),
            result_meta_xdr: "meta".into(),
            fee_meta_xdr: "fee".into(),
            memo_type: "none".into(),
            signatures: "sig1".into(),
        }
    }

    fn operation(id: i64, transaction_id: i64) -> OperationRow {
        OperationRow {
            id,
            transaction_id,
            application_order: 1,
            type_code: 1,
            details: r#"{"amount":"1.0000000"}"#.into(),
            source_account: String::new(),
        }
    }

    fn seeded_history() -> InMemoryHistory {
        let history = InMemoryHistory::new();
        history.push_ledger(ledger(3)).unwrap();
        history.push_ledger(ledger(4)).unwrap();
        history.push_transaction(transaction(10, 3)).unwrap();
        history.push_operation(operation(100, 10)).unwrap();
        history
    }

    fn app_with(history: Arc<dyn HistoryReader>) -> Router {
        BlockfeedServer::new(ServerConfig::default(), history).router()
    }

    async fn get_json(
        app: Router,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = get_json(
            app_with(Arc::new(InMemoryHistory::new())),
            "/v1/health",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn default_path_returns_nested_documents() {
        let (status, body) = get_json(
            app_with(Arc::new(seeded_history())),
            "/v1/blocks?ledger_start=3&ledger_end=4",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0]["value"];
        assert_eq!(first["sequence"], 3);
        assert_eq!(first["total_coins"], "100000000000.0000000");
        assert_eq!(first["transactions"][0]["id"], "10");
        assert_eq!(
            first["transactions"][0]["operations"][0]["operation_id"],
            "100"
        );
        // Operation source defaulted from its transaction.
        assert_eq!(
            first["transactions"][0]["operations"][0]["source_account"],
            "GSOURCE"
        );

        let second = &records[1]["value"];
        assert_eq!(second["sequence"], 4);
        assert_eq!(second["transactions"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn empty_range_is_an_empty_list() {
        let (status, body) = get_json(
            app_with(Arc::new(seeded_history())),
            "/v1/blocks?ledger_start=100&ledger_end=200",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["records"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn start_before_retained_history_is_gone() {
        let history = seeded_history();
        history.set_oldest_retained(100).unwrap();

        let (status, body) = get_json(
            app_with(Arc::new(history)),
            "/v1/blocks?ledger_start=50&ledger_end=200",
        )
        .await;
        assert_eq!(status, StatusCode::GONE);
        assert!(body["error"].as_str().unwrap().contains("before"));
    }

    #[tokio::test]
    async fn validation_short_circuits_before_any_load() {
        struct PrunedFailingHistory;

        impl HistoryReader for PrunedFailingHistory {
            fn oldest_retained_sequence(&self) -> Result<i32, HistoryError> {
                Ok(100)
            }

            fn ledgers_in_range(&self, _: i32, _: i32) -> Result<Vec<LedgerRow>, HistoryError> {
                panic!("load attempted after failed validation");
            }

            fn transactions_in_range(
                &self,
                _: i32,
                _: i32,
            ) -> Result<Vec<TransactionRow>, HistoryError> {
                panic!("load attempted after failed validation");
            }

            fn operations_in_range(
                &self,
                _: i32,
                _: i32,
            ) -> Result<Vec<OperationRow>, HistoryError> {
                panic!("load attempted after failed validation");
            }
        }

        let (status, _) = get_json(
            app_with(Arc::new(PrunedFailingHistory)),
            "/v1/blocks?ledger_start=50&ledger_end=200",
        )
        .await;
        assert_eq!(status, StatusCode::GONE);
    }

    #[tokio::test]
    async fn missing_or_inverted_bounds_are_bad_requests() {
        let app = app_with(Arc::new(seeded_history()));
        let (status, _) = get_json(app.clone(), "/v1/blocks?ledger_start=5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            get_json(app, "/v1/blocks?ledger_start=9&ledger_end=3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failing_store_aborts_with_server_error() {
        let (status, body) = get_json(
            app_with(Arc::new(FailingHistory)),
            "/v1/blocks?ledger_start=1&ledger_end=2",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("query failed"));
    }

    async fn app_with_proxy(proxy: Router) -> Router {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, proxy).await.unwrap();
        });

        let config = ServerConfig {
            publish: PublishConfig {
                host: addr.ip().to_string(),
                port: addr.port(),
                topic: "blocks".into(),
            },
            ..ServerConfig::default()
        };
        BlockfeedServer::new(config, Arc::new(seeded_history())).router()
    }

    #[tokio::test]
    async fn publish_path_returns_only_the_ack() {
        let proxy =
            Router::new().route("/topics/:topic", post(|| async { StatusCode::OK }));
        let app = app_with_proxy(proxy).await;

        let (status, body) = get_json(
            app,
            "/v1/blocks?ledger_start=3&ledger_end=4&send_kafka=true",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "message": "success" }));
    }

    #[tokio::test]
    async fn publish_failure_fails_the_request() {
        let proxy = Router::new().route(
            "/topics/:topic",
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let app = app_with_proxy(proxy).await;

        let (status, body) = get_json(
            app,
            "/v1/blocks?ledger_start=3&ledger_end=4&send_kafka=true",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().contains("publish failed"));
    }

    #[tokio::test]
    async fn non_true_flag_takes_the_default_path() {
        // Proxy that would fail the request if it were ever called.
        let proxy = Router::new().route(
            "/topics/:topic",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let app = app_with_proxy(proxy).await;

        let (status, body) = get_json(
            app,
            "/v1/blocks?ledger_start=3&ledger_end=4&send_kafka=false",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["records"].is_array());
    }
}
