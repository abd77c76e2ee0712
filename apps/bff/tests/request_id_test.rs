//! # Request ID レイヤーのテスト
//!
//! `build_app` のレイヤー構成で次を確認する。
//!
//! - レスポンスに `X-Request-Id` が付く
//! - クライアント提供の `X-Request-Id` はそのまま返り、上流クライアントにも渡る
//! - 自動生成の `X-Request-Id` は UUID v7

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body};
use ecostarter_bff::{
    app_builder::build_app,
    client::{EcosystemApiClient, UpstreamError},
    config::BffConfig,
    handler::ReadinessState,
    middleware::current_request_id,
};
use ecostarter_domain::{
    ecosystem::{EcosystemId, ListingId},
    pagination::Cursor,
};
use http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

/// 呼ばれたときの Request ID を記録するクライアント
#[derive(Default)]
struct RecordingClient {
    seen: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl EcosystemApiClient for RecordingClient {
    async fn get_ecosystem(&self, _ecosystem_id: &EcosystemId) -> Result<Value, UpstreamError> {
        self.seen.lock().unwrap().push(current_request_id());
        Ok(json!({"data": {}}))
    }

    async fn list_listings(
        &self,
        _ecosystem_id: &EcosystemId,
        _cursor: Option<&Cursor>,
        _limit: u32,
    ) -> Result<Value, UpstreamError> {
        unreachable!("このテストでは呼ばない")
    }

    async fn get_listing(
        &self,
        _ecosystem_id: &EcosystemId,
        _listing_id: &ListingId,
    ) -> Result<Value, UpstreamError> {
        unreachable!("このテストでは呼ばない")
    }
}

fn test_app(client: Arc<RecordingClient>) -> Router {
    let readiness_state = Arc::new(ReadinessState {
        http_client:       reqwest::Client::new(),
        ecosystem_api_url: "http://127.0.0.1:1".to_string(),
    });
    build_app(&BffConfig::default(), client, readiness_state)
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
    let app = test_app(Arc::default());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().contains_key("x-request-id"),
        "レスポンスに x-request-id ヘッダーが含まれること"
    );
}

#[tokio::test]
async fn test_クライアント提供のx_request_idが返り上流呼び出しにも渡る() {
    let client = Arc::new(RecordingClient::default());
    let custom_id = "client-provided-request-id-123";

    let response = test_app(client.clone())
        .oneshot(
            Request::builder()
                .uri("/api/ecosystem/eco-1")
                .header("x-request-id", custom_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], custom_id);
    assert_eq!(
        *client.seen.lock().unwrap(),
        vec![Some(custom_id.to_string())]
    );
}

#[tokio::test]
async fn test_自動生成のx_request_idがuuid_v7形式である() {
    let client = Arc::new(RecordingClient::default());

    let response = test_app(client.clone())
        .oneshot(
            Request::builder()
                .uri("/api/ecosystem/eco-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    let uuid = uuid::Uuid::parse_str(request_id)
        .unwrap_or_else(|_| panic!("有効な UUID であること: {request_id}"));
    assert_eq!(
        uuid.get_version(),
        Some(uuid::Version::SortRand),
        "UUID v7（SortRand）であること"
    );
    assert_eq!(
        *client.seen.lock().unwrap(),
        vec![Some(request_id.to_string())]
    );
}
