//! # ヘルスチェックハンドラ
//!
//! - `/health`: Liveness（常に `"healthy"`）
//! - `/health/ready`: Readiness（Ecosystem API に到達できるか）

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use ecostarter_shared::{CheckStatus, HealthResponse, ReadinessResponse};

/// 依存先 1 件あたりのタイムアウト
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// BFF のヘルスチェックエンドポイント
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub http_client:       reqwest::Client,
    pub ecosystem_api_url: String,
}

/// BFF の Readiness Check エンドポイント
///
/// Ecosystem API が何らかの HTTP レスポンスを返せば到達可能とみなす
/// （ベース URL 自体は 404 を返しうる）。全チェック OK → 200、失敗あり → 503。
#[utoipa::path(
   get,
   path = "/health/ready",
   tag = "health",
   responses(
      (status = 200, description = "全依存サービス到達可能", body = ReadinessResponse),
      (status = 503, description = "一部の依存サービスに到達できない", body = ReadinessResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let ecosystem_api = check_reachable(&state.http_client, &state.ecosystem_api_url).await;

    let response = ReadinessResponse::from_checks(BTreeMap::from([(
        "ecosystem_api".to_string(),
        ecosystem_api,
    )]));
    let http_status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

async fn check_reachable(client: &reqwest::Client, url: &str) -> CheckStatus {
    match tokio::time::timeout(CHECK_TIMEOUT, client.head(url).send()).await {
        Ok(Ok(_)) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: ecosystem api request failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: ecosystem api check timed out");
            CheckStatus::Error
        }
    }
}
