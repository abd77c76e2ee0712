//! # BFF アプリケーション構築
//!
//! State の組み立てとルーター定義。`main.rs` は設定読み込みとサーバー起動だけを行う。
//! 結合テストも同じ関数でルーターを作る。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get},
};
use ecostarter_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::EcosystemApiClient,
    config::BffConfig,
    handler::{
        EcosystemState,
        ReadinessState,
        clear_session,
        get_ecosystem,
        get_embed,
        get_listing,
        get_masthead,
        health_check,
        list_listings,
        list_preview_ecosystems,
        readiness_check,
    },
    middleware::{no_cache, store_request_id},
};

/// ルーターを構築する
///
/// クライアントは外から受け取る（テストではスタブを渡す）。
pub fn build_app(
    config: &BffConfig,
    ecosystem_client: Arc<dyn EcosystemApiClient>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let ecosystem_state = Arc::new(EcosystemState {
        ecosystem_client,
        listings_page_limit: config.listings_page_limit,
    });

    // `/api/ecosystem/listings` は `/api/ecosystem/{id}` より優先して一致する
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/api/ecosystem/listings", get(list_listings))
        .route("/api/ecosystem/listings/{id}", get(get_listing))
        .route("/api/ecosystem/{id}", get(get_ecosystem))
        .route("/api/masthead/{id}", get(get_masthead))
        .with_state(ecosystem_state)
        .route("/api/preview-ecosystems", get(list_preview_ecosystems))
        .route("/api/embed", get(get_embed))
        .route("/api/session", delete(clear_session))
        .layer(from_fn(no_cache))
        // 下に書いたものが外側
        // 1. SetRequestIdLayer: UUID v7 を発行（クライアント提供値があればそれを使う）
        // 2. TraceLayer: request_id 入りのスパン
        // 3. PropagateRequestIdLayer: レスポンスに X-Request-Id を返す
        // 4. store_request_id: 上流呼び出しへの伝播用に task-local へ
        .layer(from_fn(store_request_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
