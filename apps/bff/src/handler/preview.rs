//! # プレビュー API ハンドラ
//!
//! 埋め込みデモで使うプレビュー用エコシステムのカタログと、iframe の表示対象。
//!
//! ## エンドポイント
//!
//! - `GET /api/preview-ecosystems?current=` - カタログと前後の候補
//! - `GET /api/embed?ecosystemId=&url=` - iframe の表示対象（プレビューセッションを更新）
//! - `DELETE /api/session` - プレビューセッションを終了

use axum::{
    Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use ecostarter_domain::{
    preview::{EmbedTarget, PREVIEW_ECOSYSTEMS, PreviewCarousel, PreviewEcosystem, embed_src},
    session::EcosystemSession,
};
use ecostarter_shared::ApiResponse;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::session::CookieSessionStorage;

// --- リクエスト型 ---

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// 表示中のエコシステム ID。カタログにない・未指定なら先頭
    pub current: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmbedQuery {
    /// 指定するとプレビューセッションに保存する
    pub ecosystem_id: Option<String>,
    /// プレビューモードでないときに表示する任意の URL
    pub url:          Option<String>,
}

// --- レスポンス型 ---

/// プレビュー用エコシステム
#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewEcosystemData {
    pub name:         String,
    pub url:          String,
    pub ecosystem_id: String,
    /// iframe の `src`
    pub embed_src:    String,
}

impl From<&PreviewEcosystem> for PreviewEcosystemData {
    fn from(entry: &PreviewEcosystem) -> Self {
        Self {
            name:         entry.name.to_string(),
            url:          entry.url.to_string(),
            ecosystem_id: entry.ecosystem_id.to_string(),
            embed_src:    embed_src(entry.url),
        }
    }
}

/// カタログと、表示中のエコシステムの前後
#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewCatalogData {
    pub items:         Vec<PreviewEcosystemData>,
    pub current_index: usize,
    /// 先頭の前は末尾に回り込む
    pub previous:      PreviewEcosystemData,
    /// 末尾の次は先頭に回り込む
    pub next:          PreviewEcosystemData,
}

/// iframe の表示対象
#[derive(Debug, Serialize, ToSchema)]
pub struct EmbedTargetData {
    pub name:         Option<String>,
    pub url:          String,
    pub src:          String,
    pub preview_mode: bool,
}

impl From<EmbedTarget> for EmbedTargetData {
    fn from(target: EmbedTarget) -> Self {
        Self {
            name:         target.name.map(str::to_string),
            url:          target.url,
            src:          target.src,
            preview_mode: target.preview_mode,
        }
    }
}

// --- ハンドラ ---

/// GET /api/preview-ecosystems
#[utoipa::path(
   get,
   path = "/api/preview-ecosystems",
   tag = "preview",
   params(CatalogQuery),
   responses(
      (status = 200, description = "プレビュー用エコシステムのカタログ", body = ApiResponse<PreviewCatalogData>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_preview_ecosystems(Query(query): Query<CatalogQuery>) -> Response {
    let carousel = query
        .current
        .as_deref()
        .map(PreviewCarousel::starting_at)
        .unwrap_or_default();

    let mut backward = carousel;
    let mut forward = carousel;

    let data = PreviewCatalogData {
        items:         PREVIEW_ECOSYSTEMS.iter().map(PreviewEcosystemData::from).collect(),
        current_index: carousel.index(),
        previous:      PreviewEcosystemData::from(backward.step_back()),
        next:          PreviewEcosystemData::from(forward.step_forward()),
    };

    (StatusCode::OK, Json(ApiResponse::new(data))).into_response()
}

/// GET /api/embed
///
/// `ecosystemId` があればプレビューセッションに保存し、そのエコシステムを表示する。
/// なければ保存済みのセッション、それもなければ `url`、最後にカタログの先頭。
#[utoipa::path(
   get,
   path = "/api/embed",
   tag = "preview",
   params(EmbedQuery),
   responses(
      (status = 200, description = "iframe の表示対象", body = ApiResponse<EmbedTargetData>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn get_embed(jar: CookieJar, Query(query): Query<EmbedQuery>) -> Response {
    let mut session = EcosystemSession::new(CookieSessionStorage::new(jar));
    session.initialize(query.ecosystem_id.as_deref());

    let requested_url = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());

    let target = match requested_url {
        Some(url) if !session.is_preview_mode() => EmbedTarget::for_url(url),
        _ => EmbedTarget::resolve(session.ecosystem_id()),
    };
    tracing::debug!(
        preview_mode = target.preview_mode,
        url = %target.url,
        "埋め込み対象を決定しました"
    );

    let jar = session.into_storage().into_jar();
    (jar, Json(ApiResponse::new(EmbedTargetData::from(target)))).into_response()
}

/// DELETE /api/session
///
/// プレビューモードを終了する。
#[utoipa::path(
   delete,
   path = "/api/session",
   tag = "session",
   responses(
      (status = 204, description = "プレビューセッションを削除した")
   )
)]
#[tracing::instrument(skip_all)]
pub async fn clear_session(jar: CookieJar) -> Response {
    let mut session = EcosystemSession::new(CookieSessionStorage::new(jar));
    session.clear();

    (StatusCode::NO_CONTENT, session.into_storage().into_jar()).into_response()
}
