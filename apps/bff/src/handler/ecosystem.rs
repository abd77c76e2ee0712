//! # エコシステム API ハンドラ
//!
//! Ecosystem API への 1:1 転送と、エコシステム設定から組み立てるマストヘッド。
//!
//! ## エンドポイント
//!
//! - `GET /api/ecosystem/{id}` - エコシステム設定
//! - `GET /api/ecosystem/listings?ecosystemId=&cursor=&limit=` - リスティング一覧
//! - `GET /api/ecosystem/listings/{id}?ecosystemId=` - リスティング詳細
//! - `GET /api/masthead/{id}` - 解決済みのマストヘッド
//!
//! 転送系の成功レスポンスは上流のボディを加工せずに返す。

use std::{str::FromStr, sync::Arc};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecostarter_domain::{
    ecosystem::{Ecosystem, EcosystemId, ListingId},
    masthead::MastheadTheme,
    pagination::Cursor,
};
use ecostarter_shared::{ApiResponse, ErrorResponse, PaginationMeta};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::{
    client::{EcosystemApiClient, UpstreamError},
    error::{bad_request_response, log_and_convert_upstream_error, missing_parameter_response},
};

/// エコシステム API の共有状態
pub struct EcosystemState {
    pub ecosystem_client:    Arc<dyn EcosystemApiClient>,
    /// `limit` 未指定時の取得件数
    pub listings_page_limit: u32,
}

// --- リクエスト型 ---

/// リスティング一覧のクエリ
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListingsQuery {
    /// エコシステム ID（UUID。slug は不可）
    pub ecosystem_id: Option<String>,
    /// 前回のレスポンスの `meta.cursors.next` / `previous`
    pub cursor:       Option<String>,
    /// 1 ページの件数
    pub limit:        Option<String>,
}

/// リスティング詳細のクエリ
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListingQuery {
    pub ecosystem_id: Option<String>,
}

// --- レスポンス型 ---

/// 上流の `{ data: Ecosystem }` / `{ data: Listing }`（ドキュメント用）
#[derive(Debug, Serialize, ToSchema)]
pub struct UpstreamDataEnvelope {
    #[schema(value_type = Object)]
    pub data: Value,
}

/// 上流の `{ data: Listing[], meta }`（ドキュメント用）
#[derive(Debug, Serialize, ToSchema)]
pub struct UpstreamListingsEnvelope {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
    pub meta: PaginationMeta,
}

/// マストヘッドデータ
#[derive(Debug, Serialize, ToSchema)]
pub struct MastheadData {
    pub title:                String,
    pub description:          String,
    pub background_color:     Option<String>,
    pub background:           Option<String>,
    pub background_image_url: Option<String>,
    pub overlay:              Option<String>,
    pub text_color:           String,
    pub stats_label:          Option<String>,
    pub website:              Option<String>,
    pub show_decorations:     bool,
}

impl From<MastheadTheme> for MastheadData {
    fn from(theme: MastheadTheme) -> Self {
        Self {
            title:                theme.title,
            description:          theme.description,
            background_color:     theme.background_color,
            background:           theme.background,
            background_image_url: theme.background_image_url,
            overlay:              theme.overlay,
            text_color:           theme.text_color,
            stats_label:          theme.stats_label,
            website:              theme.website,
            show_decorations:     theme.show_decorations,
        }
    }
}

// --- ハンドラ ---

/// GET /api/ecosystem/{id}
///
/// エコシステム設定を取得する。
#[utoipa::path(
   get,
   path = "/api/ecosystem/{id}",
   tag = "ecosystem",
   params(("id" = String, Path, description = "エコシステム ID")),
   responses(
      (status = 200, description = "エコシステム設定（上流のボディそのまま）", body = UpstreamDataEnvelope),
      (status = 400, description = "ID が空・長すぎる", body = ErrorResponse),
      (status = 404, description = "エコシステムが存在しない", body = ErrorResponse),
      (status = 500, description = "BFF 内部エラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_ecosystem(
    State(state): State<Arc<EcosystemState>>,
    Path(id): Path<String>,
) -> Result<Response, Response> {
    let ecosystem_id = path_id::<EcosystemId>(&id, "ecosystem ID")?;

    let body = state
        .ecosystem_client
        .get_ecosystem(&ecosystem_id)
        .await
        .map_err(|e| log_and_convert_upstream_error("エコシステム取得", e))?;

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /api/ecosystem/listings
///
/// リスティング一覧を 1 ページ取得する。
#[utoipa::path(
   get,
   path = "/api/ecosystem/listings",
   tag = "listings",
   params(ListingsQuery),
   responses(
      (status = 200, description = "リスティング一覧（上流のボディそのまま）", body = UpstreamListingsEnvelope),
      (status = 400, description = "ecosystemId の欠落・limit の不正", body = ErrorResponse),
      (status = 404, description = "エコシステムが存在しない", body = ErrorResponse),
      (status = 500, description = "BFF 内部エラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_listings(
    State(state): State<Arc<EcosystemState>>,
    Query(query): Query<ListingsQuery>,
) -> Result<Response, Response> {
    let ecosystem_id = required_ecosystem_id(query.ecosystem_id)?;
    let limit = parse_limit(query.limit.as_deref(), state.listings_page_limit)?;
    let cursor = query
        .cursor
        .filter(|c| !c.is_empty())
        .map(Cursor::new);

    let body = state
        .ecosystem_client
        .list_listings(&ecosystem_id, cursor.as_ref(), limit)
        .await
        .map_err(|e| log_and_convert_upstream_error("リスティング一覧取得", e))?;

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /api/ecosystem/listings/{id}
///
/// リスティング詳細を取得する。
#[utoipa::path(
   get,
   path = "/api/ecosystem/listings/{id}",
   tag = "listings",
   params(("id" = String, Path, description = "リスティング ID"), ListingQuery),
   responses(
      (status = 200, description = "リスティング詳細（上流のボディそのまま）", body = UpstreamDataEnvelope),
      (status = 400, description = "ecosystemId またはリスティング ID の欠落", body = ErrorResponse),
      (status = 404, description = "リスティングが存在しない", body = ErrorResponse),
      (status = 500, description = "BFF 内部エラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_listing(
    State(state): State<Arc<EcosystemState>>,
    Path(id): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Result<Response, Response> {
    let ecosystem_id = required_ecosystem_id(query.ecosystem_id)?;
    let listing_id = path_id::<ListingId>(&id, "listing ID")?;

    let body = state
        .ecosystem_client
        .get_listing(&ecosystem_id, &listing_id)
        .await
        .map_err(|e| log_and_convert_upstream_error("リスティング詳細取得", e))?;

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /api/masthead/{id}
///
/// エコシステム設定からマストヘッドの表示テーマを解決する。
#[utoipa::path(
   get,
   path = "/api/masthead/{id}",
   tag = "ecosystem",
   params(("id" = String, Path, description = "エコシステム ID")),
   responses(
      (status = 200, description = "解決済みのマストヘッド", body = ApiResponse<MastheadData>),
      (status = 404, description = "エコシステムが存在しない", body = ErrorResponse),
      (status = 500, description = "BFF 内部エラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_masthead(
    State(state): State<Arc<EcosystemState>>,
    Path(id): Path<String>,
) -> Result<Response, Response> {
    let ecosystem_id = path_id::<EcosystemId>(&id, "ecosystem ID")?;

    let body = state
        .ecosystem_client
        .get_ecosystem(&ecosystem_id)
        .await
        .map_err(|e| log_and_convert_upstream_error("マストヘッド取得", e))?;

    let ecosystem = serde_json::from_value::<ApiResponse<Ecosystem>>(body)
        .map_err(|e| {
            log_and_convert_upstream_error(
                "マストヘッド取得",
                UpstreamError::Unexpected(format!("エコシステム設定を解釈できません: {e}")),
            )
        })?
        .into_data();

    let theme = MastheadTheme::resolve(&ecosystem);
    Ok((StatusCode::OK, Json(ApiResponse::new(MastheadData::from(theme)))).into_response())
}

// --- ヘルパー ---

/// パスの ID を読む。空白だけなら `Missing <label>`、長すぎれば `Invalid <label>`
fn path_id<T: FromStr>(value: &str, label: &str) -> Result<T, Response> {
    if value.trim().is_empty() {
        return Err(bad_request_response(format!("Missing {label}")));
    }
    value
        .parse()
        .map_err(|_| bad_request_response(format!("Invalid {label}")))
}

fn required_ecosystem_id(value: Option<String>) -> Result<EcosystemId, Response> {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| missing_parameter_response("ecosystemId"))?;
    EcosystemId::new(value).map_err(|_| bad_request_response("Invalid ecosystemId parameter"))
}

/// `limit` を読む。未指定・空なら `default`、正の整数でなければ 400
fn parse_limit(value: Option<&str>, default: u32) -> Result<u32, Response> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| bad_request_response(format!("Invalid limit parameter: {raw}"))),
    }
}
