//! # OpenAPI 仕様定義
//!
//! utoipa で BFF の OpenAPI 仕様を Rust の型から生成する。
//! `ApiDoc::openapi()` でドキュメントを取得できる。

use ecostarter_shared::{ErrorResponse, HealthResponse, ReadinessResponse};
use utoipa::OpenApi;

use crate::handler::{ecosystem, health, preview};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Ecostarter BFF",
      version = "0.1.0",
      description = "エコシステム連携スターターキットの BFF API。Ecosystem REST API への転送と表示用の補助エンドポイントを提供する"
   ),
   paths(
      // health
      health::health_check,
      health::readiness_check,
      // ecosystem
      ecosystem::get_ecosystem,
      ecosystem::get_masthead,
      // listings
      ecosystem::list_listings,
      ecosystem::get_listing,
      // preview
      preview::list_preview_ecosystems,
      preview::get_embed,
      // session
      preview::clear_session,
   ),
   components(schemas(
      ErrorResponse,
      HealthResponse,
      ReadinessResponse,
      ecosystem::UpstreamDataEnvelope,
      ecosystem::UpstreamListingsEnvelope,
      ecosystem::MastheadData,
      preview::PreviewCatalogData,
      preview::EmbedTargetData,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "ecosystem", description = "エコシステム設定"),
      (name = "listings", description = "リスティング"),
      (name = "preview", description = "プレビュー用カタログと埋め込み"),
      (name = "session", description = "プレビューセッション"),
   )
)]
pub struct ApiDoc;
