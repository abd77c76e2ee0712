//! # ページネーション付きレスポンス
//!
//! Ecosystem API のカーソルベースページネーション形式。

use serde::{Deserialize, Serialize};

/// ページネーション付きレスポンス
///
/// `ApiResponse<T>` が単一データ用であるのに対し、
/// `PaginatedResponse<T>` はリスト + カーソルのページネーション形式。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "meta": { "cursors": { "next": "opaque", "previous": null } }
/// }
/// ```
///
/// `next` / `previous` が欠けている（または `null`）場合、その方向にページは存在しない。
/// `meta` 自体が欠けていても単一ページとして扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginatedResponse<T> {
   pub data: Vec<T>,
   #[serde(default)]
   pub meta: PaginationMeta,
}

/// ページネーションのメタ情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginationMeta {
   #[serde(default)]
   pub cursors: CursorsMeta,
}

/// 上流が発行した不透明なカーソル
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CursorsMeta {
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub next:     Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub previous: Option<String>,
}
