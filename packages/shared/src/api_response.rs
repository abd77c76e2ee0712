//! # データエンベロープ
//!
//! Ecosystem API と BFF が共通で使う `{ "data": T }` 形式のレスポンス型。

use serde::{Deserialize, Serialize};

/// `{ "data": T }` 形式のレスポンス
///
/// Ecosystem API の単体取得系エンドポイント（エコシステム取得・リスティング取得）は
/// すべてこの形式で返す。BFF は受け取ったボディをそのまま中継するため、
/// この型は主にクライアント側（プロキシクライアント・マストヘッド解決）で使う。
///
/// 未知のフィールドは無視する（上流が `meta` 等を追加しても壊れない）。
///
/// ## 使用例
///
/// ```
/// use ecostarter_shared::ApiResponse;
///
/// let response = ApiResponse::new("hello");
/// assert_eq!(response.into_data(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// エンベロープを剥がして中身を取り出す
    pub fn into_data(self) -> T {
        self.data
    }

    /// 中身だけを変換する
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse { data: f(self.data) }
    }
}
