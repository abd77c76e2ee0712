//! # Ecostarter 共有ユーティリティ
//!
//! BFF とドメイン層の双方から使われる、ビジネスロジックを含まない型を提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, bff）から依存される
//! - Ecosystem API のレスポンス形状（`{ data }` / `{ data, meta }`）と
//!   BFF のエラーボディ形状（`{ error, detail }`）をここで一元管理する
//! - axum などの Web フレームワークには依存しない

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;
pub mod paginated_response;

pub use api_response::ApiResponse;
pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use paginated_response::{CursorsMeta, PaginatedResponse, PaginationMeta};
