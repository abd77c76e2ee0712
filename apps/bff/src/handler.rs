//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `ecosystem`: Ecosystem API の転送とマストヘッド
//! - `preview`: プレビュー用カタログ・埋め込み対象・セッション

pub mod ecosystem;
pub mod health;
pub mod preview;

pub use ecosystem::{EcosystemState, get_ecosystem, get_listing, get_masthead, list_listings};
pub use health::{ReadinessState, health_check, readiness_check};
pub use preview::{clear_session, get_embed, list_preview_ecosystems};
