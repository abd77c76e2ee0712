//! # Ecostarter ドメイン層
//!
//! エコシステム連携スターターキットの表示ロジックと状態機械を定義する。
//! HTTP やブラウザには依存せず、すべて純粋な計算として扱う。
//!
//! ## 依存関係の方向
//!
//! ```text
//! bff → domain
//!   ↘ shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`color`] / [`contrast`] - 色の解析と、背景に対して読める文字色の解決
//! - [`pagination`] - カーソルページングの状態機械（古い結果の破棄を含む）
//! - [`ecosystem`] / [`listing`] - 上流 API のモデルと表示設定の既定値補完
//! - [`masthead`] - ヒーロー領域の表示テーマ
//! - [`text`] / [`listing_naming`] - 表示文言の整形
//! - [`preview`] / [`session`] - 埋め込みデモのカタログとプレビューセッション
//! - [`debounce`] / [`clock`] - 入力のデバウンスと時刻の抽象化
//! - [`error`] - ドメイン層のエラー
//!
//! ## 使用例
//!
//! ```rust
//! use ecostarter_domain::{contrast::resolve_text_color, pagination::CursorPager};
//!
//! assert_eq!(resolve_text_color("#ffffff", None, false), "#1f2937");
//!
//! let pager = CursorPager::new("cjm81i5c9wnbl0931dvhgawzu");
//! assert!(!pager.has_next());
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod color;
pub mod contrast;
pub mod debounce;
pub mod ecosystem;
pub mod error;
pub mod listing;
pub mod listing_naming;
pub mod masthead;
pub mod pagination;
pub mod preview;
pub mod session;
pub mod text;

pub use error::DomainError;
