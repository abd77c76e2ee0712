//! # ドメイン層エラー定義
//!
//! ドメイン層の計算（配色・ページング・書式整形）は失敗しない設計のため、
//! エラーになるのは値オブジェクトの生成時の検証のみ。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 識別子などの入力値の検証失敗 |
//!
//! ```rust
//! use ecostarter_domain::{DomainError, ecosystem::EcosystemId};
//!
//! let err = EcosystemId::new("   ").unwrap_err();
//! assert!(matches!(err, DomainError::Validation(_)));
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// - 必須の識別子が空
    /// - 文字数制限の超過
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
