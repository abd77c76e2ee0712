/// Ecosystem API が発行する文字列 ID の Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ、`#[serde(transparent)]`）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: 空白だけの値の拒否 + 最大長チェック（値そのものは加工しない）
/// - `as_str()` / `into_string()`
/// - `FromStr`（`new()` に委譲）
///
/// ID の形式（UUID / cuid / slug）は上流の都合で変わるため、中身の文字種は検証しない。
/// URL に埋め込む側でパーセントエンコードすること。
///
/// # 使用例
///
/// ```rust
/// use ecostarter_domain::ecosystem::EcosystemId;
///
/// let id: EcosystemId = "cjm81i5c9wnbl0931dvhgawzu".parse().unwrap();
/// assert_eq!(id.as_str(), "cjm81i5c9wnbl0931dvhgawzu");
/// assert!("   ".parse::<EcosystemId>().is_err());
/// ```
macro_rules! define_validated_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();

                if value.trim().is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                if value.chars().count() > $max_length {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は {} 文字以内である必要があります",
                        $label, $max_length
                    )));
                }

                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::str::FromStr for $Name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}
