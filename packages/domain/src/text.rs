//! # 表示用テキストの整形
//!
//! 上流の設定値をそのまま画面に出す前に通す小さな変換群。
//! どれも失敗しない（不正な入力は素通しか空文字になる）。

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::listing_naming::ListingNaming;

/// Cloudinary 上の画像 URL の共通部分
pub const CLOUDINARY_UPLOAD_BASE: &str = "https://res.cloudinary.com/apideck/image/upload/";

/// 静的な正規表現をコンパイルする
///
/// パターンはすべてリテラルなので、失敗はテストで検出される実装ミスに限られる。
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("invalid built-in pattern {pattern:?}: {e}"),
    }
}

static HEX_WITHOUT_HASH: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9A-Fa-f]{3,8}$"));

/// カラーコードに `#` を補う
///
/// - 空・未指定 → `None`
/// - `#` で始まる → そのまま
/// - `#` なしの 3〜8 桁の 16 進数 → 先頭に `#` を付ける
/// - それ以外（`rgb(...)` や色名など）→ そのまま
pub fn ensure_hex_color(color: Option<&str>) -> Option<String> {
    let color = color.filter(|c| !c.is_empty())?;

    if !color.starts_with('#') && HEX_WITHOUT_HASH.is_match(color) {
        return Some(format!("#{color}"));
    }
    Some(color.to_string())
}

/// 先頭の 1 文字だけ大文字にする
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cloudinary の画像 URL に幅指定と自動フォーマットの変換を差し込む
///
/// GIF と Cloudinary 以外の URL は変換しない。`width` が `None` なら `w_auto`。
///
/// ```rust
/// use ecostarter_domain::text::transform_cloudinary_image;
///
/// assert_eq!(
///     transform_cloudinary_image(
///         Some("https://res.cloudinary.com/apideck/image/upload/v1/logo.png"),
///         Some(1920),
///     ),
///     Some("https://res.cloudinary.com/apideck/image/upload/w_1920,f_auto/v1/logo.png".to_string())
/// );
/// ```
pub fn transform_cloudinary_image(src: Option<&str>, width: Option<u32>) -> Option<String> {
    let src = src.filter(|s| !s.is_empty())?;

    if src.ends_with(".gif") || !src.contains("https://res.cloudinary.com") {
        return Some(src.to_string());
    }

    let file_id = src
        .split_once(CLOUDINARY_UPLOAD_BASE)
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty());

    let Some(file_id) = file_id else {
        return Some(src.to_string());
    };

    let width = width.map_or_else(|| "auto".to_string(), |w| w.to_string());
    Some(format!("{CLOUDINARY_UPLOAD_BASE}w_{width},f_auto/{file_id}"))
}

/// [`inject_tags`] に渡す置換値
#[derive(Debug, Clone, Copy)]
pub struct TagContext<'a> {
    pub ecosystem_name: &'a str,
    pub naming:         ListingNaming,
    pub category_name:  Option<&'a str>,
    pub listing_name:   Option<&'a str>,
}

impl<'a> TagContext<'a> {
    pub fn new(ecosystem_name: &'a str, naming: ListingNaming) -> Self {
        Self {
            ecosystem_name,
            naming,
            category_name: None,
            listing_name: None,
        }
    }

    pub fn with_category(mut self, category_name: &'a str) -> Self {
        self.category_name = Some(category_name);
        self
    }

    pub fn with_listing(mut self, listing_name: &'a str) -> Self {
        self.listing_name = Some(listing_name);
        self
    }
}

static ECOSYSTEM_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)%ecosystem%"));
static CATEGORY_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)%category%"));
static LISTING_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)%listing%"));
static LISTING_NAMING_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)%listing_naming%"));

/// 設定文言中のタグを置き換える
///
/// | タグ | 置換値 |
/// |------|--------|
/// | `%ecosystem%` | エコシステム名 |
/// | `%category%` | カテゴリ名（指定時のみ） |
/// | `%listing%` | リスティング名（指定時のみ） |
/// | `%listing_naming%` | 呼び名の複数形ラベル |
///
/// タグの大文字小文字は区別しない。`text` が未指定なら空文字。
pub fn inject_tags(text: Option<&str>, context: &TagContext<'_>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let mut result = ECOSYSTEM_TAG
        .replace_all(text, NoExpand(context.ecosystem_name))
        .into_owned();

    if let Some(category) = context.category_name {
        result = CATEGORY_TAG
            .replace_all(&result, NoExpand(category))
            .into_owned();
    }
    if let Some(listing) = context.listing_name {
        result = LISTING_TAG.replace_all(&result, NoExpand(listing)).into_owned();
    }

    LISTING_NAMING_TAG
        .replace_all(&result, NoExpand(context.naming.label()))
        .into_owned()
}

/// Markdown の置換規則（上から順に適用する）
static MARKDOWN_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // 見出し
        (r"#{1,6}\s+", ""),
        // 画像はリンクより先に消す
        (r"!\[.*?\]\(.*?\)", ""),
        // 強調
        (r"\*\*\*(.+?)\*\*\*", "$1"),
        (r"\*\*(.+?)\*\*", "$1"),
        (r"\*(.+?)\*", "$1"),
        (r"___(.+?)___", "$1"),
        (r"__(.+?)__", "$1"),
        (r"_(.+?)_", "$1"),
        // リンクはテキストだけ残す
        (r"\[(.+?)\]\(.+?\)", "$1"),
        (r"`(.+?)`", "$1"),
        // 引用・リスト
        (r"(?m)^\s*>\s+", ""),
        (r"(?m)^\s*[-*+]\s+", ""),
        (r"(?m)^\s*\d+\.\s+", ""),
        // 空行
        (r"\n\s*\n", "\n"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (compile(pattern), replacement))
    .collect()
});

/// Markdown の書式を取り除いたプレーンテキストにする（カードのプレビュー用）
pub fn strip_markdown(text: &str) -> String {
    let stripped = MARKDOWN_RULES
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        });
    stripped.trim().to_string()
}
